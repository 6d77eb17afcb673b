// SQLite persistence for the client roster
//
// One table, full rewrite per save. The schema is created if absent on every
// open; there is no versioning and no migration. The store always holds the
// bonus-free base amount: VIP records are flattened on save and rebuilt with
// the flat bonus on load, so `load(save(roster)) == roster` up to row-id
// reassignment.

use crate::bonus::Tier;
use crate::roster::{ClientRecord, ClientRoster};
use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, Connection};
use std::path::Path;

/// Create the clients table if it does not exist yet.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS clients (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            is_vip INTEGER NOT NULL,
            name TEXT NOT NULL,
            rate INTEGER NOT NULL,
            amount_base INTEGER NOT NULL
        )",
        [],
    )
    .context("Failed to create clients table")?;

    Ok(())
}

/// Replace the store's contents with the roster.
///
/// The delete + inserts run inside a single transaction: a failed save rolls
/// back and leaves the previous contents intact. Row order follows roster
/// order, so the autoincrement id preserves it for the next load.
pub fn save_roster(conn: &mut Connection, roster: &ClientRoster) -> Result<()> {
    ensure_schema(conn)?;

    let tx = conn.transaction().context("Failed to begin save transaction")?;

    tx.execute("DELETE FROM clients", [])
        .context("Failed to clear clients table")?;

    {
        let mut stmt = tx
            .prepare("INSERT INTO clients (is_vip, name, rate, amount_base) VALUES (?1, ?2, ?3, ?4)")
            .context("Failed to prepare insert statement")?;

        for record in roster.iter() {
            // The store holds the bonus-free base, never the runtime amount
            stmt.execute(params![
                record.tier().is_privileged() as i64,
                record.name(),
                record.rate(),
                record.base_amount(),
            ])
            .with_context(|| format!("Failed to insert client '{}'", record.name()))?;
        }
    }

    tx.commit().context("Failed to commit save transaction")?;

    Ok(())
}

/// Read the whole store back into a fresh roster, in ascending row-id order.
///
/// Ordinary rows come back with amount = stored base; VIP rows are
/// rematerialized as base + 1000.
pub fn load_roster(conn: &Connection) -> Result<ClientRoster> {
    ensure_schema(conn)?;

    let mut stmt = conn
        .prepare("SELECT is_vip, name, rate, amount_base FROM clients ORDER BY id")
        .context("Failed to prepare select statement")?;

    let records = stmt
        .query_map([], |row| {
            let is_vip: i64 = row.get(0)?;
            let tier = if is_vip != 0 {
                Tier::Privileged
            } else {
                Tier::Ordinary
            };

            Ok(ClientRecord::from_stored(
                tier,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
            ))
        })
        .context("Failed to query clients")?
        .collect::<Result<Vec<_>, _>>()
        .context("Failed to read client row")?;

    let mut roster = ClientRoster::new();
    for record in records {
        roster.add(record);
    }

    Ok(roster)
}

/// Open (or create) the database file, save, and close it within this call.
pub fn save_to_path(path: &Path, roster: &ClientRoster) -> Result<()> {
    let mut conn = Connection::open(path)
        .with_context(|| format!("Failed to open database at {}", path.display()))?;

    save_roster(&mut conn, roster)
}

/// Open the database file, load, and close it within this call.
pub fn load_from_path(path: &Path) -> Result<ClientRoster> {
    let conn = Connection::open(path)
        .with_context(|| format!("Failed to open database at {}", path.display()))?;

    load_roster(&conn)
}

/// Write a human-readable JSON snapshot of the roster, stamped with the
/// export time. A convenience companion to the SQLite store; there is no
/// JSON load path.
pub fn export_json(path: &Path, roster: &ClientRoster) -> Result<()> {
    let snapshot = serde_json::json!({
        "exported_at": Utc::now().to_rfc3339(),
        "client_count": roster.len(),
        "clients": roster.iter().collect::<Vec<_>>(),
    });

    let text = serde_json::to_string_pretty(&snapshot)
        .context("Failed to serialize roster snapshot")?;

    std::fs::write(path, text)
        .with_context(|| format!("Failed to write snapshot to {}", path.display()))?;

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
