// Menu-driven console driver
//
// Every menu item maps 1:1 onto a domain operation. All prompting, retry on
// bad input, and formatting happen here; validation outcomes come back from
// the domain API and are only rendered, never re-decided.

use anyhow::Result;
use std::env;
use std::path::PathBuf;

use deposit_ledger::input::{prompt_int_in_range, prompt_non_empty, prompt_positive_amount};
use deposit_ledger::{
    export_json, load_from_path, save_to_path, BonusPolicy, ClientRecord, ClientRoster,
    DepositKind, Depositor, DepositorBook, Ledger, Tier, DEFAULT_FIXED_BONUS, MAX_BASE_AMOUNT,
};

fn print_menu() {
    println!();
    println!("--- DEPOSIT LEDGER ---");
    println!(" ledger:");
    println!("   1. add client");
    println!("   2. set interest rate");
    println!("   3. open deposit");
    println!("   4. top up deposit");
    println!("   5. list clients");
    println!("   6. list deposits");
    println!("   7. total annual interest");
    println!(" depositor book:");
    println!("   8. add depositor");
    println!("   9. list depositors");
    println!("  10. total of all deposits");
    println!(" client roster:");
    println!("  11. add record");
    println!("  12. edit record");
    println!("  13. remove record");
    println!("  14. list records");
    println!("  15. save roster to database");
    println!("  16. load roster from database");
    println!("  17. export roster to JSON");
    println!("   0. exit");
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let db_path = PathBuf::from(args.get(1).map(String::as_str).unwrap_or("clients.db"));

    let mut ledger = Ledger::new();
    let mut book = DepositorBook::new();
    let mut roster = ClientRoster::new();

    println!("deposit-ledger v{}", deposit_ledger::VERSION);
    println!("database file: {}", db_path.display());

    loop {
        print_menu();
        let choice = prompt_int_in_range("your choice: ", 0, 17)?;

        match choice {
            0 => {
                println!("bye");
                break;
            }
            1 => add_client(&mut ledger)?,
            2 => set_rate(&mut ledger)?,
            3 => open_deposit(&mut ledger)?,
            4 => top_up(&mut ledger)?,
            5 => list_clients(&ledger),
            6 => list_deposits(&ledger),
            7 => println!("total annual interest: {:.2}", ledger.total_annual_interest()),
            8 => add_depositor(&mut book)?,
            9 => list_depositors(&book),
            10 => println!("total of all deposits: {:.2}", book.total()),
            11 => add_record(&mut roster)?,
            12 => edit_record(&mut roster)?,
            13 => remove_record(&mut roster)?,
            14 => list_records(&roster),
            15 => match save_to_path(&db_path, &roster) {
                Ok(()) => println!("✓ saved {} record(s)", roster.len()),
                Err(e) => println!("✗ save failed: {:#}", e),
            },
            16 => match load_from_path(&db_path) {
                Ok(loaded) => {
                    roster = loaded;
                    println!("✓ loaded {} record(s)", roster.len());
                }
                Err(e) => println!("✗ load failed: {:#}", e),
            },
            17 => {
                let json_path = db_path.with_extension("json");
                match export_json(&json_path, &roster) {
                    Ok(()) => println!("✓ exported to {}", json_path.display()),
                    Err(e) => println!("✗ export failed: {:#}", e),
                }
            }
            _ => unreachable!(),
        }
    }

    Ok(())
}

// ----------------------------------------------------------------------
// Ledger
// ----------------------------------------------------------------------

fn prompt_kind() -> Result<DepositKind> {
    let kinds = DepositKind::all();
    for (i, kind) in kinds.iter().enumerate() {
        println!("  {}. {}", i + 1, kind.as_str());
    }
    let choice = prompt_int_in_range("deposit kind: ", 1, kinds.len() as i64)?;
    Ok(kinds[(choice - 1) as usize])
}

fn add_client(ledger: &mut Ledger) -> Result<()> {
    let name = prompt_non_empty("client name: ")?;
    let passport = prompt_non_empty("passport: ")?;

    match ledger.add_client(&name, &passport) {
        Ok(()) => println!("✓ client added"),
        Err(e) => println!("✗ {}", e),
    }
    Ok(())
}

fn set_rate(ledger: &mut Ledger) -> Result<()> {
    let kind = prompt_kind()?;
    // Entered as a percentage, stored as a fraction
    let percent = prompt_positive_amount("annual rate (%): ")?;
    ledger.rates_mut().set_rate(kind, percent / 100.0);
    println!("✓ {} rate set to {}%", kind.as_str(), percent);
    Ok(())
}

fn open_deposit(ledger: &mut Ledger) -> Result<()> {
    let passport = prompt_non_empty("passport: ")?;
    let kind = prompt_kind()?;
    let amount = prompt_positive_amount("initial amount: ")?;

    match ledger.open_deposit(&passport, kind, amount) {
        Ok(()) => println!("✓ deposit opened"),
        Err(e) => println!("✗ {}", e),
    }
    Ok(())
}

fn top_up(ledger: &mut Ledger) -> Result<()> {
    let passport = prompt_non_empty("passport: ")?;
    let amount = prompt_positive_amount("top-up amount: ")?;

    match ledger.top_up(&passport, amount) {
        Ok(()) => println!("✓ deposit topped up"),
        Err(e) => println!("✗ {}", e),
    }
    Ok(())
}

fn list_clients(ledger: &Ledger) {
    if ledger.client_count() == 0 {
        println!("no clients yet");
        return;
    }
    println!("clients:");
    for client in ledger.clients() {
        println!(
            " - {} | passport: {} | deposit: {}",
            client.name(),
            client.passport(),
            if client.has_deposit() { "yes" } else { "no" }
        );
    }
}

fn list_deposits(ledger: &Ledger) {
    if ledger.deposits().is_empty() {
        println!("no deposits yet");
        return;
    }
    println!("deposits:");
    for deposit in ledger.deposits() {
        println!(
            " - passport: {} | kind: {} | amount: {:.2}",
            deposit.owner_passport(),
            deposit.kind().as_str(),
            deposit.amount()
        );
    }
}

// ----------------------------------------------------------------------
// Depositor book
// ----------------------------------------------------------------------

fn add_depositor(book: &mut DepositorBook) -> Result<()> {
    let name = prompt_non_empty("depositor name: ")?;
    let base = prompt_positive_amount("deposit amount: ")?;

    println!("  1. no bonus");
    println!("  2. fixed bonus ({:.0})", DEFAULT_FIXED_BONUS);
    let policy = match prompt_int_in_range("bonus: ", 1, 2)? {
        1 => BonusPolicy::NoBonus,
        _ => BonusPolicy::FixedBonus(DEFAULT_FIXED_BONUS),
    };

    let depositor = Depositor::new(&name, base, &policy);
    println!("✓ added with {} -> final amount {:.2}", policy.label(), depositor.amount());
    book.add(depositor);
    Ok(())
}

fn list_depositors(book: &DepositorBook) {
    if book.is_empty() {
        println!("no depositors yet");
        return;
    }
    println!("depositors:");
    for depositor in book.all() {
        println!(" - {} | amount: {:.2}", depositor.name(), depositor.amount());
    }
}

// ----------------------------------------------------------------------
// Client roster
// ----------------------------------------------------------------------

fn prompt_record() -> Result<Option<ClientRecord>> {
    let tier = match prompt_int_in_range("tier (1 = ordinary, 2 = VIP): ", 1, 2)? {
        1 => Tier::Ordinary,
        _ => Tier::Privileged,
    };
    let name = prompt_non_empty("name: ")?;
    let rate = prompt_int_in_range("rate (%): ", 1, 100)?;
    let base = prompt_int_in_range("base amount: ", 1, MAX_BASE_AMOUNT - 1)?;

    // Ranges were already enforced while prompting; the constructor is the
    // final authority either way
    match ClientRecord::new(tier, &name, rate, base) {
        Ok(record) => Ok(Some(record)),
        Err(e) => {
            println!("✗ {}", e);
            Ok(None)
        }
    }
}

fn add_record(roster: &mut ClientRoster) -> Result<()> {
    if let Some(record) = prompt_record()? {
        println!("✓ record added (runtime amount {})", record.amount());
        roster.add(record);
    }
    Ok(())
}

fn edit_record(roster: &mut ClientRoster) -> Result<()> {
    if roster.is_empty() {
        println!("roster is empty");
        return Ok(());
    }
    list_records(roster);
    let index = prompt_int_in_range("record number: ", 1, roster.len() as i64)? as usize - 1;

    if let Some(record) = prompt_record()? {
        match roster.update(index, record) {
            Ok(()) => println!("✓ record updated"),
            Err(e) => println!("✗ {}", e),
        }
    }
    Ok(())
}

fn remove_record(roster: &mut ClientRoster) -> Result<()> {
    if roster.is_empty() {
        println!("roster is empty");
        return Ok(());
    }
    list_records(roster);
    let index = prompt_int_in_range("record number: ", 1, roster.len() as i64)? as usize - 1;

    match roster.remove(index) {
        Ok(removed) => println!("✓ removed {}", removed.name()),
        Err(e) => println!("✗ {}", e),
    }
    Ok(())
}

fn list_records(roster: &ClientRoster) {
    if roster.is_empty() {
        println!("roster is empty");
        return;
    }
    println!("client roster:");
    for (i, record) in roster.iter().enumerate() {
        println!(
            " {}. {} [{}] | rate: {}% | amount: {}",
            i + 1,
            record.name(),
            record.tier().as_str(),
            record.rate(),
            record.amount()
        );
    }
    println!("total annual income: {:.2}", roster.total_income());
}
