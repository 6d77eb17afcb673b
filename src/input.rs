// Validated console input
//
// Parsing is split from prompting: the parse_* functions are pure and return
// an explicit outcome instead of panicking or raising, and the prompt_*
// helpers wrap them in the retry loop the console drivers share. Nothing in
// the domain modules ever touches stdin.

use std::io::{self, BufRead, Write};

// ============================================================================
// PARSE OUTCOME
// ============================================================================

/// Result of parsing one line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseOutcome<T> {
    /// Parsed and within range
    Ok(T),

    /// Not a number at all (or not an integer where one was required)
    InvalidFormat,

    /// A number, but outside the accepted range
    OutOfRange,
}

impl<T> ParseOutcome<T> {
    pub fn ok(self) -> Option<T> {
        match self {
            ParseOutcome::Ok(value) => Some(value),
            _ => None,
        }
    }
}

// ============================================================================
// PARSERS
// ============================================================================

/// Parse a whole number within `[min, max]`.
pub fn parse_int_in_range(input: &str, min: i64, max: i64) -> ParseOutcome<i64> {
    match input.trim().parse::<i64>() {
        Ok(value) if value >= min && value <= max => ParseOutcome::Ok(value),
        Ok(_) => ParseOutcome::OutOfRange,
        Err(_) => ParseOutcome::InvalidFormat,
    }
}

/// Parse a strictly positive amount. Accepts plain decimals only; infinities
/// and NaN count as malformed.
pub fn parse_positive_amount(input: &str) -> ParseOutcome<f64> {
    match input.trim().parse::<f64>() {
        Ok(value) if !value.is_finite() => ParseOutcome::InvalidFormat,
        Ok(value) if value > 0.0 => ParseOutcome::Ok(value),
        Ok(_) => ParseOutcome::OutOfRange,
        Err(_) => ParseOutcome::InvalidFormat,
    }
}

/// Trimmed input, or None when nothing but whitespace was entered.
pub fn non_empty(input: &str) -> Option<&str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

// ============================================================================
// PROMPT LOOPS
// ============================================================================

fn read_line() -> io::Result<String> {
    let mut line = String::new();
    let bytes = io::stdin().lock().read_line(&mut line)?;
    if bytes == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }
    Ok(line)
}

/// Prompt until a whole number in `[min, max]` is entered.
pub fn prompt_int_in_range(prompt: &str, min: i64, max: i64) -> io::Result<i64> {
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;

        match parse_int_in_range(&read_line()?, min, max) {
            ParseOutcome::Ok(value) => return Ok(value),
            ParseOutcome::InvalidFormat => println!("  enter a whole number"),
            ParseOutcome::OutOfRange => {
                println!("  enter a number between {} and {}", min, max)
            }
        }
    }
}

/// Prompt until a strictly positive amount is entered.
pub fn prompt_positive_amount(prompt: &str) -> io::Result<f64> {
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;

        match parse_positive_amount(&read_line()?) {
            ParseOutcome::Ok(value) => return Ok(value),
            ParseOutcome::InvalidFormat => println!("  enter a number"),
            ParseOutcome::OutOfRange => println!("  amount must be positive"),
        }
    }
}

/// Prompt until a non-empty line is entered.
pub fn prompt_non_empty(prompt: &str) -> io::Result<String> {
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;

        if let Some(value) = non_empty(&read_line()?) {
            return Ok(value.to_string());
        }
        println!("  value must not be empty");
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_in_range() {
        assert_eq!(parse_int_in_range("5", 1, 10), ParseOutcome::Ok(5));
        assert_eq!(parse_int_in_range("  7 \n", 1, 10), ParseOutcome::Ok(7));
        assert_eq!(parse_int_in_range("1", 1, 10), ParseOutcome::Ok(1));
        assert_eq!(parse_int_in_range("10", 1, 10), ParseOutcome::Ok(10));
    }

    #[test]
    fn test_parse_int_out_of_range() {
        assert_eq!(parse_int_in_range("0", 1, 10), ParseOutcome::OutOfRange);
        assert_eq!(parse_int_in_range("11", 1, 10), ParseOutcome::OutOfRange);
        assert_eq!(parse_int_in_range("-3", 1, 10), ParseOutcome::OutOfRange);
    }

    #[test]
    fn test_parse_int_invalid_format() {
        assert_eq!(parse_int_in_range("", 1, 10), ParseOutcome::InvalidFormat);
        assert_eq!(parse_int_in_range("abc", 1, 10), ParseOutcome::InvalidFormat);
        assert_eq!(parse_int_in_range("3.5", 1, 10), ParseOutcome::InvalidFormat);
        assert_eq!(parse_int_in_range("5x", 1, 10), ParseOutcome::InvalidFormat);
    }

    #[test]
    fn test_parse_positive_amount() {
        assert_eq!(parse_positive_amount("100"), ParseOutcome::Ok(100.0));
        assert_eq!(parse_positive_amount("0.5"), ParseOutcome::Ok(0.5));
        assert_eq!(parse_positive_amount(" 12.75 "), ParseOutcome::Ok(12.75));
    }

    #[test]
    fn test_parse_positive_amount_rejects_zero_and_negative() {
        assert_eq!(parse_positive_amount("0"), ParseOutcome::OutOfRange);
        assert_eq!(parse_positive_amount("-1.5"), ParseOutcome::OutOfRange);
    }

    #[test]
    fn test_parse_positive_amount_rejects_garbage() {
        assert_eq!(parse_positive_amount("ten"), ParseOutcome::InvalidFormat);
        assert_eq!(parse_positive_amount(""), ParseOutcome::InvalidFormat);
        assert_eq!(parse_positive_amount("NaN"), ParseOutcome::InvalidFormat);
        assert_eq!(parse_positive_amount("inf"), ParseOutcome::InvalidFormat);
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("Ivanov"), Some("Ivanov"));
        assert_eq!(non_empty("  Ivanov  "), Some("Ivanov"));
        assert_eq!(non_empty(""), None);
        assert_eq!(non_empty("   \n"), None);
    }

    #[test]
    fn test_outcome_ok_helper() {
        assert_eq!(ParseOutcome::Ok(3).ok(), Some(3));
        assert_eq!(ParseOutcome::<i64>::InvalidFormat.ok(), None);
        assert_eq!(ParseOutcome::<i64>::OutOfRange.ok(), None);
    }
}
