use std::fmt;

/// Money is represented as integer cents to avoid floating-point precision issues.
/// 1 currency unit = 100 cents, so ₱50.00 = 5000 cents.
pub type Cents = i64;

/// Largest amount a single transaction may carry: ₱9,999,999.00.
pub const MAX_AMOUNT_CENTS: Cents = 999_999_900;

/// Format cents as a human-readable currency string.
/// Example: 5000 -> "50.00", -1234 -> "-12.34"
pub fn format_cents(cents: Cents) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs_cents = cents.abs();
    let units = abs_cents / 100;
    let remainder = abs_cents % 100;
    format!("{}{}.{:02}", sign, units, remainder)
}

/// Parse a decimal string into cents, rounding half-up past two decimals.
/// Example: "50.00" -> 5000, "12.5" -> 1250, "100.505" -> 10051
///
/// Inputs wider than `i64` saturate instead of failing: a number that large
/// is still numeric, and range checks belong to the validation layer.
pub fn parse_amount(input: &str) -> Result<Cents, ParseAmountError> {
    let input = input.trim();
    // At most one leading sign; a second one falls through to the digit
    // checks and fails.
    let (negative, input) = match input.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, input.strip_prefix('+').unwrap_or(input)),
    };
    if input.is_empty() || input == "." {
        return Err(ParseAmountError::InvalidFormat);
    }

    let parts: Vec<&str> = input.split('.').collect();
    let (units_str, decimal_str) = match parts.len() {
        1 => (parts[0], ""),
        2 => (parts[0], parts[1]),
        _ => return Err(ParseAmountError::InvalidFormat),
    };

    let units = parse_units(units_str)?;

    if !decimal_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseAmountError::InvalidFormat);
    }
    let decimal_cents: i64 = match decimal_str.len() {
        0 => 0,
        // Single digit like "5" means 50 cents
        1 => decimal_str.parse::<i64>().unwrap_or(0) * 10,
        _ => {
            let mut cents: i64 = decimal_str[..2]
                .parse()
                .map_err(|_| ParseAmountError::InvalidFormat)?;
            // Half-up on the third digit; trailing digits cannot pull it back.
            if decimal_str.len() > 2 && decimal_str.as_bytes()[2] >= b'5' {
                cents += 1;
            }
            cents
        }
    };

    let cents = units.saturating_mul(100).saturating_add(decimal_cents);
    Ok(if negative { cents.saturating_neg() } else { cents })
}

/// Parse the integer part, saturating on overflow so the amount still reads
/// as numeric and trips the range check downstream.
fn parse_units(units_str: &str) -> Result<i64, ParseAmountError> {
    if units_str.is_empty() {
        return Ok(0);
    }
    if !units_str.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseAmountError::InvalidFormat);
    }
    Ok(units_str.parse().unwrap_or(i64::MAX / 100))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    InvalidFormat,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::InvalidFormat => write!(f, "invalid money format"),
        }
    }
}

impl std::error::Error for ParseAmountError {}
