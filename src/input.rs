// ⌨️  Input parsing for user-entered numeric fields
//
// The store itself accepts any value; whatever the user typed has to become a
// real number before it gets anywhere near the store. An unparseable amount is
// an error surfaced to the user, never a silent zero.

use std::fmt;

// ============================================================================
// INPUT ERROR
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct InputError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for InputError {}

// ============================================================================
// AMOUNT PARSING
// ============================================================================

/// Parse a user-entered amount for the named field.
///
/// An empty (or all-whitespace) entry parses to 0, matching the field's
/// default. Anything else must be a finite number; "NaN" and "inf" spellings
/// are rejected along with plain garbage.
pub fn parse_amount(field: &str, raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let value: f64 = trimmed.parse().map_err(|_| InputError {
        field: field.to_string(),
        message: format!("'{}' is not a number", trimmed),
    })?;

    if !value.is_finite() {
        return Err(InputError {
            field: field.to_string(),
            message: format!("'{}' is not a finite amount", trimmed),
        });
    }

    Ok(value)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_integers_and_decimals() {
        assert_eq!(parse_amount("balance", "500"), Ok(500.0));
        assert_eq!(parse_amount("balance", "12.75"), Ok(12.75));
        assert_eq!(parse_amount("balance", "-40"), Ok(-40.0));
    }

    #[test]
    fn test_parse_amount_trims_whitespace() {
        assert_eq!(parse_amount("balance", "  600 "), Ok(600.0));
    }

    #[test]
    fn test_parse_amount_empty_is_zero() {
        assert_eq!(parse_amount("balance", ""), Ok(0.0));
        assert_eq!(parse_amount("filter", "   "), Ok(0.0));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        let err = parse_amount("balance", "abc").unwrap_err();
        assert_eq!(err.field, "balance");
        assert!(err.message.contains("abc"));

        assert!(parse_amount("balance", "12x").is_err());
        assert!(parse_amount("balance", "1,200").is_err());
    }

    #[test]
    fn test_parse_amount_rejects_non_finite() {
        assert!(parse_amount("balance", "NaN").is_err());
        assert!(parse_amount("balance", "inf").is_err());
        assert!(parse_amount("balance", "-inf").is_err());
    }

    #[test]
    fn test_input_error_display_names_the_field() {
        let err = parse_amount("filter", "oops").unwrap_err();
        assert_eq!(err.to_string(), "filter: 'oops' is not a number");
    }
}
