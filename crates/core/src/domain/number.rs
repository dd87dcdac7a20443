// Decimal input parsing (comma or period as decimal separator)

use super::error::{DomainError, Result};

/// Parse a user-typed decimal number
///
/// Surrounding whitespace is ignored and every `,` is read as `.`,
/// so both `12.5` and `12,5` yield 12.5.
pub fn parse_decimal(input: &str) -> Result<f64> {
    let normalized = input.trim().replace(',', ".");
    normalized
        .parse::<f64>()
        .map_err(|_| DomainError::InvalidNumber {
            input: input.trim().to_string(),
        })
}

/// Parse a comma-separated line of signed percentages
///
/// Blank entries are skipped. A single bad entry rejects the whole line.
///
/// # Example
/// ```text
/// parse_percent_list("10, -20, 5") == Ok(vec![10.0, -20.0, 5.0])
/// ```
pub fn parse_percent_list(raw: &str) -> Result<Vec<f64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            parse_decimal(token).map_err(|_| DomainError::InvalidPercentList {
                token: token.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal_separators() {
        assert_eq!(parse_decimal("12.5"), Ok(12.5));
        assert_eq!(parse_decimal("12,5"), Ok(12.5));
        assert_eq!(parse_decimal("  -3,25 \n"), Ok(-3.25));
        assert_eq!(parse_decimal("7"), Ok(7.0));
    }

    #[test]
    fn test_parse_decimal_rejects_text() {
        let err = parse_decimal(" abc ").unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidNumber {
                input: "abc".to_string()
            }
        );
        assert!(parse_decimal("").is_err());
        assert!(parse_decimal("1,2,3").is_err());
    }

    #[test]
    fn test_parse_percent_list() {
        assert_eq!(parse_percent_list("10, -20, 5"), Ok(vec![10.0, -20.0, 5.0]));
        assert_eq!(parse_percent_list("  "), Ok(vec![]));
        assert_eq!(parse_percent_list("10,,5,"), Ok(vec![10.0, 5.0]));
    }

    #[test]
    fn test_parse_percent_list_rejects_whole_line() {
        let err = parse_percent_list("10, tien, 5").unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidPercentList {
                token: "tien".to_string()
            }
        );
    }
}
