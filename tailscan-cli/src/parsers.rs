use data_error::{Result, TailscanError};

/// Parse a `-t` window value: a positive number of minutes, with or
/// without an `m` suffix (`10m` and `10` are both accepted).
pub fn parse_minutes(value: &str) -> Result<i64> {
    value
        .trim()
        .trim_end_matches('m')
        .parse::<i64>()
        .ok()
        .filter(|minutes| *minutes > 0)
        .ok_or_else(|| TailscanError::Parse(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_with_suffix_should_parse() {
        assert_eq!(
            parse_minutes("10m").expect("`10m` is a valid window"),
            10
        );
    }

    #[test]
    fn bare_minutes_should_parse() {
        assert_eq!(parse_minutes("90").expect("`90` is a valid window"), 90);
    }

    #[test]
    fn garbage_should_fail() {
        for value in ["", "m", "ten", "-5", "0", "1h"] {
            assert!(
                matches!(
                    parse_minutes(value),
                    Err(TailscanError::Parse(_))
                ),
                "{:?} should not parse",
                value
            );
        }
    }
}
