/// Text-to-number coercion used at submission time.
///
/// Surrounding whitespace is ignored. Empty or unparseable text yields NaN;
/// nothing is rejected or defaulted.
pub(crate) fn coerce_number(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_numbers() {
        assert_eq!(coerce_number("90"), 90.0);
        assert_eq!(coerce_number("1200.50"), 1200.5);
        assert_eq!(coerce_number("-3"), -3.0);
        assert_eq!(coerce_number("1e3"), 1000.0);
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(coerce_number("  42\t"), 42.0);
    }

    #[test]
    fn empty_and_garbage_become_nan() {
        assert!(coerce_number("").is_nan());
        assert!(coerce_number("   ").is_nan());
        assert!(coerce_number("abc").is_nan());
        assert!(coerce_number("12abc").is_nan());
        assert!(coerce_number("1,200").is_nan());
    }
}
