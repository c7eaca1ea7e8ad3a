/// Renders a real the way the readout shows it: whole values keep one
/// fractional digit (`24.0`, `0.0`), everything else uses the shortest exact
/// decimal form (`19.5`, `55.5`).
pub fn format_real(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod format_test {
    use super::format_real;

    #[test]
    fn test_whole_values_keep_one_digit() {
        assert_eq!(format_real(0.0), "0.0");
        assert_eq!(format_real(24.0), "24.0");
        assert_eq!(format_real(-3.0), "-3.0");
    }

    #[test]
    fn test_fractional_values() {
        assert_eq!(format_real(19.5), "19.5");
        assert_eq!(format_real(55.5), "55.5");
        assert_eq!(format_real(0.1 + 0.2), "0.30000000000000004");
    }
}
