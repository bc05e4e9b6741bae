/// Format `value` with `digits` significant digits the way printf's `%g`
/// does: fixed notation for exponents in `-4..digits`, scientific
/// otherwise, with trailing zeros removed in both.
pub fn format_sig(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let digits = digits.max(1);
    // the exponent after rounding decides the notation
    let sci = format!("{:.*e}", digits - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((mantissa, exp)) => (mantissa, exp.parse::<i32>().unwrap_or(0)),
        None => return sci,
    };

    if exp < -4 || exp >= digits as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (digits as i32 - 1 - exp) as usize;
        trim_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_notation() {
        assert_eq!(format_sig(0.25, 8), "0.25");
        assert_eq!(format_sig(1.0, 8), "1");
        assert_eq!(format_sig(0.205, 6), "0.205");
        assert_eq!(format_sig(463.0, 6), "463");
        assert_eq!(format_sig(1.0 / 3.0, 8), "0.33333333");
        assert_eq!(format_sig(2.0 / 3.0, 6), "0.666667");
        assert_eq!(format_sig(0.0001, 6), "0.0001");
        assert_eq!(format_sig(123456.0, 6), "123456");
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(format_sig(0.00001, 6), "1e-05");
        assert_eq!(format_sig(0.000012345, 8), "1.2345e-05");
        assert_eq!(format_sig(1234567.0, 6), "1.23457e+06");
        assert_eq!(format_sig(999999.5, 6), "1e+06");
        assert_eq!(format_sig(1e120, 6), "1e+120");
    }

    #[test]
    fn test_special_values() {
        assert_eq!(format_sig(0.0, 8), "0");
        assert_eq!(format_sig(-0.5, 6), "-0.5");
        assert_eq!(format_sig(f64::NAN, 6), "nan");
        assert_eq!(format_sig(f64::INFINITY, 6), "inf");
    }
}
