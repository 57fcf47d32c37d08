//! Вспомогательные функции и утилиты

use std::time::{Duration, Instant};

/// Измеряет время выполнения функции
pub fn measure_time<F, T>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let result = f();
    let duration = start.elapsed();
    (result, duration)
}

/// Печатает число как поток C++ по умолчанию (`%.Ng`): `digits` значащих
/// цифр, без хвостовых нулей, экспоненциальная форма для малых и больших
/// порядков.
pub fn format_general(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0".to_string() } else { "0".to_string() };
    }

    let digits = digits.max(1);
    // Округление до нужного числа цифр может поменять порядок (9.99 -> 10.0)
    let rounded = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = split_exponent(&rounded);

    if exponent < -4 || exponent >= digits as i32 {
        let mantissa = strip_trailing_zeros(mantissa);
        format!("{mantissa}e{}", c_exponent(exponent))
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Научная запись как `std::scientific`: `1.234560e-08`
pub fn format_scientific(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return non_finite(value);
    }
    let formatted = format!("{:.*e}", precision, value);
    let (mantissa, exponent) = split_exponent(&formatted);
    format!("{mantissa}e{}", c_exponent(exponent))
}

fn non_finite(value: f64) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value > 0.0 {
        "inf".to_string()
    } else {
        "-inf".to_string()
    }
}

fn split_exponent(formatted: &str) -> (&str, i32) {
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse().unwrap_or(0)),
        None => (formatted, 0),
    }
}

// Не меньше двух цифр и явный знак: e+00, e-14
fn c_exponent(exponent: i32) -> String {
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{sign}{:02}", exponent.abs())
}

fn strip_trailing_zeros(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_format_matches_stream_output() {
        assert_eq!(format_general(1.1 + 2.2, 18), "3.30000000000000027");
        assert_eq!(format_general(1e-14, 17), "1e-14");
        assert_eq!(format_general(0.1, 6), "0.1");
        assert_eq!(format_general(1e-5, 6), "1e-05");
        assert_eq!(format_general(123456789.0, 6), "1.23457e+08");
        assert_eq!(format_general(2.0, 16), "2");
        assert_eq!(format_general(0.0001, 6), "0.0001");
    }

    #[test]
    fn rounding_can_bump_the_exponent() {
        assert_eq!(format_general(999999.7, 6), "1e+06");
    }

    #[test]
    fn scientific_format_keeps_trailing_zeros() {
        assert_eq!(format_scientific(-1e-8, 6), "-1.000000e-08");
        assert_eq!(format_scientific(123.0, 6), "1.230000e+02");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_general(f64::NAN, 6), "nan");
        assert_eq!(format_scientific(f64::NEG_INFINITY, 6), "-inf");
    }

    #[test]
    fn measure_time_returns_closure_result() {
        let (value, elapsed) = measure_time(|| 6 * 7);
        assert_eq!(value, 42);
        assert!(elapsed.as_secs() < 60);
    }
}
