use serde::{Serialize, Deserialize};

/// Number of digits written after the decimal point (`Scientific`, `Fixed`)
/// or significant digits (`General`).
pub const PRECISION: usize = 16;

/// Textual style used by the writer for every value.
///
/// - `Scientific`      — `d.dddde±XX` (the default)
/// - `UpperScientific` — `d.ddddE±XX`
/// - `Fixed`           — `ddd.dddd`, no exponent
/// - `General`         — exponent form for very large or small magnitudes,
///                       plain decimals otherwise; trailing zeros dropped
///
/// Exponents always carry a sign and at least two digits. Non-finite values
/// are written as `NaN`, `inf` and `-inf`, which the reader parses back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatFormat {
    #[default]
    Scientific,
    UpperScientific,
    Fixed,
    General,
}

impl FloatFormat {
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        match self {
            FloatFormat::Scientific => signed_exponent(&format!("{:.*e}", PRECISION, value), 'e'),
            FloatFormat::UpperScientific => {
                signed_exponent(&format!("{:.*e}", PRECISION, value), 'E')
            }
            FloatFormat::Fixed => format!("{:.*}", PRECISION, value),
            FloatFormat::General => general(value),
        }
    }
}

/// Rewrites Rust's `1.5e3` / `1.5e-3` exponent into `1.5e+03` / `1.5e-03`.
fn signed_exponent(formatted: &str, marker: char) -> String {
    match formatted.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{mantissa}{marker}{sign}{digits:0>2}")
        }
        None => formatted.to_string(),
    }
}

fn general(value: f64) -> String {
    let sci = format!("{:.*e}", PRECISION - 1, value);
    let exp: i32 = match sci.split_once('e') {
        Some((_, e)) => e.parse().unwrap_or(0),
        None => 0,
    };
    if exp < -4 || exp >= PRECISION as i32 {
        let (mantissa, rest) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
        signed_exponent(&format!("{}e{}", trim_zeros(mantissa), rest), 'e')
    } else {
        let decimals = (PRECISION as i32 - 1 - exp).max(0) as usize;
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
    fn scientific_pads_exponent() {
        assert_eq!(FloatFormat::Scientific.format(1.0), "1.0000000000000000e+00");
        assert_eq!(FloatFormat::Scientific.format(1234.5), "1.2345000000000000e+03");
        assert_eq!(FloatFormat::Scientific.format(-0.0078125), "-7.8125000000000000e-03");
        assert_eq!(FloatFormat::Scientific.format(-1e-7), "-9.9999999999999995e-08");
        assert_eq!(FloatFormat::Scientific.format(1e100), "1.0000000000000000e+100");
        assert_eq!(FloatFormat::Scientific.format(0.0), "0.0000000000000000e+00");
    }

    #[test]
    fn upper_scientific_uses_capital_marker() {
        assert_eq!(FloatFormat::UpperScientific.format(2.5), "2.5000000000000000E+00");
    }

    #[test]
    fn fixed_has_sixteen_decimals() {
        assert_eq!(FloatFormat::Fixed.format(0.25), "0.2500000000000000");
        assert_eq!(FloatFormat::Fixed.format(-3.0), "-3.0000000000000000");
    }

    #[test]
    fn general_drops_trailing_zeros() {
        assert_eq!(FloatFormat::General.format(1.0), "1");
        assert_eq!(FloatFormat::General.format(0.5), "0.5");
        assert_eq!(FloatFormat::General.format(0.1), "0.1");
        assert_eq!(FloatFormat::General.format(-42.0), "-42");
    }

    #[test]
    fn general_switches_to_exponent_outside_range() {
        assert_eq!(FloatFormat::General.format(1e20), "1e+20");
        assert_eq!(FloatFormat::General.format(1e-5), "1e-05");
        assert_eq!(FloatFormat::General.format(2.5e-10), "2.5e-10");
        assert_eq!(FloatFormat::General.format(1e-4), "0.0001");
    }

    #[test]
    fn non_finite_values_parse_back() {
        for v in [f64::INFINITY, f64::NEG_INFINITY] {
            let s = FloatFormat::Scientific.format(v);
            assert_eq!(s.parse::<f64>().unwrap(), v);
        }
        assert!(FloatFormat::Fixed.format(f64::NAN).parse::<f64>().unwrap().is_nan());
    }
}
