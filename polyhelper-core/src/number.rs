//! Number type for list statistics
//!
//! JSON keeps integers and floats apart (`3` vs `3.0`), and results echo the
//! caller's form back, so a number remembers which one it was.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// Widen to f64 (large integers lose precision)
    pub fn to_f64(&self) -> f64 {
        match self {
            Number::Int(v) => *v as f64,
            Number::Float(v) => *v,
        }
    }

    /// Numeric comparison across both forms.
    ///
    /// Integer against float is exact, even past 2^53 where widening the
    /// integer would round. Floats compare with `total_cmp`, so the order is
    /// total.
    pub fn numeric_cmp(&self, other: &Number) -> Ordering {
        match (self, other) {
            (Number::Int(l), Number::Int(r)) => l.cmp(r),
            (Number::Int(l), Number::Float(r)) => cmp_int_float(*l, *r),
            (Number::Float(l), Number::Int(r)) => cmp_int_float(*r, *l).reverse(),
            (Number::Float(l), Number::Float(r)) => l.total_cmp(r),
        }
    }

    /// Add two numbers, staying integral while both sides are integers and the
    /// sum fits; otherwise the result is a float.
    pub fn add(self, other: Number) -> Number {
        match (self, other) {
            (Number::Int(l), Number::Int(r)) => match l.checked_add(r) {
                Some(sum) => Number::Int(sum),
                None => Number::Float(l as f64 + r as f64),
            },
            (l, r) => Number::Float(l.to_f64() + r.to_f64()),
        }
    }
}

/// -2^63 and 2^63 are exact in f64; every float in between truncates to an i64.
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

fn cmp_int_float(int: i64, float: f64) -> Ordering {
    if float.is_nan() {
        // Same side `total_cmp` puts a positive NaN on
        return Ordering::Less;
    }
    if float >= I64_UPPER {
        return Ordering::Less;
    }
    if float < I64_LOWER {
        return Ordering::Greater;
    }

    match int.cmp(&(float.trunc() as i64)) {
        // Same integer part, so the fraction decides
        Ordering::Equal => 0.0_f64
            .partial_cmp(&float.fract())
            .unwrap_or(Ordering::Equal),
        other => other,
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{}", v),
            Number::Float(v) if v.fract() == 0.0 && v.is_finite() => write!(f, "{:.1}", v),
            Number::Float(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_from_json() {
        let n: Number = serde_json::from_str("3").unwrap();
        assert!(matches!(n, Number::Int(3)));

        let n: Number = serde_json::from_str("3.0").unwrap();
        assert!(matches!(n, Number::Float(v) if v == 3.0));

        let n: Number = serde_json::from_str("1e3").unwrap();
        assert!(matches!(n, Number::Float(v) if v == 1000.0));

        // Past i64::MAX the integer no longer fits
        let n: Number = serde_json::from_str("18446744073709551615").unwrap();
        assert!(!n.is_integer());
    }

    #[test]
    fn test_non_numbers_rejected() {
        assert!(serde_json::from_str::<Number>("true").is_err());
        assert!(serde_json::from_str::<Number>("\"1\"").is_err());
        assert!(serde_json::from_str::<Number>("null").is_err());
    }

    #[test]
    fn test_number_to_json() {
        assert_eq!(serde_json::to_string(&Number::Int(2)).unwrap(), "2");
        assert_eq!(serde_json::to_string(&Number::Float(2.0)).unwrap(), "2.0");
    }

    #[test]
    fn test_add_promotes_on_overflow() {
        assert_eq!(Number::Int(2).add(Number::Int(3)), Number::Int(5));
        assert_eq!(Number::Int(1).add(Number::Float(2.5)), Number::Float(3.5));
        assert!(!Number::Int(i64::MAX).add(Number::Int(1)).is_integer());
    }

    #[test]
    fn test_numeric_cmp() {
        assert_eq!(Number::Int(1).numeric_cmp(&Number::Float(1.0)), Ordering::Equal);
        assert_eq!(Number::Float(-0.5).numeric_cmp(&Number::Int(0)), Ordering::Less);
        assert_eq!(Number::Int(10).numeric_cmp(&Number::Int(9)), Ordering::Greater);
        assert_eq!(Number::Int(-2).numeric_cmp(&Number::Float(-2.5)), Ordering::Greater);
        assert_eq!(Number::Float(2.5).numeric_cmp(&Number::Int(2)), Ordering::Greater);
        assert_eq!(Number::Int(0).numeric_cmp(&Number::Float(-0.0)), Ordering::Equal);
    }

    #[test]
    fn test_numeric_cmp_large_values_exact() {
        // 2^53 + 1 has no f64 representation; widening would make these equal
        let int = Number::Int(9_007_199_254_740_993);
        let float = Number::Float(9_007_199_254_740_992.0);
        assert_eq!(int.numeric_cmp(&float), Ordering::Greater);
        assert_eq!(float.numeric_cmp(&int), Ordering::Less);

        assert_eq!(Number::Int(i64::MAX).numeric_cmp(&Number::Float(9.3e18)), Ordering::Less);
        assert_eq!(Number::Int(i64::MIN).numeric_cmp(&Number::Float(-9.3e18)), Ordering::Greater);
        assert_eq!(Number::Int(i64::MIN).numeric_cmp(&Number::Float(f64::NEG_INFINITY)), Ordering::Greater);
        assert_eq!(Number::Int(i64::MAX).numeric_cmp(&Number::Float(f64::INFINITY)), Ordering::Less);
    }

    #[test]
    fn test_number_display() {
        assert_eq!(Number::Int(42).to_string(), "42");
        assert_eq!(Number::Float(2.0).to_string(), "2.0");
        assert_eq!(Number::Float(2.5).to_string(), "2.5");
    }
}
