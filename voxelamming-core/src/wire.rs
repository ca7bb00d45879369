/// Number encoding shared by every snapshot entry
use serde::{Serialize, Serializer};

/// Largest magnitude at which every integer is exact in an f64
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A number that serializes as a JSON integer when it has no fractional part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WireNumber(pub f64);

impl Serialize for WireNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let v = self.0;
        if v.is_finite() && v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER {
            serializer.serialize_i64(v as i64)
        } else {
            serializer.serialize_f64(v)
        }
    }
}

/// Serialize a fixed array of numbers through [`WireNumber`]
pub fn numbers<const N: usize>(values: [f64; N]) -> [WireNumber; N] {
    values.map(WireNumber)
}

/// Textual form of a number as it travels in string-typed entries:
/// `3.0` becomes `"3"`, `0.5` stays `"0.5"`, `-0.0` becomes `"0"`.
pub fn format_number(value: f64) -> String {
    format!("{}", value + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers_serialize_as_integers() {
        let json = serde_json::to_string(&numbers([3.0, -1.0, 0.5])).unwrap();
        assert_eq!(json, "[3,-1,0.5]");
    }

    #[test]
    fn test_non_finite_becomes_null() {
        let json = serde_json::to_string(&WireNumber(f64::NAN)).unwrap();
        assert_eq!(json, "null");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(3.0), "3");
        assert_eq!(format_number(0.25), "0.25");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-12.5), "-12.5");
    }
}
