/// Precision used when snapping positions.
///
/// A scene starts on the grid and can only move to float precision; the
/// switch back happens solely through a full scene reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// Round to 0.1, then floor onto the integer grid
    #[default]
    Grid,
    /// Round to 0.01
    Float,
}

impl Precision {
    /// Wire flag carried in `isAllowedFloat`
    pub fn flag(self) -> u8 {
        match self {
            Precision::Grid => 0,
            Precision::Float => 1,
        }
    }
}

/// Round to `digits` decimal places the way a decimal printout would.
///
/// The exact binary value is rounded, so `0.95` (stored just below the
/// half) goes down to `0.9`. Exact halves such as `0.25` go away from zero.
pub fn round_to(value: f64, digits: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(digits as i32);
    // value * 2 * scale is an odd integer exactly when value sits on a half
    let doubled = value * 2.0 * scale;
    let exact = value.mul_add(2.0 * scale, -doubled) == 0.0;
    let rounded = if exact && doubled.fract() == 0.0 && doubled % 2.0 != 0.0 {
        (doubled + doubled.signum()) / 2.0 / scale
    } else {
        format!("{value:.digits$}").parse().unwrap_or(value)
    };
    // adding 0.0 folds -0.0 into 0.0
    rounded + 0.0
}

/// Rounds .5 toward positive infinity
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Snap a single coordinate.
///
/// On the grid the value is rounded to one decimal first and then floored,
/// so the bias is toward negative infinity: `-0.05` lands on `-1`.
pub fn quantize_coordinate(value: f64, precision: Precision) -> f64 {
    match precision {
        Precision::Float => round_to(value, 2),
        Precision::Grid => round_to(value, 1).floor() + 0.0,
    }
}

pub fn quantize_position<const N: usize>(coords: [f64; N], precision: Precision) -> [f64; N] {
    coords.map(|v| quantize_coordinate(v, precision))
}

/// Colors are always kept to two decimals, whatever the precision.
pub fn quantize_color<const N: usize>(components: [f64; N]) -> [f64; N] {
    components.map(|v| round_to(v, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_floor_bias() {
        assert_eq!(quantize_coordinate(-0.05, Precision::Grid), -1.0);
        assert_eq!(quantize_coordinate(-0.04, Precision::Grid), 0.0);
        assert_eq!(quantize_coordinate(0.94, Precision::Grid), 0.0);
        assert_eq!(quantize_coordinate(0.96, Precision::Grid), 1.0);
        assert_eq!(quantize_coordinate(-1.2, Precision::Grid), -2.0);
        assert_eq!(quantize_coordinate(3.0, Precision::Grid), 3.0);
    }

    #[test]
    fn test_rounds_stored_binary_value() {
        // 0.95 and 1.15 are stored just below the half
        assert_eq!(quantize_coordinate(0.95, Precision::Grid), 0.0);
        assert_eq!(quantize_coordinate(1.15, Precision::Grid), 1.0);
        assert_eq!(round_to(0.95, 1), 0.9);
        assert_eq!(round_to(1.005, 2), 1.0);
        assert_eq!(round_to(2.675, 2), 2.67);
    }

    #[test]
    fn test_exact_halves_go_away_from_zero() {
        assert_eq!(round_to(0.25, 1), 0.3);
        assert_eq!(round_to(-0.25, 1), -0.3);
        assert_eq!(round_to(0.125, 2), 0.13);
        assert_eq!(round_to(-2.5, 0), -3.0);
    }

    #[test]
    fn test_non_finite_passes_through() {
        assert!(round_to(f64::NAN, 1).is_nan());
        assert_eq!(quantize_coordinate(f64::INFINITY, Precision::Grid), f64::INFINITY);
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
    }

    #[test]
    fn test_float_precision() {
        assert_eq!(quantize_position([1.234, -0.005, 2.0], Precision::Float), [1.23, -0.01, 2.0]);
    }

    #[test]
    fn test_no_negative_zero() {
        let q = quantize_coordinate(-0.001, Precision::Float);
        assert!(q.is_sign_positive());
    }

    #[test]
    fn test_color_ignores_precision() {
        assert_eq!(quantize_color([0.123, 0.456, 1.0, 0.999]), [0.12, 0.46, 1.0, 1.0]);
    }
}
