//! Shared constants: module size, tolerances and functional category names.
//!
//! Plain values with no dependencies. Both the engine and the native
//! harness use these.

/// Side of one prefabricated module in meters. Every footprint preset is a
/// whole multiple of it in both directions.
pub const MODULE: f64 = 2.440;

/// Absolute tolerance for every geometric comparison (fit checks, exact-fit,
/// collinearity, coverage).
pub const EPSILON: f64 = 1e-3;

/// Decimal places kept when rounding derived dimensions and dedup keys.
pub const ROUND_DECIMALS: i32 = 3;

pub mod categories {
    pub const BANO: &str = "Baño";
    pub const DOR: &str = "Dor";
    pub const COCINA_COMEDOR: &str = "Cocina - Comedor";
    pub const ESTAR: &str = "Estar";
    pub const RECIBIDOR: &str = "Recibidor";

    /// Every category a preset rule table may produce.
    pub const ALL: [&str; 5] = [BANO, DOR, COCINA_COMEDOR, ESTAR, RECIBIDOR];

    /// Category assigned when no range rule matches.
    pub const DEFAULT: &str = DOR;

    pub fn is_known(name: &str) -> bool {
        ALL.contains(&name)
    }
}

/// Round to [`ROUND_DECIMALS`] places.
pub fn round3(value: f64) -> f64 {
    let scale = 10f64.powi(ROUND_DECIMALS);
    (value * scale).round() / scale
}

/// `a == b` within [`EPSILON`].
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= EPSILON
}

/// `a > b` by more than [`EPSILON`].
pub fn exceeds(a: f64, b: f64) -> bool {
    a > b + EPSILON
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round3_drops_float_noise() {
        assert_eq!(round3(3.529_000_000_000_1), 3.529);
        assert_eq!(round3(2.983_4), 2.983);
    }

    #[test]
    fn tolerant_comparisons() {
        assert!(approx_eq(3.529 + 1.351, 4.88));
        assert!(!exceeds(4.880_000_1, 4.88));
        assert!(exceeds(4.89, 4.88));
    }

    #[test]
    fn default_category_is_known() {
        assert!(categories::is_known(categories::DEFAULT));
        assert!(!categories::is_known("Garage"));
    }
}
