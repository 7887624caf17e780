//! Model evaluation for growth-with-cap and floor-bounded indicators.
//!
//! The synthesizer relies on one primitive: evaluate the model for a year,
//! given the base value and the first year of the requested range.

use crate::domain::{GrowthModel, RegimeShift};

/// Cumulative multiplier of every regime shift whose threshold is `<= year`.
pub fn regime_factor(regimes: &[RegimeShift], year: i32) -> f64 {
    regimes
        .iter()
        .filter(|r| r.year <= year)
        .map(|r| r.factor)
        .product()
}

/// Value of `model` in `year`, for a range starting at `first_year`.
///
/// The cap is applied to this year only; the next year is computed from the
/// uncapped curve again.
pub fn evaluate(model: &GrowthModel, base: f64, first_year: i32, year: i32) -> f64 {
    let elapsed = f64::from(year) - f64::from(first_year);
    match model {
        GrowthModel::Growth { rate, regimes, cap } => {
            let value = base * (1.0 + rate * elapsed) * regime_factor(regimes, year);
            match cap {
                Some(cap) => value.min(*cap),
                None => value,
            }
        }
        GrowthModel::Floor { rate, floor } => (base - rate * elapsed).max(*floor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn growth(rate: f64, regimes: &[(i32, f64)], cap: Option<f64>) -> GrowthModel {
        GrowthModel::Growth {
            rate,
            regimes: regimes
                .iter()
                .map(|&(year, factor)| RegimeShift { year, factor })
                .collect(),
            cap,
        }
    }

    #[test]
    fn regime_factor_is_cumulative_from_threshold() {
        let regimes = [
            RegimeShift { year: 2015, factor: 1.3 },
            RegimeShift { year: 2020, factor: 1.2 },
        ];
        assert_eq!(regime_factor(&regimes, 2014), 1.0);
        assert!((regime_factor(&regimes, 2015) - 1.3).abs() < 1e-12);
        assert!((regime_factor(&regimes, 2024) - 1.56).abs() < 1e-12);
    }

    #[test]
    fn cap_is_a_ceiling_not_a_freeze() {
        // Curve: 10, 20, 30 then x2 from year 3 -> 80. Cap 25.
        let model = growth(1.0, &[(2003, 2.0)], Some(25.0));
        let values: Vec<f64> = (2000..=2003).map(|y| evaluate(&model, 10.0, 2000, y)).collect();
        assert_eq!(values, vec![10.0, 20.0, 25.0, 25.0]);

        // Without the cap the later year is the raw curve value.
        let uncapped = growth(1.0, &[(2003, 2.0)], None);
        assert_eq!(evaluate(&uncapped, 10.0, 2000, 2003), 80.0);
    }

    #[test]
    fn capped_curve_resumes_once_it_falls_below_cap() {
        // Curve: 100, 90, 80, 70 with cap 95. A clamp-and-freeze rule would
        // hold 95 after the first year.
        let model = growth(-0.1, &[], Some(95.0));
        let values: Vec<f64> = (2000..=2003).map(|y| evaluate(&model, 100.0, 2000, y)).collect();
        assert_eq!(values[0], 95.0);
        for (got, raw) in values.iter().skip(1).zip([90.0, 80.0, 70.0]) {
            assert!((got - raw).abs() < 1e-9, "expected raw curve {raw}, got {got}");
        }
    }

    #[test]
    fn elapsed_years_do_not_overflow() {
        let model = growth(0.0, &[], None);
        assert_eq!(evaluate(&model, 3.0, i32::MIN, i32::MAX), 3.0);
    }

    #[test]
    fn floor_model_stops_at_floor() {
        let model = GrowthModel::Floor { rate: 3.0, floor: 45.0 };
        assert_eq!(evaluate(&model, 72.0, 2012, 2012), 72.0);
        assert_eq!(evaluate(&model, 72.0, 2012, 2015), 63.0);
        assert_eq!(evaluate(&model, 72.0, 2012, 2030), 45.0);
    }
}
