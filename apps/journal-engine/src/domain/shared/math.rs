//! Statistical math utilities for the journal calculators.

use rust_decimal::Decimal;

/// Calculate mean of a slice of decimals.
///
/// The running sum saturates instead of overflowing.
pub fn mean(values: &[Decimal]) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    Some(saturating_sum(values.iter().copied()) / Decimal::from(values.len() as u64))
}

/// Sum that clamps at `Decimal::MAX` / `Decimal::MIN`.
pub fn saturating_sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values
        .into_iter()
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// `numerator / denominator`, clamped to the signed bound on overflow.
///
/// A zero denominator yields zero.
pub fn saturating_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator.is_zero() {
        return Decimal::ZERO;
    }
    numerator.checked_div(denominator).unwrap_or_else(|| {
        if numerator.is_sign_negative() == denominator.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    })
}

/// Calculate mean of a slice of floats.
pub fn mean_f64(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Middle element of an ascending slice, taken at index `n / 2`.
///
/// Even-length inputs are not interpolated: the upper of the two middle
/// values is returned.
pub fn median_at_floor_index(sorted: &[f64]) -> Option<f64> {
    sorted.get(sorted.len() / 2).copied()
}

/// Clamp infinities to the largest finite value of the same sign; NaN
/// becomes zero.
pub const fn saturate_finite(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else if value == f64::INFINITY {
        f64::MAX
    } else if value == f64::NEG_INFINITY {
        f64::MIN
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_mean() {
        let values = vec![dec!(10), dec!(20), dec!(30), dec!(40)];
        assert_eq!(mean(&values), Some(dec!(25)));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_mean_f64() {
        assert_eq!(mean_f64(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(mean_f64(&[]), None);
    }

    #[test]
    fn test_median_odd_and_even() {
        assert_eq!(median_at_floor_index(&[1.0, 2.0, 3.0]), Some(2.0));
        // index 4 / 2 = 2
        assert_eq!(median_at_floor_index(&[1.0, 2.0, 3.0, 4.0]), Some(3.0));
        assert_eq!(median_at_floor_index(&[]), None);
    }

    #[test]
    fn test_saturate_finite() {
        assert_eq!(saturate_finite(f64::INFINITY), f64::MAX);
        assert_eq!(saturate_finite(f64::NEG_INFINITY), f64::MIN);
        assert_eq!(saturate_finite(f64::NAN), 0.0);
        assert_eq!(saturate_finite(-2.5), -2.5);
    }

    #[test]
    fn test_mean_saturates() {
        let values = vec![Decimal::MAX, Decimal::MAX];
        assert_eq!(mean(&values), Some(Decimal::MAX / dec!(2)));
    }

    #[test]
    fn test_saturating_sum() {
        assert_eq!(saturating_sum([dec!(1), dec!(2)]), dec!(3));
        assert_eq!(saturating_sum([Decimal::MAX, dec!(1)]), Decimal::MAX);
        assert_eq!(saturating_sum([Decimal::MIN, dec!(-1)]), Decimal::MIN);
        assert_eq!(saturating_sum(std::iter::empty()), Decimal::ZERO);
    }

    #[test]
    fn test_saturating_div() {
        assert_eq!(saturating_div(dec!(10), dec!(4)), dec!(2.5));
        assert_eq!(saturating_div(dec!(10), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(saturating_div(Decimal::MAX, dec!(0.0001)), Decimal::MAX);
        assert_eq!(saturating_div(Decimal::MIN, dec!(0.0001)), Decimal::MIN);
        assert_eq!(saturating_div(Decimal::MAX, dec!(-0.5)), Decimal::MIN);
    }
}
