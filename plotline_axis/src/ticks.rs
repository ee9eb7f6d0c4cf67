// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;

/// Number of significant digits kept by [`round_tick`].
pub const SIGNIFICANT_DIGITS: i32 = 10;

/// Magnitudes at or above this are labeled in exponent form.
const EXPONENT_ABOVE: f64 = 1e6;
/// Non-zero magnitudes below this are labeled in exponent form.
const EXPONENT_BELOW: f64 = 1e-4;

/// Rounds a tick value to [`SIGNIFICANT_DIGITS`] significant digits.
///
/// This strips residue such as `0.30000000000000004` so the value prints as
/// a short decimal. Negative zero is normalized to `0.0`; non-finite values
/// are returned unchanged.
#[must_use]
pub fn round_tick(value: f64) -> f64 {
    if value == 0.0 {
        return 0.0;
    }
    if !value.is_finite() {
        return value;
    }

    let digits = libm::floor(libm::log10(libm::fabs(value)));
    let shift = f64::from(SIGNIFICANT_DIGITS - 1) - digits;
    // Past ~300 the power of ten overflows; such values are subnormal-small
    // and gain nothing from rounding.
    if shift > 300.0 {
        return value;
    }
    let rounded = if shift >= 0.0 {
        let factor = libm::pow(10.0, shift);
        libm::round(value * factor) / factor
    } else {
        let factor = libm::pow(10.0, -shift);
        libm::round(value / factor) * factor
    };

    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Formats a tick value as a label.
///
/// The value is passed through [`round_tick`] first. Magnitudes of a million
/// and above, or below `1e-4`, use exponent notation (`1.5e6`, `2e-5`);
/// everything else uses the shortest plain decimal (`0.3`, `-12`, `2500`).
///
/// Only [`SIGNIFICANT_DIGITS`] digits survive, so when the step is more than
/// ten orders of magnitude below the tick values (panned to `1e8` with a
/// step of `1e-3`), neighbouring ticks get the same label.
#[must_use]
pub fn format_tick(value: f64) -> String {
    let value = round_tick(value);
    let magnitude = libm::fabs(value);
    if value != 0.0 && (magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW) {
        format!("{value:e}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::{format_tick, round_tick};

    #[test]
    fn rounding_removes_float_residue() {
        assert_eq!(round_tick(0.1 + 0.2), 0.3);
        assert_eq!(round_tick(3.0 * 0.1), 0.3);
        assert_eq!(round_tick(-7.0 * 0.7), -4.9);
        assert_eq!(round_tick(1234.5678), 1234.5678);
        assert_eq!(round_tick(1e20 + 12345.0), 1e20);
    }

    #[test]
    fn rounding_normalizes_negative_zero() {
        let zero = round_tick(-0.0);
        assert_eq!(zero, 0.0);
        assert!(zero.is_sign_positive());
        assert!(round_tick(-1e-30 * 0.0).is_sign_positive());
    }

    #[test]
    fn rounding_passes_through_non_finite_and_tiny() {
        assert!(round_tick(f64::NAN).is_nan());
        assert_eq!(round_tick(f64::INFINITY), f64::INFINITY);
        assert_eq!(round_tick(5e-310), 5e-310);
    }

    #[test]
    fn labels_are_short_decimals() {
        assert_eq!(format_tick(0.0), "0");
        assert_eq!(format_tick(-0.0), "0");
        assert_eq!(format_tick(2.0), "2");
        assert_eq!(format_tick(-10.0), "-10");
        assert_eq!(format_tick(0.1 + 0.2), "0.3");
        assert_eq!(format_tick(0.005), "0.005");
        assert_eq!(format_tick(250_000.0), "250000");
    }

    #[test]
    fn labels_switch_to_exponent_form_at_extremes() {
        assert_eq!(format_tick(1e6), "1e6");
        assert_eq!(format_tick(-2.5e7), "-2.5e7");
        assert_eq!(format_tick(5e-5), "5e-5");
    }

    #[test]
    fn fine_steps_far_from_the_origin_share_labels() {
        assert_eq!(format_tick(1e8 + 0.001), format_tick(1e8 + 0.002));
        assert_eq!(format_tick(1e8 + 0.001), "1e8");
    }
}
