// Copyright 2025 the Plotline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Pixel distance the grid aims for between neighbouring lines.
pub const DEFAULT_TARGET_SPACING_PX: f64 = 80.0;

/// Picks the grid step in math units for `scale` pixels per unit.
///
/// Equivalent to [`calculate_step_for`] with [`DEFAULT_TARGET_SPACING_PX`].
#[must_use]
pub fn calculate_step(scale: f64) -> f64 {
    calculate_step_for(scale, DEFAULT_TARGET_SPACING_PX)
}

/// Picks a "nice" grid step so lines land about `target_px` pixels apart.
///
/// The raw spacing `target_px / scale` is split into a power of ten and a
/// residual in `[1, 10)`; the residual is rounded up the 1-2-5-10 ladder.
/// The result is always `1`, `2`, `5` or `10` times a power of ten.
///
/// Degenerate input (non-positive or non-finite spacing) yields `1.0`.
#[must_use]
pub fn calculate_step_for(scale: f64, target_px: f64) -> f64 {
    let step_units = target_px / scale;
    if !step_units.is_finite() || step_units <= 0.0 {
        return 1.0;
    }

    let exponent = libm::floor(libm::log10(step_units));
    let magnitude = libm::pow(10.0, exponent);
    let residual = step_units / magnitude;
    if residual > 5.0 {
        // Same value the next decade's `1` rung produces, bit for bit.
        libm::pow(10.0, exponent + 1.0)
    } else if residual > 2.0 {
        5.0 * magnitude
    } else if residual > 1.0 {
        2.0 * magnitude
    } else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::{calculate_step, calculate_step_for};
    use plotline_view::{SCALE_MAX, SCALE_MIN};

    fn leading_multiple(step: f64) -> f64 {
        step / libm::pow(10.0, libm::floor(libm::log10(step)))
    }

    fn scales() -> impl Iterator<Item = f64> {
        // Geometric sweep from the largest to the smallest scale.
        let ratio: f64 = 0.97;
        core::iter::successors(Some(SCALE_MAX), move |s| {
            let next = s * ratio;
            (next >= SCALE_MIN).then_some(next)
        })
    }

    #[test]
    fn default_scale_gives_two_units() {
        assert_eq!(calculate_step(40.0), 2.0);
        assert_eq!(calculate_step(80.0), 1.0);
        assert_eq!(calculate_step(16.0), 5.0);
        assert_eq!(calculate_step(10.0), 10.0);
    }

    #[test]
    fn residual_thresholds() {
        // residual exactly 1, 2 and 5 stay on the lower rung.
        assert_eq!(calculate_step_for(1.0, 1.0), 1.0);
        assert_eq!(calculate_step_for(1.0, 2.0), 2.0);
        assert_eq!(calculate_step_for(1.0, 5.0), 5.0);
        // Just above a rung rounds up to the next one.
        assert_eq!(calculate_step_for(1.0, 1.5), 2.0);
        assert_eq!(calculate_step_for(1.0, 3.0), 5.0);
        assert_eq!(calculate_step_for(1.0, 6.0), 10.0);
    }

    #[test]
    fn step_is_always_a_nice_number() {
        for scale in scales() {
            let step = calculate_step(scale);
            let m = leading_multiple(step);
            assert!(
                [1.0, 2.0, 5.0, 10.0]
                    .iter()
                    .any(|nice| (m - nice).abs() < 1e-9),
                "step {step} at scale {scale} has leading multiple {m}"
            );
        }
    }

    #[test]
    fn step_never_shrinks_when_zooming_out() {
        let mut previous = 0.0;
        for scale in scales() {
            let step = calculate_step(scale);
            assert!(
                step >= previous,
                "step dropped from {previous} to {step} at scale {scale}"
            );
            previous = step;
        }
    }

    #[test]
    fn step_saturates_at_scale_limits() {
        // 80 / 1e5 = 8e-4 -> 1e-3; 80 / 1e-3 = 8e4 -> 1e5.
        assert!((calculate_step(SCALE_MAX) - 1e-3).abs() < 1e-15);
        assert!((calculate_step(SCALE_MIN) - 1e5).abs() < 1e-6);
    }

    #[test]
    fn degenerate_scale_falls_back_to_unit_step() {
        assert_eq!(calculate_step(0.0), 1.0);
        assert_eq!(calculate_step(f64::NAN), 1.0);
        assert_eq!(calculate_step(-3.0), 1.0);
    }
}
