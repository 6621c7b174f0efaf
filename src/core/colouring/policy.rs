use crate::core::data::render_params::RenderParameters;
use crate::core::fractals::escape::EscapeResult;

/// Interior points and saturated magnitudes share this index.
pub const INTERIOR_INDEX: f64 = 0.0;

// gamma-like compression: 1/8 lifts near-threshold detail
const MAGNITUDE_EXPONENT: f64 = 1.0 / 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourPolicy {
    ByIndex,
    ByMagnitude,
}

impl ColourPolicy {
    #[must_use]
    pub fn from_params(params: &RenderParameters) -> Self {
        if params.colour_by_index() {
            Self::ByIndex
        } else {
            Self::ByMagnitude
        }
    }
}

/// Maps an evaluator result to a palette index in `[0, 1)`.
#[must_use]
pub fn colourize(result: &EscapeResult, params: &RenderParameters) -> f64 {
    match ColourPolicy::from_params(params) {
        ColourPolicy::ByIndex => index_by_iterations(result.iterations, params.max_iterations()),
        ColourPolicy::ByMagnitude => index_by_magnitude(
            result.final_z.magnitude_squared(),
            params.escape_tolerance(),
        ),
    }
}

fn index_by_iterations(iterations: u32, max_iterations: u32) -> f64 {
    if iterations >= max_iterations {
        return INTERIOR_INDEX;
    }

    f64::from(iterations) / f64::from(max_iterations)
}

fn index_by_magnitude(magnitude_squared: f64, escape_tolerance: f64) -> f64 {
    let colour = magnitude_squared / escape_tolerance;

    // written as a negated `<` so NaN lands on the interior colour too
    if !(colour < 1.0) {
        return INTERIOR_INDEX;
    }

    colour.powf(MAGNITUDE_EXPONENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    const EPSILON: f64 = 1e-12;

    fn by_index(max_iterations: u32) -> RenderParameters {
        RenderParameters::new(4.0, max_iterations, true, false, Complex::ZERO).unwrap()
    }

    fn by_magnitude(escape_tolerance: f64) -> RenderParameters {
        RenderParameters::new(escape_tolerance, 30, false, false, Complex::ZERO).unwrap()
    }

    fn result(iterations: u32, final_z: Complex) -> EscapeResult {
        EscapeResult { iterations, final_z }
    }

    #[test]
    fn policy_follows_colour_by_index_flag() {
        assert_eq!(ColourPolicy::from_params(&by_index(30)), ColourPolicy::ByIndex);
        assert_eq!(ColourPolicy::from_params(&by_magnitude(4.0)), ColourPolicy::ByMagnitude);
    }

    #[test]
    fn by_index_interior_is_exactly_zero() {
        let index = colourize(&result(30, Complex::ZERO), &by_index(30));

        assert_eq!(index, 0.0);
    }

    #[test]
    fn by_index_is_iteration_fraction() {
        let params = by_index(40);

        assert_eq!(colourize(&result(1, Complex::new(6.0, 0.0)), &params), 0.025);
        assert_eq!(colourize(&result(10, Complex::new(6.0, 0.0)), &params), 0.25);
        assert_eq!(colourize(&result(39, Complex::new(6.0, 0.0)), &params), 0.975);
    }

    #[test]
    fn by_index_stays_below_one() {
        let params = by_index(200);

        for iterations in 0..=200 {
            let index = colourize(&result(iterations, Complex::ZERO), &params);
            assert!((0.0..1.0).contains(&index), "index {} out of range", index);
        }
    }

    #[test]
    fn by_magnitude_at_tolerance_is_zero() {
        // |2|² = 4 = tolerance
        let index = colourize(&result(1, Complex::new(2.0, 0.0)), &by_magnitude(4.0));

        assert_eq!(index, 0.0);
    }

    #[test]
    fn by_magnitude_above_tolerance_is_zero() {
        let index = colourize(&result(1, Complex::new(6.0, 0.0)), &by_magnitude(4.0));

        assert_eq!(index, 0.0);
    }

    #[test]
    fn by_magnitude_applies_eighth_root() {
        // |z|² = 1, tolerance 256: (1/256)^(1/8) = 0.5
        let index = colourize(&result(3, Complex::new(1.0, 0.0)), &by_magnitude(256.0));

        assert!((index - 0.5).abs() <= EPSILON, "index={}", index);
    }

    #[test]
    fn by_magnitude_origin_is_zero() {
        let index = colourize(&result(30, Complex::ZERO), &by_magnitude(4.0));

        assert_eq!(index, 0.0);
    }

    #[test]
    fn by_magnitude_nan_falls_back_to_interior() {
        let index = colourize(&result(30, Complex::new(f64::NAN, 0.0)), &by_magnitude(4.0));

        assert_eq!(index, 0.0);
    }

    #[test]
    fn by_magnitude_infinity_falls_back_to_interior() {
        let index = colourize(&result(1, Complex::INFINITY), &by_magnitude(4.0));

        assert_eq!(index, 0.0);
    }
}
