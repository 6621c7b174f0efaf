use crate::core::data::complex::Complex;
use crate::core::data::render_params::{HARD_ITERATION_CAP, RenderParameters};
use crate::core::fractals::complex_map::ComplexMap;
use std::ops::ControlFlow;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeResult {
    pub iterations: u32,
    pub final_z: Complex,
}

/// Iterates `map` from one plane coordinate until the orbit escapes or the
/// iteration budget runs out.
///
/// Mandelbrot-style rendering uses the coordinate both as the start point and
/// as `c`; Julia-style rendering starts from the coordinate and holds `c` at
/// the configured Julia constant. Always returns within
/// [`HARD_ITERATION_CAP`] steps.
#[must_use]
pub fn evaluate(coordinate: Complex, map: &ComplexMap, params: &RenderParameters) -> EscapeResult {
    let c = if params.render_julia_set() {
        params.julia_constant()
    } else {
        coordinate
    };

    let max_iterations = params.max_iterations();
    let escape_tolerance = params.escape_tolerance();

    let outcome = (1..=HARD_ITERATION_CAP).try_fold(coordinate, |z, iteration| {
        let next = map.step(z, c);

        if iteration >= max_iterations || next.magnitude_squared() >= escape_tolerance {
            ControlFlow::Break(EscapeResult {
                iterations: iteration,
                final_z: next,
            })
        } else {
            ControlFlow::Continue(next)
        }
    });

    match outcome {
        ControlFlow::Break(result) => result,
        ControlFlow::Continue(final_z) => EscapeResult {
            iterations: HARD_ITERATION_CAP,
            final_z,
        },
    }
}
