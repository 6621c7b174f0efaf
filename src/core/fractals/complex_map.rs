use crate::core::data::complex::Complex;
use crate::core::fractals::variant::FractalVariant;

pub type StepFn = fn(Complex, Complex) -> Complex;

/// One recurrence `z' = f(z, c)`, bound to its step function once at
/// construction. Switching variant means building a new map.
#[derive(Debug, Clone, Copy)]
pub struct ComplexMap {
    variant: FractalVariant,
    step: StepFn,
}

impl ComplexMap {
    #[must_use]
    pub fn new(variant: FractalVariant) -> Self {
        let step: StepFn = match variant {
            FractalVariant::Mandelbrot => mandelbrot,
            FractalVariant::Rk1 => rk1,
            FractalVariant::Rk2 => rk2,
            FractalVariant::Rk3 => rk3,
            FractalVariant::Rk4 => rk4,
            FractalVariant::Rk3Twist => rk3_twist,
        };

        Self { variant, step }
    }

    #[must_use]
    pub fn variant(&self) -> FractalVariant {
        self.variant
    }

    #[inline]
    #[must_use]
    pub fn step(&self, z: Complex, c: Complex) -> Complex {
        (self.step)(z, c)
    }
}

impl PartialEq for ComplexMap {
    fn eq(&self, other: &Self) -> bool {
        self.variant == other.variant
    }
}

fn mandelbrot(z: Complex, c: Complex) -> Complex {
    z * z + c
}

fn rk1(z: Complex, c: Complex) -> Complex {
    z + c
}

fn rk2(z: Complex, c: Complex) -> Complex {
    (z * z) / 2.0 + z + c
}

fn rk3(z: Complex, c: Complex) -> Complex {
    let z2 = z * z;
    (z2 * z) / 6.0 + z2 / 2.0 + z + c
}

fn rk4(z: Complex, c: Complex) -> Complex {
    let z2 = z * z;
    let z3 = z2 * z;
    (z3 * z) / 24.0 + z3 / 6.0 + z2 / 2.0 + z + c
}

// z = 0 has no inverse; the step leaves the plane so the orbit escapes at once
fn rk3_twist(z: Complex, c: Complex) -> Complex {
    match z.inverse() {
        Some(inverse) => inverse * 3.0 + rk3(z, c),
        None => Complex::INFINITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn assert_complex_approx_eq(actual: Complex, expected: Complex) {
        assert!(
            (actual.real - expected.real).abs() <= EPSILON
                && (actual.imag - expected.imag).abs() <= EPSILON,
            "actual={:?} expected={:?}",
            actual,
            expected
        );
    }

    #[test]
    fn map_remembers_its_variant() {
        for &variant in FractalVariant::ALL {
            assert_eq!(ComplexMap::new(variant).variant(), variant);
        }
    }

    #[test]
    fn mandelbrot_squares_and_adds() {
        let map = ComplexMap::new(FractalVariant::Mandelbrot);

        // (1 + i)² + (0.5 - i) = 2i + 0.5 - i = 0.5 + i
        let result = map.step(Complex::new(1.0, 1.0), Complex::new(0.5, -1.0));

        assert_complex_approx_eq(result, Complex::new(0.5, 1.0));
    }

    #[test]
    fn mandelbrot_fixed_point_at_origin() {
        let map = ComplexMap::new(FractalVariant::Mandelbrot);

        assert_eq!(map.step(Complex::ZERO, Complex::ZERO), Complex::ZERO);
    }

    #[test]
    fn rk1_adds() {
        let map = ComplexMap::new(FractalVariant::Rk1);

        assert_eq!(
            map.step(Complex::new(1.0, 2.0), Complex::new(3.0, 4.0)),
            Complex::new(4.0, 6.0)
        );
    }

    #[test]
    fn rk_series_on_real_axis() {
        let z = Complex::new(2.0, 0.0);
        let c = Complex::new(1.0, 0.0);

        // z²/2 + z + c = 2 + 2 + 1
        assert_complex_approx_eq(
            ComplexMap::new(FractalVariant::Rk2).step(z, c),
            Complex::new(5.0, 0.0),
        );
        // z³/6 + z²/2 + z + c = 8/6 + 2 + 2 + 1
        assert_complex_approx_eq(
            ComplexMap::new(FractalVariant::Rk3).step(z, c),
            Complex::new(8.0 / 6.0 + 5.0, 0.0),
        );
        // z⁴/24 + z³/6 + z²/2 + z + c = 16/24 + 8/6 + 2 + 2 + 1
        assert_complex_approx_eq(
            ComplexMap::new(FractalVariant::Rk4).step(z, c),
            Complex::new(16.0 / 24.0 + 8.0 / 6.0 + 5.0, 0.0),
        );
    }

    #[test]
    fn rk2_on_imaginary_unit() {
        // i²/2 + i + 0 = -0.5 + i
        let result = ComplexMap::new(FractalVariant::Rk2).step(Complex::new(0.0, 1.0), Complex::ZERO);

        assert_complex_approx_eq(result, Complex::new(-0.5, 1.0));
    }

    #[test]
    fn rk3_twist_adds_three_over_z() {
        let z = Complex::new(2.0, 0.0);
        let c = Complex::ZERO;

        // 3/2 + 8/6 + 2 + 2
        assert_complex_approx_eq(
            ComplexMap::new(FractalVariant::Rk3Twist).step(z, c),
            Complex::new(1.5 + 8.0 / 6.0 + 4.0, 0.0),
        );
    }

    #[test]
    fn rk3_twist_at_origin_leaves_the_plane() {
        let result = ComplexMap::new(FractalVariant::Rk3Twist).step(Complex::ZERO, Complex::new(0.1, 0.1));

        assert!(!result.is_finite());
        assert!(result.magnitude_squared() >= f64::MAX);
    }
}
