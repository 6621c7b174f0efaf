use std::ops::{Add, Div, Mul, Sub};

// hand-rolled rather than num-complex; the recurrences only need a handful of ops
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub const ZERO: Self = Self { real: 0.0, imag: 0.0 };

    /// Sentinel for a step that left the finite plane. Its magnitude compares
    /// greater than any escape tolerance.
    pub const INFINITY: Self = Self {
        real: f64::INFINITY,
        imag: 0.0,
    };

    #[must_use]
    pub const fn new(real: f64, imag: f64) -> Self {
        Self { real, imag }
    }

    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        self.real * self.real + self.imag * self.imag
    }

    #[must_use]
    pub fn conj(&self) -> Self {
        Self {
            real: self.real,
            imag: -self.imag,
        }
    }

    /// Multiplicative inverse `conj(z) / |z|^2`, or `None` at the origin.
    #[must_use]
    pub fn inverse(&self) -> Option<Self> {
        let magnitude_squared = self.magnitude_squared();

        if magnitude_squared == 0.0 {
            return None;
        }

        Some(self.conj() / magnitude_squared)
    }

    /// Rotates the point about the origin by `angle` radians.
    #[must_use]
    pub fn rotated(&self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();

        Self {
            real: self.real * cos - self.imag * sin,
            imag: self.real * sin + self.imag * cos,
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.real.is_finite() && self.imag.is_finite()
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            real: self.real + other.real,
            imag: self.imag + other.imag,
        }
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            real: self.real - other.real,
            imag: self.imag - other.imag,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            real: self.real * other.real - self.imag * other.imag,
            imag: self.real * other.imag + self.imag * other.real,
        }
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            real: self.real * scalar,
            imag: self.imag * scalar,
        }
    }
}

impl Div<f64> for Complex {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self {
            real: self.real / scalar,
            imag: self.imag / scalar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-12;

    fn assert_approx_eq(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() <= EPSILON,
            "actual={} expected={}",
            actual,
            expected
        );
    }

    #[test]
    fn test_magnitude_squared() {
        let c = Complex::new(3.0, 4.0);
        assert_eq!(c.magnitude_squared(), 25.0); // 3² + 4² = 25
    }

    #[test]
    fn test_magnitude_squared_negative_parts() {
        let c = Complex::new(-3.0, -4.0);
        assert_eq!(c.magnitude_squared(), 25.0);
    }

    #[test]
    fn test_add_and_sub() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, 4.0);

        assert_eq!(a + b, Complex::new(4.0, 6.0));
        assert_eq!(a - b, Complex::new(-2.0, -2.0));
    }

    #[test]
    fn test_mul() {
        // (1 + 2i) * (3 + 4i) = 3 + 4i + 6i + 8i² = -5 + 10i
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, 4.0);

        assert_eq!(a * b, Complex::new(-5.0, 10.0));
    }

    #[test]
    fn test_square() {
        // (2 + 3i)² = 4 + 12i + 9i² = -5 + 12i
        let c = Complex::new(2.0, 3.0);
        assert_eq!(c * c, Complex::new(-5.0, 12.0));
    }

    #[test]
    fn test_scalar_mul_and_div() {
        let c = Complex::new(2.0, -6.0);

        assert_eq!(c * 0.5, Complex::new(1.0, -3.0));
        assert_eq!(c / 2.0, Complex::new(1.0, -3.0));
    }

    #[test]
    fn test_conj() {
        assert_eq!(Complex::new(1.5, 2.5).conj(), Complex::new(1.5, -2.5));
    }

    #[test]
    fn test_inverse_times_self_is_one() {
        let z = Complex::new(3.0, -4.0);
        let product = z * z.inverse().unwrap();

        assert_approx_eq(product.real, 1.0);
        assert_approx_eq(product.imag, 0.0);
    }

    #[test]
    fn test_inverse_of_zero_is_none() {
        assert_eq!(Complex::ZERO.inverse(), None);
    }

    #[test]
    fn test_rotated_quarter_turn() {
        let rotated = Complex::new(1.0, 0.0).rotated(FRAC_PI_2);

        assert_approx_eq(rotated.real, 0.0);
        assert_approx_eq(rotated.imag, 1.0);
    }

    #[test]
    fn test_infinity_sentinel_is_not_finite() {
        assert!(!Complex::INFINITY.is_finite());
        assert!(Complex::INFINITY.magnitude_squared() > 1e300);
    }
}
