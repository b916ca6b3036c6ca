use glam::{vec3, Vec3};

/// Returns the inverse of a type.
/// Safely divides by a value, returning 0 instead of infinity or NaN
pub trait Inverse {
    type Output;
    fn inv(&self) -> Self::Output;
}

impl Inverse for f32 {
    type Output = f32;

    fn inv(&self) -> Self::Output {
        if self.is_normal() {
            1.0 / self
        } else {
            0.0
        }
    }
}

impl Inverse for Vec3 {
    type Output = Vec3;

    fn inv(&self) -> Self::Output {
        vec3(self.x.inv(), self.y.inv(), self.z.inv())
    }
}

/// Tests whether a value is close enough to zero that dividing by it, or
/// normalizing a vector of that length, is no longer numerically stable.
///
/// The default threshold is tied to the precision of the type.
pub trait NearlyZero: Copy {
    /// The threshold used by [`NearlyZero::is_nearly_zero`]
    const NEARLY_ZERO: Self;

    /// Returns true if the value lies strictly within `(-threshold, threshold)`
    fn is_threshold_zero(&self, threshold: Self) -> bool;

    fn is_nearly_zero(&self) -> bool {
        self.is_threshold_zero(Self::NEARLY_ZERO)
    }
}

impl NearlyZero for f32 {
    const NEARLY_ZERO: f32 = 1.0e-6;

    fn is_threshold_zero(&self, threshold: Self) -> bool {
        *self < threshold && *self > -threshold
    }
}

impl NearlyZero for f64 {
    const NEARLY_ZERO: f64 = 1.0e-12;

    fn is_threshold_zero(&self, threshold: Self) -> bool {
        *self < threshold && *self > -threshold
    }
}

/// Returns true if `value` is within `epsilon` of zero.
///
/// Use [`NearlyZero::is_nearly_zero`] for the default precision dependent
/// threshold.
#[inline]
pub fn is_nearly_zero<T: NearlyZero>(value: T, epsilon: T) -> bool {
    value.is_threshold_zero(epsilon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_zero_f32() {
        assert!(0.0f32.is_nearly_zero());
        assert!(5.0e-7f32.is_nearly_zero());
        assert!((-5.0e-7f32).is_nearly_zero());
        assert!(!1.0e-6f32.is_nearly_zero());
        assert!(!(-0.1f32).is_nearly_zero());
    }

    #[test]
    fn nearly_zero_f64() {
        assert!(1.0e-13f64.is_nearly_zero());
        // Not nearly zero at double precision, but would be for f32
        assert!(!1.0e-7f64.is_nearly_zero());
    }

    #[test]
    fn explicit_epsilon() {
        assert!(is_nearly_zero(0.05f32, 0.1));
        assert!(!is_nearly_zero(0.1f32, 0.1));
        assert!(!is_nearly_zero(-0.2f64, 0.1));
    }

    #[test]
    fn inverse() {
        assert_eq!(4.0f32.inv(), 0.25);
        assert_eq!(0.0f32.inv(), 0.0);
        assert_eq!(f32::NAN.inv(), 0.0);
        assert_eq!(vec3(2.0, 0.0, -4.0).inv(), vec3(0.5, 0.0, -0.25));
    }
}
