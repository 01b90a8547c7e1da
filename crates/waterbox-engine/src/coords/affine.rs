use core::ops::Mul;

use super::Vec2;

/// 2D affine transform in canvas column order.
///
/// ```text
/// | a c e |     x' = a·x + c·y + e
/// | b d f |     y' = b·x + d·y + f
/// | 0 0 1 |
/// ```
///
/// `lhs * rhs` applies `rhs` first, so a chain reads outermost-first like a
/// sequence of canvas `translate`/`scale`/`rotate` calls.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Affine = Affine { a: 1.0, b: 0.0, c: 0.0, d: 1.0, e: 0.0, f: 0.0 };

    #[inline]
    pub const fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self { a, b, c, d, e, f }
    }

    #[inline]
    pub const fn translate(tx: f32, ty: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    #[inline]
    pub const fn scale(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    #[inline]
    pub fn rotate(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    /// Vertical shear: `y' = y + k·x`, x is left untouched.
    #[inline]
    pub const fn skew_y(k: f32) -> Self {
        Self::new(1.0, k, 0.0, 1.0, 0.0, 0.0)
    }

    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    #[cfg(test)]
    pub(crate) fn is_finite(&self) -> bool {
        [self.a, self.b, self.c, self.d, self.e, self.f].iter().all(|v| v.is_finite())
    }
}

impl Mul for Affine {
    type Output = Affine;

    fn mul(self, rhs: Affine) -> Affine {
        Affine {
            a: self.a * rhs.a + self.c * rhs.b,
            b: self.b * rhs.a + self.d * rhs.b,
            c: self.a * rhs.c + self.c * rhs.d,
            d: self.b * rhs.c + self.d * rhs.d,
            e: self.a * rhs.e + self.c * rhs.f + self.e,
            f: self.b * rhs.e + self.d * rhs.f + self.f,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < 1e-4 && (a.y - b.y).abs() < 1e-4
    }

    #[test]
    fn identity_is_noop() {
        let p = Vec2::new(3.0, -7.0);
        assert_eq!(Affine::IDENTITY.apply(p), p);
    }

    #[test]
    fn composition_applies_right_first() {
        // scale then translate
        let m = Affine::translate(10.0, 20.0) * Affine::scale(2.0, 3.0);
        assert!(close(m.apply(Vec2::new(1.0, 1.0)), Vec2::new(12.0, 23.0)));
    }

    #[test]
    fn rotation_turns_x_towards_y() {
        let m = Affine::rotate(core::f32::consts::FRAC_PI_2);
        assert!(close(m.apply(Vec2::new(1.0, 0.0)), Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn skew_y_keeps_x() {
        let m = Affine::skew_y(0.5);
        assert!(close(m.apply(Vec2::new(4.0, 1.0)), Vec2::new(4.0, 3.0)));
    }

    #[test]
    fn composition_is_associative() {
        let a = Affine::translate(1.0, 2.0);
        let b = Affine::rotate(0.3);
        let c = Affine::scale(2.0, 0.5);
        let p = Vec2::new(5.0, -1.0);
        assert!(close(((a * b) * c).apply(p), (a * (b * c)).apply(p)));
    }
}
