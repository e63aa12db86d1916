use crate::math::Vec2;

/// 2x3 affine matrix mapping `(x, y)` to
/// `(a*x + c*y + e, b*x + d*y + f)`.
#[derive(Debug, Clone, Copy, PartialEq)]
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
    pub const IDENTITY: Affine = Affine {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    /// Applies a translation before this transform.
    pub fn translate(self, v: Vec2<f32>) -> Affine {
        Affine {
            e: self.a * v.x + self.c * v.y + self.e,
            f: self.b * v.x + self.d * v.y + self.f,
            ..self
        }
    }

    /// Applies a rotation (radians, clockwise on screen) before this transform.
    pub fn rotate(self, angle: f32) -> Affine {
        let (sin, cos) = angle.sin_cos();
        Affine {
            a: self.a * cos + self.c * sin,
            b: self.b * cos + self.d * sin,
            c: self.c * cos - self.a * sin,
            d: self.d * cos - self.b * sin,
            ..self
        }
    }

    pub fn apply(&self, p: Vec2<f32>) -> Vec2<f32> {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    pub fn inverse(&self) -> Option<Affine> {
        let det = self.a * self.d - self.b * self.c;

        if det.abs() < f32::EPSILON || !det.is_finite() {
            return None;
        }

        let a = self.d / det;
        let b = -self.b / det;
        let c = -self.c / det;
        let d = self.a / det;

        Some(Affine {
            a,
            b,
            c,
            d,
            e: -(a * self.e + c * self.f),
            f: -(b * self.e + d * self.f),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(p: Vec2<f32>, q: Vec2<f32>) -> bool {
        (p - q).max() < 1e-4
    }

    #[test]
    fn translate_then_rotate_matches_canvas_order() {
        let t = Affine::IDENTITY
            .translate(Vec2::new(10.0, 20.0))
            .rotate(std::f32::consts::FRAC_PI_2);

        // Local +x points down the screen after a quarter turn.
        assert!(close(t.apply(Vec2::new(1.0, 0.0)), Vec2::new(10.0, 21.0)));
        assert!(close(t.apply(Vec2::zero()), Vec2::new(10.0, 20.0)));
    }

    #[test]
    fn inverse_undoes_apply() {
        let t = Affine::IDENTITY.translate(Vec2::new(-3.0, 7.5)).rotate(0.7);
        let inv = t.inverse().unwrap();
        let p = Vec2::new(12.0, -4.0);
        assert!(close(inv.apply(t.apply(p)), p));
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        let t = Affine {
            a: 0.0,
            d: 0.0,
            ..Affine::IDENTITY
        };
        assert_eq!(t.inverse(), None);
    }
}
