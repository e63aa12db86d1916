use std::ops::*;

use super::Vec2;

impl<T> Neg for Vec2<T>
where
    T: Neg<Output = T> + Copy,
{
    type Output = Vec2<T>;
    fn neg(self) -> Vec2<T> {
        Vec2::<T> {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<T> Add for Vec2<T>
where
    T: Add<Output = T> + Copy,
{
    type Output = Vec2<T>;
    fn add(self, other: Vec2<T>) -> Vec2<T> {
        Vec2::<T> {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl<T> Sub for Vec2<T>
where
    T: Sub<Output = T> + Copy,
{
    type Output = Vec2<T>;
    fn sub(self, other: Vec2<T>) -> Vec2<T> {
        Vec2::<T> {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl<T> Mul<T> for Vec2<T>
where
    T: Mul<Output = T> + Copy,
{
    type Output = Vec2<T>;

    fn mul(self, other: T) -> Vec2<T> {
        Vec2::<T> {
            x: self.x * other,
            y: self.y * other,
        }
    }
}

impl<T> AddAssign for Vec2<T>
where
    T: AddAssign + Copy,
{
    fn add_assign(&mut self, other: Vec2<T>) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl<T> SubAssign for Vec2<T>
where
    T: SubAssign + Copy,
{
    fn sub_assign(&mut self, other: Vec2<T>) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl Vec2<f32> {
    pub const fn new(x: f32, y: f32) -> Vec2<f32> {
        Vec2::<f32> { x, y }
    }

    pub const fn zero() -> Vec2<f32> {
        Vec2::<f32> { x: 0.0, y: 0.0 }
    }

    /// Unit vector pointing at `angle` radians, scaled by `length`.
    pub fn from_polar(angle: f32, length: f32) -> Vec2<f32> {
        let (y, x) = angle.sin_cos();
        Vec2::<f32> {
            x: x * length,
            y: y * length,
        }
    }

    pub fn angle(self) -> f32 {
        self.y.atan2(self.x)
    }

    #[cfg(test)]
    pub fn mag(self) -> f32 {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }

    pub fn abs(self) -> Vec2<f32> {
        Vec2::<f32> {
            x: self.x.abs(),
            y: self.y.abs(),
        }
    }

    #[cfg(test)]
    /// Largest absolute component.
    pub fn max(self) -> f32 {
        f32::max(self.x.abs(), self.y.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polar_round_trips_through_angle() {
        let v = Vec2::from_polar(1.0, 3.0);
        assert!((v.mag() - 3.0).abs() < 1e-5);
        assert!((v.angle() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn max_is_chebyshev_norm() {
        assert_eq!(Vec2::new(-4.0, 2.5).max(), 4.0);
        assert_eq!(Vec2::new(1.0, -7.0).abs(), Vec2::new(1.0, 7.0));
    }

    #[test]
    fn assign_ops() {
        let mut v = Vec2::new(1.0, 1.0);
        v += Vec2::new(2.0, -3.0);
        assert_eq!(v, Vec2::new(3.0, -2.0));
        v -= Vec2::new(3.0, -2.0);
        assert_eq!(v, Vec2::zero());
        assert_eq!(-(Vec2::new(1.0, 2.0) * 2.0), Vec2::new(-2.0, -4.0));
    }
}
