use std::{ops::{Add, Div, Mul, Neg, Sub}, fmt::{self, Display, Formatter}};
use approx::{AbsDiffEq, RelativeEq};

use serde::{Deserialize, Serialize};

/// Point (or displacement) in the plane, in feet.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct R2<D> {
    pub x: D,
    pub y: D,
}

impl<D: Display> Display for R2<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

impl R2<f64> {
    pub fn new(x: f64, y: f64) -> Self {
        R2 { x, y }
    }

    pub fn zero() -> Self {
        R2 { x: 0., y: 0. }
    }

    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn dot(&self, o: &R2<f64>) -> f64 {
        self.x * o.x + self.y * o.y
    }

    /// z-component of the 3D cross product.
    pub fn cross(&self, o: &R2<f64>) -> f64 {
        self.x * o.y - self.y * o.x
    }

    /// Counter-clockwise rotation by `degrees` about `origin`.
    pub fn rotate_about(&self, degrees: f64, origin: &R2<f64>) -> R2<f64> {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let d = *self - *origin;
        R2 {
            x: origin.x + d.x * cos - d.y * sin,
            y: origin.y + d.x * sin + d.y * cos,
        }
    }
}

impl From<(f64, f64)> for R2<f64> {
    fn from((x, y): (f64, f64)) -> Self {
        R2 { x, y }
    }
}

impl From<R2<f64>> for (f64, f64) {
    fn from(p: R2<f64>) -> Self {
        (p.x, p.y)
    }
}

impl AbsDiffEq for R2<f64> {
    type Epsilon = f64;
    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for R2<f64> {
    fn default_max_relative() -> Self::Epsilon {
        f64::default_max_relative()
    }
    fn relative_eq(&self, other: &Self, epsilon: Self::Epsilon, max_relative: Self::Epsilon) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative) && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl<D: Add<Output = D>> Add for R2<D> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        R2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<D: Sub<Output = D>> Sub for R2<D> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        R2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<D: Neg<Output = D>> Neg for R2<D> {
    type Output = Self;
    fn neg(self) -> Self::Output {
        R2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<D: Mul<D, Output = D> + Clone> Mul<D> for R2<D> {
    type Output = Self;
    fn mul(self, rhs: D) -> Self::Output {
        R2 {
            x: self.x * rhs.clone(),
            y: self.y * rhs,
        }
    }
}

impl<D: Div<D, Output = D> + Clone> Div<D> for R2<D> {
    type Output = Self;
    fn div(self, rhs: D) -> Self::Output {
        R2 {
            x: self.x / rhs.clone(),
            y: self.y / rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotate_about_origin_quarter_turn() {
        let p = R2::new(1., 0.);
        let r = p.rotate_about(90., &R2::zero());
        assert_relative_eq!(r, R2::new(0., 1.), epsilon = 1e-12);
    }

    #[test]
    fn rotate_about_offset_origin_keeps_origin_fixed() {
        let origin = R2::new(10., -4.);
        assert_relative_eq!(origin.rotate_about(37., &origin), origin, epsilon = 1e-12);

        let p = R2::new(12., -4.);
        let r = p.rotate_about(180., &origin);
        assert_relative_eq!(r, R2::new(8., -4.), epsilon = 1e-12);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", R2::new(1.23456, -2.)), "(1.235, -2.000)");
    }
}
