use crate::r2::R2;

/// Rigid motions applied to footprints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    Translate(R2<f64>),
    /// Counter-clockwise rotation about `origin`; there is no implicit origin.
    Rotate { degrees: f64, origin: R2<f64> },
}

pub trait CanTransform {
    type Output;
    fn transform(&self, transform: &Transform) -> Self::Output;
    /// Apply `transforms` left to right.
    fn apply(&self, transforms: &[Transform]) -> Self::Output
    where
        Self::Output: CanTransform<Output = Self::Output>,
        Self: Clone + Into<Self::Output>,
    {
        transforms
            .iter()
            .fold(self.clone().into(), |acc, t| acc.transform(t))
    }
}

impl CanTransform for R2<f64> {
    type Output = R2<f64>;
    fn transform(&self, transform: &Transform) -> R2<f64> {
        match transform {
            Transform::Translate(v) => *self + *v,
            Transform::Rotate { degrees, origin } => self.rotate_about(*degrees, origin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_left_to_right() {
        let p = R2::new(3., 1.);
        let rotate = Transform::Rotate { degrees: 90., origin: R2::new(1., 1.) };
        let translate = Transform::Translate(R2::new(-7., 2.5));
        // (3, 1) turns to (1, 3) about (1, 1), then shifts
        assert_relative_eq!(p.apply(&[rotate, translate]), R2::new(-6., 5.5), epsilon = 1e-12);
        // Shifted to (-4, 3.5) first, then turned about (1, 1)
        assert_relative_eq!(p.apply(&[translate, rotate]), R2::new(-1.5, -4.), epsilon = 1e-12);
    }
}
