use crate::{r2::R2, transform::{CanTransform, Transform::{self, Rotate, Translate}}};

use super::Polygon;

impl CanTransform for Polygon {
    type Output = Polygon;
    fn transform(&self, transform: &Transform) -> Polygon {
        let vertices = match transform {
            Translate(v) => self
                .vertices
                .iter()
                .map(|p| *p + *v)
                .collect(),
            Rotate { degrees, origin } => self
                .vertices
                .iter()
                .map(|p| p.rotate_about(*degrees, origin))
                .collect(),
        };
        Polygon { vertices }
    }
}

impl Polygon {
    /// Rigid rotation about an explicit `origin` (counter-clockwise, degrees).
    pub fn rotate(&self, degrees: f64, origin: R2<f64>) -> Polygon {
        self.transform(&Rotate { degrees, origin })
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Polygon {
        self.transform(&Translate(R2 { x: dx, y: dy }))
    }
}
