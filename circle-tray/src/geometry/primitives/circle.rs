use crate::geometry::geo_traits::{CollidesWith, ContainedBy, Shape};
use crate::geometry::primitives::{Point, Rect};
use crate::util::FPA;

/// Geometric primitive representing a circle
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Circle {
    pub center: Point,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Point, radius: f32) -> Self {
        debug_assert!(
            radius.is_finite() && radius >= 0.0,
            "invalid circle radius: {radius}"
        );
        debug_assert!(
            center.0.is_finite() && center.1.is_finite(),
            "invalid circle center: {center:?}"
        );

        Self { center, radius }
    }
}

impl CollidesWith<Circle> for Circle {
    fn collides_with(&self, other: &Circle) -> bool {
        // touching circles are not considered colliding
        FPA(self.center.distance(&other.center)) < FPA(self.radius + other.radius)
    }
}

impl ContainedBy<Rect> for Circle {
    fn contained_by(&self, rect: &Rect) -> bool {
        self.bbox().contained_by(rect)
    }
}

impl Shape for Circle {
    fn bbox(&self) -> Rect {
        let (r, x, y) = (self.radius, self.center.0, self.center.1);
        Rect {
            x_min: x - r,
            y_min: y - r,
            x_max: x + r,
            y_max: y + r,
        }
    }
}
