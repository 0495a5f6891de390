use crate::geometry::primitives::Rect;

/// Trait for types that can detect collisions between `Self` and `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can check whether they lie entirely inside `T`.
pub trait ContainedBy<T> {
    fn contained_by(&self, other: &T) -> bool;
}

/// Trait for shared properties of geometric primitives.
pub trait Shape {
    /// Smallest axis-aligned rectangle enclosing the shape
    fn bbox(&self) -> Rect;
}
