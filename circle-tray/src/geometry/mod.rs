/// Traits shared by the geometric primitives
pub mod geo_traits;

/// Point, axis-aligned rectangle and circle
pub mod primitives;
