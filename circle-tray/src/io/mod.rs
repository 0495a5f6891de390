/// External (serializable) representations of the entities within the library.
pub mod ext_repr;

/// Typed, permissive parsing of the textual input formats
pub mod parser;

/// All logic for converting external representations into internal ones
pub mod import;

/// All logic for exporting internal representations into external ones
pub mod export;

/// Painting layouts as SVG documents
#[cfg(feature = "svg-export")]
pub mod svg;
