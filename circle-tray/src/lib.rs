#![doc = document_features::document_features!()]
//! `circle-tray` decides whether a set of labeled circles fits inside a rectangular tray
//! under a fixed minimum spacing, and computes a deterministic drawing of where each circle goes.

/// Entities modelling the tray, the circles and their groups
pub mod entities;

/// Geometric primitives shared by the engines and the render sink
pub mod geometry;

/// Greedy shelf-packing feasibility check
pub mod fit;

/// Side-aware grid layout of the groups
pub mod layout;

/// Parsing raw input, importing external representations and exporting results
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;
