//! Plane graph loading and eccentricity analysis for plantri output.

pub mod analysis;
pub mod conjecture;
pub mod generators;
pub mod graph;
pub mod planar_code;
pub mod types;
