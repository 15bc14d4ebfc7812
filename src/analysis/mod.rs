//! Graph analyses built on the [`Graph`](../graph/trait.Graph.html) trait.

pub use connectedness::{connected_monochrome_subsets, Coloring};
pub use distance::Distance;
pub use eccentricity::{distances, eccentricities, DistanceMatrix};
pub use index::IdIndex;

mod connectedness;
mod distance;
mod eccentricity;
mod index;
