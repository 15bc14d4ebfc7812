//! The connected eccentricity level set conjecture.
//!
//! The conjecture states that in a maximal planar graph the vertices of any given
//! eccentricity induce a connected subgraph. Graphs that are not maximal planar are
//! checked just the same, it is up to the caller to feed the right kind of graph.

use crate::{
    analysis::{connected_monochrome_subsets, eccentricities},
    graph::{Graph, Result},
};
use derive_more::Display;
use itertools::Itertools;
use log::{debug, info};
use rayon::prelude::*;

/// The outcome of checking one graph.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum Verdict {
    #[display(fmt = "true")]
    Holds,
    /// Each listed eccentricity is shared by more than one connected subset.
    #[display(fmt = "false")]
    Violated { eccentricities: Vec<u32> },
    /// Eccentricities are infinite, so there is nothing to check.
    #[display(fmt = "disconnected")]
    Disconnected,
}

impl Verdict {
    pub fn is_violated(&self) -> bool {
        matches!(self, Verdict::Violated { .. })
    }
}

pub fn check<G: Graph + ?Sized>(graph: &G) -> Result<Verdict> {
    let eccs = eccentricities(graph);
    if eccs.values().any(|ecc| !ecc.is_finite()) {
        return Ok(Verdict::Disconnected);
    }
    // Every vertex of a subset has the same eccentricity, so one vertex is enough.
    let violations: Vec<u32> = connected_monochrome_subsets(graph, &eccs)?
        .iter()
        .filter_map(|subset| subset.first())
        .filter_map(|v| eccs.get(&v.id()).and_then(|ecc| ecc.finite()))
        .counts()
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(ecc, _)| ecc)
        .sorted()
        .collect();
    debug!("eccentricities {:?} violations {:?}", eccs, violations);
    if violations.is_empty() {
        Ok(Verdict::Holds)
    } else {
        Ok(Verdict::Violated {
            eccentricities: violations,
        })
    }
}

/// Check every graph in parallel; verdicts are returned in the order of `graphs`.
pub fn check_all<G: Graph + Sync>(graphs: &[G]) -> Result<Vec<Verdict>> {
    let verdicts: Vec<Verdict> = graphs
        .par_iter()
        .map(|graph| check(graph))
        .collect::<Result<_>>()?;
    info!(
        "checked {} graphs, {} violations",
        verdicts.len(),
        verdicts.iter().filter(|v| v.is_violated()).count()
    );
    Ok(verdicts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        generators::{complete, cycle, path},
        graph::AdjMatrix,
    };

    fn create_octahedron() -> AdjMatrix {
        let mut edges = Vec::new();
        for i in 0..6 {
            for j in i + 1..6 {
                if j != i + 3 {
                    edges.push((i, j));
                }
            }
        }
        AdjMatrix::from_edges(6, edges).unwrap()
    }

    #[test]
    fn test_holds() {
        assert_eq!(check(&path(2)), Ok(Verdict::Holds));
        assert_eq!(check(&cycle(7)), Ok(Verdict::Holds));
        assert_eq!(check(&complete(5)), Ok(Verdict::Holds));
        assert_eq!(check(&create_octahedron()), Ok(Verdict::Holds));
        assert_eq!(check(&AdjMatrix::new(0)), Ok(Verdict::Holds));
    }

    #[test]
    fn test_violated() {
        assert_eq!(
            check(&path(5)),
            Ok(Verdict::Violated {
                eccentricities: vec![3, 4]
            })
        );
    }

    #[test]
    fn test_disconnected() {
        let g = AdjMatrix::from_edges(3, vec![(0, 1)]).unwrap();
        assert_eq!(check(&g), Ok(Verdict::Disconnected));
    }

    #[test]
    fn test_check_all() {
        let graphs = vec![complete(4), path(5), AdjMatrix::new(2), cycle(4)];
        let verdicts = check_all(&graphs).unwrap();
        assert_eq!(
            verdicts.iter().map(|v| v.to_string()).collect::<Vec<_>>(),
            vec!["true", "false", "disconnected", "true"]
        );
    }
}
