//! Small example graphs.

use crate::graph::{AdjMatrix, Graph};

/// The path graph on `n` vertices, `0 - 1 - ... - (n-1)`.
pub fn path(n: usize) -> AdjMatrix {
    let mut res = AdjMatrix::new(n);
    for i in 1..n {
        connect(&mut res, i - 1, i);
    }
    res
}

/// The cycle graph on `n` vertices.
///
/// For `n < 3` there is no cycle and the result is the path graph.
pub fn cycle(n: usize) -> AdjMatrix {
    let mut res = path(n);
    if n >= 3 {
        connect(&mut res, n - 1, 0);
    }
    res
}

/// The complete graph on `n` vertices.
pub fn complete(n: usize) -> AdjMatrix {
    let mut res = AdjMatrix::new(n);
    for i in 0..n {
        for j in i + 1..n {
            connect(&mut res, i, j);
        }
    }
    res
}

fn connect(graph: &mut AdjMatrix, i: usize, j: usize) {
    if let Err(err) = graph.add_edge(i, j) {
        unreachable!("generated edge rejected: {}", err);
    }
}
