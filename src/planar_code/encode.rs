use super::{EncodeError, HEADER_PLANAR_CODE};
use crate::{
    graph::{AdjMatrix, Graph},
    types::MAX_PLANAR_CODE_ORDER,
};

/// Encode `graphs` as a `planar_code` file.
///
/// The `k`-th vertex of `graph.vertices()` is written as `k + 1`, and neighbour lists
/// are written in increasing order. `planar_code` proper lists neighbours in clockwise
/// order, which a plain graph does not know; readers of this crate ignore the order.
pub fn encode<G: Graph>(graphs: &[G]) -> Result<Vec<u8>, EncodeError> {
    let mut res = HEADER_PLANAR_CODE.to_vec();
    for (i, graph) in graphs.iter().enumerate() {
        match graph.order() {
            0 => return Err(EncodeError::EmptyGraph(i)),
            order if order > MAX_PLANAR_CODE_ORDER => {
                return Err(EncodeError::TooManyVertices { graph: i, order })
            }
            order => {
                let matrix = AdjMatrix::from_graph(graph);
                res.push(order as u8);
                for v in 0..order {
                    let neighbours = match matrix.neighbours(v) {
                        Ok(neighbours) => neighbours,
                        Err(err) => unreachable!("{}", err),
                    };
                    res.extend(neighbours.into_iter().map(|n| (n + 1) as u8));
                    res.push(0);
                }
            }
        }
    }
    Ok(res)
}
