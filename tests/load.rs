use plantri_graph::{
    analysis::{connected_monochrome_subsets, eccentricities, Distance},
    conjecture::{check_all, Verdict},
    graph::{AdjMatrix, Edge, Graph},
    planar_code::{encode, load, Corruption, DecodeError, LoadError, HEADER_PLANAR_CODE},
};
use std::collections::HashSet;
use std::io::Write;
use tempfile::NamedTempFile;

/// K4, the triangular bipyramid and the octahedron: one maximal planar graph of each
/// order from 4 to 6.
fn create_maximal_planar_graphs() -> Vec<AdjMatrix> {
    let k4 = AdjMatrix::from_edges(4, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    let bipyramid = AdjMatrix::from_edges(
        5,
        vec![
            (0, 1),
            (1, 2),
            (2, 0),
            (3, 0),
            (3, 1),
            (3, 2),
            (4, 0),
            (4, 1),
            (4, 2),
        ],
    );
    let octahedron = AdjMatrix::from_edges(
        6,
        (0..6)
            .flat_map(|i| (i + 1..6).map(move |j| (i, j)))
            .filter(|&(i, j)| j != i + 3),
    );
    vec![k4.unwrap(), bipyramid.unwrap(), octahedron.unwrap()]
}

fn write_file(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_number() {
    let graphs = create_maximal_planar_graphs();
    let file = write_file(&encode(&graphs).unwrap());
    let loaded = load(file.path()).unwrap();
    assert_eq!(loaded.len(), 3);
    for (i, graph) in loaded.iter().enumerate() {
        let n = i + 4;
        // A maximal planar graph of order n has exactly 3n - 6 edges.
        assert_eq!(graph.order(), n);
        assert_eq!(graph.vertices().len(), n);
        assert_eq!(graph.size(), 3 * n - 6);
        assert_eq!(graph.edges().len(), 3 * n - 6);
    }
    assert_eq!(loaded, graphs);
}

#[test]
fn test_load_plantri_record() {
    // plantri writes neighbours in clockwise order, not sorted.
    let mut data = HEADER_PLANAR_CODE.to_vec();
    data.extend_from_slice(&[4, 2, 3, 4, 0, 1, 4, 3, 0, 1, 2, 4, 0, 1, 3, 2, 0]);
    let file = write_file(&data);
    let graphs = load(file.path()).unwrap();
    let edges: HashSet<Edge> = graphs[0].edges().collect();
    let expected: HashSet<Edge> = (0..4)
        .flat_map(|i| (i + 1..4).map(move |j| Edge::new(i, j)))
        .collect();
    assert_eq!(edges, expected);
}

#[test]
fn test_load_errors() {
    let file = write_file(b"");
    match load(file.path()) {
        Err(LoadError::Decode(DecodeError::NoHeader)) => (),
        res => panic!("unexpected {:?}", res),
    }
    let file = write_file(b"planar_code<<\x01\x00");
    match load(file.path()) {
        Err(LoadError::Decode(DecodeError::NoHeader)) => (),
        res => panic!("unexpected {:?}", res),
    }
    let file = write_file(b">>graph6<<");
    match load(file.path()) {
        Err(LoadError::Decode(DecodeError::UnsupportedFormat(header))) => {
            assert_eq!(header, ">>graph6<<")
        }
        res => panic!("unexpected {:?}", res),
    }
    let mut data = encode(&create_maximal_planar_graphs()).unwrap();
    data.truncate(data.len() - 3);
    let file = write_file(&data);
    match load(file.path()) {
        Err(LoadError::Decode(DecodeError::Corrupted { record, cause, .. })) => {
            assert_eq!(record, 2);
            assert_eq!(cause, Corruption::Truncated);
        }
        res => panic!("unexpected {:?}", res),
    }
    let dir = tempfile::tempdir().unwrap();
    match load(dir.path().join("missing.planar")) {
        Err(LoadError::Io(_)) => (),
        res => panic!("unexpected {:?}", res),
    }
}

#[test]
fn test_loaded_graphs_analysis() {
    let file = write_file(&encode(&create_maximal_planar_graphs()).unwrap());
    let graphs = load(file.path()).unwrap();
    let eccs: Vec<Vec<Distance>> = graphs
        .iter()
        .map(|g| eccentricities(g).values().copied().collect())
        .collect();
    assert_eq!(eccs[0], vec![Distance::Finite(1); 4]);
    assert_eq!(
        eccs[1],
        vec![
            Distance::Finite(1),
            Distance::Finite(1),
            Distance::Finite(1),
            Distance::Finite(2),
            Distance::Finite(2)
        ]
    );
    assert_eq!(eccs[2], vec![Distance::Finite(2); 6]);
    let subsets = connected_monochrome_subsets(&graphs[1], &eccentricities(&graphs[1])).unwrap();
    assert_eq!(subsets.len(), 3);
    assert_eq!(
        check_all(&graphs).unwrap(),
        vec![
            Verdict::Holds,
            Verdict::Violated {
                eccentricities: vec![2]
            },
            Verdict::Holds
        ]
    );
}
