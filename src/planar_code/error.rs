//! Error management.

use derive_more::{Display, From};

/// Why a record could not be decoded.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Corruption {
    #[display(fmt = "unexpected end of data")]
    Truncated,
    #[display(fmt = "record declares no vertices")]
    EmptyRecord,
    #[display(fmt = "neighbour {} out of range", _0)]
    NeighbourOutOfRange(u8),
}

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[display(fmt = "no header found")]
    NoHeader,
    #[display(fmt = "unsupported file type {:?}", _0)]
    UnsupportedFormat(String),
    #[display(fmt = "record {} corrupted at byte {}: {}", record, offset, cause)]
    Corrupted {
        record: usize,
        offset: usize,
        cause: Corruption,
    },
}

impl std::error::Error for DecodeError {}

#[derive(Debug, Display, From)]
pub enum LoadError {
    #[display(fmt = "{}", _0)]
    Io(std::io::Error),
    #[display(fmt = "{}", _0)]
    Decode(DecodeError),
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::Decode(err) => Some(err),
        }
    }
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    #[display(fmt = "graph {} has no vertices", _0)]
    EmptyGraph(usize),
    #[display(fmt = "graph {} has {} vertices", graph, order)]
    TooManyVertices { graph: usize, order: usize },
}

impl std::error::Error for EncodeError {}
