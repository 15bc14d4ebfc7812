//! Reading and writing plantri's `planar_code` format.
//!
//! A `planar_code` file is a header followed by back-to-back records:
//!
//! ```text
//! +-----------------+---+----------------+---+-----+----------------+---+
//! | >>planar_code<< | n | neighbours(1) | 0 | ... | neighbours(n) | 0 | ...
//! +-----------------+---+----------------+---+-----+----------------+---+
//! ```
//!
//! where each neighbour is a 1-indexed vertex id stored in one byte.
//! See <http://users.cecs.anu.edu.au/~bdm/plantri/plantri-guide.txt>.

pub use decode::{decode, header};
pub use encode::encode;
pub use error::{Corruption, DecodeError, EncodeError, LoadError};

use crate::graph::AdjMatrix;
use log::info;
use memmap::Mmap;
use std::fs::File;
use std::path::Path;

mod decode;
mod encode;
mod error;

pub const HEADER_PLANAR_CODE: &[u8] = b">>planar_code<<";

/// Load every graph stored in the `planar_code` file at `path`.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<AdjMatrix>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let graphs = if file.metadata()?.len() == 0 {
        decode(&[])?
    } else {
        let mmap = unsafe { Mmap::map(&file)? };
        decode(&mmap)?
    };
    info!("loaded {} graphs from {}", graphs.len(), path.display());
    Ok(graphs)
}
