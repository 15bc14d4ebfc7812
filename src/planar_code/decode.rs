use super::{Corruption, DecodeError, HEADER_PLANAR_CODE};
use crate::graph::{AdjMatrix, Graph};
use log::debug;

type Result<T> = std::result::Result<T, DecodeError>;

/// Find the header at the start of `data`.
///
/// A header starts with `>>` and ends with the first `<<` after it.
pub fn header(data: &[u8]) -> Result<&[u8]> {
    if data.len() < 4 || !data.starts_with(b">>") {
        return Err(DecodeError::NoHeader);
    }
    let mut cc = 0;
    for (i, &byte) in data.iter().enumerate().skip(2) {
        if byte == b'<' {
            cc += 1;
        } else {
            cc = 0;
        }
        if cc == 2 {
            return Ok(&data[..=i]);
        }
    }
    Err(DecodeError::NoHeader)
}

/// Decode every graph in `data`.
///
/// Either all graphs are returned, in file order, or the first error found.
pub fn decode(data: &[u8]) -> Result<Vec<AdjMatrix>> {
    let header = header(data)?;
    if header != HEADER_PLANAR_CODE {
        return Err(DecodeError::UnsupportedFormat(
            String::from_utf8_lossy(header).into_owned(),
        ));
    }
    let mut reader = Reader {
        data,
        offset: header.len(),
        record: 0,
    };
    let mut graphs = Vec::new();
    while !reader.is_empty() {
        let graph = reader.read_graph()?;
        debug!(
            "record {}: order={} size={}",
            reader.record,
            graph.order(),
            graph.size()
        );
        graphs.push(graph);
        reader.record += 1;
    }
    Ok(graphs)
}

struct Reader<'a> {
    data: &'a [u8],
    offset: usize,
    record: usize,
}

impl<'a> Reader<'a> {
    fn is_empty(&self) -> bool {
        self.offset == self.data.len()
    }

    fn corrupted(&self, offset: usize, cause: Corruption) -> DecodeError {
        DecodeError::Corrupted {
            record: self.record,
            offset,
            cause,
        }
    }

    fn read_byte(&mut self) -> Result<u8> {
        match self.data.get(self.offset) {
            Some(&byte) => {
                self.offset += 1;
                Ok(byte)
            }
            None => Err(self.corrupted(self.offset, Corruption::Truncated)),
        }
    }

    fn read_graph(&mut self) -> Result<AdjMatrix> {
        let start = self.offset;
        let n = self.read_byte()? as usize;
        if n == 0 {
            return Err(self.corrupted(start, Corruption::EmptyRecord));
        }
        let mut res = AdjMatrix::new(n);
        for v in 0..n {
            loop {
                let offset = self.offset;
                let byte = self.read_byte()?;
                if byte == 0 {
                    break;
                }
                // planar_code is 1-indexed
                if res.add_edge(v, byte as usize - 1).is_err() {
                    return Err(self.corrupted(offset, Corruption::NeighbourOutOfRange(byte)));
                }
            }
        }
        Ok(res)
    }
}
