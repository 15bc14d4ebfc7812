//! Error management.

use crate::types::VId;
use derive_more::Display;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Err {
    #[display(fmt = "vertex pair ({}, {}) out of bounds", _0, _1)]
    OutOfBounds(VId, VId),
    #[display(fmt = "vertex {} not found", _0)]
    VertexNotFound(VId),
    #[display(fmt = "vertex {} has no color", _0)]
    Uncoloured(VId),
}

impl std::error::Error for Err {}

pub type Result<T> = std::result::Result<T, Err>;
