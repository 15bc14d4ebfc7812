//! Various types shared by the graph model and the analyses.

/// The vertex id type.
pub type VId = usize;

/// The largest vertex count a `planar_code` record can describe.
pub const MAX_PLANAR_CODE_ORDER: usize = u8::MAX as usize;
