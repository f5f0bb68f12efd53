//! Proxy assembly: stitching a window of tiles into one contiguous region.
//!
//! A proxy of `n x n` tiles has `(H - 1) * n + 1` samples per side: each tile
//! boundary contributes its shared edge once and the proxy keeps one closing
//! edge of its own.

pub mod assembler;
pub mod plan;
pub mod result;

pub use assembler::ProxyAssembler;
pub use plan::{proxy_windows, ProxyWindow};
pub use result::ProxyResult;
