//! The typed object model for UDMF maps.
//!
//! A parsed map is a [`MapDocument`]: an ordered sequence of [`Block`]s
//! (things, vertices, line definitions, side definitions, sectors, plus a
//! generic fallback for unrecognized kinds) and a map of global metadata
//! assignments. Both the document and each block serialize back to UDMF
//! text with attribute order preserved byte-for-byte.

mod block;
mod document;

pub use block::{Block, BlockKind};
pub use document::MapDocument;
