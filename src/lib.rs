//! # textmap
//!
//! A pure-Rust editor for UDMF text maps embedded in WAD archives.
//!
//! The Universal Doom Map Format stores a map as plain text in a
//! `TEXTMAP` lump, bracketed by a header lump carrying the map's name and
//! an `ENDMAP` sentinel. This crate parses that text into a typed object
//! model ([`MapDocument`]), lets you edit it, and writes it back by
//! replacing exactly one lump; every other record in the container is
//! copied byte-identical.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::io::Cursor;
//! use textmap::{Scalar, UdmfEditor, WadFile, WadWriter};
//!
//! fn main() -> textmap::Result<()> {
//!     // Build a tiny WAD in memory (normally you would open a file).
//!     let mut wad = WadWriter::new(Cursor::new(Vec::new()));
//!     wad.insert("MAP01", b"")?;
//!     wad.insert("TEXTMAP", b"namespace = \"doom\";\nthing { x = 32.0; type = 1; }\n")?;
//!     wad.insert("ENDMAP", b"")?;
//!     let bytes = wad.finish()?.into_inner();
//!
//!     // Snapshot the container and load the map.
//!     let mut editor = UdmfEditor::from_wad(&mut WadFile::open(Cursor::new(bytes))?)?;
//!     let doc = editor.load("MAP01")?;
//!
//!     // Edit: move the thing and retag it.
//!     let thing = &mut doc.blocks_mut()[0];
//!     thing.set("x", Scalar::Float(64.0));
//!     thing.set("type", 2i64);
//!
//!     // Write a new container; only TEXTMAP changes.
//!     let output = editor.save_to(Vec::new())?;
//!     assert!(!output.is_empty());
//!     Ok(())
//! }
//! ```
//!
//! For on-disk WADs use [`UdmfEditor::open_path`] and
//! [`UdmfEditor::save`].
//!
//! ## Scope
//!
//! - Text (UDMF) maps only; the binary map lump formats are out of scope.
//! - No geometric or semantic validation: a `linedef` may reference any
//!   vertex index, valid or not.
//! - One map per editing session.
//! - Unrecognized block kinds are kept, not rejected: they round-trip
//!   through [`BlockKind::Generic`] with all attributes intact.

pub mod edit;
pub mod error;
pub mod map;
pub mod udmf;
pub mod value;
pub mod wad;

pub use edit::UdmfEditor;
pub use error::{Error, Result};
pub use map::{Block, BlockKind, MapDocument};
pub use value::Scalar;
pub use wad::{DirEntry, Lump, WadFile, WadKind, WadWriter};
