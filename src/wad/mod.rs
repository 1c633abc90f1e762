//! Minimal WAD container support.
//!
//! A WAD archive is an ordered sequence of named binary records (lumps):
//! a 12-byte header (`IWAD`/`PWAD` signature, lump count, directory
//! offset), the raw lump data, and a directory of 16-byte entries with
//! 8-byte NUL-padded names. Order is significant; names are not unique.
//!
//! This module provides exactly what the map editor consumes: an ordered
//! read-only directory with indexed raw reads ([`WadFile`]) and an
//! append-then-commit writer ([`WadWriter`]). Nothing here interprets
//! lump contents.

mod reader;
mod writer;

pub use reader::{DirEntry, WadFile};
pub use writer::WadWriter;

/// The two WAD flavors, distinguished only by signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WadKind {
    /// An "internal" WAD, a complete game data set.
    Iwad,
    /// A "patch" WAD, overriding lumps of an IWAD.
    Pwad,
}

impl WadKind {
    pub(crate) fn signature(self) -> &'static [u8; 4] {
        match self {
            Self::Iwad => b"IWAD",
            Self::Pwad => b"PWAD",
        }
    }
}

/// One container record: a name and its raw bytes.
///
/// A `Vec<Lump>` read eagerly from a [`WadFile`] is the snapshot the
/// editor works from, decoupling editing from the container's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lump {
    /// The record name, at most 8 ASCII characters.
    pub name: String,
    /// The record's raw bytes.
    pub data: Vec<u8>,
}

impl Lump {
    /// Creates a lump from a name and raw bytes.
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

/// Checks a name against the WAD directory constraints:
/// 1..=8 printable ASCII bytes.
pub(crate) fn validate_name(name: &str) -> crate::Result<()> {
    let ok = !name.is_empty()
        && name.len() <= 8
        && name.bytes().all(|b| (0x21..=0x7e).contains(&b));
    if ok {
        Ok(())
    } else {
        Err(crate::Error::InvalidLumpName {
            name: name.to_string(),
        })
    }
}
