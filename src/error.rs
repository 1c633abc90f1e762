//! Error types for UDMF map editing.
//!
//! This module provides the [`Error`] enum which represents all possible
//! failure modes when locating, parsing, editing, and writing back a UDMF
//! map, along with a convenient [`Result<T>`] type alias.
//!
//! All fallible operations in this crate return `Result<T, Error>`. Errors
//! are terminal for the operation in progress: a failed `load` produces no
//! partial document, and a failed `save` leaves the output unusable rather
//! than half-written. Retry policy, if any, belongs to the caller.
//!
//! # Exhaustive Error Matching
//!
//! ```rust,no_run
//! use textmap::{Error, UdmfEditor};
//!
//! fn load_or_report(path: &str, map: &str) -> textmap::Result<()> {
//!     let mut editor = UdmfEditor::open_path(path)?;
//!     match editor.load(map) {
//!         Ok(_) => Ok(()),
//!         Err(Error::MapNotFound { name }) => {
//!             eprintln!("no UDMF map named {} in this WAD", name);
//!             Err(Error::MapNotFound { name })
//!         }
//!         Err(Error::Syntax { line, column, message }) => {
//!             eprintln!("TEXTMAP is malformed at {}:{}", line, column);
//!             Err(Error::Syntax { line, column, message })
//!         }
//!         Err(e) => Err(e),
//!     }
//! }
//! ```

use std::io;

/// The main error type for UDMF map operations.
///
/// This enum represents all possible errors that can occur when reading a
/// WAD container, locating a map, parsing its text, or writing the edited
/// map back out. Each variant includes relevant context to help diagnose
/// the issue.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred during container operations.
    ///
    /// This wraps [`std::io::Error`] and is propagated unchanged from the
    /// underlying reader or writer. Common causes include a missing file,
    /// permission problems, or a disk filling up mid-save.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The container is not a valid WAD archive.
    ///
    /// Returned when the file lacks an `IWAD`/`PWAD` signature, or when the
    /// directory is truncated or inconsistent with the file size. The string
    /// describes what was expected vs. found.
    #[error("Invalid WAD format: {0}")]
    InvalidFormat(String),

    /// A lump index passed to `read` is outside the directory.
    #[error("Lump index {index} out of range (archive has {count} lumps)")]
    LumpOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of lumps in the directory.
        count: usize,
    },

    /// A lump name is not representable in a WAD directory entry.
    ///
    /// Names are limited to 1..=8 printable ASCII bytes.
    #[error("Invalid lump name: {name:?}")]
    InvalidLumpName {
        /// The offending name.
        name: String,
    },

    /// No UDMF map with the requested name exists in the container.
    ///
    /// Raised after the full directory scan finds no header lump with the
    /// requested name that is immediately followed by a `TEXTMAP` lump.
    #[error("Unable to find an UDMF map named {name:?}")]
    MapNotFound {
        /// The requested map name.
        name: String,
    },

    /// The map text does not conform to the UDMF grammar.
    ///
    /// The parse is aborted at the first failure; no partial document is
    /// produced. Line and column are 1-based positions into the `TEXTMAP`
    /// text.
    #[error("Syntax error at {line}:{column}: {message}")]
    Syntax {
        /// 1-based line of the failure.
        line: usize,
        /// 1-based column of the failure.
        column: usize,
        /// What the parser expected or found.
        message: String,
    },

    /// A bare keyword was used as a value.
    ///
    /// The UDMF base grammar admits unquoted keyword tokens in value
    /// position, but no keyword extension is supported here: such maps fail
    /// loudly instead of being silently mis-parsed.
    #[error("Unsupported keyword value {token:?} at {line}:{column}")]
    UnsupportedValue {
        /// The offending token, verbatim.
        token: String,
        /// 1-based line of the token.
        line: usize,
        /// 1-based column of the token.
        column: usize,
    },

    /// A text payload contains bytes outside the ASCII range.
    ///
    /// UDMF text lumps are 7-bit ASCII. This is raised both when decoding a
    /// `TEXTMAP` lump on load and when encoding the serialized document on
    /// save (an edit may have introduced non-ASCII string data).
    #[error("Lump {lump:?} is not valid ASCII text")]
    Encoding {
        /// The name of the lump being decoded or encoded.
        lump: String,
    },

    /// `serialize` or `save` was called before a successful `load`.
    #[error("No map loaded; call load() first")]
    NoMapLoaded,
}

impl Error {
    /// Returns `true` if this error came from the UDMF text itself
    /// (grammar or semantic failure) rather than from the container.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Syntax { .. } | Self::UnsupportedValue { .. })
    }

    /// Returns `true` if this error indicates a damaged or non-WAD
    /// container rather than a problem with the map text.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidFormat(_) | Self::LumpOutOfRange { .. } | Self::Encoding { .. }
        )
    }
}

/// A specialized `Result` type for UDMF map operations.
pub type Result<T> = std::result::Result<T, Error>;
