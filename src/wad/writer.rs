//! Writing WAD archives.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::wad::{validate_name, Lump, WadKind};
use crate::{Error, Result};

/// A writer for a new WAD archive.
///
/// Lumps are buffered in insertion order; [`finish`](Self::finish) lays
/// out the header, lump data, and directory, and flushes the sink. A
/// dropped writer commits nothing.
#[derive(Debug)]
pub struct WadWriter<W> {
    writer: W,
    kind: WadKind,
    lumps: Vec<Lump>,
}

impl WadWriter<BufWriter<File>> {
    /// Creates a new WAD file at `path`, truncating any existing file.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> WadWriter<W> {
    /// Creates a writer over any sink. The archive is a PWAD unless
    /// changed with [`with_kind`](Self::with_kind).
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            kind: WadKind::Pwad,
            lumps: Vec::new(),
        }
    }

    /// Sets the archive flavor.
    pub fn with_kind(mut self, kind: WadKind) -> Self {
        self.kind = kind;
        self
    }

    /// Appends a lump. Records appear in the output in insertion order;
    /// duplicate names are allowed.
    pub fn insert(&mut self, name: &str, data: &[u8]) -> Result<()> {
        validate_name(name)?;
        self.lumps.push(Lump::new(name, data));
        Ok(())
    }

    /// Appends a lump copied from an existing container, keeping whatever
    /// name the source directory carried. Only the 8-byte ASCII directory
    /// field limits apply, so every name a [`WadFile`] can produce passes
    /// through unchanged.
    ///
    /// [`WadFile`]: crate::wad::WadFile
    pub(crate) fn insert_raw(&mut self, name: &str, data: &[u8]) -> Result<()> {
        if name.len() > 8 || !name.is_ascii() {
            return Err(Error::InvalidLumpName {
                name: name.to_string(),
            });
        }
        self.lumps.push(Lump::new(name, data));
        Ok(())
    }

    /// The number of lumps inserted so far.
    pub fn len(&self) -> usize {
        self.lumps.len()
    }

    /// Returns `true` if nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.lumps.is_empty()
    }

    /// Writes header, lump data, and directory, then flushes.
    ///
    /// Returns the underlying sink so in-memory targets can be recovered.
    pub fn finish(mut self) -> Result<W> {
        let count = u32::try_from(self.lumps.len())
            .map_err(|_| Error::InvalidFormat("too many lumps for a WAD directory".into()))?;
        let data_size: u64 = self.lumps.iter().map(|lump| lump.data.len() as u64).sum();
        let dir_offset = u32::try_from(12 + data_size)
            .map_err(|_| Error::InvalidFormat("lump data exceeds the 4 GiB WAD limit".into()))?;

        self.writer.write_all(self.kind.signature())?;
        self.writer.write_all(&count.to_le_bytes())?;
        self.writer.write_all(&dir_offset.to_le_bytes())?;

        let mut offset: u32 = 12;
        let mut directory = Vec::with_capacity(self.lumps.len());
        for lump in &self.lumps {
            self.writer.write_all(&lump.data)?;
            // Size fits in u32 because the summed data size already does.
            directory.push((offset, lump.data.len() as u32));
            offset += lump.data.len() as u32;
        }

        for (lump, (offset, size)) in self.lumps.iter().zip(directory) {
            self.writer.write_all(&offset.to_le_bytes())?;
            self.writer.write_all(&size.to_le_bytes())?;
            let mut name = [0u8; 8];
            name[..lump.name.len()].copy_from_slice(lump.name.as_bytes());
            self.writer.write_all(&name)?;
        }

        self.writer.flush()?;
        log::debug!("committed {:?} with {} lumps", self.kind, count);
        Ok(self.writer)
    }
}
