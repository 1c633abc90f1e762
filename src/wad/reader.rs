//! Reading WAD archives.

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use crate::wad::{Lump, WadKind};
use crate::{Error, Result};

const HEADER_SIZE: usize = 12;
const DIR_ENTRY_SIZE: usize = 16;

/// One directory entry: a name and the location of its bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// The lump name, with directory NUL padding stripped.
    pub name: String,
    /// Byte offset of the lump data within the file.
    pub offset: u32,
    /// Length of the lump data in bytes.
    pub size: u32,
}

/// An open WAD archive.
///
/// The directory is parsed eagerly on open; lump data is read on demand
/// through [`read`](Self::read) or all at once through
/// [`lumps`](Self::lumps).
#[derive(Debug)]
pub struct WadFile<R> {
    reader: R,
    kind: WadKind,
    directory: Vec<DirEntry>,
}

impl WadFile<BufReader<File>> {
    /// Opens a WAD archive from a file path.
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::open(BufReader::new(File::open(path)?))
    }
}

impl<R: Read + Seek> WadFile<R> {
    /// Opens a WAD archive from any seekable reader.
    ///
    /// Fails with [`Error::InvalidFormat`] if the signature is not
    /// `IWAD`/`PWAD` or the directory is truncated.
    pub fn open(mut reader: R) -> Result<Self> {
        let mut header = [0u8; HEADER_SIZE];
        reader
            .read_exact(&mut header)
            .map_err(|_| Error::InvalidFormat("file shorter than the 12-byte header".into()))?;

        let kind = match &header[0..4] {
            b"IWAD" => WadKind::Iwad,
            b"PWAD" => WadKind::Pwad,
            other => {
                return Err(Error::InvalidFormat(format!(
                    "expected IWAD/PWAD signature, found {:?}",
                    other
                )));
            }
        };
        let count = u32::from_le_bytes(header[4..8].try_into().unwrap()) as usize;
        let dir_offset = u32::from_le_bytes(header[8..12].try_into().unwrap());

        let file_len = reader.seek(SeekFrom::End(0))?;
        if dir_offset as u64 + (count as u64) * DIR_ENTRY_SIZE as u64 > file_len {
            return Err(Error::InvalidFormat(format!(
                "directory of {} entries at {:#x} exceeds file size {}",
                count, dir_offset, file_len
            )));
        }

        reader.seek(SeekFrom::Start(dir_offset as u64))?;
        let mut directory = Vec::with_capacity(count.min(4096));
        let mut entry = [0u8; DIR_ENTRY_SIZE];
        for index in 0..count {
            reader.read_exact(&mut entry).map_err(|_| {
                Error::InvalidFormat(format!(
                    "directory truncated at entry {} of {}",
                    index, count
                ))
            })?;
            let offset = u32::from_le_bytes(entry[0..4].try_into().unwrap());
            let size = u32::from_le_bytes(entry[4..8].try_into().unwrap());
            let raw_name = &entry[8..16];
            let trimmed = raw_name
                .iter()
                .position(|&b| b == 0)
                .map_or(raw_name, |end| &raw_name[..end]);
            let name = std::str::from_utf8(trimmed)
                .ok()
                .filter(|name| name.is_ascii())
                .ok_or_else(|| {
                    Error::InvalidFormat(format!(
                        "directory entry {} has a non-ASCII name {:?}",
                        index, raw_name
                    ))
                })?
                .to_string();
            if offset as u64 + size as u64 > file_len {
                return Err(Error::InvalidFormat(format!(
                    "lump {:?} ({} bytes at {:#x}) exceeds file size {}",
                    name, size, offset, file_len
                )));
            }
            directory.push(DirEntry { name, offset, size });
        }

        log::debug!(
            "opened {:?} with {} lumps (directory at {:#x})",
            kind,
            directory.len(),
            dir_offset
        );
        Ok(Self {
            reader,
            kind,
            directory,
        })
    }

    /// The archive flavor.
    pub fn kind(&self) -> WadKind {
        self.kind
    }

    /// The ordered directory.
    pub fn entries(&self) -> &[DirEntry] {
        &self.directory
    }

    /// The number of lumps.
    pub fn len(&self) -> usize {
        self.directory.len()
    }

    /// Returns `true` if the archive has no lumps.
    pub fn is_empty(&self) -> bool {
        self.directory.is_empty()
    }

    /// Reads the raw bytes of the lump at `index`.
    pub fn read(&mut self, index: usize) -> Result<Vec<u8>> {
        let entry = self.directory.get(index).ok_or(Error::LumpOutOfRange {
            index,
            count: self.directory.len(),
        })?;
        self.reader.seek(SeekFrom::Start(entry.offset as u64))?;
        let mut data = vec![0u8; entry.size as usize];
        self.reader.read_exact(&mut data)?;
        Ok(data)
    }

    /// Reads every lump into an in-memory snapshot, in directory order.
    pub fn lumps(&mut self) -> Result<Vec<Lump>> {
        (0..self.directory.len())
            .map(|index| {
                let name = self.directory[index].name.clone();
                Ok(Lump {
                    name,
                    data: self.read(index)?,
                })
            })
            .collect()
    }
}
