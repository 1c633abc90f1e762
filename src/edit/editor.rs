//! The UDMF map editor.

use std::fs::File;
use std::io::{BufReader, Read, Seek, Write};
use std::path::Path;

use crate::map::MapDocument;
use crate::udmf;
use crate::wad::{Lump, WadFile, WadWriter};
use crate::{Error, Result};

/// Reserved name of the lump holding a map's UDMF text.
const TEXTMAP: &str = "TEXTMAP";
/// Reserved name of the lump terminating a map's record span.
const ENDMAP: &str = "ENDMAP";

/// An editor for a single UDMF map inside a WAD.
///
/// Construction snapshots every lump of the source container into memory,
/// so the editor never touches the original resource again. One map is
/// edited per session: `load` picks the first map whose header lump
/// matches the requested name, and `save` writes a complete new container
/// in which only that map's `TEXTMAP` lump differs.
///
/// # Example
///
/// ```rust,no_run
/// use textmap::{Scalar, UdmfEditor};
///
/// fn raise_things(input: &str, output: &str) -> textmap::Result<()> {
///     let mut editor = UdmfEditor::open_path(input)?;
///     let doc = editor.load("MAP01")?;
///     for block in doc.blocks_mut() {
///         if let Some(Scalar::Float(height)) = block.get_mut("height") {
///             *height += 8.0;
///         }
///     }
///     editor.save(output)
/// }
/// ```
#[derive(Debug)]
pub struct UdmfEditor {
    lumps: Vec<Lump>,
    map_name: Option<String>,
    header_index: Option<usize>,
    document: Option<MapDocument>,
}

impl UdmfEditor {
    /// Creates an editor over an already-built record snapshot.
    pub fn new(snapshot: Vec<Lump>) -> Self {
        Self {
            lumps: snapshot,
            map_name: None,
            header_index: None,
            document: None,
        }
    }

    /// Creates an editor from an open WAD, reading every lump eagerly.
    pub fn from_wad<R: Read + Seek>(wad: &mut WadFile<R>) -> Result<Self> {
        Ok(Self::new(wad.lumps()?))
    }

    /// Opens a WAD file and snapshots it.
    pub fn open_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_wad(&mut WadFile::<BufReader<File>>::open_path(path)?)
    }

    /// The record snapshot taken at construction.
    pub fn lumps(&self) -> &[Lump] {
        &self.lumps
    }

    /// The name of the loaded map, if any.
    pub fn map_name(&self) -> Option<&str> {
        self.map_name.as_deref()
    }

    /// The loaded document, if any.
    pub fn document(&self) -> Option<&MapDocument> {
        self.document.as_ref()
    }

    /// The loaded document, mutably, if any.
    pub fn document_mut(&mut self) -> Option<&mut MapDocument> {
        self.document.as_mut()
    }

    /// Locates and parses the map named `name`.
    ///
    /// The snapshot is scanned by index: a lump at `i` is a map header
    /// when the lump at `i + 1` is named `TEXTMAP`. The first header
    /// whose name equals `name` exactly is accepted, even if same-named
    /// maps exist later. The map's span then runs forward to the next
    /// `ENDMAP` lump (exclusive); its `TEXTMAP` supplies the source text,
    /// and any other lumps in the span are preserved untouched on save
    /// but not modeled.
    ///
    /// Fails with [`Error::MapNotFound`] when the scan is exhausted or
    /// the accepted span closes before any `TEXTMAP` lump, with
    /// [`Error::Encoding`] on non-ASCII text, and with a parse error on
    /// malformed text; no partial document is ever produced.
    pub fn load(&mut self, name: &str) -> Result<&mut MapDocument> {
        for index in 0..self.lumps.len() {
            // A header lump needs a TEXTMAP right behind it; past the last
            // pair the scan can stop.
            let Some(next) = self.lumps.get(index + 1) else {
                break;
            };
            if next.name != TEXTMAP || self.lumps[index].name != name {
                continue;
            }

            log::debug!("found UDMF map {:?} at lump index {}", name, index);
            let mut text = None;
            for lump in &self.lumps[index..] {
                if lump.name == ENDMAP {
                    break;
                }
                if lump.name == TEXTMAP {
                    text = Some(decode_ascii(&lump.data)?);
                }
            }
            // A header itself named ENDMAP terminates its own span before
            // any text lump; such a span is not a loadable map.
            let Some(text) = text else {
                break;
            };

            let document = udmf::parse_document(&text)?;
            log::debug!(
                "parsed {} blocks, {} metadata keys from {} bytes of TEXTMAP",
                document.blocks().len(),
                document.metadata_iter().count(),
                text.len()
            );
            self.map_name = Some(name.to_string());
            self.header_index = Some(index);
            // Only a single map is edited per session.
            return Ok(self.document.insert(document));
        }

        Err(Error::MapNotFound {
            name: name.to_string(),
        })
    }

    /// Serializes the loaded document as UDMF text.
    pub fn serialize(&self) -> Result<String> {
        let document = self.document.as_ref().ok_or(Error::NoMapLoaded)?;
        Ok(document.to_udmf())
    }

    /// Saves the edited map to a new WAD file at `path`.
    ///
    /// Every lump of the snapshot is written in its original order; only
    /// the loaded map's `TEXTMAP` lump is replaced with the re-serialized
    /// document. All other lumps, including other maps, are copied
    /// byte-identical.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.write_records(WadWriter::create(path)?)?;
        Ok(())
    }

    /// Saves the edited map into any byte sink, returning the sink.
    pub fn save_to<W: Write>(&self, sink: W) -> Result<W> {
        self.write_records(WadWriter::new(sink))
    }

    fn write_records<W: Write>(&self, mut writer: WadWriter<W>) -> Result<W> {
        let header_index = self.header_index.ok_or(Error::NoMapLoaded)?;
        let document = self.document.as_ref().ok_or(Error::NoMapLoaded)?;

        let text = document.to_udmf();
        if !text.is_ascii() {
            return Err(Error::Encoding {
                lump: TEXTMAP.to_string(),
            });
        }

        for (index, lump) in self.lumps.iter().enumerate() {
            if index == header_index + 1 {
                log::debug!(
                    "replacing {} at index {} ({} bytes)",
                    lump.name,
                    index,
                    text.len()
                );
                writer.insert_raw(&lump.name, text.as_bytes())?;
            } else {
                writer.insert_raw(&lump.name, &lump.data)?;
            }
        }
        writer.finish()
    }
}

/// Decodes a text lump as 7-bit ASCII.
fn decode_ascii(data: &[u8]) -> Result<String> {
    if !data.is_ascii() {
        return Err(Error::Encoding {
            lump: TEXTMAP.to_string(),
        });
    }
    // ASCII is valid UTF-8.
    Ok(String::from_utf8_lossy(data).into_owned())
}
