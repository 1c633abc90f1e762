//! Loading and saving UDMF maps inside a WAD.
//!
//! [`UdmfEditor`] owns an immutable snapshot of every lump in the source
//! container, taken once at construction. `load` locates the requested
//! map (a header lump immediately followed by `TEXTMAP`), parses its
//! text into a [`MapDocument`], and `save` writes a new container in
//! which only the `TEXTMAP` lump of the loaded map is replaced; every
//! other lump is copied byte-identical, including other maps and
//! unrelated resources.
//!
//! [`MapDocument`]: crate::map::MapDocument

mod editor;

pub use editor::UdmfEditor;
