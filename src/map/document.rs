//! The parsed map document.

use std::fmt;

use indexmap::IndexMap;

use crate::map::{Block, BlockKind};
use crate::value::Scalar;

/// A parsed UDMF map: ordered blocks plus global metadata.
///
/// Block order is the order of appearance in the source text, mixed kinds
/// interleaved exactly as authored. Global metadata keeps insertion order
/// as well, so a load→save cycle preserves the original order of
/// top-level assignments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapDocument {
    metadata: IndexMap<String, Scalar>,
    blocks: Vec<Block>,
}

impl MapDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a global metadata assignment.
    pub fn metadata(&self, name: &str) -> Option<&Scalar> {
        self.metadata.get(name)
    }

    /// Sets a global metadata assignment, returning the previous value.
    /// Repeated keys overwrite in place; new keys append.
    pub fn set_metadata(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Scalar>,
    ) -> Option<Scalar> {
        self.metadata.insert(name.into(), value.into())
    }

    /// Iterates global metadata in stored order.
    pub fn metadata_iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.metadata.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// All blocks, in document order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// All blocks, mutably.
    pub fn blocks_mut(&mut self) -> &mut [Block] {
        &mut self.blocks
    }

    /// Appends a block to the document.
    pub fn push_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// All blocks of one kind, in document order.
    pub fn blocks_of<'a>(&'a self, kind: &'a BlockKind) -> impl Iterator<Item = &'a Block> {
        self.blocks.iter().filter(move |block| block.kind() == kind)
    }

    /// All generic blocks with the given identifier.
    pub fn blocks_named<'a>(&'a self, identifier: &'a str) -> impl Iterator<Item = &'a Block> {
        self.blocks
            .iter()
            .filter(move |block| block.kind().identifier() == identifier)
    }

    /// The map's things.
    pub fn things(&self) -> impl Iterator<Item = &Block> {
        self.blocks
            .iter()
            .filter(|block| matches!(block.kind(), BlockKind::Thing))
    }

    /// The map's vertices.
    pub fn vertices(&self) -> impl Iterator<Item = &Block> {
        self.blocks
            .iter()
            .filter(|block| matches!(block.kind(), BlockKind::Vertex))
    }

    /// The map's line definitions.
    pub fn linedefs(&self) -> impl Iterator<Item = &Block> {
        self.blocks
            .iter()
            .filter(|block| matches!(block.kind(), BlockKind::LineDef))
    }

    /// The map's side definitions.
    pub fn sidedefs(&self) -> impl Iterator<Item = &Block> {
        self.blocks
            .iter()
            .filter(|block| matches!(block.kind(), BlockKind::SideDef))
    }

    /// The map's sectors.
    pub fn sectors(&self) -> impl Iterator<Item = &Block> {
        self.blocks
            .iter()
            .filter(|block| matches!(block.kind(), BlockKind::Sector))
    }

    /// Serializes the document as UDMF text.
    ///
    /// Metadata assignments come first, one per line in stored order, then
    /// every block in document order, blank-line separated. The surface
    /// text is normalized (one attribute per line); it re-parses to a
    /// structurally identical document.
    pub fn to_udmf(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for MapDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in self.metadata_iter() {
            writeln!(f, "{} = {};", name, value)?;
        }
        let mut first = self.metadata.is_empty();
        for block in &self.blocks {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "{}", block)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> MapDocument {
        let mut doc = MapDocument::new();
        doc.set_metadata("namespace", "doom");
        let mut thing = Block::new(BlockKind::Thing);
        thing.set("x", Scalar::Float(32.0));
        thing.set("type", 1i64);
        doc.push_block(thing);
        let mut vertex = Block::new(BlockKind::Vertex);
        vertex.set("x", Scalar::Float(0.0));
        doc.push_block(vertex);
        let mut thing2 = Block::new(BlockKind::Thing);
        thing2.set("x", Scalar::Float(64.0));
        doc.push_block(thing2);
        doc
    }

    #[test]
    fn test_typed_accessors_filter_in_order() {
        let doc = sample();
        let xs: Vec<_> = doc.things().map(|t| t.get_float("x").unwrap()).collect();
        assert_eq!(xs, vec![32.0, 64.0]);
        assert_eq!(doc.vertices().count(), 1);
        assert_eq!(doc.sectors().count(), 0);
    }

    #[test]
    fn test_blocks_of_kind_query() {
        let doc = sample();
        assert_eq!(doc.blocks_of(&BlockKind::Thing).count(), 2);
        assert_eq!(doc.blocks_of(&BlockKind::Sector).count(), 0);
        assert_eq!(
            doc.blocks_of(&BlockKind::Generic("custom".to_string())).count(),
            0
        );
    }

    #[test]
    fn test_blocks_named_matches_generic_identifiers() {
        let mut doc = sample();
        doc.push_block(Block::new(BlockKind::from_identifier("custom")));
        assert_eq!(doc.blocks_named("custom").count(), 1);
        assert_eq!(doc.blocks_named("thing").count(), 2);
    }

    #[test]
    fn test_serialized_layout() {
        let doc = sample();
        assert_eq!(
            doc.to_udmf(),
            "namespace = \"doom\";\n\
             \n\
             thing\n{\nx = 32.0;\ntype = 1;\n}\n\
             \n\
             vertex\n{\nx = 0.0;\n}\n\
             \n\
             thing\n{\nx = 64.0;\n}\n"
        );
    }

    #[test]
    fn test_metadata_preserves_insertion_order() {
        let mut doc = MapDocument::new();
        doc.set_metadata("namespace", "zdoom");
        doc.set_metadata("custom_a", 1i64);
        doc.set_metadata("custom_b", 2i64);
        doc.set_metadata("namespace", "doom");
        let names: Vec<_> = doc.metadata_iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["namespace", "custom_a", "custom_b"]);
        assert_eq!(doc.metadata("namespace"), Some(&Scalar::from("doom")));
    }
}
