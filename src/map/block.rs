//! Typed blocks and their ordered attribute tables.

use std::fmt;

use indexmap::IndexMap;

use crate::value::Scalar;

/// The type tag of a UDMF block.
///
/// The mapping from block identifiers is a closed, static registry:
/// `thing`, `vertex`, `linedef`, `sidedef`, and `sector` resolve to their
/// typed variants (case-sensitively, exact match only); every other
/// identifier resolves to [`Generic`] carrying the identifier as written,
/// so unrecognized block kinds round-trip intact instead of being
/// rejected.
///
/// [`Generic`]: BlockKind::Generic
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Thing,
    Vertex,
    LineDef,
    SideDef,
    Sector,
    /// Any block identifier outside the five typed kinds.
    Generic(String),
}

impl BlockKind {
    /// Resolves a block identifier through the registry.
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier {
            "thing" => Self::Thing,
            "vertex" => Self::Vertex,
            "linedef" => Self::LineDef,
            "sidedef" => Self::SideDef,
            "sector" => Self::Sector,
            other => Self::Generic(other.to_string()),
        }
    }

    /// The block identifier as it appears in UDMF text.
    pub fn identifier(&self) -> &str {
        match self {
            Self::Thing => "thing",
            Self::Vertex => "vertex",
            Self::LineDef => "linedef",
            Self::SideDef => "sidedef",
            Self::Sector => "sector",
            Self::Generic(name) => name,
        }
    }
}

/// A single map block: a type tag plus an ordered attribute table.
///
/// Attribute order is insertion order from the source text and is
/// preserved verbatim through serialization. Names are unique within a
/// block; assigning to an existing name replaces the value in place, so
/// the last value wins at the position of the first occurrence.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    kind: BlockKind,
    attributes: IndexMap<String, Scalar>,
}

impl Block {
    /// Creates an empty block of the given kind.
    pub fn new(kind: BlockKind) -> Self {
        Self {
            kind,
            attributes: IndexMap::new(),
        }
    }

    /// The block's type tag.
    pub fn kind(&self) -> &BlockKind {
        &self.kind
    }

    /// Looks up an attribute by name.
    pub fn get(&self, name: &str) -> Option<&Scalar> {
        self.attributes.get(name)
    }

    /// Looks up an attribute by name, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut Scalar> {
        self.attributes.get_mut(name)
    }

    /// Sets an attribute, returning the previous value if the name was
    /// already present. The attribute keeps its original position when
    /// overwritten and appends at the end when new.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Scalar>) -> Option<Scalar> {
        self.attributes.insert(name.into(), value.into())
    }

    /// Iterates attributes in stored order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.attributes.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// The number of attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns `true` if the block has no attributes.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Convenience accessor for an integer attribute.
    pub fn get_integer(&self, name: &str) -> Option<i64> {
        self.get(name)?.as_integer()
    }

    /// Convenience accessor for a float attribute.
    pub fn get_float(&self, name: &str) -> Option<f64> {
        self.get(name)?.as_float()
    }

    /// Convenience accessor for a boolean attribute.
    pub fn get_boolean(&self, name: &str) -> Option<bool> {
        self.get(name)?.as_boolean()
    }

    /// Convenience accessor for a string attribute.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name)?.as_str()
    }
}

impl fmt::Display for Block {
    /// Serializes the block as UDMF text, one attribute per line in
    /// stored order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.kind.identifier())?;
        writeln!(f, "{{")?;
        for (name, value) in self.attributes() {
            writeln!(f, "{} = {};", name, value)?;
        }
        writeln!(f, "}}")
    }
}
