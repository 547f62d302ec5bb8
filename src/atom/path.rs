//! Traversal path. Ordered FourCC:s from the root
//! to the current atom, including the current atom.

use std::fmt::Display;

use crate::FourCC;

/// Ordered FourCC:s from the root to the current atom,
/// e.g. `moov/trak/mdia/minf/smhd`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtomPath(pub(crate) Vec<FourCC>);

impl AtomPath {
    /// Number of atoms in path.
    /// Top-level atoms have depth 1.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// FourCC for current atom.
    pub fn last(&self) -> Option<&FourCC> {
        self.0.last()
    }

    /// Returns a new path with `fourcc` appended.
    pub fn join(&self, fourcc: FourCC) -> Self {
        let mut path = self.0.to_owned();
        path.push(fourcc);
        Self(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &FourCC> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[FourCC] {
        &self.0
    }
}

impl From<Vec<FourCC>> for AtomPath {
    fn from(value: Vec<FourCC>) -> Self {
        Self(value)
    }
}

impl Display for AtomPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self.0.iter()
            .map(|f| f.to_string())
            .collect();
        write!(f, "{}", names.join("/"))
    }
}
