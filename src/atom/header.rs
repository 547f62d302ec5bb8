use std::io::{Read, Seek};

use binrw::BinReaderExt;
use tracing::debug;

use crate::{consts::HEADER_SIZE, AtomPath, FourCC, GpsError, Section, CONTAINER};

/// Atom header.
/// Always 8 bytes, since 64-bit sizes are not supported.
///
/// ```ignore
/// | [X X X X] [Y Y Y Y] |
///    |         |
///    |         FourCC
///    32bit size (0 = to end of section, 1 = 64bit size, unsupported)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AtomHeader {
    /// Total atom size in bytes including 8 byte header,
    /// resolved if the size field was `0`.
    pub(crate) atom_size: u64,
    /// FourCC
    pub(crate) name: FourCC,
    /// Absolute byte offset for start of atom,
    /// i.e. byte offset for its header,
    /// starting with 32-bit size.
    pub(crate) offset: u64,
}

impl AtomHeader {
    /// Reads the atom header at the current position of `section`
    /// and returns it together with a view over the atom's data load.
    /// The position of `section` is moved past the data load,
    /// i.e. to the next sibling atom.
    ///
    /// Returns `Ok(None)` when the section is exhausted:
    /// - fewer than 8 bytes remain
    /// - the declared size exceeds the remaining bytes
    ///
    /// `parent` is only used for error context.
    pub fn read<'a, R: Read + Seek>(
        section: &mut Section<'a, R>,
        parent: &AtomPath,
    ) -> Result<Option<(Self, Section<'a, R>)>, GpsError> {
        if section.remaining() < HEADER_SIZE {
            return Ok(None);
        }

        let offset = section.abs_pos();
        let size = section.read_be::<u32>()?;
        // Not necessarily printable
        let name = FourCC::from_bytes(section.read_be::<[u8; 4]>()?);

        let data_size = match size {
            0 => section.remaining(),
            1 => return Err(GpsError::UnsupportedSizeEncoding {
                path: parent.join(name).to_string(),
                offset,
            }),
            2..=7 => return Err(GpsError::InvalidAtomSize {
                path: parent.join(name).to_string(),
                size,
                offset,
            }),
            n => n as u64 - HEADER_SIZE,
        };

        if data_size > section.remaining() {
            debug!("'{}' @ {offset}: size {size} exceeds remaining {} bytes, ending section",
                parent.join(name),
                section.remaining() + HEADER_SIZE
            );
            section.skip(section.remaining());
            return Ok(None);
        }

        let data = section.sub(section.pos(), data_size);
        section.skip(data_size);

        let header = Self {
            atom_size: data_size + HEADER_SIZE,
            name,
            offset,
        };

        Ok(Some((header, data)))
    }

    /// Convenience method to check whether atom
    /// is a container or not.
    pub fn is_container(&self) -> bool {
        let name = self.name.to_bytes();
        CONTAINER.iter().any(|c| **c == name)
    }

    pub fn start(&self) -> u64 {
        self.offset
    }

    pub fn end(&self) -> u64 {
        self.offset + self.atom_size
    }

    pub fn atom_size(&self) -> u64 {
        self.atom_size
    }

    pub fn name(&self) -> &FourCC {
        &self.name
    }

    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Data load absolute offset,
    /// i.e. position after header.
    pub fn data_offset(&self) -> u64 {
        self.offset + HEADER_SIZE
    }

    /// Size of data load (excludes header size).
    pub fn data_size(&self) -> u64 {
        self.atom_size - HEADER_SIZE
    }
}
