//! Chunk offset atom for file sizes below the 32bit limit (`stco`).
//!
//! Location: `moov/trak[multiple]/mdia/minf/stbl/stco`
//!
//! See: <https://developer.apple.com/documentation/quicktime-file-format/chunk_offset_atom>

use std::io::{Read, Seek};

use binrw::{BinRead, BinReaderExt};

use crate::{GpsError, Section};

/// Chunk offset atom.
#[derive(Debug, Default, BinRead, Clone)]
#[br(big)]
pub struct Stco {
    pub(crate) version: u8,
    pub(crate) flags: [u8; 3],
    pub(crate) no_of_entries: u32,
    /// Chunk offset table consisting of an array of absolute offset values.
    #[br(count = no_of_entries)]
    pub(crate) offsets: Vec<u32>
}

impl Stco {
    /// Size in bytes of version, flags, and number of entries.
    const FIXED_SIZE: u64 = 8;

    /// Decodes a chunk offset table from the start of `section`,
    /// i.e. the data load of an `stco` atom.
    ///
    /// The entry count is checked against the available bytes
    /// before anything is allocated.
    pub fn from_section<R: Read + Seek>(section: &mut Section<'_, R>) -> Result<Self, GpsError> {
        section.ensure("chunk offset table header", Self::FIXED_SIZE)?;
        let start = section.pos();

        // Peek entry count, then rewind to decode the full table
        section.skip(4);
        let no_of_entries = section.read_be::<u32>()?;
        section.ensure("chunk offset table", no_of_entries as u64 * 4)?;

        section.seek(std::io::SeekFrom::Start(start))?;
        Ok(section.read_ne::<Self>()?)
    }

    pub fn len(&self) -> usize {
        self.no_of_entries as usize
    }

    pub fn is_empty(&self) -> bool {
        self.no_of_entries == 0
    }

    pub fn version(&self) -> u8 {
        self.version
    }

    pub fn flags(&self) -> &[u8] {
        self.flags.as_slice()
    }

    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    /// Returns chunk offset with specified ID.
    pub fn get(&self, chunk_id: usize) -> Option<&u32> {
        self.offsets.get(chunk_id)
    }
}
