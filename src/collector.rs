//! Locates the chunk offset table (`stco`) for the sound track.
//!
//! Whether the traversal is inside a sound track is derived
//! from the path alone on each visit:
//! ```ignore
//! moov/trak/mdia/minf/smhd       (depth 5) -> sound track
//! moov/trak/mdia/minf/vmhd       (depth 5) -> not sound track
//! moov/trak                      (depth < 5) -> not sound track
//! moov/trak/mdia/minf/stbl/stco  (depth 6) -> collect if sound track
//! ```

use std::io::{Read, Seek};

use tracing::debug;

use crate::{
    consts::{CHUNK_OFFSET_DEPTH, MEDIA_HEADER_DEPTH},
    AtomPath, FourCC, GpsError, Section, Stco, Visitor,
};

/// Collects absolute chunk offsets for the sound track
/// during a single traversal of the full file.
///
/// If more than one sound track exists, only the table
/// for the last one is kept.
#[derive(Debug, Default)]
pub struct AudioOffsets {
    /// Set when a sound media header has been
    /// seen for the current track.
    in_sound: bool,
    /// Chunk offsets for the last sound track.
    offsets: Vec<u32>,
}

impl AudioOffsets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the last visited atom was inside a sound track.
    pub fn in_sound(&self) -> bool {
        self.in_sound
    }

    /// Absolute byte offsets, in table order.
    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    pub fn into_offsets(self) -> Vec<u32> {
        self.offsets
    }
}

impl<R: Read + Seek> Visitor<R> for AudioOffsets {
    fn visit(&mut self, path: &AtomPath, data: &mut Section<'_, R>) -> Result<(), GpsError> {
        let depth = path.depth();
        match path.last() {
            Some(FourCC::Smhd) if depth == MEDIA_HEADER_DEPTH => {
                debug!("Entering sound track @ {}", data.offset());
                self.in_sound = true;
            }
            Some(FourCC::Vmhd) => self.in_sound = false,
            _ if depth < MEDIA_HEADER_DEPTH => self.in_sound = false,
            Some(FourCC::Stco) if self.in_sound && depth == CHUNK_OFFSET_DEPTH => {
                let stco = Stco::from_section(data)?;
                debug!("Collected {} chunk offsets for sound track @ {}", stco.len(), data.offset());
                self.offsets = stco.offsets;
            }
            _ => (),
        }
        Ok(())
    }
}
