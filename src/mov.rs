//! Core MOV struct and methods.
//!
//! ```rs
//! use movgps::Mov;
//! use std::path::Path;
//!
//! fn main() -> Result<(), movgps::GpsError> {
//!     let mov = Mov::open(Path::new("DASHCAM.MOV"))?;
//!
//!     // Byte offsets for the audio chunks
//!     println!("{:?}", mov.audio_offsets()?);
//!
//!     // One GPS record per audio chunk
//!     for record in mov.gps()?.iter() {
//!         println!("{} {}", record.latitude(), record.longitude());
//!     }
//!
//!     Ok(())
//! }
//! ```

use std::{
    fs::File,
    io::{BufReader, Read, Seek},
    path::Path,
};

use tracing::debug;

use crate::{locator::decode_window, walker::walk, AudioOffsets, GpsError, GpsRecord, Source, Visitor};

/// MOV file with embedded GPS telemetry.
#[derive(Debug)]
pub struct Mov<R> {
    source: Source<R>,
}

impl Mov<BufReader<File>> {
    /// Opens MOV file at `path`.
    pub fn open(path: &Path) -> Result<Self, GpsError> {
        Ok(Self {
            source: Source::open(path)?,
        })
    }
}

impl<R: Read + Seek> Mov<R> {
    /// MOV from any seekable reader, e.g. `Cursor<Vec<u8>>`.
    pub fn new(reader: R) -> Result<Self, GpsError> {
        Ok(Self {
            source: Source::new(reader)?,
        })
    }

    /// File size in bytes.
    pub fn len(&self) -> u64 {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    pub fn source(&self) -> &Source<R> {
        &self.source
    }

    /// Visit all atoms with a custom visitor.
    pub fn walk<V: Visitor<R> + ?Sized>(&self, visitor: &mut V) -> Result<(), GpsError> {
        walk(&self.source, visitor)
    }

    /// Absolute byte offsets for the audio chunks,
    /// from the sound track's chunk offset table (`stco`).
    ///
    /// Empty if no such table exists.
    pub fn audio_offsets(&self) -> Result<Vec<u32>, GpsError> {
        let mut collector = AudioOffsets::new();
        self.walk(&mut collector)?;
        debug!("{} audio chunk offsets", collector.offsets().len());
        Ok(collector.into_offsets())
    }

    /// GPS record for the audio chunk at `chunk_offset`.
    pub fn gps_at(&self, chunk_offset: u32) -> Result<GpsRecord, GpsError> {
        decode_window(&self.source, chunk_offset)
    }

    /// Decodes one GPS record per audio chunk,
    /// in chunk offset table order.
    ///
    /// Fails on the first window that does not
    /// contain a valid GPS record.
    pub fn gps(&self) -> Result<Vec<GpsRecord>, GpsError> {
        self.audio_offsets()?
            .into_iter()
            .map(|offset| self.gps_at(offset))
            .collect()
    }

    /// Same as `Mov::gps()`, but raises `GpsError::NoAudioOffsets`
    /// if the file has no sound track chunk offsets.
    pub fn gps_required(&self) -> Result<Vec<GpsRecord>, GpsError> {
        let records = self.gps()?;
        if records.is_empty() {
            return Err(GpsError::NoAudioOffsets);
        }
        Ok(records)
    }

    /// Returns the wrapped reader.
    pub fn into_inner(self) -> R {
        self.source.into_inner()
    }
}
