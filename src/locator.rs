//! Locates and decodes the GPS record for a single audio chunk.
//!
//! The record sits in a window of `0x8000` bytes, `0x10000` bytes
//! past the start of the chunk. The first 8 bytes of the window
//! are read as an atom header (size + FourCC) and the record is
//! decoded from the start of the resulting data load.
//! If the window holds more than one such "atom",
//! the last decoded record wins.

use std::io::{Read, Seek};

use tracing::{debug, trace};

use crate::{
    consts::{TELEMETRY_DISPLACEMENT, TELEMETRY_WINDOW},
    walker::walk_section,
    AtomPath, GpsError, GpsRecord, Section, Source, Visitor,
};

/// Decodes a `GpsRecord` from each visited atom,
/// overwriting any previous record.
#[derive(Debug, Default)]
pub struct GpsLocator {
    record: Option<GpsRecord>,
    candidates: usize,
}

impl GpsLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last decoded record, if any.
    pub fn record(&self) -> Option<&GpsRecord> {
        self.record.as_ref()
    }

    /// Number of records decoded in the window.
    pub fn candidates(&self) -> usize {
        self.candidates
    }
}

impl<R: Read + Seek> Visitor<R> for GpsLocator {
    fn visit(&mut self, path: &AtomPath, data: &mut Section<'_, R>) -> Result<(), GpsError> {
        trace!("GPS candidate '{path}' @ {}", data.offset());
        self.record = Some(GpsRecord::from_section(data)?);
        self.candidates += 1;
        Ok(())
    }
}

/// Absolute offset for the telemetry window
/// belonging to the audio chunk at `chunk_offset`.
pub fn window_offset(chunk_offset: u32) -> u64 {
    chunk_offset as u64 + TELEMETRY_DISPLACEMENT
}

/// Decodes the GPS record for the audio chunk at `chunk_offset`.
pub fn decode_window<R: Read + Seek>(
    source: &Source<R>,
    chunk_offset: u32,
) -> Result<GpsRecord, GpsError> {
    let offset = window_offset(chunk_offset);
    let window = source.section_at(offset, TELEMETRY_WINDOW);

    let mut locator = GpsLocator::new();
    walk_section(window, &mut locator)?;

    if locator.candidates > 1 {
        debug!("{} GPS candidates in window @ {offset}, using last", locator.candidates);
    }

    locator.record.ok_or(GpsError::MissingRecord { offset })
}
