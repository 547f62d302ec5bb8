//! Extract GPS telemetry that some dashcams embed next to
//! the audio samples in their MOV files, and convert it to GPX.
//!
//! The telemetry is located in two passes:
//! 1. Walk the atom tree and collect the chunk offset table (`stco`)
//!    for the sound track.
//! 2. For each audio chunk offset, decode the fixed size GPS record
//!    found in a small window `0x10000` bytes past that offset.
//!
//! The file is only ever read.
//!
//! ```rs
//! use movgps::{Mov, Gpx, GpxOptions};
//! use std::path::Path;
//!
//! fn main() -> Result<(), movgps::GpsError> {
//!     let mov = Mov::open(Path::new("DASHCAM.MOV"))?;
//!     let records = mov.gps()?;
//!
//!     let gpx = Gpx::new(&records, &GpxOptions::default());
//!     gpx.write_to_path(Path::new("DASHCAM.gpx"))?;
//!
//!     Ok(())
//! }
//! ```

pub mod mov;
pub mod fourcc;
pub mod atom;
pub mod consts;
pub mod collector;
pub mod errors;
pub mod gps;
pub mod gpx;
pub mod locator;
pub mod walker;
pub(crate) mod support;

pub(crate) mod reader;

pub use mov::Mov;
pub use fourcc::FourCC;
pub use atom::{AtomHeader, AtomPath, Stco};
pub use collector::AudioOffsets;
pub use gps::GpsRecord;
pub use gpx::{Gpx, GpxOptions, TrackPoint};
pub use locator::GpsLocator;
pub use reader::{Section, Source};
pub use walker::{walk, walk_section, Visitor};
pub use consts::CONTAINER;
pub use errors::GpsError;
