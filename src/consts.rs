/// FourCC:s for known "container" atoms.
/// These are nested and contains more atoms,
/// within its specified, total size.
///
/// Only the containers on the path to
/// a track's chunk offset table are listed.
///
/// - `moov`: offset tables, timing, metadata
/// - `trak`: moov.trak (multiple)
/// - `mdia`: moov.trak.mdia
/// - `minf`: moov.trak.mdia.minf
/// - `stbl`: moov.trak.mdia.minf.stbl, contains offsets (stco)
/// - `dinf`: moov.trak.mdia.minf.dinf
pub const CONTAINER: [&'static [u8; 4]; 6] = [
    b"moov",
    b"trak",
    b"mdia",
    b"minf",
    b"stbl",
    b"dinf",
];

/// Atom header size in bytes: 32-bit size + FourCC.
pub const HEADER_SIZE: u64 = 8;

/// Path depth of `smhd`/`vmhd`:
/// `moov/trak/mdia/minf/smhd`.
pub const MEDIA_HEADER_DEPTH: usize = 5;

/// Path depth of `stco`:
/// `moov/trak/mdia/minf/stbl/stco`.
pub const CHUNK_OFFSET_DEPTH: usize = 6;

/// Distance in bytes from the start of an audio chunk
/// to the telemetry window.
pub const TELEMETRY_DISPLACEMENT: u64 = 0x10000;

/// Size in bytes of the telemetry window.
pub const TELEMETRY_WINDOW: u64 = 0x8000;

/// Marker at the start of each GPS record.
pub const GPS_MAGIC: &[u8; 4] = b"GPS ";

/// Size in bytes of a GPS record:
/// magic (4), reserved (36), 6 x u32 date/time (24),
/// unknown, latitude spec, longitude spec, padding (4),
/// 4 x f32 (16).
pub const GPS_RECORD_SIZE: u64 = 84;

/// Knots to meters per second.
pub const KNOTS_TO_MPS: f64 = 0.514444;

/// Bearing is only meaningful above this speed in knots...
pub const COURSE_MIN_SPEED: f32 = 2.0;

/// ...or if it is non-zero. Zero bearing at low speeds
/// means unknown.
pub const COURSE_EPSILON: f32 = 0.00001;

/// Base year for the GPS year field.
pub const GPS_BASE_YEAR: i32 = 2000;

