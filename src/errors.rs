//! Various MOV and GPS telemetry related errors.

use std::{fmt, path::PathBuf};

/// Various MOV/GPS related read/parse errors.
#[derive(Debug)]
pub enum GpsError {
    /// Converted `binrw` error.
    BinReadError(binrw::Error),
    /// IO error
    IOError(std::io::Error),
    /// Atom declares the 64-bit extended size
    /// (32-bit size field set to `1`),
    /// which is not supported.
    UnsupportedSizeEncoding{path: String, offset: u64},
    /// Atom declares a size smaller than
    /// its own 8 byte header (but not `0` or `1`).
    InvalidAtomSize{path: String, size: u32, offset: u64},
    /// Read fewer bytes than required.
    TruncatedRead{what: &'static str, offset: u64, expected: u64, got: u64},
    /// Decoded record does not start with `GPS `.
    InvalidMagic{got: [u8; 4], offset: u64},
    /// Telemetry window did not contain
    /// a single record candidate.
    MissingRecord{offset: u64},
    /// No chunk offset table found for a sound track.
    NoAudioOffsets,
    /// Date and time fields do not form a valid
    /// calendar date and time.
    InvalidTimestamp{year: u32, month: u32, day: u32, hour: u32, minute: u32, second: u32},
    /// Input path does not end with `.mov`.
    InvalidExtension(PathBuf),
    /// Output file already exists.
    OutputExists(PathBuf),
}

impl std::error::Error for GpsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpsError::BinReadError(err) => Some(err),
            GpsError::IOError(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for GpsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpsError::BinReadError(err) => write!(f, "{err}"),
            GpsError::IOError(err) => write!(f, "IO error: {}", err),
            GpsError::UnsupportedSizeEncoding{path, offset} => write!(f, "Unsupported 64-bit atom size for '{path}' @ offset {offset}."),
            GpsError::InvalidAtomSize{path, size, offset} => write!(f, "Invalid atom size {size} for '{path}' @ offset {offset}."),
            GpsError::TruncatedRead{what, offset, expected, got} => write!(f, "Truncated {what} @ offset {offset}: expected {expected} bytes, got {got} bytes."),
            GpsError::InvalidMagic{got, offset} => write!(f, "Not a GPS block @ offset {offset}: magic {:?}", String::from_iter(got.iter().map(|b| *b as char))),
            GpsError::MissingRecord{offset} => write!(f, "No GPS block in telemetry window @ offset {offset}."),
            GpsError::NoAudioOffsets => write!(f, "No chunk offsets found for sound track."),
            GpsError::InvalidTimestamp{year, month, day, hour, minute, second} => write!(f, "Invalid GPS timestamp {year}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}"),
            GpsError::InvalidExtension(path) => write!(f, "{}: Does not end with .MOV", path.display()),
            GpsError::OutputExists(path) => write!(f, "{}: already exists. Use --overwrite to overwrite it anyway", path.display()),
        }
    }
}

/// Converts std::io::Error to GpsError
impl From<std::io::Error> for GpsError {
    fn from(err: std::io::Error) -> Self {
        GpsError::IOError(err)
    }
}

/// Converts GpsError to std::io::Error
impl From<GpsError> for std::io::Error {
    fn from(err: GpsError) -> Self {
        std::io::Error::new(std::io::ErrorKind::Other, err)
    }
}

/// Converts binrw::Error to GpsError
impl From<binrw::Error> for GpsError {
    fn from(err: binrw::Error) -> GpsError {
        GpsError::BinReadError(err)
    }
}
