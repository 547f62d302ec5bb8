//! Atom FourCC.
//! See https://developer.apple.com/library/archive/documentation/QuickTime/QTFF/QTFFChap2/qtff2.html#//apple_ref/doc/uid/TP40000939-CH204-56313.
//! Only the atoms needed to locate the telemetry are named,
//! everything else is kept as raw bytes.

use std::fmt::Display;

use crate::support::chars_from_bytes;

/// Atom Four CC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FourCC {
    /// Data information atom
    Dinf,
    /// Media data atom
    Mdat,
    /// Media atom
    Mdia,
    /// Media information atom
    Minf,
    /// Movie Atom
    Moov,
    /// Sound media information header
    Smhd,
    /// Sample table atom
    Stbl,
    /// Chunk offset, 32-bit values
    Stco,
    /// Track description
    Trak,
    /// Video media information header
    Vmhd,

    /// Any other tag. Not necessarily printable.
    Custom([u8; 4])
}

impl FourCC {
    pub fn from_bytes(fourcc: [u8; 4]) -> Self {
        match &fourcc {
            b"dinf" => Self::Dinf,
            b"mdat" => Self::Mdat,
            b"mdia" => Self::Mdia,
            b"minf" => Self::Minf,
            b"moov" => Self::Moov,
            b"smhd" => Self::Smhd,
            b"stbl" => Self::Stbl,
            b"stco" => Self::Stco,
            b"trak" => Self::Trak,
            b"vmhd" => Self::Vmhd,
            _ => Self::Custom(fourcc),
        }
    }

    pub fn from_u32(value: u32) -> Self {
        Self::from_bytes(value.to_be_bytes())
    }

    pub fn to_bytes(&self) -> [u8; 4] {
        match self {
            Self::Dinf => *b"dinf",
            Self::Mdat => *b"mdat",
            Self::Mdia => *b"mdia",
            Self::Minf => *b"minf",
            Self::Moov => *b"moov",
            Self::Smhd => *b"smhd",
            Self::Stbl => *b"stbl",
            Self::Stco => *b"stco",
            Self::Trak => *b"trak",
            Self::Vmhd => *b"vmhd",
            Self::Custom(b) => *b,
        }
    }
}

impl Display for FourCC {
    /// Bytes are shown as single-byte (ISO8859-1) characters,
    /// since some vendors use values outside ASCII.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let chars = chars_from_bytes(self.to_bytes());
        write!(f, "{}", String::from_iter(chars))
    }
}
