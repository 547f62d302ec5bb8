//! GPS record embedded next to the audio chunks.
//! Little endian, fixed size (84 bytes).
//!
//! ```ignore
//! | magic "GPS " (4) | reserved (36) |
//! | hour | min | sec | year (- 2000) | month | day |   6 x u32
//! | unknown | lat spec | lon spec | padding |         4 x u8
//! | latitude | longitude | speed | bearing |         4 x f32
//! ```
//!
//! Latitude and longitude are in decimal minutes (`DDDMM.MMMM`),
//! speed in knots, bearing in degrees.

use std::io::{Read, Seek};

use binrw::{BinRead, BinReaderExt};
use time::{Date, Month, PrimitiveDateTime, Time};

use crate::{
    consts::{COURSE_EPSILON, COURSE_MIN_SPEED, GPS_BASE_YEAR, GPS_MAGIC, GPS_RECORD_SIZE, KNOTS_TO_MPS},
    support::modf_hundreds,
    GpsError, Section,
};

/// Single GPS log entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, BinRead)]
#[br(little)]
pub struct GpsRecord {
    pub(crate) magic: [u8; 4],
    #[br(pad_before = 36)]
    pub(crate) hour: u32,
    pub(crate) minute: u32,
    pub(crate) second: u32,
    /// Years since 2000.
    pub(crate) year: u32,
    pub(crate) month: u32,
    pub(crate) day: u32,
    pub(crate) unknown: u8,
    /// `N` or `S`
    pub(crate) latitude_spec: u8,
    /// `E` or `W`
    #[br(pad_after = 1)]
    pub(crate) longitude_spec: u8,
    /// Decimal minutes.
    pub(crate) latitude: f32,
    /// Decimal minutes.
    pub(crate) longitude: f32,
    /// Knots.
    pub(crate) speed: f32,
    /// Degrees.
    pub(crate) bearing: f32,
}

impl GpsRecord {
    /// Decodes a record from the current position of `section`
    /// and verifies the `GPS ` marker.
    pub fn from_section<R: Read + Seek>(section: &mut Section<'_, R>) -> Result<Self, GpsError> {
        section.ensure("GPS record", GPS_RECORD_SIZE)?;
        let offset = section.abs_pos();
        let record = section.read_le::<Self>()?;
        if &record.magic != GPS_MAGIC {
            return Err(GpsError::InvalidMagic {
                got: record.magic,
                offset,
            });
        }
        Ok(record)
    }

    pub fn magic(&self) -> &[u8; 4] {
        &self.magic
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn second(&self) -> u32 {
        self.second
    }

    /// Raw year field, i.e. years since 2000.
    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// Undocumented byte preceding the hemisphere specifiers.
    pub fn unknown(&self) -> u8 {
        self.unknown
    }

    pub fn latitude_spec(&self) -> char {
        self.latitude_spec as char
    }

    pub fn longitude_spec(&self) -> char {
        self.longitude_spec as char
    }

    /// Raw latitude in decimal minutes.
    pub fn latitude_raw(&self) -> f32 {
        self.latitude
    }

    /// Raw longitude in decimal minutes.
    pub fn longitude_raw(&self) -> f32 {
        self.longitude
    }

    /// Speed in knots.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Bearing in degrees.
    pub fn bearing(&self) -> f32 {
        self.bearing
    }

    /// Latitude in decimal degrees. Negative if south.
    pub fn latitude(&self) -> f64 {
        to_decimal_degrees(self.latitude_spec, self.latitude)
    }

    /// Longitude in decimal degrees. Negative if west.
    pub fn longitude(&self) -> f64 {
        to_decimal_degrees(self.longitude_spec, self.longitude)
    }

    /// Speed in meters per second.
    pub fn speed_mps(&self) -> f64 {
        self.speed as f64 * KNOTS_TO_MPS
    }

    /// Bearing in degrees, if meaningful.
    /// At low speeds a bearing of 0 means unknown.
    pub fn course(&self) -> Option<f32> {
        match self.speed > COURSE_MIN_SPEED || self.bearing > COURSE_EPSILON {
            true => Some(self.bearing),
            false => None,
        }
    }

    /// Calendar date. Year is offset from 2000.
    pub fn date(&self) -> Result<Date, GpsError> {
        let month = u8::try_from(self.month).ok()
            .and_then(|m| Month::try_from(m).ok())
            .ok_or_else(|| self.invalid_timestamp())?;
        let day = u8::try_from(self.day).map_err(|_| self.invalid_timestamp())?;
        let year = i32::try_from(self.year).ok()
            .and_then(|y| y.checked_add(GPS_BASE_YEAR))
            .ok_or_else(|| self.invalid_timestamp())?;
        Date::from_calendar_date(year, month, day)
            .map_err(|_| self.invalid_timestamp())
    }

    /// Time of day. Time zone is that of the device,
    /// and is not part of the record.
    pub fn time(&self) -> Result<Time, GpsError> {
        let hour = u8::try_from(self.hour).map_err(|_| self.invalid_timestamp())?;
        let minute = u8::try_from(self.minute).map_err(|_| self.invalid_timestamp())?;
        let second = u8::try_from(self.second).map_err(|_| self.invalid_timestamp())?;
        Time::from_hms(hour, minute, second)
            .map_err(|_| self.invalid_timestamp())
    }

    /// Date and time without offset.
    pub fn datetime(&self) -> Result<PrimitiveDateTime, GpsError> {
        Ok(PrimitiveDateTime::new(self.date()?, self.time()?))
    }

    fn invalid_timestamp(&self) -> GpsError {
        GpsError::InvalidTimestamp {
            year: self.year,
            month: self.month,
            day: self.day,
            hour: self.hour,
            minute: self.minute,
            second: self.second,
        }
    }
}

/// Decimal minutes to decimal degrees.
/// `spec` `S` or `W` negates the result.
pub fn to_decimal_degrees(spec: u8, value: f32) -> f64 {
    let (deg, frac) = modf_hundreds(value);
    let dd = deg + frac / 0.6;
    match spec {
        b'S' | b'W' => -dd,
        _ => dd,
    }
}
