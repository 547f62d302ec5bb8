//! GPX 1.1 output for decoded GPS records,
//! with speed and course in the Garmin
//! `TrackPointExtension/v2` namespace.
//!
//! Record timestamps carry no time zone. They are assumed
//! to be local time, and are stamped with the UTC offset
//! in `GpxOptions` (by default that of the converting process).

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use time::{macros::format_description, UtcOffset};
use tracing::warn;

use crate::{GpsError, GpsRecord};

/// Output settings.
#[derive(Debug, Clone)]
pub struct GpxOptions {
    /// Value for the `creator` attribute.
    pub creator: String,
    /// Offset used to stamp record times.
    pub utc_offset: UtcOffset,
}

impl Default for GpxOptions {
    fn default() -> Self {
        Self::with_offset(local_offset())
    }
}

impl GpxOptions {
    pub fn with_offset(utc_offset: UtcOffset) -> Self {
        Self {
            creator: format!("movgps {}", env!("CARGO_PKG_VERSION")),
            utc_offset,
        }
    }
}

/// UTC offset for the local time zone.
/// Falls back to UTC if it can not be determined
/// (e.g. on some platforms once more than one thread is running).
pub fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or_else(|err| {
        warn!("Failed to determine local UTC offset, using UTC: {err}");
        UtcOffset::UTC
    })
}

/// Single GPX track point.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPoint {
    /// Decimal degrees.
    pub latitude: f64,
    /// Decimal degrees.
    pub longitude: f64,
    /// Formatted timestamp, `None` if the record
    /// does not hold a valid date and time.
    pub time: Option<String>,
    /// Meters per second.
    pub speed: f64,
    /// Degrees, `None` if not meaningful.
    pub course: Option<f32>,
}

impl TrackPoint {
    pub fn from_record(record: &GpsRecord, utc_offset: UtcOffset) -> Self {
        // e.g. `2021-06-01T10:05:30+02:00`
        let format = format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second][offset_hour sign:mandatory]:[offset_minute]"
        );
        let time = match record.datetime() {
            Ok(dt) => dt.assume_offset(utc_offset).format(format)
                .map_err(|err| warn!("Failed to format GPS timestamp: {err}"))
                .ok(),
            Err(err) => {
                warn!("Skipping time for track point: {err}");
                None
            }
        };

        Self {
            latitude: record.latitude(),
            longitude: record.longitude(),
            time,
            speed: record.speed_mps(),
            course: record.course(),
        }
    }

    fn write<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, r#"      <trkpt lat="{:.6}" lon="{:.6}">"#, self.latitude, self.longitude)?;
        if let Some(time) = &self.time {
            writeln!(writer, "        <time>{time}</time>")?;
        }
        writeln!(writer, "        <extensions>")?;
        writeln!(writer, "          <gpxtpx:TrackPointExtension>")?;
        writeln!(writer, "            <gpxtpx:speed>{:.6}</gpxtpx:speed>", self.speed)?;
        if let Some(course) = self.course {
            writeln!(writer, "            <gpxtpx:course>{course:.6}</gpxtpx:course>")?;
        }
        writeln!(writer, "          </gpxtpx:TrackPointExtension>")?;
        writeln!(writer, "        </extensions>")?;
        writeln!(writer, "      </trkpt>")
    }
}

/// GPX document with a single track segment.
#[derive(Debug, Clone, Default)]
pub struct Gpx {
    pub creator: String,
    pub points: Vec<TrackPoint>,
}

impl Gpx {
    /// One track point per record, in record order.
    pub fn new(records: &[GpsRecord], options: &GpxOptions) -> Self {
        let points = records.par_iter()
            .map(|r| TrackPoint::from_record(r, options.utc_offset))
            .collect::<Vec<_>>();

        Self {
            creator: options.creator.to_owned(),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn write<W: Write>(&self, writer: &mut W) -> Result<(), GpsError> {
        writeln!(writer, r#"<?xml version="1.0" encoding="UTF-8" ?>"#)?;
        writeln!(writer, "<gpx")?;
        writeln!(writer, r#" xmlns="http://www.topografix.com/GPX/1/1""#)?;
        writeln!(writer, r#" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#)?;
        writeln!(writer, r#" xsi:schemaLocation="http://www.topografix.com/GPX/1/1 http://www.topografix.com/GPX/1/1/gpx.xsd""#)?;
        writeln!(writer, r#" xmlns:gpxtpx="http://www.garmin.com/xmlschemas/TrackPointExtension/v2""#)?;
        writeln!(writer, r#" version="1.1""#)?;
        writeln!(writer, r#" creator="{}">"#, escape(&self.creator))?;
        writeln!(writer, "  <trk>")?;
        writeln!(writer, "    <trkseg>")?;
        for point in self.points.iter() {
            point.write(writer)?;
        }
        writeln!(writer, "    </trkseg>")?;
        writeln!(writer, "  </trk>")?;
        writeln!(writer, "</gpx>")?;
        Ok(())
    }

    /// Writes GPX to `path`, creating or truncating the file.
    pub fn write_to_path(&self, path: &Path) -> Result<(), GpsError> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write(&mut writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn to_xml(&self) -> Result<String, GpsError> {
        let mut buf: Vec<u8> = Vec::new();
        self.write(&mut buf)?;
        // Only ever written from `str`
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Escapes XML attribute value.
fn escape(value: &str) -> String {
    value.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
