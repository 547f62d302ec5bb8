//! Convert GPS telemetry in dashcam MOV files to GPX.
//!
//! ```sh
//! movgps [--overwrite] [--utc-offset +02:00] FILE.MOV...
//! ```
//!
//! Each `FILE.MOV` is written to `FILE.gpx` next to it.

use std::{path::{Path, PathBuf}, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use time::{error::IndeterminateOffset, macros::format_description, UtcOffset};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use movgps::{GpsError, Gpx, GpxOptions, Mov};

#[derive(Parser, Debug)]
#[command(name = "movgps")]
#[command(author, version, about = "Extract GPS telemetry from dashcam MOV files as GPX.", long_about = None)]
struct Cli {
    /// Overwrite any existing gpx file.
    #[arg(long)]
    overwrite: bool,

    /// UTC offset for the recorded local times, e.g. '+02:00'.
    /// Defaults to the offset of this machine.
    #[arg(long, value_parser = parse_offset, allow_hyphen_values = true)]
    utc_offset: Option<UtcOffset>,

    /// Verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// MOV files.
    #[arg(required = true)]
    paths: Vec<PathBuf>,
}

fn parse_offset(value: &str) -> Result<UtcOffset, String> {
    UtcOffset::parse(
        value,
        format_description!("[offset_hour sign:mandatory]:[offset_minute]")
    ).map_err(|err| format!("expected '+HH:MM' or '-HH:MM': {err}"))
}

fn main() -> ExitCode {
    // Resolve before any other threads exist,
    // local offset can not be determined otherwise on some platforms.
    let local = UtcOffset::current_local_offset();

    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = GpxOptions::with_offset(resolve_offset(cli.utc_offset, local));

    let mut failed = 0;
    for path in cli.paths.iter() {
        if let Err(err) = process(path, &options, cli.overwrite) {
            error!("{err:#}");
            failed += 1;
        }
    }

    match failed {
        0 => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}

/// Offset given on the command line, else the local one,
/// else UTC.
fn resolve_offset(
    arg: Option<UtcOffset>,
    local: Result<UtcOffset, IndeterminateOffset>,
) -> UtcOffset {
    match (arg, local) {
        (Some(offset), _) => offset,
        (None, Ok(offset)) => offset,
        (None, Err(err)) => {
            warn!("Failed to determine local UTC offset, using UTC: {err}");
            UtcOffset::UTC
        }
    }
}

/// Output path: input path with extension replaced by `.gpx`.
/// Input must have a `.mov` extension (case-insensitive).
fn gpx_path(mov_path: &Path) -> Result<PathBuf, GpsError> {
    match mov_path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("mov") => Ok(mov_path.with_extension("gpx")),
        _ => Err(GpsError::InvalidExtension(mov_path.to_owned())),
    }
}

fn process(mov_path: &Path, options: &GpxOptions, overwrite: bool) -> anyhow::Result<()> {
    let gpx_path = gpx_path(mov_path)?;
    if !overwrite && gpx_path.exists() {
        return Err(GpsError::OutputExists(gpx_path).into());
    }

    let mov = Mov::open(mov_path)
        .with_context(|| format!("{}: failed to open", mov_path.display()))?;

    // Decode everything before creating the output,
    // a failed file never leaves a partial GPX behind.
    let records = mov.gps()
        .with_context(|| format!("{}: failed to extract GPS", mov_path.display()))?;

    let gpx = Gpx::new(&records, options);
    gpx.write_to_path(&gpx_path)
        .with_context(|| format!("{}: failed to write", gpx_path.display()))?;

    info!("{} -> {} ({} points)", mov_path.display(), gpx_path.display(), gpx.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path() {
        assert_eq!(gpx_path(Path::new("dir/CLIP0001.MOV")).unwrap(), PathBuf::from("dir/CLIP0001.gpx"));
        assert_eq!(gpx_path(Path::new("clip.mov")).unwrap(), PathBuf::from("clip.gpx"));
        assert!(matches!(gpx_path(Path::new("clip.mp4")), Err(GpsError::InvalidExtension(_))));
        assert!(matches!(gpx_path(Path::new("clip")), Err(GpsError::InvalidExtension(_))));
    }

    #[test]
    fn offset_argument() {
        assert_eq!(parse_offset("+02:00").unwrap(), UtcOffset::from_hms(2, 0, 0).unwrap());
        assert_eq!(parse_offset("-05:30").unwrap(), UtcOffset::from_hms(-5, -30, 0).unwrap());
        assert!(parse_offset("2").is_err());
    }

    #[test]
    fn offset_resolution() {
        let two = UtcOffset::from_hms(2, 0, 0).unwrap();
        let one = UtcOffset::from_hms(1, 0, 0).unwrap();
        assert_eq!(resolve_offset(Some(two), Err(IndeterminateOffset)), two);
        assert_eq!(resolve_offset(Some(two), Ok(one)), two);
        assert_eq!(resolve_offset(None, Ok(one)), one);
        assert_eq!(resolve_offset(None, Err(IndeterminateOffset)), UtcOffset::UTC);
    }

    #[test]
    fn existing_output_kept() {
        let dir = tempfile::tempdir().unwrap();
        let mov = dir.path().join("CLIP.MOV");
        let gpx = dir.path().join("CLIP.gpx");
        std::fs::write(&mov, b"").unwrap();
        std::fs::write(&gpx, b"keep").unwrap();

        let options = GpxOptions::with_offset(UtcOffset::UTC);
        assert!(process(&mov, &options, false).is_err());
        assert_eq!(std::fs::read(&gpx).unwrap(), b"keep");

        // empty MOV has no audio chunks: empty track
        process(&mov, &options, true).unwrap();
        let xml = std::fs::read_to_string(&gpx).unwrap();
        assert!(xml.contains("<trkseg>"));
    }
}
