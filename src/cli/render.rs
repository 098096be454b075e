use std::io::Write;
use std::path::PathBuf;

use planner_raster::{Locale, RasterInput, TimeRaster, epoch_millis};
use time::OffsetDateTime;

use crate::config::Config;
use crate::error::{AppError, Result};

#[derive(Debug, Clone)]
pub struct RenderArgs {
    pub input: PathBuf,
    /// Epoch milliseconds, current time when absent
    pub today: Option<i64>,
    /// Overrides the configured locale
    pub locale: Option<Locale>,
    pub pretty: bool,
}

/// Reads a planner document, builds its time raster and writes it as JSON
#[tracing::instrument(skip_all, fields(input = %args.input.display()))]
pub fn render(config: &Config, args: RenderArgs, out: &mut impl Write) -> Result<()> {
    let locale = args.locale.unwrap_or(config.raster.locale);

    let today = match args.today {
        Some(millis) => epoch_millis::from_millis(millis)
            .map_err(|e| AppError::ValidationError(format!("Invalid --today value: {e}")))?,
        None => OffsetDateTime::now_utc(),
    };

    let source = std::fs::read_to_string(&args.input).map_err(|source| AppError::InputError {
        path: args.input.display().to_string(),
        source,
    })?;
    let input: RasterInput = serde_json::from_str(&source)?;

    let raster = TimeRaster::build(&input, today, locale)?;

    tracing::info!(
        raster_count = raster.raster_count,
        rows = raster.rows.len(),
        "Rendered time raster"
    );

    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, &raster)?;
    } else {
        serde_json::to_writer(&mut *out, &raster)?;
    }
    writeln!(out)?;

    Ok(())
}
