use thiserror::Error;
use time::OffsetDateTime;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    #[error("Invalid range for {what}: start {start} is after end {end}")]
    InvalidRange {
        what: String,
        start: OffsetDateTime,
        end: OffsetDateTime,
    },
}

pub type Result<T> = std::result::Result<T, RasterError>;

/// Fails with [`RasterError::InvalidRange`] when `start` is after `end`.
pub(crate) fn ensure_range(
    what: impl Into<String>,
    start: OffsetDateTime,
    end: OffsetDateTime,
) -> Result<()> {
    if start > end {
        return Err(RasterError::InvalidRange {
            what: what.into(),
            start,
            end,
        });
    }

    Ok(())
}
