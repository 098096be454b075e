use time::OffsetDateTime;

use crate::time_helper::day_difference;

/// Column of the today marker, clamped to 0 on or before the first day of school
pub fn today_line_index(today: OffsetDateTime, school_year_start: OffsetDateTime) -> i64 {
    if today <= school_year_start {
        return 0;
    }

    day_difference(school_year_start, today) / 7
}
