use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};
use time::{Duration, Month, OffsetDateTime};

const MILLIS_PER_DAY: i128 = 24 * 60 * 60 * 1000;
const MILLIS_PER_WEEK: i128 = 7 * MILLIS_PER_DAY;
const SECONDS_PER_WEEK: i64 = 7 * 24 * 60 * 60;

/// Language used for month labels
#[derive(
    EnumString,
    Display,
    AsRefStr,
    VariantArray,
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    De,
}

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_DE: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

pub fn month_name(month: Month, locale: Locale) -> &'static str {
    let index = u8::from(month) as usize - 1;
    match locale {
        Locale::En => MONTHS_EN[index],
        Locale::De => MONTHS_DE[index],
    }
}

/// "Month Year" header label, e.g. `September 2024`
pub fn month_and_year_string(date: OffsetDateTime, locale: Locale) -> String {
    format!("{} {}", month_name(date.month(), locale), date.year())
}

/// Whole weeks from `from_date` to `to_date`.
///
/// `round_up` takes the ceiling of the elapsed weeks, otherwise the floor.
/// Dates before `from_date` give negative results, which are not clamped.
/// The floor rounds away from zero there: three days before `from_date`
/// is week -1, not 0.
pub fn week_difference(from_date: OffsetDateTime, to_date: OffsetDateTime, round_up: bool) -> i64 {
    let elapsed = elapsed_millis(from_date, to_date);
    let weeks = elapsed.div_euclid(MILLIS_PER_WEEK);

    if round_up && elapsed.rem_euclid(MILLIS_PER_WEEK) != 0 {
        (weeks + 1) as i64
    } else {
        weeks as i64
    }
}

/// Whole days from `from_date` to `to_date`, rounded down
pub fn day_difference(from_date: OffsetDateTime, to_date: OffsetDateTime) -> i64 {
    elapsed_millis(from_date, to_date).div_euclid(MILLIS_PER_DAY) as i64
}

/// Start of the `index`-th raster column, `None` past the representable date range
pub fn column_start(school_year_start: OffsetDateTime, index: i64) -> Option<OffsetDateTime> {
    let seconds = index.checked_mul(SECONDS_PER_WEEK)?;
    school_year_start.checked_add(Duration::seconds(seconds))
}

fn elapsed_millis(from_date: OffsetDateTime, to_date: OffsetDateTime) -> i128 {
    (to_date - from_date).whole_milliseconds()
}
