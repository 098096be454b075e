use time::OffsetDateTime;

use crate::time_helper::{Locale, column_start, month_name, week_difference};
use crate::types::{ColumnColorMap, LabelMap, TimedEvent};

/// Labels the columns where a new calendar month begins.
///
/// Columns are stepped in whole weeks from `start_date` while they do not
/// pass `end_date`. Column 0 is the baseline month and is never labelled.
pub fn month_labels(start_date: OffsetDateTime, end_date: OffsetDateTime, locale: Locale) -> LabelMap {
    let mut labels = LabelMap::new();
    let mut current_month = start_date.month();

    for index in 0.. {
        let Some(date) = column_start(start_date, index).filter(|date| *date <= end_date) else {
            break;
        };

        if date.month() != current_month {
            current_month = date.month();
            labels.insert(index, month_name(current_month, locale).to_owned());
        }
    }

    labels
}

/// Labels the column in which each event ends with the event's name
pub fn event_end_labels(events: &[TimedEvent], school_year_start: OffsetDateTime) -> LabelMap {
    events
        .iter()
        .map(|event| {
            let end_index = week_difference(school_year_start, event.end_date, false);
            (end_index, event.name.to_owned())
        })
        .collect()
}

/// Colors every column whose start instant lies within an event.
///
/// The event start rounds up to the next column start and the event end
/// rounds down to the last column start it reaches. An event that contains
/// no column start colors nothing. Overlaps keep the later event's color.
pub fn column_color_map(events: &[TimedEvent], school_year_start: OffsetDateTime) -> ColumnColorMap {
    let mut colors = ColumnColorMap::new();

    for event in events {
        let start_index = week_difference(school_year_start, event.start_date, true);
        let end_index = week_difference(school_year_start, event.end_date, false);

        for index in start_index..=end_index {
            colors.insert(index, event.color.clone());
        }
    }

    colors
}
