use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::Result;
use crate::projector::{column_color_map, event_end_labels, month_labels};
use crate::rows::build_rows;
use crate::time_helper::{Locale, month_and_year_string, week_difference};
use crate::today::today_line_index;
use crate::types::{
    ClassTopicsData, ColumnColorMap, LabelMap, RasterRowDescriptor, SchoolYear, TimedEvent,
    TopicDisplay,
};

/// Everything the planner view hands to the engine, minus "today"
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RasterInput<D = TopicDisplay> {
    pub school_year: SchoolYear,
    #[serde(default)]
    pub class_topics_data: ClassTopicsData<D>,
    #[serde(default)]
    pub holidays: Vec<TimedEvent>,
    #[serde(default)]
    pub other_events: Vec<TimedEvent>,
}

impl<D> RasterInput<D> {
    /// Checks that no range in the input ends before it starts
    pub fn validate(&self) -> Result<()> {
        self.school_year.validate()?;

        for event in self.holidays.iter().chain(&self.other_events) {
            event.validate()?;
        }

        for topic in self
            .class_topics_data
            .iter()
            .flat_map(|class| &class.classes)
            .flat_map(|subject| &subject.topics)
        {
            topic.validate()?;
        }

        Ok(())
    }
}

/// The school year laid out as week columns, ready to draw
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeRaster<D = TopicDisplay> {
    pub raster_count: i64,
    pub start_label: String,
    pub end_label: String,
    pub column_color_map: ColumnColorMap,
    pub top_labels: LabelMap,
    pub bottom_labels: LabelMap,
    pub today_line_index: i64,
    pub rows: Vec<RasterRowDescriptor<D>>,
}

impl<D: Clone> TimeRaster<D> {
    #[tracing::instrument(skip_all, fields(locale = %locale))]
    pub fn build(input: &RasterInput<D>, today: OffsetDateTime, locale: Locale) -> Result<Self> {
        input.validate()?;

        let SchoolYear {
            start_date,
            end_date,
        } = input.school_year;

        let events: Vec<TimedEvent> = input
            .holidays
            .iter()
            .chain(&input.other_events)
            .cloned()
            .collect();

        let raster = Self {
            raster_count: week_difference(start_date, end_date, false),
            start_label: month_and_year_string(start_date, locale),
            end_label: month_and_year_string(end_date, locale),
            column_color_map: column_color_map(&events, start_date),
            top_labels: month_labels(start_date, end_date, locale),
            bottom_labels: event_end_labels(&input.other_events, start_date),
            today_line_index: today_line_index(today, start_date),
            rows: build_rows(&input.class_topics_data, start_date),
        };

        tracing::debug!(
            raster_count = raster.raster_count,
            colored_columns = raster.column_color_map.len(),
            rows = raster.rows.len(),
            today_line_index = raster.today_line_index,
            "Time raster built"
        );

        Ok(raster)
    }
}
