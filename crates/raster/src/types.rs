use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::error::{Result, ensure_range};

/// Column index to label, one entry per column where a label is drawn
pub type LabelMap = BTreeMap<i64, String>;

/// Column index to background color, last write wins
pub type ColumnColorMap = BTreeMap<i64, ColorValue>;

/// CSS color as supplied by the caller, e.g. `#92DB92`. Empty when absent.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ColorValue(pub String);

impl ColorValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColorValue {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// First and last day of school
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SchoolYear {
    #[serde(with = "epoch_millis")]
    pub start_date: OffsetDateTime,
    #[serde(with = "epoch_millis")]
    pub end_date: OffsetDateTime,
}

impl SchoolYear {
    pub fn new(start_date: OffsetDateTime, end_date: OffsetDateTime) -> Result<Self> {
        let school_year = Self {
            start_date,
            end_date,
        };
        school_year.validate()?;

        Ok(school_year)
    }

    pub fn validate(&self) -> Result<()> {
        ensure_range("school year", self.start_date, self.end_date)
    }
}

/// A holiday or any other dated calendar event
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimedEvent {
    #[serde(with = "epoch_millis")]
    pub start_date: OffsetDateTime,
    #[serde(with = "epoch_millis")]
    pub end_date: OffsetDateTime,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: ColorValue,
}

impl TimedEvent {
    pub fn validate(&self) -> Result<()> {
        ensure_range(format!("event '{}'", self.name), self.start_date, self.end_date)
    }
}

/// Display fields of a topic instance. The engine never looks inside.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TopicDisplay {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub color: ColorValue,
}

/// A unit of instruction scheduled within a subject
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TopicElement<D = TopicDisplay> {
    #[serde(with = "epoch_millis")]
    pub start_date: OffsetDateTime,
    #[serde(with = "epoch_millis")]
    pub end_date: OffsetDateTime,
    #[serde(flatten)]
    pub display: D,
}

impl<D> TopicElement<D> {
    pub fn validate(&self) -> Result<()> {
        ensure_range("topic", self.start_date, self.end_date)
    }
}

/// A topic whose dates have been replaced by raster column indices
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IndexedTopicElement<D = TopicDisplay> {
    pub start_index: i64,
    pub end_index: i64,
    #[serde(flatten)]
    pub display: D,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SubjectTopics<D = TopicDisplay> {
    pub subject_id: String,
    #[serde(default)]
    pub subject_name: String,
    #[serde(default)]
    pub topics: Vec<TopicElement<D>>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClassTopics<D = TopicDisplay> {
    pub class_name: String,
    #[serde(default)]
    pub classes: Vec<SubjectTopics<D>>,
}

pub type ClassTopicsData<D = TopicDisplay> = Vec<ClassTopics<D>>;

/// One rendered row of the raster: a subject of a class
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RasterRowDescriptor<D = TopicDisplay> {
    pub row_key: String,
    pub is_first_in_class: bool,
    pub topic_elements: Vec<IndexedTopicElement<D>>,
}

/// Instants travel as milliseconds since the Unix epoch, like the front end's `Date.getTime()`.
pub mod epoch_millis {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};
    use time::OffsetDateTime;

    const NANOS_PER_MILLI: i128 = 1_000_000;

    pub fn to_millis(value: OffsetDateTime) -> i64 {
        (value.unix_timestamp_nanos() / NANOS_PER_MILLI) as i64
    }

    pub fn from_millis(millis: i64) -> Result<OffsetDateTime, time::error::ComponentRange> {
        OffsetDateTime::from_unix_timestamp_nanos(millis as i128 * NANOS_PER_MILLI)
    }

    pub fn serialize<S: Serializer>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(to_millis(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<OffsetDateTime, D::Error> {
        let millis = i64::deserialize(deserializer)?;
        from_millis(millis).map_err(D::Error::custom)
    }
}
