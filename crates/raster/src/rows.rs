use time::OffsetDateTime;

use crate::time_helper::week_difference;
use crate::types::{ClassTopics, IndexedTopicElement, RasterRowDescriptor, TopicElement};

const ROW_KEY_SEPARATOR: char = '-';

/// Stable list key of a subject row within a class
pub fn row_key(class_name: &str, subject_id: &str) -> String {
    format!("{class_name}{ROW_KEY_SEPARATOR}{subject_id}")
}

/// Replaces a topic's dates with the raster columns they fall in (both rounded down)
pub fn index_topic<D: Clone>(
    topic: &TopicElement<D>,
    school_year_start: OffsetDateTime,
) -> IndexedTopicElement<D> {
    IndexedTopicElement {
        start_index: week_difference(school_year_start, topic.start_date, false),
        end_index: week_difference(school_year_start, topic.end_date, false),
        display: topic.display.clone(),
    }
}

/// Flattens classes and their subjects into raster rows, keeping input order.
///
/// The first subject of every class is flagged so the caller can space class
/// groups apart. Duplicate class/subject pairs yield duplicate keys.
pub fn build_rows<D: Clone>(
    class_topics: &[ClassTopics<D>],
    school_year_start: OffsetDateTime,
) -> Vec<RasterRowDescriptor<D>> {
    class_topics
        .iter()
        .flat_map(|class| {
            class
                .classes
                .iter()
                .enumerate()
                .map(move |(position, subject)| RasterRowDescriptor {
                    row_key: row_key(&class.class_name, &subject.subject_id),
                    is_first_in_class: position == 0,
                    topic_elements: subject
                        .topics
                        .iter()
                        .map(|topic| index_topic(topic, school_year_start))
                        .collect(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SubjectTopics, TopicDisplay};
    use time::Duration;
    use time::macros::datetime;

    const START: OffsetDateTime = datetime!(2024-09-02 0:00 UTC);

    fn topic(id: &str, from_day: i64, to_day: i64) -> TopicElement {
        TopicElement {
            start_date: START + Duration::days(from_day),
            end_date: START + Duration::days(to_day),
            display: TopicDisplay {
                id: id.to_owned(),
                text: format!("Topic {id}"),
                color: "#92DB92".into(),
            },
        }
    }

    #[test]
    fn test_row_key() {
        assert_eq!(row_key("7a", "bio"), "7a-bio");
    }

    #[test]
    fn test_index_topic_rounds_both_ends_down() {
        let indexed = index_topic(&topic("1", 10, 24), START);

        assert_eq!(indexed.start_index, 1);
        assert_eq!(indexed.end_index, 3);
        assert_eq!(indexed.display.text, "Topic 1");
    }

    #[test]
    fn test_build_rows_flags_first_subject_per_class() {
        let data = vec![
            ClassTopics {
                class_name: "7a".to_owned(),
                classes: vec![
                    SubjectTopics {
                        subject_id: "bio".to_owned(),
                        subject_name: "Biologie".to_owned(),
                        topics: vec![topic("1", 0, 20)],
                    },
                    SubjectTopics {
                        subject_id: "mat".to_owned(),
                        subject_name: "Mathematik".to_owned(),
                        topics: vec![],
                    },
                ],
            },
            ClassTopics {
                class_name: "8b".to_owned(),
                classes: vec![SubjectTopics {
                    subject_id: "bio".to_owned(),
                    subject_name: "Biologie".to_owned(),
                    topics: vec![topic("2", 7, 35), topic("3", 42, 56)],
                }],
            },
        ];

        let rows = build_rows(&data, START);

        let keys: Vec<_> = rows.iter().map(|row| row.row_key.as_str()).collect();
        assert_eq!(keys, vec!["7a-bio", "7a-mat", "8b-bio"]);

        let firsts: Vec<_> = rows.iter().map(|row| row.is_first_in_class).collect();
        assert_eq!(firsts, vec![true, false, true]);

        assert!(rows[1].topic_elements.is_empty());
        assert_eq!(rows[2].topic_elements.len(), 2);
        assert_eq!(rows[2].topic_elements[1].start_index, 6);
        assert_eq!(rows[2].topic_elements[1].end_index, 8);
    }
}
