use crate::models::{ChartPoint, DailyRecord};
use crate::slots::TIME_SLOTS;

/// Derives the ordered chartable point sequence for one day.
///
/// Iterates the slot catalog (not the record's key order), emits a point only
/// for slots with a present value, and carries medication/comments along for
/// tooltips and markers. Slots without a value are skipped entirely rather
/// than emitted as nulls; whether the renderer joins across the resulting
/// gaps is its own policy, as is the "fewer than 2 points is not chartable"
/// threshold. An absent or empty record yields an empty sequence, never an
/// error.
pub fn derive_series(record: Option<&DailyRecord>) -> Vec<ChartPoint> {
    let Some(record) = record else {
        return Vec::new();
    };

    TIME_SLOTS
        .into_iter()
        .filter_map(|slot| {
            let reading = record.get(slot)?;
            let value = reading.value?;
            Some(ChartPoint {
                slot,
                value,
                medication: reading.medication.clone(),
                comments: reading.comments.clone(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Reading;
    use crate::slots::slot_index;

    fn reading(value: Option<i64>) -> Reading {
        Reading {
            value,
            medication: Vec::new(),
            comments: String::new(),
        }
    }

    #[test]
    fn skips_slots_without_a_value() {
        let mut record = DailyRecord::new();
        record.insert("08:00".to_string(), reading(Some(5)));
        record.insert("12:00".to_string(), reading(None));

        let series = derive_series(Some(&record));
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].slot, "08:00");
        assert_eq!(series[0].value, 5);
    }

    #[test]
    fn zero_is_a_valid_value() {
        let mut record = DailyRecord::new();
        record.insert("10:00".to_string(), reading(Some(0)));

        let series = derive_series(Some(&record));
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].value, 0);
    }

    #[test]
    fn follows_catalog_order_not_key_order() {
        let mut record = DailyRecord::new();
        record.insert("22:00".to_string(), reading(Some(2)));
        record.insert("08:00".to_string(), reading(Some(7)));
        record.insert("14:00".to_string(), reading(Some(4)));

        let series = derive_series(Some(&record));
        let positions: Vec<usize> = series
            .iter()
            .map(|point| slot_index(point.slot).unwrap())
            .collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        assert_eq!(positions, sorted);
        assert_eq!(series[0].slot, "08:00");
        assert_eq!(series[2].slot, "22:00");
    }

    #[test]
    fn carries_annotations_and_defaults() {
        let mut record = DailyRecord::new();
        record.insert(
            "16:00".to_string(),
            Reading {
                value: Some(3),
                medication: vec!["Paracetamol".to_string(), "Paracetamol".to_string()],
                comments: "after lunch".to_string(),
            },
        );

        let series = derive_series(Some(&record));
        assert_eq!(series[0].medication.len(), 2);
        assert_eq!(series[0].comments, "after lunch");
    }

    #[test]
    fn absent_record_yields_empty_series() {
        assert!(derive_series(None).is_empty());
        assert!(derive_series(Some(&DailyRecord::new())).is_empty());
    }

    #[test]
    fn never_longer_than_the_catalog() {
        let mut record = DailyRecord::new();
        for slot in TIME_SLOTS {
            record.insert(slot.to_string(), reading(Some(1)));
        }
        record.insert("99:99".to_string(), reading(Some(9)));

        assert_eq!(derive_series(Some(&record)).len(), TIME_SLOTS.len());
    }
}
