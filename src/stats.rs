use crate::models::{DailyRecord, SlotAggregate, SlotStats};
use crate::slots::TIME_SLOTS;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Aggregates every reading value in the inclusive `start..=end` date range
/// into one per-slot summary, in catalog order.
///
/// Dates without a record contribute nothing; so do slots whose reading has
/// no value. A slot that collected no values at all comes back with
/// `count == 0` and no stats, which is distinct from a slot whose readings
/// were all zero. An inverted range (`start > end`) enumerates nothing and
/// therefore yields all-no-data output rather than an error. Values are
/// summed as-is; range validation belongs to the layer that records them.
pub fn aggregate_range(
    records: &BTreeMap<String, DailyRecord>,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<SlotAggregate> {
    let mut bags: Vec<Vec<i64>> = vec![Vec::new(); TIME_SLOTS.len()];

    let mut date = start;
    while date <= end {
        if let Some(record) = records.get(&date_key(date)) {
            for (index, slot) in TIME_SLOTS.iter().enumerate() {
                if let Some(value) = record.get(*slot).and_then(|reading| reading.value) {
                    bags[index].push(value);
                }
            }
        }
        match date.succ_opt() {
            Some(next) => date = next,
            None => break,
        }
    }

    TIME_SLOTS
        .into_iter()
        .zip(bags)
        .map(|(slot, values)| {
            let count = values.len();
            let stats = if count == 0 {
                None
            } else {
                let sum: i64 = values.iter().sum();
                Some(SlotStats {
                    average: sum as f64 / count as f64,
                    min: *values.iter().min().unwrap(),
                    max: *values.iter().max().unwrap(),
                })
            };
            SlotAggregate { slot, count, stats }
        })
        .collect()
}

fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
