use std::collections::HashMap;
use std::sync::LazyLock;

/// Fixed time-slot catalog. Every daily record is keyed by these labels and
/// every derived series follows this order.
pub const TIME_SLOTS: [&str; 8] = [
    "08:00", "10:00", "12:00", "14:00", "16:00", "18:00", "20:00", "22:00",
];

static SLOT_INDEX: LazyLock<HashMap<&'static str, usize>> = LazyLock::new(|| {
    TIME_SLOTS
        .iter()
        .enumerate()
        .map(|(index, label)| (*label, index))
        .collect()
});

/// Position of a label in the catalog, or `None` if it is not a valid slot.
pub fn slot_index(label: &str) -> Option<usize> {
    SLOT_INDEX.get(label).copied()
}

pub fn is_valid_slot(label: &str) -> bool {
    slot_index(label).is_some()
}
