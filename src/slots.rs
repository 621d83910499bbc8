//! Quick-add and undo over an explicitly ordered list of named boolean slots.
//!
//! Each domain declares its forward order and its undo order separately; the
//! undo order is configuration, not the forward list reversed.

use crate::models::{NutritionDay, ReadingWeek, SportWeek};

#[derive(Debug, Clone, Copy)]
pub struct SlotOrder {
    pub forward: &'static [&'static str],
    pub reverse: &'static [&'static str],
}

pub const SPORT_ORDER: SlotOrder = SlotOrder {
    forward: &["gym1", "run1", "gym2", "run2"],
    reverse: &["run2", "gym2", "run1", "gym1"],
};

pub const READING_ORDER: SlotOrder = SlotOrder {
    forward: &["day1", "day2", "day3", "day4", "day5", "day6", "day7"],
    reverse: &["day7", "day6", "day5", "day4", "day3", "day2", "day1"],
};

pub const NUTRITION_ORDER: SlotOrder = SlotOrder {
    forward: &["protein", "vitamins", "water", "sweets"],
    reverse: &["sweets", "water", "vitamins", "protein"],
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotOutcome {
    Set(&'static str),
    Cleared(&'static str),
    AlreadyComplete,
    NothingToUndo,
}

impl SlotOutcome {
    pub fn changed(&self) -> bool {
        matches!(self, SlotOutcome::Set(_) | SlotOutcome::Cleared(_))
    }

    pub fn reason(&self) -> Option<&'static str> {
        match self {
            SlotOutcome::AlreadyComplete => Some("already complete"),
            SlotOutcome::NothingToUndo => Some("nothing to undo"),
            _ => None,
        }
    }
}

/// A record whose boolean fields are addressable by name.
pub trait SlotRecord {
    fn slot_names(&self) -> &'static [&'static str];
    fn slot(&self, name: &str) -> Option<bool>;
    /// Returns `false` when `name` is not a slot of this record.
    fn set_slot(&mut self, name: &str, value: bool) -> bool;

    fn completed(&self) -> u32 {
        self.slot_names()
            .iter()
            .filter(|name| self.slot(name).unwrap_or(false))
            .count() as u32
    }
}

pub fn next_forward<R: SlotRecord>(record: &R, order: &SlotOrder) -> Option<&'static str> {
    order
        .forward
        .iter()
        .copied()
        .find(|name| record.slot(name) == Some(false))
}

pub fn next_reverse<R: SlotRecord>(record: &R, order: &SlotOrder) -> Option<&'static str> {
    order
        .reverse
        .iter()
        .copied()
        .find(|name| record.slot(name) == Some(true))
}

pub fn quick_add<R: SlotRecord>(record: &mut R, order: &SlotOrder) -> SlotOutcome {
    match next_forward(record, order) {
        Some(name) => {
            record.set_slot(name, true);
            SlotOutcome::Set(name)
        }
        None => SlotOutcome::AlreadyComplete,
    }
}

pub fn undo<R: SlotRecord>(record: &mut R, order: &SlotOrder) -> SlotOutcome {
    match next_reverse(record, order) {
        Some(name) => {
            record.set_slot(name, false);
            SlotOutcome::Cleared(name)
        }
        None => SlotOutcome::NothingToUndo,
    }
}

/// Flips one slot. `None` when the record has no slot called `name`.
pub fn toggle<R: SlotRecord>(record: &mut R, name: &str) -> Option<bool> {
    let flipped = !record.slot(name)?;
    record.set_slot(name, flipped);
    Some(flipped)
}

macro_rules! slot_record {
    ($ty:ty, [$($field:ident),+ $(,)?]) => {
        impl SlotRecord for $ty {
            fn slot_names(&self) -> &'static [&'static str] {
                &[$(stringify!($field)),+]
            }

            fn slot(&self, name: &str) -> Option<bool> {
                match name {
                    $(stringify!($field) => Some(self.$field),)+
                    _ => None,
                }
            }

            fn set_slot(&mut self, name: &str, value: bool) -> bool {
                match name {
                    $(stringify!($field) => {
                        self.$field = value;
                        true
                    })+
                    _ => false,
                }
            }
        }
    };
}

slot_record!(SportWeek, [gym1, gym2, run1, run2]);
slot_record!(ReadingWeek, [day1, day2, day3, day4, day5, day6, day7]);
slot_record!(NutritionDay, [protein, vitamins, water, sweets]);
