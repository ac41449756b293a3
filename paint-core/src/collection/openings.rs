//! Add, update and remove operations over an ordered list of openings.
//!
//! Every operation borrows the current collection and returns a new one, so the
//! owner swaps its held value in a single assignment.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::ids::IdGenerator;
use crate::model::{Opening, OpeningField, OpeningId};

/// Ordered doors or windows. Order is display order only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OpeningCollection {
    items: Vec<Opening>,
}

impl OpeningCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a 0 x 0 ft opening with a fresh identifier.
    pub fn add(&self, ids: &mut impl IdGenerator) -> Self {
        let opening = Opening::new(ids.next_id());
        debug!(id = %opening.id, "adding opening");

        let mut items = self.items.clone();
        items.push(opening);
        Self { items }
    }

    /// Replace one field of the opening with `id`.
    ///
    /// `raw_value` is the text of the input field: empty means 0. Unknown
    /// identifiers leave the collection unchanged.
    pub fn update(&self, id: OpeningId, field: OpeningField, raw_value: &str) -> Self {
        self.update_value(id, field, parse_field_value(field.name(), raw_value))
    }

    /// Replace one field of the opening with `id` by an already numeric value.
    pub fn update_value(&self, id: OpeningId, field: OpeningField, value: f64) -> Self {
        let items = self
            .items
            .iter()
            .map(|item| {
                let mut item = *item;
                if item.id == id {
                    item.set(field, value);
                }
                item
            })
            .collect();
        Self { items }
    }

    /// Drop the opening with `id`. Absent identifiers are a no-op.
    pub fn remove(&self, id: OpeningId) -> Self {
        let items = self
            .items
            .iter()
            .filter(|item| item.id != id)
            .copied()
            .collect();
        Self { items }
    }

    /// Find an opening by identifier.
    pub fn get(&self, id: OpeningId) -> Option<&Opening> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Identifier of the most recently appended opening.
    pub fn last_id(&self) -> Option<OpeningId> {
        self.items.last().map(|item| item.id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Opening> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[Opening] {
        &self.items
    }

    /// Sum of opening areas in square meters.
    pub fn total_area_m2(&self) -> f64 {
        self.items.iter().map(Opening::area_m2).sum()
    }
}

impl<'a> IntoIterator for &'a OpeningCollection {
    type Item = &'a Opening;
    type IntoIter = std::slice::Iter<'a, Opening>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<Opening> for OpeningCollection {
    fn from_iter<T: IntoIterator<Item = Opening>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Coerce input text to a number: empty is 0.
///
/// Text is expected to be pre-filtered by the input field. Anything that
/// still fails to parse is logged and treated as 0.
pub fn parse_field_value(field: &str, raw_value: &str) -> f64 {
    let trimmed = raw_value.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            warn!(field, value = raw_value, "unparsable numeric input, using 0");
            0.0
        }
    }
}
