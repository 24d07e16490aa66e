//! Pair shape used for display/selection lists.

use crate::model::ident::{EntityId, Identified, RecordId};
use serde::{Deserialize, Serialize};

/// Minimal display-oriented shape: identifier plus plain name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair<Id = RecordId> {
    /// Stable identifier of the referenced record.
    pub id: Id,
    /// Plain display name, already resolved to one locale.
    pub name: String,
}

impl<Id: EntityId> Pair<Id> {
    /// Creates a pair from an identifier and a resolved name.
    pub fn new(id: Id, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Sorts pairs by name, then by identifier text, for stable pick lists.
    pub fn sort_for_display(pairs: &mut [Pair<Id>]) {
        pairs.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.id.to_string().cmp(&b.id.to_string()))
        });
    }
}

impl<Id: EntityId> Identified for Pair<Id> {
    type Id = Id;

    fn id(&self) -> &Id {
        &self.id
    }
}
