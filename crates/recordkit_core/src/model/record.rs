//! Entity and rich-record contracts plus the canonical record shape.
//!
//! # Responsibility
//! - Define the `Entity`/`RichEntity` traits conforming types implement.
//! - Provide `Record`, the ready-made rich shape for consumers that do not
//!   need their own carrier struct.
//!
//! # Invariants
//! - A rich record retains every entity-shape field plus the metadata block.
//! - Types embedding [`RecordMeta`] satisfy `RichEntity` by delegating the
//!   two accessor methods.

use crate::model::ident::{ActorRef, EntityId, Identified, RecordId};
use crate::model::meta::RecordMeta;
use crate::model::name::DisplayName;
use serde::{Deserialize, Serialize};

/// Entity shape: identity plus an optional display name.
pub trait Entity: Identified {
    /// Returns the display name, when the shape carries one.
    fn display_name(&self) -> Option<&DisplayName> {
        None
    }
}

/// Rich entity shape: entity plus the shared metadata block.
///
/// The provided helpers delegate to [`RecordMeta`] so implementers only wire
/// up the two accessors.
pub trait RichEntity: Entity {
    /// Shared metadata block.
    fn meta(&self) -> &RecordMeta;

    /// Mutable access to the shared metadata block.
    fn meta_mut(&mut self) -> &mut RecordMeta;

    /// Stable lookup key, when one is set.
    fn slug(&self) -> Option<&str> {
        self.meta().slug.as_deref()
    }

    /// Returns whether the record should be considered visible/active.
    fn is_active(&self) -> bool {
        self.meta().is_active()
    }

    /// Marks the record as softly deleted (tombstoned).
    fn soft_delete(&mut self) {
        self.meta_mut().soft_delete();
    }

    /// Clears the soft delete flag.
    fn restore(&mut self) {
        self.meta_mut().restore();
    }

    /// Stamps update audit fields.
    fn touch(&mut self, actor: ActorRef, at_epoch_ms: i64) {
        self.meta_mut().touch(actor, at_epoch_ms);
    }

    /// Advances the revision counter and returns the new value.
    fn bump_revision(&mut self) -> u64 {
        self.meta_mut().bump_revision()
    }
}

/// Canonical rich record shape.
///
/// The metadata block is serde-flattened, so the wire form is flat:
/// `id` and `name` next to the audit/version/tombstone fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record<Id = RecordId> {
    /// Stable identifier.
    pub id: Id,
    /// Optional plain or localized display name.
    pub name: Option<DisplayName>,
    /// Shared metadata block.
    #[serde(flatten)]
    pub meta: RecordMeta,
}

impl<Id: EntityId> Record<Id> {
    /// Creates an empty record with the given identifier.
    ///
    /// Optional fields start unset and `is_deleted` starts `false`.
    pub fn new(id: Id) -> Self {
        Self {
            id,
            name: None,
            meta: RecordMeta::default(),
        }
    }

    /// Creates a record with an identifier and display name.
    pub fn with_name(id: Id, name: impl Into<DisplayName>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            meta: RecordMeta::default(),
        }
    }
}

impl<Id: EntityId> Identified for Record<Id> {
    type Id = Id;

    fn id(&self) -> &Id {
        &self.id
    }
}

impl<Id: EntityId> Entity for Record<Id> {
    fn display_name(&self) -> Option<&DisplayName> {
        self.name.as_ref()
    }
}

impl<Id: EntityId> RichEntity for Record<Id> {
    fn meta(&self) -> &RecordMeta {
        &self.meta
    }

    fn meta_mut(&mut self) -> &mut RecordMeta {
        &mut self.meta
    }
}
