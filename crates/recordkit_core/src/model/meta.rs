//! Rich-record metadata block: audit stamps, revisioning, soft delete,
//! and search-keyword material.
//!
//! # Responsibility
//! - Group the metadata fields every rich record carries.
//! - Provide lifecycle helpers for audit stamping and soft-delete semantics.
//!
//! # Invariants
//! - `is_deleted` is the source of truth for tombstone state.
//! - Timestamps are epoch milliseconds supplied by the caller; this crate
//!   reads no clock.

use crate::model::ident::ActorRef;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Search-keyword material attached to a rich record.
///
/// Serialized untagged: plain text, a flat keyword list, or per-locale lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchKeywords {
    /// Free-form keyword text.
    Text(String),
    /// Flat keyword list.
    List(Vec<String>),
    /// Keyword lists keyed by locale.
    ByLocale(BTreeMap<String, Vec<String>>),
}

/// Metadata fields shared by every rich record shape.
///
/// Designed to be embedded (serde-flattened) in carrier structs so the wire
/// shape stays flat while Rust code composes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMeta {
    /// Stable lookup key for by-slug operations.
    pub slug: Option<String>,
    /// Creation time in epoch milliseconds.
    pub created_at: Option<i64>,
    /// Principal that created the record.
    pub created_by: Option<ActorRef>,
    /// Last update time in epoch milliseconds.
    pub updated_at: Option<i64>,
    /// Principal that performed the last update.
    pub updated_by: Option<ActorRef>,
    /// Optimistic-concurrency revision counter.
    pub revision: Option<u64>,
    /// Codebase-release marker the record was written under.
    pub release: Option<String>,
    /// Names of ad hoc properties stored outside the declared shape.
    #[serde(default)]
    pub irregular_props: Vec<String>,
    /// Soft delete tombstone.
    #[serde(default)]
    pub is_deleted: bool,
    /// Search-keyword material for lookup features.
    pub search_keywords: Option<SearchKeywords>,
}

impl RecordMeta {
    /// Stamps creation audit fields and starts the revision counter.
    ///
    /// # Contract
    /// - Sets both created and updated stamps to the same actor/time.
    /// - Initializes `revision` to 1 when unset; an existing value is kept.
    pub fn stamp_created(&mut self, actor: impl Into<ActorRef>, at_epoch_ms: i64) {
        let actor = actor.into();
        self.created_at = Some(at_epoch_ms);
        self.created_by = Some(actor.clone());
        self.updated_at = Some(at_epoch_ms);
        self.updated_by = Some(actor);
        if self.revision.is_none() {
            self.revision = Some(1);
        }
    }

    /// Stamps update audit fields.
    pub fn touch(&mut self, actor: impl Into<ActorRef>, at_epoch_ms: i64) {
        self.updated_at = Some(at_epoch_ms);
        self.updated_by = Some(actor.into());
    }

    /// Advances the revision counter and returns the new value.
    ///
    /// An unset counter is treated as 0, so the first bump yields 1.
    pub fn bump_revision(&mut self) -> u64 {
        let next = self.revision.unwrap_or(0) + 1;
        self.revision = Some(next);
        next
    }

    /// Marks the record as softly deleted (tombstoned).
    pub fn soft_delete(&mut self) {
        self.is_deleted = true;
    }

    /// Clears the soft delete flag.
    pub fn restore(&mut self) {
        self.is_deleted = false;
    }

    /// Returns whether the record should be considered visible/active.
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }
}
