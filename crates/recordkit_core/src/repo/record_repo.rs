//! Record repository contract: the optional CRUD/find/delete/trash catalog.
//!
//! # Responsibility
//! - Declare the method signatures a conforming data-access layer may
//!   implement.
//! - Provide the error vocabulary implementations report through.
//!
//! # Invariants
//! - Every catalog method has a provided body reporting `Unsupported`;
//!   implementations override exactly the operations their backend supports.
//! - `find_by_id` honors `include_deleted`; the other finders see only
//!   active records.

use crate::model::ident::{EntityId, IdOf};
use crate::model::meta::SearchKeywords;
use crate::model::name::DisplayName;
use crate::model::record::{Record, RichEntity};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Shared error vocabulary for repository implementations.
///
/// This crate never produces `NotFound`/`Conflict`/`InvalidData`/`Backend`
/// itself; conforming backends do. `Unsupported` is produced by the provided
/// catalog bodies below.
#[derive(Debug)]
pub enum RepoError {
    /// No record exists for the given identifier or slug.
    NotFound(String),
    /// Optimistic-concurrency revision mismatch on a write.
    Conflict { expected: u64, actual: u64 },
    /// The backend does not implement the named operation.
    Unsupported(&'static str),
    /// Persisted state does not conform to the declared shape.
    InvalidData(String),
    /// Backend transport or storage failure.
    Backend(Box<dyn Error + Send + Sync>),
}

impl RepoError {
    /// Builds a `NotFound` from any identifier's textual form.
    pub fn not_found(id: &impl Display) -> Self {
        Self::NotFound(id.to_string())
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::Conflict { expected, actual } => write!(
                f,
                "revision conflict: expected {expected}, found {actual}"
            ),
            Self::Unsupported(op) => {
                write!(f, "operation `{op}` is not supported by this repository")
            }
            Self::InvalidData(message) => write!(f, "invalid record data: {message}"),
            Self::Backend(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Backend(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

/// Filter options for catalog-level record queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordQuery {
    /// Restrict to records written under this release marker.
    pub release: Option<String>,
    /// Restrict to records whose search-keyword material matches.
    pub keyword: Option<String>,
    /// Include soft-deleted records in the result.
    pub include_deleted: bool,
    /// Maximum rows to return.
    pub limit: Option<u32>,
    /// Number of rows to skip.
    pub offset: u32,
}

/// Ready-made partial-update payload for the base record fields.
///
/// `None` means leave the field unchanged. Implementations with richer
/// entities typically define their own patch type instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordPatch {
    pub name: Option<DisplayName>,
    pub slug: Option<String>,
    pub release: Option<String>,
    pub irregular_props: Option<Vec<String>>,
    pub search_keywords: Option<SearchKeywords>,
}

impl RecordPatch {
    /// Returns whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.slug.is_none()
            && self.release.is_none()
            && self.irregular_props.is_none()
            && self.search_keywords.is_none()
    }

    /// Applies the set fields to a canonical record, leaving the rest alone.
    pub fn apply_to<Id: EntityId>(&self, record: &mut Record<Id>) {
        if let Some(name) = &self.name {
            record.name = Some(name.clone());
        }
        if let Some(slug) = &self.slug {
            record.meta.slug = Some(slug.clone());
        }
        if let Some(release) = &self.release {
            record.meta.release = Some(release.clone());
        }
        if let Some(props) = &self.irregular_props {
            record.meta.irregular_props = props.clone();
        }
        if let Some(keywords) = &self.search_keywords {
            record.meta.search_keywords = Some(keywords.clone());
        }
    }
}

fn unsupported(op: &'static str) -> RepoError {
    log::debug!("event=repo_unsupported module=repo op={op}");
    RepoError::Unsupported(op)
}

/// Repository contract for rich records.
///
/// Every operation is optional: the provided bodies report
/// [`RepoError::Unsupported`], and a backend overrides the subset it serves.
/// Behavior notes on each method describe what a conforming override does;
/// this crate does not enforce them.
pub trait RecordRepository {
    /// Record shape served by this repository.
    type Record: RichEntity;
    /// Partial-update payload accepted by [`RecordRepository::patch`].
    type Patch;

    /// Persists a new record and returns its identifier.
    ///
    /// # Contract
    /// - Rejects an identifier that is already present.
    fn create(&self, record: &Self::Record) -> RepoResult<IdOf<Self::Record>> {
        let _ = record;
        Err(unsupported("create"))
    }

    /// Replaces an existing record in full.
    ///
    /// # Contract
    /// - Reports `NotFound` when the identifier is absent.
    /// - Reports `Conflict` when the stored revision differs from the
    ///   incoming one.
    fn replace(&self, record: &Self::Record) -> RepoResult<()> {
        let _ = record;
        Err(unsupported("replace"))
    }

    /// Applies a partial update to an existing record.
    ///
    /// # Contract
    /// - Reports `NotFound` when the identifier is absent.
    fn patch(&self, id: &IdOf<Self::Record>, patch: &Self::Patch) -> RepoResult<()> {
        let _ = (id, patch);
        Err(unsupported("patch"))
    }

    /// Finds one record by identifier with optional tombstone visibility.
    fn find_by_id(
        &self,
        id: &IdOf<Self::Record>,
        include_deleted: bool,
    ) -> RepoResult<Option<Self::Record>> {
        let _ = (id, include_deleted);
        Err(unsupported("find_by_id"))
    }

    /// Finds one active record by slug.
    fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Self::Record>> {
        let _ = slug;
        Err(unsupported("find_by_slug"))
    }

    /// Finds the active records for the given identifiers.
    ///
    /// # Contract
    /// - Missing identifiers are skipped, not reported as errors.
    fn find_by_ids(&self, ids: &[IdOf<Self::Record>]) -> RepoResult<Vec<Self::Record>> {
        let _ = ids;
        Err(unsupported("find_by_ids"))
    }

    /// Lists records matching the filter query.
    fn find(&self, query: &RecordQuery) -> RepoResult<Vec<Self::Record>> {
        let _ = query;
        Err(unsupported("find"))
    }

    /// Hard-deletes one record by identifier.
    ///
    /// # Contract
    /// - Reports `NotFound` when the identifier is absent.
    fn delete(&self, id: &IdOf<Self::Record>) -> RepoResult<()> {
        let _ = id;
        Err(unsupported("delete"))
    }

    /// Hard-deletes many records and returns how many existed.
    fn delete_many(&self, ids: &[IdOf<Self::Record>]) -> RepoResult<u64> {
        let _ = ids;
        Err(unsupported("delete_many"))
    }

    /// Soft-deletes (trashes) one record by identifier.
    ///
    /// # Contract
    /// - Reports `NotFound` when the identifier is absent.
    /// - Trashing an already-trashed record succeeds.
    fn trash(&self, id: &IdOf<Self::Record>) -> RepoResult<()> {
        let _ = id;
        Err(unsupported("trash"))
    }

    /// Soft-deletes many records and returns how many existed.
    fn trash_many(&self, ids: &[IdOf<Self::Record>]) -> RepoResult<u64> {
        let _ = ids;
        Err(unsupported("trash_many"))
    }
}
