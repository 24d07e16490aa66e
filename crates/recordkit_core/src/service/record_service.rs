//! Record service contract: view-facing CRUD, internal raw-record access,
//! and pair/view conversions.
//!
//! # Responsibility
//! - Declare the method catalog a conforming service layer may implement.
//! - Map repository errors into the service error vocabulary.
//!
//! # Invariants
//! - View-facing reads report absence as `Ok(None)`; the internal `fetch`
//!   group reports it as `NotFound`.
//! - The service layer remains storage-agnostic; persistence flows through
//!   repository contracts.

use crate::model::ident::{IdOf, Identified};
use crate::model::name::DEFAULT_LOCALE;
use crate::model::pair::Pair;
use crate::model::record::{Entity, RichEntity};
use crate::repo::record_repo::{RecordQuery, RepoError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Shared error vocabulary for service implementations.
#[derive(Debug)]
pub enum ServiceError {
    /// No record exists for the given identifier or slug.
    NotFound(String),
    /// The service does not implement the named operation.
    Unsupported(&'static str),
    /// Repository-layer failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::Unsupported(op) => {
                write!(f, "operation `{op}` is not supported by this service")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Repo(other),
        }
    }
}

fn unsupported(op: &'static str) -> ServiceError {
    log::debug!("event=service_unsupported module=service op={op}");
    ServiceError::Unsupported(op)
}

/// Service contract for rich records.
///
/// The catalog splits into four groups:
/// - view-facing CRUD returning [`RecordService::View`] projections,
/// - internal raw-record operations (`fetch*`) meant for service-to-service
///   callers, which report `NotFound` instead of returning `None`,
/// - pair conversions for display/selection lists,
/// - view conversions between the record and its client-facing projection.
///
/// Every operation is optional in the repository-catalog sense: provided
/// bodies report [`ServiceError::Unsupported`], except the pair projection,
/// which has a usable default.
pub trait RecordService {
    /// Record shape this service operates on.
    type Record: RichEntity;
    /// Client-facing projection returned by the view-facing group.
    type View;
    /// Creation payload accepted by `create` and `update`.
    type Draft;
    /// Partial-update payload accepted by `patch`.
    type Patch;

    /// Creates a record from a draft and returns its view projection.
    fn create(&self, draft: &Self::Draft) -> ServiceResult<Self::View> {
        let _ = draft;
        Err(unsupported("create"))
    }

    /// Replaces a record in full from a draft and returns the new view.
    ///
    /// # Contract
    /// - Reports `NotFound` when the identifier is absent.
    fn update(&self, id: &IdOf<Self::Record>, draft: &Self::Draft) -> ServiceResult<Self::View> {
        let _ = (id, draft);
        Err(unsupported("update"))
    }

    /// Applies a partial update and returns the new view.
    ///
    /// # Contract
    /// - Reports `NotFound` when the identifier is absent.
    fn patch(&self, id: &IdOf<Self::Record>, patch: &Self::Patch) -> ServiceResult<Self::View> {
        let _ = (id, patch);
        Err(unsupported("patch"))
    }

    /// Gets one record's view by identifier; absence is `Ok(None)`.
    fn get(&self, id: &IdOf<Self::Record>) -> ServiceResult<Option<Self::View>> {
        let _ = id;
        Err(unsupported("get"))
    }

    /// Gets one record's view by slug; absence is `Ok(None)`.
    fn get_by_slug(&self, slug: &str) -> ServiceResult<Option<Self::View>> {
        let _ = slug;
        Err(unsupported("get_by_slug"))
    }

    /// Lists views matching the filter query.
    fn list(&self, query: &RecordQuery) -> ServiceResult<Vec<Self::View>> {
        let _ = query;
        Err(unsupported("list"))
    }

    /// Hard-deletes one record by identifier.
    fn delete(&self, id: &IdOf<Self::Record>) -> ServiceResult<()> {
        let _ = id;
        Err(unsupported("delete"))
    }

    /// Soft-deletes (trashes) one record by identifier.
    fn trash(&self, id: &IdOf<Self::Record>) -> ServiceResult<()> {
        let _ = id;
        Err(unsupported("trash"))
    }

    /// Fetches one full record by identifier.
    ///
    /// Internal operation for service-to-service callers.
    ///
    /// # Contract
    /// - Reports `NotFound` when the identifier is absent.
    fn fetch(&self, id: &IdOf<Self::Record>) -> ServiceResult<Self::Record> {
        let _ = id;
        Err(unsupported("fetch"))
    }

    /// Fetches one full record by slug.
    ///
    /// Internal operation for service-to-service callers.
    ///
    /// # Contract
    /// - Reports `NotFound` when no active record carries the slug.
    fn fetch_by_slug(&self, slug: &str) -> ServiceResult<Self::Record> {
        let _ = slug;
        Err(unsupported("fetch_by_slug"))
    }

    /// Fetches the full records for the given identifiers.
    ///
    /// Internal operation for service-to-service callers. Missing
    /// identifiers are skipped, not reported as errors.
    fn fetch_many(&self, ids: &[IdOf<Self::Record>]) -> ServiceResult<Vec<Self::Record>> {
        let _ = ids;
        Err(unsupported("fetch_many"))
    }

    /// Projects a record to its display/selection pair.
    ///
    /// The default resolves the display name for [`DEFAULT_LOCALE`] and
    /// falls back to the identifier's textual form for nameless records.
    fn to_pair(&self, record: &Self::Record) -> Pair<IdOf<Self::Record>> {
        let name = record
            .display_name()
            .and_then(|name| name.resolve(DEFAULT_LOCALE))
            .map(str::to_owned)
            .unwrap_or_else(|| record.id_text());
        Pair::new(record.id().clone(), name)
    }

    /// Projects many records to pairs, preserving input order.
    fn to_pairs(&self, records: &[Self::Record]) -> Vec<Pair<IdOf<Self::Record>>> {
        records.iter().map(|record| self.to_pair(record)).collect()
    }

    /// Rebuilds a record stub from a pair.
    fn from_pair(&self, pair: &Pair<IdOf<Self::Record>>) -> ServiceResult<Self::Record> {
        let _ = pair;
        Err(unsupported("from_pair"))
    }

    /// Projects a record to its client-facing view.
    fn to_view(&self, record: &Self::Record) -> ServiceResult<Self::View> {
        let _ = record;
        Err(unsupported("to_view"))
    }

    /// Rebuilds a record from its client-facing view.
    fn from_view(&self, view: &Self::View) -> ServiceResult<Self::Record> {
        let _ = view;
        Err(unsupported("from_view"))
    }
}
