//! In-memory conforming repository shared by the contract tests.
//!
//! Exists to prove the catalog is implementable; consuming codebases ship
//! their own backends.

use recordkit_core::{
    Record, RecordId, RecordPatch, RecordQuery, RecordRepository, RepoError, RepoResult,
    SearchKeywords,
};
use std::cell::RefCell;
use std::collections::BTreeMap;

pub struct MemoryRepository {
    records: RefCell<BTreeMap<RecordId, Record<RecordId>>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self {
            records: RefCell::new(BTreeMap::new()),
        }
    }
}

impl RecordRepository for MemoryRepository {
    type Record = Record<RecordId>;
    type Patch = RecordPatch;

    fn create(&self, record: &Record<RecordId>) -> RepoResult<RecordId> {
        let mut records = self.records.borrow_mut();
        if records.contains_key(&record.id) {
            return Err(RepoError::InvalidData(format!(
                "duplicate record id {}",
                record.id
            )));
        }
        records.insert(record.id, record.clone());
        Ok(record.id)
    }

    fn replace(&self, record: &Record<RecordId>) -> RepoResult<()> {
        let mut records = self.records.borrow_mut();
        let Some(existing) = records.get(&record.id) else {
            return Err(RepoError::not_found(&record.id));
        };
        if existing.meta.revision != record.meta.revision {
            return Err(RepoError::Conflict {
                expected: existing.meta.revision.unwrap_or(0),
                actual: record.meta.revision.unwrap_or(0),
            });
        }
        let mut next = record.clone();
        next.meta.bump_revision();
        records.insert(next.id, next);
        Ok(())
    }

    fn patch(&self, id: &RecordId, patch: &RecordPatch) -> RepoResult<()> {
        let mut records = self.records.borrow_mut();
        let Some(record) = records.get_mut(id) else {
            return Err(RepoError::not_found(id));
        };
        patch.apply_to(record);
        record.meta.bump_revision();
        Ok(())
    }

    fn find_by_id(
        &self,
        id: &RecordId,
        include_deleted: bool,
    ) -> RepoResult<Option<Record<RecordId>>> {
        let records = self.records.borrow();
        Ok(records
            .get(id)
            .filter(|record| include_deleted || record.meta.is_active())
            .cloned())
    }

    fn find_by_slug(&self, slug: &str) -> RepoResult<Option<Record<RecordId>>> {
        let records = self.records.borrow();
        Ok(records
            .values()
            .find(|record| record.meta.is_active() && record.meta.slug.as_deref() == Some(slug))
            .cloned())
    }

    fn find_by_ids(&self, ids: &[RecordId]) -> RepoResult<Vec<Record<RecordId>>> {
        let records = self.records.borrow();
        Ok(ids
            .iter()
            .filter_map(|id| records.get(id))
            .filter(|record| record.meta.is_active())
            .cloned()
            .collect())
    }

    fn find(&self, query: &RecordQuery) -> RepoResult<Vec<Record<RecordId>>> {
        let records = self.records.borrow();
        let rows = records
            .values()
            .filter(|record| query.include_deleted || record.meta.is_active())
            .filter(|record| match &query.release {
                Some(release) => record.meta.release.as_deref() == Some(release.as_str()),
                None => true,
            })
            .filter(|record| match &query.keyword {
                Some(keyword) => keyword_matches(record.meta.search_keywords.as_ref(), keyword),
                None => true,
            })
            .skip(query.offset as usize);
        Ok(match query.limit {
            Some(limit) => rows.take(limit as usize).cloned().collect(),
            None => rows.cloned().collect(),
        })
    }

    fn delete(&self, id: &RecordId) -> RepoResult<()> {
        let mut records = self.records.borrow_mut();
        match records.remove(id) {
            Some(_) => Ok(()),
            None => Err(RepoError::not_found(id)),
        }
    }

    fn delete_many(&self, ids: &[RecordId]) -> RepoResult<u64> {
        let mut records = self.records.borrow_mut();
        let mut removed = 0;
        for id in ids {
            if records.remove(id).is_some() {
                removed += 1;
            }
        }
        Ok(removed)
    }

    fn trash(&self, id: &RecordId) -> RepoResult<()> {
        let mut records = self.records.borrow_mut();
        let Some(record) = records.get_mut(id) else {
            return Err(RepoError::not_found(id));
        };
        record.meta.soft_delete();
        Ok(())
    }

    fn trash_many(&self, ids: &[RecordId]) -> RepoResult<u64> {
        let mut records = self.records.borrow_mut();
        let mut trashed = 0;
        for id in ids {
            if let Some(record) = records.get_mut(id) {
                record.meta.soft_delete();
                trashed += 1;
            }
        }
        Ok(trashed)
    }
}

fn keyword_matches(keywords: Option<&SearchKeywords>, keyword: &str) -> bool {
    match keywords {
        Some(SearchKeywords::Text(text)) => text.contains(keyword),
        Some(SearchKeywords::List(list)) => list.iter().any(|entry| entry == keyword),
        Some(SearchKeywords::ByLocale(map)) => {
            map.values().flatten().any(|entry| entry == keyword)
        }
        None => false,
    }
}
