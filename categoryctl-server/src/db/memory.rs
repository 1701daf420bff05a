//! In-memory category store
//!
//! Mirrors the PostgreSQL repository's semantics (sequential ids starting at 1,
//! id-ordered listing, silent no-op update/delete) without a database. Used by
//! the HTTP tests and handy for local experiments.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::store::{CategoryStore, StoreError};
use crate::models::{Category, NewCategory, Pagination};

#[derive(Debug, Default)]
struct Inner {
    rows: BTreeMap<i64, Category>,
    last_id: i64,
    failure: Option<String>,
}

/// Category store kept in a `BTreeMap`
#[derive(Debug, Default)]
pub struct MemoryCategoryStore {
    inner: Mutex<Inner>,
}

impl MemoryCategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with `message` until cleared.
    pub fn fail_with(&self, message: impl Into<String>) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.failure = Some(message.into());
        }
    }

    /// Stop injecting failures.
    pub fn clear_failure(&self) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.failure = None;
        }
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.inner.lock().map(|inner| inner.rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lock the rows, surfacing an injected failure as a backend error.
    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        let inner = self
            .inner
            .lock()
            .map_err(|_| StoreError::Backend("memory store lock poisoned".into()))?;

        if let Some(message) = &inner.failure {
            return Err(StoreError::Backend(message.clone()));
        }

        Ok(inner)
    }
}

#[async_trait]
impl CategoryStore for MemoryCategoryStore {
    async fn list(&self, page: Pagination) -> Result<Vec<Category>, StoreError> {
        let inner = self.lock()?;
        Ok(inner
            .rows
            .values()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Category, StoreError> {
        let inner = self.lock()?;
        inner
            .rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn create(&self, category: &NewCategory) -> Result<i64, StoreError> {
        let mut inner = self.lock()?;
        inner.last_id += 1;
        let id = inner.last_id;
        inner.rows.insert(id, category.clone().with_id(id));
        Ok(id)
    }

    async fn update(
        &self,
        id: i64,
        description: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<Category>, StoreError> {
        let mut inner = self.lock()?;
        Ok(inner.rows.get_mut(&id).map(|row| {
            row.description = description.to_owned();
            row.updated_at = updated_at;
            row.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<u64, StoreError> {
        let mut inner = self.lock()?;
        Ok(u64::from(inner.rows.remove(&id).is_some()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.lock().map(|_| ())
    }
}
