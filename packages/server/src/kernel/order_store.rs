//! Flat-file store for the orders collection.
//!
//! The collection lives in one pretty-printed JSON array. Whole-collection
//! writes go through a sibling temp file and a rename so readers never see a
//! half-written file. `update_one` re-reads and rewrites under an async lock,
//! so concurrent summaries inside one process cannot drop each other's
//! update. Writers in other processes (the collector) are not coordinated.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::common::OrderRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Orders file not found")]
    FileNotFound,

    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("I/O error on orders file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid orders file: {0}")]
    Json(#[from] serde_json::Error),
}

pub struct OrderStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl OrderStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File contents as JSON, `None` if the file does not exist.
    pub async fn read_raw(&self) -> Result<Option<Value>, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Every record, `None` if the file does not exist.
    pub async fn load(&self) -> Result<Option<Vec<OrderRecord>>, StoreError> {
        match self.read_raw().await? {
            Some(raw) => Ok(Some(serde_json::from_value(raw)?)),
            None => Ok(None),
        }
    }

    /// First record whose `data.document_number` matches.
    pub async fn get(&self, document_number: &str) -> Result<Option<OrderRecord>, StoreError> {
        let entries = self.entries().await?;
        match position_of(&entries, document_number) {
            Some(idx) => Ok(Some(serde_json::from_value(entries[idx].clone())?)),
            None => Ok(None),
        }
    }

    /// Replace the whole collection.
    pub async fn put_all(&self, orders: &[OrderRecord]) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let body = serde_json::to_vec_pretty(orders)?;
        self.write_atomic(&body).await
    }

    /// Apply `mutator` to the first matching record and persist the collection.
    ///
    /// Other entries are written back exactly as they were read.
    pub async fn update_one<F>(
        &self,
        document_number: &str,
        mutator: F,
    ) -> Result<OrderRecord, StoreError>
    where
        F: FnOnce(&mut OrderRecord),
    {
        let _guard = self.write_lock.lock().await;

        let mut entries = self.entries().await?;
        let idx = position_of(&entries, document_number)
            .ok_or_else(|| StoreError::OrderNotFound(document_number.to_string()))?;

        let mut record: OrderRecord = serde_json::from_value(entries[idx].clone())?;
        mutator(&mut record);
        entries[idx] = serde_json::to_value(&record)?;

        let body = serde_json::to_vec_pretty(&entries)?;
        self.write_atomic(&body).await?;

        tracing::debug!(document_number, path = %self.path.display(), "Updated order record");
        Ok(record)
    }

    async fn entries(&self) -> Result<Vec<Value>, StoreError> {
        let raw = self.read_raw().await?.ok_or(StoreError::FileNotFound)?;
        Ok(serde_json::from_value(raw)?)
    }

    async fn write_atomic(&self, body: &[u8]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        tokio::fs::write(&tmp, body).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

fn position_of(entries: &[Value], document_number: &str) -> Option<usize> {
    entries.iter().position(|entry| {
        entry
            .pointer("/data/document_number")
            .and_then(Value::as_str)
            == Some(document_number)
    })
}
