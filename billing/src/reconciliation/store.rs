//! 付款确认存储
//!
//! One writer path (`confirm_payment`), many readers. The current
//! [`ConfirmationSet`] is replaced wholesale on every write; readers get a
//! cheap snapshot and never observe a half-applied change.

use super::confirmations::ConfirmationSet;
use parking_lot::RwLock;
use shared::billing::{BillingMonth, ConfirmationKey, PaymentConfirmation};
use shared::error::{AppError, AppResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub trait ConfirmationStore: Send + Sync {
    /// Current confirmations
    fn snapshot(&self) -> ConfirmationSet;

    /// Validate, apply and persist a confirmation; returns the new snapshot.
    ///
    /// On error the stored state is unchanged.
    fn confirm_payment(
        &self,
        month: BillingMonth,
        supplier_name: &str,
        paid_at: &str,
        transaction_number: &str,
    ) -> AppResult<ConfirmationSet>;
}

/// Process-local store
#[derive(Debug, Default)]
pub struct InMemoryConfirmationStore {
    current: RwLock<ConfirmationSet>,
}

impl InMemoryConfirmationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_confirmations(confirmations: ConfirmationSet) -> Self {
        Self {
            current: RwLock::new(confirmations),
        }
    }
}

impl ConfirmationStore for InMemoryConfirmationStore {
    fn snapshot(&self) -> ConfirmationSet {
        self.current.read().clone()
    }

    fn confirm_payment(
        &self,
        month: BillingMonth,
        supplier_name: &str,
        paid_at: &str,
        transaction_number: &str,
    ) -> AppResult<ConfirmationSet> {
        let mut current = self.current.write();
        let next = current.confirm_payment(month, supplier_name, paid_at, transaction_number)?;
        *current = next.clone();
        Ok(next)
    }
}

/// JSON file store, keyed by `"{month}-{supplier}"`
///
/// Writes go to a sibling temp file first and are renamed into place.
#[derive(Debug)]
pub struct JsonFileConfirmationStore {
    path: PathBuf,
    current: RwLock<ConfirmationSet>,
}

impl JsonFileConfirmationStore {
    /// Open the store; a missing file means no confirmations yet
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let confirmations = if path.exists() {
            load_file(&path)?
        } else {
            tracing::info!(path = %path.display(), "Confirmation file not found, starting empty");
            ConfirmationSet::new()
        };
        Ok(Self {
            path,
            current: RwLock::new(confirmations),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, confirmations: &ConfirmationSet) -> AppResult<()> {
        let json = serde_json::to_string_pretty(confirmations.entries())
            .map_err(|e| AppError::internal(format!("Failed to encode confirmations: {e}")))?;

        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|e| io_error(&tmp, e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| io_error(&self.path, e))?;
        Ok(())
    }
}

impl ConfirmationStore for JsonFileConfirmationStore {
    fn snapshot(&self) -> ConfirmationSet {
        self.current.read().clone()
    }

    fn confirm_payment(
        &self,
        month: BillingMonth,
        supplier_name: &str,
        paid_at: &str,
        transaction_number: &str,
    ) -> AppResult<ConfirmationSet> {
        let mut current = self.current.write();
        let next = current.confirm_payment(month, supplier_name, paid_at, transaction_number)?;
        if !next.same_snapshot(&current) {
            self.persist(&next)?;
        }
        *current = next.clone();
        Ok(next)
    }
}

fn load_file(path: &Path) -> AppResult<ConfirmationSet> {
    let content = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;
    if content.trim().is_empty() {
        return Ok(ConfirmationSet::new());
    }
    let entries: BTreeMap<ConfirmationKey, PaymentConfirmation> = serde_json::from_str(&content)
        .map_err(|e| {
            AppError::storage_corrupted(format!(
                "Invalid confirmation file {}: {}",
                path.display(),
                e
            ))
        })?;
    tracing::info!(path = %path.display(), count = entries.len(), "Confirmations loaded");
    Ok(ConfirmationSet::from(entries))
}

fn io_error(path: &Path, e: std::io::Error) -> AppError {
    AppError::storage(format!("{}: {}", path.display(), e))
        .with_detail("path", path.display().to_string())
}
