//! 订单来源
//!
//! The billing engine never fetches orders itself; it is handed an
//! [`OrderSource`]. The booking backend, a JSON export or a plain `Vec`
//! all work.

use shared::billing::OrderRecord;
use shared::error::{AppError, AppResult};
use std::path::{Path, PathBuf};

/// Supplies the orders to bill, already scoped to the current operator
pub trait OrderSource {
    fn load_orders(&self) -> AppResult<Vec<OrderRecord>>;
}

impl OrderSource for Vec<OrderRecord> {
    fn load_orders(&self) -> AppResult<Vec<OrderRecord>> {
        Ok(self.clone())
    }
}

/// Orders from a JSON array file (camelCase fields)
#[derive(Debug, Clone)]
pub struct JsonFileOrderSource {
    path: PathBuf,
}

impl JsonFileOrderSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OrderSource for JsonFileOrderSource {
    fn load_orders(&self) -> AppResult<Vec<OrderRecord>> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            AppError::storage(format!("Failed to read {}: {}", self.path.display(), e))
                .with_detail("path", self.path.display().to_string())
        })?;
        let orders: Vec<OrderRecord> = serde_json::from_str(&content).map_err(|e| {
            AppError::storage_corrupted(format!(
                "Invalid order file {}: {}",
                self.path.display(),
                e
            ))
        })?;
        tracing::info!(path = %self.path.display(), count = orders.len(), "Orders loaded");
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"orderId":"A","checkOutDate":"2025-01-15","supplierAmount":1200.5,"supplierName":"道旅"}}]"#
        )
        .unwrap();

        let orders = JsonFileOrderSource::new(file.path()).load_orders().unwrap();
        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].supplier_name, "道旅");
    }

    #[test]
    fn test_missing_file() {
        let err = JsonFileOrderSource::new("/nonexistent/orders.json")
            .load_orders()
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageFailed);
    }

    #[test]
    fn test_corrupted_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let err = JsonFileOrderSource::new(file.path()).load_orders().unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageCorrupted);
    }
}
