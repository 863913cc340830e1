//! Error type for dataset loading

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataError {
    /// Dataset file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset file is not a valid JSON array of orders
    #[error("Invalid dataset: {0}")]
    Json(#[from] serde_json::Error),

    /// Dataset parsed but contains no orders. An empty dataset would leave
    /// the filter validator with an empty product universe, so it is
    /// rejected at load time.
    #[error("Dataset is empty: {}", path.display())]
    EmptyDataset { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dataset_display_names_the_file() {
        let err = DataError::EmptyDataset {
            path: PathBuf::from("/tmp/orders.json"),
        };
        assert_eq!(err.to_string(), "Dataset is empty: /tmp/orders.json");
    }
}
