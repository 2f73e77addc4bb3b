use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("visit counter {0} not found")]
    NotFound(i32),

    /// Anything the underlying database or pool reports.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}
