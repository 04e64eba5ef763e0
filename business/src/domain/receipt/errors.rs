#[derive(Debug, thiserror::Error)]
pub enum ReceiptError {
    #[error("receipt.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
