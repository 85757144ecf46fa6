use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error")]
    Database(#[from] redb::DatabaseError),

    #[error("transaction error")]
    Transaction(#[from] redb::TransactionError),

    #[error("commit error")]
    Commit(#[from] redb::CommitError),

    #[error("storage error")]
    Storage(#[from] redb::StorageError),

    #[error("table error")]
    Table(#[from] redb::TableError),

    #[error("durability error")]
    Durability(#[from] redb::SetDurabilityError),

    #[error("row encoding failed")]
    Serialization(#[from] bincode::Error),

    #[error("uniqueness constraint violated: {0}")]
    DuplicateKey(&'static str),

    #[error("store is read-only")]
    ReadOnly,
}

impl StoreError {
    /// Whether this error is the expected outcome of losing an insert race
    /// rather than a store fault.
    pub fn is_duplicate(&self) -> bool {
        matches!(self, StoreError::DuplicateKey(_))
    }
}
