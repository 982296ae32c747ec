pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Tree(#[from] lingtree_core::Error),

    #[error("invalid layout config: {message}")]
    InvalidConfig { message: String },

    #[error("layout config JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
