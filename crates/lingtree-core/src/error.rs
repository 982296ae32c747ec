pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("duplicate node id: {id}")]
    DuplicateId { id: String },

    #[error("node {id} references a missing parent: {parent}")]
    MissingParent { id: String, parent: String },

    #[error("tree has more than one root: {first}, {second}")]
    MultipleRoots { first: String, second: String },

    #[error("tree has no root node")]
    NoRoot,

    #[error("node {id} is not reachable from the root (parent links form a cycle)")]
    Cycle { id: String },

    #[error("unsupported language code: {code}")]
    UnknownLanguage { code: String },

    #[error("tree data JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
