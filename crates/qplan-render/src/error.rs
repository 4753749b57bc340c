pub type Result<T> = std::result::Result<T, Error>;

/// Construction errors raised when the visual tree violates the renderer
/// contract. These are not recovered locally: a malformed tree aborts
/// rendering of the diagram rather than degrading it.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    #[error("element cannot be null")]
    NullElement,

    #[error("element must carry the {expected} class")]
    InvalidElementKind { expected: &'static str },

    #[error("node has no enclosing statement container")]
    MissingStatementAncestor,
}
