pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid plan XML: {0}")]
    PlanParse(#[from] roxmltree::Error),

    #[error("Expected a {expected} element, found <{found}>")]
    WrongElementKind {
        expected: &'static str,
        found: String,
    },
}
