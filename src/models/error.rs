#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    #[error("Color scheme preference unavailable")]
    EnvironmentQueryUnavailable,

    #[error("No global window")]
    NoWindow,

    #[error("Window has no document")]
    NoDocument,

    #[error("Document has no body")]
    NoBody,

    #[error("DOM error: {0}")]
    Dom(String),
}
