use smol_str::SmolStr;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures raised by a data source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The count query matched no row under grouped aggregation. The pager
    /// recovers this one locally as a count of zero.
    #[error("count query matched no rows")]
    NoCountRow,
    #[error(transparent)]
    Backend(#[from] BoxError),
}

/// Failures raised by a link generator.
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("no route named `{0}`")]
    UnknownRoute(SmolStr),
    #[error(transparent)]
    Custom(BoxError),
}

#[derive(Debug, Error)]
pub enum Error {
    /// An operation needed a collaborator that was never configured.
    #[error("pager has no {0} configured")]
    Misconfigured(&'static str),
    #[error("no pager registered for kind `{0}`")]
    UnknownKind(SmolStr),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Link(#[from] LinkError),
}

impl SourceError {
    pub fn backend<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Backend(error.into())
    }
}

impl LinkError {
    pub fn custom<E>(error: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Custom(error.into())
    }
}
