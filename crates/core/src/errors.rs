use thiserror::Error;

use crate::domain::product::ProductId;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("no catalog product with id {0}")]
    UnknownProduct(ProductId),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("markup rendering failed: {0}")]
    Render(String),
}

impl ApplicationError {
    /// Stable class name used in machine-readable command output.
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::Domain(DomainError::UnknownProduct(_)) => "unknown_product",
            Self::Render(_) => "render",
        }
    }
}

impl From<tera::Error> for ApplicationError {
    fn from(error: tera::Error) -> Self {
        // tera nests the useful detail in the source chain
        let mut message = error.to_string();
        let mut source = std::error::Error::source(&error);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = std::error::Error::source(cause);
        }
        Self::Render(message)
    }
}
