use crate::cpf::CpfError;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Cpf(#[from] CpfError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Field-level validation failure.
///
/// `field` names the offending attribute; `message` is the user-facing text
/// the form layer renders next to it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}
