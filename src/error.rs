use crate::address::AddressError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    AddressError(#[from] AddressError),

    #[error("Unknown address form `{0}` (expected `standard` or `alternate`)")]
    InvalidForm(String),
}
