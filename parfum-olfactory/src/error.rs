//! Erros específicos do módulo olfativo
//!
//! O classificador é total e nunca falha; estes erros pertencem à validação
//! feita por quem chama (cadastro de produto) e à leitura de catálogos.

use thiserror::Error;

use crate::types::Tier;

pub type OlfactoryResult<T> = Result<T, OlfactoryError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OlfactoryError {
    #[error("Fragrance has no notes: at least one top, heart or base note is required")]
    EmptyComposition,

    #[error("Unknown {tier} note: {id}")]
    UnknownNote { tier: Tier, id: String },

    #[error("Unknown tier: {0}")]
    UnknownTier(String),

    #[error("Unknown olfactory family: {0}")]
    UnknownFamily(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for OlfactoryError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            OlfactoryError::Io(err.to_string())
        } else {
            OlfactoryError::InvalidCatalog(err.to_string())
        }
    }
}
