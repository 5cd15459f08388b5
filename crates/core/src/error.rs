//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant except `NotFound` carries a fixed, user-facing message: the
/// back office screens display `Display` output verbatim, so the wording here
/// is part of the contract (including "esta" without the accent).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A requested resource was absent. The collaborator that raised the
    /// error owns the wording; it must be surfaced unchanged.
    #[error("{0}")]
    NotFound(String),

    /// Line mutation attempted on an adjustment that is already processed.
    #[error("Ajuste já esta processado")]
    AlreadyProcessed,

    /// Add attempted for an (adjustment, product) pair that already has a line.
    #[error("Este produto já existe neste ajuste")]
    DuplicateLine,

    /// The persistence gateway failed during a line insert. Detail is
    /// withheld from the caller; the generic support message is shown.
    #[error("Erro ao tentar inserir produto no ajuste, chame o suporte")]
    InsertFailed,

    /// The persistence gateway failed during a line removal.
    #[error("Erro ao tentar remover produto do ajuste, chame o suporte")]
    RemoveFailed,

    /// The persistence gateway failed while saving an adjustment header.
    #[error("Erro ao tentar salvar o ajuste, chame o suporte")]
    SaveFailed,

    /// The persistence gateway failed while deleting an adjustment header.
    #[error("Erro ao tentar remover o ajuste, chame o suporte")]
    DeleteFailed,
}

impl DomainError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
