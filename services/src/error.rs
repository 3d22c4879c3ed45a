use sea_orm::DbErr;
use thiserror::Error;

/// Error taxonomy for the business-rule services.
///
/// Every precondition is checked before any mutation in the request's
/// transaction scope, so a rejected operation leaves no partial state.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("{0}")]
    InvalidState(String),

    #[error("database error: {0}")]
    Db(#[from] DbErr),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: i64) -> Self {
        ServiceError::NotFound { entity, id }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        ServiceError::InvalidState(message.into())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
