use crate::repository;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("ticket json malformed: {0}")]
    TicketMalformed(String),

    #[error("ticket already exists")]
    TicketAlreadyExists,

    #[error("database error: {0}")]
    Database(#[from] repository::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::warn!(err = %self);

        match self {
            // Malformed input is part of the 500 contract, not 400
            Error::TicketMalformed(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
            Error::TicketAlreadyExists => StatusCode::CONFLICT.into_response(),
            Error::Database(_) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}
