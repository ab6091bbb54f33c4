use super::Ticket;
use crate::repository;
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsRepository: Send + Sync {
    ///
    /// Inserts new ticket.
    /// Insert succeeds only when no stored ticket shares the uuid.
    ///
    /// ### Errors
    /// - [repository::Error::InsertUniqueViolation]
    /// when ticket with the same uuid already exists
    /// - [repository::Error::Timeout]
    /// when the insert does not complete within the configured budget
    ///
    async fn insert(&self, ticket: &Ticket) -> Result<(), repository::Error>;
}
