use crate::{
    dto::{input, output},
    error::Error,
};
use axum::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TicketsService: Send + Sync {
    ///
    /// Creates ticket with a server generated uuid.
    ///
    /// ### Returns
    /// [output::Ticket] with the generated uuid
    ///
    /// ### Errors
    /// - [Error::TicketAlreadyExists] when a ticket
    ///    with the same uuid had already been saved
    ///
    async fn create_ticket(&self, ticket: input::Ticket) -> Result<output::Ticket, Error>;
}
