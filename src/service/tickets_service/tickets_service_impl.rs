use super::TicketsService;
use crate::{
    dto::{input, output},
    error::Error,
    repository::{self, Ticket, TicketsRepository},
};
use axum::async_trait;
use std::sync::Arc;
use uuid::Uuid;

pub struct TicketsServiceImpl {
    repository: Arc<dyn TicketsRepository>,
}

impl TicketsServiceImpl {
    pub fn new(repository: Arc<dyn TicketsRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl TicketsService for TicketsServiceImpl {
    async fn create_ticket(&self, ticket: input::Ticket) -> Result<output::Ticket, Error> {
        tracing::info!("creating ticket");

        let ticket = Ticket {
            uuid: Uuid::new_v4().to_string(),
            owner: ticket.owner,
            status: ticket.status,
        };

        self.repository
            .insert(&ticket)
            .await
            .map_err(|err| match err {
                repository::Error::InsertUniqueViolation => Error::TicketAlreadyExists,
                err => Error::Database(err),
            })?;
        tracing::info!(uuid = %ticket.uuid, "created ticket");

        Ok(output::Ticket {
            uuid: ticket.uuid,
            owner: ticket.owner,
            status: ticket.status,
        })
    }
}
