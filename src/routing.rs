use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    dto::{input, output},
    error::Error,
    service::tickets_service::TicketsService,
};
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use std::sync::Arc;

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .route("/api/v1/ticket/create", post(create_ticket))
        .route_layer(application_middleware.body_limit.clone())
}

async fn create_ticket(
    State(tickets_service): State<Arc<dyn TicketsService>>,
    body: String,
) -> Result<(StatusCode, Json<output::Ticket>), Error> {
    // Body is deserialized by hand so that malformed json maps to the
    // service's error contract instead of the Json extractor's rejection.
    let ticket = serde_json::from_str::<input::Ticket>(&body)
        .map_err(|err| Error::TicketMalformed(format!("error parsing ticket json: {err}")))?;

    let ticket = tickets_service.create_ticket(ticket).await?;

    Ok((StatusCode::CREATED, Json(ticket)))
}
