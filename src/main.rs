mod application;
mod dto;
mod error;
mod repository;
mod routing;
mod service;

use application::ApplicationEnv;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    #[cfg(debug_assertions)]
    {
        // Ignore error because .env file is not required
        // as long as env variables are set.
        let _ = dotenvy::dotenv();
    }

    let env = ApplicationEnv::parse()?;

    application::setup_tracing(&env)?;

    let (application_state, application_state_to_close) = application::create_state(&env).await?;
    let application_middleware = application::create_middleware(&env);
    let application = application::create_application(application_state, application_middleware);

    let listener = tokio::net::TcpListener::bind(env.bind_address).await?;
    tracing::info!(address = %env.bind_address, "listening");

    axum::serve(listener, application)
        .with_graceful_shutdown(application::shutdown_signal())
        .await?;

    application::close(application_state_to_close).await;

    Ok(())
}
