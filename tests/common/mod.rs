use std::sync::Once;

static INIT_ENV_ONCE: Once = Once::new();

pub fn init_env() {
    INIT_ENV_ONCE.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

pub fn address() -> String {
    std::env::var("TICKET_DESK_BIND_ADDRESS").unwrap()
}

pub fn create_ticket_url() -> String {
    format!("http://{}/api/v1/ticket/create", address())
}
