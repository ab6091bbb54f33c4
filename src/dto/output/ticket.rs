use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Ticket {
    pub uuid: String,
    pub owner: String,
    pub status: String,
}
