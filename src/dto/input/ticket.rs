use serde::Deserialize;

///
/// Any `uuid` sent by the client is ignored.
/// The server always generates its own.
///
#[derive(Debug, Deserialize)]
pub struct Ticket {
    pub owner: String,
    pub status: String,
}
