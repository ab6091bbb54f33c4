use serde::Serialize;

#[derive(Serialize)]
pub struct TicketInsertEntity<'a> {
    pub uuid: &'a str,
    pub owner: &'a str,
    pub status: &'a str,
}
