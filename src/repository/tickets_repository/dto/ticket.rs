#[derive(Debug, Clone)]
pub struct Ticket {
    pub uuid: String,
    pub owner: String,
    pub status: String,
}
