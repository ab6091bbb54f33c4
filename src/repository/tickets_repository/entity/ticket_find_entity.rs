use bson::oid::ObjectId;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct TicketFindEntity {
    pub _id: ObjectId,

    pub uuid: String,
    pub owner: String,
    pub status: String,
}
