mod ticket_find_entity;
mod ticket_insert_entity;

pub use ticket_find_entity::TicketFindEntity;
pub use ticket_insert_entity::TicketInsertEntity;
