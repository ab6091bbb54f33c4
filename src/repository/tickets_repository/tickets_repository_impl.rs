use super::{entity::TicketInsertEntity, Ticket, TicketsRepository};
use crate::repository::{self, Error};
use axum::async_trait;
use bson::{doc, Document};
use mongodb::{
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Database, IndexModel,
};
use std::time::Duration;

const TICKETS: &str = "tickets";
const INDEX_NAME_UNIQUE_TICKET_UUID: &str = "unique_ticket_uuid";

pub struct TicketsRepositoryImpl {
    database: Database,
    insert_timeout: Duration,
}

impl TicketsRepositoryImpl {
    pub async fn new(
        database: Database,
        insert_timeout: Duration,
    ) -> Result<Self, mongodb::error::Error> {
        tracing::debug!(collection = TICKETS, "creating collection");
        database.create_collection(TICKETS).await?;

        let collection = database.collection::<Document>(TICKETS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_UNIQUE_TICKET_UUID.to_string()) {
            collection
                .create_index(
                    IndexModel::builder()
                        .keys(doc! {
                            "uuid": 1,
                        })
                        .options(
                            IndexOptions::builder()
                                .name(INDEX_NAME_UNIQUE_TICKET_UUID.to_string())
                                .unique(true)
                                .build(),
                        )
                        .build(),
                )
                .await?;
            tracing::debug!(
                collection = TICKETS,
                index = INDEX_NAME_UNIQUE_TICKET_UUID,
                "created index"
            );
        }

        Ok(Self {
            database,
            insert_timeout,
        })
    }
}

#[async_trait]
impl TicketsRepository for TicketsRepositoryImpl {
    async fn insert(&self, ticket: &Ticket) -> Result<(), repository::Error> {
        let insert_entity = TicketInsertEntity {
            uuid: &ticket.uuid,
            owner: &ticket.owner,
            status: &ticket.status,
        };

        let collection = self.database.collection::<TicketInsertEntity>(TICKETS);
        let insert = collection.insert_one(insert_entity);

        // Dropping the timed out future cancels the in-flight driver call
        tokio::time::timeout(self.insert_timeout, insert)
            .await
            .map_err(|_| Error::Timeout(self.insert_timeout))?
            .map_err(|err| {
                let ErrorKind::Write(ref write_failure) = *err.kind else {
                    return Error::Mongo(err);
                };

                let WriteFailure::WriteError(write_error) = write_failure else {
                    return Error::Mongo(err);
                };

                const DUPLICATE_KEY_CODE: i32 = 11000;
                match write_error.code == DUPLICATE_KEY_CODE {
                    true => Error::InsertUniqueViolation,
                    false => Error::Mongo(err),
                }
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::repository::{
        test::{create_test_database, destroy_test_database},
        tickets_repository::entity::TicketFindEntity,
    };
    use std::sync::Once;
    use uuid::Uuid;

    static BEFORE_ALL: Once = Once::new();

    fn init_env_variables() {
        let _ = dotenvy::dotenv();
    }

    const INSERT_TIMEOUT: Duration = Duration::from_secs(15);

    #[tokio::test]
    async fn insert_values_unchanged() {
        BEFORE_ALL.call_once(init_env_variables);

        let db = create_test_database().await;
        let repository = TicketsRepositoryImpl::new(db.clone(), INSERT_TIMEOUT)
            .await
            .unwrap();

        let ticket = Ticket {
            uuid: Uuid::new_v4().to_string(),
            owner: "alice".to_string(),
            status: "open".to_string(),
        };

        repository.insert(&ticket).await.unwrap();

        let entity = db
            .collection::<TicketFindEntity>(TICKETS)
            .find_one(doc! { "uuid": &ticket.uuid })
            .await
            .unwrap()
            .unwrap();

        assert_eq!(entity.uuid, ticket.uuid);
        assert_eq!(entity.owner, ticket.owner);
        assert_eq!(entity.status, ticket.status);

        destroy_test_database(db).await;
    }

    #[tokio::test]
    async fn insert_unique_uuid() {
        BEFORE_ALL.call_once(init_env_variables);

        let db = create_test_database().await;
        let repository = TicketsRepositoryImpl::new(db.clone(), INSERT_TIMEOUT)
            .await
            .unwrap();

        let uuid = Uuid::new_v4().to_string();

        repository
            .insert(&Ticket {
                uuid: uuid.clone(),
                owner: "alice".to_string(),
                status: "open".to_string(),
            })
            .await
            .unwrap();

        let err = repository
            .insert(&Ticket {
                uuid,
                owner: "bob".to_string(),
                status: "closed".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InsertUniqueViolation));

        destroy_test_database(db).await;
    }

    #[tokio::test]
    async fn insert_unique_uuid_no_second_document() {
        BEFORE_ALL.call_once(init_env_variables);

        let db = create_test_database().await;
        let repository = TicketsRepositoryImpl::new(db.clone(), INSERT_TIMEOUT)
            .await
            .unwrap();

        let uuid = Uuid::new_v4().to_string();

        repository
            .insert(&Ticket {
                uuid: uuid.clone(),
                owner: "alice".to_string(),
                status: "open".to_string(),
            })
            .await
            .unwrap();
        let _ = repository
            .insert(&Ticket {
                uuid: uuid.clone(),
                owner: "bob".to_string(),
                status: "closed".to_string(),
            })
            .await;

        let count = db
            .collection::<Document>(TICKETS)
            .count_documents(doc! { "uuid": &uuid })
            .await
            .unwrap();

        assert_eq!(count, 1);

        let entity = db
            .collection::<TicketFindEntity>(TICKETS)
            .find_one(doc! { "uuid": &uuid })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(entity.owner, "alice");

        destroy_test_database(db).await;
    }

    #[tokio::test]
    async fn insert_timeout_elapsed() {
        BEFORE_ALL.call_once(init_env_variables);

        let db = create_test_database().await;
        let repository = TicketsRepositoryImpl::new(db.clone(), Duration::from_nanos(1))
            .await
            .unwrap();

        let err = repository
            .insert(&Ticket {
                uuid: Uuid::new_v4().to_string(),
                owner: "alice".to_string(),
                status: "open".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, Error::Timeout(_)));

        destroy_test_database(db).await;
    }
}
