use super::super::{Error, Result};
use crate::constants::{
    DB_FAVORITE, DB_ID, DB_NAME, DB_PHONE, DB_SEARCH_TERM, DB_SEQUENCE, DB_TABLE,
};
use crate::contact::ContactStoreApi;
use async_trait::async_trait;
use contacts_core::contact::{Contact, ContactData, ContactUpdate};
use log::debug;
use serde::{Deserialize, Serialize};
use surrealdb::{
    Surreal,
    engine::any::Any,
    sql::{Id, Thing},
};

#[derive(Clone)]
pub struct SurrealContactStore {
    db: Surreal<Any>,
}

impl SurrealContactStore {
    const TABLE: &'static str = "contacts";
    const SEQUENCE_TABLE: &'static str = "sequence";

    pub fn new(db: Surreal<Any>) -> Self {
        Self { db }
    }

    /// Bumps the id sequence of the contacts table. Ids are never handed out twice,
    /// even if the insert that requested one fails.
    async fn next_id(&self) -> Result<i64> {
        let sequence: Option<SequenceDb> = self
            .db
            .query("UPSERT ONLY type::thing($table, $sequence) SET last_id += 1")
            .bind((DB_TABLE, Self::SEQUENCE_TABLE))
            .bind((DB_SEQUENCE, Self::TABLE))
            .await?
            .take(0)?;
        match sequence {
            Some(s) => Ok(s.last_id),
            None => Err(Error::InsertFailed(format!(
                "no id generated for {}",
                Self::TABLE
            ))),
        }
    }
}

#[async_trait]
impl ContactStoreApi for SurrealContactStore {
    async fn get_all(&self) -> Result<Vec<Contact>> {
        let all: Vec<ContactDb> = self.db.select(Self::TABLE).await?;
        all.into_iter().map(|c| c.try_into()).collect()
    }

    async fn get(&self, id: i64) -> Result<Option<Contact>> {
        let result: Option<ContactDb> = self.db.select((Self::TABLE, id)).await?;
        result.map(|c| c.try_into()).transpose()
    }

    async fn search(&self, search_term: &str) -> Result<Vec<Contact>> {
        let results: Vec<ContactDb> = self
            .db
            .query(
                "SELECT * FROM type::table($table) WHERE name CONTAINS $search_term \
                 OR phone CONTAINS $search_term OR email CONTAINS $search_term",
            )
            .bind((DB_TABLE, Self::TABLE))
            .bind((DB_SEARCH_TERM, search_term.to_owned()))
            .await?
            .take(0)?;
        results.into_iter().map(|c| c.try_into()).collect()
    }

    async fn find_by_name_or_phone(&self, name: &str, phone: &str) -> Result<Vec<Contact>> {
        let results: Vec<ContactDb> = self
            .db
            .query("SELECT * FROM type::table($table) WHERE name = $name OR phone = $phone")
            .bind((DB_TABLE, Self::TABLE))
            .bind((DB_NAME, name.to_owned()))
            .bind((DB_PHONE, phone.to_owned()))
            .await?
            .take(0)?;
        results.into_iter().map(|c| c.try_into()).collect()
    }

    async fn insert(&self, data: ContactData) -> Result<Contact> {
        let id = self.next_id().await?;
        debug!("inserting contact {id}");
        let entity: ContactDb = data.clone().into();
        let created: Option<ContactDb> = self
            .db
            .create((Self::TABLE, id))
            .content(entity)
            .await?;
        match created {
            Some(_) => Ok(data.into_contact(id)),
            None => Err(Error::InsertFailed(format!("contact {id}"))),
        }
    }

    async fn update(&self, id: i64, data: ContactUpdate) -> Result<()> {
        // like an UPDATE ... WHERE that matches no row, even for invalid values
        let existing: Option<ContactDb> = self.db.select((Self::TABLE, id)).await?;
        if existing.is_none() {
            debug!("contact {id} doesn't exist, nothing to update");
            return Ok(());
        }
        let data = data
            .into_data()
            .map_err(|field| Error::NotNull(field.to_owned()))?;
        debug!("updating contact {id}");
        let entity: ContactDb = data.into();
        let _: Option<ContactDb> = self
            .db
            .update((Self::TABLE, id))
            .content(entity)
            .await?;
        Ok(())
    }

    async fn set_favorite(&self, id: i64, favorite: bool) -> Result<()> {
        debug!("setting favorite of contact {id} to {favorite}");
        let _: Vec<ContactDb> = self
            .db
            .query("UPDATE type::thing($table, $id) SET favorite = $favorite")
            .bind((DB_TABLE, Self::TABLE))
            .bind((DB_ID, id))
            .bind((DB_FAVORITE, favorite))
            .await?
            .take(0)?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        debug!("deleting contact {id}");
        let _: Option<ContactDb> = self.db.delete((Self::TABLE, id)).await?;
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SequenceDb {
    last_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactDb {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub group: Option<String>,
    #[serde(default)]
    pub favorite: bool,
}

impl TryFrom<ContactDb> for Contact {
    type Error = Error;

    fn try_from(value: ContactDb) -> Result<Self> {
        let id = match value.id {
            Some(Thing {
                id: Id::Number(id), ..
            }) => id,
            Some(other) => return Err(Error::InvalidRecordId(other.to_string())),
            None => return Err(Error::InvalidRecordId(String::from("none"))),
        };
        Ok(Self {
            id,
            name: value.name,
            phone: value.phone,
            email: value.email,
            group: value.group,
            favorite: value.favorite,
        })
    }
}

impl From<ContactData> for ContactDb {
    fn from(value: ContactData) -> Self {
        Self {
            id: None,
            name: value.name,
            phone: value.phone,
            email: value.email,
            group: value.group,
            favorite: value.favorite,
        }
    }
}
