use super::{Error, Result};
use crate::persistence::contact::ContactStoreApi;
use async_trait::async_trait;
use contacts_core::contact::{Contact, ContactData, ContactUpdate, DuplicateCheck};
use log::info;
use std::sync::Arc;

#[async_trait]
pub trait ContactServiceApi: Send + Sync {
    /// Returns all contacts
    async fn get_contacts(&self) -> Result<Vec<Contact>>;

    /// Returns the contact with the given id. A missing contact is not an error.
    async fn get_contact(&self, id: i64) -> Result<Option<Contact>>;

    /// Returns the contacts whose name, phone or email contains the keyword.
    /// An empty keyword returns all contacts.
    async fn search(&self, keyword: &str) -> Result<Vec<Contact>>;

    /// Checks if there is a contact with the same name, or with the same phone
    async fn check_duplicate(
        &self,
        name: Option<String>,
        phone: Option<String>,
    ) -> Result<DuplicateCheck>;

    /// Adds a new contact. Doesn't check for duplicates.
    async fn add_contact(
        &self,
        name: Option<String>,
        phone: Option<String>,
        email: Option<String>,
        group: Option<String>,
        favorite: Option<bool>,
    ) -> Result<Contact>;

    /// Replaces all fields of the contact with the given id
    async fn update_contact(&self, id: i64, data: ContactUpdate) -> Result<()>;

    /// Sets the favorite flag of the contact with the given id
    async fn set_favorite(&self, id: i64, favorite: bool) -> Result<()>;

    /// Deletes the contact with the given id, if it exists
    async fn delete(&self, id: i64) -> Result<()>;
}

/// The contact service is responsible for managing the contacts
#[derive(Clone)]
pub struct ContactService {
    store: Arc<dyn ContactStoreApi>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContactStoreApi>) -> Self {
        Self { store }
    }
}

/// Returns the value if it's present and non-empty
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[async_trait]
impl ContactServiceApi for ContactService {
    async fn get_contacts(&self) -> Result<Vec<Contact>> {
        let contacts = self.store.get_all().await?;
        Ok(contacts)
    }

    async fn get_contact(&self, id: i64) -> Result<Option<Contact>> {
        let contact = self.store.get(id).await?;
        Ok(contact)
    }

    async fn search(&self, keyword: &str) -> Result<Vec<Contact>> {
        let contacts = self.store.search(keyword).await?;
        Ok(contacts)
    }

    async fn check_duplicate(
        &self,
        name: Option<String>,
        phone: Option<String>,
    ) -> Result<DuplicateCheck> {
        let (Some(name), Some(phone)) = (non_empty(name), non_empty(phone)) else {
            return Err(Error::Validation(String::from(
                "name and phone are required and have to be strings",
            )));
        };
        let matches = self.store.find_by_name_or_phone(&name, &phone).await?;
        Ok(DuplicateCheck::from_matches(matches))
    }

    async fn add_contact(
        &self,
        name: Option<String>,
        phone: Option<String>,
        email: Option<String>,
        group: Option<String>,
        favorite: Option<bool>,
    ) -> Result<Contact> {
        let (Some(name), Some(phone)) = (non_empty(name), non_empty(phone)) else {
            return Err(Error::Validation(String::from(
                "name and phone are required",
            )));
        };
        let contact = self
            .store
            .insert(ContactData {
                name,
                phone,
                email,
                group,
                favorite: favorite.unwrap_or_default(),
            })
            .await?;
        info!("Added contact {}", contact.id);
        Ok(contact)
    }

    async fn update_contact(&self, id: i64, data: ContactUpdate) -> Result<()> {
        self.store.update(id, data).await?;
        Ok(())
    }

    async fn set_favorite(&self, id: i64, favorite: bool) -> Result<()> {
        self.store.set_favorite(id, favorite).await?;
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.store.delete(id).await?;
        Ok(())
    }
}
