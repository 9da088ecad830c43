use contacts_core::contact::{Contact, ContactData, ContactUpdate};

use super::Result;
use async_trait::async_trait;

#[async_trait]
pub trait ContactStoreApi: Send + Sync {
    /// Returns all contacts in id order
    async fn get_all(&self) -> Result<Vec<Contact>>;
    async fn get(&self, id: i64) -> Result<Option<Contact>>;
    /// Returns all contacts whose name, phone or email contains the search term
    async fn search(&self, search_term: &str) -> Result<Vec<Contact>>;
    /// Returns all contacts with the given name or the given phone
    async fn find_by_name_or_phone(&self, name: &str, phone: &str) -> Result<Vec<Contact>>;
    /// Inserts the contact under a newly generated id and returns it
    async fn insert(&self, data: ContactData) -> Result<Contact>;
    /// Replaces all fields of the contact with the given id, if it exists
    async fn update(&self, id: i64, data: ContactUpdate) -> Result<()>;
    async fn set_favorite(&self, id: i64, favorite: bool) -> Result<()>;
    /// Deletes the contact with the given id, if it exists
    async fn delete(&self, id: i64) -> Result<()>;
}
