#[cfg(test)]
#[allow(clippy::module_inception)]
pub mod tests {
    use async_trait::async_trait;
    use contacts_core::contact::{Contact, ContactData, ContactUpdate};
    use contacts_persistence::{ContactStoreApi, Result};

    // Need to wrap mocks, because traits are in a different crate
    mockall::mock! {
        pub ContactStoreApiMock {}

        #[async_trait]
        impl ContactStoreApi for ContactStoreApiMock {
            async fn get_all(&self) -> Result<Vec<Contact>>;
            async fn get(&self, id: i64) -> Result<Option<Contact>>;
            async fn search(&self, search_term: &str) -> Result<Vec<Contact>>;
            async fn find_by_name_or_phone(&self, name: &str, phone: &str) -> Result<Vec<Contact>>;
            async fn insert(&self, data: ContactData) -> Result<Contact>;
            async fn update(&self, id: i64, data: ContactUpdate) -> Result<()>;
            async fn set_favorite(&self, id: i64, favorite: bool) -> Result<()>;
            async fn delete(&self, id: i64) -> Result<()>;
        }
    }

    pub fn get_baseline_contact() -> Contact {
        Contact {
            id: 1,
            name: "Ann".to_owned(),
            phone: "555-1".to_owned(),
            email: Some("ann@example.com".to_owned()),
            group: None,
            favorite: false,
        }
    }
}
