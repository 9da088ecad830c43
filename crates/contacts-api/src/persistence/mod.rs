use crate::Config;
use contacts_persistence::{ContactStoreApi, SurrealContactStore, SurrealDbConfig, get_surreal_db};
use std::sync::Arc;

pub use contacts_persistence::contact;

/// A container for all persistence related dependencies.
#[derive(Clone)]
pub struct DbContext {
    pub contact_store: Arc<dyn ContactStoreApi>,
}

/// Creates a new instance of the DbContext with the given SurrealDB configuration.
///
/// Never fails: if the database can't be reached, the stores are still created
/// and their queries fail per request.
pub async fn get_db_context(conf: &Config) -> DbContext {
    let surreal_db_config = SurrealDbConfig {
        username: conf.surreal_db_username.clone(),
        password: conf.surreal_db_password.clone(),
        namespace: conf.surreal_db_namespace.clone(),
        database: conf.surreal_db_database.clone(),
        ..SurrealDbConfig::new(&conf.surreal_db_connection)
    };
    let db = get_surreal_db(&surreal_db_config).await;

    let contact_store = Arc::new(SurrealContactStore::new(db));

    DbContext { contact_store }
}
