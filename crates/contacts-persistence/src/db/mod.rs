use super::Result;
use log::{error, info};
use surrealdb::{
    Surreal,
    engine::any::{Any, connect},
    opt::auth::Root,
};

pub mod contact;

#[derive(Debug, Clone)]
pub struct SurrealDbConfig {
    pub connection_string: String,
    pub namespace: String,
    pub database: String,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl SurrealDbConfig {
    const DEFAULT_NAMESPACE: &'static str = "default";
    const DEFAULT_DATABASE: &'static str = "contacts";

    pub fn new(connection_string: &str) -> Self {
        Self {
            connection_string: connection_string.to_owned(),
            namespace: Self::DEFAULT_NAMESPACE.to_owned(),
            database: Self::DEFAULT_DATABASE.to_owned(),
            username: None,
            password: None,
        }
    }
}

/// Creates the database handle shared by all stores.
///
/// A failed connection is logged, but doesn't fail the startup. Every query on
/// the returned handle fails in that case.
pub async fn get_surreal_db(config: &SurrealDbConfig) -> Surreal<Any> {
    let db: Surreal<Any> = Surreal::init();
    match connect_surreal_db(&db, config).await {
        Ok(()) => info!("Connected to database at {}", config.connection_string),
        Err(e) => error!(
            "Could not connect to database at {}: {e}",
            config.connection_string
        ),
    }
    db
}

async fn connect_surreal_db(db: &Surreal<Any>, config: &SurrealDbConfig) -> Result<()> {
    db.connect(config.connection_string.as_str()).await?;
    if let (Some(username), Some(password)) = (&config.username, &config.password) {
        db.signin(Root {
            username: username.as_str(),
            password: password.as_str(),
        })
        .await?;
    }
    db.use_ns(&config.namespace)
        .use_db(&config.database)
        .await?;
    Ok(())
}

/// Creates a fresh in-memory database, needs the `kv-mem` feature of surrealdb
pub async fn get_memory_db(namespace: &str, database: &str) -> Result<Surreal<Any>> {
    let db = connect("mem://").await?;
    db.use_ns(namespace).use_db(database).await?;
    Ok(db)
}
