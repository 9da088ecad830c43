mod persistence;
pub mod service;
#[cfg(test)]
mod tests;

pub use contacts_core::contact;
pub use persistence::DbContext;
pub use persistence::get_db_context;

#[derive(Debug, Clone)]
pub struct Config {
    pub surreal_db_connection: String,
    pub surreal_db_namespace: String,
    pub surreal_db_database: String,
    pub surreal_db_username: Option<String>,
    pub surreal_db_password: Option<String>,
}
