use crate::constants::DEFAULT_BASE_PATH;
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    #[arg(default_value_t = 3000, long, env = "HTTP_PORT")]
    pub http_port: u16,
    #[arg(default_value_t = String::from("127.0.0.1"), long, env = "HTTP_ADDRESS")]
    pub http_address: String,
    /// Path all contact routes are mounted under
    #[arg(default_value_t = String::from(DEFAULT_BASE_PATH), long, env = "BASE_PATH")]
    pub base_path: String,
    #[arg(default_value_t = String::from("ws://localhost:8800"), long, env = "SURREAL_DB_CONNECTION")]
    pub surreal_db_connection: String,
    #[arg(default_value_t = String::from("default"), long, env = "SURREAL_DB_NAMESPACE")]
    pub surreal_db_namespace: String,
    #[arg(default_value_t = String::from("contacts"), long, env = "SURREAL_DB_DATABASE")]
    pub surreal_db_database: String,
    #[arg(long, env = "SURREAL_DB_USERNAME")]
    pub surreal_db_username: Option<String>,
    #[arg(long, env = "SURREAL_DB_PASSWORD")]
    pub surreal_db_password: Option<String>,
}

impl Config {
    pub fn http_listen_url(&self) -> String {
        format!("http://{}:{}", self.http_address, self.http_port)
    }

    pub fn api_config(&self) -> contacts_api::Config {
        contacts_api::Config {
            surreal_db_connection: self.surreal_db_connection.clone(),
            surreal_db_namespace: self.surreal_db_namespace.clone(),
            surreal_db_database: self.surreal_db_database.clone(),
            surreal_db_username: self.surreal_db_username.clone(),
            surreal_db_password: self.surreal_db_password.clone(),
        }
    }
}
