// DB constants
pub const DB_TABLE: &str = "table";

pub const DB_ID: &str = "id";
pub const DB_NAME: &str = "name";
pub const DB_PHONE: &str = "phone";
pub const DB_FAVORITE: &str = "favorite";
pub const DB_SEARCH_TERM: &str = "search_term";
pub const DB_SEQUENCE: &str = "sequence";
