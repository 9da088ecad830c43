// General
pub const DEFAULT_BASE_PATH: &str = "/api/contacts";

// Responses
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";
pub const FAVORITE_UPDATED_MESSAGE: &str = "favorite status updated";
pub const INVALID_REQUEST_BODY_MESSAGE: &str = "invalid request body";
