use crate::handlers;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(
    handlers::contacts::return_contacts,
    handlers::contacts::return_contact,
    handlers::contacts::search,
    handlers::contacts::check_duplicate,
    handlers::contacts::new_contact,
    handlers::contacts::edit_contact,
    handlers::contacts::set_favorite,
    handlers::contacts::remove_contact,
))]
pub struct ApiDocs;
