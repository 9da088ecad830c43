use super::{Result, parse_id, parse_object, parse_payload};
use crate::constants::FAVORITE_UPDATED_MESSAGE;
use crate::data::{
    CheckDuplicatePayload, ContactWeb, DuplicateCheckResponse, EditContactPayload,
    EditContactResponse, FavoritePayload, FromWeb, IntoWeb, NewContactPayload,
};
use contacts_api::contact::{Contact, ContactUpdate};
use contacts_api::service::ServiceContext;
use rocket::http::Status;
use rocket::serde::json::{self, Json};
use rocket::{State, delete, get, post, put};
use serde_json::Value;

#[utoipa::path(
    tag = "Contacts",
    path = "/api/contacts",
    description = "Returns all contacts",
    responses(
        (status = 200, description = "All contacts", body = Vec<ContactWeb>)
    )
)]
#[get("/")]
pub async fn return_contacts(state: &State<ServiceContext>) -> Result<Json<Vec<ContactWeb>>> {
    let contacts: Vec<Contact> = state.contact_service.get_contacts().await?;
    Ok(Json(contacts.into_iter().map(|c| c.into_web()).collect()))
}

#[utoipa::path(
    tag = "Contacts",
    path = "/api/contacts/{id}",
    description = "Returns the contact with the given id, or null if there is none or the id isn't an integer",
    params(
        ("id" = i64, description = "Id of the contact")
    ),
    responses(
        (status = 200, description = "The contact, or null", body = ContactWeb)
    )
)]
#[get("/<id>")]
pub async fn return_contact(
    state: &State<ServiceContext>,
    id: &str,
) -> Result<Json<Option<ContactWeb>>> {
    let Some(id) = parse_id(id) else {
        return Ok(Json(None));
    };
    let contact = state.contact_service.get_contact(id).await?;
    Ok(Json(contact.map(|c| c.into_web())))
}

#[utoipa::path(
    tag = "Contacts",
    path = "/api/contacts/search/{keyword}",
    description = "Returns all contacts whose name, phone or email contains the keyword",
    params(
        ("keyword" = String, description = "Case-sensitive search term")
    ),
    responses(
        (status = 200, description = "Matching contacts", body = Vec<ContactWeb>)
    )
)]
#[get("/search/<keyword>")]
pub async fn search(
    state: &State<ServiceContext>,
    keyword: &str,
) -> Result<Json<Vec<ContactWeb>>> {
    let contacts = state.contact_service.search(keyword).await?;
    Ok(Json(contacts.into_iter().map(|c| c.into_web()).collect()))
}

// An empty keyword can't be a path segment
#[get("/search")]
pub async fn search_all(state: &State<ServiceContext>) -> Result<Json<Vec<ContactWeb>>> {
    search(state, "").await
}

#[utoipa::path(
    tag = "Contacts",
    path = "/api/contacts/check-duplicate",
    description = "Checks if there is a contact with the same name or the same phone",
    request_body = CheckDuplicatePayload,
    responses(
        (status = 200, description = "Duplicate check result", body = DuplicateCheckResponse),
        (status = 400, description = "name or phone missing or not a string")
    )
)]
#[post("/check-duplicate", data = "<check_duplicate_payload>")]
pub async fn check_duplicate(
    state: &State<ServiceContext>,
    check_duplicate_payload: std::result::Result<Json<CheckDuplicatePayload>, json::Error<'_>>,
) -> Result<Json<DuplicateCheckResponse>> {
    let payload = parse_payload(check_duplicate_payload)?;
    let result = state
        .contact_service
        .check_duplicate(payload.name, payload.phone)
        .await?;
    Ok(Json(result.into_web()))
}

#[utoipa::path(
    tag = "Contacts",
    path = "/api/contacts",
    description = "Creates a new contact",
    request_body = NewContactPayload,
    responses(
        (status = 201, description = "The created contact", body = ContactWeb),
        (status = 400, description = "name or phone missing")
    )
)]
#[post("/", data = "<new_contact_payload>")]
pub async fn new_contact(
    state: &State<ServiceContext>,
    new_contact_payload: std::result::Result<Json<NewContactPayload>, json::Error<'_>>,
) -> Result<(Status, Json<ContactWeb>)> {
    let payload = parse_payload(new_contact_payload)?;
    let contact = state
        .contact_service
        .add_contact(
            payload.name,
            payload.phone,
            payload.email,
            payload.group,
            payload.favorite,
        )
        .await?;
    Ok((Status::Created, Json(contact.into_web())))
}

#[utoipa::path(
    tag = "Contacts",
    path = "/api/contacts/{id}",
    description = "Replaces all fields of a contact, omitted fields are cleared",
    params(
        ("id" = i64, description = "Id of the contact")
    ),
    request_body = EditContactPayload,
    responses(
        (status = 200, description = "The submitted body with the id", body = Object),
        (status = 400, description = "Malformed body or non-integer id")
    )
)]
#[put("/<id>", data = "<edit_contact_payload>")]
pub async fn edit_contact(
    state: &State<ServiceContext>,
    id: i64,
    edit_contact_payload: std::result::Result<Json<Value>, json::Error<'_>>,
) -> Result<Json<EditContactResponse>> {
    let (payload, submitted) = parse_object::<EditContactPayload>(edit_contact_payload)?;
    state
        .contact_service
        .update_contact(id, ContactUpdate::from_web(payload))
        .await?;
    Ok(Json(EditContactResponse::new(id, submitted)))
}

#[utoipa::path(
    tag = "Contacts",
    path = "/api/contacts/{id}/favorite",
    description = "Sets the favorite flag of a contact to the given value",
    params(
        ("id" = i64, description = "Id of the contact")
    ),
    request_body = FavoritePayload,
    responses(
        (status = 200, description = "Favorite flag updated"),
        (status = 400, description = "Malformed body or non-integer id")
    )
)]
#[put("/<id>/favorite", data = "<favorite_payload>")]
pub async fn set_favorite(
    state: &State<ServiceContext>,
    id: i64,
    favorite_payload: std::result::Result<Json<FavoritePayload>, json::Error<'_>>,
) -> Result<&'static str> {
    let payload = parse_payload(favorite_payload)?;
    state
        .contact_service
        .set_favorite(id, payload.favorite.unwrap_or_default())
        .await?;
    Ok(FAVORITE_UPDATED_MESSAGE)
}

#[utoipa::path(
    tag = "Contacts",
    path = "/api/contacts/{id}",
    description = "Deletes a contact, succeeds if there is none or the id isn't an integer",
    params(
        ("id" = i64, description = "Id of the contact")
    ),
    responses(
        (status = 204, description = "Contact deleted")
    )
)]
#[delete("/<id>")]
pub async fn remove_contact(state: &State<ServiceContext>, id: &str) -> Result<Status> {
    if let Some(id) = parse_id(id) {
        state.contact_service.delete(id).await?;
    }
    Ok(Status::NoContent)
}
