use contacts_api::contact::{Contact, ContactUpdate, DuplicateCheck};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

pub trait IntoWeb<T> {
    fn into_web(self) -> T;
}

pub trait FromWeb<T> {
    fn from_web(value: T) -> Self;
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactWeb {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub group: Option<String>,
    pub favorite: bool,
}

impl IntoWeb<ContactWeb> for Contact {
    fn into_web(self) -> ContactWeb {
        ContactWeb {
            id: self.id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            group: self.group,
            favorite: self.favorite,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct NewContactPayload {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub group: Option<String>,
    pub favorite: Option<bool>,
}

/// The full set of fields of a contact. Omitted fields are cleared.
#[derive(Debug, Deserialize, ToSchema)]
pub struct EditContactPayload {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub group: Option<String>,
    pub favorite: Option<bool>,
}

impl FromWeb<EditContactPayload> for ContactUpdate {
    fn from_web(value: EditContactPayload) -> Self {
        Self {
            name: value.name,
            phone: value.phone,
            email: value.email,
            group: value.group,
            favorite: value.favorite,
        }
    }
}

/// Echoes the submitted body as it was sent, together with the id of the edited contact
#[derive(Debug, Serialize)]
pub struct EditContactResponse {
    pub id: i64,
    #[serde(flatten)]
    pub submitted: Map<String, Value>,
}

impl EditContactResponse {
    pub fn new(id: i64, mut submitted: Map<String, Value>) -> Self {
        // the path id is the id of the contact
        submitted.remove("id");
        Self { id, submitted }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct FavoritePayload {
    pub favorite: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CheckDuplicatePayload {
    pub name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DuplicateCheckResponse {
    pub exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub existing_contact: Option<ContactWeb>,
}

impl IntoWeb<DuplicateCheckResponse> for DuplicateCheck {
    fn into_web(self) -> DuplicateCheckResponse {
        DuplicateCheckResponse {
            exists: self.exists,
            existing_contact: self.existing_contact.map(|c| c.into_web()),
        }
    }
}
