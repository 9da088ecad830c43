use crate::constants::{INTERNAL_ERROR_MESSAGE, INVALID_REQUEST_BODY_MESSAGE};
use contacts_api::service::Error;
use log::error;
use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::{self, Json};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt::Display;

pub type Result<T> = std::result::Result<T, crate::error::Error>;

pub mod contacts;

fn invalid_body(reason: impl Display) -> crate::error::Error {
    Error::Validation(format!("{INVALID_REQUEST_BODY_MESSAGE}: {reason}")).into()
}

/// Unwraps a JSON request body, a malformed or mistyped body is a validation error
fn parse_payload<T>(payload: std::result::Result<Json<T>, json::Error<'_>>) -> Result<T> {
    match payload {
        Ok(Json(value)) => Ok(value),
        Err(e) => Err(invalid_body(e)),
    }
}

/// Parses a JSON object body into `T` and also returns its members as submitted
fn parse_object<T: DeserializeOwned>(
    payload: std::result::Result<Json<Value>, json::Error<'_>>,
) -> Result<(T, Map<String, Value>)> {
    let Value::Object(members) = parse_payload(payload)? else {
        return Err(invalid_body("expected a JSON object"));
    };
    let parsed = serde_json::from_value(Value::Object(members.clone())).map_err(invalid_body)?;
    Ok((parsed, members))
}

/// Contact ids are integers, any other id can't match a stored contact
fn parse_id(id: &str) -> Option<i64> {
    id.parse().ok()
}

impl<'r, 'o: 'r> Responder<'r, 'o> for crate::error::Error {
    fn respond_to(self, req: &rocket::Request) -> rocket::response::Result<'o> {
        match self {
            crate::error::Error::Service(e) => ServiceError(e).respond_to(req),
        }
    }
}

pub struct ServiceError(Error);

impl<'r, 'o: 'r> Responder<'r, 'o> for ServiceError {
    fn respond_to(self, req: &rocket::Request) -> rocket::response::Result<'o> {
        match self.0 {
            Error::Validation(msg) => (Status::BadRequest, msg).respond_to(req),
            // all persistence errors are opaque to the caller
            Error::Persistence(e) => {
                error!("{e}");
                (Status::InternalServerError, INTERNAL_ERROR_MESSAGE).respond_to(req)
            }
        }
    }
}
