use crate::api_docs::ApiDocs;
use crate::config::Config;
use crate::constants::INVALID_REQUEST_BODY_MESSAGE;
use crate::handlers;
use anyhow::{Result, anyhow};
use contacts_api::service::ServiceContext;
use log::info;
use rocket::figment::Figment;
use rocket::http::uri::Origin;
use rocket::http::{Method, Status};
use rocket::{Build, Request, Rocket, catch, catchers, routes};
use rocket_cors::{AllowedHeaders, AllowedOrigins, CorsOptions};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn rocket_main(conf: Config, context: ServiceContext) -> Result<Rocket<Build>> {
    let base_path = Origin::parse(&conf.base_path)
        .map_err(|e| anyhow!("Invalid base path '{}': {e}", conf.base_path))?
        .path()
        .to_string();

    let config = Figment::from(rocket::Config::default())
        .merge(("port", conf.http_port))
        .merge(("address", conf.http_address.to_owned()));

    let cors = CorsOptions::default()
        .allowed_origins(AllowedOrigins::all())
        .allowed_headers(AllowedHeaders::all())
        .allowed_methods(
            vec![
                Method::Get,
                Method::Post,
                Method::Put,
                Method::Delete,
                Method::Options,
            ]
            .into_iter()
            .map(From::from)
            .collect(),
        )
        .allow_credentials(true)
        .to_cors()
        .map_err(|e| anyhow!("Cors setup failed: {e}"))?;

    // static segments like /check-duplicate outrank the dynamic /<id> routes
    let rocket = rocket::custom(config)
        .attach(cors.clone())
        // catchers for CORS and API errors
        .mount(base_path.as_str(), rocket_cors::catch_all_options_routes())
        .register(
            "/",
            catchers![bad_request, not_found, unprocessable_entity, default_catcher],
        )
        .manage(context)
        .manage(cors)
        .mount(
            base_path.as_str(),
            routes![
                handlers::contacts::return_contacts,
                handlers::contacts::return_contact,
                handlers::contacts::search,
                handlers::contacts::search_all,
                handlers::contacts::check_duplicate,
                handlers::contacts::new_contact,
                handlers::contacts::edit_contact,
                handlers::contacts::set_favorite,
                handlers::contacts::remove_contact,
            ],
        )
        .mount(
            "/",
            SwaggerUi::new("/api/swagger-ui/<_..>")
                .url("/api/api-docs/openapi.json", ApiDocs::openapi()),
        );

    info!(
        "HTTP Server Listening on {}{}",
        conf.http_listen_url(),
        base_path
    );

    Ok(rocket)
}

#[catch(400)]
fn bad_request(req: &Request) -> String {
    format!("Bad request to '{}'", req.uri())
}

// failed guards, e.g. a non-integer contact id
#[catch(422)]
fn unprocessable_entity(_req: &Request) -> (Status, &'static str) {
    (Status::BadRequest, INVALID_REQUEST_BODY_MESSAGE)
}

#[catch(404)]
fn not_found(req: &Request) -> String {
    format!("We couldn't find the requested path '{}'", req.uri())
}

#[catch(default)]
fn default_catcher(status: Status, _req: &Request) -> (Status, String) {
    (status, status.reason().unwrap_or("unknown error").to_string())
}
