use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::error::StoreError;
use crate::store::{CreatePokemonRequest, UpdatePokemonRequest};
use crate::AppState;

#[derive(Deserialize)]
struct ListQuery {
    offset: Option<String>,
    limit: Option<String>,
}

fn error_response(e: &StoreError) -> HttpResponse {
    let body = serde_json::json!({ "message": e.to_string() });
    match e {
        StoreError::Validation => HttpResponse::BadRequest().json(body),
        StoreError::NotFound => HttpResponse::NotFound().json(body),
    }
}

/// List the upstream catalog (pass-through). `offset`/`limit` fall back to
/// 0/20 when absent or unparsable; no bounds are enforced.
async fn list_pokemons(data: web::Data<AppState>, query: web::Query<ListQuery>) -> impl Responder {
    let offset: i64 = query
        .offset
        .as_deref()
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    let limit: i64 = query
        .limit
        .as_deref()
        .and_then(|v| v.parse().ok())
        .unwrap_or(20);

    match data.catalog.list(offset, limit).await {
        Ok(body) => HttpResponse::Ok()
            .content_type("application/json")
            .body(body),
        Err(e) => {
            log::error!("Failed to reach the Pokémon catalog: {}", e);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "message": "Unable to retrieve Pokémon data."
            }))
        }
    }
}

/// Create a new Pokémon record
async fn create_pokemon(
    data: web::Data<AppState>,
    body: web::Json<CreatePokemonRequest>,
) -> impl Responder {
    match data.store.create(&body.into_inner()) {
        Ok(pokemon) => HttpResponse::Created().json(pokemon),
        Err(e) => error_response(&e),
    }
}

/// Partially update a Pokémon record
async fn update_pokemon(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePokemonRequest>,
) -> impl Responder {
    // An unparsable id can never match a record, so it reads as not found
    let id: i64 = match path.into_inner().parse() {
        Ok(id) => id,
        Err(_) => return error_response(&StoreError::NotFound),
    };

    match data.store.update(id, &body.into_inner()) {
        Ok(pokemon) => HttpResponse::Ok().json(pokemon),
        Err(e) => error_response(&e),
    }
}

/// Delete a Pokémon record
async fn delete_pokemon(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id: i64 = match path.into_inner().parse() {
        Ok(id) => id,
        Err(_) => return error_response(&StoreError::NotFound),
    };

    match data.store.delete(id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(&e),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/pokemons")
            .route("", web::get().to(list_pokemons))
            .route("", web::post().to(create_pokemon))
            .route("/{id}", web::patch().to(update_pokemon))
            .route("/{id}", web::delete().to(delete_pokemon)),
    );
}
