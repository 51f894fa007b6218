use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;

mod config;
mod controllers;
mod error;
mod http;
mod integrations;
mod store;

use config::Config;
use integrations::pokeapi::PokeApiClient;
use store::PokemonStore;

pub struct AppState {
    pub store: PokemonStore,
    pub catalog: PokeApiClient,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let port = config.port;

    // Built once and cloned into every worker so all workers share one store
    let state = web::Data::new(AppState {
        store: PokemonStore::new(),
        catalog: PokeApiClient::default_remote(),
    });

    log::info!("Starting Pokédex backend on port {}", port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config)
            .configure(controllers::pokemons::config)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
