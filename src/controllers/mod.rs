pub mod health;
pub mod pokemons;
