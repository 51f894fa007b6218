//! In-memory Pokémon record store.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// A user-created Pokémon record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: i64,
    pub name: String,
    pub category: String,
}

/// Request to create a new Pokémon
#[derive(Debug, Deserialize)]
pub struct CreatePokemonRequest {
    pub name: Option<String>,
    pub category: Option<String>,
}

/// Request to update a Pokémon (partial; omitted fields are left unchanged)
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePokemonRequest {
    pub name: Option<String>,
    pub category: Option<String>,
}

/// Ordered in-memory collection of records for the lifetime of the process.
///
/// Owned by `AppState` and shared across workers. Every operation takes the
/// lock for one synchronous call with no await inside, so mutations never
/// interleave.
pub struct PokemonStore {
    records: Mutex<Vec<Pokemon>>,
}

impl PokemonStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }

    /// Create a record and append it to the store.
    ///
    /// Ids are assigned as `len + 1`, not max-id + 1: a create after a
    /// deletion can therefore produce an id that collides with a surviving
    /// record. That is the historical contract of this endpoint and is kept
    /// as-is.
    pub fn create(&self, request: &CreatePokemonRequest) -> Result<Pokemon, StoreError> {
        let (name, category) = match (&request.name, &request.category) {
            (Some(name), Some(category)) if !name.is_empty() && !category.is_empty() => {
                (name.clone(), category.clone())
            }
            _ => return Err(StoreError::Validation),
        };

        let mut records = self.records.lock();
        let pokemon = Pokemon {
            id: records.len() as i64 + 1,
            name,
            category,
        };
        records.push(pokemon.clone());
        Ok(pokemon)
    }

    /// Update the first record with a matching id in place. Only fields that
    /// arrive present and non-empty overwrite the stored values.
    pub fn update(&self, id: i64, request: &UpdatePokemonRequest) -> Result<Pokemon, StoreError> {
        let mut records = self.records.lock();
        let record = records
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;

        if let Some(name) = request.name.as_deref().filter(|s| !s.is_empty()) {
            record.name = name.to_string();
        }
        if let Some(category) = request.category.as_deref().filter(|s| !s.is_empty()) {
            record.category = category.to_string();
        }

        Ok(record.clone())
    }

    /// Remove the first record with a matching id, preserving the relative
    /// order of the rest. Remaining records are never renumbered.
    pub fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut records = self.records.lock();
        let index = records
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;
        records.remove(index);
        Ok(())
    }
}
