use thiserror::Error;

/// Errors raised by the in-memory record store.
///
/// The Display strings double as the client-facing `message` bodies, so they
/// are part of the HTTP contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// Missing or empty required fields on creation. Maps to 400.
    #[error("Both name and category are required.")]
    Validation,

    /// No record with the requested id. Maps to 404.
    #[error("Pokémon not found.")]
    NotFound,
}

/// Any failure contacting the upstream catalog: connect errors, timeouts and
/// non-2xx upstream statuses all collapse into this. Detail is logged but
/// never surfaced to the client.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
