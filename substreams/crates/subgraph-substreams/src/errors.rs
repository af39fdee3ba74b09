use thiserror::Error;

/// Failures a handler can report back to the dispatcher.
///
/// None of these halt indexing: the dispatcher logs the error and moves on to the next event.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("{entity} `{id}` does not exist")]
    MissingEntity { entity: &'static str, id: String },

    #[error("stored {entity} `{id}` could not be decoded: {source}")]
    Decode {
        entity: &'static str,
        id: String,
        #[source]
        source: prost::DecodeError,
    },

    #[error("field `{field}` holds `{value}`, which is not an integer")]
    InvalidMantissa { field: &'static str, value: String },
}

impl HandlerError {
    pub fn missing<E: crate::store::Entity>(id: impl Into<String>) -> Self {
        HandlerError::MissingEntity { entity: E::NAME, id: id.into() }
    }
}
