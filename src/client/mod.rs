//! Client side of the relay: the lookup form and its transport

pub mod form;
pub mod relay;

pub use form::{
    FormController, BLANK_INPUT_MESSAGE, FETCH_FAILED_MESSAGE, NO_VALID_CITIES_MESSAGE,
};
pub use relay::{RelayClient, RelayTransport, DEFAULT_RELAY_URL};
