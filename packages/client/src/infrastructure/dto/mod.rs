//! Data transfer objects exchanged with the room API.

pub mod http;
