pub mod client_identifier;

pub use client_identifier::{client_identifier, resolve_client, ClientIdentifier};
