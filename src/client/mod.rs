#[allow(clippy::module_inception)]
mod client;
mod client_builder;

pub use client::*;
pub use client_builder::ClientBuilder;
