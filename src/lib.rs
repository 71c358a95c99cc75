pub mod config;
pub mod error;
pub mod responder;
pub mod server;
pub mod whatsapp;

pub use error::{Error, Result};
