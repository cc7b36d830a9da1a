pub mod persona;
pub mod schema;
pub mod version;
pub mod event;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use error::PersonaError;
pub type Result<T> = std::result::Result<T, PersonaError>;
