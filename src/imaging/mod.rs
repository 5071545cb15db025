pub mod error;
pub mod image_generator;
pub mod prompt;
mod wire;
