pub mod error;
pub mod outfit_selector;
