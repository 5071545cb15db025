use crate::config::ConfigError;
use crate::imaging::error::ImageError;
use crate::selector::error::SelectionError;
use crate::store::error::StoreError;
use crate::weather::error::WeatherApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WardrobeError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Weather(#[from] WeatherApiError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Image(#[from] ImageError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
