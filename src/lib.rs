//! # maplet-icon
//!
//! Marker icon resolution for the maplet map engine, modelled on Leaflet's
//! `L.Icon`.
//!
//! An [`Icon`] turns a declarative [`IconOptions`] configuration into styled
//! visual elements: it picks retina image variants on high-density displays,
//! sizes each layer and converts the anchor (hot-spot) into negative margins
//! so that the anchor lands on the marker's geographic position.

pub mod core;
pub mod layers;
pub mod prelude;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{CrossOrigin, Extent, IconOptions},
    display::DisplayProbe,
    geo::{LatLng, Point},
};

pub use crate::layers::{
    icon::{ElementUpdate, Icon, IconRole},
    marker::Marker,
};

pub use crate::ui::{elements::Element, style::Style};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, IconError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error type alias for convenience
pub type Error = IconError;
