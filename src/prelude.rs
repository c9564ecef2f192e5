//! Prelude module for common maplet-icon types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use maplet_icon::prelude::*;`

pub use crate::core::{
    config::{CrossOrigin, Extent, IconOptions},
    display::{DisplayProbe, HighDensityDisplay, PixelRatio, StandardDisplay},
    geo::{LatLng, Point},
};

#[cfg(feature = "wasm")]
pub use crate::core::display::BrowserDisplay;

pub use crate::layers::{
    icon::{ElementUpdate, Icon, IconRole},
    marker::Marker,
};

pub use crate::ui::{
    elements::{Element, Tag},
    style::{CssPosition, ObjectFit, Style},
};

pub use crate::{IconError, Result};
