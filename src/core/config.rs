//! Icon configuration
//!
//! `IconOptions` is the declarative description of a marker icon: which
//! images to use for each role, how big they are and where their hot-spot
//! sits. Options are plain data, built in code with the `with_*` helpers or
//! deserialized from JSON using the camelCase keys web maps use
//! (`iconUrl`, `iconRetinaUrl`, `shadowSize`, ...).

use crate::core::{
    constants::{
        MARKER_ICON_ANCHOR, MARKER_ICON_FILE, MARKER_ICON_RETINA_FILE, MARKER_ICON_SIZE,
        MARKER_POPUP_ANCHOR, MARKER_SHADOW_FILE, MARKER_SHADOW_SIZE, MARKER_TOOLTIP_ANCHOR,
    },
    geo::Point,
};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A pixel extent: either a single number meaning a square, or width/height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Extent {
    Square(f64),
    Dimensions(Point),
}

impl Extent {
    pub fn to_point(&self) -> Point {
        match self {
            Self::Square(side) => Point::splat(*side),
            Self::Dimensions(point) => *point,
        }
    }
}

impl From<f64> for Extent {
    fn from(side: f64) -> Self {
        Self::Square(side)
    }
}

impl From<Point> for Extent {
    fn from(point: Point) -> Self {
        Self::Dimensions(point)
    }
}

impl From<(f64, f64)> for Extent {
    fn from(pair: (f64, f64)) -> Self {
        Self::Dimensions(pair.into())
    }
}

/// Cross-origin fetch directive applied to generated images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CrossOrigin {
    Flag(bool),
    Mode(String),
}

impl CrossOrigin {
    /// The attribute value to apply, if any. `true` and the empty string both
    /// mean the anonymous directive `""`.
    pub fn directive(&self) -> Option<&str> {
        match self {
            Self::Flag(true) => Some(""),
            Self::Flag(false) => None,
            Self::Mode(mode) => Some(mode.as_str()),
        }
    }
}

impl Default for CrossOrigin {
    fn default() -> Self {
        Self::Flag(false)
    }
}

impl From<bool> for CrossOrigin {
    fn from(flag: bool) -> Self {
        Self::Flag(flag)
    }
}

impl From<&str> for CrossOrigin {
    fn from(mode: &str) -> Self {
        Self::Mode(mode.to_string())
    }
}

/// Declarative icon configuration. Every field is optional so that a
/// caller-supplied configuration can be merged over defaults field by field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IconOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_retina_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_retina_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker_retina_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_size: Option<Extent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_size: Option<Extent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_anchor: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow_anchor: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popup_anchor: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip_anchor: Option<Point>,

    /// Layer geometry for the two-layer marker+icon composite
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker_offset: Option<Point>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker_size: Option<Extent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_offset: Option<Point>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_origin: Option<CrossOrigin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

static DEFAULT_MARKER: Lazy<IconOptions> = Lazy::new(|| IconOptions {
    marker_url: Some(MARKER_ICON_FILE.to_string()),
    marker_retina_url: Some(MARKER_ICON_RETINA_FILE.to_string()),
    shadow_url: Some(MARKER_SHADOW_FILE.to_string()),
    icon_size: Some(MARKER_ICON_SIZE.into()),
    marker_size: Some(MARKER_ICON_SIZE.into()),
    icon_anchor: Some(MARKER_ICON_ANCHOR.into()),
    popup_anchor: Some(MARKER_POPUP_ANCHOR.into()),
    tooltip_anchor: Some(MARKER_TOOLTIP_ANCHOR.into()),
    shadow_size: Some(MARKER_SHADOW_SIZE.into()),
    ..IconOptions::default()
});

impl IconOptions {
    /// Defaults every icon is merged over.
    pub fn base_defaults() -> Self {
        Self {
            popup_anchor: Some(Point::default()),
            tooltip_anchor: Some(Point::default()),
            class_name: Some(String::new()),
            cross_origin: Some(CrossOrigin::default()),
            ..Self::default()
        }
    }

    /// The stock blue pin: marker image, retina variant and drop shadow.
    /// Only the glyph (`icon_url`) is left for the caller to supply.
    pub fn default_marker() -> Self {
        DEFAULT_MARKER.clone()
    }

    /// Stock pin with its image files served from `image_path`.
    pub fn default_marker_at(image_path: &str) -> Self {
        let prefix = if image_path.is_empty() || image_path.ends_with('/') {
            image_path.to_string()
        } else {
            format!("{image_path}/")
        };

        let mut options = Self::default_marker();
        for url in [
            &mut options.marker_url,
            &mut options.marker_retina_url,
            &mut options.shadow_url,
        ] {
            if let Some(file) = url.as_mut() {
                file.insert_str(0, &prefix);
            }
        }
        options
    }

    /// Shallow merge: every field set on `self` wins over `defaults`.
    pub fn merged_over(self, defaults: IconOptions) -> IconOptions {
        IconOptions {
            icon_url: self.icon_url.or(defaults.icon_url),
            icon_retina_url: self.icon_retina_url.or(defaults.icon_retina_url),
            shadow_url: self.shadow_url.or(defaults.shadow_url),
            shadow_retina_url: self.shadow_retina_url.or(defaults.shadow_retina_url),
            marker_url: self.marker_url.or(defaults.marker_url),
            marker_retina_url: self.marker_retina_url.or(defaults.marker_retina_url),
            icon_size: self.icon_size.or(defaults.icon_size),
            shadow_size: self.shadow_size.or(defaults.shadow_size),
            icon_anchor: self.icon_anchor.or(defaults.icon_anchor),
            shadow_anchor: self.shadow_anchor.or(defaults.shadow_anchor),
            popup_anchor: self.popup_anchor.or(defaults.popup_anchor),
            tooltip_anchor: self.tooltip_anchor.or(defaults.tooltip_anchor),
            marker_offset: self.marker_offset.or(defaults.marker_offset),
            marker_size: self.marker_size.or(defaults.marker_size),
            icon_offset: self.icon_offset.or(defaults.icon_offset),
            class_name: self.class_name.or(defaults.class_name),
            cross_origin: self.cross_origin.or(defaults.cross_origin),
            tooltip: self.tooltip.or(defaults.tooltip),
        }
    }

    pub fn class_name(&self) -> &str {
        self.class_name.as_deref().unwrap_or("")
    }

    pub fn cross_origin_directive(&self) -> Option<&str> {
        self.cross_origin.as_ref().and_then(CrossOrigin::directive)
    }

    pub fn with_icon_url(mut self, url: impl Into<String>) -> Self {
        self.icon_url = Some(url.into());
        self
    }

    pub fn with_icon_retina_url(mut self, url: impl Into<String>) -> Self {
        self.icon_retina_url = Some(url.into());
        self
    }

    pub fn with_shadow_url(mut self, url: impl Into<String>) -> Self {
        self.shadow_url = Some(url.into());
        self
    }

    pub fn with_shadow_retina_url(mut self, url: impl Into<String>) -> Self {
        self.shadow_retina_url = Some(url.into());
        self
    }

    pub fn with_marker_url(mut self, url: impl Into<String>) -> Self {
        self.marker_url = Some(url.into());
        self
    }

    pub fn with_marker_retina_url(mut self, url: impl Into<String>) -> Self {
        self.marker_retina_url = Some(url.into());
        self
    }

    pub fn with_icon_size(mut self, size: impl Into<Extent>) -> Self {
        self.icon_size = Some(size.into());
        self
    }

    pub fn with_shadow_size(mut self, size: impl Into<Extent>) -> Self {
        self.shadow_size = Some(size.into());
        self
    }

    pub fn with_icon_anchor(mut self, anchor: impl Into<Point>) -> Self {
        self.icon_anchor = Some(anchor.into());
        self
    }

    pub fn with_shadow_anchor(mut self, anchor: impl Into<Point>) -> Self {
        self.shadow_anchor = Some(anchor.into());
        self
    }

    pub fn with_popup_anchor(mut self, anchor: impl Into<Point>) -> Self {
        self.popup_anchor = Some(anchor.into());
        self
    }

    pub fn with_tooltip_anchor(mut self, anchor: impl Into<Point>) -> Self {
        self.tooltip_anchor = Some(anchor.into());
        self
    }

    pub fn with_marker_offset(mut self, offset: impl Into<Point>) -> Self {
        self.marker_offset = Some(offset.into());
        self
    }

    pub fn with_marker_size(mut self, size: impl Into<Extent>) -> Self {
        self.marker_size = Some(size.into());
        self
    }

    pub fn with_icon_offset(mut self, offset: impl Into<Point>) -> Self {
        self.icon_offset = Some(offset.into());
        self
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_cross_origin(mut self, cross_origin: impl Into<CrossOrigin>) -> Self {
        self.cross_origin = Some(cross_origin.into());
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }
}
