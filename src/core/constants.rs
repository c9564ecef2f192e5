//! Core constants derived from Leaflet defaults and common web-map conventions.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Prefix for every CSS class the engine generates (`maplet-marker-icon`, ...).
pub const CLASS_PREFIX: &str = "maplet";

/// Marker icon default size (regular PNG).
pub const MARKER_ICON_SIZE: (f64, f64) = (25.0, 41.0);

/// Anchor inside the icon (hot-spot) in pixel coords.
pub const MARKER_ICON_ANCHOR: (f64, f64) = (12.0, 41.0);

/// Default drop shadow size, square.
pub const MARKER_SHADOW_SIZE: (f64, f64) = (41.0, 41.0);

/// Where popups open relative to the icon anchor.
pub const MARKER_POPUP_ANCHOR: (f64, f64) = (1.0, -34.0);

/// Where tooltips open relative to the icon anchor.
pub const MARKER_TOOLTIP_ANCHOR: (f64, f64) = (16.0, -28.0);

/// Stock image file names shipped with the default marker.
pub const MARKER_ICON_FILE: &str = "marker-icon.png";
pub const MARKER_ICON_RETINA_FILE: &str = "marker-icon-2x.png";
pub const MARKER_SHADOW_FILE: &str = "marker-shadow.png";

/// Device pixel ratios above this select retina (2×) image variants.
pub const HIGH_DENSITY_PIXEL_RATIO: f64 = 1.0;
