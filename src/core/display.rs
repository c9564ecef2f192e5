//! Device capability probing.
//!
//! Icon URL resolution asks a `DisplayProbe` whether retina image variants
//! should be preferred. The probe is queried on every resolution, never cached.

use crate::core::constants::HIGH_DENSITY_PIXEL_RATIO;

/// Reports whether the display prefers double-resolution images.
pub trait DisplayProbe: Send + Sync {
    fn is_high_density(&self) -> bool;
}

/// Regular density display. The default probe for icons.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDisplay;

impl DisplayProbe for StandardDisplay {
    fn is_high_density(&self) -> bool {
        false
    }
}

/// Always prefers retina variants.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighDensityDisplay;

impl DisplayProbe for HighDensityDisplay {
    fn is_high_density(&self) -> bool {
        true
    }
}

/// A fixed device pixel ratio, e.g. from a native window's scale factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRatio(pub f64);

impl DisplayProbe for PixelRatio {
    fn is_high_density(&self) -> bool {
        self.0 > HIGH_DENSITY_PIXEL_RATIO
    }
}

/// Reads `window.devicePixelRatio` from the browser on every query.
#[cfg(feature = "wasm")]
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDisplay;

#[cfg(feature = "wasm")]
impl DisplayProbe for BrowserDisplay {
    fn is_high_density(&self) -> bool {
        let ratio = web_sys::window()
            .map(|w| w.device_pixel_ratio())
            .unwrap_or(1.0);
        ratio > HIGH_DENSITY_PIXEL_RATIO
    }
}
