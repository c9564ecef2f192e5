//! Marker icon resolution
//!
//! An `Icon` holds a merged `IconOptions` and turns it into styled visual
//! elements: the icon itself (a two-layer marker+glyph composite), and an
//! optional drop shadow. Each call is independent. A previously produced
//! element may be passed back in to be updated in place instead of
//! allocating a new one.

use crate::{
    core::{
        config::{Extent, IconOptions},
        constants::CLASS_PREFIX,
        display::{DisplayProbe, StandardDisplay},
        geo::Point,
    },
    ui::{
        elements::Element,
        style::{CssPosition, ObjectFit},
    },
    IconError, Result,
};
use std::sync::Arc;

/// Which visual layer a configuration key applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconRole {
    Icon,
    Shadow,
    Marker,
}

impl std::fmt::Display for IconRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconRole::Icon => write!(f, "icon"),
            IconRole::Shadow => write!(f, "shadow"),
            IconRole::Marker => write!(f, "marker"),
        }
    }
}

/// Per-role accessors into `IconOptions`
struct RoleFields {
    url: fn(&IconOptions) -> Option<&str>,
    retina_url: fn(&IconOptions) -> Option<&str>,
    size: fn(&IconOptions) -> Option<Extent>,
    anchor: fn(&IconOptions) -> Option<Point>,
}

static ICON_FIELDS: RoleFields = RoleFields {
    url: |o| o.icon_url.as_deref(),
    retina_url: |o| o.icon_retina_url.as_deref(),
    size: |o| o.icon_size,
    anchor: |o| o.icon_anchor,
};

// A shadow without its own anchor lines up with the icon's hot-spot.
static SHADOW_FIELDS: RoleFields = RoleFields {
    url: |o| o.shadow_url.as_deref(),
    retina_url: |o| o.shadow_retina_url.as_deref(),
    size: |o| o.shadow_size,
    anchor: |o| o.shadow_anchor.or(o.icon_anchor),
};

static MARKER_FIELDS: RoleFields = RoleFields {
    url: |o| o.marker_url.as_deref(),
    retina_url: |o| o.marker_retina_url.as_deref(),
    size: |o| o.marker_size,
    anchor: |_| None,
};

impl IconRole {
    fn fields(self) -> &'static RoleFields {
        match self {
            IconRole::Icon => &ICON_FIELDS,
            IconRole::Shadow => &SHADOW_FIELDS,
            IconRole::Marker => &MARKER_FIELDS,
        }
    }
}

/// Result of an update-or-create call.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementUpdate {
    /// The styled element, either the reused previous element or a new one
    pub element: Element,
    /// Whether `element` is the previous element updated in place
    pub reused: bool,
    /// A previous element that could not be reused. It is returned untouched
    /// so the caller can detach it.
    pub discarded: Option<Element>,
}

impl ElementUpdate {
    fn in_place(element: Element) -> Self {
        Self {
            element,
            reused: true,
            discarded: None,
        }
    }

    fn created(element: Element, discarded: Option<Element>) -> Self {
        Self {
            element,
            reused: false,
            discarded,
        }
    }

    pub fn into_element(self) -> Element {
        self.element
    }
}

/// Resolves icon options into visual elements.
#[derive(Clone)]
pub struct Icon {
    options: IconOptions,
    display: Arc<dyn DisplayProbe>,
}

impl std::fmt::Debug for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Icon")
            .field("options", &self.options)
            .field("high_density", &self.display.is_high_density())
            .finish()
    }
}

impl Icon {
    /// Creates an icon with `options` merged over the base defaults.
    /// Nothing is validated until elements are requested.
    pub fn new(options: IconOptions) -> Self {
        Self {
            options: options.merged_over(IconOptions::base_defaults()),
            display: Arc::new(StandardDisplay),
        }
    }

    /// Creates an icon from a JSON configuration object.
    pub fn from_json(value: serde_json::Value) -> Result<Self> {
        let options: IconOptions = serde_json::from_value(value)?;
        Ok(Self::new(options))
    }

    /// The stock blue pin with a caller-supplied glyph.
    pub fn default_marker(icon_url: impl Into<String>) -> Self {
        Self::new(IconOptions::default_marker().with_icon_url(icon_url))
    }

    /// Replaces the device probe used for retina selection.
    pub fn with_display<P: DisplayProbe + 'static>(mut self, display: P) -> Self {
        self.display = Arc::new(display);
        self
    }

    pub fn options(&self) -> &IconOptions {
        &self.options
    }

    pub fn popup_anchor(&self) -> Point {
        self.options.popup_anchor.unwrap_or_default()
    }

    pub fn tooltip_anchor(&self) -> Point {
        self.options.tooltip_anchor.unwrap_or_default()
    }

    /// Picks the retina variant for `role` on high-density displays when one
    /// is configured, otherwise the base URL. Empty strings count as unset.
    pub fn resolve_url(&self, role: IconRole) -> Option<&str> {
        let fields = role.fields();
        let retina = if self.display.is_high_density() {
            (fields.retina_url)(&self.options).filter(|url| !url.is_empty())
        } else {
            None
        };
        retina.or_else(|| (fields.url)(&self.options).filter(|url| !url.is_empty()))
    }

    /// Glyph and marker URLs of the composite, `(icon, marker)`. Both are
    /// required; a missing one is a configuration error.
    pub fn composite_sources(&self) -> Result<(&str, &str)> {
        match (
            self.resolve_url(IconRole::Icon),
            self.resolve_url(IconRole::Marker),
        ) {
            (Some(icon_src), Some(marker_src)) => Ok((icon_src, marker_src)),
            _ => {
                #[cfg(feature = "debug")]
                log::warn!("Icon requested without iconUrl or markerUrl");
                Err(IconError::Configuration(
                    "iconUrl or markerUrl not set".to_string(),
                ))
            }
        }
    }

    /// Builds (or updates) the marker+glyph composite.
    ///
    /// A previous element is reused only if it is a composite; anything else
    /// is handed back in `discarded` and a fresh composite is built. On error
    /// `previous` is dropped, so callers holding an attached element should
    /// check `composite_sources` first.
    pub fn create_icon(&self, previous: Option<Element>) -> Result<ElementUpdate> {
        let (icon_src, marker_src) = self.composite_sources()?;

        let mut update = match previous {
            Some(element) if is_composite(&element) => ElementUpdate::in_place(element),
            other => ElementUpdate::created(build_composite(), other),
        };

        #[cfg(feature = "debug")]
        log::debug!(
            "{} icon element: marker={} icon={}",
            if update.reused { "Updating" } else { "Creating" },
            marker_src,
            icon_src
        );

        if let [marker_layer, icon_layer] = update.element.children_mut() {
            marker_layer.src = Some(marker_src.to_string());
            marker_layer.style.translate = self.options.marker_offset;
            set_layer_size(marker_layer, self.options.marker_size);

            icon_layer.src = Some(icon_src.to_string());
            icon_layer.style.object_fit = Some(ObjectFit::Cover);
            icon_layer.style.translate = self.options.icon_offset;
            set_layer_size(icon_layer, self.options.icon_size);

            // Containers have no cross-origin attribute, so each layer gets it.
            for layer in [marker_layer, icon_layer] {
                layer.cross_origin = self.cross_origin();
                layer.title = self.options.tooltip.clone();
            }
        }

        self.set_icon_styles(&mut update.element, IconRole::Icon);
        Ok(update)
    }

    /// Builds (or updates) the drop shadow image. Returns `None` when no
    /// shadow URL is configured for either density.
    ///
    /// Only a plain image is reused; any other previous element is handed
    /// back in `discarded` untouched.
    pub fn create_shadow(&self, previous: Option<Element>) -> Option<ElementUpdate> {
        let Some(src) = self.resolve_url(IconRole::Shadow) else {
            #[cfg(feature = "debug")]
            log::debug!("No shadow configured for icon");
            return None;
        };

        let mut update = match previous {
            Some(mut element) if element.is_image() => {
                element.src = Some(src.to_string());
                element.title = None;
                ElementUpdate::in_place(element)
            }
            other => ElementUpdate::created(Element::image(src), other),
        };

        self.set_icon_styles(&mut update.element, IconRole::Shadow);
        update.element.cross_origin = self.cross_origin();
        Some(update)
    }

    fn cross_origin(&self) -> Option<String> {
        self.options.cross_origin_directive().map(str::to_string)
    }

    /// Class, anchor margins and size for `role`. Without an explicit anchor
    /// the anchor is half the size; without either, margins are left unset.
    fn set_icon_styles(&self, element: &mut Element, role: IconRole) {
        let fields = role.fields();
        let size = (fields.size)(&self.options).map(|extent| extent.to_point());
        let anchor = (fields.anchor)(&self.options).or_else(|| size.map(|s| s.divide_by(2.0)));

        element.class_name = format!(
            "{}-marker-{} {}",
            CLASS_PREFIX,
            role,
            self.options.class_name()
        );

        match anchor {
            Some(anchor) => element.style.set_anchor(anchor),
            None => {
                element.style.margin_left = None;
                element.style.margin_top = None;
            }
        }

        match size {
            Some(size) => element.style.set_size(size),
            None => {
                element.style.width = None;
                element.style.height = None;
            }
        }
    }
}

/// Two absolutely positioned layers: marker beneath, glyph above.
fn build_composite() -> Element {
    let mut wrapper = Element::container();
    for _ in 0..2 {
        let mut layer = Element::image("");
        layer.style.position = Some(CssPosition::Absolute);
        wrapper.append_child(layer);
    }
    wrapper
}

fn is_composite(element: &Element) -> bool {
    !element.is_image()
        && element.children().len() == 2
        && element.children().iter().all(Element::is_image)
}

fn set_layer_size(layer: &mut Element, size: Option<Extent>) {
    match size {
        Some(extent) => layer.style.set_size(extent.to_point()),
        None => {
            layer.style.width = None;
            layer.style.height = None;
        }
    }
}
