use crate::{
    core::geo::{LatLng, Point},
    layers::icon::{Icon, IconRole},
    ui::elements::Element,
    Result,
};

/// A point marker that owns its icon and the elements rendered from it.
pub struct Marker {
    id: String,
    position: LatLng,
    icon: Icon,
    popup_text: Option<String>,
    icon_element: Option<Element>,
    shadow_element: Option<Element>,
}

impl Marker {
    pub fn new(id: String, position: LatLng, icon: Icon) -> Self {
        Self {
            id,
            position,
            icon,
            popup_text: None,
            icon_element: None,
            shadow_element: None,
        }
    }

    pub fn with_popup(mut self, text: String) -> Self {
        self.popup_text = Some(text);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn set_position(&mut self, position: LatLng) {
        self.position = position;
    }

    pub fn icon(&self) -> &Icon {
        &self.icon
    }

    /// Swaps the icon. Rendered elements are kept so the next `render`
    /// can update them in place.
    pub fn set_icon(&mut self, icon: Icon) {
        self.icon = icon;
    }

    pub fn icon_element(&self) -> Option<&Element> {
        self.icon_element.as_ref()
    }

    pub fn shadow_element(&self) -> Option<&Element> {
        self.shadow_element.as_ref()
    }

    /// Popup position relative to the marker's anchor point
    pub fn popup_offset(&self) -> Point {
        self.icon.popup_anchor()
    }

    /// Tooltip position relative to the marker's anchor point
    pub fn tooltip_offset(&self) -> Point {
        self.icon.tooltip_anchor()
    }

    /// Creates or updates the icon and shadow elements from the current icon.
    ///
    /// Returns the previously rendered elements that were replaced rather
    /// than updated; the caller should detach them.
    pub fn render(&mut self) -> Result<Vec<Element>> {
        let mut detached = Vec::new();

        // Keep the attached icon element if the new icon cannot be built.
        self.icon.composite_sources()?;
        let update = self.icon.create_icon(self.icon_element.take())?;
        detached.extend(update.discarded);
        self.icon_element = Some(update.element);

        let previous_shadow = self.shadow_element.take();
        if self.icon.resolve_url(IconRole::Shadow).is_none() {
            detached.extend(previous_shadow);
        } else if let Some(update) = self.icon.create_shadow(previous_shadow) {
            detached.extend(update.discarded);
            self.shadow_element = Some(update.element);
        }

        #[cfg(feature = "debug")]
        log::debug!(
            "Rendered marker {} ({} element(s) to detach)",
            self.id,
            detached.len()
        );

        Ok(detached)
    }

    /// HTML for the rendered marker, shadow first so the icon paints above it.
    pub fn to_html(&self) -> String {
        self.shadow_element
            .iter()
            .chain(self.icon_element.iter())
            .map(Element::to_html)
            .collect()
    }

    pub fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "position": {
                "lat": self.position.lat,
                "lng": self.position.lng
            },
            "popup": self.popup_text,
            "icon": self.icon.options()
        })
    }
}
