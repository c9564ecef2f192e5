use crate::core::geo::Point;

/// CSS `position` values used by marker elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CssPosition {
    Absolute,
}

impl std::fmt::Display for CssPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CssPosition::Absolute => write!(f, "absolute"),
        }
    }
}

/// CSS `object-fit` values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectFit {
    Cover,
}

impl std::fmt::Display for ObjectFit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ObjectFit::Cover => write!(f, "cover"),
        }
    }
}

/// Inline style of a visual element. Unset properties are simply omitted
/// when rendered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    /// Left margin in pixels
    pub margin_left: Option<f64>,
    /// Top margin in pixels
    pub margin_top: Option<f64>,
    /// Width in pixels
    pub width: Option<f64>,
    /// Height in pixels
    pub height: Option<f64>,
    pub position: Option<CssPosition>,
    /// `translate(x, y)` offset in pixels
    pub translate: Option<Point>,
    pub object_fit: Option<ObjectFit>,
}

impl Style {
    /// Sets both margins so that `anchor` lands on the element's origin.
    pub fn set_anchor(&mut self, anchor: Point) {
        let offset = anchor.negate();
        self.margin_left = Some(offset.x);
        self.margin_top = Some(offset.y);
    }

    pub fn set_size(&mut self, size: Point) {
        self.width = Some(size.x);
        self.height = Some(size.y);
    }

    /// Renders the inline `style` attribute value, declarations in a fixed order.
    pub fn to_css(&self) -> String {
        let mut declarations = Vec::new();

        if let Some(position) = self.position {
            declarations.push(format!("position: {position}"));
        }
        if let Some(offset) = self.translate {
            declarations.push(format!(
                "transform: translate({}px, {}px)",
                offset.x, offset.y
            ));
        }
        if let Some(margin) = self.margin_left {
            declarations.push(format!("margin-left: {margin}px"));
        }
        if let Some(margin) = self.margin_top {
            declarations.push(format!("margin-top: {margin}px"));
        }
        if let Some(width) = self.width {
            declarations.push(format!("width: {width}px"));
        }
        if let Some(height) = self.height {
            declarations.push(format!("height: {height}px"));
        }
        if let Some(fit) = self.object_fit {
            declarations.push(format!("object-fit: {fit}"));
        }

        declarations.join("; ")
    }

    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }
}
