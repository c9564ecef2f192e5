use crate::ui::style::Style;

/// Element kinds the marker layer produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Img,
    Div,
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tag::Img => write!(f, "img"),
            Tag::Div => write!(f, "div"),
        }
    }
}

/// A detached visual element. The caller owns it and is responsible for
/// attaching it to, and removing it from, whatever surface draws the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: Tag,
    pub src: Option<String>,
    pub class_name: String,
    pub style: Style,
    pub cross_origin: Option<String>,
    pub title: Option<String>,
    children: Vec<Element>,
}

impl Element {
    fn with_tag(tag: Tag) -> Self {
        Self {
            tag,
            src: None,
            class_name: String::new(),
            style: Style::default(),
            cross_origin: None,
            title: None,
            children: Vec::new(),
        }
    }

    /// Creates an image element pointing at `src`
    pub fn image(src: impl Into<String>) -> Self {
        let mut element = Self::with_tag(Tag::Img);
        element.src = Some(src.into());
        element
    }

    /// Creates an empty generic container
    pub fn container() -> Self {
        Self::with_tag(Tag::Div)
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn is_image(&self) -> bool {
        self.tag == Tag::Img
    }

    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }

    /// Renders the element tree as an HTML fragment.
    pub fn to_html(&self) -> String {
        let mut html = format!("<{}", self.tag);

        if let Some(src) = &self.src {
            push_attribute(&mut html, "src", src);
        }
        if !self.class_name.is_empty() {
            push_attribute(&mut html, "class", &self.class_name);
        }
        if !self.style.is_empty() {
            push_attribute(&mut html, "style", &self.style.to_css());
        }
        if let Some(cross_origin) = &self.cross_origin {
            push_attribute(&mut html, "crossorigin", cross_origin);
        }
        if let Some(title) = &self.title {
            push_attribute(&mut html, "title", title);
        }

        match self.tag {
            Tag::Img => html.push('>'),
            Tag::Div => {
                html.push('>');
                for child in &self.children {
                    html.push_str(&child.to_html());
                }
                html.push_str("</div>");
            }
        }
        html
    }
}

fn push_attribute(html: &mut String, name: &str, value: &str) {
    html.push(' ');
    html.push_str(name);
    html.push_str("=\"");
    for c in value.chars() {
        match c {
            '&' => html.push_str("&amp;"),
            '"' => html.push_str("&quot;"),
            '<' => html.push_str("&lt;"),
            '>' => html.push_str("&gt;"),
            _ => html.push(c),
        }
    }
    html.push('"');
}
