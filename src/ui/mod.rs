pub mod elements;
pub mod style;

pub use elements::{Element, Tag};

pub use style::{CssPosition, ObjectFit, Style};
