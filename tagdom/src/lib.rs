pub mod build;
pub mod element;
pub mod html;
pub mod render;

pub use build::{configure, configured};
pub use element::{find_by_tag, validate, Content, Element, MarkupError};
pub use render::{render, render_pretty};
