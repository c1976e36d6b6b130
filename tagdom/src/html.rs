//! Free constructors for common HTML tags.
//!
//! Each wraps [`Element::build`] so call sites read as nested markup:
//!
//! ```
//! use tagdom::html::{table, td, tr};
//!
//! let doc = table(|t| {
//!     t.push(tr(|row| {
//!         row.push(td(|_| {}));
//!     }));
//! });
//! assert_eq!(doc.to_string(), "<table><tr><td></td></tr></table>");
//! ```

use crate::element::Element;

pub fn html(config: impl FnOnce(&mut Element)) -> Element {
    Element::build("html", config)
}

pub fn head(config: impl FnOnce(&mut Element)) -> Element {
    Element::build("head", config)
}

pub fn title(config: impl FnOnce(&mut Element)) -> Element {
    Element::build("title", config)
}

pub fn body(config: impl FnOnce(&mut Element)) -> Element {
    Element::build("body", config)
}

pub fn div(config: impl FnOnce(&mut Element)) -> Element {
    Element::build("div", config)
}

pub fn span(config: impl FnOnce(&mut Element)) -> Element {
    Element::build("span", config)
}

pub fn p(config: impl FnOnce(&mut Element)) -> Element {
    Element::build("p", config)
}

pub fn h1(config: impl FnOnce(&mut Element)) -> Element {
    Element::build("h1", config)
}

pub fn h2(config: impl FnOnce(&mut Element)) -> Element {
    Element::build("h2", config)
}

pub fn h3(config: impl FnOnce(&mut Element)) -> Element {
    Element::build("h3", config)
}

pub fn a(config: impl FnOnce(&mut Element)) -> Element {
    Element::build("a", config)
}

pub fn ul(config: impl FnOnce(&mut Element)) -> Element {
    Element::build("ul", config)
}

pub fn ol(config: impl FnOnce(&mut Element)) -> Element {
    Element::build("ol", config)
}

pub fn li(config: impl FnOnce(&mut Element)) -> Element {
    Element::build("li", config)
}

pub fn table(config: impl FnOnce(&mut Element)) -> Element {
    Element::build("table", config)
}

pub fn tr(config: impl FnOnce(&mut Element)) -> Element {
    Element::build("tr", config)
}

pub fn td(config: impl FnOnce(&mut Element)) -> Element {
    Element::build("td", config)
}

pub fn th(config: impl FnOnce(&mut Element)) -> Element {
    Element::build("th", config)
}
