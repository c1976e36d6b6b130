use std::fmt;

use crate::element::{Content, Element};

/// Serialize an element and its descendants to a compact markup string.
///
/// Depth-first: `<tag>` + each child's rendering in attachment order +
/// `</tag>`. An element with no content renders as `<tag></tag>`. Pure;
/// the tree is never mutated, so repeated calls return identical strings.
pub fn render(element: &Element) -> String {
    let mut out = String::new();
    render_element(element, &mut out);
    log::trace!("[render] <{}> rendered to {} bytes", element.tag, out.len());
    out
}

fn render_element(element: &Element, out: &mut String) {
    open_tag(element, out);

    match &element.content {
        Content::None => {}
        Content::Text(text) => escape_into(text, false, out),
        Content::Children(children) => {
            for child in children {
                render_element(child, out);
            }
        }
    }

    close_tag(element, out);
}

/// Serialize with one element per line, indented `indent` spaces per level.
///
/// Elements with no children stay on a single line; the output ends with a
/// newline. Traversal order matches [`render`].
pub fn render_pretty(element: &Element, indent: usize) -> String {
    let mut out = String::new();
    render_pretty_element(element, 0, indent, &mut out);
    out
}

fn render_pretty_element(element: &Element, depth: usize, indent: usize, out: &mut String) {
    let pad = depth * indent;
    push_spaces(out, pad);
    open_tag(element, out);

    match &element.content {
        Content::None => {}
        Content::Text(text) => escape_into(text, false, out),
        Content::Children(children) => {
            out.push('\n');
            for child in children {
                render_pretty_element(child, depth + 1, indent, out);
            }
            push_spaces(out, pad);
        }
    }

    close_tag(element, out);
    out.push('\n');
}

fn push_spaces(out: &mut String, count: usize) {
    for _ in 0..count {
        out.push(' ');
    }
}

fn open_tag(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    for (key, value) in &element.attrs {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        escape_into(value, true, out);
        out.push('"');
    }
    out.push('>');
}

fn close_tag(element: &Element, out: &mut String) {
    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

fn escape_into(raw: &str, in_attr: bool, out: &mut String) {
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' if in_attr => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
