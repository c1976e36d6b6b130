mod content;
mod node;

pub use content::Content;
pub use node::Element;

use thiserror::Error;

/// Errors reported when validating a markup tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    /// An element in the tree has an empty tag name.
    #[error("element has an empty tag name")]
    EmptyTag,

    /// A tag name contains a character that cannot appear in markup.
    #[error("tag name {tag:?} contains invalid character {ch:?}")]
    InvalidTagChar { tag: String, ch: char },
}

/// Find the first element with the given tag name, depth-first.
pub fn find_by_tag<'a>(root: &'a Element, tag: &str) -> Option<&'a Element> {
    if root.tag == tag {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_by_tag(child, tag) {
                return Some(found);
            }
        }
    }

    None
}

/// Check every tag name in the tree.
///
/// The renderer emits tag names verbatim, so malformed names are caught
/// here instead of producing broken markup.
pub fn validate(root: &Element) -> Result<(), MarkupError> {
    if root.tag.is_empty() {
        return Err(MarkupError::EmptyTag);
    }

    if let Some(ch) = root
        .tag
        .chars()
        .find(|c| c.is_whitespace() || matches!(c, '<' | '>' | '&' | '/' | '"' | '='))
    {
        return Err(MarkupError::InvalidTagChar {
            tag: root.tag.clone(),
            ch,
        });
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            validate(child)?;
        }
    }

    Ok(())
}
