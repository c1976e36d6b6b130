use super::Content;

/// One markup element: a tag name, its attributes, and its content.
///
/// Attributes and children keep insertion order; the renderer emits them
/// in the order they were added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub content: Content,
}

impl Element {
    /// Create an element with no attributes and no content.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            content: Content::None,
        }
    }

    /// Create an element and run `config` against it before returning.
    ///
    /// This is the entry point for closure-style tree construction:
    ///
    /// ```
    /// use tagdom::Element;
    ///
    /// let doc = Element::build("table", |t| {
    ///     t.node("tr", |row| {
    ///         row.node("td", |_| {});
    ///     });
    /// });
    /// assert_eq!(doc.to_string(), "<table><tr><td></td></tr></table>");
    /// ```
    pub fn build(tag: impl Into<String>, config: impl FnOnce(&mut Element)) -> Self {
        let mut element = Element::new(tag);
        config(&mut element);
        element
    }

    // Consuming chain

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.push(child);
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    // In-place setters, for use inside configuration closures

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.attrs.push((key.into(), value.into()));
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.content = Content::Text(text.into());
        self
    }

    /// Create a child with `tag`, run the configuration closure against it,
    /// then append it to this element's children.
    ///
    /// Each call appends exactly one child, in call order, no matter how
    /// deeply the closure itself nests further calls.
    pub fn node(&mut self, tag: impl Into<String>, config: impl FnOnce(&mut Element)) -> &mut Self {
        let mut child = Element::new(tag);
        config(&mut child);
        log::trace!("[element] appending <{}> to <{}>", child.tag, self.tag);
        self.push(child)
    }

    /// Append an already-built child.
    pub fn push(&mut self, child: Element) -> &mut Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            // Text content is replaced; an element holds text or children
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    /// The element's children, or an empty slice for text/empty content.
    pub fn child_nodes(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn child_count(&self) -> usize {
        self.content.child_count()
    }
}
