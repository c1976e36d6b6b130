#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
}

impl Content {
    /// Number of child elements (0 for text or empty content).
    pub fn child_count(&self) -> usize {
        match self {
            Content::Children(children) => children.len(),
            _ => 0,
        }
    }
}
