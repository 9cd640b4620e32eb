//! Abstract markup tree.
//!
//! This module defines [`Node`], the markup representation every renderer
//! produces. A node carries a tag, an ordered attribute list, its own text
//! content, and child nodes: just enough structure for templates to be built,
//! serialized to markup strings, and diffed in place by
//! [`diff`](crate::ui::diff).

/// One element of a markup tree.
///
/// Equality is structural and deep: two nodes compare equal only when their
/// tags, attributes, text, and entire subtrees match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<Node>,
}

impl Node {
    /// Creates an empty element with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            text: String::new(),
            children: Vec::new(),
        }
    }

    /// Appends an attribute. Builder-style, consumes and returns the node.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Sets the node's own text content.
    #[must_use]
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Appends every child from an iterator.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Self>) -> Self {
        self.children.extend(children);
        self
    }

    /// Returns the value of an attribute, if present.
    #[must_use]
    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Flattens the tree into document order (the node itself first, then its
    /// children depth-first).
    ///
    /// This is the order the index-aligned diff pairs elements in.
    #[must_use]
    pub fn flatten(&self) -> Vec<&Self> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a Self>) {
        out.push(self);
        for child in &self.children {
            child.collect(out);
        }
    }

    /// Serializes the tree to an indented markup string.
    #[must_use]
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out, 0);
        out
    }

    fn write_markup(&self, out: &mut String, depth: usize) {
        let indent = "  ".repeat(depth);
        out.push_str(&indent);
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }

        if self.text.is_empty() && self.children.is_empty() {
            out.push_str(" />\n");
            return;
        }

        out.push('>');
        if !self.text.is_empty() {
            out.push_str(&self.text);
        }
        if self.children.is_empty() {
            out.push_str(&format!("</{}>\n", self.tag));
            return;
        }

        out.push('\n');
        for child in &self.children {
            child.write_markup(out, depth + 1);
        }
        out.push_str(&indent);
        out.push_str(&format!("</{}>\n", self.tag));
    }
}
