// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! A minimal UI node tree.
//!
//! Rows shown by the interface are built as small trees of [`Element`]s,
//! each with a tag, an ordered class list, ordered attributes and children
//! that are either text or nested elements. The tree carries no behaviour;
//! it is what the view produces and what a [`Surface`] stores and draws.

pub(crate) mod surface;

use std::fmt;

pub(crate) use surface::{Document, RowKind, Surface};

/// Class marking the row of the song currently playing.
pub(crate) const SELECTED_CLASS: &str = "songSelected";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Node {
    Text(String),
    Element(Element),
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

/// Builds a new element.
///
/// Classes are added in the given order (duplicates collapse, as with a
/// class list), attributes are set in the given order (a repeated name
/// overwrites the earlier value in place) and children are appended in the
/// given order. Tag names and attribute names are not validated.
///
/// # Examples
///
/// ```
/// let row = create_element("div", vec!["just text".into()], &["nana", "banana"], &[("id", "bla")]);
/// assert_eq!(row.id(), Some("bla"));
/// ```
pub(crate) fn create_element(
    tag: &str,
    children: Vec<Node>,
    classes: &[&str],
    attributes: &[(&str, &str)],
) -> Element {
    let mut element = Element {
        tag: tag.to_string(),
        classes: Vec::with_capacity(classes.len()),
        attributes: Vec::with_capacity(attributes.len()),
        children: Vec::with_capacity(children.len()),
    };

    for class in classes {
        element.add_class(class);
    }

    for (name, value) in attributes {
        element.set_attribute(name, value);
    }

    for child in children {
        element.append(child);
    }

    element
}

impl Element {
    pub(crate) fn tag(&self) -> &str {
        &self.tag
    }

    pub(crate) fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    pub(crate) fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub(crate) fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub(crate) fn children(&self) -> &[Node] {
        &self.children
    }

    pub(crate) fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub(crate) fn set_attribute(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attributes.push((name.to_string(), value.to_string())),
        }
    }

    pub(crate) fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub(crate) fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub(crate) fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub(crate) fn append(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Direct children that are elements, skipping text nodes.
    pub(crate) fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of this element and all of its descendants.
    pub(crate) fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => e.collect_text(out),
            }
        }
    }

    /// Depth-first search for the first descendant carrying `class`.
    pub(crate) fn find_by_class(&self, class: &str) -> Option<&Element> {
        self.child_elements().find_map(|child| {
            if child.has_class(class) {
                Some(child)
            } else {
                child.find_by_class(class)
            }
        })
    }
}

/// Writes the element as markup, e.g. `<p class="width">Title</p>`.
impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}", self.tag())?;

        let classes: Vec<&str> = self.classes().collect();
        if !classes.is_empty() {
            write!(f, " class=\"{}\"", classes.join(" "))?;
        }
        for (name, value) in self.attributes() {
            write!(f, " {}=\"{}\"", name, value)?;
        }
        f.write_str(">")?;

        for child in self.children() {
            match child {
                Node::Text(text) => f.write_str(text)?,
                Node::Element(e) => write!(f, "{}", e)?,
            }
        }

        write!(f, "</{}>", self.tag())
    }
}
