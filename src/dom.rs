//! A small in-memory element tree standing in for the browser DOM.
//!
//! Renderers and event handlers mutate a [`Document`] through [`NodeId`]
//! handles; [`Document::to_html`] serializes the result. Text and
//! [`Document::set_attribute`] values are escaped at serialization time;
//! inner HTML and [`Document::set_raw_attribute`] values are written as-is.

use crate::markup::Markup;
use crate::sanitize::remove_html;

const VOID_ELEMENTS: [&str; 5] = ["img", "input", "meta", "link", "br"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum Content {
    Children(Vec<NodeId>),
    Text(String),
    Html(Markup),
}

#[derive(Debug, Clone)]
struct Attribute {
    name: String,
    value: String,
    escaped: bool,
}

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: Vec<Attribute>,
    styles: Vec<(String, String)>,
    parent: Option<NodeId>,
    content: Content,
}

impl Element {
    fn new(tag: &str, classes: &[&str], parent: Option<NodeId>) -> Self {
        Element {
            tag: tag.to_string(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            attributes: Vec::new(),
            styles: Vec::new(),
            parent,
            content: Content::Children(Vec::new()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
}

impl Document {
    pub fn new(root_tag: &str) -> Self {
        Document {
            nodes: vec![Element::new(root_tag, &[], None)],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append a new element under `parent`. Any text or HTML previously set
    /// on `parent` is replaced by its element children.
    pub fn append(&mut self, parent: NodeId, tag: &str, classes: &[&str]) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Element::new(tag, classes, Some(parent)));

        let parent = &mut self.nodes[parent.0];
        match &mut parent.content {
            Content::Children(children) => children.push(id),
            content => *content = Content::Children(vec![id]),
        }
        id
    }

    /// Append an element holding only `text`.
    pub fn append_text(&mut self, parent: NodeId, tag: &str, classes: &[&str], text: &str) -> NodeId {
        let id = self.append(parent, tag, classes);
        self.set_text(id, text);
        id
    }

    pub fn tag(&self, node: NodeId) -> &str {
        &self.nodes[node.0].tag
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        match &self.nodes[node.0].content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn set_text(&mut self, node: NodeId, text: &str) {
        self.nodes[node.0].content = Content::Text(text.to_string());
    }

    /// Text set with [`Document::set_text`], if that is the node's content.
    pub fn text(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node.0].content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn set_inner_html(&mut self, node: NodeId, html: Markup) {
        self.nodes[node.0].content = Content::Html(html);
    }

    pub fn inner_html(&self, node: NodeId) -> Option<&Markup> {
        match &self.nodes[node.0].content {
            Content::Html(html) => Some(html),
            _ => None,
        }
    }

    /// Set an attribute whose value may carry server data; it is escaped on
    /// serialization.
    pub fn set_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.put_attribute(node, name, value, true);
    }

    /// Set an attribute written verbatim. Only for values owned by this
    /// crate, such as `charset` or `type`.
    pub fn set_raw_attribute(&mut self, node: NodeId, name: &str, value: &str) {
        self.put_attribute(node, name, value, false);
    }

    fn put_attribute(&mut self, node: NodeId, name: &str, value: &str, escaped: bool) {
        let attributes = &mut self.nodes[node.0].attributes;
        match attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => {
                existing.value = value.to_string();
                existing.escaped = escaped;
            }
            None => attributes.push(Attribute {
                name: name.to_string(),
                value: value.to_string(),
                escaped,
            }),
        }
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes[node.0]
            .attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    pub fn set_style(&mut self, node: NodeId, property: &str, value: &str) {
        set_pair(&mut self.nodes[node.0].styles, property, value);
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        get_pair(&self.nodes[node.0].styles, property)
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes[node.0].classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if !self.has_class(node, class) {
            self.nodes[node.0].classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        self.nodes[node.0].classes.retain(|c| c != class);
    }

    /// Returns whether the class is present afterwards.
    pub fn toggle_class(&mut self, node: NodeId, class: &str) -> bool {
        if self.has_class(node, class) {
            self.remove_class(node, class);
            false
        } else {
            self.add_class(node, class);
            true
        }
    }

    /// Nearest inclusive ancestor carrying `class`.
    pub fn closest(&self, node: NodeId, class: &str) -> Option<NodeId> {
        let mut current = Some(node);
        while let Some(id) = current {
            if self.has_class(id, class) {
                return Some(id);
            }
            current = self.parent(id);
        }
        None
    }

    /// All attached elements carrying `class`, in document order.
    pub fn select_all(&self, class: &str) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            if self.has_class(id, class) {
                found.push(id);
            }
            stack.extend(self.children(id).iter().rev());
        }
        found
    }

    pub fn select(&self, class: &str) -> Option<NodeId> {
        self.select_all(class).into_iter().next()
    }

    /// Serialize the whole document, prefixed with the HTML5 doctype.
    pub fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html>\n");
        self.write_node(self.root(), &mut out);
        out
    }

    fn write_node(&self, node: NodeId, out: &mut String) {
        let element = &self.nodes[node.0];
        out.push('<');
        out.push_str(&element.tag);

        // Class names and styles only ever come from this crate.
        if !element.classes.is_empty() {
            write_raw_attribute(out, "class", &element.classes.join(" "));
        }
        for attribute in &element.attributes {
            if attribute.escaped {
                write_raw_attribute(out, &attribute.name, &remove_html(&attribute.value));
            } else {
                write_raw_attribute(out, &attribute.name, &attribute.value);
            }
        }
        if !element.styles.is_empty() {
            let style = element
                .styles
                .iter()
                .map(|(property, value)| format!("{}:{}", property, value))
                .collect::<Vec<_>>()
                .join(";");
            write_raw_attribute(out, "style", &style);
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&element.tag.as_str()) {
            return;
        }

        match &element.content {
            Content::Children(children) => {
                for child in children {
                    self.write_node(*child, out);
                }
            }
            Content::Text(text) => out.push_str(&remove_html(text)),
            Content::Html(html) => out.push_str(html.as_str()),
        }

        out.push_str("</");
        out.push_str(&element.tag);
        out.push('>');
    }
}

fn write_raw_attribute(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(value);
    out.push('"');
}

fn set_pair(pairs: &mut Vec<(String, String)>, name: &str, value: &str) {
    match pairs.iter_mut().find(|(key, _)| key == name) {
        Some((_, existing)) => *existing = value.to_string(),
        None => pairs.push((name.to_string(), value.to_string())),
    }
}

fn get_pair<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}
