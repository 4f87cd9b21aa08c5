//! Render output
//!
//! Views render to a small tree of text nodes. The terminal driver prints it
//! with [`Node::to_text`]; tests search it with [`Node::contains_text`].

use std::fmt::Write;

/// A rendered element
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Heading(String),
    Paragraph(String),
    Small(String),
    Button {
        /// Element key used to address clicks
        key: &'static str,
        label: String,
        disabled: bool,
        danger: bool,
    },
    List {
        title: String,
        items: Vec<String>,
    },
    Group(Vec<Node>),
}

impl Node {
    pub fn heading(text: impl Into<String>) -> Self {
        Node::Heading(text.into())
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Node::Paragraph(text.into())
    }

    pub fn small(text: impl Into<String>) -> Self {
        Node::Small(text.into())
    }

    pub fn button(key: &'static str, label: impl Into<String>) -> Self {
        Node::Button {
            key,
            label: label.into(),
            disabled: false,
            danger: false,
        }
    }

    /// Mark a button node disabled. No-op on other nodes.
    pub fn disabled(mut self, value: bool) -> Self {
        if let Node::Button { disabled, .. } = &mut self {
            *disabled = value;
        }
        self
    }

    /// Mark a button node destructive. No-op on other nodes.
    pub fn danger(mut self, value: bool) -> Self {
        if let Node::Button { danger, .. } = &mut self {
            *danger = value;
        }
        self
    }

    /// Whether any text in the tree contains `needle`
    pub fn contains_text(&self, needle: &str) -> bool {
        match self {
            Node::Heading(text) | Node::Paragraph(text) | Node::Small(text) => {
                text.contains(needle)
            }
            Node::Button { label, .. } => label.contains(needle),
            Node::List { title, items } => {
                title.contains(needle) || items.iter().any(|item| item.contains(needle))
            }
            Node::Group(children) => children.iter().any(|child| child.contains_text(needle)),
        }
    }

    /// Find a button by element key
    pub fn find_button(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Button { key: k, .. } if *k == key => Some(self),
            Node::Group(children) => children.iter().find_map(|child| child.find_button(key)),
            _ => None,
        }
    }

    /// Plain-text rendering, one element per line
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        self.write_text(0, &mut out);
        out
    }

    fn write_text(&self, depth: usize, out: &mut String) {
        let indent = "  ".repeat(depth);
        // Writing to a String cannot fail
        let _ = match self {
            Node::Heading(text) => writeln!(out, "{indent}# {text}"),
            Node::Paragraph(text) => writeln!(out, "{indent}{text}"),
            Node::Small(text) => writeln!(out, "{indent}({text})"),
            Node::Button {
                key,
                label,
                disabled,
                danger,
            } => {
                let mut flags = String::new();
                if *disabled {
                    flags.push_str(" disabled");
                }
                if *danger {
                    flags.push_str(" danger");
                }
                writeln!(out, "{indent}[{label}] <{key}>{flags}")
            }
            Node::List { title, items } => {
                let _ = writeln!(out, "{indent}{title}");
                for item in items {
                    let _ = writeln!(out, "{indent}  - {item}");
                }
                Ok(())
            }
            Node::Group(children) => {
                for child in children {
                    child.write_text(depth, out);
                }
                Ok(())
            }
        };
    }
}
