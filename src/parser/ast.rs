use serde::{Deserialize, Serialize};
use std::fmt;

/// Root of a parsed source text
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub struct Program {
    /// Top-level expressions in source order
    pub body: Vec<Node>,
}

/// Expression nodes below the program root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// Function invocation: `(name params...)`
    CallExpression {
        /// Callee name
        name: String,
        /// Arguments in source order, possibly empty
        params: Vec<Node>,
    },

    /// Integer literal, kept as written
    NumberLiteral {
        /// Digits of the literal
        value: String,
    },

    /// String literal without its quotes
    StringLiteral {
        /// Unquoted text
        value: String,
    },
}

impl Node {
    /// Creates a call expression node
    pub fn call(name: impl Into<String>, params: Vec<Node>) -> Self {
        Node::CallExpression {
            name: name.into(),
            params,
        }
    }

    /// Creates a number literal node
    pub fn number(value: impl Into<String>) -> Self {
        Node::NumberLiteral {
            value: value.into(),
        }
    }

    /// Creates a string literal node
    pub fn string(value: impl Into<String>) -> Self {
        Node::StringLiteral {
            value: value.into(),
        }
    }

    /// True for number and string literals
    pub fn is_literal(&self) -> bool {
        matches!(self, Node::NumberLiteral { .. } | Node::StringLiteral { .. })
    }

    /// Number of call expressions on the deepest path through this node
    pub fn depth(&self) -> usize {
        match self {
            Node::CallExpression { params, .. } => {
                1 + params.iter().map(Node::depth).max().unwrap_or(0)
            }
            Node::NumberLiteral { .. } | Node::StringLiteral { .. } => 0,
        }
    }
}

impl Program {
    /// Creates a program from top-level expressions
    pub fn new(body: Vec<Node>) -> Self {
        Program { body }
    }

    /// Deepest call nesting among the top-level expressions
    pub fn depth(&self) -> usize {
        self.body.iter().map(Node::depth).max().unwrap_or(0)
    }

    /// Serializes the tree to JSON in the `{"type": ...}` node form
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::CallExpression { name, params } => {
                write!(f, "({}", name)?;
                for param in params {
                    write!(f, " {}", param)?;
                }
                write!(f, ")")
            }
            Node::NumberLiteral { value } => write!(f, "{}", value),
            Node::StringLiteral { value } => write!(f, "\"{}\"", value),
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, node) in self.body.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}
