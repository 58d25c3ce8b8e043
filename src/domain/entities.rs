//! Domain entities: employees and the two report slots under them

use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// One of the two fixed report slots every employee has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Short label used by the box-drawing display.
    pub fn tag(self) -> &'static str {
        match self {
            Side::Left => "L",
            Side::Right => "R",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "LEFT"),
            Side::Right => write!(f, "RIGHT"),
        }
    }
}

/// Accepts `left`/`l` and `right`/`r`, ignoring case and surrounding whitespace.
impl FromStr for Side {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "left" | "l" => Ok(Side::Left),
            "right" | "r" => Ok(Side::Right),
            _ => Err(DomainError::InvalidSide(s.to_string())),
        }
    }
}

/// An employee in the hierarchy.
///
/// Each node exclusively owns its reports, so a node is reachable from exactly
/// one parent slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub(crate) name: String,
    pub(crate) left: Option<Box<Node>>,
    pub(crate) right: Option<Box<Node>>,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            left: None,
            right: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    pub fn child(&self, side: Side) -> Option<&Node> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    pub(crate) fn slot_mut(&mut self, side: Side) -> &mut Option<Box<Node>> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Case-insensitive name comparison used for manager lookup.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Releases reports from a worklist so a long one-sided chain does not
/// recurse once per level.
impl Drop for Node {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_new_node_when_created_then_both_slots_empty() {
        let node = Node::new("Alice");
        assert_eq!(node.name(), "Alice");
        assert!(node.left().is_none());
        assert!(node.right().is_none());
        assert!(node.is_leaf());
    }

    #[test]
    fn given_mixed_case_when_matching_name_then_ignores_case() {
        let node = Node::new("Alice");
        assert!(node.is_named("ALICE"));
        assert!(node.is_named("alice"));
        assert!(!node.is_named("Alicia"));
    }

    #[test]
    fn given_padded_short_form_when_parsing_side_then_normalizes() {
        assert_eq!(" R ".parse::<Side>(), Ok(Side::Right));
        assert_eq!("Left".parse::<Side>(), Ok(Side::Left));
    }

    #[test]
    fn given_unknown_side_when_parsing_then_keeps_raw_input() {
        assert_eq!(
            "up".parse::<Side>(),
            Err(DomainError::InvalidSide("up".to_string()))
        );
    }

    #[test]
    fn given_deep_chain_when_dropped_then_no_stack_overflow() {
        let mut root = Node::new("e0");
        let mut tail = &mut root;
        for i in 1..200_000 {
            tail = &mut **tail.left.insert(Box::new(Node::new(format!("e{i}"))));
        }

        drop(root);
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Left.to_string(), "LEFT");
        assert_eq!(Side::Right.to_string(), "RIGHT");
    }
}
