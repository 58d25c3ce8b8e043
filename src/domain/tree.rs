//! Team hierarchy: an owned binary tree of employees.

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, instrument};

use crate::domain::entities::{Node, Side};
use crate::domain::error::{DomainError, DomainResult};

/// Lifecycle of a [`TeamTree`]. The only transition is
/// `Uninitialized -> Active`, on the first successful [`TeamTree::set_root`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeState {
    Uninitialized,
    Active,
}

/// Outcome of a successful insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    /// Stored name of the matched manager (not the lookup text)
    pub manager: String,
    pub employee: String,
    pub side: Side,
}

impl fmt::Display for Insertion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} added as {} report to {}.",
            self.employee, self.side, self.manager
        )
    }
}

/// Binary reporting hierarchy rooted at the team lead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamTree {
    root: Option<Box<Node>>,
}

impl TeamTree {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    pub fn state(&self) -> TreeState {
        match self.root {
            Some(_) => TreeState::Active,
            None => TreeState::Uninitialized,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Sets the team lead. Succeeds exactly once per tree.
    #[instrument(level = "debug", skip(self))]
    pub fn set_root(&mut self, name: &str) -> DomainResult<&Node> {
        if let Some(root) = &self.root {
            return Err(DomainError::RootAlreadySet(root.name.clone()));
        }
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }
        debug!("team lead: {}", name);
        let root = self.root.insert(Box::new(Node::new(name)));
        Ok(&**root)
    }

    /// Inserts `employee` under the first manager matching `manager` in
    /// breadth-first order, on the side described by `side`.
    #[instrument(level = "debug", skip(self))]
    pub fn insert(&mut self, manager: &str, employee: &str, side: &str) -> DomainResult<Insertion> {
        if self.root.is_none() {
            return Err(DomainError::NoRoot);
        }
        let side: Side = side.parse()?;
        self.insert_at(manager, employee, side)
    }

    /// Typed variant of [`TeamTree::insert`].
    #[instrument(level = "debug", skip(self))]
    pub fn insert_at(
        &mut self,
        manager: &str,
        employee: &str,
        side: Side,
    ) -> DomainResult<Insertion> {
        let root = self.root.as_deref_mut().ok_or(DomainError::NoRoot)?;
        if employee.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }

        let target = find_mut(root, manager)
            .ok_or_else(|| DomainError::ManagerNotFound(manager.to_string()))?;

        if let Some(occupant) = target.child(side) {
            return Err(DomainError::SlotOccupied {
                manager: target.name.clone(),
                side,
                occupant: occupant.name.clone(),
            });
        }

        *target.slot_mut(side) = Some(Box::new(Node::new(employee)));
        debug!("attached {} as {} report of {}", employee, side, target.name);

        Ok(Insertion {
            manager: target.name.clone(),
            employee: employee.to_string(),
            side,
        })
    }

    /// Breadth-first, case-insensitive lookup; the shallowest, leftmost match wins.
    #[instrument(level = "trace", skip(self))]
    pub fn find(&self, name: &str) -> Option<&Node> {
        let mut queue: VecDeque<&Node> = VecDeque::new();
        queue.extend(self.root());

        while let Some(node) = queue.pop_front() {
            if node.is_named(name) {
                return Some(node);
            }
            queue.extend(node.left());
            queue.extend(node.right());
        }
        None
    }

    /// Pre-order listing from the team lead.
    ///
    /// An empty tree yields a single [`Entry::NoStructure`].
    pub fn print(&self) -> Print<'_> {
        match self.root() {
            Some(root) => Print::from_node(root),
            None => Print {
                stack: Vec::new(),
                notice: true,
            },
        }
    }

    /// Pre-order listing of the subtree under `node`, depths relative to `node`.
    pub fn print_from<'a>(&self, node: &'a Node) -> Print<'a> {
        Print::from_node(node)
    }

    /// Number of employees, team lead included.
    pub fn len(&self) -> usize {
        self.print()
            .filter(|entry| matches!(entry, Entry::Employee { .. }))
            .count()
    }

    /// Number of levels; 0 for an empty tree.
    pub fn depth(&self) -> usize {
        self.print()
            .filter_map(|entry| match entry {
                Entry::Employee { depth, .. } => Some(depth + 1),
                Entry::NoStructure => None,
            })
            .max()
            .unwrap_or(0)
    }
}

fn find_mut<'a>(root: &'a mut Node, name: &str) -> Option<&'a mut Node> {
    let mut queue: VecDeque<&'a mut Node> = VecDeque::from([root]);

    while let Some(node) = queue.pop_front() {
        if node.is_named(name) {
            return Some(node);
        }
        let Node { left, right, .. } = node;
        queue.extend(left.as_deref_mut());
        queue.extend(right.as_deref_mut());
    }
    None
}

/// One line of a hierarchy listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<'a> {
    Employee { name: &'a str, depth: usize },
    NoStructure,
}

impl fmt::Display for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::domain::Layout::default().render(self))
    }
}

/// Lazy pre-order traversal; cheap to clone and restart.
#[derive(Debug, Clone)]
pub struct Print<'a> {
    stack: Vec<(&'a Node, usize)>,
    notice: bool,
}

impl<'a> Print<'a> {
    fn from_node(node: &'a Node) -> Self {
        Self {
            stack: vec![(node, 0)],
            notice: false,
        }
    }
}

impl<'a> Iterator for Print<'a> {
    type Item = Entry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.notice {
            self.notice = false;
            return Some(Entry::NoStructure);
        }
        let (node, depth) = self.stack.pop()?;
        // right first so left is visited first
        if let Some(right) = node.right() {
            self.stack.push((right, depth + 1));
        }
        if let Some(left) = node.left() {
            self.stack.push((left, depth + 1));
        }
        Some(Entry::Employee {
            name: node.name(),
            depth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(tree: &TeamTree) -> Vec<&str> {
        tree.print()
            .filter_map(|entry| match entry {
                Entry::Employee { name, .. } => Some(name),
                Entry::NoStructure => None,
            })
            .collect()
    }

    #[test]
    fn given_empty_tree_when_checking_state_then_uninitialized() {
        let tree = TeamTree::new();
        assert_eq!(tree.state(), TreeState::Uninitialized);
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.depth(), 0);
    }

    #[test]
    fn given_root_when_setting_again_then_keeps_first_lead() {
        let mut tree = TeamTree::new();
        tree.set_root("Alice").unwrap();

        let result = tree.set_root("Zed");

        assert_eq!(result, Err(DomainError::RootAlreadySet("Alice".into())));
        assert_eq!(tree.root().map(Node::name), Some("Alice"));
        assert_eq!(tree.state(), TreeState::Active);
    }

    #[test]
    fn given_blank_lead_when_setting_root_then_rejects() {
        let mut tree = TeamTree::new();
        assert_eq!(tree.set_root("   "), Err(DomainError::EmptyName));
        assert!(tree.is_empty());
    }

    #[test]
    fn given_duplicate_names_when_inserting_then_shallowest_match_wins() {
        let mut tree = TeamTree::new();
        tree.set_root("Alice").unwrap();
        tree.insert("Alice", "Bob", "left").unwrap();
        tree.insert("Alice", "Sam", "right").unwrap();
        tree.insert("Bob", "Sam", "left").unwrap();

        tree.insert("sam", "Eve", "left").unwrap();

        let sam = tree.root().and_then(Node::right).unwrap();
        assert_eq!(sam.left().map(Node::name), Some("Eve"));
        let deep_sam = tree.root().and_then(Node::left).and_then(Node::left).unwrap();
        assert!(deep_sam.is_leaf());
    }

    #[test]
    fn given_equal_depth_duplicates_when_inserting_then_left_match_wins() {
        let mut tree = TeamTree::new();
        tree.set_root("Alice").unwrap();
        tree.insert("Alice", "Kim", "right").unwrap();
        tree.insert("Alice", "Kim", "left").unwrap();

        let status = tree.insert("KIM", "Lee", "r").unwrap();

        assert_eq!(status.manager, "Kim");
        let left_kim = tree.root().and_then(Node::left).unwrap();
        assert_eq!(left_kim.right().map(Node::name), Some("Lee"));
    }

    #[test]
    fn given_degenerate_chain_when_printing_then_depths_increase() {
        let mut tree = TeamTree::new();
        tree.set_root("e0").unwrap();
        for i in 1..2_000 {
            tree.insert_at(&format!("e{}", i - 1), &format!("e{i}"), Side::Left)
                .unwrap();
        }

        assert_eq!(tree.len(), 2_000);
        assert_eq!(tree.depth(), 2_000);
        assert_eq!(names(&tree).last(), Some(&"e1999"));
    }

    #[test]
    fn given_subtree_when_printing_from_node_then_depth_is_relative() {
        let mut tree = TeamTree::new();
        tree.set_root("Alice").unwrap();
        tree.insert("Alice", "Bob", "left").unwrap();
        tree.insert("Bob", "Dan", "right").unwrap();

        let bob = tree.find("bob").unwrap();
        let entries: Vec<_> = tree.print_from(bob).collect();

        assert_eq!(
            entries,
            vec![
                Entry::Employee { name: "Bob", depth: 0 },
                Entry::Employee { name: "Dan", depth: 1 },
            ]
        );
    }

    #[test]
    fn test_insertion_display() {
        let status = Insertion {
            manager: "Alice".into(),
            employee: "Bob".into(),
            side: Side::Left,
        };
        assert_eq!(status.to_string(), "Bob added as LEFT report to Alice.");
    }
}
