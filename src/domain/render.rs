//! Text renderings of a team hierarchy: indented outline and box-drawing tree.

use termtree::Tree;
use tracing::instrument;

use crate::domain::entities::{Node, Side};
use crate::domain::tree::{Entry, TeamTree};

pub const NO_STRUCTURE: &str = "No team structure available.";

/// Indentation settings for the outline rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Spaces per depth level
    pub indent_width: usize,
    /// Leader printed before each name
    pub marker: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            indent_width: 4,
            marker: "- ".to_string(),
        }
    }
}

impl Layout {
    pub fn new(indent_width: usize, marker: impl Into<String>) -> Self {
        Self {
            indent_width,
            marker: marker.into(),
        }
    }

    pub fn render(&self, entry: &Entry<'_>) -> String {
        match entry {
            Entry::Employee { name, depth } => format!(
                "{}{}{}",
                " ".repeat(self.indent_width * depth),
                self.marker,
                name
            ),
            Entry::NoStructure => NO_STRUCTURE.to_string(),
        }
    }

    pub fn render_all(&self, tree: &TeamTree) -> Vec<String> {
        tree.print().map(|entry| self.render(&entry)).collect()
    }
}

/*
termtree needs an owned Tree<String>; children are tagged with their slot so
a lone right report is not mistaken for a left one.
 */
pub trait TermTreeConvert {
    fn to_termtree(&self) -> Tree<String>;

    /// Box-drawing text; the intermediate tree is taken apart without recursion.
    fn render_termtree(&self) -> String {
        let tree = self.to_termtree();
        let rendered = tree.to_string();
        dismantle(tree);
        rendered
    }
}

impl TermTreeConvert for TeamTree {
    #[instrument(level = "debug", skip(self))]
    fn to_termtree(&self) -> Tree<String> {
        match self.root() {
            Some(root) => build_tree(root),
            None => Tree::new(NO_STRUCTURE.to_string()),
        }
    }
}

/// Builds bottom-up from a pre-order listing: a parent always precedes its
/// children, so popping from the back attaches every child before its parent.
fn build_tree(root: &Node) -> Tree<String> {
    let mut built: Vec<Tree<String>> = Vec::new();
    let mut parents: Vec<usize> = Vec::new();
    let mut stack: Vec<(&Node, String, usize)> = vec![(root, root.name().to_string(), 0)];

    while let Some((node, label, parent)) = stack.pop() {
        let index = built.len();
        built.push(Tree::new(label));
        parents.push(parent);
        for side in [Side::Right, Side::Left] {
            if let Some(child) = node.child(side) {
                let label = format!("{}: {}", side.tag(), child.name());
                stack.push((child, label, index));
            }
        }
    }

    for index in (1..built.len()).rev() {
        let child = built.remove(index);
        // right is attached first, so left ends up in front
        built[parents[index]].leaves.insert(0, child);
    }
    built.swap_remove(0)
}

/// Drops a termtree level by level instead of through nested `Vec` drops.
pub fn dismantle(tree: Tree<String>) {
    let mut pending = vec![tree];
    while let Some(mut tree) = pending.pop() {
        pending.append(&mut tree.leaves);
    }
}
