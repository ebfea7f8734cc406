use serde::Serialize;

/// Default canvas width of an empty layout
pub const EMPTY_LAYOUT_WIDTH: f64 = 820.0;
/// Default canvas height of an empty layout
pub const EMPTY_LAYOUT_HEIGHT: f64 = 380.0;

/// Traversal limits for a focus-relative layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutOptions {
    pub depth: usize,
    pub max_nodes: usize,
}

impl LayoutOptions {
    pub const DEFAULT_DEPTH: usize = 2;
    pub const MIN_DEPTH: usize = 1;
    pub const MAX_DEPTH: usize = 5;

    pub const DEFAULT_MAX_NODES: usize = 120;
    pub const MIN_MAX_NODES: usize = 25;
    pub const MAX_MAX_NODES: usize = 400;

    pub fn new(depth: usize, max_nodes: usize) -> Self {
        Self { depth, max_nodes }
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DEPTH, Self::DEFAULT_MAX_NODES)
    }
}

/// Role of a visible node relative to the focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    Focus,
    Dependency,
    Dependent,
}

impl NodeRole {
    /// Role for a non-focus node at the given signed level
    pub fn for_level(level: i64) -> Self {
        if level >= 0 {
            NodeRole::Dependency
        } else {
            NodeRole::Dependent
        }
    }
}

/// A positioned node in the layout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutNode {
    pub name: String,
    pub x: f64,
    pub y: f64,
    /// Signed hop distance from the focus: positive downstream, negative upstream
    pub level: i64,
    pub role: NodeRole,
    /// Set when a removal preview drops this package
    pub removed: bool,
}

/// A dependency edge between two visible nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutEdge {
    pub from: String,
    pub to: String,
    pub removed: bool,
}

/// Rendering-ready projection of a focus neighborhood
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphLayout {
    pub focus: Option<String>,
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<LayoutEdge>,
    pub width: f64,
    pub height: f64,
}

impl GraphLayout {
    /// Layout for a missing or unknown focus
    pub fn empty() -> Self {
        Self {
            focus: None,
            nodes: Vec::new(),
            edges: Vec::new(),
            width: EMPTY_LAYOUT_WIDTH,
            height: EMPTY_LAYOUT_HEIGHT,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn node(&self, name: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.name == name)
    }
}
