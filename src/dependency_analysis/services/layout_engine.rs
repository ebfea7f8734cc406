use crate::dependency_analysis::domain::name_order::compare_names;
use crate::dependency_analysis::domain::{
    DependencyGraph, GraphLayout, LayoutEdge, LayoutNode, LayoutOptions, NodeRole, RemovalImpact,
};
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

const COLUMN_GAP: f64 = 210.0;
const ROW_GAP: f64 = 52.0;
const MARGIN: f64 = 56.0;
/// Horizontal room reserved for the node box left of its anchor
const NODE_INSET_X: f64 = 40.0;
const EXTRA_WIDTH: f64 = 80.0;
const EXTRA_HEIGHT: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// Follow `dependencies` (downstream)
    Forward,
    /// Follow `dependents` (upstream)
    Backward,
}

/// A name reached from the focus in at least one direction
#[derive(Debug)]
struct Candidate<'g> {
    name: &'g str,
    forward: Option<usize>,
    backward: Option<usize>,
}

impl Candidate<'_> {
    fn distance(&self) -> usize {
        match (self.forward, self.backward) {
            (Some(f), Some(b)) => f.min(b),
            (Some(d), None) | (None, Some(d)) => d,
            (None, None) => usize::MAX,
        }
    }

    /// Signed level; ties between directions go downstream
    fn level(&self) -> i64 {
        match (self.forward, self.backward) {
            (Some(f), None) => to_level(f),
            (Some(f), Some(b)) if f <= b => to_level(f),
            (_, Some(b)) => -to_level(b),
            (None, None) => 0,
        }
    }
}

fn to_level(distance: usize) -> i64 {
    i64::try_from(distance).unwrap_or(i64::MAX)
}

/// LayoutEngine service projecting a focus neighborhood onto a 2D canvas
///
/// Levels run left to right: dependents of the focus on the left (negative),
/// its dependencies on the right (positive). Output is deterministic for a
/// given graph, focus, and options.
pub struct LayoutEngine;

impl LayoutEngine {
    /// Builds a layout without removal highlighting
    pub fn build(graph: &DependencyGraph, focus: &str, options: LayoutOptions) -> GraphLayout {
        Self::build_with_impact(graph, focus, options, None)
    }

    /// Builds a layout, flagging nodes and edges a removal preview would drop
    ///
    /// # Arguments
    /// * `graph` - The analyzed dependency graph
    /// * `focus` - Package placed at level 0
    /// * `options` - Depth bound per direction and visible node cap
    /// * `impact` - Optional removal preview used for highlighting
    ///
    /// # Returns
    /// The positioned layout, or `GraphLayout::empty()` when `focus` is not in the graph
    pub fn build_with_impact(
        graph: &DependencyGraph,
        focus: &str,
        options: LayoutOptions,
        impact: Option<&RemovalImpact>,
    ) -> GraphLayout {
        if focus.is_empty() || !graph.contains(focus) {
            return GraphLayout::empty();
        }

        let forward = Self::distances(graph, focus, options.depth, Direction::Forward);
        let backward = Self::distances(graph, focus, options.depth, Direction::Backward);
        let visible = Self::rank_and_cap(focus, &forward, &backward, options.max_nodes);

        let removed: HashSet<&str> = impact
            .map(|impact| impact.removed().iter().map(String::as_str).collect())
            .unwrap_or_default();

        let nodes = Self::position(focus, &visible, &removed);
        let edges = Self::visible_edges(graph, &visible, &removed);
        let (width, height) = Self::canvas_size(&nodes);

        tracing::debug!(
            focus,
            depth = options.depth,
            max_nodes = options.max_nodes,
            nodes = nodes.len(),
            edges = edges.len(),
            "built graph layout"
        );

        GraphLayout {
            focus: Some(focus.to_string()),
            nodes,
            edges,
            width,
            height,
        }
    }

    /// Breadth-first shortest hop counts from `focus`, bounded by `depth`
    fn distances<'g>(
        graph: &'g DependencyGraph,
        focus: &'g str,
        depth: usize,
        direction: Direction,
    ) -> HashMap<&'g str, usize> {
        let mut distances: HashMap<&'g str, usize> = HashMap::from([(focus, 0)]);
        let mut queue: VecDeque<(&'g str, usize)> = VecDeque::from([(focus, 0)]);

        while let Some((name, distance)) = queue.pop_front() {
            if distance >= depth {
                continue;
            }
            let Some(node) = graph.node(name) else {
                continue;
            };
            let neighbors = match direction {
                Direction::Forward => node.dependencies(),
                Direction::Backward => node.dependents(),
            };

            let next = distance + 1;
            for neighbor in neighbors {
                if distances.get(neighbor.as_str()).is_some_and(|&known| known <= next) {
                    continue;
                }
                distances.insert(neighbor.as_str(), next);
                queue.push_back((neighbor.as_str(), next));
            }
        }

        distances
    }

    /// Orders candidates by distance then name and keeps at most `max_nodes`
    ///
    /// The focus always ranks first, so it survives any cap.
    fn rank_and_cap<'g>(
        focus: &str,
        forward: &HashMap<&'g str, usize>,
        backward: &HashMap<&'g str, usize>,
        max_nodes: usize,
    ) -> Vec<Candidate<'g>> {
        let names: HashSet<&'g str> = forward.keys().chain(backward.keys()).copied().collect();

        let mut candidates: Vec<Candidate<'g>> = names
            .into_iter()
            .map(|name| Candidate {
                name,
                forward: forward.get(name).copied(),
                backward: backward.get(name).copied(),
            })
            .collect();

        candidates.sort_by(|a, b| {
            let a_focus = a.name == focus;
            let b_focus = b.name == focus;
            b_focus
                .cmp(&a_focus)
                .then_with(|| a.distance().cmp(&b.distance()))
                .then_with(|| compare_names(a.name, b.name))
        });
        candidates.truncate(max_nodes.max(1));
        candidates
    }

    fn position(
        focus: &str,
        visible: &[Candidate<'_>],
        removed: &HashSet<&str>,
    ) -> Vec<LayoutNode> {
        let mut by_level: BTreeMap<i64, Vec<&str>> = BTreeMap::new();
        for candidate in visible {
            let level = if candidate.name == focus {
                0
            } else {
                candidate.level()
            };
            by_level.entry(level).or_default().push(candidate.name);
        }

        let min_level = by_level.keys().next().copied().unwrap_or(0);
        let max_rows = by_level.values().map(Vec::len).max().unwrap_or(1).max(1);
        let center_y = MARGIN + (max_rows - 1) as f64 * ROW_GAP / 2.0;

        let mut nodes = Vec::with_capacity(visible.len());
        for (level, names) in by_level.iter_mut() {
            names.sort_by(|a, b| compare_names(a, b));

            let x = MARGIN + (level - min_level) as f64 * COLUMN_GAP + NODE_INSET_X;
            let start_y = center_y - (names.len() - 1) as f64 * ROW_GAP / 2.0;

            for (row, name) in names.iter().enumerate() {
                let role = if *name == focus {
                    NodeRole::Focus
                } else {
                    NodeRole::for_level(*level)
                };
                nodes.push(LayoutNode {
                    name: name.to_string(),
                    x,
                    y: start_y + row as f64 * ROW_GAP,
                    level: *level,
                    role,
                    removed: removed.contains(name),
                });
            }
        }

        nodes
    }

    /// Edges whose endpoints are both visible, in rank order
    fn visible_edges(
        graph: &DependencyGraph,
        visible: &[Candidate<'_>],
        removed: &HashSet<&str>,
    ) -> Vec<LayoutEdge> {
        let visible_names: HashSet<&str> = visible.iter().map(|c| c.name).collect();

        visible
            .iter()
            .filter_map(|candidate| graph.node(candidate.name))
            .flat_map(|node| {
                node.dependencies()
                    .iter()
                    .filter(|dependency| visible_names.contains(dependency.as_str()))
                    .map(move |dependency| LayoutEdge {
                        from: node.name().to_string(),
                        to: dependency.clone(),
                        removed: removed.contains(node.name())
                            || removed.contains(dependency.as_str()),
                    })
            })
            .collect()
    }

    fn canvas_size(nodes: &[LayoutNode]) -> (f64, f64) {
        let min_level = nodes.iter().map(|n| n.level).min().unwrap_or(0);
        let max_level = nodes.iter().map(|n| n.level).max().unwrap_or(0);

        let mut rows: HashMap<i64, usize> = HashMap::new();
        for node in nodes {
            *rows.entry(node.level).or_default() += 1;
        }
        let max_rows = rows.values().copied().max().unwrap_or(1).max(1);

        let width = (max_level - min_level) as f64 * COLUMN_GAP + MARGIN * 2.0 + EXTRA_WIDTH;
        let height = (max_rows - 1) as f64 * ROW_GAP + MARGIN * 2.0 + EXTRA_HEIGHT;
        (width, height)
    }
}
