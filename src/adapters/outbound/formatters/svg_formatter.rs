use crate::application::read_models::ImpactReadModel;
use crate::dependency_analysis::domain::{LayoutEdge, LayoutNode, NodeRole};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::collections::HashMap;
use std::fmt::Write;

const MIN_VIEW_WIDTH: f64 = 900.0;
const MIN_VIEW_HEIGHT: f64 = 460.0;

const LABEL_MAX_CHARS: usize = 28;
const LABEL_KEEP_CHARS: usize = 25;

const NODE_HEIGHT: f64 = 30.0;
const NODE_MIN_WIDTH: f64 = 128.0;
const NODE_MAX_WIDTH: f64 = 280.0;

const REMOVED_FILL: &str = "#fee2e2";
const REMOVED_STROKE: &str = "#dc2626";
const FOCUS_COLOR: &str = "#1d4ed8";
const DEPENDENCY_FILL: &str = "#eff6ff";
const DEPENDENCY_STROKE: &str = "#60a5fa";
const DEPENDENT_FILL: &str = "#ecfdf5";
const DEPENDENT_STROKE: &str = "#34d399";
const PLAIN_EDGE: &str = "#94a3b8";
const TEXT_COLOR: &str = "#0f172a";

/// SvgFormatter adapter rendering the focus layout as a standalone SVG document
///
/// Edges are drawn first so node boxes sit on top of them.
pub struct SvgFormatter;

impl SvgFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_edge(
        svg: &mut String,
        edge: &LayoutEdge,
        positions: &HashMap<&str, &LayoutNode>,
        focus: Option<&str>,
    ) -> std::fmt::Result {
        let (Some(source), Some(target)) = (
            positions.get(edge.from.as_str()),
            positions.get(edge.to.as_str()),
        ) else {
            return Ok(());
        };

        let touches_focus =
            focus.is_some_and(|focus| edge.from == focus || edge.to == focus);
        let stroke = if edge.removed {
            REMOVED_STROKE
        } else if touches_focus {
            FOCUS_COLOR
        } else {
            PLAIN_EDGE
        };
        let stroke_width = if touches_focus { 2.0 } else { 1.3 };
        let opacity = if touches_focus || edge.removed { 0.95 } else { 0.45 };

        writeln!(
            svg,
            r#"    <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" opacity="{}"/>"#,
            source.x, source.y, target.x, target.y, stroke, stroke_width, opacity
        )
    }

    fn render_node(svg: &mut String, node: &LayoutNode, selected: Option<&str>) -> std::fmt::Result {
        let label = short_package_label(&node.name);
        let width = node_width(&label);
        let is_focus = node.role == NodeRole::Focus;
        let is_selected = selected == Some(node.name.as_str());

        let (fill, stroke) = if node.removed {
            (REMOVED_FILL, REMOVED_STROKE)
        } else {
            match node.role {
                NodeRole::Focus => (FOCUS_COLOR, FOCUS_COLOR),
                NodeRole::Dependency => (DEPENDENCY_FILL, DEPENDENCY_STROKE),
                NodeRole::Dependent => (DEPENDENT_FILL, DEPENDENT_STROKE),
            }
        };
        let text_fill = if is_focus { "#ffffff" } else { TEXT_COLOR };
        let stroke_width = if is_selected { 2.5 } else { 1.3 };
        let opacity = if is_focus || is_selected { 1.0 } else { 0.92 };

        writeln!(svg, "    <g>")?;
        writeln!(svg, "      <title>{}</title>", escape_xml(&node.name))?;
        writeln!(
            svg,
            r#"      <rect x="{}" y="{}" width="{}" height="{}" rx="8" fill="{}" stroke="{}" stroke-width="{}" opacity="{}"/>"#,
            node.x - width / 2.0,
            node.y - NODE_HEIGHT / 2.0,
            width,
            NODE_HEIGHT,
            fill,
            stroke,
            stroke_width,
            opacity
        )?;
        writeln!(
            svg,
            r#"      <text x="{}" y="{}" text-anchor="middle" font-size="11" fill="{}">{}</text>"#,
            node.x,
            node.y + 4.0,
            text_fill,
            escape_xml(&label)
        )?;
        writeln!(svg, "    </g>")
    }

    fn render(model: &ImpactReadModel) -> std::result::Result<String, std::fmt::Error> {
        let layout = &model.layout;
        let view_width = layout.width.max(MIN_VIEW_WIDTH);
        let view_height = layout.height.max(MIN_VIEW_HEIGHT);
        let focus = layout.focus.as_deref();
        let selected = model.package.as_ref().map(|p| p.name.as_str());

        let positions: HashMap<&str, &LayoutNode> = layout
            .nodes
            .iter()
            .map(|node| (node.name.as_str(), node))
            .collect();

        let mut svg = String::new();
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" font-family="ui-monospace, SFMono-Regular, Menlo, monospace">"#,
            w = view_width,
            h = view_height
        )?;
        writeln!(svg, r##"  <rect width="100%" height="100%" fill="#ffffff"/>"##)?;

        if layout.is_empty() {
            writeln!(
                svg,
                r#"  <text x="{}" y="{}" text-anchor="middle" font-size="13" fill="{}">No package selected</text>"#,
                view_width / 2.0,
                view_height / 2.0,
                TEXT_COLOR
            )?;
        } else {
            writeln!(svg, "  <g>")?;
            for edge in &layout.edges {
                Self::render_edge(&mut svg, edge, &positions, focus)?;
            }
            for node in &layout.nodes {
                Self::render_node(&mut svg, node, selected)?;
            }
            writeln!(svg, "  </g>")?;
        }

        writeln!(svg, "</svg>")?;
        Ok(svg)
    }
}

impl Default for SvgFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for SvgFormatter {
    fn format(&self, model: &ImpactReadModel) -> Result<String> {
        Self::render(model).map_err(|e| anyhow::anyhow!("Failed to render SVG: {}", e))
    }
}

/// Names longer than 28 characters keep their first 25 plus `...`
fn short_package_label(name: &str) -> String {
    if name.chars().count() <= LABEL_MAX_CHARS {
        return name.to_string();
    }
    let head: String = name.chars().take(LABEL_KEEP_CHARS).collect();
    format!("{}...", head)
}

fn node_width(label: &str) -> f64 {
    (label.chars().count() as f64 * 7.0 + 26.0).clamp(NODE_MIN_WIDTH, NODE_MAX_WIDTH)
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
