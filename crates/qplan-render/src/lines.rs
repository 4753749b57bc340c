//! Connector-bundle layout.
//!
//! For each rendered node, every child connector gets a thickness scaled by
//! its row count and a vertical offset packing the bundle symmetrically
//! around the parent's vertical center, with a fixed gap between bands.

use crate::arrow::{ARROW_POINT_COUNT, arrow_path, snap_tail_y};
use crate::error::{Error, Result};
use crate::geom::Point;
use crate::node::VisualNode;
use crate::tree::{ElementId, NODE_CLASS, ROOT_CLASS, VisualTree};
use qplan_core::PlanDocument;

/// Pixels between the bottom edge of one line and the top edge of the next.
pub const LINE_SEPARATION: f64 = 5.0;

const MIN_THICKNESS: f64 = 2.0;
const MAX_THICKNESS: f64 = 12.0;

/// Fill/stroke hints the renderer applies when painting a connector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub fill: &'static str,
    pub stroke: &'static str,
    pub stroke_width: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            fill: "#E3E3E3",
            stroke: "#505050",
            stroke_width: 0.5,
        }
    }
}

/// One parent/child connector, in diagram-local coordinates.
#[derive(Debug, Clone)]
pub struct Connector {
    pub points: [Point; ARROW_POINT_COUNT],
    pub thickness: f64,
    /// Correlation ids used by hover lookup; node id is absent when the
    /// connector targets a top-level statement.
    pub statement_id: String,
    pub node_id: Option<String>,
    pub style: LineStyle,
}

/// Right-padding the renderer must reserve on a parent's padding container
/// so its connector bundle has room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddingHint {
    pub element: ElementId,
    pub padding_right: f64,
}

#[derive(Debug, Clone, Default)]
pub struct LinePlan {
    pub connectors: Vec<Connector>,
    pub paddings: Vec<PaddingHint>,
}

/// Connector thickness for a row count: natural-log scaled so counts spanning
/// many orders of magnitude stay visually meaningful, clamped to `[2, 12]`.
/// Rows ≤ 1 always yield the minimum.
pub fn rows_to_thickness(rows: f64) -> f64 {
    let rows = if rows > 0.0 { rows } else { 1.0 };
    rows.ln().floor().clamp(MIN_THICKNESS, MAX_THICKNESS)
}

/// Thickness for a node's inbound connector: actual rows when runtime
/// counters exist, estimated rows otherwise, zero for nodes with no backing
/// operator.
pub fn node_thickness(node: &VisualNode<'_>, plan: &PlanDocument<'_>) -> Result<f64> {
    let rows = match node.rel_op(plan)? {
        Some(op) => op.actual_rows().unwrap_or_else(|| op.estimated_rows()),
        None => 0.0,
    };
    Ok(rows_to_thickness(rows))
}

/// Total vertical span of a bundle: thicknesses plus one gap between each
/// adjacent pair. Zero for an empty bundle.
pub fn bundle_span(thicknesses: &[f64], gap: f64) -> f64 {
    if thicknesses.is_empty() {
        return 0.0;
    }
    thicknesses.iter().sum::<f64>() + gap * (thicknesses.len() - 1) as f64
}

/// Packs bands left-to-right from `-total/2`, yielding each band's center
/// offset from the parent's vertical center. Thicknesses `[2, 4, 4]` with a
/// gap of 2 pack to `[-6, -1, 5]`.
pub fn thicknesses_to_offsets(thicknesses: &[f64], gap: f64) -> Vec<f64> {
    let total = bundle_span(thicknesses, gap);
    let mut offsets = Vec::with_capacity(thicknesses.len());
    let mut left = -total / 2.0;
    for &thickness in thicknesses {
        let right = left + thickness;
        offsets.push((left + right) / 2.0);
        left = right + gap;
    }
    offsets
}

/// Walks every rendered node under the `qp-root` element and emits the
/// connector polygons and padding hints for the whole diagram.
pub fn draw_lines(tree: &VisualTree, plan: &PlanDocument<'_>) -> Result<LinePlan> {
    let root = tree
        .elements_with_class(ROOT_CLASS)
        .next()
        .ok_or(Error::NullElement)?;
    let origin = tree.rect(root).origin;

    let mut out = LinePlan::default();
    for element in tree.elements_with_class(NODE_CLASS) {
        let parent = VisualNode::new(tree, Some(element))?;
        draw_lines_for_parent(tree, plan, &parent, origin, &mut out)?;
    }
    Ok(out)
}

fn draw_lines_for_parent(
    tree: &VisualTree,
    plan: &PlanDocument<'_>,
    parent: &VisualNode<'_>,
    origin: Point,
    out: &mut LinePlan,
) -> Result<()> {
    let children = parent.children()?;
    if children.is_empty() {
        return Ok(());
    }

    let thicknesses = children
        .iter()
        .map(|child| node_thickness(child, plan))
        .collect::<Result<Vec<_>>>()?;

    let padding = bundle_span(&thicknesses, LINE_SEPARATION);
    if let Some(target) = padding_target(tree, parent) {
        out.paddings.push(PaddingHint {
            element: target,
            padding_right: padding,
        });
    }

    let offsets = thicknesses_to_offsets(&thicknesses, LINE_SEPARATION);
    tracing::debug!(
        children = children.len(),
        padding,
        "laid out connector bundle"
    );
    for ((child, &thickness), &offset) in children.iter().zip(&thicknesses).zip(&offsets) {
        out.connectors
            .push(connector_between(tree, parent, child, origin, thickness, offset)?);
    }
    Ok(())
}

/// The element the bundle's right-padding applies to: the grandparent of the
/// node element (its outer wrapper's container).
fn padding_target(tree: &VisualTree, parent: &VisualNode<'_>) -> Option<ElementId> {
    tree.parent(parent.element())
        .and_then(|outer| tree.parent(outer))
}

fn connector_between(
    tree: &VisualTree,
    parent: &VisualNode<'_>,
    child: &VisualNode<'_>,
    origin: Point,
    thickness: f64,
    offset: f64,
) -> Result<Connector> {
    let parent_rect = tree.rect(parent.element());
    let child_rect = tree.rect(child.element());

    let to_x = parent_rect.max_x();
    let to_y = parent_rect.center().y;
    let from_x = child_rect.min_x();
    let from_y = snap_tail_y(to_y, child_rect.center().y);

    // Horizontal midpoint between the two boxes; each band shifts the bend by
    // its own offset so stacked bands do not share a vertical.
    let mid_x = to_x / 2.0 + from_x / 2.0;

    let to = Point::new(to_x - origin.x + 1.0, to_y - origin.y + offset);
    let from = Point::new(from_x - origin.x - 1.0, from_y - origin.y);
    let bend_x = mid_x - origin.x - offset;

    Ok(Connector {
        points: arrow_path(to, from, bend_x, thickness),
        thickness,
        statement_id: child.statement_id()?.to_string(),
        node_id: child.node_id().map(str::to_string),
        style: LineStyle::default(),
    })
}
