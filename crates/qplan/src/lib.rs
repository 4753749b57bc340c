#![forbid(unsafe_code)]

//! `qplan` is a headless core for rendering database execution plans as
//! diagrams: boxes per operator, stepped arrows whose thickness encodes row
//! counts, and debounced metrics tooltips.
//!
//! The embedding renderer owns the HTML/SVG tree and all painting. It hands
//! this crate a [`VisualTree`] describing what it rendered plus the showplan
//! XML, and gets back connector polygons, padding instructions, and tooltip
//! content:
//!
//! - [`PlanDocument`] / [`OperatorMetrics`] — plan resolution and statistics
//! - [`render_plan`] — connector layout for a whole diagram
//! - [`HoverIntentController`] — the tooltip show/hide state machine, one per
//!   diagram

pub use qplan_core::{OperatorMetrics, PlanDocument};
pub use qplan_render::geom;
pub use qplan_render::{
    Connector, DebounceTimer, ElementId, HOVER_DEBOUNCE, HoverIntentController, LINE_SEPARATION,
    LinePlan, LineStyle, PaddingHint, TooltipContent, TooltipRow, TooltipSurface, VisualElement,
    VisualNode, VisualTree, connector_tooltip, convert_size, draw_lines, metrics_tooltip,
};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Plan(#[from] qplan_core::Error),
    #[error(transparent)]
    Render(#[from] qplan_render::Error),
}

/// Rendering options. Recognized keys override the defaults; anything else
/// in the source value is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanOptions {
    /// Install interactive (hover-intent driven) tooltips.
    pub tooltips: bool,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self { tooltips: true }
    }
}

impl PlanOptions {
    pub fn from_value(value: &serde_json::Value) -> Self {
        let mut options = Self::default();
        if let Some(tooltips) = value.get("tooltips").and_then(|v| v.as_bool()) {
            options.tooltips = tooltips;
        }
        options
    }
}

/// Everything the embedding renderer needs to finish a diagram: the connector
/// polygons to paint, the right-paddings to reserve, and whether to wire
/// pointer events into a [`HoverIntentController`].
#[derive(Debug, Clone)]
pub struct RenderedPlan {
    pub connectors: Vec<Connector>,
    pub paddings: Vec<PaddingHint>,
    pub tooltips: bool,
}

/// Lays out every connector of a rendered plan diagram.
pub fn render_plan(
    tree: &VisualTree,
    plan: &PlanDocument<'_>,
    options: &PlanOptions,
) -> Result<RenderedPlan> {
    let lines = draw_lines(tree, plan)?;
    Ok(RenderedPlan {
        connectors: lines.connectors,
        paddings: lines.paddings,
        tooltips: options.tooltips,
    })
}
