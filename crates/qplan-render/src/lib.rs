#![forbid(unsafe_code)]

//! Headless layout + hover core for query-plan diagrams.
//!
//! The embedding renderer produces a visual tree of boxes (one per plan
//! operator) and owns all painting; this crate computes everything with real
//! geometry in it:
//!
//! - [`lines::draw_lines`] walks the tree and emits one closed arrow polygon
//!   per parent/child connector, with row-count-scaled thickness and a
//!   symmetric, non-overlapping bundle layout
//! - [`node::VisualNode`] resolves rendered boxes back to the plan document
//! - [`hover::HoverIntentController`] is the debounced show/hide state
//!   machine behind the metrics tooltips built by [`tooltip`]
//!
//! Outputs are deterministic and synchronous; the only suspension point is
//! the injected hover debounce timer.

pub mod arrow;
pub mod error;
pub mod geom;
pub mod hover;
pub mod lines;
pub mod node;
pub mod tooltip;
pub mod tree;

pub use error::{Error, Result};
pub use hover::{DebounceTimer, HOVER_DEBOUNCE, HoverIntentController, TooltipSurface};
pub use lines::{Connector, LINE_SEPARATION, LinePlan, LineStyle, PaddingHint, draw_lines};
pub use node::VisualNode;
pub use tooltip::{TooltipContent, TooltipRow, connector_tooltip, convert_size, metrics_tooltip};
pub use tree::{ElementId, VisualElement, VisualTree};
