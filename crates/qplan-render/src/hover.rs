//! Debounced hover-intent state machine behind the metrics tooltips.
//!
//! One controller per rendered diagram. The debounce timer and the surface
//! that actually places tooltip elements are injected, so transitions are
//! deterministic under test (no wall-clock waits) and the controller never
//! touches a real clock itself.

use crate::geom::{Point, point};
use crate::tooltip::TooltipContent;
use crate::tree::{ElementId, VisualTree};
use std::time::Duration;

/// How long a pointer must rest on a target before its tooltip shows.
pub const HOVER_DEBOUNCE: Duration = Duration::from_millis(500);

/// Minimum distance kept between a tooltip and the document's top or bottom
/// edge.
const EDGE_MARGIN: f64 = 10.0;

/// One-shot debounce timer. `start` arms (or re-arms) it; the embedding event
/// loop calls [`HoverIntentController::timer_fired`] when it elapses.
pub trait DebounceTimer {
    fn start(&mut self, delay: Duration);
    fn cancel(&mut self);
}

/// Where tooltips materialize. The surface is expected to insert the shown
/// tooltip into the same visual tree and return its element id, so that
/// leave-event absorption can walk its ancestry.
pub trait TooltipSurface {
    fn document_height(&self) -> f64;
    fn tooltip_height(&self, content: &TooltipContent) -> f64;
    fn show(&mut self, content: TooltipContent, position: Point) -> ElementId;
    fn hide(&mut self, tooltip: ElementId);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HoverState {
    Idle,
    Pending { target: ElementId },
    Shown { target: ElementId, tooltip: ElementId },
}

pub struct HoverIntentController<S, T, F> {
    surface: S,
    timer: T,
    build_content: F,
    state: HoverState,
    cursor: Point,
}

impl<S, T, F> HoverIntentController<S, T, F>
where
    S: TooltipSurface,
    T: DebounceTimer,
    F: FnMut(&VisualTree, ElementId) -> Option<TooltipContent>,
{
    pub fn new(surface: S, timer: T, build_content: F) -> Self {
        Self {
            surface,
            timer,
            build_content,
            state: HoverState::Idle,
            cursor: point(0.0, 0.0),
        }
    }

    /// Tracks the cursor; shown tooltips anchor to the last position seen
    /// here.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.cursor = point(x, y);
    }

    /// Pointer entered a hover target. Only an idle controller starts a new
    /// session; a pending or shown one absorbs further enters.
    pub fn pointer_enter(&mut self, target: ElementId) {
        if self.state != HoverState::Idle {
            return;
        }
        self.state = HoverState::Pending { target };
        self.timer.start(HOVER_DEBOUNCE);
    }

    /// The debounce timer elapsed: build content for the pending target and
    /// show it, or return to idle when there is nothing to show. Fires in
    /// any other state are stale and ignored.
    pub fn timer_fired(&mut self, tree: &VisualTree) {
        let HoverState::Pending { target } = self.state else {
            return;
        };
        match (self.build_content)(tree, target) {
            Some(content) => self.show(target, content),
            None => self.state = HoverState::Idle,
        }
    }

    /// Pointer left `target` towards `related`. Leaves that merely bubble out
    /// of the target's or the shown tooltip's own subtree are absorbed;
    /// anything else cancels the pending timer, hides the shown tooltip, and
    /// idles the controller.
    pub fn pointer_leave(
        &mut self,
        tree: &VisualTree,
        target: ElementId,
        related: Option<ElementId>,
    ) {
        if let Some(related) = related {
            if tree.is_ancestor_or_self(target, related) {
                return;
            }
            if let HoverState::Shown { tooltip, .. } = self.state {
                if tree.is_ancestor_or_self(tooltip, related) {
                    return;
                }
            }
        }
        self.timer.cancel();
        self.hide_shown();
        self.state = HoverState::Idle;
    }

    pub fn is_idle(&self) -> bool {
        self.state == HoverState::Idle
    }

    pub fn pending_target(&self) -> Option<ElementId> {
        match self.state {
            HoverState::Pending { target } => Some(target),
            _ => None,
        }
    }

    pub fn shown_tooltip(&self) -> Option<ElementId> {
        match self.state {
            HoverState::Shown { tooltip, .. } => Some(tooltip),
            _ => None,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn show(&mut self, target: ElementId, content: TooltipContent) {
        // Hide-before-show: reentrant shows must never orphan a tooltip.
        self.hide_shown();

        let height = self.surface.tooltip_height(&content);
        let document_height = self.surface.document_height();
        let mut y = self.cursor.y;
        if document_height - (y + height) < EDGE_MARGIN {
            y = document_height - (height + EDGE_MARGIN);
        }
        if y < EDGE_MARGIN {
            y = EDGE_MARGIN;
        }

        let tooltip = self.surface.show(content, point(self.cursor.x, y));
        tracing::debug!(?target, ?tooltip, "tooltip shown");
        self.state = HoverState::Shown { target, tooltip };
    }

    fn hide_shown(&mut self) {
        if let HoverState::Shown { tooltip, .. } = self.state {
            self.surface.hide(tooltip);
            tracing::debug!(?tooltip, "tooltip hidden");
            self.state = HoverState::Idle;
        }
    }
}
