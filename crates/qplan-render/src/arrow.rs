//! Point construction for one stepped connector arrow.

use crate::geom::{Point, point};

/// Vertices in a connector polygon; the first and last equal `to`.
pub const ARROW_POINT_COUNT: usize = 12;

/// Pixel overshoot of the arrowhead beyond the rail width.
const HEAD_OVERSHOOT: f64 = 2.0;

/// Vertical-center differences under this many pixels are positioning noise,
/// not intent; the tail snaps level with the head so the rails stay straight.
pub const SNAP_TOLERANCE: f64 = 5.0;

pub fn snap_tail_y(to_y: f64, from_y: f64) -> f64 {
    if (from_y - to_y).abs() < SNAP_TOLERANCE {
        to_y
    } else {
        from_y
    }
}

/// Closed polygon for an arrow from `from` (flat tail, at the child's left
/// edge) to `to` (arrowhead, at the parent's right edge), with a vertical
/// bend at `bend_x`.
///
/// Total for any finite inputs. The polygon is meant to be filled, not
/// stroked: a triangular head with 2 px overshoot, two rails at
/// `±thickness/2`, a 90°-style bend whose outer rail flips depending on
/// whether the head sits above or below the tail (ties route as "above"),
/// and a flat cap at the tail.
pub fn arrow_path(to: Point, from: Point, bend_x: f64, thickness: f64) -> [Point; ARROW_POINT_COUNT] {
    let w2 = thickness / 2.0;
    let head = w2 + HEAD_OVERSHOOT;
    let outer = if to.y <= from.y { w2 } else { -w2 };
    [
        point(to.x, to.y),
        point(to.x + head, to.y - head),
        point(to.x + head, to.y - w2),
        point(bend_x + outer, to.y - w2),
        point(bend_x + outer, from.y - w2),
        point(from.x, from.y - w2),
        point(from.x, from.y + w2),
        point(bend_x - outer, from.y + w2),
        point(bend_x - outer, to.y + w2),
        point(to.x + head, to.y + w2),
        point(to.x + head, to.y + head),
        point(to.x, to.y),
    ]
}
