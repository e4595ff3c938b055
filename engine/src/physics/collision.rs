//! Collision primitives
//!
//! Arcade collision against the voxel grid. Bodies are points with a camera
//! height, walls are unit-cell boxes, and hit tests are sphere overlaps.
//!
//! - [`collide_floor`] snaps a body's feet onto a horizontal surface
//! - [`move_outside`] ejects a point from a wall footprint along one axis
//! - [`spheres_overlap`] is the squared-distance hit test (no square root)
//! - [`resolve_body_cell`] applies the per-cell-type rules for one body

use glam::Vec3;

use crate::player::KinematicBody;
use crate::world::{CellKind, FLOOR_HEIGHT, MapCell};

/// Snap a body onto a surface at `floor_y` if its feet have sunk into it.
///
/// The body counts as resting when its feet are at or below the surface but
/// its mid-height (half the camera height) is still above it. Feet are snapped
/// to the surface and downward velocity is cancelled; upward velocity is kept
/// so a jump started this tick survives.
///
/// Returns `true` when the body is now grounded on the surface.
pub fn collide_floor(body: &mut KinematicBody, floor_y: f32) -> bool {
    let feet = body.position.y - body.camera_height;
    let middle = body.position.y - body.camera_height * 0.5;
    if feet <= floor_y && middle > floor_y {
        body.velocity.y = body.velocity.y.max(0.0);
        body.position.y = body.camera_height + floor_y;
        return true;
    }
    false
}

/// Push `position` out of an axis-aligned wall footprint.
///
/// The footprint is `width` x `depth` centred on `center` (XZ only). When the
/// point lies strictly inside, the signed distance to the nearer edge is taken
/// on each axis and the point moves along the axis with the larger distance,
/// onto that edge. Only one axis changes; ties go to Z. Points on or outside
/// the boundary are left alone, so a pushed point is not pushed again.
///
/// Returns `true` if the position was moved.
pub fn move_outside(center: Vec3, width: f32, depth: f32, position: &mut Vec3) -> bool {
    let min_x = center.x - width * 0.5;
    let min_z = center.z - depth * 0.5;
    let (px, pz) = (position.x, position.z);

    if px > min_x && px < min_x + width && pz > min_z && pz < min_z + depth {
        let x_overlap = if px - min_x < width * 0.5 {
            px - min_x
        } else {
            px - min_x - width
        };
        let z_overlap = if pz - min_z < depth * 0.5 {
            pz - min_z
        } else {
            pz - min_z - depth
        };

        // Positive overlap sits nearer the min edge
        if x_overlap.abs() > z_overlap.abs() {
            position.x = if x_overlap > 0.0 { min_x } else { min_x + width };
        } else {
            position.z = if z_overlap > 0.0 { min_z } else { min_z + depth };
        }
        return true;
    }
    false
}

/// Sphere overlap test on squared distances.
#[inline]
pub fn spheres_overlap(a: Vec3, a_radius: f32, b: Vec3, b_radius: f32) -> bool {
    let combined = a_radius + b_radius;
    combined * combined >= a.distance_squared(b)
}

/// Reconcile a body against the world floor and the cell it stands in.
///
/// Vertical contact is always resolved first, then horizontal push-out:
///
/// - empty / spawn: grounded once the feet reach the world floor
/// - short wall: land on the wall top if possible, otherwise push out of the
///   footprint while the body's mid-height is below the top
/// - tall wall: always push out
///
/// Returns `true` if the body was pushed onto a wall edge.
pub fn resolve_body_cell(body: &mut KinematicBody, cell: &MapCell) -> bool {
    collide_floor(body, FLOOR_HEIGHT);

    match (cell.kind, cell.solid) {
        (CellKind::Empty | CellKind::Spawn, _) => {
            if (body.position.y - body.camera_height).floor() <= FLOOR_HEIGHT {
                body.can_jump = true;
            }
            false
        }
        (CellKind::ShortWall, Some(solid)) => {
            let top = solid.top();
            if collide_floor(body, top) {
                body.can_jump = true;
                false
            } else if body.position.y - body.camera_height * 0.5 < top {
                move_outside(solid.center, solid.size.x, solid.size.z, &mut body.position)
            } else {
                false
            }
        }
        (CellKind::TallWall, Some(solid)) => {
            move_outside(solid.center, solid.size.x, solid.size.z, &mut body.position)
        }
        (CellKind::ShortWall | CellKind::TallWall, None) => {
            tracing::warn!(row = cell.row, col = cell.col, "wall cell without a solid");
            false
        }
    }
}
