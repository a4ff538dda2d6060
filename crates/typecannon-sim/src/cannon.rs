//! Cannon geometry: layout from the viewport, aiming, and nozzle position.
//!
//! Angles are barrel angles: 0 points straight up, positive turns clockwise.

use typecannon_core::components::Cannon;
use typecannon_core::constants::*;
use typecannon_core::enums::LayoutMode;
use typecannon_core::types::{Position, Viewport};

/// Place the cannon's pivot for the given viewport and layout.
/// The aim angle is left untouched.
pub fn layout(cannon: &mut Cannon, viewport: &Viewport, mode: LayoutMode) {
    let offset = match mode {
        LayoutMode::Desktop => CANNON_BOTTOM_OFFSET_DESKTOP,
        LayoutMode::Touch => CANNON_BOTTOM_OFFSET_TOUCH,
    };
    cannon.pivot = Position::new(viewport.width / 2.0, viewport.height - offset);
    cannon.layout = mode;
}

/// Where the barrel is mounted (top centre of the base).
pub fn nozzle_base(cannon: &Cannon) -> Position {
    Position::new(cannon.pivot.x, cannon.pivot.y - CANNON_BASE_HEIGHT)
}

/// Rotate the barrel toward `target`.
pub fn aim_at(cannon: &mut Cannon, target: &Position) {
    let base = nozzle_base(cannon);
    let dx = target.x - base.x;
    let dy = target.y - base.y;
    cannon.angle = dy.atan2(dx) + std::f32::consts::FRAC_PI_2;
}

/// Barrel tip for the current angle; projectiles start here.
pub fn nozzle_position(cannon: &Cannon) -> Position {
    let base = nozzle_base(cannon);
    Position::new(
        base.x + cannon.angle.sin() * BARREL_LENGTH,
        base.y - cannon.angle.cos() * BARREL_LENGTH,
    )
}

/// Vertical coordinate of the danger line: just above the barrel's reach.
pub fn danger_line_y(cannon: &Cannon) -> f32 {
    nozzle_base(cannon).y - BARREL_LENGTH - DANGER_LINE_GAP
}
