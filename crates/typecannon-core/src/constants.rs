//! Game constants and tuning parameters.
//!
//! Distances are canvas pixels, times are milliseconds.

// --- Frame timing ---

/// Nominal frame duration used when no previous timestamp exists.
pub const REFERENCE_FRAME_MS: f32 = 16.67;

/// Upper bound on a single tick's elapsed time, applied after host stalls.
pub const MAX_FRAME_MS: f32 = 50.0;

// --- Viewport ---

/// Viewport assumed until the host reports its real size.
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 800.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 600.0;

// --- Scoring & progression ---

/// Score at which level 1 hands over to level 2.
pub const WIN_SCORE: u32 = 1300;

/// Points awarded per character of a destroyed item.
pub const POINTS_PER_CHAR: u32 = 10;

/// Difficulty multiplier at score 0.
pub const BASE_SPEED: f32 = 0.5;

/// Difficulty multiplier gain per milestone.
pub const SPEED_INCREMENT: f32 = 0.05;

/// Score interval between difficulty steps.
pub const SCORE_MILESTONE: u32 = 100;

// --- Spawning ---

/// Spawn interval at round start.
pub const INITIAL_SPAWN_INTERVAL_MS: f32 = 2000.0;

/// Spawn interval floor.
pub const MIN_SPAWN_INTERVAL_MS: f32 = 500.0;

/// Multiplicative decay applied after every spawn.
pub const SPAWN_INTERVAL_DECAY: f32 = 0.995;

/// One-time spawn interval factor applied on the level 1 → 2 transition.
pub const LEVEL_TWO_SPAWN_FACTOR: f32 = 0.8;

/// Probability that a level-1 spawn is a single letter rather than a word.
pub const SINGLE_LETTER_CHANCE: f64 = 0.3;

/// Horizontal distance kept clear of both canvas edges when spawning.
pub const SPAWN_MARGIN_X: f32 = 50.0;

/// Vertical spawn position (just above the visible area).
pub const SPAWN_Y: f32 = -20.0;

/// Range of per-item fall speed factors (px per reference frame at multiplier 1).
pub const FALL_SPEED_MIN: f32 = 0.8;
pub const FALL_SPEED_MAX: f32 = 1.6;

// --- Cannon ---

pub const CANNON_WIDTH: f32 = 20.0;
pub const CANNON_HEIGHT: f32 = 30.0;
pub const BARREL_LENGTH: f32 = 30.0;
pub const BARREL_WIDTH: f32 = 8.0;

/// Base trapezoid width.
pub const CANNON_BASE_WIDTH: f32 = CANNON_WIDTH * 1.5;

/// Base trapezoid height; the nozzle base sits this far above the pivot.
pub const CANNON_BASE_HEIGHT: f32 = CANNON_HEIGHT * 0.8;

/// Pivot distance from the bottom edge on a desktop layout.
pub const CANNON_BOTTOM_OFFSET_DESKTOP: f32 = 10.0;

/// Pivot distance from the bottom edge when the on-screen keyboard is shown.
pub const CANNON_BOTTOM_OFFSET_TOUCH: f32 = 20.0;

/// Clearance between the barrel's reach and the danger line.
pub const DANGER_LINE_GAP: f32 = 20.0;

// --- Text layout ---

/// Advance width of one character of falling text (18px monospace).
pub const CHAR_WIDTH: f32 = 11.0;

// --- Projectiles ---

/// Projectile speed (px/ms).
pub const PROJECTILE_SPEED: f32 = 0.9;

/// Projectile lifetime.
pub const PROJECTILE_LIFETIME_MS: f32 = 800.0;

/// How far outside the view a projectile may travel before it is removed.
pub const PROJECTILE_BOUNDS_MARGIN: f32 = 50.0;

// --- Destruction effects ---

pub const EFFECT_PARTICLE_COUNT_MIN: i32 = 15;
pub const EFFECT_PARTICLE_COUNT_MAX: i32 = 25;
pub const PARTICLE_LIFE_MIN_MS: f32 = 400.0;
pub const PARTICLE_LIFE_MAX_MS: f32 = 800.0;
pub const PARTICLE_SPEED_MIN: f32 = 0.05;
pub const PARTICLE_SPEED_MAX: f32 = 0.25;
pub const PARTICLE_SIZE_MIN: f32 = 2.0;
pub const PARTICLE_SIZE_MAX: f32 = 5.0;

/// Size lost per millisecond.
pub const PARTICLE_SHRINK_RATE: f32 = 0.004;

/// Particles smaller than this are considered spent.
pub const PARTICLE_MIN_SIZE: f32 = 0.5;
