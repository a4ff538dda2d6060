//! Spawn system: drops a new letter, word or fruit when the spawn interval has elapsed.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, trace};

use typecannon_core::constants::*;
use typecannon_core::enums::ItemCategory;
use typecannon_core::types::Viewport;

use crate::config::SimConfig;
use crate::rng::{pick, random_letter, random_range};
use crate::round::RoundState;
use crate::world_setup;

/// Check the spawn timer and spawn at most one item.
/// Returns the new entity when a spawn fired.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    round: &mut RoundState,
    tables: &SimConfig,
    viewport: &Viewport,
    now_ms: f64,
) -> Option<hecs::Entity> {
    if !round.spawn_due(now_ms) {
        return None;
    }

    let x = random_range(rng, SPAWN_MARGIN_X, viewport.width - SPAWN_MARGIN_X);
    let (text, category) = choose_item(rng, round.level, tables);
    let fall_speed = random_range(rng, FALL_SPEED_MIN, FALL_SPEED_MAX);
    let spawn_seq = round.next_spawn_seq;

    trace!(%text, x, spawn_seq, "spawn");
    let entity = world_setup::spawn_item(world, text, category, x, fall_speed, spawn_seq);

    round.next_spawn_seq += 1;
    round.last_spawn_ms = Some(now_ms);
    round.spawn_interval_ms =
        (round.spawn_interval_ms * SPAWN_INTERVAL_DECAY).max(MIN_SPAWN_INTERVAL_MS);

    Some(entity)
}

/// Pick text and category for the current level, falling back to a single
/// letter when the chosen table is empty.
fn choose_item(rng: &mut ChaCha8Rng, level: u32, tables: &SimConfig) -> (String, ItemCategory) {
    if level >= 2 {
        if let Some(fruit) = pick(rng, &tables.fruits) {
            return (
                fruit.text.clone(),
                ItemCategory::Fruit {
                    glyph: fruit.glyph.clone(),
                },
            );
        }
        debug!("fruit table empty, spawning a letter");
        return letter(rng);
    }

    if rng.gen_bool(SINGLE_LETTER_CHANCE) {
        return letter(rng);
    }

    match pick(rng, &tables.words) {
        Some(word) => (word.clone(), ItemCategory::Word),
        None => {
            debug!("word table empty, spawning a letter");
            letter(rng)
        }
    }
}

fn letter(rng: &mut ChaCha8Rng) -> (String, ItemCategory) {
    (random_letter(rng).to_string(), ItemCategory::Letter)
}
