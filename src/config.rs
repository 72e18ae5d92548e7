use crate::constants::*;

/// Tunables for [`crate::field::ParticleField`].
///
/// `Default` reproduces the page's look; tests shrink or zero the odds to
/// keep scenarios deterministic.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    pub orb_count: usize,
    pub sparkle_ceiling: usize,
    pub ambient_spawn_chance: f64,
    pub pointer_spawn_chance: f64,
    pub click_burst: usize,
    pub sparkle_max_life: u32,
    pub gravity: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            orb_count: ORB_COUNT,
            sparkle_ceiling: SPARKLE_CEILING,
            ambient_spawn_chance: AMBIENT_SPAWN_CHANCE,
            pointer_spawn_chance: POINTER_SPAWN_CHANCE,
            click_burst: CLICK_BURST_COUNT,
            sparkle_max_life: SPARKLE_MAX_LIFE,
            gravity: SPARKLE_GRAVITY,
        }
    }
}
