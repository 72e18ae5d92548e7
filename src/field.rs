use crate::config::ParticleConfig;
use crate::orb::LightOrb;
use crate::random::RandomSource;
use crate::sparkle::Sparkle;
use crate::surface::DrawSurface;
use glam::DVec2;

/// What a single [`ParticleField::frame`] did, for logging and tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameSummary {
    pub orbs_respawned: usize,
    pub ambient_spawned: bool,
    pub sparkles_drawn: usize,
    pub sparkles_expired: usize,
    pub sparkles_truncated: usize,
}

/// Owns the orb pool and the active sparkle set for one drawing surface.
///
/// Input handlers feed it through [`pointer_moved`](Self::pointer_moved) and
/// [`clicked`](Self::clicked); the animation loop calls
/// [`frame`](Self::frame) once per display refresh.
pub struct ParticleField<R: RandomSource> {
    config: ParticleConfig,
    rng: R,
    width: f64,
    height: f64,
    orbs: Vec<LightOrb>,
    sparkles: Vec<Sparkle>,
}

impl<R: RandomSource> ParticleField<R> {
    pub fn new(config: ParticleConfig, mut rng: R, width: f64, height: f64) -> Self {
        let orbs = (0..config.orb_count)
            .map(|_| LightOrb::spawn(width, height, &mut rng))
            .collect();
        let sparkles = Vec::with_capacity(config.sparkle_ceiling + config.click_burst);
        Self {
            config,
            rng,
            width,
            height,
            orbs,
            sparkles,
        }
    }

    /// Track a new surface size. Live particles keep their positions and
    /// settle into the new bounds through the normal prune/respawn rules.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    #[inline]
    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    #[inline]
    pub fn orbs(&self) -> &[LightOrb] {
        &self.orbs
    }

    #[inline]
    pub fn sparkles(&self) -> &[Sparkle] {
        &self.sparkles
    }

    pub fn spawn_sparkle(&mut self, pos: DVec2) {
        let sparkle = Sparkle::new(pos, self.config.sparkle_max_life, &mut self.rng);
        self.sparkles.push(sparkle);
    }

    /// Pointer trail: spawns at most one sparkle. Returns whether it did.
    pub fn pointer_moved(&mut self, pos: DVec2) -> bool {
        if self.rng.chance(self.config.pointer_spawn_chance) {
            self.spawn_sparkle(pos);
            return true;
        }
        false
    }

    pub fn clicked(&mut self, pos: DVec2) {
        for _ in 0..self.config.click_burst {
            self.spawn_sparkle(pos);
        }
    }

    /// Run one animation step against `surface`.
    pub fn frame(&mut self, surface: &mut impl DrawSurface) -> FrameSummary {
        let mut summary = FrameSummary::default();
        let (width, height) = (self.width, self.height);

        surface.clear(width, height);

        for orb in self.orbs.iter_mut() {
            if orb.update(width, height, &mut self.rng) {
                summary.orbs_respawned += 1;
            }
            orb.draw(surface);
        }

        if self.rng.chance(self.config.ambient_spawn_chance) {
            let x = self.rng.span_from(0.0, width);
            let y = self.rng.span_from(0.0, height);
            self.spawn_sparkle(DVec2::new(x, y));
            summary.ambient_spawned = true;
        }

        // Reverse order so removal never shifts an unvisited index.
        let gravity = self.config.gravity;
        for i in (0..self.sparkles.len()).rev() {
            let sparkle = &mut self.sparkles[i];
            sparkle.update(gravity);
            sparkle.draw(surface);
            summary.sparkles_drawn += 1;
            if sparkle.is_expired(height) {
                self.sparkles.remove(i);
                summary.sparkles_expired += 1;
            }
        }

        let ceiling = self.config.sparkle_ceiling;
        if self.sparkles.len() > ceiling {
            let excess = self.sparkles.len() - ceiling;
            self.sparkles.drain(..excess);
            summary.sparkles_truncated = excess;
        }

        summary
    }
}
