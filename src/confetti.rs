//! Confetti burst animation.
//!
//! This module contains the particle system played over the celebration screen. Particles live in
//! a normalized space where both axes go from 0 to 1 and `y` grows upwards, which maps directly
//! onto the bounds of the canvas they are drawn on.

use std::time::{Duration, Instant};

use rand::Rng;
use ratatui::style::Color;

/// Animation frame delay in milliseconds.
///
/// This constant controls the timing between animation frames of the burst. A lower value results
/// in faster falling confetti.
pub(crate) const FRAME_DELAY_MS: u64 = 40;

/// Number of particles in a single burst.
pub(crate) const PARTICLE_COUNT: usize = 200;

/// Number of frames a burst lasts before it is cleared.
pub(crate) const LIFETIME_FRAMES: u16 = 90;

/// Angular spread of a burst, centred on straight up.
const SPREAD_DEGREES: f64 = 140.0;

/// Horizontal origin of a burst.
const ORIGIN_X: f64 = 0.5;

/// Vertical origin of a burst, 60% of the way down the screen.
const ORIGIN_Y: f64 = 0.4;

/// Launch speed range, in units per frame.
const SPEED_RANGE: (f64, f64) = (0.015, 0.045);

/// Downwards acceleration applied every frame.
const GRAVITY: f64 = 0.0012;

/// Fraction of velocity kept from one frame to the next.
const DRAG: f64 = 0.97;

/// Confetti colours, from hot pink to blush.
pub(crate) const COLORS: [Color; 3] = [
    Color::Rgb(0xff, 0x5f, 0xa2),
    Color::Rgb(0xff, 0x9e, 0xcf),
    Color::Rgb(0xff, 0xd1, 0xe8),
];

/// A single piece of confetti.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Particle {
    /// Horizontal position.
    x: f64,
    /// Vertical position.
    y: f64,
    /// Horizontal velocity.
    velocity_x: f64,
    /// Vertical velocity.
    velocity_y: f64,
    /// Index into [`COLORS`].
    color: usize,
}

impl Particle {
    /// Launches a particle from the burst origin in a random direction within the spread.
    fn launch<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let half_spread = SPREAD_DEGREES / 2.;
        let angle = (90. + rng.gen_range(-half_spread..=half_spread)).to_radians();
        let speed = rng.gen_range(SPEED_RANGE.0..SPEED_RANGE.1);

        Self {
            x: ORIGIN_X,
            y: ORIGIN_Y,
            velocity_x: speed * angle.cos(),
            velocity_y: speed * angle.sin(),
            color: rng.gen_range(0..COLORS.len()),
        }
    }

    /// Advances the particle by one frame.
    fn advance(&mut self) {
        self.velocity_x *= DRAG;
        self.velocity_y = self.velocity_y * DRAG - GRAVITY;
        self.x += self.velocity_x;
        self.y += self.velocity_y;
    }

    /// Whether the particle is still inside the visible space.
    fn is_visible(&self) -> bool {
        (0. ..=1.).contains(&self.x) && (0. ..=1.).contains(&self.y)
    }
}

/// Animation state manager for the confetti burst.
///
/// This structure manages the animation state including timing, the number of frames played and
/// the particles still on screen.
pub(crate) struct Confetti {
    /// Particles still on screen.
    particles: Vec<Particle>,
    /// Frames played since the last burst.
    frame: u16,
    /// Timestamp of the last animation frame update.
    last_update_time: Instant,
}

impl Default for Confetti {
    fn default() -> Self {
        Self::new()
    }
}

impl Confetti {
    /// Creates an idle confetti animation.
    pub(crate) fn new() -> Self {
        Self {
            particles: Vec::new(),
            frame: 0,
            last_update_time: Instant::now(),
        }
    }

    /// Fires a new burst, replacing whatever was still falling.
    pub(crate) fn burst<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.particles = (0..PARTICLE_COUNT).map(|_| Particle::launch(rng)).collect();
        self.frame = 0;
        self.last_update_time = Instant::now();
    }

    /// Removes every particle.
    pub(crate) fn clear(&mut self) {
        self.particles.clear();
        self.frame = 0;
    }

    /// Whether a burst is currently playing.
    pub(crate) fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    /// Advances the animation if enough time has passed since the last frame.
    pub(crate) fn update(&mut self) {
        if self.is_active()
            && self.last_update_time.elapsed() >= Duration::from_millis(FRAME_DELAY_MS)
        {
            self.last_update_time = Instant::now();
            self.advance();
        }
    }

    /// Plays a single frame, dropping particles that left the screen and ending the burst once it
    /// has outlived its lifetime.
    pub(crate) fn advance(&mut self) {
        self.frame = self.frame.saturating_add(1);
        if self.frame >= LIFETIME_FRAMES {
            self.clear();
            return;
        }

        for particle in &mut self.particles {
            particle.advance();
        }
        self.particles.retain(Particle::is_visible);
    }

    /// Groups particle coordinates by colour index, ready to be drawn as canvas points.
    pub(crate) fn points_by_color(&self) -> Vec<Vec<(f64, f64)>> {
        let mut groups = vec![Vec::new(); COLORS.len()];
        for particle in &self.particles {
            if let Some(group) = groups.get_mut(particle.color) {
                group.push((particle.x, particle.y));
            }
        }

        groups
    }
}
