#![forbid(unsafe_code)]

//! Particle constellation field.
//!
//! A fixed-size pool of slowly drifting points plus the pairwise proximity
//! links between them. This is the model half of the hero-section background:
//! the host sizes it to the viewport, calls [`ParticleField::step`] once per
//! display frame, and paints [`ParticleField::particles`] and
//! [`ParticleField::links`] however it likes.
//!
//! # How it works
//!
//! - Particles spawn uniformly inside the surface with a small random drift
//!   velocity, a random radius/opacity, and one of two hues (50/50).
//! - Each step advances positions by one velocity increment (per frame, not
//!   per second) and elastically reflects off the four edges by negating the
//!   offending velocity component. Positions are deliberately *not* clamped:
//!   a particle fast enough to overshoot the edge in one step briefly leaves
//!   the surface and corrects on the next step.
//! - Links are an exhaustive O(n²) pair scan with a hard distance cutoff and
//!   linear alpha falloff. Acceptable because the population is capped at
//!   [`FULL_POPULATION`]; a spatial index would be overkill at n ≤ 80.

use crate::rng::Xorshift64;

/// Viewport width (px) below which the reduced population is used.
pub const MOBILE_BREAKPOINT: f32 = 768.0;

/// Population for viewports narrower than [`MOBILE_BREAKPOINT`].
pub const MOBILE_POPULATION: usize = 40;

/// Population for viewports at or beyond [`MOBILE_BREAKPOINT`].
pub const FULL_POPULATION: usize = 80;

/// Pair distance (px) at and beyond which no link is drawn.
pub const LINK_CUTOFF: f32 = 140.0;

/// Link alpha at distance zero; falls off linearly to zero at the cutoff.
pub const LINK_MAX_ALPHA: f32 = 0.15;

/// Hue (degrees) of the cyan particle variant.
pub const HUE_CYAN: u16 = 187;

/// Hue (degrees) of the purple particle variant.
pub const HUE_PURPLE: u16 = 260;

const DRIFT_SPAN: f32 = 0.4;
const RADIUS_MIN: f32 = 0.5;
const RADIUS_SPAN: f32 = 2.0;
const OPACITY_MIN: f32 = 0.1;
const OPACITY_SPAN: f32 = 0.5;

/// One drifting point of the constellation.
///
/// Plain data; the host reads `hue` and `opacity` for the fill color and
/// `radius` for the circle size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    pub opacity: f32,
    pub hue: u16,
}

impl Particle {
    fn spawn(width: f32, height: f32, rng: &mut Xorshift64) -> Self {
        Self {
            x: rng.next_f32() * width,
            y: rng.next_f32() * height,
            vx: (rng.next_f32() - 0.5) * DRIFT_SPAN,
            vy: (rng.next_f32() - 0.5) * DRIFT_SPAN,
            radius: rng.next_f32() * RADIUS_SPAN + RADIUS_MIN,
            opacity: rng.next_f32() * OPACITY_SPAN + OPACITY_MIN,
            hue: if rng.coin() { HUE_CYAN } else { HUE_PURPLE },
        }
    }

    /// Advance one frame and reflect off the surface edges.
    ///
    /// Reflection only negates the velocity component; the position is left
    /// where the overshoot put it.
    fn advance(&mut self, width: f32, height: f32) {
        self.x += self.vx;
        self.y += self.vy;
        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
    }
}

/// One proximity link between two particles, ready to stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub ax: f32,
    pub ay: f32,
    pub bx: f32,
    pub by: f32,
    pub alpha: f32,
}

impl Link {
    fn between(a: Particle, b: Particle) -> Option<Self> {
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        let dist = (dx * dx + dy * dy).sqrt();
        link_alpha(dist).map(|alpha| Self {
            ax: a.x,
            ay: a.y,
            bx: b.x,
            by: b.y,
            alpha,
        })
    }
}

/// Link alpha for a pair at `distance`, or `None` at and beyond the cutoff.
///
/// Falls off linearly from [`LINK_MAX_ALPHA`] at distance zero to zero at
/// [`LINK_CUTOFF`].
#[must_use]
pub fn link_alpha(distance: f32) -> Option<f32> {
    if distance < LINK_CUTOFF {
        Some((1.0 - distance / LINK_CUTOFF) * LINK_MAX_ALPHA)
    } else {
        None
    }
}

/// Fixed-population particle pool bounded by a resizable surface.
#[derive(Debug, Clone)]
pub struct ParticleField {
    width: f32,
    height: f32,
    particles: Vec<Particle>,
}

impl ParticleField {
    /// Population for a given viewport width.
    #[must_use]
    pub fn population_for_width(viewport_width: f32) -> usize {
        if viewport_width < MOBILE_BREAKPOINT {
            MOBILE_POPULATION
        } else {
            FULL_POPULATION
        }
    }

    /// Spawn a field sized `width` × `height` with the population implied by
    /// the width, drawing all randomness from `seed`.
    #[must_use]
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self::with_population(width, height, Self::population_for_width(width), seed)
    }

    /// Spawn a field with an explicit population.
    #[must_use]
    pub fn with_population(width: f32, height: f32, population: usize, seed: u64) -> Self {
        let mut rng = Xorshift64::new(seed);
        let particles = (0..population)
            .map(|_| Particle::spawn(width, height, &mut rng))
            .collect();
        crate::debug!(population, width, height, "spawned particle field");
        Self {
            width,
            height,
            particles,
        }
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self) {
        for particle in &mut self.particles {
            particle.advance(self.width, self.height);
        }
    }

    /// Re-synchronize the surface bounds after a viewport resize.
    ///
    /// The population and current particle states are kept; only the
    /// reflection bounds move.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    #[must_use]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Current particle states, render-ready.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// All proximity links under the cutoff, one per unordered pair.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let particles = self.particles.as_slice();
        (0..particles.len()).flat_map(move |i| {
            let a = particles[i];
            particles[i + 1..]
                .iter()
                .filter_map(move |b| Link::between(a, *b))
        })
    }
}
