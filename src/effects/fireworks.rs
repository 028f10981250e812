use std::collections::VecDeque;

use fastrand::Rng;
use log::{debug, trace};

use crate::canvas::{Rgba, Surface};

// One color per burst
pub const PALETTE: [Rgba; 5] = [
    Rgba::opaque(255, 215, 0), // Gold
    Rgba::opaque(255, 0, 0),   // Red
    Rgba::opaque(0, 255, 0),   // Green
    Rgba::opaque(0, 0, 255),   // Blue
    Rgba::opaque(255, 165, 0), // Orange
];

/// Added to `vy` every tick.
pub const GRAVITY: f32 = 0.05;
/// Ticks a particle lives for.
pub const LIFESPAN: i32 = 100;
pub const TRAIL_LEN: usize = 15;
pub const BURST_SIZE: usize = 100;

pub fn random_color(rng: &mut Rng) -> Rgba {
    PALETTE[rng.usize(0..PALETTE.len())]
}

/// A glowing point that leaves a fading trail behind it.
#[derive(Debug, Clone)]
pub struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    size: f32,
    color: Rgba,
    life: i32,
    trail: VecDeque<(f32, f32)>,
}

impl Particle {
    pub fn new(origin: (f32, f32), color: Rgba, rng: &mut Rng) -> Self {
        let size = rng.f32() * 5.0 + 2.0;
        let vx = rng.f32() * 6.0 - 3.0;
        let vy = rng.f32() * 6.0 - 3.0;

        Self {
            x: origin.0,
            y: origin.1,
            vx,
            vy,
            size,
            color,
            life: LIFESPAN,
            trail: VecDeque::with_capacity(TRAIL_LEN + 1),
        }
    }

    pub fn advance(&mut self) {
        self.x += self.vx;
        self.y += self.vy;
        self.vy += GRAVITY;
        self.life -= 1;

        self.trail.push_back((self.x, self.y));
        while self.trail.len() > TRAIL_LEN {
            self.trail.pop_front();
        }
    }

    /// Draws the trail oldest first, then the particle itself on top.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let n = self.trail.len() as f32;
        for (i, &(x, y)) in self.trail.iter().enumerate() {
            let i = i as f32;
            let opacity = (i + 1.0) / n;
            let radius = self.size * (1.0 - i / n);
            surface.fill_circle(x, y, radius, self.color.with_alpha(opacity));
        }

        surface.fill_circle(self.x, self.y, self.size, self.color.with_alpha(1.0));
    }

    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn velocity(&self) -> (f32, f32) {
        (self.vx, self.vy)
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn life(&self) -> i32 {
        self.life
    }

    pub fn trail(&self) -> impl ExactSizeIterator<Item = (f32, f32)> + '_ {
        self.trail.iter().copied()
    }
}

/// Owns every live particle and steps them once per frame.
pub struct Fireworks {
    width: f32,
    height: f32,
    particles: Vec<Particle>,
}

impl Fireworks {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            particles: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Bursts at a random point on the surface in a random palette color.
    pub fn launch(&mut self, rng: &mut Rng) -> usize {
        let color = random_color(rng);
        let origin = (rng.f32() * self.width, rng.f32() * self.height);
        self.launch_at(origin, color, rng)
    }

    pub fn launch_at(&mut self, origin: (f32, f32), color: Rgba, rng: &mut Rng) -> usize {
        self.particles.reserve(BURST_SIZE);
        for _ in 0..BURST_SIZE {
            self.particles.push(Particle::new(origin, color, rng));
        }
        debug!(
            "burst at ({:.1}, {:.1}), {} particles live",
            origin.0,
            origin.1,
            self.particles.len()
        );
        BURST_SIZE
    }

    /// One animation frame: clear, advance and draw everything, then drop the dead.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        surface.clear();

        for particle in &mut self.particles {
            particle.advance();
            particle.render(surface);
        }

        self.particles.retain(Particle::is_alive);
        trace!("{} particles live", self.particles.len());
    }
}
