//! Fireworks show played on the completion screen.
//!
//! Rockets ([`Firework`]) rise from the bottom edge and, on reaching their target
//! height, burst into [`Particle`]s that fall under gravity and fade out. The
//! exploded rocket's slot is re-armed in place, so the rocket list only ever
//! grows up to `max_fireworks`.
//!
//! All drawing goes through [`Painter`]; the browser implements it on the canvas
//! 2D context and tests record the calls.

mod firework;
mod particle;

pub use firework::{Firework, Phase};
pub use particle::Particle;

use std::collections::VecDeque;

use crate::config::FireworksConfig;
use crate::rng::GameRng;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Canvas size in pixels, read every frame so resizes apply immediately.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

pub trait Painter {
    /// Cover the whole canvas with a translucent fill (motion-trail fade).
    fn fade(&mut self, overlay: &str, bounds: Bounds);
    /// Stroke a connected line through `points`.
    fn trail<'a, I>(&mut self, points: I, color: &str)
    where
        I: IntoIterator<Item = &'a Point>;
    /// Fill a circle.
    fn dot(&mut self, at: Point, radius: f64, color: &str, alpha: f64);
}

pub struct Show {
    config: FireworksConfig,
    fireworks: Vec<Firework>,
    particles: Vec<Particle>,
    /// Offsets (ms from the first frame) of the opening launches.
    queued: VecDeque<f64>,
    started_ms: Option<f64>,
}

impl Show {
    pub fn new(config: FireworksConfig) -> Self {
        let queued = (0..config.initial_launches)
            .map(|i| i as f64 * config.launch_stagger_ms)
            .collect();
        Self {
            fireworks: Vec::with_capacity(config.max_fireworks),
            particles: Vec::new(),
            queued,
            started_ms: None,
            config,
        }
    }

    pub fn fireworks(&self) -> &[Firework] {
        &self.fireworks
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn queued_launches(&self) -> usize {
        self.queued.len()
    }

    /// Run one animation frame at timestamp `now_ms`.
    pub fn frame<P: Painter>(&mut self, now_ms: f64, bounds: Bounds, rng: &mut GameRng, painter: &mut P) {
        let started = *self.started_ms.get_or_insert(now_ms);
        let elapsed = now_ms - started;

        painter.fade(&self.config.overlay, bounds);

        while self.queued.front().is_some_and(|&at| at <= elapsed) {
            self.queued.pop_front();
            self.launch(bounds, rng);
        }
        if rng.chance(self.config.spawn_chance) {
            self.launch(bounds, rng);
        }

        let cfg = &self.config;
        for fw in &mut self.fireworks {
            let exploded = fw.advance(cfg.trail_length);
            let color = &cfg.palette[fw.color];
            painter.trail(fw.trail(), color);
            if exploded {
                self.particles.extend(fw.burst(cfg, rng));
                fw.reset(cfg, bounds, rng);
            } else {
                painter.dot(fw.position, cfg.firework_radius, color, 1.0);
            }
        }

        self.particles.retain_mut(|p| {
            let alive = p.step(cfg.gravity);
            if alive {
                painter.dot(p.position, p.radius, &cfg.palette[p.color], p.alpha());
            }
            alive
        });
    }

    fn launch(&mut self, bounds: Bounds, rng: &mut GameRng) {
        if self.fireworks.len() < self.config.max_fireworks {
            self.fireworks.push(Firework::launch(&self.config, bounds, rng));
        }
    }
}
