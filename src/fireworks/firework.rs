use std::collections::VecDeque;

use super::particle::Particle;
use super::{Bounds, Point};
use crate::config::FireworksConfig;
use crate::rng::GameRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Rising,
    Exploded,
}

/// A rocket climbing from the bottom edge until it reaches `target_y`.
#[derive(Clone, Debug)]
pub struct Firework {
    pub position: Point,
    pub velocity: Point,
    pub target_y: f64,
    pub color: usize,
    trail: VecDeque<Point>,
    phase: Phase,
}

impl Firework {
    pub fn launch(cfg: &FireworksConfig, bounds: Bounds, rng: &mut GameRng) -> Self {
        let mut fw = Self {
            position: Point::default(),
            velocity: Point::default(),
            target_y: 0.0,
            color: 0,
            trail: VecDeque::with_capacity(cfg.trail_length + 1),
            phase: Phase::Rising,
        };
        fw.reset(cfg, bounds, rng);
        fw
    }

    /// Re-arm this slot as a fresh rocket at the bottom edge.
    pub fn reset(&mut self, cfg: &FireworksConfig, bounds: Bounds, rng: &mut GameRng) {
        self.position = Point::new(rng.unit() * bounds.width, bounds.height);
        self.target_y = rng.unit() * bounds.height / 2.0 + cfg.target_margin;
        let speed = rng.range_f64(cfg.rise_speed_min, cfg.rise_speed_max);
        self.velocity = Point::new((rng.unit() - 0.5) * cfg.drift, -speed);
        self.color = rng.index(cfg.palette.len());
        self.trail.clear();
        self.phase = Phase::Rising;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn trail(&self) -> &VecDeque<Point> {
        &self.trail
    }

    /// Move one frame and record the trail. Returns true on the frame the
    /// rocket reaches its target height.
    pub fn advance(&mut self, trail_length: usize) -> bool {
        if self.phase == Phase::Exploded {
            return false;
        }
        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;
        self.trail.push_back(self.position);
        while self.trail.len() > trail_length {
            self.trail.pop_front();
        }
        if self.position.y <= self.target_y {
            self.phase = Phase::Exploded;
            return true;
        }
        false
    }

    pub fn burst(&self, cfg: &FireworksConfig, rng: &mut GameRng) -> Vec<Particle> {
        let count = rng.range_usize(cfg.burst_min, cfg.burst_max);
        (0..count)
            .map(|_| Particle::scatter(self.position, self.color, cfg, rng))
            .collect()
    }
}
