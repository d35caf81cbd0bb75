use super::Point;
use crate::config::FireworksConfig;
use crate::rng::GameRng;

/// One spark of a burst. Fades by `decay` every frame and dies at zero opacity.
#[derive(Clone, Debug)]
pub struct Particle {
    pub position: Point,
    pub velocity: Point,
    /// Index into the show palette.
    pub color: usize,
    alpha: f64,
    decay: f64,
    pub radius: f64,
}

impl Particle {
    pub fn new(position: Point, velocity: Point, color: usize, decay: f64, radius: f64) -> Self {
        Self { position, velocity, color, alpha: 1.0, decay, radius }
    }

    /// Random outward spark at `origin`.
    pub fn scatter(origin: Point, color: usize, cfg: &FireworksConfig, rng: &mut GameRng) -> Self {
        let spread = cfg.particle_spread;
        let velocity = Point::new((rng.unit() - 0.5) * spread, (rng.unit() - 0.5) * spread);
        let decay = rng.range_f64(cfg.decay_min, cfg.decay_max);
        let radius = rng.range_f64(cfg.radius_min, cfg.radius_max);
        Self::new(origin, velocity, color, decay, radius)
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Advance one frame. Returns false once the particle has faded out.
    pub fn step(&mut self, gravity: f64) -> bool {
        self.velocity.y += gravity;
        self.position.x += self.velocity.x;
        self.position.y += self.velocity.y;
        self.alpha = (self.alpha - self.decay).max(0.0);
        self.is_alive()
    }

    pub fn is_alive(&self) -> bool {
        self.alpha > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gravity_bends_path_downward() {
        let mut p = Particle::new(Point::new(0.0, 0.0), Point::new(1.0, 0.0), 0, 0.01, 2.0);
        p.step(0.05);
        p.step(0.05);
        assert!((p.velocity.y - 0.1).abs() < 1e-12);
        assert!(p.position.y > 0.0);
        assert!((p.position.x - 2.0).abs() < 1e-12);
    }

    #[test]
    fn opacity_never_increases_and_ends_at_zero() {
        let mut p = Particle::new(Point::new(0.0, 0.0), Point::new(0.0, 0.0), 0, 0.3, 1.0);
        let mut last = p.alpha();
        let mut frames = 0;
        while p.step(0.05) {
            assert!(p.alpha() <= last);
            assert!(p.alpha() > 0.0);
            last = p.alpha();
            frames += 1;
        }
        assert_eq!(frames, 3);
        assert_eq!(p.alpha(), 0.0);
        assert!(!p.is_alive());
    }

    #[test]
    fn scatter_respects_config_ranges() {
        let cfg = FireworksConfig::default();
        let mut rng = GameRng::new(5);
        for _ in 0..200 {
            let p = Particle::scatter(Point::new(10.0, 20.0), 2, &cfg, &mut rng);
            assert!(p.velocity.x.abs() <= 3.0 && p.velocity.y.abs() <= 3.0);
            assert!(p.radius >= 1.0 && p.radius < 4.0);
            assert_eq!(p.alpha(), 1.0);
            assert_eq!(p.color, 2);
        }
    }
}
