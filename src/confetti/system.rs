//! Confetti pool lifecycle
//!
//! The pool is allocated up front and never grows; pieces that fall past the
//! bottom edge are re-rolled in place above the viewport. Visible updates are
//! gated so the animation never advances faster than once per MIN_FRAME_MS,
//! no matter how often the browser calls back. Skipped frames are dropped,
//! not queued.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::MIN_FRAME_MS;

use super::options::ConfettiOptions;
use super::particle::Particle;

/// The celebration effect: owned pool, gate clock, run flag
#[derive(Debug, Clone)]
pub struct ConfettiSystem {
    opts: ConfettiOptions,
    width: f32,
    height: f32,
    particles: Vec<Particle>,
    running: bool,
    /// Timestamp of the last visible update; `None` right after `start`
    last_update_ms: Option<f64>,
    rng: Pcg32,
}

impl ConfettiSystem {
    /// Build the whole pool up front; particles exist even while stopped
    pub fn new(opts: ConfettiOptions, width: f32, height: f32, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let particles = (0..opts.max_count)
            .map(|_| Particle::spawn(&opts, width, height, &mut rng))
            .collect();
        Self {
            opts,
            width,
            height,
            particles,
            running: false,
            last_update_ms: None,
            rng,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Begin animating. Does nothing while already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.last_update_ms = None;
    }

    /// Stop animating. The pool is kept; the caller blanks the canvas by
    /// rendering without us.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// New canvas bounds for respawns
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Animation callback. Returns whether a visible update happened. The
    /// first call after `start` only records a baseline timestamp.
    pub fn frame(&mut self, now_ms: f64) -> bool {
        if !self.running {
            return false;
        }
        match self.last_update_ms {
            None => {
                self.last_update_ms = Some(now_ms);
                false
            }
            Some(last) if now_ms - last > MIN_FRAME_MS => {
                self.last_update_ms = Some(now_ms);
                self.update();
                true
            }
            Some(_) => false,
        }
    }

    /// Advance every particle, re-rolling the ones that fell past the bottom
    fn update(&mut self) {
        for p in &mut self.particles {
            p.advance();
            if p.pos.y > self.height {
                *p = Particle::spawn(&self.opts, self.width, self.height, &mut self.rng);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system(max_count: usize) -> ConfettiSystem {
        let opts = ConfettiOptions {
            max_count,
            ..Default::default()
        };
        ConfettiSystem::new(opts, 800.0, 600.0, 9)
    }

    #[test]
    fn test_pool_allocated_up_front() {
        let sys = system(40);
        assert_eq!(sys.particles().len(), 40);
        assert!(!sys.is_running());
    }

    #[test]
    fn test_frame_ignored_while_stopped() {
        let mut sys = system(10);
        assert!(!sys.frame(100.0));
        assert!(!sys.frame(200.0));
    }

    #[test]
    fn test_frame_gating() {
        let mut sys = system(10);
        sys.start();

        // First call is only a baseline
        assert!(!sys.frame(0.0));
        // Under the gate: skipped
        assert!(!sys.frame(10.0));
        // Past the gate: visible update
        assert!(sys.frame(17.0));
        // Gate measures from the last visible update, not the skipped one
        assert!(!sys.frame(30.0));
        assert!(sys.frame(34.0));
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut sys = system(10);
        sys.start();
        assert!(!sys.frame(0.0));
        assert!(sys.frame(20.0));

        // A second start while running must not reset the gate baseline
        sys.start();
        assert!(sys.frame(40.0));
    }

    #[test]
    fn test_stop_then_start_resumes() {
        let mut sys = system(10);
        sys.start();
        sys.frame(0.0);
        sys.frame(20.0);

        sys.stop();
        assert!(!sys.is_running());
        assert!(!sys.frame(40.0));
        assert_eq!(sys.particles().len(), 10);

        sys.start();
        // Fresh baseline after the restart
        assert!(!sys.frame(60.0));
        assert!(sys.frame(80.0));
    }

    #[test]
    fn test_update_recycles_fallen_particles() {
        let opts = ConfettiOptions {
            max_count: 30,
            ..Default::default()
        };
        // Shallow canvas so pieces cross the bottom within a few updates
        let mut sys = ConfettiSystem::new(opts, 200.0, 40.0, 5);
        sys.start();
        sys.frame(0.0);

        for i in 1..=200u32 {
            sys.frame(i as f64 * 20.0);
            for p in sys.particles() {
                assert!(p.pos.y <= 40.0, "particle below the bottom edge");
                assert!(p.pos.x.is_finite());
            }
        }
        assert_eq!(sys.particles().len(), 30);
    }

    #[test]
    fn test_rotation_stays_disabled_across_respawns() {
        let opts = ConfettiOptions {
            max_count: 20,
            rotation: false,
            ..Default::default()
        };
        let mut sys = ConfettiSystem::new(opts, 200.0, 40.0, 6);
        sys.start();
        sys.frame(0.0);

        for i in 1..=200u32 {
            sys.frame(i as f64 * 20.0);
            for p in sys.particles() {
                assert!(p.rotation.is_none());
            }
        }
    }

    #[test]
    fn test_resize_moves_the_bottom_edge() {
        let mut sys = system(20);
        sys.resize(400.0, 50.0);
        sys.start();
        sys.frame(0.0);
        for i in 1..=100u32 {
            sys.frame(i as f64 * 20.0);
            for p in sys.particles() {
                assert!(p.pos.y <= 50.0);
            }
        }
    }
}
