use std::collections::HashSet;

use rand::Rng;

use crate::layout::build_ring;
use crate::model::{Segment, WheelConfig};
use crate::resolve::{click_index, winner_index};
use crate::spin::{SpinState, Tick};
use crate::stats::SpinStats;

/// What a click on the dial means, fixed once at construction. A single
/// controller either spins on click or picks on click, never both.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WheelMode {
    Spin,
    Pick,
}

/// Parameters for the external celebratory effect, derived from the winner.
#[derive(Clone, Debug, PartialEq)]
pub struct Celebration {
    pub particle_count: u32,
    pub spread: f64,
    /// Vertical launch origin as a fraction of the viewport height.
    pub origin_y: f64,
    pub colors: [String; 3],
}

impl Celebration {
    pub fn for_winner(winner: &Segment) -> Self {
        Celebration {
            particle_count: 150,
            spread: 80.0,
            origin_y: 0.6,
            colors: [
                winner.color.clone(),
                "#ffffff".to_string(),
                "#FFD700".to_string(),
            ],
        }
    }
}

/// Delivered exactly once per completed spin.
#[derive(Clone, Debug)]
pub struct SpinOutcome {
    pub winner: Segment,
    pub celebration: Celebration,
}

/// Result of routing a click through the configured mode.
#[derive(Clone, Debug, PartialEq)]
pub enum ClickOutcome {
    SpinStarted,
    Picked(Segment),
    /// Spinning, or the ring is empty.
    Ignored,
}

/// Composes layout, animator and resolver around one exclusively-owned
/// `SpinState`. The host drives it with frame timestamps and renders from
/// the rotation snapshot it exposes.
pub struct WheelController {
    config: WheelConfig,
    mode: WheelMode,
    ring: Vec<Segment>,
    spin_state: SpinState,
    stats: SpinStats,
    disabled: HashSet<String>,
}

impl WheelController {
    pub fn new(mut config: WheelConfig, mode: WheelMode) -> Self {
        config.sanitize();
        let mut c = WheelController {
            config,
            mode,
            ring: Vec::new(),
            spin_state: SpinState::new(),
            stats: SpinStats::new(),
            disabled: HashSet::new(),
        };
        c.rebuild_ring();
        c
    }

    fn rebuild_ring(&mut self) {
        let active: Vec<Segment> = self
            .config
            .segments
            .iter()
            .filter(|s| !self.disabled.contains(&s.id))
            .cloned()
            .collect();
        self.ring = build_ring(&active, self.config.settings.repeat);
    }

    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    pub fn mode(&self) -> WheelMode {
        self.mode
    }

    pub fn ring(&self) -> &[Segment] {
        &self.ring
    }

    pub fn rotation(&self) -> f64 {
        self.spin_state.rotation()
    }

    pub fn is_spinning(&self) -> bool {
        self.spin_state.is_spinning()
    }

    pub fn stats(&self) -> &SpinStats {
        &self.stats
    }

    /// Start a spin. No-op while spinning or when the ring is empty.
    pub fn spin<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) -> bool {
        if self.ring.is_empty() {
            return false;
        }
        self.spin_state.begin(self.config.settings.duration, now_ms, rng)
    }

    /// Advance the animation. Returns the outcome on the tick that completes
    /// the spin, `None` on every other call.
    pub fn tick(&mut self, now_ms: f64) -> Option<SpinOutcome> {
        match self.spin_state.tick(now_ms) {
            Tick::Finished => {
                if self.ring.is_empty() {
                    // Config was swapped for an empty wheel mid-spin.
                    self.spin_state.settle();
                    return None;
                }
                let winner =
                    self.ring[winner_index(self.ring.len(), self.spin_state.rotation())].clone();
                self.stats.record(&winner);
                if self.config.settings.auto_disable {
                    self.disabled.insert(winner.id.clone());
                    self.rebuild_ring();
                }
                self.spin_state.settle();
                let celebration = Celebration::for_winner(&winner);
                Some(SpinOutcome {
                    winner,
                    celebration,
                })
            }
            Tick::Animating | Tick::Idle => None,
        }
    }

    /// Resolve the wedge under a click without spinning. `None` while
    /// spinning or when the ring is empty.
    pub fn pick_at(&self, dx: f64, dy: f64) -> Option<Segment> {
        if self.is_spinning() || self.ring.is_empty() {
            return None;
        }
        let idx = click_index(self.ring.len(), self.spin_state.rotation(), dx, dy);
        Some(self.ring[idx].clone())
    }

    /// Route a click at pixel offset (`dx`, `dy`) from the wheel center
    /// through the configured mode.
    pub fn handle_click<R: Rng + ?Sized>(
        &mut self,
        dx: f64,
        dy: f64,
        now_ms: f64,
        rng: &mut R,
    ) -> ClickOutcome {
        if self.is_spinning() || self.ring.is_empty() {
            return ClickOutcome::Ignored;
        }
        match self.mode {
            WheelMode::Spin => {
                if self.spin(now_ms, rng) {
                    ClickOutcome::SpinStarted
                } else {
                    ClickOutcome::Ignored
                }
            }
            WheelMode::Pick => match self.pick_at(dx, dy) {
                Some(segment) => ClickOutcome::Picked(segment),
                None => ClickOutcome::Ignored,
            },
        }
    }

    /// Restore auto-disabled segments to the ring.
    pub fn reset(&mut self) {
        self.disabled.clear();
        self.rebuild_ring();
    }

    /// Replace the wheel definition, keeping rotation and stats.
    pub fn set_config(&mut self, mut config: WheelConfig) {
        config.sanitize();
        self.config = config;
        self.disabled.clear();
        self.rebuild_ring();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WheelSettings;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn config(labels: &[&str], settings: WheelSettings) -> WheelConfig {
        WheelConfig {
            id: None,
            name: None,
            segments: labels
                .iter()
                .enumerate()
                .map(|(i, l)| Segment::new(i.to_string(), *l, "#EF4444"))
                .collect(),
            settings,
        }
    }

    fn default_settings() -> WheelSettings {
        WheelSettings {
            repeat: 1,
            duration: 3.0,
            font_size: 4,
            auto_disable: false,
        }
    }

    #[test]
    fn spin_finishes_once_and_reports_a_ring_member() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut c = WheelController::new(
            config(&["A", "B", "C", "D"], default_settings()),
            WheelMode::Spin,
        );
        assert!(c.spin(0.0, &mut rng));
        assert!(c.is_spinning());
        assert!(c.tick(1500.0).is_none());
        let outcome = c.tick(3000.0).expect("spin completes at duration");
        assert!(c.config().segments.contains(&outcome.winner));
        assert!(!c.is_spinning());
        assert!(c.tick(3100.0).is_none());
        assert_eq!(outcome.celebration.colors[0], outcome.winner.color);
        assert_eq!(outcome.celebration.particle_count, 150);
    }

    #[test]
    fn winner_matches_final_rotation_geometry() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut c = WheelController::new(
            config(&["A", "B", "C", "D"], default_settings()),
            WheelMode::Spin,
        );
        assert!(c.spin(0.0, &mut rng));
        let outcome = c.tick(3000.0).unwrap();
        let expected = &c.ring()[winner_index(c.ring().len(), c.rotation())];
        assert_eq!(&outcome.winner, expected);
    }

    #[test]
    fn reentrant_spin_is_rejected() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut c = WheelController::new(config(&["A", "B"], default_settings()), WheelMode::Spin);
        assert!(c.spin(0.0, &mut rng));
        let rot_before = c.rotation();
        assert!(!c.spin(100.0, &mut rng));
        assert_eq!(c.rotation(), rot_before);
    }

    #[test]
    fn empty_ring_is_inert() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut settings = default_settings();
        settings.repeat = 0;
        let mut c = WheelController::new(config(&["A", "B"], settings), WheelMode::Spin);
        assert!(c.ring().is_empty());
        assert!(!c.spin(0.0, &mut rng));
        assert_eq!(c.handle_click(1.0, 0.0, 0.0, &mut rng), ClickOutcome::Ignored);
        assert!(c.tick(1000.0).is_none());
    }

    #[test]
    fn pick_mode_resolves_click_without_spinning() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut c = WheelController::new(
            config(&["A", "B", "C", "D"], default_settings()),
            WheelMode::Pick,
        );
        // rotation 0, click pointing right -> first wedge
        match c.handle_click(50.0, 0.0, 0.0, &mut rng) {
            ClickOutcome::Picked(seg) => assert_eq!(seg.label, "A"),
            other => panic!("expected pick, got {other:?}"),
        }
        assert!(!c.is_spinning());
        assert_eq!(c.pick_at(0.0, 50.0).unwrap().label, "B");
    }

    #[test]
    fn click_in_spin_mode_starts_the_spin() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut c = WheelController::new(config(&["A", "B"], default_settings()), WheelMode::Spin);
        assert_eq!(
            c.handle_click(10.0, 10.0, 0.0, &mut rng),
            ClickOutcome::SpinStarted
        );
        assert!(c.is_spinning());
        assert_eq!(
            c.handle_click(10.0, 10.0, 50.0, &mut rng),
            ClickOutcome::Ignored
        );
    }

    #[test]
    fn stats_count_each_completed_spin() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut c = WheelController::new(config(&["A", "B"], default_settings()), WheelMode::Spin);
        for i in 0..3 {
            let t0 = i as f64 * 10_000.0;
            assert!(c.spin(t0, &mut rng));
            assert!(c.tick(t0 + 3000.0).is_some());
        }
        assert_eq!(c.stats().total_spins, 3);
        let total: u64 = c.stats().segment_counts.values().sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn auto_disable_shrinks_then_empties_the_ring() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut settings = default_settings();
        settings.auto_disable = true;
        let mut c = WheelController::new(config(&["A", "B", "C"], settings), WheelMode::Spin);
        let mut t = 0.0;
        for remaining in (0..3).rev() {
            assert!(c.spin(t, &mut rng));
            assert!(c.tick(t + 3000.0).is_some());
            assert_eq!(c.ring().len(), remaining);
            t += 10_000.0;
        }
        assert!(!c.spin(t, &mut rng));
        c.reset();
        assert_eq!(c.ring().len(), 3);
    }
}
