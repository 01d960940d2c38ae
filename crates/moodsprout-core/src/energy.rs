//! Bounded energy counter.
//!
//! Energy starts at 0 and grows by a fixed step per completed task until it
//! saturates at [`MAX_ENERGY`]. It is session-wide: switching moods never
//! touches it.

use serde::{Deserialize, Serialize};

pub const MAX_ENERGY: u8 = 100;
pub const DEFAULT_STEP: u8 = 20;

/// Outcome of a single completion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub new_level: u8,
    /// This completion moved the level to the maximum.
    pub just_completed: bool,
    /// The level was already at the maximum; nothing changed.
    pub already_complete: bool,
}

/// Feedback tier for a given level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyTier {
    Start,
    Progress(u8),
    Full,
}

impl EnergyTier {
    pub fn of(level: u8) -> Self {
        match level {
            0 => EnergyTier::Start,
            l if l >= MAX_ENERGY => EnergyTier::Full,
            l => EnergyTier::Progress(l),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnergyTracker {
    level: u8,
    step: u8,
}

impl EnergyTracker {
    pub fn new() -> Self {
        Self::with_step(DEFAULT_STEP)
    }

    /// Step is clamped to `1..=MAX_ENERGY`.
    pub fn with_step(step: u8) -> Self {
        Self {
            level: 0,
            step: step.clamp(1, MAX_ENERGY),
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn tier(&self) -> EnergyTier {
        EnergyTier::of(self.level)
    }

    pub fn is_full(&self) -> bool {
        self.level >= MAX_ENERGY
    }

    pub fn complete(&mut self) -> Completion {
        if self.is_full() {
            return Completion {
                new_level: self.level,
                just_completed: false,
                already_complete: true,
            };
        }
        self.level = self.level.saturating_add(self.step).min(MAX_ENERGY);
        let just_completed = self.is_full();
        tracing::debug!(level = self.level, "energy increased");
        if just_completed {
            tracing::info!("tree fully grown");
        }
        Completion {
            new_level: self.level,
            just_completed,
            already_complete: false,
        }
    }

    pub fn reset(&mut self) {
        self.level = 0;
    }
}

impl Default for EnergyTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_completions_reach_full() {
        let mut energy = EnergyTracker::new();
        let levels: Vec<u8> = (0..5).map(|_| energy.complete().new_level).collect();
        assert_eq!(levels, vec![20, 40, 60, 80, 100]);
        assert!(energy.is_full());
    }

    #[test]
    fn just_completed_only_on_the_final_step() {
        let mut energy = EnergyTracker::new();
        for _ in 0..4 {
            let c = energy.complete();
            assert!(!c.just_completed);
            assert!(!c.already_complete);
        }
        let last = energy.complete();
        assert!(last.just_completed);
        assert!(!last.already_complete);
    }

    #[test]
    fn completing_while_full_changes_nothing() {
        let mut energy = EnergyTracker::new();
        for _ in 0..5 {
            energy.complete();
        }
        for _ in 0..3 {
            let c = energy.complete();
            assert_eq!(
                c,
                Completion {
                    new_level: 100,
                    just_completed: false,
                    already_complete: true
                }
            );
        }
    }

    #[test]
    fn uneven_step_clamps_at_max() {
        let mut energy = EnergyTracker::with_step(30);
        assert_eq!(energy.complete().new_level, 30);
        assert_eq!(energy.complete().new_level, 60);
        assert_eq!(energy.complete().new_level, 90);
        let c = energy.complete();
        assert_eq!(c.new_level, 100);
        assert!(c.just_completed);
    }

    #[test]
    fn step_is_clamped() {
        assert_eq!(EnergyTracker::with_step(0).step(), 1);
        assert_eq!(EnergyTracker::with_step(250).step(), 100);
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut energy = EnergyTracker::new();
        energy.complete();
        energy.reset();
        assert_eq!(energy.level(), 0);
        assert_eq!(energy.tier(), EnergyTier::Start);
    }

    #[test]
    fn tiers() {
        assert_eq!(EnergyTier::of(0), EnergyTier::Start);
        assert_eq!(EnergyTier::of(40), EnergyTier::Progress(40));
        assert_eq!(EnergyTier::of(100), EnergyTier::Full);
    }
}
