//! Decorative effects: confetti and floating emoji.
//!
//! These read and write nothing in the session. They only share the idea
//! of an injected random source so frames can be reproduced in tests.

use std::time::{Duration, Instant};

use rand::Rng;
use serde::{Deserialize, Serialize};

pub const CONFETTI_START_Y: f64 = -10.0;
pub const FLOATING_EMOJI: [&str; 8] = ["🌵", "🌞", "☁️", "🌢", "🌸", "🌿", "🍀", "🌻"];

/// Fraction of the width kept clear for the main panel.
const CENTER_FRACTION: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn is_mobile(&self, breakpoint: f64) -> bool {
        self.width <= breakpoint
    }

    /// Width of each side band left and right of the centre area.
    fn side_band(&self) -> f64 {
        self.width * (1.0 - CENTER_FRACTION) / 2.0
    }
}

// ── Confetti ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfettiParticle {
    pub x: f64,
    pub y: f64,
    pub hue: f64,
    pub speed_x: f64,
    pub speed_y: f64,
}

#[derive(Debug, Clone)]
pub struct ConfettiBurst {
    viewport: Viewport,
    particles: Vec<ConfettiParticle>,
}

impl ConfettiBurst {
    pub fn launch<R: Rng + ?Sized>(count: usize, viewport: Viewport, rng: &mut R) -> Self {
        let particles = (0..count)
            .map(|_| ConfettiParticle {
                x: rng.gen::<f64>() * viewport.width,
                y: CONFETTI_START_Y,
                hue: rng.gen::<f64>() * 360.0,
                speed_x: (rng.gen::<f64>() - 0.5) * 4.0,
                speed_y: 2.0 + rng.gen::<f64>() * 4.0,
            })
            .collect();
        Self {
            viewport,
            particles,
        }
    }

    pub fn particles(&self) -> &[ConfettiParticle] {
        &self.particles
    }

    /// Advance one frame; particles past the bottom edge are dropped.
    pub fn step(&mut self) {
        let bottom = self.viewport.height;
        for p in &mut self.particles {
            p.x += p.speed_x;
            p.y += p.speed_y;
        }
        self.particles.retain(|p| p.y < bottom);
    }

    pub fn is_finished(&self) -> bool {
        self.particles.is_empty()
    }
}

// ── Floating emoji ───────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloatingEmoji {
    pub glyph: &'static str,
    pub font_size: f64,
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl FloatingEmoji {
    pub fn spawn<R: Rng + ?Sized>(viewport: Viewport, rng: &mut R) -> Self {
        let side = viewport.side_band();
        let x = if rng.gen_bool(0.5) {
            rng.gen::<f64>() * side
        } else {
            viewport.width - side + rng.gen::<f64>() * side
        };
        let mut velocity = || {
            let magnitude = rng.gen::<f64>() * 0.5 + 0.1;
            if rng.gen_bool(0.5) {
                -magnitude
            } else {
                magnitude
            }
        };
        let vx = velocity();
        let vy = velocity();
        Self {
            glyph: FLOATING_EMOJI[rng.gen_range(0..FLOATING_EMOJI.len())],
            font_size: 20.0 + rng.gen::<f64>() * 30.0,
            opacity: 0.6 + rng.gen::<f64>() * 0.4,
            x,
            y: rng.gen::<f64>() * viewport.height,
            vx,
            vy,
        }
    }

    /// `count` emoji, or none at all on narrow screens.
    pub fn spawn_field<R: Rng + ?Sized>(
        count: usize,
        viewport: Viewport,
        mobile_breakpoint: f64,
        rng: &mut R,
    ) -> Vec<Self> {
        if viewport.is_mobile(mobile_breakpoint) {
            return Vec::new();
        }
        (0..count).map(|_| Self::spawn(viewport, rng)).collect()
    }

    /// Advance one frame. The glyph's rendered box is approximated by its
    /// font size.
    pub fn step(&mut self, viewport: Viewport) {
        let max_x = (viewport.width - self.font_size).max(0.0);
        let max_y = (viewport.height - self.font_size).max(0.0);

        self.x += self.vx;
        self.y += self.vy;

        if self.x < 0.0 || self.x > max_x {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > max_y {
            self.vy = -self.vy;
        }

        let center_left = viewport.side_band();
        let center_right = viewport.width - center_left;
        if self.x > center_left && self.x < center_right {
            self.vx = -self.vx;
            self.x = if self.x < viewport.width / 2.0 {
                center_left
            } else {
                center_right
            };
        }

        self.x = self.x.clamp(0.0, max_x);
        self.y = self.y.clamp(0.0, max_y);
    }
}

// ── Resize debounce ──────────────────────────────────────────────────

/// Collapses a burst of resize notifications into a single restart.
#[derive(Debug, Clone)]
pub struct ResizeDebouncer {
    debounce: Duration,
    pending_since: Option<Instant>,
}

impl ResizeDebouncer {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            pending_since: None,
        }
    }

    pub fn notify(&mut self, now: Instant) {
        self.pending_since = Some(now);
    }

    /// True once the quiet period has elapsed; clears the pending resize.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.pending_since {
            Some(since) if now.saturating_duration_since(since) >= self.debounce => {
                self.pending_since = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending_since.is_some()
    }
}
