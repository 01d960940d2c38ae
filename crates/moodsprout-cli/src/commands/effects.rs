//! Floating emoji field, simulated frame by frame.
//!
//! Resize events restart the field once the debounce window has passed,
//! the same way a browser page would after the user stops dragging.

use std::time::{Duration, Instant};

use clap::Args;
use moodsprout_core::config::EffectsConfig;
use moodsprout_core::effects::{FloatingEmoji, ResizeDebouncer, Viewport};
use moodsprout_core::{session_rng, Config};
use rand::Rng;

const FRAME: Duration = Duration::from_millis(16);

#[derive(Args)]
pub struct EffectsArgs {
    /// Viewport width in pixels
    #[arg(long, default_value_t = 1280.0)]
    pub width: f64,
    /// Viewport height in pixels
    #[arg(long, default_value_t = 800.0)]
    pub height: f64,
    /// Frames to simulate, 16 ms each
    #[arg(long, default_value_t = 60)]
    pub frames: u32,
    /// Viewport change as WIDTHxHEIGHT@MS (repeatable)
    #[arg(long = "resize", value_parser = parse_resize)]
    pub resizes: Vec<Resize>,
    /// Fixed RNG seed (overrides session.seed)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resize {
    pub at: Duration,
    pub viewport: Viewport,
}

fn parse_resize(s: &str) -> Result<Resize, String> {
    const USAGE: &str = "expected WIDTHxHEIGHT@MS";
    let (size, at) = s.split_once('@').ok_or(USAGE)?;
    let (width, height) = size.split_once('x').ok_or(USAGE)?;
    let pixels = |v: &str| v.parse::<f64>().map_err(|e| format!("{v}: {e}"));
    let millis = at.parse::<u64>().map_err(|e| format!("{at}: {e}"))?;
    Ok(Resize {
        at: Duration::from_millis(millis),
        viewport: Viewport::new(pixels(width)?, pixels(height)?),
    })
}

/// Field state after the last simulated frame.
#[derive(Debug)]
pub struct EffectsRun {
    pub viewport: Viewport,
    pub restarts: usize,
    pub field: Vec<FloatingEmoji>,
}

pub fn simulate<R: Rng + ?Sized>(
    cfg: &EffectsConfig,
    viewport: Viewport,
    resizes: &[Resize],
    frames: u32,
    rng: &mut R,
) -> EffectsRun {
    let count = cfg.floating_emoji_count as usize;
    let breakpoint = f64::from(cfg.mobile_breakpoint);

    let mut resizes = resizes.to_vec();
    resizes.sort_by_key(|r| r.at);
    let mut pending = resizes.into_iter().peekable();

    let mut viewport = viewport;
    let mut field = FloatingEmoji::spawn_field(count, viewport, breakpoint, rng);
    let mut debouncer = ResizeDebouncer::new(cfg.resize_debounce());
    let mut restarts = 0;

    let start = Instant::now();
    for frame in 0..frames {
        let elapsed = FRAME * frame;
        while let Some(resize) = pending.next_if(|r| r.at <= elapsed) {
            viewport = resize.viewport;
            debouncer.notify(start + resize.at);
        }
        if debouncer.poll(start + elapsed) {
            field = FloatingEmoji::spawn_field(count, viewport, breakpoint, rng);
            restarts += 1;
            tracing::debug!(width = viewport.width, restarts, "floating emoji restarted");
        }
        for emoji in &mut field {
            emoji.step(viewport);
        }
    }

    EffectsRun {
        viewport,
        restarts,
        field,
    }
}

pub fn run(args: EffectsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let mut rng = session_rng(args.seed.or(config.session.seed));
    let result = simulate(
        &config.effects,
        Viewport::new(args.width, args.height),
        &args.resizes,
        args.frames,
        &mut rng,
    );
    let report = serde_json::json!({
        "viewport": result.viewport,
        "restarts": result.restarts,
        "emoji": result.field,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
