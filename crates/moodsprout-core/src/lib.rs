//! # Moodsprout Core Library
//!
//! This library provides the logic behind Moodsprout: pick a mood, work
//! through a shuffled list of small healing actions, and watch a tree grow
//! as energy accumulates. All presentation is left to a [`Renderer`]; the
//! core only produces data-carrying [`Directive`]s, so it is fully testable
//! without any display.
//!
//! ## Architecture
//!
//! - **Task deck**: shuffled task order for the active mood, reshuffled per cycle
//! - **Energy tracker**: bounded 0..=100 counter with fixed step
//! - **Tree mapper**: pure energy → visual parameter mapping
//! - **Mood session**: the orchestrator tying the above together
//! - **Effects**: decorative confetti and floating emoji, independent of session state
//!
//! ## Key Components
//!
//! - [`MoodSession`]: session state machine
//! - [`TaskCatalog`]: mood → tasks content
//! - [`map_energy`]: energy → [`TreeVisuals`]
//! - [`Config`]: application configuration management

pub mod config;
pub mod content;
pub mod deck;
pub mod directive;
pub mod effects;
pub mod energy;
pub mod error;
pub mod feedback;
pub mod quotes;
pub mod session;
pub mod tree;

pub use config::Config;
pub use content::{Mood, MoodEntry, Task, TaskCatalog, TaskSource};
pub use deck::TaskDeck;
pub use directive::{dispatch, Directive, RecordingRenderer, Renderer, TaskStyle};
pub use effects::{ConfettiBurst, FloatingEmoji, ResizeDebouncer, Viewport};
pub use energy::{Completion, EnergyTier, EnergyTracker, MAX_ENERGY};
pub use error::{ConfigError, ContentError, CoreError, Result};
pub use feedback::{Feedback, FeedbackStyle};
pub use quotes::{Quote, QuoteBook};
pub use session::{session_rng, MoodSession};
pub use tree::{map_energy, LeafColor, TreeVisuals};
