use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::feedback::Feedback;
use crate::quotes::Quote;
use crate::tree::TreeVisuals;

/// Cosmetic handwriting style for the task text.
///
/// Picked at random on every display, independent of session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStyle {
    Plain,
    Style2,
    Style3,
}

impl TaskStyle {
    pub const ALL: [TaskStyle; 3] = [TaskStyle::Plain, TaskStyle::Style2, TaskStyle::Style3];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// CSS class name, if any.
    pub fn class(self) -> Option<&'static str> {
        match self {
            TaskStyle::Plain => None,
            TaskStyle::Style2 => Some("style-2"),
            TaskStyle::Style3 => Some("style-3"),
        }
    }
}

/// Every state change in a session produces directives for the renderer.
/// The session never touches presentation itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Directive {
    SetTitle {
        text: String,
    },
    SetFeedback(Feedback),
    ShowTask {
        text: String,
        style: TaskStyle,
    },
    UpdateTree(TreeVisuals),
    SetEnergyBar {
        percent: u8,
    },
    /// Fire the confetti effect.
    Celebrate,
    /// Reveal the task and feedback panels.
    RevealPanels,
    ShowQuote(Quote),
    /// Non-fatal notice; no state changed.
    Advisory {
        message: String,
    },
}

/// Applies directives to some display.
pub trait Renderer {
    fn apply(&mut self, directive: &Directive);
}

/// Feed a batch of directives to a renderer, in order.
pub fn dispatch<'a, I>(directives: I, renderer: &mut dyn Renderer)
where
    I: IntoIterator<Item = &'a Directive>,
{
    for directive in directives {
        renderer.apply(directive);
    }
}

/// Renderer that just remembers what it was told.
#[derive(Debug, Default, Clone)]
pub struct RecordingRenderer {
    pub applied: Vec<Directive>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_task(&self) -> Option<&str> {
        self.applied.iter().rev().find_map(|d| match d {
            Directive::ShowTask { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn celebrations(&self) -> usize {
        self.applied
            .iter()
            .filter(|d| matches!(d, Directive::Celebrate))
            .count()
    }
}

impl Renderer for RecordingRenderer {
    fn apply(&mut self, directive: &Directive) {
        self.applied.push(directive.clone());
    }
}
