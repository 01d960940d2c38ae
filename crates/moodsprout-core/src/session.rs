//! Mood session state machine.
//!
//! One `MoodSession` lives for one page/terminal session. It composes the
//! task deck for the selected mood with the session-wide energy tracker and
//! answers every user action with a list of [`Directive`]s.
//!
//! ## Transitions
//!
//! ```text
//! NoMood --select_mood--> Active(mood) --select_mood--> Active(other mood)
//!                              |
//!                      complete_current_task
//! ```
//!
//! Energy is never reset by a mood change.
//!
//! ## Usage
//!
//! ```ignore
//! let catalog = TaskCatalog::builtin();
//! let mut session = MoodSession::with_seed(Some(7));
//! let out = session.select_mood(&Mood::new("開心"), &catalog)?;
//! let out = session.complete_current_task();
//! ```

use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;

use crate::content::{Mood, Task, TaskSource};
use crate::deck::TaskDeck;
use crate::directive::{Directive, TaskStyle};
use crate::energy::{EnergyTier, EnergyTracker};
use crate::error::{CoreError, Result};
use crate::feedback::{self, Feedback, NO_MOOD_ADVISORY};
use crate::quotes::QuoteBook;
use crate::tree::{map_energy, TreeVisuals};

/// Build the default generator, seeded when `seed` is given.
pub fn session_rng(seed: Option<u64>) -> Mcg128Xsl64 {
    match seed {
        Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
        None => Mcg128Xsl64::from_entropy(),
    }
}

#[derive(Debug, Clone)]
pub struct MoodSession<R: Rng = Mcg128Xsl64> {
    mood: Option<Mood>,
    deck: Option<TaskDeck>,
    energy: EnergyTracker,
    quotes: QuoteBook,
    rng: R,
}

impl MoodSession<Mcg128Xsl64> {
    pub fn with_seed(seed: Option<u64>) -> Self {
        Self::new(session_rng(seed))
    }
}

impl<R: Rng> MoodSession<R> {
    pub fn new(rng: R) -> Self {
        Self {
            mood: None,
            deck: None,
            energy: EnergyTracker::new(),
            quotes: QuoteBook::builtin(),
            rng,
        }
    }

    pub fn with_energy_step(mut self, step: u8) -> Self {
        self.energy = EnergyTracker::with_step(step);
        self
    }

    pub fn with_quotes(mut self, quotes: QuoteBook) -> Self {
        self.quotes = quotes;
        self
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn mood(&self) -> Option<&Mood> {
        self.mood.as_ref()
    }

    pub fn energy(&self) -> u8 {
        self.energy.level()
    }

    pub fn deck(&self) -> Option<&TaskDeck> {
        self.deck.as_ref()
    }

    pub fn current_task(&self) -> Option<&Task> {
        self.deck.as_ref().map(TaskDeck::current)
    }

    pub fn visuals(&self) -> TreeVisuals {
        map_energy(self.energy.level())
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Select (or reselect) a mood. The deck is always reshuffled; energy
    /// is kept. On error the session is left untouched.
    pub fn select_mood(
        &mut self,
        mood: &Mood,
        source: &(impl TaskSource + ?Sized),
    ) -> Result<Vec<Directive>> {
        let tasks = source
            .tasks_for(mood)
            .ok_or_else(|| CoreError::UnknownMood(mood.to_string()))?;
        let deck = TaskDeck::initialize(mood.as_str(), tasks, &mut self.rng)?;
        tracing::debug!(%mood, tasks = deck.len(), energy = self.energy.level(), "mood selected");

        self.mood = Some(mood.clone());
        self.deck = Some(deck);

        let level = self.energy.level();
        let mut out = vec![
            Directive::SetTitle {
                text: feedback::title(mood),
            },
            Directive::RevealPanels,
            Directive::UpdateTree(map_energy(level)),
            Directive::SetEnergyBar { percent: level },
            Directive::SetFeedback(Feedback::on_select(EnergyTier::of(level))),
        ];
        out.extend(self.show_task());
        Ok(out)
    }

    /// Complete the task on display. Without a selected mood this only
    /// returns an advisory and changes nothing.
    pub fn complete_current_task(&mut self) -> Vec<Directive> {
        if self.deck.is_none() {
            tracing::debug!("completion ignored: no mood selected");
            return vec![Directive::Advisory {
                message: NO_MOOD_ADVISORY.to_string(),
            }];
        }

        let completion = self.energy.complete();
        let mut out = if completion.already_complete {
            vec![Directive::Celebrate]
        } else {
            let level = completion.new_level;
            vec![
                Directive::UpdateTree(map_energy(level)),
                Directive::SetFeedback(Feedback::on_complete(EnergyTier::of(level))),
                Directive::SetEnergyBar { percent: level },
            ]
        };

        if let Some(deck) = self.deck.as_mut() {
            deck.advance(&mut self.rng);
        }
        out.extend(self.show_task());
        out
    }

    /// Swap the affirmation. Touches nothing but the generator.
    pub fn change_quote(&mut self) -> Directive {
        Directive::ShowQuote(self.quotes.pick(&mut self.rng).clone())
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn show_task(&mut self) -> Option<Directive> {
        let text = self.deck.as_ref()?.current().text().to_string();
        Some(Directive::ShowTask {
            text,
            style: TaskStyle::random(&mut self.rng),
        })
    }
}
