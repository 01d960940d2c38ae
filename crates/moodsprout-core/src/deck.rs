//! Shuffled task deck for the active mood.
//!
//! The deck shows every task of the source list exactly once per cycle.
//! When the cursor runs off the end, a fresh independent permutation of the
//! source list is drawn. Consecutive cycles are not de-duplicated at the
//! seam: the last task of one cycle may open the next.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::content::Task;
use crate::error::{CoreError, Result};

#[derive(Debug, Clone)]
pub struct TaskDeck {
    /// The mood's task list in catalog order.
    source: Vec<Task>,
    /// Current permutation of `source`.
    order: Vec<Task>,
    /// Index into `order`; always `< order.len()`.
    cursor: usize,
    /// Number of completed passes through the deck.
    cycles: u64,
}

impl TaskDeck {
    /// Create a deck holding a freshly shuffled copy of `tasks`.
    ///
    /// `mood` is only used for the error message.
    pub fn initialize<R: Rng + ?Sized>(mood: &str, tasks: &[Task], rng: &mut R) -> Result<Self> {
        if tasks.is_empty() {
            return Err(CoreError::EmptyTaskList {
                mood: mood.to_string(),
            });
        }
        let source = tasks.to_vec();
        let mut order = source.clone();
        order.shuffle(rng);
        Ok(Self {
            source,
            order,
            cursor: 0,
            cycles: 0,
        })
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn current(&self) -> &Task {
        &self.order[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always false: construction rejects empty lists.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn order(&self) -> &[Task] {
        &self.order
    }

    pub fn source(&self) -> &[Task] {
        &self.source
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Tasks left to show in this cycle, including the current one.
    pub fn remaining_in_cycle(&self) -> usize {
        self.order.len() - self.cursor
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Move to the next task. Returns `true` when the deck was reshuffled.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        self.cursor += 1;
        if self.cursor < self.order.len() {
            return false;
        }
        self.order.clone_from(&self.source);
        self.order.shuffle(rng);
        self.cursor = 0;
        self.cycles += 1;
        tracing::debug!(cycle = self.cycles, len = self.order.len(), "task deck reshuffled");
        true
    }
}
