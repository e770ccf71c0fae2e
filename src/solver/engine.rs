//! Solve loop
//!
//! Drives the round-by-round cycle: refilter the original word list with the
//! accumulated constraints, rank what is left, propose the best word, then
//! take one line of feedback.
//!
//! ```text
//! Initializing -> Proposing -> AwaitingFeedback -> Proposing | Solved
//! ```

use tracing::{debug, info};

use super::channel::FeedbackChannel;
use super::heuristic::{Heuristic, UniqueLetterFrequency};
use super::ranker::{FrequencyTable, best_word, letter_frequencies};
use super::session::SessionState;
use super::store::CandidateStore;
use crate::core::{Constraint, Word, WordRules};
use crate::error::SolverError;
use crate::wordlists::RawWordList;

/// Where the solve loop currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Loading and default-filtering the word list
    Initializing,
    /// Ready to compute the next proposal
    Proposing,
    /// A word has been proposed and feedback is expected
    AwaitingFeedback,
    /// All-exact feedback received; terminal
    Solved,
}

/// A proposed guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proposal {
    pub word: Word,
    /// 1-based round number
    pub round: usize,
    /// Candidates consistent with all feedback so far
    pub candidates: usize,
}

/// Result of submitting feedback for a proposal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The proposal was the answer
    Solved { word: Word, rounds: usize },
    /// The feedback was accepted and these constraints were added
    Narrowed { constraints: Vec<Constraint> },
}

/// Result of driving a whole session through a channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Solved { word: Word, rounds: usize },
    OutOfRounds { rounds: usize },
}

/// Constraint-filtering word solver
///
/// Generic over the ranking heuristic; defaults to unique-letter frequency.
#[derive(Debug, Clone)]
pub struct Solver<H: Heuristic = UniqueLetterFrequency> {
    rules: WordRules,
    store: CandidateStore,
    session: SessionState,
    heuristic: H,
    phase: Phase,
    pending: Option<Word>,
    frequencies: FrequencyTable,
}

impl<H: Heuristic> Solver<H> {
    /// Create a solver from raw word-list lines
    ///
    /// Lines that break `rules` are dropped once, here.
    pub fn new(raw: &RawWordList, rules: WordRules, heuristic: H) -> Self {
        let store = CandidateStore::from_raw(raw, &rules);
        Self::with_store(store, rules, heuristic)
    }

    /// Create a solver from an existing store, starting a fresh session
    pub fn with_store(mut store: CandidateStore, rules: WordRules, heuristic: H) -> Self {
        store.reset();
        let frequencies = letter_frequencies(store.candidates(), rules.alphabet());
        let mut solver = Self {
            rules,
            store,
            session: SessionState::new(),
            heuristic,
            phase: Phase::Initializing,
            pending: None,
            frequencies,
        };
        solver.phase = Phase::Proposing;
        info!(words = solver.store.original().len(), "solver ready");
        solver
    }

    /// Compute and return the next proposal
    ///
    /// Calling this again before submitting feedback proposes the same word.
    ///
    /// # Errors
    /// - `SolverError::NoCandidatesRemaining` if no word satisfies the
    ///   feedback so far
    /// - `SolverError::AlreadySolved` once the session is solved
    pub fn propose(&mut self) -> Result<Proposal, SolverError> {
        if self.phase == Phase::Solved {
            return Err(SolverError::AlreadySolved);
        }
        self.phase = Phase::Proposing;
        self.pending = None;

        let rounds = self.session.rounds();
        let candidates = self.store.refilter(self.session.filters());
        self.frequencies = letter_frequencies(self.store.candidates(), self.rules.alphabet());

        let word = best_word(self.store.candidates(), &self.frequencies, &self.heuristic)
            .cloned()
            .ok_or(SolverError::NoCandidatesRemaining { rounds })?;

        info!(round = rounds + 1, word = %word, candidates, "proposing");
        self.pending = Some(word.clone());
        self.phase = Phase::AwaitingFeedback;

        Ok(Proposal {
            word,
            round: rounds + 1,
            candidates,
        })
    }

    /// Submit one line of feedback for the pending proposal
    ///
    /// The all-exact line ends the session. Anything else is interpreted and
    /// its constraints are appended to the filter list.
    ///
    /// # Errors
    /// - `SolverError::Feedback` for a malformed line; the round is not
    ///   applied and the same proposal still awaits feedback
    /// - `SolverError::NoPendingGuess` if nothing has been proposed
    /// - `SolverError::AlreadySolved` once the session is solved
    pub fn submit(&mut self, feedback: &str) -> Result<RoundOutcome, SolverError> {
        match self.phase {
            Phase::Solved => return Err(SolverError::AlreadySolved),
            Phase::AwaitingFeedback => {}
            Phase::Initializing | Phase::Proposing => return Err(SolverError::NoPendingGuess),
        }
        let Some(word) = self.pending.as_ref() else {
            return Err(SolverError::NoPendingGuess);
        };

        if feedback == self.rules.solved_feedback() {
            let rounds = self.session.rounds() + 1;
            info!(word = %word, rounds, "solved");
            self.phase = Phase::Solved;
            return Ok(RoundOutcome::Solved {
                word: word.clone(),
                rounds,
            });
        }

        let constraints = self.session.accept_round(word, feedback)?;
        debug!(
            added = constraints.len(),
            total = self.session.filters().len(),
            "accepted feedback"
        );
        self.pending = None;
        self.phase = Phase::Proposing;

        Ok(RoundOutcome::Narrowed { constraints })
    }

    /// Play until solved, exchanging words and feedback through `channel`
    ///
    /// # Errors
    /// Propagates any error from [`Solver::propose`], [`Solver::submit`] or
    /// the channel. The session keeps every round accepted before the error,
    /// so calling `run` again resumes where it stopped.
    pub fn run<C>(&mut self, channel: &mut C) -> Result<SessionOutcome, SolverError>
    where
        C: FeedbackChannel + ?Sized,
    {
        self.run_bounded(channel, None)
    }

    /// Like [`Solver::run`], but gives up after `max_rounds` proposals
    ///
    /// # Errors
    /// Same as [`Solver::run`].
    pub fn run_bounded<C>(
        &mut self,
        channel: &mut C,
        max_rounds: Option<usize>,
    ) -> Result<SessionOutcome, SolverError>
    where
        C: FeedbackChannel + ?Sized,
    {
        let mut proposed = 0;
        loop {
            if max_rounds.is_some_and(|max| proposed >= max) {
                return Ok(SessionOutcome::OutOfRounds { rounds: proposed });
            }

            let proposal = self.propose()?;
            proposed += 1;
            channel.emit(&proposal)?;

            let feedback = channel.receive()?;
            if let RoundOutcome::Solved { word, rounds } = self.submit(&feedback)? {
                return Ok(SessionOutcome::Solved { word, rounds });
            }
        }
    }

    /// Forget all feedback and start a new game on the same word list
    pub fn reset(&mut self) {
        self.store.reset();
        self.session = SessionState::new();
        self.pending = None;
        self.frequencies = letter_frequencies(self.store.candidates(), self.rules.alphabet());
        self.phase = Phase::Proposing;
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub const fn session(&self) -> &SessionState {
        &self.session
    }

    #[inline]
    #[must_use]
    pub const fn store(&self) -> &CandidateStore {
        &self.store
    }

    #[inline]
    #[must_use]
    pub const fn rules(&self) -> &WordRules {
        &self.rules
    }

    #[inline]
    #[must_use]
    pub const fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Frequency table from the most recent proposal
    #[inline]
    #[must_use]
    pub const fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    /// Word awaiting feedback, if any
    #[inline]
    #[must_use]
    pub const fn pending(&self) -> Option<&Word> {
        self.pending.as_ref()
    }
}
