//! The tie-streak / propensity heuristic.
use super::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rpsdw_gameplay::*;

/// Move selector for one match.
///
/// Each call folds the newest round into [`Memory`], derives [`Odds`] for
/// the two special moves, and rolls. Construct one per match and feed it
/// every prefix of the history in order; selectors share nothing, so any
/// number of matches can run side by side.
///
/// The selector only looks at the last round of whatever it is handed.
/// Calling it twice with the same history counts that round twice.
pub struct Selector<R = SmallRng>
where
    R: Rng,
{
    tuning: Tuning,
    memory: Memory,
    rng: R,
    observers: Vec<Box<dyn Observer>>,
}

impl Selector<SmallRng> {
    /// Selector seeded from the operating system.
    pub fn new(tuning: Tuning) -> Self {
        Self::with_rng(tuning, SmallRng::from_os_rng())
    }
    /// Reproducible selector.
    pub fn seeded(tuning: Tuning, seed: u64) -> Self {
        Self::with_rng(tuning, SmallRng::seed_from_u64(seed))
    }
}

impl Default for Selector<SmallRng> {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl<R> Selector<R>
where
    R: Rng,
{
    pub fn with_rng(tuning: Tuning, rng: R) -> Self {
        let memory = Memory::new(&tuning);
        Self::from_memory(tuning, memory, rng)
    }
    /// Starts from an arbitrary memory, e.g. one rebuilt with
    /// [`Memory::replay`] or a synthetic one in tests.
    pub fn from_memory(tuning: Tuning, memory: Memory, rng: R) -> Self {
        Self {
            tuning,
            memory,
            rng,
            observers: Vec::new(),
        }
    }
    /// Picks up a match mid-way, e.g. in a runner that starts a fresh
    /// process every round. Memory is rebuilt from every round but the
    /// newest, which the next call to [`Self::decide`] folds in as usual.
    pub fn resume(tuning: Tuning, state: &GameState, rng: R) -> Self {
        let prior = state.rounds()[..state.len().saturating_sub(1)]
            .iter()
            .copied()
            .collect::<GameState>();
        let memory = Memory::replay(&tuning, &prior);
        Self::from_memory(tuning, memory, rng)
    }
    /// Registers a hook called after every decision.
    pub fn observe<O>(mut self, observer: O) -> Self
    where
        O: Observer + 'static,
    {
        self.observers.push(Box::new(observer));
        self
    }
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Picks the next move and reports how it was picked.
    pub fn decide(&mut self, state: &GameState) -> Decision {
        if let Some(round) = state.last() {
            self.memory.observe(round);
        }
        let odds = self.memory.odds(&self.tuning, state.len());
        let (roll, choice) = odds.sample(&mut self.rng);
        let decision = Decision::new(state.len(), odds, roll, choice);
        for observer in self.observers.iter_mut() {
            observer.decided(&decision, &self.memory);
        }
        decision
    }
    /// Picks the next move.
    pub fn choose(&mut self, state: &GameState) -> Move {
        self.decide(state).choice()
    }
}

impl<R> Bot for Selector<R>
where
    R: Rng + Send,
{
    fn make_move(&mut self, state: &GameState) -> Move {
        self.choose(state)
    }
}
