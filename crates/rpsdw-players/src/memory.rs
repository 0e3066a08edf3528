use super::*;
use rpsdw_core::*;
use rpsdw_gameplay::*;

/// Running match state owned by one selector.
///
/// Updated from exactly one round per call and never reset mid-match.
/// Counters are compared by exact equality against the depletion
/// thresholds in [`Tuning`]; a counter injected past a threshold will not
/// trip it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memory {
    dynamite_left: Count,
    enemy_counts: [Count; Move::ALL.len()],
    tie_streak: Count,
}

impl Memory {
    /// Fresh state at the start of a match.
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            dynamite_left: tuning.dynamite_supply,
            enemy_counts: [0; Move::ALL.len()],
            tie_streak: 0,
        }
    }
    /// State a selector would hold after being asked once for every
    /// prefix of `state`.
    pub fn replay(tuning: &Tuning, state: &GameState) -> Self {
        let mut memory = Self::new(tuning);
        for round in state.rounds() {
            memory.observe(round);
        }
        memory
    }

    pub fn with_dynamite_left(mut self, left: Count) -> Self {
        self.dynamite_left = left;
        self
    }
    pub fn with_enemy_count(mut self, m: Move, count: Count) -> Self {
        self.enemy_counts[m.index()] = count;
        self
    }
    pub fn with_tie_streak(mut self, streak: Count) -> Self {
        self.tie_streak = streak;
        self
    }

    pub fn dynamite_left(&self) -> Count {
        self.dynamite_left
    }
    pub fn enemy_count(&self, m: Move) -> Count {
        self.enemy_counts[m.index()]
    }
    pub fn tie_streak(&self) -> Count {
        self.tie_streak
    }

    /// Folds one completed round into the counters.
    pub fn observe(&mut self, round: &Round) {
        self.enemy_counts[round.theirs().index()] += 1;
        if round.ours() == Move::Dynamite {
            self.dynamite_left -= 1;
        }
        if round.is_tie() {
            self.tie_streak += 1;
        } else {
            self.tie_streak = 0;
        }
        log::trace!("observed {} -> {}", round, self);
    }

    /// Special-move rates for the next throw, after `rounds` completed rounds.
    pub fn odds(&self, tuning: &Tuning, rounds: usize) -> Odds {
        let streak = self.tie_streak as Probability;
        let mut dynamite = tuning.dynamite_base + tuning.tie_streak_step * streak;
        let mut water = tuning.water_base + tuning.tie_streak_step * streak;
        if rounds > 0 {
            let window = tuning.window(rounds);
            let total = rounds as Probability;
            if let Some(weight) = tuning.water_weight(window) {
                let rate = self.enemy_count(Move::Dynamite) as Probability / total;
                water += (rate - tuning.propensity_baseline) * weight;
            }
            if let Some(weight) = tuning.dynamite_weight(window) {
                let rate = self.enemy_count(Move::Water) as Probability / total;
                dynamite -= (rate - tuning.propensity_baseline) * weight;
            }
        }
        if self.enemy_count(Move::Dynamite) == tuning.enemy_dynamite_spent {
            water = 0.;
        }
        if self.dynamite_left == tuning.own_dynamite_spent {
            dynamite = 0.;
        }
        Odds::new(dynamite, water)
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new(&Tuning::default())
    }
}

impl std::fmt::Display for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "dyn {} ties {} seen", self.dynamite_left, self.tie_streak)?;
        for m in Move::ALL {
            write!(f, " {}{}", m, self.enemy_count(m))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: Probability = 1e-12;

    fn close(a: Probability, b: Probability) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn fresh() {
        let memory = Memory::default();
        assert_eq!(memory.dynamite_left(), 100);
        assert_eq!(memory.tie_streak(), 0);
        assert!(Move::ALL.iter().all(|m| memory.enemy_count(*m) == 0));
    }

    #[test]
    fn observe_counts_enemy_and_spends_dynamite() {
        let mut memory = Memory::default();
        memory.observe(&Round::new(Move::Dynamite, Move::Water));
        memory.observe(&Round::new(Move::Rock, Move::Water));
        assert_eq!(memory.enemy_count(Move::Water), 2);
        assert_eq!(memory.dynamite_left(), 99);
    }

    #[test]
    fn tie_streak_increments_then_resets() {
        let mut memory = Memory::default();
        memory.observe(&Round::new(Move::Rock, Move::Rock));
        memory.observe(&Round::new(Move::Water, Move::Water));
        assert_eq!(memory.tie_streak(), 2);
        memory.observe(&Round::new(Move::Rock, Move::Paper));
        assert_eq!(memory.tie_streak(), 0);
    }

    #[test]
    fn spent_counter_is_not_floored() {
        let mut memory = Memory::default().with_dynamite_left(0);
        memory.observe(&Round::new(Move::Dynamite, Move::Rock));
        assert_eq!(memory.dynamite_left(), -1);
    }

    #[test]
    fn empty_history_uses_base_rates() {
        let odds = Memory::default().odds(&Tuning::default(), 0);
        assert_eq!(odds.dynamite(), 0.04);
        assert_eq!(odds.water(), 0.04);
    }

    #[test]
    fn tie_streak_raises_both_rates() {
        let odds = Memory::default()
            .with_tie_streak(5)
            .odds(&Tuning::default(), 5);
        assert!(close(odds.dynamite(), 0.14), "{}", odds);
        assert!(close(odds.water(), 0.14), "{}", odds);
    }

    #[test]
    fn no_correction_through_ten_rounds() {
        let memory = Memory::default()
            .with_enemy_count(Move::Dynamite, 10)
            .with_enemy_count(Move::Water, 0);
        let odds = memory.odds(&Tuning::default(), 10);
        assert_eq!(odds, Odds::new(0.04, 0.04));
    }

    #[test]
    fn early_correction() {
        // 20/50 enemy dynamite: water += (0.4 - 0.04) * 0.5
        // 10/50 enemy water:    dynamite -= (0.2 - 0.04) * 0.2
        let memory = Memory::default()
            .with_enemy_count(Move::Dynamite, 20)
            .with_enemy_count(Move::Water, 10);
        let odds = memory.odds(&Tuning::default(), 50);
        assert!(close(odds.water(), 0.22), "{}", odds);
        assert!(close(odds.dynamite(), 0.008), "{}", odds);
    }

    #[test]
    fn late_correction() {
        // 20/200 enemy dynamite: water += (0.1 - 0.04) * 0.8
        // 0/200 enemy water:     dynamite -= (0.0 - 0.04) * 0.5
        let memory = Memory::default().with_enemy_count(Move::Dynamite, 20);
        let odds = memory.odds(&Tuning::default(), 200);
        assert!(close(odds.water(), 0.088), "{}", odds);
        assert!(close(odds.dynamite(), 0.06), "{}", odds);
    }

    #[test]
    fn exactly_one_hundred_rounds_is_uncorrected() {
        let memory = Memory::default()
            .with_enemy_count(Move::Dynamite, 50)
            .with_enemy_count(Move::Water, 50);
        let odds = memory.odds(&Tuning::default(), 100);
        assert_eq!(odds, Odds::new(0.04, 0.04));
    }

    #[test]
    fn heavy_enemy_water_drives_dynamite_negative() {
        let memory = Memory::default().with_enemy_count(Move::Water, 50);
        let odds = memory.odds(&Tuning::default(), 50);
        assert!(close(odds.dynamite(), 0.04 - 0.96 * 0.2), "{}", odds);
        assert!(odds.dynamite() < 0.);
    }

    #[test]
    fn long_streak_exceeds_one() {
        let odds = Memory::default()
            .with_tie_streak(60)
            .odds(&Tuning::default(), 5);
        assert!(odds.dynamite() > 1.);
        assert!(odds.dynamite() + odds.water() > 2.);
    }

    #[test]
    fn enemy_out_of_dynamite_disables_water() {
        // 100 enemy dynamite over 50 rounds cannot happen in play
        let memory = Memory::default()
            .with_tie_streak(3)
            .with_enemy_count(Move::Dynamite, 100);
        let odds = memory.odds(&Tuning::default(), 50);
        assert_eq!(odds.water(), 0.);
        assert!(odds.dynamite() > 0.);
    }

    #[test]
    fn enemy_past_threshold_does_not_disable_water() {
        let memory = Memory::default().with_enemy_count(Move::Dynamite, 101);
        let odds = memory.odds(&Tuning::default(), 150);
        assert!(odds.water() > 0.);
    }

    #[test]
    fn own_dynamite_spent_disables_dynamite() {
        let memory = Memory::default()
            .with_dynamite_left(0)
            .with_tie_streak(7)
            .with_enemy_count(Move::Water, 0);
        let odds = memory.odds(&Tuning::default(), 150);
        assert_eq!(odds.dynamite(), 0.);
        assert!(odds.water() > 0.);
    }

    #[test]
    fn replay_matches_incremental_observation() {
        let state = GameState::from(vec![
            Round::new(Move::Dynamite, Move::Rock),
            Round::new(Move::Paper, Move::Paper),
            Round::new(Move::Water, Move::Water),
            Round::new(Move::Scissors, Move::Dynamite),
        ]);
        let mut memory = Memory::default();
        for prefix in state.prefixes() {
            if let Some(round) = prefix.last() {
                memory.observe(round);
            }
        }
        assert_eq!(memory, Memory::replay(&Tuning::default(), &state));
        assert_eq!(memory.dynamite_left(), 99);
        assert_eq!(memory.tie_streak(), 0);
        assert_eq!(memory.enemy_count(Move::Dynamite), 1);
    }
}
