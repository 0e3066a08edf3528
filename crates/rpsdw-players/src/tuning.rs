//! Tunable constants of the selection heuristic.
use anyhow::Context;
use rpsdw_core::*;

/// Which propensity weights apply for a given number of completed rounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Too few rounds, or exactly on the late boundary. No correction.
    Closed,
    /// Strictly between the early and late boundaries.
    Early,
    /// Strictly beyond the late boundary.
    Late,
}

/// Every number the heuristic uses, with the canonical values as defaults.
///
/// Earlier drafts of the bot differ from the canonical one only in these
/// numbers, so they are parameterizations of this struct rather than
/// separate bots. Missing keys in a JSON file fall back to the defaults.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub dynamite_supply: Count,
    pub dynamite_base: Probability,
    pub water_base: Probability,
    pub tie_streak_step: Probability,
    pub propensity_baseline: Probability,
    pub propensity_early: usize,
    pub propensity_late: usize,
    pub water_weight_early: Probability,
    pub water_weight_late: Probability,
    pub dynamite_weight_early: Probability,
    pub dynamite_weight_late: Probability,
    pub enemy_dynamite_spent: Count,
    pub own_dynamite_spent: Count,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            dynamite_supply: DYNAMITE_SUPPLY,
            dynamite_base: DYNAMITE_BASE,
            water_base: WATER_BASE,
            tie_streak_step: TIE_STREAK_STEP,
            propensity_baseline: PROPENSITY_BASELINE,
            propensity_early: PROPENSITY_EARLY,
            propensity_late: PROPENSITY_LATE,
            water_weight_early: WATER_WEIGHT_EARLY,
            water_weight_late: WATER_WEIGHT_LATE,
            dynamite_weight_early: DYNAMITE_WEIGHT_EARLY,
            dynamite_weight_late: DYNAMITE_WEIGHT_LATE,
            enemy_dynamite_spent: ENEMY_DYNAMITE_SPENT,
            own_dynamite_spent: OWN_DYNAMITE_SPENT,
        }
    }
}

impl Tuning {
    /// Reads a JSON tuning file.
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read tuning file {}", path.display()))?;
        Self::try_from(text.as_str()).with_context(|| format!("parse {}", path.display()))
    }
    pub fn window(&self, rounds: usize) -> Window {
        if rounds > self.propensity_early && rounds < self.propensity_late {
            Window::Early
        } else if rounds > self.propensity_late {
            Window::Late
        } else {
            Window::Closed
        }
    }
    /// Weight on excess enemy dynamite when correcting our water rate.
    pub fn water_weight(&self, window: Window) -> Option<Probability> {
        match window {
            Window::Closed => None,
            Window::Early => Some(self.water_weight_early),
            Window::Late => Some(self.water_weight_late),
        }
    }
    /// Weight on excess enemy water when correcting our dynamite rate.
    pub fn dynamite_weight(&self, window: Window) -> Option<Probability> {
        match window {
            Window::Closed => None,
            Window::Early => Some(self.dynamite_weight_early),
            Window::Late => Some(self.dynamite_weight_late),
        }
    }
}

impl TryFrom<&str> for Tuning {
    type Error = anyhow::Error;
    fn try_from(json: &str) -> Result<Self, Self::Error> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows() {
        let tuning = Tuning::default();
        assert_eq!(tuning.window(0), Window::Closed);
        assert_eq!(tuning.window(10), Window::Closed);
        assert_eq!(tuning.window(11), Window::Early);
        assert_eq!(tuning.window(99), Window::Early);
        assert_eq!(tuning.window(100), Window::Closed);
        assert_eq!(tuning.window(101), Window::Late);
    }

    #[test]
    fn dynamite_corrected_less_than_water() {
        let tuning = Tuning::default();
        for window in [Window::Early, Window::Late] {
            let w = tuning.water_weight(window).unwrap();
            let d = tuning.dynamite_weight(window).unwrap();
            assert!(d < w, "{:?}: {} !< {}", window, d, w);
        }
        assert_eq!(tuning.water_weight(Window::Closed), None);
        assert_eq!(tuning.dynamite_weight(Window::Closed), None);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let tuning = Tuning::try_from(r#"{"tie_streak_step": 0.05}"#).unwrap();
        assert_eq!(tuning.tie_streak_step, 0.05);
        assert_eq!(tuning.water_weight_late, WATER_WEIGHT_LATE);
        assert_eq!(tuning.dynamite_supply, 100);
    }

    #[test]
    fn empty_json_is_default() {
        assert_eq!(Tuning::try_from("{}").unwrap(), Tuning::default());
    }

    #[test]
    fn malformed_json() {
        assert!(Tuning::try_from("{\"propensity_late\": -1}").is_err());
        assert!(Tuning::load("/nonexistent/tuning.json").is_err());
    }
}
