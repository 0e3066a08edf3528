//! Core type aliases, traits, and constants for the RPSDW bot.
//!
//! This crate provides the foundational types and the default tuning
//! parameters used throughout the workspace.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Special-move probabilities, propensity rates, and uniform rolls.
pub type Probability = f64;
/// Move tallies and resource counters. Signed so that a drifted counter
/// stays observable instead of wrapping.
pub type Count = i32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// MATCH PARAMETERS
// ============================================================================
/// Dynamite each side may throw over a whole match.
pub const DYNAMITE_SUPPLY: Count = 100;

// ============================================================================
// SPECIAL MOVE BASE RATES
// Both specials start at the same rate and climb together with the tie streak.
// ============================================================================
/// Base probability of throwing dynamite with no tie streak.
pub const DYNAMITE_BASE: Probability = 0.04;
/// Base probability of throwing water with no tie streak.
pub const WATER_BASE: Probability = 0.04;
/// Added to both base rates per consecutive tie. Uncapped.
pub const TIE_STREAK_STEP: Probability = 0.02;

// ============================================================================
// PROPENSITY CORRECTION
// Opponent special-move frequencies shift our counters, gated by match length.
// Rounds strictly inside (EARLY, LATE) use the early weights, strictly above
// LATE the late weights. Exactly LATE and anything up to EARLY are untouched.
// ============================================================================
/// Opponent rate treated as "normal" for either special move.
pub const PROPENSITY_BASELINE: Probability = 0.04;
/// Rounds played before any correction applies.
pub const PROPENSITY_EARLY: usize = 10;
/// Rounds after which the late weights apply.
pub const PROPENSITY_LATE: usize = 100;
/// Water correction per unit of excess enemy dynamite, early window.
pub const WATER_WEIGHT_EARLY: Probability = 0.5;
/// Water correction per unit of excess enemy dynamite, late window.
pub const WATER_WEIGHT_LATE: Probability = 0.8;
/// Dynamite correction per unit of excess enemy water, early window.
pub const DYNAMITE_WEIGHT_EARLY: Probability = 0.2;
/// Dynamite correction per unit of excess enemy water, late window.
pub const DYNAMITE_WEIGHT_LATE: Probability = 0.5;

// ============================================================================
// DEPLETION
// ============================================================================
/// Enemy dynamite count at which water is switched off (exact match).
pub const ENEMY_DYNAMITE_SPENT: Count = DYNAMITE_SUPPLY;
/// Own dynamite remaining at which dynamite is switched off (exact match).
pub const OWN_DYNAMITE_SPENT: Count = 0;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` and writes DEBUG level to file, `level` to terminal.
#[cfg(feature = "server")]
pub fn log(level: log::LevelFilter) -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        level,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}
