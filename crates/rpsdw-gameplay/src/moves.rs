use rpsdw_core::*;

/// One throw in RPSDW.
///
/// Rock, Paper and Scissors cycle as usual. Dynamite beats all three but is
/// a finite resource; Water beats only Dynamite. On the wire each move is
/// the single letter the runner uses (`R`, `P`, `S`, `D`, `W`).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub enum Move {
    #[serde(rename = "R")]
    Rock,
    #[serde(rename = "P")]
    Paper,
    #[serde(rename = "S")]
    Scissors,
    #[serde(rename = "D")]
    Dynamite,
    #[serde(rename = "W")]
    Water,
}

impl Move {
    /// The full alphabet.
    pub const ALL: [Self; 5] = [
        Self::Rock,
        Self::Paper,
        Self::Scissors,
        Self::Dynamite,
        Self::Water,
    ];
    /// The free, unlimited moves.
    pub const BASIC: [Self; 3] = [Self::Rock, Self::Paper, Self::Scissors];

    /// Dense index into `ALL`, for per-move tables.
    pub const fn index(&self) -> usize {
        *self as usize
    }
    /// Dynamite or Water.
    pub fn is_special(&self) -> bool {
        matches!(self, Self::Dynamite | Self::Water)
    }
    /// Single-letter wire code.
    pub const fn letter(&self) -> char {
        match self {
            Self::Rock => 'R',
            Self::Paper => 'P',
            Self::Scissors => 'S',
            Self::Dynamite => 'D',
            Self::Water => 'W',
        }
    }
    /// Whether `self` wins the round against `other`.
    pub fn beats(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Rock, Self::Scissors) => true,
            (Self::Paper, Self::Rock) => true,
            (Self::Scissors, Self::Paper) => true,
            (Self::Dynamite, Self::Rock | Self::Paper | Self::Scissors) => true,
            (Self::Water, Self::Dynamite) => true,
            (Self::Rock | Self::Paper | Self::Scissors, Self::Water) => true,
            _ => false,
        }
    }
}

impl TryFrom<char> for Move {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'R' => Ok(Self::Rock),
            'P' => Ok(Self::Paper),
            'S' => Ok(Self::Scissors),
            'D' => Ok(Self::Dynamite),
            'W' => Ok(Self::Water),
            _ => Err(anyhow::anyhow!("invalid move letter '{}'", c)),
        }
    }
}

impl TryFrom<&str> for Move {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(anyhow::anyhow!("move must be a single letter, got {:?}", s)),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl Arbitrary for Move {
    fn random() -> Self {
        use rand::prelude::IndexedRandom;
        let ref mut rng = rand::rng();
        Self::ALL.choose(rng).copied().expect("ALL is empty")
    }
}
