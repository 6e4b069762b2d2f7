//! One day's answers.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Productivity score, one of the literal inputs "1" through "5".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProductivityScore(u8);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("productivity score must be one of 1, 2, 3, 4, 5 (got {0:?})")]
pub struct ScoreError(pub String);

impl ProductivityScore {
    pub fn value(self) -> u8 {
        self.0
    }
}

impl FromStr for ProductivityScore {
    type Err = ScoreError;

    /// Only the exact single characters are accepted: no trimming, no "05", no "+3".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Self(1)),
            "2" => Ok(Self(2)),
            "3" => Ok(Self(3)),
            "4" => Ok(Self(4)),
            "5" => Ok(Self(5)),
            other => Err(ScoreError(other.to_string())),
        }
    }
}

impl TryFrom<u8> for ProductivityScore {
    type Error = ScoreError;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        if (1..=5).contains(&v) {
            Ok(Self(v))
        } else {
            Err(ScoreError(v.to_string()))
        }
    }
}

impl fmt::Display for ProductivityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The four answers collected per run. The three lists keep entry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerSet {
    pub what_i_did: Vec<String>,
    pub whats_next: Vec<String>,
    pub what_block: Vec<String>,
    pub productivity_score: ProductivityScore,
}
