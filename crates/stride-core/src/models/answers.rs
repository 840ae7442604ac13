//! Questionnaire answer types captured alongside a goal.
//!
//! The answers are frozen at generation time: they exist so the plan document
//! can be reproduced (or regenerated) from the same semantic inputs, and they
//! are never edited afterwards.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Snapshot of the questionnaire responses used to generate a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireAnswers {
    /// Target timeframe for reaching the goal
    pub timeframe: Timeframe,

    /// How much time the user is willing to put in
    pub commitment: Commitment,

    /// Prior experience with the goal's domain
    pub experience: Experience,

    /// Obstacles the user expects to run into
    #[serde(default)]
    pub obstacles: Vec<String>,

    /// Free-text motivation statement
    #[serde(default)]
    pub motivation: String,
}

/// Type-safe enumeration of goal timeframes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    OneMonth,
    #[default]
    ThreeMonths,
    SixMonths,
    OneYear,
}

impl FromStr for Timeframe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "one_month" => Ok(Timeframe::OneMonth),
            "three_months" => Ok(Timeframe::ThreeMonths),
            "six_months" => Ok(Timeframe::SixMonths),
            "one_year" => Ok(Timeframe::OneYear),
            _ => Err(format!("Invalid timeframe: {s}")),
        }
    }
}

impl Timeframe {
    /// Convert to the persisted string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::OneMonth => "one_month",
            Timeframe::ThreeMonths => "three_months",
            Timeframe::SixMonths => "six_months",
            Timeframe::OneYear => "one_year",
        }
    }
}

/// Type-safe enumeration of weekly commitment levels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Commitment {
    Light,
    #[default]
    Steady,
    Intense,
}

impl FromStr for Commitment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Commitment::Light),
            "steady" => Ok(Commitment::Steady),
            "intense" => Ok(Commitment::Intense),
            _ => Err(format!("Invalid commitment level: {s}")),
        }
    }
}

impl Commitment {
    /// Convert to the persisted string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Commitment::Light => "light",
            Commitment::Steady => "steady",
            Commitment::Intense => "intense",
        }
    }
}

/// Type-safe enumeration of prior experience levels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Experience {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl FromStr for Experience {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Experience::Beginner),
            "intermediate" => Ok(Experience::Intermediate),
            "advanced" => Ok(Experience::Advanced),
            _ => Err(format!("Invalid experience level: {s}")),
        }
    }
}

impl Experience {
    /// Convert to the persisted string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Experience::Beginner => "beginner",
            Experience::Intermediate => "intermediate",
            Experience::Advanced => "advanced",
        }
    }
}
