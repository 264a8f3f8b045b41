use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Drill {
    SixtyYard,
    ThirtyYard,
    BroadJump,
    LDrill,
    MedBall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LowerIsBetter,
    HigherIsBetter,
}

impl Drill {
    pub const ALL: [Drill; 5] = [
        Drill::SixtyYard,
        Drill::ThirtyYard,
        Drill::BroadJump,
        Drill::LDrill,
        Drill::MedBall,
    ];

    pub fn direction(self) -> Direction {
        match self {
            Drill::SixtyYard | Drill::ThirtyYard | Drill::LDrill => Direction::LowerIsBetter,
            Drill::BroadJump | Drill::MedBall => Direction::HigherIsBetter,
        }
    }

    /// Half a final digit: source values print with two decimals.
    pub fn epsilon(self) -> f64 {
        match self {
            Drill::SixtyYard | Drill::ThirtyYard | Drill::LDrill => 0.005,
            Drill::BroadJump | Drill::MedBall => 0.05,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Drill::SixtyYard => "60_time",
            Drill::ThirtyYard => "30_time",
            Drill::BroadJump => "broad_ft",
            Drill::LDrill => "l_time",
            Drill::MedBall => "med_ft",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Drill::SixtyYard => "60 YD",
            Drill::ThirtyYard => "30 YD",
            Drill::BroadJump => "Broad Jump",
            Drill::LDrill => "L-Drill",
            Drill::MedBall => "Med Ball",
        }
    }

    pub fn from_column(name: &str) -> Option<Drill> {
        Drill::ALL.iter().copied().find(|d| d.column() == name)
    }

    pub fn worse_or_equal(self, other: f64, v: f64) -> bool {
        match self.direction() {
            Direction::LowerIsBetter => other >= v,
            Direction::HigherIsBetter => other <= v,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/drill.rs"]
mod tests;
