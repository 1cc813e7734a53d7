use crate::club::Side;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FourthDownAggressiveness {
    Conservative,
    Balanced,
    Aggressive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tempo {
    Slow,
    Normal,
    HurryUp,
}

/// Rates a coordinator switches to in specific situations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffensiveOverrides {
    pub red_zone_run_rate: Option<u8>,
    pub two_minute_run_rate: Option<u8>,
    pub protect_lead_run_rate: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OffensiveTendencies {
    pub run_rate: u8,
    pub pass_rate: u8,
    pub play_action_rate: u8,
    pub deep_shot_rate: u8,
    pub fourth_down: FourthDownAggressiveness,
    pub tempo: Tempo,
    pub overrides: OffensiveOverrides,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefensiveOverrides {
    pub red_zone_blitz_rate: Option<u8>,
    pub third_and_long_blitz_rate: Option<u8>,
    pub two_minute_man_rate: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefensiveTendencies {
    pub blitz_rate: u8,
    pub man_coverage_rate: u8,
    pub press_rate: u8,
    pub overrides: DefensiveOverrides,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tendencies {
    Offensive(OffensiveTendencies),
    Defensive(DefensiveTendencies),
}

impl OffensiveTendencies {
    pub fn is_valid(&self) -> bool {
        let overrides_valid = [
            self.overrides.red_zone_run_rate,
            self.overrides.two_minute_run_rate,
            self.overrides.protect_lead_run_rate,
        ]
        .iter()
        .flatten()
        .all(|rate| *rate <= 100);

        self.run_rate as u16 + self.pass_rate as u16 == 100
            && self.play_action_rate <= 50
            && self.deep_shot_rate <= 40
            && overrides_valid
    }
}

/// Used when neither the coordinator nor the head coach has a profile
impl Default for OffensiveTendencies {
    fn default() -> Self {
        OffensiveTendencies {
            run_rate: 45,
            pass_rate: 55,
            play_action_rate: 20,
            deep_shot_rate: 15,
            fourth_down: FourthDownAggressiveness::Balanced,
            tempo: Tempo::Normal,
            overrides: OffensiveOverrides::default(),
        }
    }
}

impl DefensiveTendencies {
    pub fn is_valid(&self) -> bool {
        let overrides_valid = [
            self.overrides.red_zone_blitz_rate,
            self.overrides.third_and_long_blitz_rate,
            self.overrides.two_minute_man_rate,
        ]
        .iter()
        .flatten()
        .all(|rate| *rate <= 100);

        self.blitz_rate <= 100 && self.man_coverage_rate <= 100 && self.press_rate <= 100 && overrides_valid
    }
}

impl Default for DefensiveTendencies {
    fn default() -> Self {
        DefensiveTendencies {
            blitz_rate: 30,
            man_coverage_rate: 45,
            press_rate: 35,
            overrides: DefensiveOverrides::default(),
        }
    }
}

impl Tendencies {
    pub fn side(&self) -> Side {
        match self {
            Tendencies::Offensive(_) => Side::Offense,
            Tendencies::Defensive(_) => Side::Defense,
        }
    }

    pub fn is_valid(&self) -> bool {
        match self {
            Tendencies::Offensive(offense) => offense.is_valid(),
            Tendencies::Defensive(defense) => defense.is_valid(),
        }
    }

    pub fn offensive(&self) -> Option<&OffensiveTendencies> {
        match self {
            Tendencies::Offensive(offense) => Some(offense),
            Tendencies::Defensive(_) => None,
        }
    }

    pub fn defensive(&self) -> Option<&DefensiveTendencies> {
        match self {
            Tendencies::Defensive(defense) => Some(defense),
            Tendencies::Offensive(_) => None,
        }
    }
}
