use crate::club::player::builder::PlayerBuilder;
use crate::club::{PlayerDisposition, PlayerSkills, Position, PositionGroup, Side, Skill, SkillView};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub full_name: String,
    pub position: Position,
    pub age: u8,
    pub disposition: PlayerDisposition,
    pub skills: PlayerSkills,

    /// Seasons spent in the team's current scheme
    pub years_in_scheme: u8,

    pub tracking: MidSeasonTracking,
}

/// Per-season state threaded through per-game progression
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MidSeasonTracking {
    /// 0-100, growth above 100 is allowed until the breakout fires
    pub breakout_meter: f32,
    pub has_broken_out: bool,
    /// Cumulative magnitude of mid-season skill changes this season
    pub season_development: f32,
}

impl MidSeasonTracking {
    /// Budget resets at season start; the breakout state carries over
    pub fn new_season(&self) -> MidSeasonTracking {
        MidSeasonTracking {
            season_development: 0.0,
            ..*self
        }
    }
}

impl Player {
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::new()
    }

    pub fn group(&self) -> PositionGroup {
        self.position.group()
    }

    pub fn side(&self) -> Side {
        self.position.side()
    }

    /// Skills of the player's position group the player actually has
    pub fn relevant_skills(&self) -> Vec<Skill> {
        self.skills.present(self.group().relevant_skills())
    }

    pub fn with_skills(&self, skills: PlayerSkills) -> Player {
        Player {
            skills,
            ..self.clone()
        }
    }

    pub fn with_tracking(&self, tracking: MidSeasonTracking) -> Player {
        Player {
            tracking,
            ..self.clone()
        }
    }

    pub fn with_years_in_scheme(&self, years_in_scheme: u8) -> Player {
        Player {
            years_in_scheme,
            ..self.clone()
        }
    }

    pub fn is_valid(&self) -> bool {
        self.skills.is_valid()
            && self.tracking.breakout_meter >= 0.0
            && self.tracking.season_development >= 0.0
    }

    pub fn view(&self) -> PlayerView {
        PlayerView {
            id: self.id,
            full_name: self.full_name.clone(),
            position: self.position,
            age: self.age,
            skills: self.skills.views(),
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.full_name, self.position.get_short_name())
    }
}

/// What presentation is allowed to see of a player
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub id: u32,
    pub full_name: String,
    pub position: Position,
    pub age: u8,
    pub skills: BTreeMap<Skill, SkillView>,
}
