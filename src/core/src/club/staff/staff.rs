use crate::club::relations::{ChemistryLevel, clamp_chemistry, is_valid_chemistry};
use crate::club::staff::builder::CoachBuilder;
use crate::club::{
    CareerStint, CoachAttributes, CoachContract, CoachRole, CoachingTree, DefensiveTendencies,
    OffensiveTendencies, PersonalityProfile, Scheme, Tendencies,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coach {
    pub id: u32,
    pub full_name: String,
    pub role: CoachRole,
    pub scheme: Option<Scheme>,
    pub tree: CoachingTree,
    pub personality: PersonalityProfile,

    // hidden
    pub attributes: CoachAttributes,

    pub years_experience: u8,
    pub age: u8,

    pub tendencies: Option<Tendencies>,
    pub contract: Option<CoachContract>,
    pub career_history: Vec<CareerStint>,

    // player id / coach id -> chemistry, -10..=10
    pub player_chemistry: BTreeMap<u32, i8>,
    pub staff_chemistry: BTreeMap<u32, i8>,
}

impl Coach {
    pub fn builder() -> CoachBuilder {
        CoachBuilder::new()
    }

    pub fn can_call_offense(&self) -> bool {
        self.role.may_call_offense()
    }

    pub fn can_call_defense(&self) -> bool {
        self.role.may_call_defense()
    }

    pub fn offensive_tendencies(&self) -> Option<&OffensiveTendencies> {
        self.tendencies.as_ref().and_then(|t| t.offensive())
    }

    pub fn defensive_tendencies(&self) -> Option<&DefensiveTendencies> {
        self.tendencies.as_ref().and_then(|t| t.defensive())
    }

    pub fn player_chemistry(&self, player_id: u32) -> Option<i8> {
        self.player_chemistry.get(&player_id).copied()
    }

    pub fn staff_chemistry(&self, coach_id: u32) -> Option<i8> {
        self.staff_chemistry.get(&coach_id).copied()
    }

    pub fn with_player_chemistry(&self, player_id: u32, value: i32) -> Coach {
        let mut coach = self.clone();
        coach.player_chemistry.insert(player_id, clamp_chemistry(value));
        coach
    }

    pub fn with_staff_chemistry(&self, coach_id: u32, value: i32) -> Coach {
        let mut coach = self.clone();
        coach.staff_chemistry.insert(coach_id, clamp_chemistry(value));
        coach
    }

    /// Offense only for the OC, defense only for the DC, either for the head coach
    pub fn tendencies_match_role(&self) -> bool {
        match &self.tendencies {
            None => true,
            Some(Tendencies::Offensive(_)) => self.role.may_call_offense(),
            Some(Tendencies::Defensive(_)) => self.role.may_call_defense(),
        }
    }

    pub fn is_valid(&self) -> bool {
        let chemistry_valid = self
            .player_chemistry
            .values()
            .chain(self.staff_chemistry.values())
            .all(|value| is_valid_chemistry(*value as i32));

        self.attributes.is_valid()
            && self.personality.is_valid()
            && self.tree.is_valid()
            && self.tendencies_match_role()
            && self.tendencies.as_ref().is_none_or(|t| t.is_valid())
            && chemistry_valid
    }

    /// What a player-facing screen may show about this coach
    pub fn view(&self, player_id: u32) -> CoachView {
        CoachView {
            id: self.id,
            full_name: self.full_name.clone(),
            role: self.role,
            scheme: self.scheme,
            years_experience: self.years_experience,
            age: self.age,
            personality: self.personality.primary.label(),
            chemistry: self
                .player_chemistry(player_id)
                .map(|value| ChemistryLevel::from_value(value as f32)),
        }
    }
}

impl Display for Coach {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.full_name, self.role.title())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoachView {
    pub id: u32,
    pub full_name: String,
    pub role: CoachRole,
    pub scheme: Option<Scheme>,
    pub years_experience: u8,
    pub age: u8,
    pub personality: &'static str,
    pub chemistry: Option<ChemistryLevel>,
}
