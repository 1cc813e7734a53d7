use crate::club::{MidSeasonTracking, Player, PlayerDisposition, PlayerSkills, Position};
use crate::error::{CoachingError, Result};

// Builder for Player
#[derive(Default)]
pub struct PlayerBuilder {
    id: Option<u32>,
    full_name: Option<String>,
    position: Option<Position>,
    age: Option<u8>,
    disposition: Option<PlayerDisposition>,
    skills: Option<PlayerSkills>,
    years_in_scheme: Option<u8>,
    tracking: Option<MidSeasonTracking>,
}

impl PlayerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn full_name(mut self, full_name: String) -> Self {
        self.full_name = Some(full_name);
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn age(mut self, age: u8) -> Self {
        self.age = Some(age);
        self
    }

    pub fn disposition(mut self, disposition: PlayerDisposition) -> Self {
        self.disposition = Some(disposition);
        self
    }

    pub fn skills(mut self, skills: PlayerSkills) -> Self {
        self.skills = Some(skills);
        self
    }

    pub fn years_in_scheme(mut self, years_in_scheme: u8) -> Self {
        self.years_in_scheme = Some(years_in_scheme);
        self
    }

    pub fn tracking(mut self, tracking: MidSeasonTracking) -> Self {
        self.tracking = Some(tracking);
        self
    }

    pub fn build(self) -> Result<Player> {
        Ok(Player {
            id: self.id.ok_or(CoachingError::MissingField("id"))?,
            full_name: self.full_name.ok_or(CoachingError::MissingField("full_name"))?,
            position: self.position.ok_or(CoachingError::MissingField("position"))?,
            age: self.age.ok_or(CoachingError::MissingField("age"))?,
            disposition: self.disposition.unwrap_or(PlayerDisposition::Coachable),
            skills: self.skills.unwrap_or_default(),
            years_in_scheme: self.years_in_scheme.unwrap_or_default(),
            tracking: self.tracking.unwrap_or_default(),
        })
    }
}
