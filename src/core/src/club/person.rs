use serde::{Deserialize, Serialize};

/// Coaching personality, used for both coach-player and coach-coach chemistry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PersonalityType {
    Disciplinarian, // Strict, structure first
    PlayersCoach,   // Relationship driven
    Analytical,     // Data and film
    Motivator,      // Emotional, vocal
    Innovator,      // Scheme tinkerer
    OldSchool,      // Fundamentals, toughness
    Mentor,         // Patient instructor
}

impl PersonalityType {
    pub const ALL: [PersonalityType; 7] = [
        PersonalityType::Disciplinarian,
        PersonalityType::PlayersCoach,
        PersonalityType::Analytical,
        PersonalityType::Motivator,
        PersonalityType::Innovator,
        PersonalityType::OldSchool,
        PersonalityType::Mentor,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PersonalityType::Disciplinarian => "disciplinarian",
            PersonalityType::PlayersCoach => "players' coach",
            PersonalityType::Analytical => "analytical",
            PersonalityType::Motivator => "motivator",
            PersonalityType::Innovator => "innovator",
            PersonalityType::OldSchool => "old school",
            PersonalityType::Mentor => "mentor",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    pub primary: PersonalityType,
    pub secondary: Option<PersonalityType>,

    // hidden, 1-100
    pub ego: u8,
    pub adaptability: u8,
}

impl PersonalityProfile {
    pub fn new(primary: PersonalityType, secondary: Option<PersonalityType>, ego: u8, adaptability: u8) -> Self {
        PersonalityProfile {
            primary,
            secondary,
            ego,
            adaptability,
        }
    }

    pub fn is_valid(&self) -> bool {
        (1..=100).contains(&self.ego)
            && (1..=100).contains(&self.adaptability)
            && self.secondary != Some(self.primary)
    }
}

/// How a player takes coaching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerDisposition {
    Coachable,
    Confident,
    Emotional,
    Reserved,
    Leader,
    Independent,
}

impl PlayerDisposition {
    pub const ALL: [PlayerDisposition; 6] = [
        PlayerDisposition::Coachable,
        PlayerDisposition::Confident,
        PlayerDisposition::Emotional,
        PlayerDisposition::Reserved,
        PlayerDisposition::Leader,
        PlayerDisposition::Independent,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_validation() {
        let profile = PersonalityProfile::new(PersonalityType::Mentor, Some(PersonalityType::Analytical), 40, 70);
        assert!(profile.is_valid());

        let duplicated = PersonalityProfile::new(PersonalityType::Mentor, Some(PersonalityType::Mentor), 40, 70);
        assert!(!duplicated.is_valid());

        let no_ego = PersonalityProfile::new(PersonalityType::Mentor, None, 0, 70);
        assert!(!no_ego.is_valid());
    }
}
