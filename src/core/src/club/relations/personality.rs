use crate::club::{PersonalityType, PlayerDisposition};

// Rows and columns follow PersonalityType::ALL
const COMPATIBILITY: [[i8; 7]; 7] = [
    //  Dis  PC  Ana  Mot  Inn  Old  Men
    [1, -2, 1, 0, -1, 3, 1],   // Disciplinarian
    [-2, 2, 0, 2, 1, -2, 2],   // PlayersCoach
    [1, 0, 2, -1, 2, -1, 1],   // Analytical
    [0, 2, -1, 0, 0, 0, 1],    // Motivator
    [-1, 1, 2, 0, 1, -3, 1],   // Innovator
    [3, -2, -1, 0, -3, 2, 0],  // OldSchool
    [1, 2, 1, 1, 1, 0, 2],     // Mentor
];

// Columns follow PlayerDisposition::ALL
const DISPOSITION_MATCH: [[i8; 6]; 7] = [
    // Coachable Confident Emotional Reserved Leader Independent
    [3, -1, -3, 1, 1, -4],  // Disciplinarian
    [2, 3, 4, 2, 2, 1],     // PlayersCoach
    [2, 0, -2, 3, 1, 2],    // Analytical
    [2, 3, 4, -1, 3, 0],    // Motivator
    [2, 2, 0, 1, 1, 3],     // Innovator
    [3, -2, -2, 1, 2, -5],  // OldSchool
    [5, 1, 2, 4, 2, 0],     // Mentor
];

const CONFLICT_BELOW: i8 = -1;
const SYNERGY_ABOVE: i8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalityInteraction {
    Synergy,
    Neutral,
    Conflict,
}

fn personality_index(personality: PersonalityType) -> usize {
    match personality {
        PersonalityType::Disciplinarian => 0,
        PersonalityType::PlayersCoach => 1,
        PersonalityType::Analytical => 2,
        PersonalityType::Motivator => 3,
        PersonalityType::Innovator => 4,
        PersonalityType::OldSchool => 5,
        PersonalityType::Mentor => 6,
    }
}

fn disposition_index(disposition: PlayerDisposition) -> usize {
    match disposition {
        PlayerDisposition::Coachable => 0,
        PlayerDisposition::Confident => 1,
        PlayerDisposition::Emotional => 2,
        PlayerDisposition::Reserved => 3,
        PlayerDisposition::Leader => 4,
        PlayerDisposition::Independent => 5,
    }
}

/// Signed coach-coach compatibility, symmetric
pub fn compatibility(a: PersonalityType, b: PersonalityType) -> i8 {
    COMPATIBILITY[personality_index(a)][personality_index(b)]
}

pub fn interaction(a: PersonalityType, b: PersonalityType) -> PersonalityInteraction {
    match compatibility(a, b) {
        score if score < CONFLICT_BELOW => PersonalityInteraction::Conflict,
        score if score > SYNERGY_ABOVE => PersonalityInteraction::Synergy,
        _ => PersonalityInteraction::Neutral,
    }
}

/// How a player with the given disposition takes to a coach, -5..=5
pub fn disposition_match(coach: PersonalityType, player: PlayerDisposition) -> i8 {
    DISPOSITION_MATCH[personality_index(coach)][disposition_index(player)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexes_follow_all_order() {
        for (index, personality) in PersonalityType::ALL.iter().enumerate() {
            assert_eq!(personality_index(*personality), index);
        }
        for (index, disposition) in PlayerDisposition::ALL.iter().enumerate() {
            assert_eq!(disposition_index(*disposition), index);
        }
    }

    #[test]
    fn test_compatibility_is_symmetric() {
        for a in PersonalityType::ALL {
            for b in PersonalityType::ALL {
                assert_eq!(compatibility(a, b), compatibility(b, a), "{:?} / {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_disposition_match_is_bounded() {
        for coach in PersonalityType::ALL {
            for player in PlayerDisposition::ALL {
                let value = disposition_match(coach, player);
                assert!((-5..=5).contains(&value));
            }
        }
    }

    #[test]
    fn test_interaction_thresholds() {
        assert_eq!(
            interaction(PersonalityType::Innovator, PersonalityType::OldSchool),
            PersonalityInteraction::Conflict
        );
        assert_eq!(
            interaction(PersonalityType::Disciplinarian, PersonalityType::OldSchool),
            PersonalityInteraction::Synergy
        );
        // -1 is not yet a conflict
        assert_eq!(
            interaction(PersonalityType::Analytical, PersonalityType::Motivator),
            PersonalityInteraction::Neutral
        );
    }
}
