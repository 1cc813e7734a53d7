use crate::club::player::development::{BreakoutTracker, MidSeasonResult, SkillChange};
use crate::club::{Coach, Player};
use crate::shared::{MidSeasonSettings, RandomSource};
use log::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePerformance {
    Standout,
    Ordinary,
    Poor,
}

impl GamePerformance {
    pub fn from_score(score: f32, settings: &MidSeasonSettings) -> Self {
        if score >= settings.standout_score {
            GamePerformance::Standout
        } else if score <= settings.poor_score {
            GamePerformance::Poor
        } else {
            GamePerformance::Ordinary
        }
    }
}

pub struct MidSeasonDevelopment;

impl MidSeasonDevelopment {
    pub fn age_modifier(age: u8) -> f32 {
        match age {
            0..=24 => 1.3,
            25..=28 => 1.0,
            _ => 0.7,
        }
    }

    /// Linear in the position coach's development, none without a coach
    pub fn coach_bonus(coach: Option<&Coach>, settings: &MidSeasonSettings) -> f32 {
        coach
            .map(|c| c.attributes.development.min(100) as f32 / 100.0 * settings.max_coach_bonus)
            .unwrap_or(0.0)
    }

    /// Per-game progression followed by the breakout check.
    /// Regression looks at this game only; poor streaks are not tracked.
    pub fn process_game<R: RandomSource>(
        player: &Player,
        score: f32,
        coach: Option<&Coach>,
        settings: &MidSeasonSettings,
        random: &mut R,
    ) -> MidSeasonResult {
        let performance = GamePerformance::from_score(score, settings);

        let (progressed, changes) = match performance {
            GamePerformance::Standout => Self::progress(player, coach, settings, random),
            GamePerformance::Poor => Self::regress(player, settings, random),
            GamePerformance::Ordinary => (player.clone(), Vec::new()),
        };

        let (player, breakout) = BreakoutTracker::update(&progressed, performance, settings, random);

        debug!(
            "mid-season: {} {:?} game, {} skill changes, breakout: {}",
            player,
            performance,
            changes.len(),
            breakout.is_some()
        );

        MidSeasonResult {
            player,
            changes,
            breakout,
        }
    }

    fn remaining_budget(player: &Player, settings: &MidSeasonSettings) -> f32 {
        (settings.season_cap - player.tracking.season_development).max(0.0)
    }

    fn progress<R: RandomSource>(
        player: &Player,
        coach: Option<&Coach>,
        settings: &MidSeasonSettings,
        random: &mut R,
    ) -> (Player, Vec<SkillChange>) {
        let mut remaining = Self::remaining_budget(player, settings);
        if remaining <= 0.0 {
            return (player.clone(), Vec::new());
        }

        let relevant = player.relevant_skills();
        let count = 1 + random.index(2);
        let chosen = random.pick_distinct(&relevant, count);

        let age_modifier = Self::age_modifier(player.age);
        let bonus = Self::coach_bonus(coach, settings);

        let mut skills = player.skills.clone();
        let mut tracking = player.tracking;
        let mut changes = Vec::new();

        for skill in chosen {
            if remaining <= 0.0 {
                break;
            }

            let (min, max) = settings.standout_gain;
            let gain = (random.range_f32(min, max) * age_modifier + bonus).min(remaining);

            let Some(rating) = skills.get(skill).copied() else {
                continue;
            };
            let developed = rating.with_true_value(rating.true_value() + gain);
            let applied = developed.true_value() - rating.true_value();

            if applied == 0.0 {
                continue;
            }

            trace!("player {} standout: {:?} {:+.2}", player.id, skill, applied);

            remaining -= applied.abs();
            tracking.season_development += applied.abs();
            skills = skills.replaced(skill, developed);
            changes.push(SkillChange { skill, change: applied });
        }

        (player.with_skills(skills).with_tracking(tracking), changes)
    }

    fn regress<R: RandomSource>(player: &Player, settings: &MidSeasonSettings, random: &mut R) -> (Player, Vec<SkillChange>) {
        let remaining = Self::remaining_budget(player, settings);
        let relevant = player.relevant_skills();

        if remaining <= 0.0 || relevant.is_empty() {
            return (player.clone(), Vec::new());
        }

        let skill = relevant[random.index(relevant.len())];
        let (min, max) = settings.poor_loss;
        let loss = (random.range_f32(min, max) * Self::age_modifier(player.age)).min(remaining);

        let Some(rating) = player.skills.get(skill).copied() else {
            return (player.clone(), Vec::new());
        };
        let developed = rating.with_true_value(rating.true_value() - loss);
        let applied = developed.true_value() - rating.true_value();

        if applied == 0.0 {
            return (player.clone(), Vec::new());
        }

        trace!("player {} poor game: {:?} {:+.2}", player.id, skill, applied);

        let mut tracking = player.tracking;
        tracking.season_development += applied.abs();

        (
            player
                .with_skills(player.skills.replaced(skill, developed))
                .with_tracking(tracking),
            vec![SkillChange { skill, change: applied }],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{
        CoachAttributes, CoachRole, CoachingTree, MidSeasonTracking, PersonalityProfile, PersonalityType,
        PlayerSkills, Position, RiskPhilosophy, Skill, SkillRating, TreeName,
    };
    use crate::shared::random::ScriptedRandom;
    use crate::shared::SeededRandom;
    use proptest::prelude::*;

    fn quarterback(age: u8, season_development: f32) -> Player {
        let skills = Position::Quarterback
            .group()
            .relevant_skills()
            .iter()
            .fold(PlayerSkills::new(), |skills, skill| {
                skills.with(*skill, SkillRating::new(60.0, 55.0, 65.0, 27).unwrap())
            });

        Player::builder()
            .id(12)
            .full_name(String::from("Eli Novak"))
            .position(Position::Quarterback)
            .age(age)
            .skills(skills)
            .tracking(MidSeasonTracking {
                season_development,
                ..MidSeasonTracking::default()
            })
            .build()
            .unwrap()
    }

    fn position_coach(development: u8) -> Coach {
        Coach::builder()
            .id(3)
            .full_name(String::from("Sam Ibarra"))
            .role(CoachRole::QuarterbacksCoach)
            .tree(CoachingTree::new(TreeName::AirCoryell, 3, RiskPhilosophy::Aggressive))
            .personality(PersonalityProfile::new(PersonalityType::Analytical, None, 40, 60))
            .attributes(CoachAttributes {
                development,
                ..CoachAttributes::default()
            })
            .build()
            .unwrap()
    }

    #[test]
    fn test_performance_thresholds() {
        let settings = MidSeasonSettings::default();

        assert_eq!(GamePerformance::from_score(85.0, &settings), GamePerformance::Standout);
        assert_eq!(GamePerformance::from_score(84.9, &settings), GamePerformance::Ordinary);
        assert_eq!(GamePerformance::from_score(25.1, &settings), GamePerformance::Ordinary);
        assert_eq!(GamePerformance::from_score(25.0, &settings), GamePerformance::Poor);
    }

    #[test]
    fn test_ordinary_game_changes_nothing() {
        let settings = MidSeasonSettings::default();
        let player = quarterback(27, 0.0);

        let result = MidSeasonDevelopment::process_game(&player, 60.0, None, &settings, &mut SeededRandom::new(1));

        assert!(result.changes.is_empty());
        assert_eq!(result.player, player);
    }

    #[test]
    fn test_standout_boosts_one_skill() {
        let settings = MidSeasonSettings::default();
        let player = quarterback(27, 0.0);

        // one skill, first in the pool, gain at the middle of the range
        let mut random = ScriptedRandom::new(&[0.0, 0.0, 0.5]);
        let result = MidSeasonDevelopment::process_game(&player, 90.0, None, &settings, &mut random);

        assert_eq!(result.changes.len(), 1);
        assert_eq!(result.changes[0].skill, Skill::ThrowPower);
        assert!((result.changes[0].change - 1.0).abs() < 1e-5);
        assert!((result.player.skills.true_value(Skill::ThrowPower).unwrap() - 61.0).abs() < 1e-5);
        assert!((result.player.tracking.season_development - 1.0).abs() < 1e-5);
        assert!(result.breakout.is_none());
    }

    #[test]
    fn test_standout_respects_season_cap() {
        let settings = MidSeasonSettings::default();
        let player = quarterback(27, 2.5);

        // two skills, each with the largest gain
        let mut random = ScriptedRandom::new(&[0.99]);
        let result = MidSeasonDevelopment::process_game(&player, 95.0, Some(&position_coach(100)), &settings, &mut random);

        assert_eq!(result.changes.len(), 1);
        assert!((result.changes[0].change - 0.5).abs() < 1e-5);
        assert!((result.player.tracking.season_development - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_exhausted_budget_blocks_progression() {
        let settings = MidSeasonSettings::default();
        let player = quarterback(27, 3.0);

        let standout = MidSeasonDevelopment::process_game(&player, 99.0, None, &settings, &mut SeededRandom::new(5));
        let poor = MidSeasonDevelopment::process_game(&player, 5.0, None, &settings, &mut SeededRandom::new(5));

        assert!(standout.changes.is_empty());
        assert!(poor.changes.is_empty());
    }

    #[test]
    fn test_maxed_skills_report_no_changes() {
        let settings = MidSeasonSettings::default();
        let skills = Position::Quarterback
            .group()
            .relevant_skills()
            .iter()
            .fold(PlayerSkills::new(), |skills, skill| {
                skills.with(*skill, SkillRating::new(99.0, 95.0, 99.0, 27).unwrap())
            });
        let player = quarterback(27, 0.0).with_skills(skills);

        let result = MidSeasonDevelopment::process_game(&player, 95.0, None, &settings, &mut ScriptedRandom::new(&[0.99]));

        assert!(result.changes.is_empty());
        assert_eq!(result.player.tracking.season_development, 0.0);
    }

    #[test]
    fn test_poor_game_regresses_one_skill() {
        let settings = MidSeasonSettings::default();
        let player = quarterback(30, 0.0);

        let mut random = ScriptedRandom::new(&[0.0, 0.0]);
        let result = MidSeasonDevelopment::process_game(&player, 10.0, None, &settings, &mut random);

        assert_eq!(result.changes.len(), 1);
        // 0.3 * 0.7
        assert!((result.changes[0].change + 0.21).abs() < 1e-5);
        assert!(result.player.skills.true_value(Skill::ThrowPower).unwrap() < 60.0);
    }

    #[test]
    fn test_coach_bonus_is_linear() {
        let settings = MidSeasonSettings::default();

        assert_eq!(MidSeasonDevelopment::coach_bonus(None, &settings), 0.0);
        assert!((MidSeasonDevelopment::coach_bonus(Some(&position_coach(100)), &settings) - 0.3).abs() < 1e-6);
        assert!((MidSeasonDevelopment::coach_bonus(Some(&position_coach(50)), &settings) - 0.15).abs() < 1e-6);
    }

    proptest! {
        #[test]
        fn season_budget_never_exceeded(seed in any::<u64>(), scores in prop::collection::vec(0.0f32..100.0, 1..40)) {
            let settings = MidSeasonSettings::default();
            let coach = position_coach(100);
            let mut random = SeededRandom::new(seed);
            let mut player = quarterback(27, 0.0);

            for score in scores {
                player = MidSeasonDevelopment::process_game(&player, score, Some(&coach), &settings, &mut random).player;
                prop_assert!(player.tracking.season_development <= settings.season_cap + 1e-4);
                prop_assert!(player.skills.is_valid());
            }
        }
    }
}
