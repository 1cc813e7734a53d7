use crate::club::player::development::{DevelopmentReport, InfluenceTier, SkillChange};
use crate::club::relations::{clamp_chemistry, StaffImpact};
use crate::club::{Coach, FitLevel, Player, SchemeFitCalculator, Skill};
use crate::shared::OffseasonSettings;
use log::{debug, trace};
use rayon::prelude::*;

/// Factors of one coach's season-end influence on one player
#[derive(Debug, Clone, PartialEq)]
pub struct DevelopmentImpact {
    pub affects_player: bool,
    pub base: f32,
    pub chemistry_modifier: f32,
    pub fit_bonus: f32,
    pub total: f32,
    pub impact_areas: Vec<Skill>,
}

impl DevelopmentImpact {
    fn none() -> Self {
        DevelopmentImpact {
            affects_player: false,
            base: 0.0,
            chemistry_modifier: 0.0,
            fit_bonus: 0.0,
            total: 0.0,
            impact_areas: Vec::new(),
        }
    }
}

pub struct OffseasonDevelopment;

impl OffseasonDevelopment {
    pub fn calculate_impact(coach: &Coach, player: &Player, chemistry: i8, settings: &OffseasonSettings) -> DevelopmentImpact {
        if !coach.role.affects(player.position) {
            return DevelopmentImpact::none();
        }

        // Records arrive from outside; out-of-range values are pulled back in
        let development = coach.attributes.development.clamp(1, 100);
        let chemistry = clamp_chemistry(chemistry as i32);

        let base = development as f32 / 100.0
            * settings.position_coach_scale
            * coach.role.development_share(settings);

        let chemistry_modifier = chemistry as f32 * settings.chemistry_scale;

        let fit_bonus = match coach.scheme {
            Some(scheme) => Self::fit_bonus(SchemeFitCalculator::calculate(player, scheme).level),
            None => 0.0,
        };

        DevelopmentImpact {
            affects_player: true,
            base,
            chemistry_modifier,
            fit_bonus,
            total: base + chemistry_modifier + fit_bonus,
            impact_areas: player.relevant_skills(),
        }
    }

    pub fn fit_bonus(level: FitLevel) -> f32 {
        match level {
            FitLevel::Perfect => 1.5,
            FitLevel::Good => 0.75,
            FitLevel::Neutral => 0.0,
            FitLevel::Poor => -0.75,
            FitLevel::Terrible => -1.5,
        }
    }

    pub fn age_modifier(age: u8) -> f32 {
        match age {
            0..=23 => 1.3,
            24..=25 => 1.1,
            26..=27 => 1.0,
            28..=29 => 0.8,
            30..=31 => 0.5,
            32..=33 => 0.3,
            _ => 0.1,
        }
    }

    /// Motivation multiplier lifted or dragged by how well the staff gets along
    pub fn motivation(coach: &Coach, staff: &StaffImpact) -> f32 {
        coach.attributes.motivation_multiplier() * (1.0 + staff.development_modifier)
    }

    /// Applies one coach's offseason to one player under a neutral staff
    pub fn apply(coach: &Coach, player: &Player, chemistry: i8, settings: &OffseasonSettings) -> (Player, DevelopmentReport) {
        Self::apply_with_staff(coach, player, chemistry, &StaffImpact::default(), settings)
    }

    /// Applies one coach's offseason to one player, returning the developed copy
    pub fn apply_with_staff(
        coach: &Coach,
        player: &Player,
        chemistry: i8,
        staff: &StaffImpact,
        settings: &OffseasonSettings,
    ) -> (Player, DevelopmentReport) {
        let impact = Self::calculate_impact(coach, player, chemistry, settings);

        let adjusted = impact.total * Self::motivation(coach, staff) * Self::age_modifier(player.age);
        let total_change = adjusted.round() as i32;

        trace!(
            "offseason coach {} / player {}: base {:.2}, chemistry {:.2}, fit {:.2}, staff {:.2}, adjusted {:.2}",
            coach.id,
            player.id,
            impact.base,
            impact.chemistry_modifier,
            impact.fit_bonus,
            staff.development_modifier,
            adjusted
        );

        let mut report = DevelopmentReport {
            coach_id: coach.id,
            player_id: player.id,
            total_change,
            tier: InfluenceTier::from_change(total_change),
            changes: Vec::new(),
        };

        if impact.impact_areas.is_empty() || total_change == 0 {
            return (player.clone(), report);
        }

        // Whole points per skill, never less than one
        let mut per_skill = total_change / impact.impact_areas.len() as i32;
        if per_skill == 0 {
            per_skill = total_change.signum();
        }

        let narrowing = if per_skill.abs() >= settings.wide_narrowing_threshold {
            2.0
        } else {
            1.0
        };

        let mut skills = player.skills.clone();

        for skill in &impact.impact_areas {
            let Some(rating) = skills.get(*skill).copied() else {
                continue;
            };

            let developed = rating.with_true_value(rating.true_value() + per_skill as f32).narrowed(narrowing);
            let applied = developed.true_value() - rating.true_value();

            // scouts still learn from a player stuck at a bound
            if applied != 0.0 {
                report.changes.push(SkillChange { skill: *skill, change: applied });
            }

            skills = skills.replaced(*skill, developed);
        }

        debug!(
            "offseason: {} {} {} ({} skills)",
            coach,
            report.tier.description(),
            player,
            report.changes.len()
        );

        (player.with_skills(skills), report)
    }

    /// Chemistry as recorded on the coach, neutral when they have no history
    pub fn recorded_chemistry(coach: &Coach, player: &Player) -> i8 {
        coach.player_chemistry(player.id).unwrap_or(0)
    }

    /// Runs every coach over every player, coaches in staff order, players in parallel.
    /// `harmony` is the staff's aggregated chemistry impact.
    pub fn process_roster<F>(
        staff: &[Coach],
        players: &[Player],
        chemistry: F,
        harmony: &StaffImpact,
        settings: &OffseasonSettings,
    ) -> Vec<(Player, Vec<DevelopmentReport>)>
    where
        F: Fn(&Coach, &Player) -> i8 + Sync,
    {
        players
            .par_iter()
            .map(|player| {
                let mut current = player.clone();
                let mut reports = Vec::new();

                for coach in staff.iter().filter(|c| c.role.affects(player.position)) {
                    let (developed, report) = Self::apply_with_staff(coach, &current, chemistry(coach, &current), harmony, settings);

                    current = developed;
                    reports.push(report);
                }

                (current, reports)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{
        CoachAttributes, CoachRole, CoachingTree, PersonalityProfile, PersonalityType, PlayerSkills,
        Position, RiskPhilosophy, SkillRating, TreeName,
    };
    use proptest::prelude::*;

    fn coach(id: u32, role: CoachRole, development: u8, motivation: u8) -> Coach {
        Coach::builder()
            .id(id)
            .full_name(format!("Coach {}", id))
            .role(role)
            .tree(CoachingTree::new(TreeName::ZoneBlocking, 2, RiskPhilosophy::Balanced))
            .personality(PersonalityProfile::new(PersonalityType::Mentor, None, 50, 50))
            .attributes(CoachAttributes {
                development,
                motivation,
                ..CoachAttributes::default()
            })
            .build()
            .unwrap()
    }

    fn running_back(age: u8, value: f32) -> Player {
        let skills = Position::RunningBack
            .group()
            .relevant_skills()
            .iter()
            .fold(PlayerSkills::new(), |skills, skill| {
                skills.with(*skill, SkillRating::new(value, value - 5.0, value + 5.0, 27).unwrap())
            });

        Player::builder()
            .id(30)
            .full_name(String::from("Andre Cole"))
            .position(Position::RunningBack)
            .age(age)
            .skills(skills)
            .build()
            .unwrap()
    }

    #[test]
    fn test_unrelated_position_coach_has_no_impact() {
        let settings = OffseasonSettings::default();
        let impact = OffseasonDevelopment::calculate_impact(
            &coach(1, CoachRole::SecondaryCoach, 90, 50),
            &running_back(22, 60.0),
            5,
            &settings,
        );

        assert!(!impact.affects_player);
        assert_eq!(impact.total, 0.0);
        assert!(impact.impact_areas.is_empty());
    }

    #[test]
    fn test_head_coach_base_is_below_position_coach() {
        let settings = OffseasonSettings::default();
        let player = running_back(24, 60.0);

        for development in [1u8, 40, 100] {
            let head = OffseasonDevelopment::calculate_impact(&coach(1, CoachRole::HeadCoach, development, 50), &player, 3, &settings);
            let position = OffseasonDevelopment::calculate_impact(&coach(2, CoachRole::RunningBacksCoach, development, 50), &player, 3, &settings);

            assert!(head.base < position.base);
            assert_eq!(head.chemistry_modifier, position.chemistry_modifier);
        }
    }

    #[test]
    fn test_age_modifier_is_monotonic() {
        let mut previous = OffseasonDevelopment::age_modifier(18);
        assert!(previous >= 1.3);

        for age in 19..45 {
            let modifier = OffseasonDevelopment::age_modifier(age);
            assert!(modifier <= previous);
            previous = modifier;
        }

        assert_eq!(OffseasonDevelopment::age_modifier(34), 0.1);
    }

    #[test]
    fn test_positive_impact_spreads_over_relevant_skills() {
        let settings = OffseasonSettings::default();
        let player = running_back(26, 60.0);

        // base 4, chemistry 1, motivation 1.0, age 1.0 -> 5 over 6 skills
        let (developed, report) = OffseasonDevelopment::apply(&coach(1, CoachRole::RunningBacksCoach, 100, 50), &player, 5, &settings);

        assert_eq!(report.total_change, 5);
        assert_eq!(report.tier, InfluenceTier::Significant);
        assert_eq!(report.changes.len(), 6);

        for (skill, rating) in developed.skills.iter() {
            assert_eq!(rating.true_value(), 61.0, "{:?}", skill);
            assert_eq!(rating.perceived_min(), 56.0);
            assert_eq!(rating.perceived_max(), 64.0);
        }

        // the input is untouched
        assert_eq!(player.skills.true_value(Skill::Speed), Some(60.0));
    }

    #[test]
    fn test_negative_chemistry_can_regress() {
        let settings = OffseasonSettings::default();
        let player = running_back(33, 60.0);

        // base 0.4, chemistry -2, age 0.3 -> -0.48 -> 0
        let (_, mild) = OffseasonDevelopment::apply(&coach(1, CoachRole::RunningBacksCoach, 10, 50), &player, -10, &settings);
        assert_eq!(mild.total_change, 0);
        assert!(!mild.has_changes());

        let young = running_back(22, 60.0);
        // (0.4 - 2) * 1.3 = -2.08 -> -2
        let (developed, report) = OffseasonDevelopment::apply(&coach(1, CoachRole::RunningBacksCoach, 10, 50), &young, -10, &settings);
        assert_eq!(report.total_change, -2);
        assert_eq!(report.tier, InfluenceTier::Negative);
        assert_eq!(developed.skills.true_value(Skill::Speed), Some(59.0));
    }

    #[test]
    fn test_roster_applies_every_affecting_coach() {
        let settings = OffseasonSettings::default();
        let staff = vec![
            coach(1, CoachRole::HeadCoach, 80, 50),
            coach(2, CoachRole::OffensiveCoordinator, 80, 50),
            coach(3, CoachRole::RunningBacksCoach, 80, 50),
            coach(4, CoachRole::SecondaryCoach, 80, 50),
        ];
        let players = vec![running_back(23, 50.0), running_back(35, 50.0)];

        let results = OffseasonDevelopment::process_roster(
            &staff,
            &players,
            OffseasonDevelopment::recorded_chemistry,
            &StaffImpact::default(),
            &settings,
        );

        assert_eq!(results.len(), 2);
        for (player, reports) in &results {
            assert_eq!(reports.len(), 3);
            assert!(player.is_valid());
        }

        let young = results[0].0.skills.true_value(Skill::Speed).unwrap();
        let old = results[1].0.skills.true_value(Skill::Speed).unwrap();
        assert!(young > old);
    }

    #[test]
    fn test_uneven_total_moves_whole_points() {
        let settings = OffseasonSettings::default();
        let player = running_back(26, 60.0);

        // base 4, chemistry 2, motivation 1.2, age 1.0 -> 7.2 -> 7 over 6 skills
        let (developed, report) = OffseasonDevelopment::apply(&coach(1, CoachRole::RunningBacksCoach, 100, 100), &player, 10, &settings);

        assert_eq!(report.total_change, 7);
        assert_eq!(developed.skills.true_value(Skill::Speed), Some(61.0));

        for change in &report.changes {
            assert_eq!(change.change, 1.0);
        }
    }

    #[test]
    fn test_out_of_range_inputs_are_pulled_back() {
        let settings = OffseasonSettings::default();
        let player = running_back(26, 60.0);

        let recorded = OffseasonDevelopment::calculate_impact(&coach(1, CoachRole::RunningBacksCoach, 100, 50), &player, 10, &settings);
        let overflowing = OffseasonDevelopment::calculate_impact(&coach(1, CoachRole::RunningBacksCoach, 250, 50), &player, 100, &settings);

        assert_eq!(overflowing.chemistry_modifier, recorded.chemistry_modifier);
        assert_eq!(overflowing.base, recorded.base);

        let (_, report) = OffseasonDevelopment::apply(&coach(1, CoachRole::RunningBacksCoach, 100, 50), &player, 100, &settings);
        assert_eq!(report.total_change, 6);
    }

    #[test]
    fn test_toxic_staff_slows_development() {
        let settings = OffseasonSettings::default();
        let staff = vec![coach(1, CoachRole::RunningBacksCoach, 100, 100)];
        let players = vec![running_back(22, 60.0)];

        let calm = OffseasonDevelopment::process_roster(
            &staff,
            &players,
            |_, _| 10,
            &StaffImpact::from_chemistry(8.0, 0),
            &settings,
        );
        let toxic = OffseasonDevelopment::process_roster(
            &staff,
            &players,
            |_, _| 10,
            &StaffImpact::from_chemistry(-10.0, 3),
            &settings,
        );

        // 6 * 1.2 * 1.3 = 9.36; with +8% -> 10.1, with -15% -> 7.96
        assert_eq!(calm[0].1[0].total_change, 10);
        assert_eq!(toxic[0].1[0].total_change, 8);

        let calm_speed = calm[0].0.skills.true_value(Skill::Speed).unwrap();
        let toxic_speed = toxic[0].0.skills.true_value(Skill::Speed).unwrap();
        assert!(toxic_speed <= calm_speed);
        assert!(toxic[0].1[0].total_change < calm[0].1[0].total_change);
    }

    #[test]
    fn test_rookie_defender_gets_no_fit_penalty_from_offensive_head_coach() {
        let settings = OffseasonSettings::default();
        let mut head = coach(1, CoachRole::HeadCoach, 60, 50);
        head.scheme = Some(crate::club::Scheme::WestCoast);

        let corner = Player::builder()
            .id(31)
            .full_name(String::from("Rookie Corner"))
            .position(Position::Cornerback)
            .age(21)
            .build()
            .unwrap();

        let impact = OffseasonDevelopment::calculate_impact(&head, &corner, 0, &settings);
        assert!(impact.affects_player);
        assert_eq!(impact.fit_bonus, 0.0);
    }

    proptest! {
        #[test]
        fn development_keeps_ratings_valid(
            value in 1.0f32..=99.0,
            width in 0.0f32..20.0,
            chemistry in -10i8..=10,
            development in 1u8..=100,
            motivation in 1u8..=100,
            age in 18u8..40,
        ) {
            let settings = OffseasonSettings::default();
            let skills = PlayerSkills::new().with(
                Skill::Speed,
                SkillRating::new(value, (value - width).max(1.0), (value + width).min(100.0), 27).unwrap(),
            );
            let player = Player::builder()
                .id(1)
                .full_name(String::from("Prop"))
                .position(Position::RunningBack)
                .age(age)
                .skills(skills)
                .build()
                .unwrap();

            let (developed, _) = OffseasonDevelopment::apply(
                &coach(1, CoachRole::RunningBacksCoach, development, motivation),
                &player,
                chemistry,
                &settings,
            );
            let rating = developed.skills.get(Skill::Speed).unwrap();

            prop_assert!((1.0..=99.0).contains(&rating.true_value()));
            prop_assert!(rating.perceived_min() <= rating.true_value());
            prop_assert!(rating.perceived_max() >= rating.true_value());
        }
    }
}
