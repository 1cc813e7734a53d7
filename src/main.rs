use coaching_core::{
    Coach, CoachAttributes, CoachRole, CoachingTree, DefensivePlayCaller, DefensiveTendencies, FourthDownAggressiveness,
    FourthDownDecider, MidSeasonDevelopment, MidSeasonSettings, OffensivePlayCaller, OffensiveTendencies,
    OffseasonDevelopment, OffseasonSettings, PersonalityProfile, PersonalityType, PlayCallContext, Player,
    PlayerDisposition, PlayerSkills, Position, Precipitation, RiskPhilosophy, Scheme, SchemeFitCalculator,
    SeededRandom, SkillRating, StaffChemistryAggregator, StaffMember, Tempo, TempoSelector, Tendencies, TreeName,
    Weather,
};
use env_logger::Env;
use log::info;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    env_logger::Builder::from_env(Env::default().default_filter_or("debug")).init();

    let mut random = SeededRandom::new(2024);

    let staff = sample_staff()?;
    let roster = sample_roster()?;

    let members: Vec<StaffMember> = staff
        .iter()
        .zip([4u8, 2, 1, 3, 0])
        .map(|(coach, years)| StaffMember::new(coach, years))
        .collect();

    let report = StaffChemistryAggregator::aggregate(&members);
    info!("{}", report.view().description);

    let candidate = coach(
        6,
        "Dale Sorensen",
        CoachRole::LinebackersCoach,
        CoachingTree::new(TreeName::Spread, 2, RiskPhilosophy::Aggressive),
        PersonalityProfile::new(PersonalityType::Motivator, None, 92, 25),
        55,
    )?;

    let preview = StaffChemistryAggregator::preview_hire(&members, StaffMember::new(&candidate, 0));
    info!(
        "hiring {}: {} -> {}",
        candidate,
        preview.before.description(),
        preview.after.description()
    );

    for scheme in [Scheme::WestCoast, Scheme::CoverThree] {
        let summary = SchemeFitCalculator::roster_summary(&roster, scheme);
        info!("{}: {:?}", scheme.name(), summary.counts);
    }

    for player in &roster {
        if let Some(best) = SchemeFitCalculator::best_fit(player) {
            info!("{} in {}: {}", player, best.scheme.name(), best.describe().text());
        }
    }

    let developed = OffseasonDevelopment::process_roster(
        &staff,
        &roster,
        OffseasonDevelopment::recorded_chemistry,
        &report.impact,
        &OffseasonSettings::default(),
    );

    for (player, reports) in &developed {
        for report in reports.iter().filter(|r| r.has_changes()) {
            info!(
                "coach {} {} {}: {}",
                report.coach_id,
                report.tier.description(),
                player,
                report.skill_names().join(", ")
            );
        }
    }

    let quarterback_coach = staff.iter().find(|c| c.role == CoachRole::QuarterbacksCoach);
    let settings = MidSeasonSettings::default();

    for (player, _) in &developed {
        let result = MidSeasonDevelopment::process_game(player, 91.0, quarterback_coach, &settings, &mut random);
        info!("{} after a standout game: {} skill changes", result.player, result.changes.len());
    }

    let head_coach = staff.iter().find(|c| c.role == CoachRole::HeadCoach);
    let offensive_coordinator = staff.iter().find(|c| c.role == CoachRole::OffensiveCoordinator);
    let defensive_coordinator = staff.iter().find(|c| c.role == CoachRole::DefensiveCoordinator);

    let snow = Weather {
        precipitation: Precipitation::Snow,
        wind_mph: 22,
        temperature_f: 28,
        dome: false,
    };

    let situations = [
        PlayCallContext {
            down: 1,
            distance: 10,
            yard_line: 25,
            team_score: 0,
            opponent_score: 0,
            quarter: 1,
            seconds_remaining: 900,
            weather: Weather::default(),
        },
        PlayCallContext {
            down: 3,
            distance: 8,
            yard_line: 84,
            team_score: 10,
            opponent_score: 17,
            quarter: 4,
            seconds_remaining: 95,
            weather: snow,
        },
    ];

    for context in &situations {
        let offense = OffensivePlayCaller::select(offensive_coordinator, head_coach, context, &mut random)?;
        info!("{}", offense.rationale);

        let defense = DefensivePlayCaller::select(defensive_coordinator, head_coach, context, &mut random)?;
        info!("{}", defense.rationale);

        let state = context.to_game_state();
        info!(
            "tempo {:?}, two-minute mode {:?}",
            TempoSelector::select(Tempo::Normal, &state),
            TempoSelector::two_minute_mode(state.score_differential)
        );

        let fourth = FourthDownDecider::decide_for_staff(offensive_coordinator, head_coach, context, 52)?;
        info!("fourth down: {:?} ({:?}) {}", fourth.call, fourth.confidence, fourth.rationale);
    }

    Ok(())
}

fn coach(
    id: u32,
    name: &str,
    role: CoachRole,
    tree: CoachingTree,
    personality: PersonalityProfile,
    development: u8,
) -> coaching_core::Result<Coach> {
    Coach::builder()
        .id(id)
        .full_name(name.to_string())
        .role(role)
        .tree(tree)
        .personality(personality)
        .attributes(CoachAttributes {
            development,
            ..CoachAttributes::default()
        })
        .years_experience(12)
        .age(48)
        .build()
}

fn sample_staff() -> coaching_core::Result<Vec<Coach>> {
    let west_coast = |generation| CoachingTree::new(TreeName::WestCoast, generation, RiskPhilosophy::Balanced);

    let head = coach(
        1,
        "Walt Brennan",
        CoachRole::HeadCoach,
        west_coast(2),
        PersonalityProfile::new(PersonalityType::Mentor, Some(PersonalityType::Analytical), 55, 70),
        70,
    )?;

    let mut offense = coach(
        2,
        "Rico Alvarez",
        CoachRole::OffensiveCoordinator,
        west_coast(3),
        PersonalityProfile::new(PersonalityType::Innovator, None, 85, 60),
        65,
    )?;
    offense.scheme = Some(Scheme::WestCoast);
    offense.tendencies = Some(Tendencies::Offensive(OffensiveTendencies {
        run_rate: 40,
        pass_rate: 60,
        play_action_rate: 25,
        deep_shot_rate: 20,
        fourth_down: FourthDownAggressiveness::Aggressive,
        ..OffensiveTendencies::default()
    }));

    let mut defense = coach(
        3,
        "Gus Halloran",
        CoachRole::DefensiveCoordinator,
        CoachingTree::new(TreeName::ThreeFourPressure, 2, RiskPhilosophy::Aggressive),
        PersonalityProfile::new(PersonalityType::OldSchool, None, 88, 30),
        60,
    )?;
    defense.scheme = Some(Scheme::CoverThree);
    defense.tendencies = Some(Tendencies::Defensive(DefensiveTendencies {
        blitz_rate: 38,
        ..DefensiveTendencies::default()
    }));

    let quarterbacks = coach(
        4,
        "Nate Oduya",
        CoachRole::QuarterbacksCoach,
        west_coast(3),
        PersonalityProfile::new(PersonalityType::PlayersCoach, None, 40, 80),
        82,
    )?
    .with_player_chemistry(10, 6);

    let secondary = coach(
        5,
        "Lou Petrakis",
        CoachRole::SecondaryCoach,
        CoachingTree::new(TreeName::Tampa2, 3, RiskPhilosophy::Conservative),
        PersonalityProfile::new(PersonalityType::Disciplinarian, None, 50, 50),
        58,
    )?;

    Ok(vec![head, offense, defense, quarterbacks, secondary])
}

fn skills(position: Position, value: f32) -> coaching_core::Result<PlayerSkills> {
    position
        .group()
        .relevant_skills()
        .iter()
        .try_fold(PlayerSkills::new(), |skills, skill| {
            Ok(skills.with(*skill, SkillRating::new(value, value - 6.0, value + 6.0, 27)?))
        })
}

fn sample_roster() -> coaching_core::Result<Vec<Player>> {
    let player = |id: u32, name: &str, position: Position, age: u8, value: f32, disposition: PlayerDisposition| -> coaching_core::Result<Player> {
        Player::builder()
            .id(id)
            .full_name(name.to_string())
            .position(position)
            .age(age)
            .disposition(disposition)
            .skills(skills(position, value)?)
            .build()
    };

    Ok(vec![
        player(10, "Cal Whitfield", Position::Quarterback, 23, 72.0, PlayerDisposition::Coachable)?,
        player(22, "Deion Marsh", Position::RunningBack, 26, 68.0, PlayerDisposition::Confident)?,
        player(81, "Jalen Brooks", Position::WideReceiver, 24, 75.0, PlayerDisposition::Emotional)?,
        player(24, "Marcus Tate", Position::Cornerback, 30, 70.0, PlayerDisposition::Leader)?,
    ])
}
