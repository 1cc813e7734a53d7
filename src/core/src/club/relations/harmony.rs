use crate::club::relations::{ChemistryLevel, CoachPairChemistry, CHEMISTRY_MAX, CHEMISTRY_MIN};
use crate::club::Coach;
use itertools::Itertools;
use log::{debug, warn};
use serde::Serialize;

const TENURE_PER_YEAR: f32 = 0.5;
const TENURE_CAP: f32 = 3.0;
const SEVERE_CONFLICT: f32 = -5.0;
const NOTABLE_POSITIVE: f32 = 2.0;
const NOTABLE_NEGATIVE: f32 = -2.0;

#[derive(Debug, Clone, Copy)]
pub struct StaffMember<'c> {
    pub coach: &'c Coach,
    pub years_on_staff: u8,
}

impl<'c> StaffMember<'c> {
    pub fn new(coach: &'c Coach, years_on_staff: u8) -> Self {
        StaffMember { coach, years_on_staff }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PairValue {
    first: usize,
    second: usize,
    value: f32,
}

/// Two coaches whose relationship stands out, by name only
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotableRelationship {
    pub first_coach_id: u32,
    pub first_coach: String,
    pub second_coach_id: u32,
    pub second_coach: String,
}

/// What staff chemistry does to the rest of the simulation
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct StaffImpact {
    /// Fraction, -0.15..=0.10
    pub development_modifier: f32,
    /// Fraction, -0.08..=0.05
    pub game_day_modifier: f32,
    /// Morale points, -8..=5
    pub morale_modifier: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StaffChemistryReport {
    pub overall: f32,
    pub pair_count: usize,
    pub severe_conflicts: usize,
    pub harmony: ChemistryLevel,
    pub strongest_positive: Option<NotableRelationship>,
    pub strongest_negative: Option<NotableRelationship>,
    pub impact: StaffImpact,
}

/// Presentation side of a staff report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffHarmonyView {
    pub harmony: ChemistryLevel,
    pub description: String,
    pub strongest_positive: Option<NotableRelationship>,
    pub strongest_negative: Option<NotableRelationship>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HirePreview {
    pub before: ChemistryLevel,
    pub after: ChemistryLevel,
}

impl HirePreview {
    pub fn improves(&self) -> bool {
        self.after > self.before
    }

    pub fn hurts(&self) -> bool {
        self.after < self.before
    }
}

impl StaffImpact {
    pub fn from_chemistry(overall: f32, severe_conflicts: usize) -> Self {
        let severe = severe_conflicts as f32;

        StaffImpact {
            development_modifier: (overall * 0.01 - 0.02 * severe).clamp(-0.15, 0.10),
            game_day_modifier: (overall * 0.005 - 0.01 * severe).clamp(-0.08, 0.05),
            morale_modifier: (overall * 0.5 - severe).clamp(-8.0, 5.0),
        }
    }
}

impl StaffChemistryReport {
    fn neutral() -> Self {
        StaffChemistryReport {
            overall: 0.0,
            pair_count: 0,
            severe_conflicts: 0,
            harmony: ChemistryLevel::Neutral,
            strongest_positive: None,
            strongest_negative: None,
            impact: StaffImpact::default(),
        }
    }

    pub fn view(&self) -> StaffHarmonyView {
        let mut description = format!("The staff has {}", self.harmony.description());

        if let Some(positive) = &self.strongest_positive {
            description.push_str(&format!(
                ". {} and {} work especially well together",
                positive.first_coach, positive.second_coach
            ));
        }

        if let Some(negative) = &self.strongest_negative {
            description.push_str(&format!(
                ". {} and {} do not see eye to eye",
                negative.first_coach, negative.second_coach
            ));
        }

        description.push('.');

        StaffHarmonyView {
            harmony: self.harmony,
            description,
            strongest_positive: self.strongest_positive.clone(),
            strongest_negative: self.strongest_negative.clone(),
        }
    }
}

pub struct StaffChemistryAggregator;

impl StaffChemistryAggregator {
    pub fn tenure_bonus(years_together: u8) -> f32 {
        (years_together as f32 * TENURE_PER_YEAR).min(TENURE_CAP)
    }

    pub fn aggregate(staff: &[StaffMember<'_>]) -> StaffChemistryReport {
        let pairs: Vec<PairValue> = staff
            .iter()
            .enumerate()
            .tuple_combinations()
            .filter_map(|((i, a), (j, b))| match CoachPairChemistry::calculate(a.coach, b.coach) {
                Ok(chemistry) => {
                    // they have worked together as long as the newer of the two has been here
                    let together = a.years_on_staff.min(b.years_on_staff);

                    Some(PairValue {
                        first: i,
                        second: j,
                        value: chemistry.total() + Self::tenure_bonus(together),
                    })
                }
                Err(error) => {
                    warn!("skipping staff pair: {}", error);
                    None
                }
            })
            .collect();

        if pairs.is_empty() {
            return StaffChemistryReport::neutral();
        }

        let overall = (pairs.iter().map(|p| p.value).sum::<f32>() / pairs.len() as f32)
            .clamp(CHEMISTRY_MIN as f32, CHEMISTRY_MAX as f32);

        let severe_conflicts = pairs.iter().filter(|p| p.value <= SEVERE_CONFLICT).count();

        let strongest_positive = pairs
            .iter()
            .filter(|p| p.value >= NOTABLE_POSITIVE)
            .max_by(|a, b| a.value.total_cmp(&b.value))
            .map(|p| Self::notable(staff, p));

        let strongest_negative = pairs
            .iter()
            .filter(|p| p.value <= NOTABLE_NEGATIVE)
            .min_by(|a, b| a.value.total_cmp(&b.value))
            .map(|p| Self::notable(staff, p));

        let report = StaffChemistryReport {
            overall,
            pair_count: pairs.len(),
            severe_conflicts,
            harmony: ChemistryLevel::from_value(overall),
            strongest_positive,
            strongest_negative,
            impact: StaffImpact::from_chemistry(overall, severe_conflicts),
        };

        debug!(
            "staff chemistry: {} coaches, {} pairs, {:?}, {} severe conflicts",
            staff.len(),
            report.pair_count,
            report.harmony,
            report.severe_conflicts
        );

        report
    }

    /// Harmony now and with the candidate added
    pub fn preview_hire(staff: &[StaffMember<'_>], candidate: StaffMember<'_>) -> HirePreview {
        let before = Self::aggregate(staff).harmony;

        let mut with_candidate = staff.to_vec();
        with_candidate.push(candidate);

        let after = Self::aggregate(&with_candidate).harmony;

        debug!("hire preview for coach {}: {:?} -> {:?}", candidate.coach.id, before, after);

        HirePreview { before, after }
    }

    fn notable(staff: &[StaffMember<'_>], pair: &PairValue) -> NotableRelationship {
        let first = staff[pair.first].coach;
        let second = staff[pair.second].coach;

        NotableRelationship {
            first_coach_id: first.id,
            first_coach: first.full_name.clone(),
            second_coach_id: second.id,
            second_coach: second.full_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::club::{
        CoachRole, CoachingTree, PersonalityProfile, PersonalityType, RiskPhilosophy, TreeName,
    };
    use proptest::prelude::*;

    fn coach(id: u32, tree: TreeName, personality: PersonalityType, ego: u8) -> Coach {
        Coach::builder()
            .id(id)
            .full_name(format!("Coach {}", id))
            .role(CoachRole::HeadCoach)
            .tree(CoachingTree::new(tree, 2, RiskPhilosophy::Balanced))
            .personality(PersonalityProfile::new(personality, None, ego, 50))
            .build()
            .unwrap()
    }

    #[test]
    fn test_tenure_bonus_caps_at_three() {
        assert_eq!(StaffChemistryAggregator::tenure_bonus(0), 0.0);
        assert_eq!(StaffChemistryAggregator::tenure_bonus(3), 1.5);
        assert_eq!(StaffChemistryAggregator::tenure_bonus(6), 3.0);
        assert_eq!(StaffChemistryAggregator::tenure_bonus(40), 3.0);
    }

    #[test]
    fn test_empty_and_single_staff_are_neutral() {
        let empty = StaffChemistryAggregator::aggregate(&[]);
        assert_eq!(empty.harmony, ChemistryLevel::Neutral);
        assert_eq!(empty.impact, StaffImpact::default());

        let only = coach(1, TreeName::Spread, PersonalityType::Mentor, 50);
        let single = StaffChemistryAggregator::aggregate(&[StaffMember::new(&only, 4)]);
        assert_eq!(single.overall, 0.0);
        assert_eq!(single.pair_count, 0);
    }

    #[test]
    fn test_harmonious_staff() {
        let a = coach(1, TreeName::WestCoast, PersonalityType::Mentor, 50);
        let b = coach(2, TreeName::WestCoast, PersonalityType::PlayersCoach, 50);
        let c = coach(3, TreeName::WestCoast, PersonalityType::Mentor, 50);

        let report = StaffChemistryAggregator::aggregate(&[
            StaffMember::new(&a, 5),
            StaffMember::new(&b, 5),
            StaffMember::new(&c, 5),
        ]);

        assert_eq!(report.pair_count, 3);
        assert_eq!(report.harmony, ChemistryLevel::Excellent);
        assert!(report.strongest_positive.is_some());
        assert!(report.strongest_negative.is_none());
        assert!(report.impact.development_modifier > 0.0);
    }

    #[test]
    fn test_feud_is_named_without_numbers() {
        let a = coach(1, TreeName::Spread, PersonalityType::Innovator, 90);
        let b = coach(2, TreeName::SmashMouth, PersonalityType::OldSchool, 90);

        let report = StaffChemistryAggregator::aggregate(&[StaffMember::new(&a, 0), StaffMember::new(&b, 0)]);

        assert_eq!(report.severe_conflicts, 1);
        assert_eq!(report.harmony, ChemistryLevel::Toxic);

        let negative = report.strongest_negative.clone().unwrap();
        assert_eq!((negative.first_coach_id, negative.second_coach_id), (1, 2));

        let view = report.view();
        assert!(view.description.contains("Coach 1"));
        assert!(!view.description.chars().filter(|c| c.is_ascii_digit()).any(|c| c != '1' && c != '2'));
        assert!(report.impact.morale_modifier < 0.0);
    }

    #[test]
    fn test_duplicate_coach_is_skipped() {
        let a = coach(1, TreeName::Spread, PersonalityType::Mentor, 50);
        let report = StaffChemistryAggregator::aggregate(&[StaffMember::new(&a, 1), StaffMember::new(&a, 1)]);

        assert_eq!(report.pair_count, 0);
        assert_eq!(report.harmony, ChemistryLevel::Neutral);
    }

    #[test]
    fn test_preview_hire_reports_change() {
        let a = coach(1, TreeName::WestCoast, PersonalityType::Mentor, 50);
        let b = coach(2, TreeName::WestCoast, PersonalityType::Mentor, 50);
        let rival = coach(3, TreeName::SmashMouth, PersonalityType::OldSchool, 95);

        let staff = [StaffMember::new(&a, 2), StaffMember::new(&b, 2)];
        let preview = StaffChemistryAggregator::preview_hire(&staff, StaffMember::new(&rival, 0));

        assert_eq!(preview.before, ChemistryLevel::Excellent);
        assert!(preview.hurts());
        assert!(!preview.improves());
    }

    const PHILOSOPHIES: [RiskPhilosophy; 3] = [
        RiskPhilosophy::Aggressive,
        RiskPhilosophy::Balanced,
        RiskPhilosophy::Conservative,
    ];

    #[derive(Debug, Clone)]
    struct GeneratedCoach {
        tree: usize,
        generation: u8,
        philosophy: usize,
        primary: usize,
        secondary: Option<usize>,
        ego: u8,
        adaptability: u8,
        years_on_staff: u8,
    }

    fn generated_coach() -> impl Strategy<Value = GeneratedCoach> {
        (
            0..TreeName::ALL.len(),
            1u8..=4,
            0..PHILOSOPHIES.len(),
            0..PersonalityType::ALL.len(),
            proptest::option::of(0..PersonalityType::ALL.len()),
            1u8..=100,
            1u8..=100,
            0u8..20,
        )
            .prop_map(
                |(tree, generation, philosophy, primary, secondary, ego, adaptability, years_on_staff)| GeneratedCoach {
                    tree,
                    generation,
                    philosophy,
                    primary,
                    secondary: secondary.filter(|s| *s != primary),
                    ego,
                    adaptability,
                    years_on_staff,
                },
            )
    }

    fn build(id: u32, generated: &GeneratedCoach) -> Coach {
        Coach::builder()
            .id(id)
            .full_name(format!("Coach {}", id))
            .role(CoachRole::HeadCoach)
            .tree(CoachingTree::new(
                TreeName::ALL[generated.tree],
                generated.generation,
                PHILOSOPHIES[generated.philosophy],
            ))
            .personality(PersonalityProfile::new(
                PersonalityType::ALL[generated.primary],
                generated.secondary.map(|s| PersonalityType::ALL[s]),
                generated.ego,
                generated.adaptability,
            ))
            .build()
            .unwrap()
    }

    proptest! {
        #[test]
        fn aggregate_stays_in_bounds_for_any_staff(generated in proptest::collection::vec(generated_coach(), 0..8)) {
            let coaches: Vec<Coach> = generated
                .iter()
                .enumerate()
                .map(|(i, g)| build(i as u32 + 1, g))
                .collect();

            let staff: Vec<StaffMember> = coaches
                .iter()
                .zip(&generated)
                .map(|(coach, g)| StaffMember::new(coach, g.years_on_staff))
                .collect();

            let report = StaffChemistryAggregator::aggregate(&staff);
            let n = staff.len();

            prop_assert_eq!(report.pair_count, n * n.saturating_sub(1) / 2);
            prop_assert!((-10.0..=10.0).contains(&report.overall));
            prop_assert_eq!(report.harmony, ChemistryLevel::from_value(report.overall));
            prop_assert!((-0.15..=0.10).contains(&report.impact.development_modifier));
            prop_assert!((-0.08..=0.05).contains(&report.impact.game_day_modifier));
            prop_assert!((-8.0..=5.0).contains(&report.impact.morale_modifier));
        }

        #[test]
        fn impact_stays_in_bounds(overall in -10.0f32..=10.0, severe in 0usize..50) {
            let impact = StaffImpact::from_chemistry(overall, severe);

            prop_assert!((-0.15..=0.10).contains(&impact.development_modifier));
            prop_assert!((-0.08..=0.05).contains(&impact.game_day_modifier));
            prop_assert!((-8.0..=5.0).contains(&impact.morale_modifier));
        }
    }
}
