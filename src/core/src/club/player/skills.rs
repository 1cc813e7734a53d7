use crate::error::{CoachingError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Lowest and highest true value a skill can be developed to
pub const SKILL_FLOOR: f32 = 1.0;
pub const SKILL_CEILING: f32 = 99.0;

const RATING_MIN: f32 = 1.0;
const RATING_MAX: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Skill {
    // Passing
    ThrowPower,
    ThrowAccuracy,
    Decisions,
    PocketPresence,

    // Athletic
    Speed,
    Acceleration,
    Agility,
    Strength,

    // Ball carrying
    BallCarrierVision,
    Elusiveness,
    BallSecurity,

    // Receiving
    Catching,
    RouteRunning,
    Release,

    // Blocking
    RunBlocking,
    PassBlocking,

    // Front seven
    PassRush,
    BlockShedding,
    Tackling,
    Pursuit,

    // Coverage
    ManCoverage,
    ZoneCoverage,
    Press,
    BallSkills,

    Awareness,

    // Kicking
    KickPower,
    KickAccuracy,
}

impl Skill {
    pub const ALL: [Skill; 27] = [
        Skill::ThrowPower,
        Skill::ThrowAccuracy,
        Skill::Decisions,
        Skill::PocketPresence,
        Skill::Speed,
        Skill::Acceleration,
        Skill::Agility,
        Skill::Strength,
        Skill::BallCarrierVision,
        Skill::Elusiveness,
        Skill::BallSecurity,
        Skill::Catching,
        Skill::RouteRunning,
        Skill::Release,
        Skill::RunBlocking,
        Skill::PassBlocking,
        Skill::PassRush,
        Skill::BlockShedding,
        Skill::Tackling,
        Skill::Pursuit,
        Skill::ManCoverage,
        Skill::ZoneCoverage,
        Skill::Press,
        Skill::BallSkills,
        Skill::Awareness,
        Skill::KickPower,
        Skill::KickAccuracy,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Skill::ThrowPower => "throw power",
            Skill::ThrowAccuracy => "throw accuracy",
            Skill::Decisions => "decision making",
            Skill::PocketPresence => "pocket presence",
            Skill::Speed => "speed",
            Skill::Acceleration => "acceleration",
            Skill::Agility => "agility",
            Skill::Strength => "strength",
            Skill::BallCarrierVision => "ball carrier vision",
            Skill::Elusiveness => "elusiveness",
            Skill::BallSecurity => "ball security",
            Skill::Catching => "catching",
            Skill::RouteRunning => "route running",
            Skill::Release => "release",
            Skill::RunBlocking => "run blocking",
            Skill::PassBlocking => "pass blocking",
            Skill::PassRush => "pass rush",
            Skill::BlockShedding => "block shedding",
            Skill::Tackling => "tackling",
            Skill::Pursuit => "pursuit",
            Skill::ManCoverage => "man coverage",
            Skill::ZoneCoverage => "zone coverage",
            Skill::Press => "press",
            Skill::BallSkills => "ball skills",
            Skill::Awareness => "awareness",
            Skill::KickPower => "kick power",
            Skill::KickAccuracy => "kick accuracy",
        }
    }
}

/// Hidden true value plus the band scouts currently report.
/// The band always contains the true value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SkillRatingRecord", into = "SkillRatingRecord")]
pub struct SkillRating {
    true_value: f32,
    perceived_min: f32,
    perceived_max: f32,
    maturity_age: u8,
}

impl SkillRating {
    pub fn new(true_value: f32, perceived_min: f32, perceived_max: f32, maturity_age: u8) -> Result<Self> {
        if !(RATING_MIN..=RATING_MAX).contains(&true_value) {
            return Err(CoachingError::SkillOutOfBounds { value: true_value });
        }

        if perceived_min > true_value || perceived_max < true_value {
            return Err(CoachingError::TrueValueOutsideRange {
                true_value,
                perceived_min,
                perceived_max,
            });
        }

        Ok(SkillRating {
            true_value,
            perceived_min: perceived_min.max(RATING_MIN),
            perceived_max: perceived_max.min(RATING_MAX),
            maturity_age,
        })
    }

    /// Rating that scouts have fully figured out
    pub fn exact(true_value: f32, maturity_age: u8) -> Result<Self> {
        Self::new(true_value, true_value, true_value, maturity_age)
    }

    pub fn true_value(&self) -> f32 {
        self.true_value
    }

    pub fn perceived_min(&self) -> f32 {
        self.perceived_min
    }

    pub fn perceived_max(&self) -> f32 {
        self.perceived_max
    }

    pub fn maturity_age(&self) -> u8 {
        self.maturity_age
    }

    pub fn perceived_width(&self) -> f32 {
        self.perceived_max - self.perceived_min
    }

    /// Copy with a new true value, clamped to the development bounds. The
    /// perceived band stretches when the value leaves it.
    pub fn with_true_value(&self, value: f32) -> SkillRating {
        let true_value = value.clamp(SKILL_FLOOR, SKILL_CEILING);

        SkillRating {
            true_value,
            perceived_min: self.perceived_min.min(true_value),
            perceived_max: self.perceived_max.max(true_value),
            maturity_age: self.maturity_age,
        }
    }

    /// Copy with the band pulled in by `points` per side, never past the true value
    pub fn narrowed(&self, points: f32) -> SkillRating {
        SkillRating {
            true_value: self.true_value,
            perceived_min: (self.perceived_min + points).min(self.true_value),
            perceived_max: (self.perceived_max - points).max(self.true_value),
            maturity_age: self.maturity_age,
        }
    }

    pub fn is_valid(&self) -> bool {
        (RATING_MIN..=RATING_MAX).contains(&self.true_value)
            && self.perceived_min <= self.true_value
            && self.true_value <= self.perceived_max
    }

    /// The only form of a rating that may cross into presentation
    pub fn view(&self) -> SkillView {
        SkillView {
            perceived_min: self.perceived_min.round() as u8,
            perceived_max: self.perceived_max.round() as u8,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct SkillRatingRecord {
    true_value: f32,
    perceived_min: f32,
    perceived_max: f32,
    maturity_age: u8,
}

impl TryFrom<SkillRatingRecord> for SkillRating {
    type Error = CoachingError;

    fn try_from(record: SkillRatingRecord) -> Result<Self> {
        SkillRating::new(
            record.true_value,
            record.perceived_min,
            record.perceived_max,
            record.maturity_age,
        )
    }
}

impl From<SkillRating> for SkillRatingRecord {
    fn from(rating: SkillRating) -> Self {
        SkillRatingRecord {
            true_value: rating.true_value,
            perceived_min: rating.perceived_min,
            perceived_max: rating.perceived_max,
            maturity_age: rating.maturity_age,
        }
    }
}

/// Presentation-safe projection of a rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillView {
    pub perceived_min: u8,
    pub perceived_max: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerSkills {
    ratings: BTreeMap<Skill, SkillRating>,
}

impl PlayerSkills {
    pub fn new() -> Self {
        PlayerSkills::default()
    }

    pub fn with(mut self, skill: Skill, rating: SkillRating) -> Self {
        self.ratings.insert(skill, rating);
        self
    }

    pub fn get(&self, skill: Skill) -> Option<&SkillRating> {
        self.ratings.get(&skill)
    }

    pub fn has(&self, skill: Skill) -> bool {
        self.ratings.contains_key(&skill)
    }

    pub fn true_value(&self, skill: Skill) -> Option<f32> {
        self.ratings.get(&skill).map(|r| r.true_value())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Skill, &SkillRating)> {
        self.ratings.iter()
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }

    /// Skills from `candidates` that this player actually has, in candidate order
    pub fn present(&self, candidates: &[Skill]) -> Vec<Skill> {
        candidates.iter().copied().filter(|s| self.has(*s)).collect()
    }

    /// Copy with `skill` moved by `delta`; unknown skills are left alone
    pub fn adjusted(&self, skill: Skill, delta: f32) -> PlayerSkills {
        let mut ratings = self.ratings.clone();

        if let Some(rating) = ratings.get_mut(&skill) {
            *rating = rating.with_true_value(rating.true_value() + delta);
        }

        PlayerSkills { ratings }
    }

    /// Copy with `skill` replaced wholesale
    pub fn replaced(&self, skill: Skill, rating: SkillRating) -> PlayerSkills {
        let mut ratings = self.ratings.clone();
        ratings.insert(skill, rating);
        PlayerSkills { ratings }
    }

    pub fn is_valid(&self) -> bool {
        self.ratings.values().all(|r| r.is_valid())
    }

    pub fn views(&self) -> BTreeMap<Skill, SkillView> {
        self.ratings.iter().map(|(s, r)| (*s, r.view())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_true_value_outside_band() {
        let result = SkillRating::new(70.0, 72.0, 80.0, 26);
        assert!(matches!(result, Err(CoachingError::TrueValueOutsideRange { .. })));

        let result = SkillRating::new(70.0, 60.0, 69.0, 26);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_out_of_bounds_value() {
        assert!(SkillRating::new(0.0, 0.0, 10.0, 26).is_err());
        assert!(SkillRating::new(101.0, 90.0, 101.0, 26).is_err());
    }

    #[test]
    fn test_with_true_value_clamps_and_stretches_band() {
        let rating = SkillRating::new(60.0, 55.0, 65.0, 27).unwrap();

        let raised = rating.with_true_value(120.0);
        assert_eq!(raised.true_value(), SKILL_CEILING);
        assert_eq!(raised.perceived_max(), SKILL_CEILING);
        assert_eq!(raised.perceived_min(), 55.0);

        let lowered = rating.with_true_value(-5.0);
        assert_eq!(lowered.true_value(), SKILL_FLOOR);
        assert_eq!(lowered.perceived_min(), SKILL_FLOOR);
        assert!(lowered.is_valid());
    }

    #[test]
    fn test_narrowed_never_crosses_true_value() {
        let rating = SkillRating::new(60.0, 59.0, 70.0, 27).unwrap();
        let narrowed = rating.narrowed(2.0);

        assert_eq!(narrowed.perceived_min(), 60.0);
        assert_eq!(narrowed.perceived_max(), 68.0);
        assert!(narrowed.is_valid());
    }

    #[test]
    fn test_view_hides_true_value() {
        let rating = SkillRating::new(63.4, 58.2, 71.6, 27).unwrap();
        let view = rating.view();

        assert_eq!(view.perceived_min, 58);
        assert_eq!(view.perceived_max, 72);
    }

    #[test]
    fn test_adjusted_leaves_unknown_skills_alone() {
        let skills = PlayerSkills::new().with(Skill::Speed, SkillRating::exact(80.0, 25).unwrap());

        let adjusted = skills.adjusted(Skill::Catching, 5.0);
        assert_eq!(adjusted, skills);

        let adjusted = skills.adjusted(Skill::Speed, 2.0);
        assert_eq!(adjusted.true_value(Skill::Speed), Some(82.0));
        assert_eq!(skills.true_value(Skill::Speed), Some(80.0));
    }

    #[test]
    fn test_present_keeps_candidate_order() {
        let skills = PlayerSkills::new()
            .with(Skill::Tackling, SkillRating::exact(50.0, 25).unwrap())
            .with(Skill::Speed, SkillRating::exact(50.0, 25).unwrap());

        let present = skills.present(&[Skill::Speed, Skill::Catching, Skill::Tackling]);
        assert_eq!(present, vec![Skill::Speed, Skill::Tackling]);
    }

    #[test]
    fn test_every_skill_has_a_name() {
        let names: std::collections::HashSet<&str> = Skill::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), Skill::ALL.len());
    }
}
