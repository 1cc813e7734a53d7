pub mod club;
pub mod error;
pub mod r#match;
pub mod shared;

// Re-export club items
pub use club::{
    // People
    Coach, CoachBuilder, CoachView, CoachRole, CoachAttributes, CoachContract, CareerStint,
    CoachingTree, TreeName, RiskPhilosophy, TreeRelationship,
    PersonalityProfile, PersonalityType, PlayerDisposition,
    Player, PlayerBuilder, PlayerView, MidSeasonTracking,
    // Skills and positions
    Position, PositionGroup, Side, Skill, SkillRating, SkillView, PlayerSkills,
    SKILL_FLOOR, SKILL_CEILING,
    // Tendencies
    Tendencies, OffensiveTendencies, DefensiveTendencies, OffensiveOverrides, DefensiveOverrides,
    FourthDownAggressiveness, Tempo,
    // Schemes
    Scheme, SchemeKind, SchemeFitCalculator, SchemeFitScore, FitLevel, FitQuality, FitDescription,
    TransitionStatus, RosterFitSummary,
    // Relations
    ChemistryEvent, ChemistryHistory, ChemistryLevel, PlayerCoachChemistry, CoachPairChemistry,
    StaffChemistryAggregator, StaffChemistryReport, StaffHarmonyView, StaffImpact, StaffMember, HirePreview,
    // Development
    OffseasonDevelopment, DevelopmentImpact, DevelopmentReport, InfluenceTier, SkillChange,
    MidSeasonDevelopment, MidSeasonResult, GamePerformance, BreakoutTracker, BreakoutReport,
};

pub use error::{CoachingError, Result};

pub use r#match::{
    PlayCallContext, GameStateContext, Weather, Precipitation, WeatherImpact, Situation,
    OffensivePlayCaller, OffensivePlayCall, OffensiveCall, OffensivePlan, TendencySource,
    DefensivePlayCaller, DefensivePlayCall, DefensiveCall, DefensivePlan,
    FourthDownDecider, FourthDownDecision, FourthDownCall, Confidence,
    TempoSelector, TwoMinuteMode,
};

pub use shared::{MidSeasonSettings, OffseasonSettings, RandomSource, SeededRandom, ThreadRandom};
