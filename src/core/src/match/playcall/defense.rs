use crate::club::{Coach, DefensiveTendencies};
use crate::error::{CoachingError, Result};
use crate::r#match::playcall::{BIG_MARGIN, GameStateContext, PlayCallContext, Situation, TendencySource};
use crate::shared::RandomSource;
use log::{debug, trace, warn};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DefensiveCall {
    ManBlitz,
    ZoneBlitz,
    ManCoverage,
    ZoneCoverage,
}

impl DefensiveCall {
    pub fn label(&self) -> &'static str {
        match self {
            DefensiveCall::ManBlitz => "man blitz",
            DefensiveCall::ZoneBlitz => "zone blitz",
            DefensiveCall::ManCoverage => "man coverage",
            DefensiveCall::ZoneCoverage => "zone coverage",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DefensiveProbabilities {
    pub man_blitz: f32,
    pub zone_blitz: f32,
    pub man_coverage: f32,
    pub zone_coverage: f32,
    pub press: f32,
}

impl DefensiveProbabilities {
    pub fn calls(&self) -> [(DefensiveCall, f32); 4] {
        [
            (DefensiveCall::ManBlitz, self.man_blitz),
            (DefensiveCall::ZoneBlitz, self.zone_blitz),
            (DefensiveCall::ManCoverage, self.man_coverage),
            (DefensiveCall::ZoneCoverage, self.zone_coverage),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefensivePlan {
    pub source: TendencySource,
    pub used_default_tendencies: bool,
    pub blitz_rate: f32,
    pub man_coverage_rate: f32,
    pub press_rate: f32,
    pub situations: Vec<Situation>,
    pub probabilities: DefensiveProbabilities,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefensivePlayCall {
    pub call: DefensiveCall,
    pub press: bool,
    pub plan: DefensivePlan,
    pub rationale: String,
}

pub struct DefensivePlayCaller;

impl DefensivePlayCaller {
    pub fn resolve_tendencies(
        coordinator: Option<&Coach>,
        head_coach: Option<&Coach>,
    ) -> Result<(DefensiveTendencies, TendencySource)> {
        for (coach, source) in [
            (coordinator, TendencySource::Coordinator),
            (head_coach, TendencySource::HeadCoach),
        ] {
            let Some(coach) = coach else {
                continue;
            };

            if !coach.can_call_defense() {
                return Err(CoachingError::RoleCannotCallPlays {
                    coach_id: coach.id,
                    role: coach.role,
                    side: "defensive",
                });
            }

            match coach.defensive_tendencies() {
                Some(tendencies) if tendencies.is_valid() => return Ok((*tendencies, source)),
                Some(_) => warn!("coach {} has invalid defensive tendencies, skipping", coach.id),
                None if !coach.tendencies_match_role() => {
                    warn!("coach {} carries tendencies that do not match the {} role", coach.id, coach.role.title())
                }
                None => {}
            }
        }

        warn!("no defensive tendencies on staff, using the standard profile");

        Ok((DefensiveTendencies::default(), TendencySource::Default))
    }

    /// `context` is seen from the defense: a positive differential means the defense leads
    pub fn plan(coordinator: Option<&Coach>, head_coach: Option<&Coach>, context: &PlayCallContext) -> Result<DefensivePlan> {
        let (tendencies, source) = Self::resolve_tendencies(coordinator, head_coach)?;
        Ok(Self::plan_with(&tendencies, source, &context.to_game_state()))
    }

    pub fn plan_with(tendencies: &DefensiveTendencies, source: TendencySource, state: &GameStateContext) -> DefensivePlan {
        let mut blitz = tendencies.blitz_rate as f32;
        let mut man = tendencies.man_coverage_rate as f32;
        let mut press = tendencies.press_rate as f32;
        let mut situations = Vec::new();

        if state.red_zone {
            situations.push(Situation::RedZone);
            blitz = tendencies.overrides.red_zone_blitz_rate.map(f32::from).unwrap_or(blitz);
            man += 10.0;
        }

        if state.two_minute_warning {
            situations.push(Situation::TwoMinuteWarning);
            if state.score_differential > 0 {
                // keep everything in front
                blitz -= 10.0;
                man = tendencies.overrides.two_minute_man_rate.map(f32::from).unwrap_or(man - 15.0);
                press -= 10.0;
            } else {
                blitz += 10.0;
            }
        }

        if state.is_third_and_long() {
            situations.push(Situation::ThirdAndLong);
            blitz = tendencies.overrides.third_and_long_blitz_rate.map(f32::from).unwrap_or(blitz + 10.0);
        }

        if state.score_differential >= BIG_MARGIN {
            situations.push(Situation::ProtectingLead);
            blitz -= 10.0;
            man -= 5.0;
        } else if state.score_differential <= -BIG_MARGIN {
            situations.push(Situation::NeedStops);
            blitz += 15.0;
            press += 10.0;
        }

        let blitz = blitz.clamp(0.0, 100.0);
        let man = man.clamp(0.0, 100.0);
        let press = press.clamp(0.0, 100.0);

        trace!("defense plan: blitz {:.0}, man {:.0}, press {:.0}", blitz, man, press);

        DefensivePlan {
            source,
            used_default_tendencies: source == TendencySource::Default,
            blitz_rate: blitz,
            man_coverage_rate: man,
            press_rate: press,
            situations,
            probabilities: Self::probabilities(blitz, man, press),
        }
    }

    /// Blitz and coverage are independent choices
    pub fn probabilities(blitz_rate: f32, man_rate: f32, press_rate: f32) -> DefensiveProbabilities {
        let blitz = blitz_rate / 100.0;
        let man = man_rate / 100.0;

        DefensiveProbabilities {
            man_blitz: blitz * man,
            zone_blitz: blitz * (1.0 - man),
            man_coverage: (1.0 - blitz) * man,
            zone_coverage: (1.0 - blitz) * (1.0 - man),
            press: press_rate / 100.0,
        }
    }

    pub fn select<R: RandomSource>(
        coordinator: Option<&Coach>,
        head_coach: Option<&Coach>,
        context: &PlayCallContext,
        random: &mut R,
    ) -> Result<DefensivePlayCall> {
        let plan = Self::plan(coordinator, head_coach, context)?;

        let roll = random.next_f32();
        let mut cumulative = 0.0;
        let mut call = DefensiveCall::ZoneCoverage;

        for (candidate, probability) in plan.probabilities.calls() {
            cumulative += probability;
            if roll < cumulative {
                call = candidate;
                break;
            }
        }

        let press = random.next_f32() < plan.probabilities.press;
        let rationale = Self::rationale(call, press, &plan);

        debug!("defensive call: {}", rationale);

        Ok(DefensivePlayCall {
            call,
            press,
            plan,
            rationale,
        })
    }

    fn rationale(call: DefensiveCall, press: bool, plan: &DefensivePlan) -> String {
        let technique = if press { "press" } else { "off" };
        let mut text = format!(
            "Called {} with {} coverage from {}",
            call.label(),
            technique,
            plan.source.label()
        );

        if !plan.situations.is_empty() {
            let labels: Vec<&str> = plan.situations.iter().map(|s| s.label()).collect();
            text.push_str(&format!(", adjusted for {}", labels.join(", ")));
        }

        text
    }
}
