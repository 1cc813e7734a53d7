use crate::club::{Coach, OffensiveTendencies};
use crate::error::{CoachingError, Result};
use crate::r#match::playcall::{BIG_MARGIN, GameStateContext, PlayCallContext, Situation, WeatherImpact};
use crate::shared::RandomSource;
use log::{debug, trace, warn};
use serde::Serialize;

const RUN_RATE_RANGE: (f32, f32) = (10.0, 85.0);
const DEEP_RATE_RANGE: (f32, f32) = (5.0, 40.0);

/// Whose tendencies drove a call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TendencySource {
    Coordinator,
    HeadCoach,
    Default,
}

impl TendencySource {
    pub fn label(&self) -> &'static str {
        match self {
            TendencySource::Coordinator => "the coordinator's tendencies",
            TendencySource::HeadCoach => "the head coach's tendencies",
            TendencySource::Default => "a standard game plan",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OffensiveCall {
    Run,
    ShortPass,
    DeepPass,
    PlayAction,
}

impl OffensiveCall {
    pub fn label(&self) -> &'static str {
        match self {
            OffensiveCall::Run => "run",
            OffensiveCall::ShortPass => "short pass",
            OffensiveCall::DeepPass => "deep pass",
            OffensiveCall::PlayAction => "play action",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OffensiveProbabilities {
    pub run: f32,
    pub short_pass: f32,
    pub deep_pass: f32,
    pub play_action: f32,
}

impl OffensiveProbabilities {
    pub fn iter(&self) -> impl Iterator<Item = (OffensiveCall, f32)> {
        [
            (OffensiveCall::Run, self.run),
            (OffensiveCall::ShortPass, self.short_pass),
            (OffensiveCall::DeepPass, self.deep_pass),
            (OffensiveCall::PlayAction, self.play_action),
        ]
        .into_iter()
    }

    pub fn total(&self) -> f32 {
        self.run + self.short_pass + self.deep_pass + self.play_action
    }
}

/// Everything about an offensive call except the final draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OffensivePlan {
    pub source: TendencySource,
    pub used_default_tendencies: bool,
    pub weather: WeatherImpact,
    pub run_rate: f32,
    pub deep_rate: f32,
    pub play_action_rate: f32,
    pub situations: Vec<Situation>,
    pub probabilities: OffensiveProbabilities,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OffensivePlayCall {
    pub call: OffensiveCall,
    pub plan: OffensivePlan,
    pub rationale: String,
}

pub struct OffensivePlayCaller;

impl OffensivePlayCaller {
    /// Coordinator first, then head coach, then the standard profile
    pub fn resolve_tendencies(
        coordinator: Option<&Coach>,
        head_coach: Option<&Coach>,
    ) -> Result<(OffensiveTendencies, TendencySource)> {
        for (coach, source) in [
            (coordinator, TendencySource::Coordinator),
            (head_coach, TendencySource::HeadCoach),
        ] {
            let Some(coach) = coach else {
                continue;
            };

            if !coach.can_call_offense() {
                return Err(CoachingError::RoleCannotCallPlays {
                    coach_id: coach.id,
                    role: coach.role,
                    side: "offensive",
                });
            }

            match coach.offensive_tendencies() {
                Some(tendencies) if tendencies.is_valid() => return Ok((*tendencies, source)),
                Some(_) => warn!("coach {} has invalid offensive tendencies, skipping", coach.id),
                None if !coach.tendencies_match_role() => {
                    warn!("coach {} carries tendencies that do not match the {} role", coach.id, coach.role.title())
                }
                None => {}
            }
        }

        warn!("no offensive tendencies on staff, using the standard profile");

        Ok((OffensiveTendencies::default(), TendencySource::Default))
    }

    pub fn plan(coordinator: Option<&Coach>, head_coach: Option<&Coach>, context: &PlayCallContext) -> Result<OffensivePlan> {
        let (tendencies, source) = Self::resolve_tendencies(coordinator, head_coach)?;
        Ok(Self::plan_with(&tendencies, source, &context.to_game_state()))
    }

    pub fn plan_with(tendencies: &OffensiveTendencies, source: TendencySource, state: &GameStateContext) -> OffensivePlan {
        let weather = WeatherImpact::from_weather(&state.weather);

        let mut run = tendencies.run_rate as f32;
        let mut deep = tendencies.deep_shot_rate as f32;
        let mut play_action = tendencies.play_action_rate as f32;
        let mut situations = Vec::new();

        if state.red_zone {
            situations.push(Situation::RedZone);
            run = tendencies.overrides.red_zone_run_rate.map(f32::from).unwrap_or(run + 5.0);
            // compressed field
            deep -= 10.0;
        }

        if state.two_minute_warning {
            situations.push(Situation::TwoMinuteWarning);
            if state.score_differential > 0 {
                run += 10.0;
            } else {
                run = tendencies.overrides.two_minute_run_rate.map(f32::from).unwrap_or(run - 15.0);
                deep += 5.0;
                play_action -= 10.0;
            }
        }

        if state.score_differential >= BIG_MARGIN {
            situations.push(Situation::ProtectingLead);
            run = tendencies.overrides.protect_lead_run_rate.map(f32::from).unwrap_or(run + 10.0);
            deep -= 5.0;
        } else if state.score_differential <= -BIG_MARGIN {
            situations.push(Situation::PlayingFromBehind);
            run -= 10.0;
            deep += 5.0;
        }

        run = (run + weather.run_modifier as f32).clamp(RUN_RATE_RANGE.0, RUN_RATE_RANGE.1);
        deep = (deep + weather.deep_pass_modifier as f32).clamp(DEEP_RATE_RANGE.0, DEEP_RATE_RANGE.1);
        play_action = play_action.clamp(0.0, 50.0);

        let probabilities = Self::probabilities(run, deep, play_action);

        trace!(
            "offense plan: run {:.0}, deep {:.0}, play action {:.0}, weather {:?}",
            run,
            deep,
            play_action,
            weather
        );

        OffensivePlan {
            source,
            used_default_tendencies: source == TendencySource::Default,
            weather,
            run_rate: run,
            deep_rate: deep,
            play_action_rate: play_action,
            situations,
            probabilities,
        }
    }

    /// Pass share is split into play action, deep and short
    pub fn probabilities(run_rate: f32, deep_rate: f32, play_action_rate: f32) -> OffensiveProbabilities {
        let run = run_rate / 100.0;
        let pass = 1.0 - run;
        let play_action = pass * play_action_rate / 100.0;
        let deep_pass = pass * deep_rate / 100.0;

        OffensiveProbabilities {
            run,
            short_pass: pass - play_action - deep_pass,
            deep_pass,
            play_action,
        }
    }

    pub fn select<R: RandomSource>(
        coordinator: Option<&Coach>,
        head_coach: Option<&Coach>,
        context: &PlayCallContext,
        random: &mut R,
    ) -> Result<OffensivePlayCall> {
        let plan = Self::plan(coordinator, head_coach, context)?;
        let call = Self::draw(&plan.probabilities, random.next_f32());
        let rationale = Self::rationale(call, &plan);

        debug!("offensive call: {}", rationale);

        Ok(OffensivePlayCall { call, plan, rationale })
    }

    fn draw(probabilities: &OffensiveProbabilities, roll: f32) -> OffensiveCall {
        let mut cumulative = 0.0;

        for (call, probability) in probabilities.iter() {
            cumulative += probability;
            if roll < cumulative {
                return call;
            }
        }

        OffensiveCall::PlayAction
    }

    fn rationale(call: OffensiveCall, plan: &OffensivePlan) -> String {
        let mut text = format!("Called a {} from {}", call.label(), plan.source.label());

        if plan.situations.is_empty() {
            text.push_str(" on a standard down");
        } else {
            let labels: Vec<&str> = plan.situations.iter().map(|s| s.label()).collect();
            text.push_str(&format!(", adjusted for {}", labels.join(", ")));
        }

        if plan.weather.run_modifier > 0 {
            text.push_str("; the weather favors the run");
        }

        text
    }
}
