use crate::club::player::development::{BreakoutReport, GamePerformance, SkillChange};
use crate::club::Player;
use crate::shared::{MidSeasonSettings, RandomSource};
use log::{debug, trace};

/// One-time jump for young players who string together standout games
pub struct BreakoutTracker;

impl BreakoutTracker {
    pub fn is_eligible(player: &Player, settings: &MidSeasonSettings) -> bool {
        player.age <= settings.breakout_max_age && !player.tracking.has_broken_out
    }

    pub fn update<R: RandomSource>(
        player: &Player,
        performance: GamePerformance,
        settings: &MidSeasonSettings,
        random: &mut R,
    ) -> (Player, Option<BreakoutReport>) {
        if !Self::is_eligible(player, settings) {
            return (player.clone(), None);
        }

        let mut tracking = player.tracking;

        match performance {
            GamePerformance::Standout => {
                let (min, max) = settings.meter_gain;
                tracking.breakout_meter += random.range_f32(min, max);
            }
            GamePerformance::Poor => {
                let (min, max) = settings.meter_loss;
                tracking.breakout_meter = (tracking.breakout_meter - random.range_f32(min, max)).max(0.0);
            }
            GamePerformance::Ordinary => return (player.clone(), None),
        }

        trace!("player {} breakout meter {:.1}", player.id, tracking.breakout_meter);

        if tracking.breakout_meter < settings.breakout_threshold {
            return (player.with_tracking(tracking), None);
        }

        tracking.has_broken_out = true;

        let relevant = player.relevant_skills();
        let count = 2 + random.index(2);

        let mut skills = player.skills.clone();
        let mut changes = Vec::new();

        for skill in random.pick_distinct(&relevant, count) {
            let Some(rating) = skills.get(skill).copied() else {
                continue;
            };

            let (min, max) = settings.breakout_boost;
            let developed = rating.with_true_value(rating.true_value() + random.range_f32(min, max));
            let applied = developed.true_value() - rating.true_value();

            if applied == 0.0 {
                continue;
            }

            changes.push(SkillChange { skill, change: applied });
            skills = skills.replaced(skill, developed);
        }

        debug!("breakout: {} ({} skills)", player, changes.len());

        let report = BreakoutReport {
            player_id: player.id,
            changes,
        };

        (player.with_skills(skills).with_tracking(tracking), Some(report))
    }
}
