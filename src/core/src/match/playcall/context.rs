use serde::{Deserialize, Serialize};

pub const RED_ZONE_START: u8 = 80;
pub const TWO_MINUTE_SECONDS: u16 = 120;
pub const LATE_GAME_SECONDS: u16 = 300;
pub const BIG_MARGIN: i32 = 14;
pub const OVERTIME: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Precipitation {
    None,
    Rain,
    Snow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weather {
    pub precipitation: Precipitation,
    pub wind_mph: u8,
    pub temperature_f: i16,
    pub dome: bool,
}

impl Weather {
    pub fn dome() -> Self {
        Weather {
            dome: true,
            ..Weather::default()
        }
    }
}

impl Default for Weather {
    fn default() -> Self {
        Weather {
            precipitation: Precipitation::None,
            wind_mph: 0,
            temperature_f: 65,
            dome: false,
        }
    }
}

/// Per-play input from the game simulation, seen from the side making the call
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayCallContext {
    pub down: u8,
    pub distance: u8,
    /// Offense's yard line, 0 = own goal line, 100 = opponent's
    pub yard_line: u8,
    pub team_score: u16,
    pub opponent_score: u16,
    /// 1-4, 5 for overtime
    pub quarter: u8,
    pub seconds_remaining: u16,
    pub weather: Weather,
}

impl PlayCallContext {
    pub fn to_game_state(&self) -> GameStateContext {
        let field_position = self.yard_line.min(100);

        GameStateContext {
            down: self.down,
            distance: self.distance,
            field_position,
            score_differential: self.team_score as i32 - self.opponent_score as i32,
            quarter: self.quarter,
            seconds_remaining: self.seconds_remaining,
            red_zone: field_position >= RED_ZONE_START,
            two_minute_warning: matches!(self.quarter, 2 | 4) && self.seconds_remaining <= TWO_MINUTE_SECONDS,
            weather: self.weather,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameStateContext {
    pub down: u8,
    pub distance: u8,
    pub field_position: u8,
    pub score_differential: i32,
    pub quarter: u8,
    pub seconds_remaining: u16,
    pub red_zone: bool,
    pub two_minute_warning: bool,
    pub weather: Weather,
}

impl GameStateContext {
    pub fn is_overtime(&self) -> bool {
        self.quarter >= OVERTIME
    }

    /// Fourth quarter with five minutes or less, or overtime
    pub fn is_late(&self) -> bool {
        (self.quarter == 4 && self.seconds_remaining <= LATE_GAME_SECONDS) || self.is_overtime()
    }

    pub fn is_third_and_long(&self) -> bool {
        self.down == 3 && self.distance >= 7
    }

    pub fn is_trailing(&self) -> bool {
        self.score_differential < 0
    }

    /// Kick distance: line to goal, plus end zone and snap
    pub fn field_goal_distance(&self) -> u8 {
        100 - self.field_position.min(100) + 17
    }
}

/// Labels attached to a play call to explain it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Situation {
    RedZone,
    TwoMinuteWarning,
    ProtectingLead,
    PlayingFromBehind,
    ThirdAndLong,
    NeedStops,
}

impl Situation {
    pub fn label(&self) -> &'static str {
        match self {
            Situation::RedZone => "red zone",
            Situation::TwoMinuteWarning => "two-minute warning",
            Situation::ProtectingLead => "protecting a big lead",
            Situation::PlayingFromBehind => "playing from behind",
            Situation::ThirdAndLong => "third and long",
            Situation::NeedStops => "need stops",
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_context(down: u8, distance: u8, yard_line: u8, differential: i32, quarter: u8, seconds: u16) -> PlayCallContext {
    let (team_score, opponent_score) = if differential >= 0 {
        (20 + differential as u16, 20)
    } else {
        (20, 20 + differential.unsigned_abs() as u16)
    };

    PlayCallContext {
        down,
        distance,
        yard_line,
        team_score,
        opponent_score,
        quarter,
        seconds_remaining: seconds,
        weather: Weather::default(),
    }
}
