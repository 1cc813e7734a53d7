use crate::r#match::playcall::{Precipitation, Weather};
use serde::Serialize;

const FREEZING_F: i16 = 32;

/// Percentage-point shifts weather applies to run and deep-pass rates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WeatherImpact {
    pub run_modifier: i32,
    pub deep_pass_modifier: i32,
}

impl WeatherImpact {
    pub fn from_weather(weather: &Weather) -> Self {
        if weather.dome {
            return WeatherImpact::default();
        }

        let mut impact = WeatherImpact::default();

        match weather.precipitation {
            Precipitation::Rain => impact.add(5, -5),
            Precipitation::Snow => impact.add(10, -10),
            Precipitation::None => {}
        }

        match weather.wind_mph {
            0..=10 => {}
            11..=19 => impact.add(2, -5),
            20..=29 => impact.add(4, -10),
            _ => impact.add(6, -15),
        }

        if weather.temperature_f <= FREEZING_F {
            impact.add(3, -3);
        }

        impact
    }

    pub fn is_neutral(&self) -> bool {
        self.run_modifier == 0 && self.deep_pass_modifier == 0
    }

    fn add(&mut self, run: i32, deep: i32) {
        self.run_modifier += run;
        self.deep_pass_modifier += deep;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn weather(precipitation: Precipitation, wind_mph: u8, temperature_f: i16) -> Weather {
        Weather {
            precipitation,
            wind_mph,
            temperature_f,
            dome: false,
        }
    }

    #[test]
    fn test_clear_weather_is_neutral() {
        assert!(WeatherImpact::from_weather(&Weather::default()).is_neutral());
    }

    #[test]
    fn test_snow_outweighs_rain() {
        for wind in [0u8, 15, 25, 35] {
            for temperature in [20i16, 50] {
                let rain = WeatherImpact::from_weather(&weather(Precipitation::Rain, wind, temperature));
                let snow = WeatherImpact::from_weather(&weather(Precipitation::Snow, wind, temperature));

                assert!(snow.run_modifier > rain.run_modifier);
                assert!(snow.deep_pass_modifier < rain.deep_pass_modifier);
            }
        }
    }

    #[test]
    fn test_wind_bands() {
        let calm = WeatherImpact::from_weather(&weather(Precipitation::None, 10, 60));
        let breezy = WeatherImpact::from_weather(&weather(Precipitation::None, 19, 60));
        let windy = WeatherImpact::from_weather(&weather(Precipitation::None, 20, 60));
        let gale = WeatherImpact::from_weather(&weather(Precipitation::None, 30, 60));

        assert!(calm.is_neutral());
        assert!(windy.deep_pass_modifier < breezy.deep_pass_modifier);
        assert!(gale.deep_pass_modifier < windy.deep_pass_modifier);
    }

    #[test]
    fn test_effects_stack() {
        let impact = WeatherImpact::from_weather(&weather(Precipitation::Snow, 25, 20));

        assert_eq!(impact.run_modifier, 10 + 4 + 3);
        assert_eq!(impact.deep_pass_modifier, -10 - 10 - 3);
    }

    proptest! {
        #[test]
        fn dome_negates_everything(wind in any::<u8>(), temperature in -30i16..110, snow in any::<bool>()) {
            let weather = Weather {
                precipitation: if snow { Precipitation::Snow } else { Precipitation::Rain },
                wind_mph: wind,
                temperature_f: temperature,
                dome: true,
            };

            prop_assert!(WeatherImpact::from_weather(&weather).is_neutral());
        }
    }
}
