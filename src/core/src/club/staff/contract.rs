use crate::club::CoachRole;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachContract {
    pub salary: u32,
    pub years_total: u8,
    pub years_remaining: u8,
    pub guaranteed: bool,
}

impl CoachContract {
    pub fn new(salary: u32, years: u8, guaranteed: bool) -> Self {
        CoachContract {
            salary,
            years_total: years,
            years_remaining: years,
            guaranteed,
        }
    }

    pub fn is_expiring(&self) -> bool {
        self.years_remaining <= 1
    }

    pub fn advanced(&self) -> CoachContract {
        CoachContract {
            years_remaining: self.years_remaining.saturating_sub(1),
            ..self.clone()
        }
    }
}

/// One stop on a coach's resume
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerStint {
    pub team: String,
    pub role: CoachRole,
    pub start_year: u16,
    pub end_year: Option<u16>,
}

impl CareerStint {
    pub fn seasons(&self, current_year: u16) -> u16 {
        self.end_year
            .unwrap_or(current_year)
            .saturating_sub(self.start_year)
    }
}
