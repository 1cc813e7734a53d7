use crate::club::{
    CareerStint, Coach, CoachAttributes, CoachContract, CoachRole, CoachingTree, PersonalityProfile,
    Scheme, Tendencies,
};
use crate::error::{CoachingError, Result};
use std::collections::BTreeMap;

// Builder for Coach
#[derive(Default)]
pub struct CoachBuilder {
    id: Option<u32>,
    full_name: Option<String>,
    role: Option<CoachRole>,
    scheme: Option<Scheme>,
    tree: Option<CoachingTree>,
    personality: Option<PersonalityProfile>,
    attributes: Option<CoachAttributes>,
    years_experience: Option<u8>,
    age: Option<u8>,
    tendencies: Option<Tendencies>,
    contract: Option<CoachContract>,
    career_history: Vec<CareerStint>,
    player_chemistry: BTreeMap<u32, i8>,
    staff_chemistry: BTreeMap<u32, i8>,
}

impl CoachBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: u32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn full_name(mut self, full_name: String) -> Self {
        self.full_name = Some(full_name);
        self
    }

    pub fn role(mut self, role: CoachRole) -> Self {
        self.role = Some(role);
        self
    }

    pub fn scheme(mut self, scheme: Option<Scheme>) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn tree(mut self, tree: CoachingTree) -> Self {
        self.tree = Some(tree);
        self
    }

    pub fn personality(mut self, personality: PersonalityProfile) -> Self {
        self.personality = Some(personality);
        self
    }

    pub fn attributes(mut self, attributes: CoachAttributes) -> Self {
        self.attributes = Some(attributes);
        self
    }

    pub fn years_experience(mut self, years_experience: u8) -> Self {
        self.years_experience = Some(years_experience);
        self
    }

    pub fn age(mut self, age: u8) -> Self {
        self.age = Some(age);
        self
    }

    pub fn tendencies(mut self, tendencies: Option<Tendencies>) -> Self {
        self.tendencies = tendencies;
        self
    }

    pub fn contract(mut self, contract: Option<CoachContract>) -> Self {
        self.contract = contract;
        self
    }

    pub fn career_history(mut self, career_history: Vec<CareerStint>) -> Self {
        self.career_history = career_history;
        self
    }

    pub fn player_chemistry(mut self, player_chemistry: BTreeMap<u32, i8>) -> Self {
        self.player_chemistry = player_chemistry;
        self
    }

    pub fn staff_chemistry(mut self, staff_chemistry: BTreeMap<u32, i8>) -> Self {
        self.staff_chemistry = staff_chemistry;
        self
    }

    pub fn build(self) -> Result<Coach> {
        Ok(Coach {
            id: self.id.ok_or(CoachingError::MissingField("id"))?,
            full_name: self.full_name.ok_or(CoachingError::MissingField("full_name"))?,
            role: self.role.ok_or(CoachingError::MissingField("role"))?,
            scheme: self.scheme,
            tree: self.tree.ok_or(CoachingError::MissingField("tree"))?,
            personality: self.personality.ok_or(CoachingError::MissingField("personality"))?,
            attributes: self.attributes.unwrap_or_default(),
            years_experience: self.years_experience.unwrap_or_default(),
            age: self.age.unwrap_or(45),
            tendencies: self.tendencies,
            contract: self.contract,
            career_history: self.career_history,
            player_chemistry: self.player_chemistry,
            staff_chemistry: self.staff_chemistry,
        })
    }
}
