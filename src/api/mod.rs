//! Questionnaire API: wire types and the GraphQL gateway.

pub mod client;
pub mod models;

pub use client::{GraphqlClient, QuestionnaireGateway};
pub use models::{
    BelongsTo, CreateMany, Department, PersonnelRequirementInput, QuestionnaireInput, Skill,
    SkillRequirementInput,
};
