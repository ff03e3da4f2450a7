//! The digital services contracting questionnaire: its enumerations, field
//! model, visibility rules, labels, payload mapping and demo fixtures.

pub mod enums;
pub mod fixtures;
pub mod labels;
pub mod mapping;
pub mod model;
pub mod rules;

pub use mapping::map_form_to_payload;
pub use model::{FieldId, FieldKind, FormAnswers, OTHER_ID, PersonnelRequirementValues};
pub use rules::{ALL_FIELDS, questionnaire_rules};
