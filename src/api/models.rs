//! Wire types for the questionnaire GraphQL API.
//!
//! Field names serialize in camelCase to match the mutation input type.
//! Nullable questionnaire answers serialize as explicit `null`s; only the
//! personnel-requirements relation is omitted entirely when absent, since
//! the API treats a present-but-null relation differently from a missing
//! one.

use serde::{Deserialize, Serialize};

use crate::questionnaire::enums::{
    ContractAuthority, ContractCommodity, ContractFteRange, ContractInstrument,
    ContractSolicitationProcedure, ContractStartTimeframe, ContractSupplyMethod,
    ContractValueRange, ContractingRationale, OperationsConsideration, PersonnelLanguage,
    PersonnelOtherRequirement, PersonnelScreeningLevel, PersonnelTeleworkOption,
    PersonnelWorkLocation, SkillLevel, YesNo, YesNoUnsure,
};

/// A department the questionnaire can be filed under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Department {
    pub id: String,
    pub name: String,
}

/// A skill selectable for a personnel requirement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Skill {
    pub id: String,
    pub name: String,
}

/// `{ connect: <id> }` relation wrapper for an existing record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BelongsTo {
    pub connect: String,
}

impl BelongsTo {
    pub fn connect(id: impl Into<String>) -> Self {
        Self { connect: id.into() }
    }
}

/// `{ create: [...] }` relation wrapper for nested record creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateMany<T> {
    pub create: Vec<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SkillRequirementInput {
    pub skill: BelongsTo,
    pub level: SkillLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PersonnelRequirementInput {
    pub resource_type: Option<String>,
    pub skill_requirements: Option<CreateMany<SkillRequirementInput>>,
    pub language: Option<PersonnelLanguage>,
    pub language_other: Option<String>,
    pub security: Option<PersonnelScreeningLevel>,
    pub security_other: Option<String>,
    pub telework: Option<PersonnelTeleworkOption>,
    pub quantity: Option<i32>,
}

/// The full mutation input for a digital contracting questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QuestionnaireInput {
    pub read_preamble: bool,
    pub department: Option<BelongsTo>,
    pub department_other: Option<String>,
    pub branch_other: Option<String>,
    pub business_owner_name: Option<String>,
    pub business_owner_job_title: Option<String>,
    pub business_owner_email: Option<String>,
    pub financial_authority_name: Option<String>,
    pub financial_authority_job_title: Option<String>,
    pub financial_authority_email: Option<String>,
    pub authorities_involved: Option<Vec<ContractAuthority>>,
    pub authority_involved_other: Option<String>,
    pub contract_behalf_of_gc: Option<YesNoUnsure>,
    pub contract_service_of_gc: Option<YesNoUnsure>,
    pub contract_for_digital_initiative: Option<YesNoUnsure>,
    pub digital_initiative_name: Option<String>,
    pub digital_initiative_plan_submitted: Option<YesNoUnsure>,
    pub digital_initiative_plan_updated: Option<YesNoUnsure>,
    pub digital_initiative_plan_complemented: Option<YesNoUnsure>,
    pub contract_title: Option<String>,
    pub contract_start_date: Option<String>,
    pub contract_end_date: Option<String>,
    pub contract_extendable: Option<YesNo>,
    pub contract_amendable: Option<YesNo>,
    pub contract_multiyear: Option<YesNo>,
    pub contract_value: Option<ContractValueRange>,
    pub contract_ftes: Option<ContractFteRange>,
    pub contract_resources_start_timeframe: Option<ContractStartTimeframe>,
    pub commodity_type: Option<ContractCommodity>,
    pub commodity_type_other: Option<String>,
    pub instrument_type: Option<ContractInstrument>,
    pub instrument_type_other: Option<String>,
    pub method_of_supply: Option<ContractSupplyMethod>,
    pub method_of_supply_other: Option<String>,
    pub solicitation_procedure: Option<ContractSolicitationProcedure>,
    pub subject_to_trade_agreement: Option<YesNoUnsure>,
    pub work_requirement_description: Option<String>,
    pub qualification_requirement: Option<String>,
    pub requirement_access_to_secure: Option<YesNo>,
    pub requirement_screening_levels: Option<Vec<PersonnelScreeningLevel>>,
    pub requirement_screening_level_other: Option<String>,
    pub requirement_work_languages: Option<Vec<PersonnelLanguage>>,
    pub requirement_work_language_other: Option<String>,
    pub requirement_work_locations: Option<Vec<PersonnelWorkLocation>>,
    pub requirement_work_location_gc_specific: Option<String>,
    pub requirement_work_location_offsite_specific: Option<String>,
    pub requirement_others: Option<Vec<PersonnelOtherRequirement>>,
    pub requirement_other_other: Option<String>,
    pub has_personnel_requirements: Option<YesNo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personnel_requirements: Option<CreateMany<PersonnelRequirementInput>>,
    pub is_technological_change: Option<YesNo>,
    pub has_impact_on_your_department: Option<YesNo>,
    pub has_immediate_impact_on_other_departments: Option<YesNo>,
    pub has_future_impact_on_other_departments: Option<YesNo>,
    pub operations_considerations: Option<Vec<OperationsConsideration>>,
    pub operations_considerations_other: Option<String>,
    pub contracting_rationale_primary: Option<ContractingRationale>,
    pub contracting_rationale_primary_other: Option<String>,
    pub contracting_rationales_secondary: Option<Vec<ContractingRationale>>,
    pub contracting_rationales_secondary_other: Option<String>,
    pub ocio_confirmed_talent_shortage: Option<YesNo>,
    pub talent_search_tracking_number: Option<String>,
    pub ongoing_need_for_knowledge: Option<YesNo>,
    pub knowledge_transfer_in_contract: Option<YesNo>,
    pub employees_have_access_to_knowledge: Option<YesNo>,
    pub ocio_engaged_for_training: Option<YesNo>,
}
