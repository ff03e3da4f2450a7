//! Conversion from the interactive form record to the API mutation input.
//!
//! The form stores raw wire tokens; this module is where they are parsed
//! into the typed enums, so an invalid token surfaces as an error at the
//! single choke point instead of a malformed request on the wire.

use anyhow::{Context, Result};
use log::error;

use crate::forms::options::FormEnum;
use crate::questionnaire::enums::{SkillLevel, YesNo};
use crate::questionnaire::model::{FormAnswers, OTHER_ID, PersonnelRequirementValues};
use crate::api::models::{
    BelongsTo, CreateMany, PersonnelRequirementInput, QuestionnaireInput, SkillRequirementInput,
};

/// Collapse an optional free-text answer to `None` when it is empty or
/// whitespace only.
fn empty_to_null(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Parse an optional stored token into its typed enum, failing loudly on a
/// token outside the enumeration.
fn map_enum<E: FormEnum>(value: &Option<String>) -> Result<Option<E>> {
    value.as_deref().map(E::from_token).transpose()
}

/// Parse a multi-selection into a typed list; an empty selection maps to a
/// null rather than an empty list.
fn map_enum_set<E: FormEnum>(values: &[String]) -> Result<Option<Vec<E>>> {
    if values.is_empty() {
        return Ok(None);
    }
    let parsed = values
        .iter()
        .map(|t| E::from_token(t))
        .collect::<Result<Vec<E>>>()?;
    Ok(Some(parsed))
}

/// Parse the free-text quantity to an integer. An entry that does not
/// parse maps to null and is logged rather than failing the whole
/// submission. The parse is strict: trailing junk ("12abc") and values
/// outside the wire type's 32-bit range both take the null path.
fn map_quantity(raw: &str) -> Option<i32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<i32>() {
        Ok(n) => Some(n),
        Err(_) => {
            error!("personnel requirement quantity '{}' is not a number, submitting null", raw);
            None
        }
    }
}

/// The department relation: a real selection connects the record, the
/// "not in the list" sentinel leaves the relation null and the free-text
/// override carries the name instead.
fn map_department(value: &Option<String>) -> Option<BelongsTo> {
    match value.as_deref() {
        Some(OTHER_ID) | None => None,
        Some(id) => Some(BelongsTo::connect(id)),
    }
}

fn map_personnel_requirement(values: &PersonnelRequirementValues) -> Result<PersonnelRequirementInput> {
    let skill_requirements = if values.skill_requirements.is_empty() {
        None
    } else {
        let create = values
            .skill_requirements
            .iter()
            .map(|s| {
                Ok(SkillRequirementInput {
                    skill: BelongsTo::connect(s.skill_id.clone()),
                    level: SkillLevel::from_token(&s.level)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Some(CreateMany { create })
    };

    let resource_type = {
        let trimmed = values.resource_type.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_owned())
    };

    Ok(PersonnelRequirementInput {
        resource_type,
        skill_requirements,
        language: map_enum(&values.language)?,
        language_other: empty_to_null(&values.language_other),
        security: map_enum(&values.security)?,
        security_other: empty_to_null(&values.security_other),
        telework: map_enum(&values.telework)?,
        quantity: map_quantity(&values.quantity),
    })
}

/// Build the full mutation input from the form record.
pub fn map_form_to_payload(answers: &FormAnswers) -> Result<QuestionnaireInput> {
    // The relation key must be absent unless the user affirmed the branch;
    // a lone stray entry from an abandoned branch must not leak through.
    let personnel_requirements = if answers.has_personnel_requirements.as_deref()
        == Some(YesNo::Yes.as_token())
    {
        let create = answers
            .personnel_requirements
            .iter()
            .map(map_personnel_requirement)
            .collect::<Result<Vec<_>>>()
            .context("invalid personnel requirement entry")?;
        Some(CreateMany { create })
    } else {
        None
    };

    Ok(QuestionnaireInput {
        read_preamble: answers.read_preamble,
        department: map_department(&answers.department),
        department_other: empty_to_null(&answers.department_other),
        branch_other: empty_to_null(&answers.branch_other),
        business_owner_name: empty_to_null(&answers.business_owner_name),
        business_owner_job_title: empty_to_null(&answers.business_owner_job_title),
        business_owner_email: empty_to_null(&answers.business_owner_email),
        financial_authority_name: empty_to_null(&answers.financial_authority_name),
        financial_authority_job_title: empty_to_null(&answers.financial_authority_job_title),
        financial_authority_email: empty_to_null(&answers.financial_authority_email),
        authorities_involved: map_enum_set(&answers.authorities_involved)?,
        authority_involved_other: empty_to_null(&answers.authority_involved_other),
        contract_behalf_of_gc: map_enum(&answers.contract_behalf_of_gc)?,
        contract_service_of_gc: map_enum(&answers.contract_service_of_gc)?,
        contract_for_digital_initiative: map_enum(&answers.contract_for_digital_initiative)?,
        digital_initiative_name: empty_to_null(&answers.digital_initiative_name),
        digital_initiative_plan_submitted: map_enum(&answers.digital_initiative_plan_submitted)?,
        digital_initiative_plan_updated: map_enum(&answers.digital_initiative_plan_updated)?,
        digital_initiative_plan_complemented: map_enum(
            &answers.digital_initiative_plan_complemented,
        )?,
        contract_title: empty_to_null(&answers.contract_title),
        contract_start_date: empty_to_null(&answers.contract_start_date),
        contract_end_date: empty_to_null(&answers.contract_end_date),
        contract_extendable: map_enum(&answers.contract_extendable)?,
        contract_amendable: map_enum(&answers.contract_amendable)?,
        contract_multiyear: map_enum(&answers.contract_multiyear)?,
        contract_value: map_enum(&answers.contract_value)?,
        contract_ftes: map_enum(&answers.contract_ftes)?,
        contract_resources_start_timeframe: map_enum(
            &answers.contract_resources_start_timeframe,
        )?,
        commodity_type: map_enum(&answers.commodity_type)?,
        commodity_type_other: empty_to_null(&answers.commodity_type_other),
        instrument_type: map_enum(&answers.instrument_type)?,
        instrument_type_other: empty_to_null(&answers.instrument_type_other),
        method_of_supply: map_enum(&answers.method_of_supply)?,
        method_of_supply_other: empty_to_null(&answers.method_of_supply_other),
        solicitation_procedure: map_enum(&answers.solicitation_procedure)?,
        subject_to_trade_agreement: map_enum(&answers.subject_to_trade_agreement)?,
        work_requirement_description: empty_to_null(&answers.work_requirement_description),
        qualification_requirement: empty_to_null(&answers.qualification_requirement),
        requirement_access_to_secure: map_enum(&answers.requirement_access_to_secure)?,
        requirement_screening_levels: map_enum_set(&answers.requirement_screening_levels)?,
        requirement_screening_level_other: empty_to_null(
            &answers.requirement_screening_level_other,
        ),
        requirement_work_languages: map_enum_set(&answers.requirement_work_languages)?,
        requirement_work_language_other: empty_to_null(&answers.requirement_work_language_other),
        requirement_work_locations: map_enum_set(&answers.requirement_work_locations)?,
        requirement_work_location_gc_specific: empty_to_null(
            &answers.requirement_work_location_gc_specific,
        ),
        requirement_work_location_offsite_specific: empty_to_null(
            &answers.requirement_work_location_offsite_specific,
        ),
        requirement_others: map_enum_set(&answers.requirement_others)?,
        requirement_other_other: empty_to_null(&answers.requirement_other_other),
        has_personnel_requirements: map_enum(&answers.has_personnel_requirements)?,
        personnel_requirements,
        is_technological_change: map_enum(&answers.is_technological_change)?,
        has_impact_on_your_department: map_enum(&answers.has_impact_on_your_department)?,
        has_immediate_impact_on_other_departments: map_enum(
            &answers.has_immediate_impact_on_other_departments,
        )?,
        has_future_impact_on_other_departments: map_enum(
            &answers.has_future_impact_on_other_departments,
        )?,
        operations_considerations: map_enum_set(&answers.operations_considerations)?,
        operations_considerations_other: empty_to_null(&answers.operations_considerations_other),
        contracting_rationale_primary: map_enum(&answers.contracting_rationale_primary)?,
        contracting_rationale_primary_other: empty_to_null(
            &answers.contracting_rationale_primary_other,
        ),
        contracting_rationales_secondary: map_enum_set(&answers.contracting_rationales_secondary)?,
        contracting_rationales_secondary_other: empty_to_null(
            &answers.contracting_rationales_secondary_other,
        ),
        ocio_confirmed_talent_shortage: map_enum(&answers.ocio_confirmed_talent_shortage)?,
        talent_search_tracking_number: empty_to_null(&answers.talent_search_tracking_number),
        ongoing_need_for_knowledge: map_enum(&answers.ongoing_need_for_knowledge)?,
        knowledge_transfer_in_contract: map_enum(&answers.knowledge_transfer_in_contract)?,
        employees_have_access_to_knowledge: map_enum(
            &answers.employees_have_access_to_knowledge,
        )?,
        ocio_engaged_for_training: map_enum(&answers.ocio_engaged_for_training)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::enums::{
        ContractCommodity, PersonnelScreeningLevel, SkillLevel,
    };
    use crate::questionnaire::model::SkillSelection;

    #[test]
    fn test_blank_form_maps_to_nulls() {
        let payload = map_form_to_payload(&FormAnswers::default()).unwrap();
        assert!(!payload.read_preamble);
        assert_eq!(payload.department, None);
        assert_eq!(payload.contract_title, None);
        assert_eq!(payload.authorities_involved, None);
        assert_eq!(payload.personnel_requirements, None);
    }

    #[test]
    fn test_whitespace_only_text_maps_to_null() {
        let answers = FormAnswers {
            contract_title: Some("   ".into()),
            branch_other: Some("  Digital Services Branch ".into()),
            ..Default::default()
        };
        let payload = map_form_to_payload(&answers).unwrap();
        assert_eq!(payload.contract_title, None);
        assert_eq!(
            payload.branch_other.as_deref(),
            Some("Digital Services Branch")
        );
    }

    #[test]
    fn test_other_selection_with_empty_override_keeps_other() {
        let answers = FormAnswers {
            commodity_type: Some("OTHER".into()),
            commodity_type_other: Some("".into()),
            ..Default::default()
        };
        let payload = map_form_to_payload(&answers).unwrap();
        assert_eq!(payload.commodity_type, Some(ContractCommodity::Other));
        assert_eq!(payload.commodity_type_other, None);
    }

    #[test]
    fn test_department_sentinel_leaves_relation_null() {
        let answers = FormAnswers {
            department: Some(OTHER_ID.into()),
            department_other: Some("Yukon Geomatics Office".into()),
            ..Default::default()
        };
        let payload = map_form_to_payload(&answers).unwrap();
        assert_eq!(payload.department, None);
        assert_eq!(
            payload.department_other.as_deref(),
            Some("Yukon Geomatics Office")
        );

        let answers = FormAnswers {
            department: Some("dep-42".into()),
            ..Default::default()
        };
        let payload = map_form_to_payload(&answers).unwrap();
        assert_eq!(payload.department, Some(BelongsTo::connect("dep-42")));
    }

    #[test]
    fn test_personnel_relation_present_only_when_affirmed() {
        let entry = PersonnelRequirementValues {
            resource_type: "Developer".into(),
            quantity: "2".into(),
            ..Default::default()
        };
        let answers = FormAnswers {
            has_personnel_requirements: Some("YES".into()),
            personnel_requirements: vec![entry.clone()],
            ..Default::default()
        };
        let payload = map_form_to_payload(&answers).unwrap();
        let relation = payload.personnel_requirements.unwrap();
        assert_eq!(relation.create.len(), 1);
        assert_eq!(relation.create[0].resource_type.as_deref(), Some("Developer"));
        assert_eq!(relation.create[0].quantity, Some(2));

        let answers = FormAnswers {
            has_personnel_requirements: Some("NO".into()),
            personnel_requirements: vec![entry],
            ..Default::default()
        };
        let payload = map_form_to_payload(&answers).unwrap();
        assert_eq!(payload.personnel_requirements, None);
    }

    #[test]
    fn test_access_to_secure_is_a_plain_yes_no() {
        let answers = FormAnswers {
            requirement_access_to_secure: Some("YES".into()),
            ..Default::default()
        };
        let payload = map_form_to_payload(&answers).unwrap();
        assert_eq!(payload.requirement_access_to_secure, Some(YesNo::Yes));

        // The unsure token belongs to the three-valued questions only;
        // here it is outside the declared set and must fail.
        let answers = FormAnswers {
            requirement_access_to_secure: Some("I_DONT_KNOW".into()),
            ..Default::default()
        };
        let err = map_form_to_payload(&answers).unwrap_err();
        assert!(format!("{}", err).contains("I_DONT_KNOW"));
    }

    #[test]
    fn test_quantity_parse_is_strict_and_range_checked() {
        // Trailing junk takes the null path; a prefix is not salvaged.
        assert_eq!(map_quantity("12abc"), None);
        // Beyond the wire type's 32-bit range also maps to null.
        assert_eq!(map_quantity("9999999999"), None);
        assert_eq!(map_quantity(" 12 "), Some(12));
        assert_eq!(map_quantity(""), None);
    }

    #[test]
    fn test_non_numeric_quantity_maps_to_null_without_failing() {
        let answers = FormAnswers {
            has_personnel_requirements: Some("YES".into()),
            personnel_requirements: vec![PersonnelRequirementValues {
                resource_type: "Analyst".into(),
                quantity: "abc".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let payload = map_form_to_payload(&answers).unwrap();
        let relation = payload.personnel_requirements.unwrap();
        assert_eq!(relation.create[0].quantity, None);
    }

    #[test]
    fn test_screening_levels_with_other_override_are_retained() {
        let answers = FormAnswers {
            has_personnel_requirements: Some("NO".into()),
            requirement_screening_levels: vec!["TOP_SECRET".into(), "OTHER".into()],
            requirement_screening_level_other: Some("Ultra-High Security".into()),
            ..Default::default()
        };
        let payload = map_form_to_payload(&answers).unwrap();
        assert_eq!(
            payload.requirement_screening_levels,
            Some(vec![
                PersonnelScreeningLevel::TopSecret,
                PersonnelScreeningLevel::Other
            ])
        );
        assert_eq!(
            payload.requirement_screening_level_other.as_deref(),
            Some("Ultra-High Security")
        );
    }

    #[test]
    fn test_skill_requirements_map_to_nested_create() {
        let answers = FormAnswers {
            has_personnel_requirements: Some("YES".into()),
            personnel_requirements: vec![PersonnelRequirementValues {
                resource_type: "Developer".into(),
                skill_requirements: vec![SkillSelection {
                    skill_id: "skill-9".into(),
                    level: "LEAD".into(),
                }],
                quantity: "1".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let payload = map_form_to_payload(&answers).unwrap();
        let requirement = &payload.personnel_requirements.unwrap().create[0];
        let skills = requirement.skill_requirements.as_ref().unwrap();
        assert_eq!(skills.create[0].skill, BelongsTo::connect("skill-9"));
        assert_eq!(skills.create[0].level, SkillLevel::Lead);
    }

    #[test]
    fn test_invalid_enum_token_is_an_error() {
        let answers = FormAnswers {
            commodity_type: Some("BANANAS".into()),
            ..Default::default()
        };
        let err = map_form_to_payload(&answers).unwrap_err();
        let message = format!("{}", err);
        assert!(message.contains("BANANAS"), "unhelpful error: {}", message);
    }

    #[test]
    fn test_empty_multi_selection_maps_to_null_not_empty_list() {
        let payload = map_form_to_payload(&FormAnswers::default()).unwrap();
        assert_eq!(payload.operations_considerations, None);
        assert_eq!(payload.contracting_rationales_secondary, None);
    }
}
