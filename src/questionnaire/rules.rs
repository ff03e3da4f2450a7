//! Conditional-visibility rules of the contracting questionnaire.
//!
//! One rule per dependent field. Each predicate spells out the full chain
//! of controlling answers that makes the field reachable, so a single
//! sweep over the rules settles the whole form: hiding an outer branch
//! hides (and clears) everything nested under it in the same pass.

use crate::forms::options::FormEnum;
use crate::forms::store::VisibilityRule;
use crate::questionnaire::enums::{
    ContractAuthority, ContractCommodity, ContractInstrument, ContractSupplyMethod,
    ContractingRationale, OperationsConsideration, PersonnelLanguage, PersonnelOtherRequirement,
    PersonnelScreeningLevel, PersonnelWorkLocation, YesNo, YesNoUnsure,
};
use crate::questionnaire::model::{FieldId, FormAnswers, OTHER_ID};

fn selected(answer: &Option<String>, token: &str) -> bool {
    answer.as_deref() == Some(token)
}

fn includes(set: &[String], token: &str) -> bool {
    set.iter().any(|t| t == token)
}

fn yes(answer: &Option<String>) -> bool {
    selected(answer, YesNo::Yes.as_token())
}

fn no(answer: &Option<String>) -> bool {
    selected(answer, YesNo::No.as_token())
}

fn unsure_yes(answer: &Option<String>) -> bool {
    selected(answer, YesNoUnsure::Yes.as_token())
}

/// The "no specific personnel requirements" branch of the requirements
/// section: generic qualification and screening questions shown when the
/// contract has no per-resource breakdown.
fn general_requirements_branch(a: &FormAnswers) -> bool {
    no(&a.has_personnel_requirements)
}

/// The complete rule set, in section order.
pub fn questionnaire_rules() -> Vec<VisibilityRule> {
    vec![
        // General information
        VisibilityRule {
            field: FieldId::DepartmentOther,
            visible: |a| selected(&a.department, OTHER_ID),
        },
        VisibilityRule {
            field: FieldId::AuthoritiesInvolved,
            visible: |a| yes(&a.is_authority_involved),
        },
        VisibilityRule {
            field: FieldId::AuthorityInvolvedOther,
            visible: |a| {
                yes(&a.is_authority_involved)
                    && includes(
                        &a.authorities_involved,
                        ContractAuthority::Other.as_token(),
                    )
            },
        },
        VisibilityRule {
            field: FieldId::DigitalInitiativeName,
            visible: |a| unsure_yes(&a.contract_for_digital_initiative),
        },
        VisibilityRule {
            field: FieldId::DigitalInitiativePlanSubmitted,
            visible: |a| unsure_yes(&a.contract_for_digital_initiative),
        },
        VisibilityRule {
            field: FieldId::DigitalInitiativePlanUpdated,
            visible: |a| {
                unsure_yes(&a.contract_for_digital_initiative)
                    && unsure_yes(&a.digital_initiative_plan_submitted)
            },
        },
        VisibilityRule {
            field: FieldId::DigitalInitiativePlanComplemented,
            visible: |a| unsure_yes(&a.contract_for_digital_initiative),
        },
        // Scope of contract
        VisibilityRule {
            field: FieldId::CommodityTypeOther,
            visible: |a| selected(&a.commodity_type, ContractCommodity::Other.as_token()),
        },
        VisibilityRule {
            field: FieldId::InstrumentTypeOther,
            visible: |a| selected(&a.instrument_type, ContractInstrument::Other.as_token()),
        },
        VisibilityRule {
            field: FieldId::MethodOfSupplyOther,
            visible: |a| selected(&a.method_of_supply, ContractSupplyMethod::Other.as_token()),
        },
        // Requirements: the generic branch exists only while the contract
        // has no specific personnel requirements.
        VisibilityRule {
            field: FieldId::QualificationRequirement,
            visible: general_requirements_branch,
        },
        VisibilityRule {
            field: FieldId::RequirementScreeningLevels,
            visible: general_requirements_branch,
        },
        VisibilityRule {
            field: FieldId::RequirementScreeningLevelOther,
            visible: |a| {
                general_requirements_branch(a)
                    && includes(
                        &a.requirement_screening_levels,
                        PersonnelScreeningLevel::Other.as_token(),
                    )
            },
        },
        VisibilityRule {
            field: FieldId::RequirementWorkLanguages,
            visible: general_requirements_branch,
        },
        VisibilityRule {
            field: FieldId::RequirementWorkLanguageOther,
            visible: |a| {
                general_requirements_branch(a)
                    && includes(
                        &a.requirement_work_languages,
                        PersonnelLanguage::Other.as_token(),
                    )
            },
        },
        VisibilityRule {
            field: FieldId::RequirementWorkLocations,
            visible: general_requirements_branch,
        },
        VisibilityRule {
            field: FieldId::RequirementWorkLocationGcSpecific,
            visible: |a| {
                general_requirements_branch(a)
                    && includes(
                        &a.requirement_work_locations,
                        PersonnelWorkLocation::GcPremises.as_token(),
                    )
            },
        },
        VisibilityRule {
            field: FieldId::RequirementWorkLocationOffsiteSpecific,
            visible: |a| {
                general_requirements_branch(a)
                    && includes(
                        &a.requirement_work_locations,
                        PersonnelWorkLocation::OffsiteSpecific.as_token(),
                    )
            },
        },
        VisibilityRule {
            field: FieldId::HasOtherRequirements,
            visible: general_requirements_branch,
        },
        VisibilityRule {
            field: FieldId::RequirementOthers,
            visible: |a| general_requirements_branch(a) && yes(&a.has_other_requirements),
        },
        VisibilityRule {
            field: FieldId::RequirementOtherOther,
            visible: |a| {
                general_requirements_branch(a)
                    && yes(&a.has_other_requirements)
                    && includes(
                        &a.requirement_others,
                        PersonnelOtherRequirement::Other.as_token(),
                    )
            },
        },
        // Personnel requirements
        VisibilityRule {
            field: FieldId::PersonnelRequirements,
            visible: |a| yes(&a.has_personnel_requirements),
        },
        // Technological change
        VisibilityRule {
            field: FieldId::HasImpactOnYourDepartment,
            visible: |a| yes(&a.is_technological_change),
        },
        VisibilityRule {
            field: FieldId::HasImmediateImpactOnOtherDepartments,
            visible: |a| yes(&a.is_technological_change),
        },
        VisibilityRule {
            field: FieldId::HasFutureImpactOnOtherDepartments,
            visible: |a| yes(&a.is_technological_change),
        },
        // Operations considerations
        VisibilityRule {
            field: FieldId::OperationsConsiderations,
            visible: |a| yes(&a.has_operations_considerations),
        },
        VisibilityRule {
            field: FieldId::OperationsConsiderationsOther,
            visible: |a| {
                yes(&a.has_operations_considerations)
                    && includes(
                        &a.operations_considerations,
                        OperationsConsideration::Other.as_token(),
                    )
            },
        },
        // Talent sourcing decision
        VisibilityRule {
            field: FieldId::ContractingRationalePrimaryOther,
            visible: |a| {
                selected(
                    &a.contracting_rationale_primary,
                    ContractingRationale::Other.as_token(),
                )
            },
        },
        VisibilityRule {
            field: FieldId::OcioConfirmedTalentShortage,
            visible: |a| {
                selected(
                    &a.contracting_rationale_primary,
                    ContractingRationale::ShortageOfTalent.as_token(),
                )
            },
        },
        VisibilityRule {
            field: FieldId::TalentSearchTrackingNumber,
            visible: |a| {
                selected(
                    &a.contracting_rationale_primary,
                    ContractingRationale::ShortageOfTalent.as_token(),
                )
            },
        },
        VisibilityRule {
            field: FieldId::ContractingRationalesSecondaryOther,
            visible: |a| {
                includes(
                    &a.contracting_rationales_secondary,
                    ContractingRationale::Other.as_token(),
                )
            },
        },
        VisibilityRule {
            field: FieldId::KnowledgeTransferInContract,
            visible: |a| yes(&a.ongoing_need_for_knowledge),
        },
        VisibilityRule {
            field: FieldId::EmployeesHaveAccessToKnowledge,
            visible: |a| yes(&a.ongoing_need_for_knowledge),
        },
        VisibilityRule {
            field: FieldId::OcioEngagedForTraining,
            visible: |a| yes(&a.ongoing_need_for_knowledge),
        },
    ]
}

/// Every field of the questionnaire, in display order. Drives the wizard
/// and the exhaustiveness checks in tests.
pub const ALL_FIELDS: &[FieldId] = &[
    FieldId::ReadPreamble,
    FieldId::Department,
    FieldId::DepartmentOther,
    FieldId::BranchOther,
    FieldId::BusinessOwnerName,
    FieldId::BusinessOwnerJobTitle,
    FieldId::BusinessOwnerEmail,
    FieldId::FinancialAuthorityName,
    FieldId::FinancialAuthorityJobTitle,
    FieldId::FinancialAuthorityEmail,
    FieldId::IsAuthorityInvolved,
    FieldId::AuthoritiesInvolved,
    FieldId::AuthorityInvolvedOther,
    FieldId::ContractBehalfOfGc,
    FieldId::ContractServiceOfGc,
    FieldId::ContractForDigitalInitiative,
    FieldId::DigitalInitiativeName,
    FieldId::DigitalInitiativePlanSubmitted,
    FieldId::DigitalInitiativePlanUpdated,
    FieldId::DigitalInitiativePlanComplemented,
    FieldId::ContractTitle,
    FieldId::ContractStartDate,
    FieldId::ContractEndDate,
    FieldId::ContractExtendable,
    FieldId::ContractAmendable,
    FieldId::ContractMultiyear,
    FieldId::ContractValue,
    FieldId::ContractFtes,
    FieldId::ContractResourcesStartTimeframe,
    FieldId::CommodityType,
    FieldId::CommodityTypeOther,
    FieldId::InstrumentType,
    FieldId::InstrumentTypeOther,
    FieldId::MethodOfSupply,
    FieldId::MethodOfSupplyOther,
    FieldId::SolicitationProcedure,
    FieldId::SubjectToTradeAgreement,
    FieldId::WorkRequirementDescription,
    FieldId::RequirementAccessToSecure,
    FieldId::HasPersonnelRequirements,
    FieldId::QualificationRequirement,
    FieldId::RequirementScreeningLevels,
    FieldId::RequirementScreeningLevelOther,
    FieldId::RequirementWorkLanguages,
    FieldId::RequirementWorkLanguageOther,
    FieldId::RequirementWorkLocations,
    FieldId::RequirementWorkLocationGcSpecific,
    FieldId::RequirementWorkLocationOffsiteSpecific,
    FieldId::HasOtherRequirements,
    FieldId::RequirementOthers,
    FieldId::RequirementOtherOther,
    FieldId::PersonnelRequirements,
    FieldId::IsTechnologicalChange,
    FieldId::HasImpactOnYourDepartment,
    FieldId::HasImmediateImpactOnOtherDepartments,
    FieldId::HasFutureImpactOnOtherDepartments,
    FieldId::HasOperationsConsiderations,
    FieldId::OperationsConsiderations,
    FieldId::OperationsConsiderationsOther,
    FieldId::ContractingRationalePrimary,
    FieldId::ContractingRationalePrimaryOther,
    FieldId::OcioConfirmedTalentShortage,
    FieldId::TalentSearchTrackingNumber,
    FieldId::ContractingRationalesSecondary,
    FieldId::ContractingRationalesSecondaryOther,
    FieldId::OngoingNeedForKnowledge,
    FieldId::KnowledgeTransferInContract,
    FieldId::EmployeesHaveAccessToKnowledge,
    FieldId::OcioEngagedForTraining,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::store::FormStore;

    #[test]
    fn test_hiding_outer_branch_clears_nested_chain() {
        let mut store = FormStore::new(questionnaire_rules());
        let yes = YesNoUnsure::Yes.as_token();
        store
            .set_selection(FieldId::ContractForDigitalInitiative, yes)
            .unwrap();
        store
            .set_text(FieldId::DigitalInitiativeName, "Benefits modernization")
            .unwrap();
        store
            .set_selection(FieldId::DigitalInitiativePlanSubmitted, yes)
            .unwrap();
        store
            .set_selection(FieldId::DigitalInitiativePlanUpdated, yes)
            .unwrap();

        store
            .set_selection(
                FieldId::ContractForDigitalInitiative,
                YesNoUnsure::No.as_token(),
            )
            .unwrap();

        let answers = store.answers();
        assert_eq!(answers.digital_initiative_name, None);
        assert_eq!(answers.digital_initiative_plan_submitted, None);
        assert_eq!(answers.digital_initiative_plan_updated, None);
        assert_eq!(answers.digital_initiative_plan_complemented, None);
    }

    #[test]
    fn test_personnel_branch_hides_general_requirements() {
        let mut store = FormStore::new(questionnaire_rules());
        store
            .set_selection(FieldId::HasPersonnelRequirements, YesNo::No.as_token())
            .unwrap();
        store
            .set_text(FieldId::QualificationRequirement, "CS-02 equivalent")
            .unwrap();
        store
            .set_multi(
                FieldId::RequirementScreeningLevels,
                vec![
                    PersonnelScreeningLevel::TopSecret.as_token().to_string(),
                    PersonnelScreeningLevel::Other.as_token().to_string(),
                ],
            )
            .unwrap();
        store
            .set_text(FieldId::RequirementScreeningLevelOther, "Ultra-High Security")
            .unwrap();
        store
            .set_multi(
                FieldId::RequirementWorkLocations,
                vec![PersonnelWorkLocation::GcPremises.as_token().to_string()],
            )
            .unwrap();
        store
            .set_text(FieldId::RequirementWorkLocationGcSpecific, "Ottawa HQ")
            .unwrap();

        // Flipping to the per-resource branch clears the whole generic
        // block, including the nested "Other"/location overrides.
        store
            .set_selection(FieldId::HasPersonnelRequirements, YesNo::Yes.as_token())
            .unwrap();
        let answers = store.answers();
        assert_eq!(answers.qualification_requirement, None);
        assert!(answers.requirement_screening_levels.is_empty());
        assert_eq!(answers.requirement_screening_level_other, None);
        assert!(answers.requirement_work_locations.is_empty());
        assert_eq!(answers.requirement_work_location_gc_specific, None);
    }

    #[test]
    fn test_membership_driven_visibility_on_set_valued_field() {
        let mut store = FormStore::new(questionnaire_rules());
        store
            .set_selection(FieldId::HasOperationsConsiderations, YesNo::Yes.as_token())
            .unwrap();
        store
            .set_multi(
                FieldId::OperationsConsiderations,
                vec![
                    OperationsConsideration::StaffingFreeze.as_token().to_string(),
                    OperationsConsideration::Other.as_token().to_string(),
                ],
            )
            .unwrap();
        store
            .set_text(FieldId::OperationsConsiderationsOther, "Seasonal surge")
            .unwrap();

        // Dropping "Other" from the set hides and clears the override.
        store
            .set_multi(
                FieldId::OperationsConsiderations,
                vec![OperationsConsideration::StaffingFreeze.as_token().to_string()],
            )
            .unwrap();
        assert_eq!(store.answers().operations_considerations_other, None);
    }

    #[test]
    fn test_all_fields_listing_is_exhaustive_and_unique() {
        use std::collections::HashSet;
        let unique: HashSet<_> = ALL_FIELDS.iter().collect();
        assert_eq!(unique.len(), ALL_FIELDS.len());
        for rule in questionnaire_rules() {
            assert!(
                ALL_FIELDS.contains(&rule.field),
                "rule for unlisted field {:?}",
                rule.field
            );
        }
    }
}
