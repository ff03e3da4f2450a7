//! Backing data model for the questionnaire form.
//!
//! `FormAnswers` is the flat record of everything the user has entered.
//! Enum-typed answers are stored as raw wire tokens and validated when the
//! record is mapped to the API payload; the widgets only ever offer tokens
//! from the declared enumerations, so an invalid token at mapping time is a
//! programming error, not a user error.

use anyhow::{Result, bail};

use crate::forms::options::FormEnum;
use crate::questionnaire::enums::{PersonnelLanguage, PersonnelScreeningLevel};

/// Sentinel selection meaning "my department is not in the list"; the
/// free-text override carries the actual value instead.
pub const OTHER_ID: &str = "OTHER";

/// Every scalar or collection field of the questionnaire, by name.
///
/// Replaces the original watch-by-field-name-string subscriptions: a typo
/// here is a compile error rather than a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    // Preamble
    ReadPreamble,
    // General information
    Department,
    DepartmentOther,
    BranchOther,
    BusinessOwnerName,
    BusinessOwnerJobTitle,
    BusinessOwnerEmail,
    FinancialAuthorityName,
    FinancialAuthorityJobTitle,
    FinancialAuthorityEmail,
    IsAuthorityInvolved,
    AuthoritiesInvolved,
    AuthorityInvolvedOther,
    ContractBehalfOfGc,
    ContractServiceOfGc,
    ContractForDigitalInitiative,
    DigitalInitiativeName,
    DigitalInitiativePlanSubmitted,
    DigitalInitiativePlanUpdated,
    DigitalInitiativePlanComplemented,
    // Scope of contract
    ContractTitle,
    ContractStartDate,
    ContractEndDate,
    ContractExtendable,
    ContractAmendable,
    ContractMultiyear,
    ContractValue,
    ContractFtes,
    ContractResourcesStartTimeframe,
    CommodityType,
    CommodityTypeOther,
    InstrumentType,
    InstrumentTypeOther,
    MethodOfSupply,
    MethodOfSupplyOther,
    SolicitationProcedure,
    SubjectToTradeAgreement,
    // Requirements
    WorkRequirementDescription,
    RequirementAccessToSecure,
    QualificationRequirement,
    RequirementScreeningLevels,
    RequirementScreeningLevelOther,
    RequirementWorkLanguages,
    RequirementWorkLanguageOther,
    RequirementWorkLocations,
    RequirementWorkLocationGcSpecific,
    RequirementWorkLocationOffsiteSpecific,
    HasOtherRequirements,
    RequirementOthers,
    RequirementOtherOther,
    // Personnel requirements
    HasPersonnelRequirements,
    PersonnelRequirements,
    // Technological change
    IsTechnologicalChange,
    HasImpactOnYourDepartment,
    HasImmediateImpactOnOtherDepartments,
    HasFutureImpactOnOtherDepartments,
    // Operations considerations
    HasOperationsConsiderations,
    OperationsConsiderations,
    OperationsConsiderationsOther,
    // Talent sourcing decision
    ContractingRationalePrimary,
    ContractingRationalePrimaryOther,
    OcioConfirmedTalentShortage,
    TalentSearchTrackingNumber,
    ContractingRationalesSecondary,
    ContractingRationalesSecondaryOther,
    OngoingNeedForKnowledge,
    KnowledgeTransferInContract,
    EmployeesHaveAccessToKnowledge,
    OcioEngagedForTraining,
}

/// The shape of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Checkbox, held as a plain bool.
    Bool,
    /// Free text.
    Text,
    /// Single selection from a closed enumeration (or the department list).
    Selection,
    /// Multi-selection (checklist) from a closed enumeration.
    Multi,
    /// The repeated personnel-requirement sub-records.
    Collection,
}

impl FieldId {
    pub fn kind(self) -> FieldKind {
        use FieldId::*;
        match self {
            ReadPreamble => FieldKind::Bool,

            Department
            | ContractBehalfOfGc
            | ContractServiceOfGc
            | ContractForDigitalInitiative
            | DigitalInitiativePlanSubmitted
            | DigitalInitiativePlanUpdated
            | DigitalInitiativePlanComplemented
            | ContractExtendable
            | ContractAmendable
            | ContractMultiyear
            | ContractValue
            | ContractFtes
            | ContractResourcesStartTimeframe
            | CommodityType
            | InstrumentType
            | MethodOfSupply
            | SolicitationProcedure
            | SubjectToTradeAgreement
            | RequirementAccessToSecure
            | IsAuthorityInvolved
            | HasOperationsConsiderations
            | HasOtherRequirements
            | HasPersonnelRequirements
            | IsTechnologicalChange
            | HasImpactOnYourDepartment
            | HasImmediateImpactOnOtherDepartments
            | HasFutureImpactOnOtherDepartments
            | ContractingRationalePrimary
            | OcioConfirmedTalentShortage
            | OngoingNeedForKnowledge
            | KnowledgeTransferInContract
            | EmployeesHaveAccessToKnowledge
            | OcioEngagedForTraining => FieldKind::Selection,

            AuthoritiesInvolved
            | RequirementScreeningLevels
            | RequirementWorkLanguages
            | RequirementWorkLocations
            | RequirementOthers
            | OperationsConsiderations
            | ContractingRationalesSecondary => FieldKind::Multi,

            PersonnelRequirements => FieldKind::Collection,

            _ => FieldKind::Text,
        }
    }
}

/// One (skill, proficiency) pair required of a personnel resource.
///
/// A validated, tagged record: the original re-checked "does this object
/// have a skillId string and a level string" at each use site instead.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SkillSelection {
    pub skill_id: String,
    pub level: String,
}

/// A repeatable personnel-requirement sub-record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersonnelRequirementValues {
    pub resource_type: String,
    pub skill_requirements: Vec<SkillSelection>,
    pub language: Option<String>,
    pub language_other: Option<String>,
    pub security: Option<String>,
    pub security_other: Option<String>,
    pub telework: Option<String>,
    /// Free text, parsed to an integer at mapping time.
    pub quantity: String,
}

impl PersonnelRequirementValues {
    /// Set the language requirement, clearing the free-text override when
    /// the "Other" branch is deselected.
    pub fn set_language(&mut self, token: impl Into<String>) {
        let token = token.into();
        if token != PersonnelLanguage::Other.as_token() {
            self.language_other = None;
        }
        self.language = Some(token);
    }

    /// Set the security requirement, clearing the free-text override when
    /// the "Other" branch is deselected.
    pub fn set_security(&mut self, token: impl Into<String>) {
        let token = token.into();
        if token != PersonnelScreeningLevel::Other.as_token() {
            self.security_other = None;
        }
        self.security = Some(token);
    }

    /// Append a (skill, level) pair. Skill ids are unique per requirement;
    /// a duplicate id leaves the list unchanged.
    pub fn add_skill(&mut self, skill_id: impl Into<String>, level: impl Into<String>) {
        let skill_id = skill_id.into();
        if self.skill_requirements.iter().any(|s| s.skill_id == skill_id) {
            return;
        }
        self.skill_requirements.push(SkillSelection {
            skill_id,
            level: level.into(),
        });
    }

    /// Replace the proficiency level of the skill entry at `index` in place.
    pub fn edit_skill(&mut self, index: usize, level: impl Into<String>) -> Result<()> {
        match self.skill_requirements.get_mut(index) {
            Some(entry) => {
                entry.level = level.into();
                Ok(())
            }
            None => bail!("no skill requirement at index {}", index),
        }
    }

    /// Remove the skill entry with the given id, if present.
    pub fn remove_skill(&mut self, skill_id: &str) {
        self.skill_requirements.retain(|s| s.skill_id != skill_id);
    }
}

/// The flat record of all questionnaire answers.
///
/// Created empty when the form starts, mutated field-by-field as the user
/// interacts, consumed once at submit time, discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormAnswers {
    // Preamble
    pub read_preamble: bool,
    // General information
    pub department: Option<String>,
    pub department_other: Option<String>,
    pub branch_other: Option<String>,
    pub business_owner_name: Option<String>,
    pub business_owner_job_title: Option<String>,
    pub business_owner_email: Option<String>,
    pub financial_authority_name: Option<String>,
    pub financial_authority_job_title: Option<String>,
    pub financial_authority_email: Option<String>,
    pub is_authority_involved: Option<String>,
    pub authorities_involved: Vec<String>,
    pub authority_involved_other: Option<String>,
    pub contract_behalf_of_gc: Option<String>,
    pub contract_service_of_gc: Option<String>,
    pub contract_for_digital_initiative: Option<String>,
    pub digital_initiative_name: Option<String>,
    pub digital_initiative_plan_submitted: Option<String>,
    pub digital_initiative_plan_updated: Option<String>,
    pub digital_initiative_plan_complemented: Option<String>,
    // Scope of contract
    pub contract_title: Option<String>,
    pub contract_start_date: Option<String>,
    pub contract_end_date: Option<String>,
    pub contract_extendable: Option<String>,
    pub contract_amendable: Option<String>,
    pub contract_multiyear: Option<String>,
    pub contract_value: Option<String>,
    pub contract_ftes: Option<String>,
    pub contract_resources_start_timeframe: Option<String>,
    pub commodity_type: Option<String>,
    pub commodity_type_other: Option<String>,
    pub instrument_type: Option<String>,
    pub instrument_type_other: Option<String>,
    pub method_of_supply: Option<String>,
    pub method_of_supply_other: Option<String>,
    pub solicitation_procedure: Option<String>,
    pub subject_to_trade_agreement: Option<String>,
    // Requirements
    pub work_requirement_description: Option<String>,
    pub requirement_access_to_secure: Option<String>,
    pub qualification_requirement: Option<String>,
    pub requirement_screening_levels: Vec<String>,
    pub requirement_screening_level_other: Option<String>,
    pub requirement_work_languages: Vec<String>,
    pub requirement_work_language_other: Option<String>,
    pub requirement_work_locations: Vec<String>,
    pub requirement_work_location_gc_specific: Option<String>,
    pub requirement_work_location_offsite_specific: Option<String>,
    pub has_other_requirements: Option<String>,
    pub requirement_others: Vec<String>,
    pub requirement_other_other: Option<String>,
    // Personnel requirements
    pub has_personnel_requirements: Option<String>,
    pub personnel_requirements: Vec<PersonnelRequirementValues>,
    // Technological change
    pub is_technological_change: Option<String>,
    pub has_impact_on_your_department: Option<String>,
    pub has_immediate_impact_on_other_departments: Option<String>,
    pub has_future_impact_on_other_departments: Option<String>,
    // Operations considerations
    pub has_operations_considerations: Option<String>,
    pub operations_considerations: Vec<String>,
    pub operations_considerations_other: Option<String>,
    // Talent sourcing decision
    pub contracting_rationale_primary: Option<String>,
    pub contracting_rationale_primary_other: Option<String>,
    pub ocio_confirmed_talent_shortage: Option<String>,
    pub talent_search_tracking_number: Option<String>,
    pub contracting_rationales_secondary: Vec<String>,
    pub contracting_rationales_secondary_other: Option<String>,
    pub ongoing_need_for_knowledge: Option<String>,
    pub knowledge_transfer_in_contract: Option<String>,
    pub employees_have_access_to_knowledge: Option<String>,
    pub ocio_engaged_for_training: Option<String>,
}

impl FormAnswers {
    /// Mutable access to a text/selection field's slot.
    pub fn scalar_slot(&mut self, field: FieldId) -> Result<&mut Option<String>> {
        use FieldId::*;
        let slot = match field {
            Department => &mut self.department,
            DepartmentOther => &mut self.department_other,
            BranchOther => &mut self.branch_other,
            BusinessOwnerName => &mut self.business_owner_name,
            BusinessOwnerJobTitle => &mut self.business_owner_job_title,
            BusinessOwnerEmail => &mut self.business_owner_email,
            FinancialAuthorityName => &mut self.financial_authority_name,
            FinancialAuthorityJobTitle => &mut self.financial_authority_job_title,
            FinancialAuthorityEmail => &mut self.financial_authority_email,
            IsAuthorityInvolved => &mut self.is_authority_involved,
            AuthorityInvolvedOther => &mut self.authority_involved_other,
            ContractBehalfOfGc => &mut self.contract_behalf_of_gc,
            ContractServiceOfGc => &mut self.contract_service_of_gc,
            ContractForDigitalInitiative => &mut self.contract_for_digital_initiative,
            DigitalInitiativeName => &mut self.digital_initiative_name,
            DigitalInitiativePlanSubmitted => &mut self.digital_initiative_plan_submitted,
            DigitalInitiativePlanUpdated => &mut self.digital_initiative_plan_updated,
            DigitalInitiativePlanComplemented => &mut self.digital_initiative_plan_complemented,
            ContractTitle => &mut self.contract_title,
            ContractStartDate => &mut self.contract_start_date,
            ContractEndDate => &mut self.contract_end_date,
            ContractExtendable => &mut self.contract_extendable,
            ContractAmendable => &mut self.contract_amendable,
            ContractMultiyear => &mut self.contract_multiyear,
            ContractValue => &mut self.contract_value,
            ContractFtes => &mut self.contract_ftes,
            ContractResourcesStartTimeframe => &mut self.contract_resources_start_timeframe,
            CommodityType => &mut self.commodity_type,
            CommodityTypeOther => &mut self.commodity_type_other,
            InstrumentType => &mut self.instrument_type,
            InstrumentTypeOther => &mut self.instrument_type_other,
            MethodOfSupply => &mut self.method_of_supply,
            MethodOfSupplyOther => &mut self.method_of_supply_other,
            SolicitationProcedure => &mut self.solicitation_procedure,
            SubjectToTradeAgreement => &mut self.subject_to_trade_agreement,
            WorkRequirementDescription => &mut self.work_requirement_description,
            RequirementAccessToSecure => &mut self.requirement_access_to_secure,
            QualificationRequirement => &mut self.qualification_requirement,
            RequirementScreeningLevelOther => &mut self.requirement_screening_level_other,
            RequirementWorkLanguageOther => &mut self.requirement_work_language_other,
            RequirementWorkLocationGcSpecific => &mut self.requirement_work_location_gc_specific,
            RequirementWorkLocationOffsiteSpecific => {
                &mut self.requirement_work_location_offsite_specific
            }
            HasOtherRequirements => &mut self.has_other_requirements,
            RequirementOtherOther => &mut self.requirement_other_other,
            HasPersonnelRequirements => &mut self.has_personnel_requirements,
            IsTechnologicalChange => &mut self.is_technological_change,
            HasImpactOnYourDepartment => &mut self.has_impact_on_your_department,
            HasImmediateImpactOnOtherDepartments => {
                &mut self.has_immediate_impact_on_other_departments
            }
            HasFutureImpactOnOtherDepartments => &mut self.has_future_impact_on_other_departments,
            HasOperationsConsiderations => &mut self.has_operations_considerations,
            OperationsConsiderationsOther => &mut self.operations_considerations_other,
            ContractingRationalePrimary => &mut self.contracting_rationale_primary,
            ContractingRationalePrimaryOther => &mut self.contracting_rationale_primary_other,
            OcioConfirmedTalentShortage => &mut self.ocio_confirmed_talent_shortage,
            TalentSearchTrackingNumber => &mut self.talent_search_tracking_number,
            ContractingRationalesSecondaryOther => {
                &mut self.contracting_rationales_secondary_other
            }
            OngoingNeedForKnowledge => &mut self.ongoing_need_for_knowledge,
            KnowledgeTransferInContract => &mut self.knowledge_transfer_in_contract,
            EmployeesHaveAccessToKnowledge => &mut self.employees_have_access_to_knowledge,
            OcioEngagedForTraining => &mut self.ocio_engaged_for_training,
            other => bail!("field {:?} does not hold a scalar value", other),
        };
        Ok(slot)
    }

    /// Mutable access to a multi-selection field's slot.
    pub fn multi_slot(&mut self, field: FieldId) -> Result<&mut Vec<String>> {
        use FieldId::*;
        let slot = match field {
            AuthoritiesInvolved => &mut self.authorities_involved,
            RequirementScreeningLevels => &mut self.requirement_screening_levels,
            RequirementWorkLanguages => &mut self.requirement_work_languages,
            RequirementWorkLocations => &mut self.requirement_work_locations,
            RequirementOthers => &mut self.requirement_others,
            OperationsConsiderations => &mut self.operations_considerations,
            ContractingRationalesSecondary => &mut self.contracting_rationales_secondary,
            other => bail!("field {:?} does not hold a multi-selection", other),
        };
        Ok(slot)
    }

    /// Reset a field to its empty/default value.
    ///
    /// Clearing an already-empty field is a no-op, which is what makes the
    /// visibility sweep idempotent.
    pub fn clear(&mut self, field: FieldId) {
        match field.kind() {
            FieldKind::Bool => self.read_preamble = false,
            FieldKind::Text | FieldKind::Selection => {
                // kind() and scalar_slot() cover the same fields
                if let Ok(slot) = self.scalar_slot(field) {
                    *slot = None;
                }
            }
            FieldKind::Multi => {
                if let Ok(slot) = self.multi_slot(field) {
                    slot.clear();
                }
            }
            FieldKind::Collection => self.personnel_requirements.clear(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::options::FormEnum;
    use crate::questionnaire::enums::PersonnelLanguage;

    #[test]
    fn test_every_scalar_field_has_a_slot() {
        let mut answers = FormAnswers::default();
        let all = crate::questionnaire::rules::ALL_FIELDS;
        for field in all {
            match field.kind() {
                FieldKind::Text | FieldKind::Selection => {
                    assert!(
                        answers.scalar_slot(*field).is_ok(),
                        "missing scalar slot for {:?}",
                        field
                    );
                }
                FieldKind::Multi => {
                    assert!(
                        answers.multi_slot(*field).is_ok(),
                        "missing multi slot for {:?}",
                        field
                    );
                }
                FieldKind::Bool | FieldKind::Collection => {}
            }
        }
    }

    #[test]
    fn test_clear_resets_each_kind() {
        let mut answers = FormAnswers {
            read_preamble: true,
            contract_title: Some("Interchange platform".into()),
            authorities_involved: vec!["HR".into()],
            personnel_requirements: vec![PersonnelRequirementValues::default()],
            ..Default::default()
        };
        answers.clear(FieldId::ReadPreamble);
        answers.clear(FieldId::ContractTitle);
        answers.clear(FieldId::AuthoritiesInvolved);
        answers.clear(FieldId::PersonnelRequirements);
        assert_eq!(answers, FormAnswers::default());
    }

    #[test]
    fn test_set_language_clears_override_when_leaving_other_branch() {
        let mut entry = PersonnelRequirementValues::default();
        entry.set_language(PersonnelLanguage::Other.as_token());
        entry.language_other = Some("Inuktitut".into());
        entry.set_language(PersonnelLanguage::EnglishOnly.as_token());
        assert_eq!(entry.language.as_deref(), Some("ENGLISH_ONLY"));
        assert_eq!(entry.language_other, None);
    }

    #[test]
    fn test_add_skill_rejects_duplicate_ids() {
        let mut entry = PersonnelRequirementValues::default();
        entry.add_skill("skill-a", "BEGINNER");
        entry.add_skill("skill-a", "ADVANCED");
        assert_eq!(entry.skill_requirements.len(), 1);
        assert_eq!(entry.skill_requirements[0].level, "BEGINNER");
    }

    #[test]
    fn test_edit_and_remove_skill() {
        let mut entry = PersonnelRequirementValues::default();
        entry.add_skill("skill-a", "BEGINNER");
        entry.add_skill("skill-b", "INTERMEDIATE");
        entry.edit_skill(0, "LEAD").unwrap();
        assert_eq!(entry.skill_requirements[0].level, "LEAD");
        assert!(entry.edit_skill(5, "LEAD").is_err());
        entry.remove_skill("skill-a");
        assert_eq!(entry.skill_requirements.len(), 1);
        assert_eq!(entry.skill_requirements[0].skill_id, "skill-b");
    }
}
