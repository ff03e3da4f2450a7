//! Static prompt text for every questionnaire field.

use crate::questionnaire::model::FieldId;

impl FieldId {
    /// The prompt shown when asking for this field.
    pub fn label(self) -> &'static str {
        use FieldId::*;
        match self {
            ReadPreamble => "I have read the preamble.",

            Department => "Select your department or agency",
            DepartmentOther => "Please specify your department or agency",
            BranchOther => "Branch",
            BusinessOwnerName => "Business owner name",
            BusinessOwnerJobTitle => "Business owner job title",
            BusinessOwnerEmail => "Business owner email",
            FinancialAuthorityName => "Delegated financial authority name",
            FinancialAuthorityJobTitle => "Delegated financial authority job title",
            FinancialAuthorityEmail => "Delegated financial authority email",
            IsAuthorityInvolved => {
                "Are there any other authorities involved or engaged on this contract?"
            }
            AuthoritiesInvolved => "Other authorities involved / engaged on this contract",
            AuthorityInvolvedOther => "Please specify the authority",
            ContractBehalfOfGc => {
                "Is this contract being put in place on behalf of another Government of Canada department or agency?"
            }
            ContractServiceOfGc => {
                "Is this contract being put in place for the purpose of service provision to another Government of Canada department or agency?"
            }
            ContractForDigitalInitiative => {
                "Is this contract related to a specific digital initiative?"
            }
            DigitalInitiativeName => "Name of the digital initiative",
            DigitalInitiativePlanSubmitted => {
                "Has a digital initiative forward talent plan been submitted previously for the initiative?"
            }
            DigitalInitiativePlanUpdated => {
                "Has the plan been updated when the contract is initiated?"
            }
            DigitalInitiativePlanComplemented => {
                "Does this procurement complement other talent sourcing activities (e.g. staffing, training) for this initiative?"
            }

            ContractTitle => "Contract title",
            ContractStartDate => "Expected start date of the contract",
            ContractEndDate => "Expected end date of the contract",
            ContractExtendable => "Is the option to extend the contract currently scoped in?",
            ContractAmendable => "Is the option to amend the contract currently scoped in?",
            ContractMultiyear => "Is this a multi-year contract?",
            ContractValue => "Select the total contract value of this contract",
            ContractFtes => {
                "In terms of full-time-equivalents (FTEs), the estimated total number of resources expected from the contract, or required to produce contract deliverables"
            }
            ContractResourcesStartTimeframe => "Contract resources expected to start work in",
            CommodityType => "Commodity type",
            CommodityTypeOther => "Please specify the commodity",
            InstrumentType => "Instrument type",
            InstrumentTypeOther => "Please specify the instrument",
            MethodOfSupply => "Method of supply",
            MethodOfSupplyOther => "Please specify the method",
            SolicitationProcedure => "Solicitation procedure",
            SubjectToTradeAgreement => {
                "Select whether this contract is subject to any trade agreements"
            }

            WorkRequirementDescription => {
                "List the tasks that the contractor is expected to perform within the contract."
            }
            RequirementAccessToSecure => {
                "Will the supplier and its employees require access to protected and/or classified information or assets?"
            }
            QualificationRequirement => "Qualification requirement",
            RequirementScreeningLevels => {
                "Select the personnel security screening level required for the contractor"
            }
            RequirementScreeningLevelOther => "Please specify the screening level",
            RequirementWorkLanguages => {
                "Select the language which the work will be performed and delivered in."
            }
            RequirementWorkLanguageOther => "Please specify the language of work",
            RequirementWorkLocations => {
                "Select the geographic location where the work is to be performed."
            }
            RequirementWorkLocationGcSpecific => "Please specify GC premises",
            RequirementWorkLocationOffsiteSpecific => "Please specify offsite locations",
            HasOtherRequirements => {
                "Are there other requirements (e.g., shift work, on-call 24/7, as and when needed, overtime, etc.) for this contract?"
            }
            RequirementOthers => "Select all the other requirements that apply.",
            RequirementOtherOther => "Please specify the other requirement",

            HasPersonnelRequirements => {
                "Does the contract have specific personnel requirements?"
            }
            PersonnelRequirements => "Personnel requirements",

            IsTechnologicalChange => {
                "Select \"yes\" if any of the listed technological change factors apply."
            }
            HasImpactOnYourDepartment => {
                "Do you expect this contract to have immediate impacts on your department in terms of staffing level or skill sets required?"
            }
            HasImmediateImpactOnOtherDepartments => {
                "Do you expect any potential immediate carry-forward / ripple effect on other departments in terms of staffing levels or skill sets required?"
            }
            HasFutureImpactOnOtherDepartments => {
                "Do you expect any potential long-term carry-forward / ripple effect on other departments in terms of staffing levels or skill sets required?"
            }

            HasOperationsConsiderations => {
                "Do any of the listed operational factors influence the decision to contract?"
            }
            OperationsConsiderations => {
                "Select all the factors that have influenced the decision to contract."
            }
            OperationsConsiderationsOther => "Please specify the factor",

            ContractingRationalePrimary => "Select the primary rationale",
            ContractingRationalePrimaryOther => "Please specify the other primary rationale",
            OcioConfirmedTalentShortage => {
                "Has OCIO confirmed that there is no available pre-qualified talent in an OCIO-coordinated talent pool that could meet the need in the timeframe provided?"
            }
            TalentSearchTrackingNumber => "GC Digital Talent search request tracking number",
            ContractingRationalesSecondary => "Identify any secondary rationales",
            ContractingRationalesSecondaryOther => {
                "Please specify the other secondary rationale"
            }
            OngoingNeedForKnowledge => {
                "Will there be an ongoing need for the knowledge or skill sets in the work unit for which the contractor is being engaged?"
            }
            KnowledgeTransferInContract => {
                "Has knowledge transfer from the contractor to the government work unit been built into the contract?"
            }
            EmployeesHaveAccessToKnowledge => {
                "Will employees have access to training and development for the knowledge or skill sets required in the contract?"
            }
            OcioEngagedForTraining => {
                "Has OCIO been engaged on connecting employees to training and development opportunities related to the requirements in this contract, if appropriate?"
            }
        }
    }
}

/// Labels for the fields of one personnel-requirement entry.
pub mod personnel {
    pub const RESOURCE_TYPE: &str = "Type of personnel";
    pub const LANGUAGE: &str = "Official language requirement";
    pub const LANGUAGE_OTHER: &str = "Please specify the language requirement";
    pub const SECURITY: &str = "Security level";
    pub const SECURITY_OTHER: &str = "Please specify the security level";
    pub const TELEWORK: &str = "Telework allowed";
    pub const QUANTITY: &str = "Quantity";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_nonempty() {
        for field in crate::questionnaire::rules::ALL_FIELDS {
            assert!(!field.label().is_empty(), "empty label for {:?}", field);
        }
    }
}
