//! Closed enumerations of the Digital Services Contracting Questionnaire.
//!
//! Tokens match the remote GraphQL schema exactly; labels are the prompt
//! text shown for each choice. Sort-order constants give the display order
//! used by the form, which is not always the declaration order.

use crate::forms::options::FormEnum;

/// Declares a questionnaire enumeration: the enum itself, serde renames to
/// the wire tokens, and its [`FormEnum`] implementation.
macro_rules! form_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $token:literal, $label:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(#[serde(rename = $token)] $variant,)+
        }

        impl FormEnum for $name {
            const NAME: &'static str = stringify!($name);

            fn members() -> &'static [Self] {
                &[$(Self::$variant,)+]
            }

            fn as_token(&self) -> &'static str {
                match self { $(Self::$variant => $token,)+ }
            }

            fn label(&self) -> &'static str {
                match self { $(Self::$variant => $label,)+ }
            }
        }
    };
}

form_enum! {
    YesNo {
        Yes => "YES", "Yes";
        No => "NO", "No";
    }
}

form_enum! {
    YesNoUnsure {
        Yes => "YES", "Yes";
        No => "NO", "No";
        IDontKnow => "I_DONT_KNOW", "I don't know";
    }
}

form_enum! {
    ContractAuthority {
        Hr => "HR", "HR";
        Procurement => "PROCUREMENT", "Procurement";
        Finance => "FINANCE", "Finance";
        LabourRelations => "LABOUR_RELATIONS", "Labour relations";
        Other => "OTHER", "Other";
    }
}

form_enum! {
    ContractValueRange {
        From0To10K => "FROM_0_TO_10K", "$0 to <$10,000";
        From10KTo25K => "FROM_10K_TO_25K", "$10,000 to <$25,000";
        From25KTo50K => "FROM_25K_TO_50K", "$25,000 to <$50,000";
        From50KTo1M => "FROM_50K_TO_1M", "$50,000 to <$1 million";
        From1MTo2500K => "FROM_1M_TO_2500K", "$1 million to <$2.5 million";
        From2500KTo5M => "FROM_2500K_TO_5M", "$2.5 million to <$5 million";
        From5MTo10M => "FROM_5M_TO_10M", "$5 million to <$10 million";
        From10MTo15M => "FROM_10M_TO_15M", "$10 million to <$15 million";
        From15MTo25M => "FROM_15M_TO_25M", "$15 million to <$25 million";
        GreaterThan25M => "GREATER_THAN_25M", ">$25 million";
    }
}

form_enum! {
    ContractFteRange {
        From1To5 => "FROM_1_TO_5", "1 to 5";
        From6To10 => "FROM_6_TO_10", "6 to 10";
        From11To30 => "FROM_11_TO_30", "11 to 30";
        From31To50 => "FROM_31_TO_50", "31 to 50";
        From51To100 => "FROM_51_TO_100", "51 to 100";
        GreaterThan100 => "GREATER_THAN_100", "More than 100";
    }
}

form_enum! {
    ContractStartTimeframe {
        From0To3M => "FROM_0_TO_3M", "0 to 3 months";
        From3MTo6M => "FROM_3M_TO_6M", "3 to 6 months";
        From6MTo1Y => "FROM_6M_TO_1Y", "6 to 12 months";
        From1YTo2Y => "FROM_1Y_TO_2Y", "1 to 2 years";
        Unknown => "UNKNOWN", "Unknown";
        Variable => "VARIABLE", "Variable";
    }
}

form_enum! {
    ContractCommodity {
        TelecomServices => "TELECOM_SERVICES", "Information processing and related telecom services";
        SupportServices => "SUPPORT_SERVICES", "Professional, administrative and management support services";
        Other => "OTHER", "Other";
    }
}

form_enum! {
    ContractInstrument {
        SupplyArrangement => "SUPPLY_ARRANGEMENT", "Supply arrangement";
        StandingOffer => "STANDING_OFFER", "Standing offer";
        Contract => "CONTRACT", "Contract";
        Amendment => "AMENDMENT", "Amendment";
        Other => "OTHER", "Other";
    }
}

form_enum! {
    ContractSupplyMethod {
        NotApplicable => "NOT_APPLICABLE", "Not applicable (N/A)";
        SolutionsBasedInformaticsProfessionalServices => "SOLUTIONS_BASED_INFORMATICS_PROFESSIONAL_SERVICES", "Solutions based informatics professional services (SBIPS)";
        TaskBasedInformaticsProfessionalServices => "TASK_BASED_INFORMATICS_PROFESSIONAL_SERVICES", "Task based informatics professional services (TBIPS)";
        TemporaryHelp => "TEMPORARY_HELP", "Temporary help services";
        Other => "OTHER", "Other";
    }
}

form_enum! {
    ContractSolicitationProcedure {
        AdvanceContractAwardNotice => "ADVANCE_CONTRACT_AWARD_NOTICE", "Advance contract award notice";
        Competitive => "COMPETITIVE", "Competitive (open bidding, traditional or electronic)";
        NonCompetitive => "NON_COMPETITIVE", "Non-competitive (sole source)";
    }
}

form_enum! {
    PersonnelScreeningLevel {
        Reliability => "RELIABILITY", "Reliability";
        EnhancedReliability => "ENHANCED_RELIABILITY", "Enhanced reliability";
        Secret => "SECRET", "Secret";
        TopSecret => "TOP_SECRET", "Top secret";
        Other => "OTHER", "Other";
    }
}

form_enum! {
    PersonnelLanguage {
        EnglishOnly => "ENGLISH_ONLY", "English only";
        FrenchOnly => "FRENCH_ONLY", "French only";
        BilingualIntermediate => "BILINGUAL_INTERMEDIATE", "Bilingual (Intermediate - BBB/BBB)";
        BilingualAdvanced => "BILINGUAL_ADVANCED", "Bilingual (Advanced - CBC/CBC)";
        Other => "OTHER", "Other";
    }
}

form_enum! {
    PersonnelWorkLocation {
        GcPremises => "GC_PREMISES", "GC premises";
        OffsiteSpecific => "OFFSITE_SPECIFIC", "Offsite, specific location";
        OffsiteAny => "OFFSITE_ANY", "Offsite, any location";
    }
}

form_enum! {
    PersonnelOtherRequirement {
        ShiftWork => "SHIFT_WORK", "Shift work";
        OnCall247 => "ON_CALL_24_7", "On-call 24/7";
        OvertimeShortNotice => "OVERTIME_SHORT_NOTICE", "Overtime on short notice";
        AsNeeded => "AS_NEEDED", "As and when needed";
        Other => "OTHER", "Other";
    }
}

form_enum! {
    PersonnelTeleworkOption {
        FullTime => "FULL_TIME", "Yes, full-time";
        PartTime => "PART_TIME", "Yes, part-time";
        No => "NO", "No";
    }
}

form_enum! {
    SkillLevel {
        Beginner => "BEGINNER", "Beginner";
        Intermediate => "INTERMEDIATE", "Intermediate";
        Advanced => "ADVANCED", "Advanced";
        Lead => "LEAD", "Lead";
    }
}

form_enum! {
    OperationsConsideration {
        FinanceVehicleNotUsable => "FINANCE_VEHICLE_NOT_USABLE", "An existing financial vehicle cannot be used for this work";
        FundingSecuredCostRecoveryBasis => "FUNDING_SECURED_COST_RECOVERY_BASIS", "The funding has been secured on a cost-recovery basis";
        UnableCreateNewIndeterminate => "UNABLE_CREATE_NEW_INDETERMINATE", "Unable to create new indeterminate positions";
        UnableCreateNewTerm => "UNABLE_CREATE_NEW_TERM", "Unable to create new term positions";
        UnableCreateClassificationRestriction => "UNABLE_CREATE_CLASSIFICATION_RESTRICTION", "Unable to create new positions due to classification restrictions";
        StaffingFreeze => "STAFFING_FREEZE", "Staffing freeze in place";
        Other => "OTHER", "Other";
    }
}

form_enum! {
    ContractingRationale {
        ShortageOfTalent => "SHORTAGE_OF_TALENT", "Shortage of available or qualified talent";
        TimingRequirements => "TIMING_REQUIREMENTS", "Timing requirements";
        HrSituation => "HR_SITUATION", "HR situation - available staffing solutions not viable";
        FinancialSituation => "FINANCIAL_SITUATION", "Financial situation - restriction on funding use";
        RequiresIndependent => "REQUIRES_INDEPENDENT", "The work requires an independent third party";
        IntellectualPropertyFactors => "INTELLECTUAL_PROPERTY_FACTORS", "Intellectual property factors";
        Other => "OTHER", "Other";
    }
}

pub const YES_NO_SORT_ORDER: &[YesNo] = &[YesNo::Yes, YesNo::No];

pub const YES_NO_UNSURE_SORT_ORDER: &[YesNoUnsure] = &[
    YesNoUnsure::Yes,
    YesNoUnsure::No,
    YesNoUnsure::IDontKnow,
];

pub const CONTRACT_AUTHORITY_SORT_ORDER: &[ContractAuthority] = &[
    ContractAuthority::Hr,
    ContractAuthority::Procurement,
    ContractAuthority::Finance,
    ContractAuthority::LabourRelations,
    ContractAuthority::Other,
];

pub const PERSONNEL_SCREENING_LEVEL_SORT_ORDER: &[PersonnelScreeningLevel] = &[
    PersonnelScreeningLevel::Reliability,
    PersonnelScreeningLevel::EnhancedReliability,
    PersonnelScreeningLevel::Secret,
    PersonnelScreeningLevel::TopSecret,
    PersonnelScreeningLevel::Other,
];

pub const PERSONNEL_LANGUAGE_SORT_ORDER: &[PersonnelLanguage] = &[
    PersonnelLanguage::EnglishOnly,
    PersonnelLanguage::FrenchOnly,
    PersonnelLanguage::BilingualIntermediate,
    PersonnelLanguage::BilingualAdvanced,
    PersonnelLanguage::Other,
];

pub const PERSONNEL_WORK_LOCATION_SORT_ORDER: &[PersonnelWorkLocation] = &[
    PersonnelWorkLocation::GcPremises,
    PersonnelWorkLocation::OffsiteSpecific,
    PersonnelWorkLocation::OffsiteAny,
];

pub const PERSONNEL_OTHER_REQUIREMENT_SORT_ORDER: &[PersonnelOtherRequirement] = &[
    PersonnelOtherRequirement::ShiftWork,
    PersonnelOtherRequirement::OnCall247,
    PersonnelOtherRequirement::OvertimeShortNotice,
    PersonnelOtherRequirement::AsNeeded,
    PersonnelOtherRequirement::Other,
];

pub const PERSONNEL_TELEWORK_OPTION_SORT_ORDER: &[PersonnelTeleworkOption] = &[
    PersonnelTeleworkOption::FullTime,
    PersonnelTeleworkOption::PartTime,
    PersonnelTeleworkOption::No,
];

pub const OPERATIONS_CONSIDERATION_SORT_ORDER: &[OperationsConsideration] = &[
    OperationsConsideration::FinanceVehicleNotUsable,
    OperationsConsideration::FundingSecuredCostRecoveryBasis,
    OperationsConsideration::UnableCreateNewIndeterminate,
    OperationsConsideration::UnableCreateNewTerm,
    OperationsConsideration::UnableCreateClassificationRestriction,
    OperationsConsideration::StaffingFreeze,
    OperationsConsideration::Other,
];

pub const CONTRACTING_RATIONALE_SORT_ORDER: &[ContractingRationale] = &[
    ContractingRationale::ShortageOfTalent,
    ContractingRationale::TimingRequirements,
    ContractingRationale::HrSituation,
    ContractingRationale::FinancialSituation,
    ContractingRationale::RequiresIndependent,
    ContractingRationale::IntellectualPropertyFactors,
    ContractingRationale::Other,
];
