//! Interactive questionnaire wizard.
//!
//! Walks the form section by section, asking only the questions that are
//! currently visible. Answers go through the store, so collapsing a branch
//! mid-session discards its dependent answers exactly as the web form does.

use anyhow::Result;
use colored::Colorize;
use log::info;

use crate::api::models::{Department, Skill};
use crate::api::{GraphqlClient, QuestionnaireGateway};
use crate::config::Config;
use crate::forms::options::FormEnum;
use crate::forms::store::FormStore;
use crate::questionnaire::enums::{
    self, ContractAuthority, ContractCommodity, ContractFteRange, ContractInstrument,
    ContractSolicitationProcedure, ContractStartTimeframe, ContractSupplyMethod,
    ContractValueRange, ContractingRationale, OperationsConsideration, PersonnelLanguage,
    PersonnelOtherRequirement, PersonnelScreeningLevel, PersonnelTeleworkOption,
    PersonnelWorkLocation, SkillLevel, YesNo, YesNoUnsure,
};
use crate::questionnaire::labels::personnel;
use crate::questionnaire::mapping::map_form_to_payload;
use crate::questionnaire::model::{FieldId, FormAnswers};
use crate::questionnaire::rules::questionnaire_rules;
use crate::ui::prompts;

pub async fn fill_command(dry_run: bool) -> Result<()> {
    info!("Starting interactive questionnaire");

    let config = Config::load()?;
    let client = GraphqlClient::new(&config)?;
    let departments = client.departments().await?;
    let skills = client.skills().await?;

    let answers = run_wizard(&departments, &skills)?;
    let payload = map_form_to_payload(&answers)?;

    if dry_run {
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let id = client.submit(&payload).await?;
    println!(
        "{} questionnaire {}",
        "Submitted".green().bold(),
        id.cyan()
    );
    Ok(())
}

fn run_wizard(departments: &[Department], skills: &[Skill]) -> Result<FormAnswers> {
    let mut store = FormStore::new(questionnaire_rules());

    println!("{}", "Preamble".bold());
    let read = prompts::prompt_confirmation(FieldId::ReadPreamble.label(), false)?;
    store.set_bool(FieldId::ReadPreamble, read)?;

    general_information(&mut store, departments)?;
    scope_of_contract(&mut store)?;
    requirements(&mut store, skills)?;
    technological_change(&mut store)?;
    operations_considerations(&mut store)?;
    talent_sourcing(&mut store)?;

    Ok(store.into_answers())
}

fn general_information(store: &mut FormStore, departments: &[Department]) -> Result<()> {
    println!("{}", "General information".bold());

    let department =
        prompts::select_department(FieldId::Department.label(), departments)?;
    store.set_selection(FieldId::Department, department)?;
    ask_text(store, FieldId::DepartmentOther)?;
    ask_text(store, FieldId::BranchOther)?;
    ask_text(store, FieldId::BusinessOwnerName)?;
    ask_text(store, FieldId::BusinessOwnerJobTitle)?;
    ask_text(store, FieldId::BusinessOwnerEmail)?;
    ask_text(store, FieldId::FinancialAuthorityName)?;
    ask_text(store, FieldId::FinancialAuthorityJobTitle)?;
    ask_text(store, FieldId::FinancialAuthorityEmail)?;

    ask_select::<YesNo>(store, FieldId::IsAuthorityInvolved, Some(enums::YES_NO_SORT_ORDER))?;
    ask_multi::<ContractAuthority>(
        store,
        FieldId::AuthoritiesInvolved,
        Some(enums::CONTRACT_AUTHORITY_SORT_ORDER),
    )?;
    ask_text(store, FieldId::AuthorityInvolvedOther)?;

    ask_select::<YesNoUnsure>(
        store,
        FieldId::ContractBehalfOfGc,
        Some(enums::YES_NO_UNSURE_SORT_ORDER),
    )?;
    ask_select::<YesNoUnsure>(
        store,
        FieldId::ContractServiceOfGc,
        Some(enums::YES_NO_UNSURE_SORT_ORDER),
    )?;
    ask_select::<YesNoUnsure>(
        store,
        FieldId::ContractForDigitalInitiative,
        Some(enums::YES_NO_UNSURE_SORT_ORDER),
    )?;
    ask_text(store, FieldId::DigitalInitiativeName)?;
    ask_select::<YesNoUnsure>(
        store,
        FieldId::DigitalInitiativePlanSubmitted,
        Some(enums::YES_NO_UNSURE_SORT_ORDER),
    )?;
    ask_select::<YesNoUnsure>(
        store,
        FieldId::DigitalInitiativePlanUpdated,
        Some(enums::YES_NO_UNSURE_SORT_ORDER),
    )?;
    ask_select::<YesNoUnsure>(
        store,
        FieldId::DigitalInitiativePlanComplemented,
        Some(enums::YES_NO_UNSURE_SORT_ORDER),
    )?;
    Ok(())
}

fn scope_of_contract(store: &mut FormStore) -> Result<()> {
    println!("{}", "Scope of contract".bold());

    ask_text(store, FieldId::ContractTitle)?;
    ask_text(store, FieldId::ContractStartDate)?;
    ask_text(store, FieldId::ContractEndDate)?;
    ask_select::<YesNo>(store, FieldId::ContractExtendable, Some(enums::YES_NO_SORT_ORDER))?;
    ask_select::<YesNo>(store, FieldId::ContractAmendable, Some(enums::YES_NO_SORT_ORDER))?;
    ask_select::<YesNo>(store, FieldId::ContractMultiyear, Some(enums::YES_NO_SORT_ORDER))?;
    ask_select::<ContractValueRange>(store, FieldId::ContractValue, None)?;
    ask_select::<ContractFteRange>(store, FieldId::ContractFtes, None)?;
    ask_select::<ContractStartTimeframe>(store, FieldId::ContractResourcesStartTimeframe, None)?;
    ask_select::<ContractCommodity>(store, FieldId::CommodityType, None)?;
    ask_text(store, FieldId::CommodityTypeOther)?;
    ask_select::<ContractInstrument>(store, FieldId::InstrumentType, None)?;
    ask_text(store, FieldId::InstrumentTypeOther)?;
    ask_select::<ContractSupplyMethod>(store, FieldId::MethodOfSupply, None)?;
    ask_text(store, FieldId::MethodOfSupplyOther)?;
    ask_select::<ContractSolicitationProcedure>(store, FieldId::SolicitationProcedure, None)?;
    ask_select::<YesNoUnsure>(
        store,
        FieldId::SubjectToTradeAgreement,
        Some(enums::YES_NO_UNSURE_SORT_ORDER),
    )?;
    Ok(())
}

fn requirements(store: &mut FormStore, skills: &[Skill]) -> Result<()> {
    println!("{}", "Requirements".bold());

    ask_text(store, FieldId::WorkRequirementDescription)?;
    ask_select::<YesNo>(
        store,
        FieldId::RequirementAccessToSecure,
        Some(enums::YES_NO_SORT_ORDER),
    )?;
    ask_select::<YesNo>(
        store,
        FieldId::HasPersonnelRequirements,
        Some(enums::YES_NO_SORT_ORDER),
    )?;

    // Generic branch
    ask_text(store, FieldId::QualificationRequirement)?;
    ask_multi::<PersonnelScreeningLevel>(
        store,
        FieldId::RequirementScreeningLevels,
        Some(enums::PERSONNEL_SCREENING_LEVEL_SORT_ORDER),
    )?;
    ask_text(store, FieldId::RequirementScreeningLevelOther)?;
    ask_multi::<PersonnelLanguage>(
        store,
        FieldId::RequirementWorkLanguages,
        Some(enums::PERSONNEL_LANGUAGE_SORT_ORDER),
    )?;
    ask_text(store, FieldId::RequirementWorkLanguageOther)?;
    ask_multi::<PersonnelWorkLocation>(
        store,
        FieldId::RequirementWorkLocations,
        Some(enums::PERSONNEL_WORK_LOCATION_SORT_ORDER),
    )?;
    ask_text(store, FieldId::RequirementWorkLocationGcSpecific)?;
    ask_text(store, FieldId::RequirementWorkLocationOffsiteSpecific)?;
    ask_select::<YesNo>(store, FieldId::HasOtherRequirements, Some(enums::YES_NO_SORT_ORDER))?;
    ask_multi::<PersonnelOtherRequirement>(
        store,
        FieldId::RequirementOthers,
        Some(enums::PERSONNEL_OTHER_REQUIREMENT_SORT_ORDER),
    )?;
    ask_text(store, FieldId::RequirementOtherOther)?;

    // Per-resource branch
    if store.is_visible(FieldId::PersonnelRequirements) {
        while prompts::prompt_confirmation("Add a personnel requirement?", true)? {
            add_personnel_requirement(store, skills)?;
        }
    }
    Ok(())
}

fn add_personnel_requirement(store: &mut FormStore, skills: &[Skill]) -> Result<()> {
    let resource_type = prompts::text_input(personnel::RESOURCE_TYPE)?;
    let language = prompts::select_enum::<PersonnelLanguage>(
        personnel::LANGUAGE,
        Some(enums::PERSONNEL_LANGUAGE_SORT_ORDER),
    )?;
    let language_other = if language == PersonnelLanguage::Other.as_token() {
        Some(prompts::text_input(personnel::LANGUAGE_OTHER)?)
    } else {
        None
    };
    let security = prompts::select_enum::<PersonnelScreeningLevel>(
        personnel::SECURITY,
        Some(enums::PERSONNEL_SCREENING_LEVEL_SORT_ORDER),
    )?;
    let security_other = if security == PersonnelScreeningLevel::Other.as_token() {
        Some(prompts::text_input(personnel::SECURITY_OTHER)?)
    } else {
        None
    };
    let telework = prompts::select_enum::<PersonnelTeleworkOption>(
        personnel::TELEWORK,
        Some(enums::PERSONNEL_TELEWORK_OPTION_SORT_ORDER),
    )?;
    let quantity = prompts::text_input(personnel::QUANTITY)?;

    let mut picked_skills = Vec::new();
    while !skills.is_empty() && prompts::prompt_confirmation("Add a skill requirement?", true)? {
        let skill_id = prompts::select_skill("Skill", skills)?;
        let level = prompts::select_enum::<SkillLevel>("Required level", None)?;
        picked_skills.push((skill_id, level));
    }

    store.append_personnel_requirement();
    let index = store.answers().personnel_requirements.len() - 1;
    store.update_personnel_requirement(index, |entry| {
        entry.resource_type = resource_type;
        entry.set_language(language);
        entry.language_other = language_other;
        entry.set_security(security);
        entry.security_other = security_other;
        entry.telework = Some(telework);
        entry.quantity = quantity;
        for (skill_id, level) in picked_skills {
            entry.add_skill(skill_id, level);
        }
    })
}

fn technological_change(store: &mut FormStore) -> Result<()> {
    println!("{}", "Technological change".bold());

    ask_select::<YesNo>(
        store,
        FieldId::IsTechnologicalChange,
        Some(enums::YES_NO_SORT_ORDER),
    )?;
    ask_select::<YesNo>(
        store,
        FieldId::HasImpactOnYourDepartment,
        Some(enums::YES_NO_SORT_ORDER),
    )?;
    ask_select::<YesNo>(
        store,
        FieldId::HasImmediateImpactOnOtherDepartments,
        Some(enums::YES_NO_SORT_ORDER),
    )?;
    ask_select::<YesNo>(
        store,
        FieldId::HasFutureImpactOnOtherDepartments,
        Some(enums::YES_NO_SORT_ORDER),
    )?;
    Ok(())
}

fn operations_considerations(store: &mut FormStore) -> Result<()> {
    println!("{}", "Operations considerations".bold());

    ask_select::<YesNo>(
        store,
        FieldId::HasOperationsConsiderations,
        Some(enums::YES_NO_SORT_ORDER),
    )?;
    ask_multi::<OperationsConsideration>(
        store,
        FieldId::OperationsConsiderations,
        Some(enums::OPERATIONS_CONSIDERATION_SORT_ORDER),
    )?;
    ask_text(store, FieldId::OperationsConsiderationsOther)?;
    Ok(())
}

fn talent_sourcing(store: &mut FormStore) -> Result<()> {
    println!("{}", "Talent sourcing decision".bold());

    ask_select::<ContractingRationale>(
        store,
        FieldId::ContractingRationalePrimary,
        Some(enums::CONTRACTING_RATIONALE_SORT_ORDER),
    )?;
    ask_text(store, FieldId::ContractingRationalePrimaryOther)?;
    ask_select::<YesNo>(
        store,
        FieldId::OcioConfirmedTalentShortage,
        Some(enums::YES_NO_SORT_ORDER),
    )?;
    ask_text(store, FieldId::TalentSearchTrackingNumber)?;
    ask_multi::<ContractingRationale>(
        store,
        FieldId::ContractingRationalesSecondary,
        Some(enums::CONTRACTING_RATIONALE_SORT_ORDER),
    )?;
    ask_text(store, FieldId::ContractingRationalesSecondaryOther)?;
    ask_select::<YesNo>(
        store,
        FieldId::OngoingNeedForKnowledge,
        Some(enums::YES_NO_SORT_ORDER),
    )?;
    ask_select::<YesNo>(
        store,
        FieldId::KnowledgeTransferInContract,
        Some(enums::YES_NO_SORT_ORDER),
    )?;
    ask_select::<YesNo>(
        store,
        FieldId::EmployeesHaveAccessToKnowledge,
        Some(enums::YES_NO_SORT_ORDER),
    )?;
    ask_select::<YesNo>(
        store,
        FieldId::OcioEngagedForTraining,
        Some(enums::YES_NO_SORT_ORDER),
    )?;
    Ok(())
}

fn ask_text(store: &mut FormStore, field: FieldId) -> Result<()> {
    if !store.is_visible(field) {
        return Ok(());
    }
    let value = prompts::text_input(field.label())?;
    if !value.trim().is_empty() {
        store.set_text(field, value)?;
    }
    Ok(())
}

fn ask_select<E: FormEnum>(
    store: &mut FormStore,
    field: FieldId,
    sort_order: Option<&[E]>,
) -> Result<()> {
    if !store.is_visible(field) {
        return Ok(());
    }
    let token = prompts::select_enum::<E>(field.label(), sort_order)?;
    store.set_selection(field, token)
}

fn ask_multi<E: FormEnum>(
    store: &mut FormStore,
    field: FieldId,
    sort_order: Option<&[E]>,
) -> Result<()> {
    if !store.is_visible(field) {
        return Ok(());
    }
    let tokens = prompts::checklist_enum::<E>(field.label(), sort_order)?;
    store.set_multi(field, tokens)
}
