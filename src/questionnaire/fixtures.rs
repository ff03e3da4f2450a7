//! Seeded demo data for exercising the full form pipeline offline.

use chrono::{Duration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use crate::api::models::{Department, Skill};
use crate::forms::options::FormEnum;
use crate::forms::store::FormStore;
use crate::questionnaire::enums::{
    ContractAuthority, ContractCommodity, ContractFteRange, ContractInstrument,
    ContractSolicitationProcedure, ContractStartTimeframe, ContractSupplyMethod,
    ContractValueRange, ContractingRationale, OperationsConsideration, PersonnelLanguage,
    PersonnelScreeningLevel, PersonnelTeleworkOption, SkillLevel, YesNo, YesNoUnsure,
};
use crate::questionnaire::model::{FieldId, FormAnswers};
use crate::questionnaire::rules::questionnaire_rules;

const RESOURCE_TYPES: &[&str] = &[
    "Application developer",
    "Solution architect",
    "Business analyst",
    "DevOps engineer",
    "Product manager",
];

/// A plausible department list, as the page-data query would return it.
pub fn demo_departments() -> Vec<Department> {
    [
        "Treasury Board Secretariat",
        "Employment and Social Development Canada",
        "Shared Services Canada",
        "Canada Revenue Agency",
    ]
    .iter()
    .map(|name| Department {
        id: Uuid::new_v4().to_string(),
        name: (*name).to_string(),
    })
    .collect()
}

/// A plausible skill list, as the page-data query would return it.
pub fn demo_skills() -> Vec<Skill> {
    [
        "Application development",
        "Cloud architecture",
        "Data analysis",
        "Cyber security",
        "User experience design",
    ]
    .iter()
    .map(|name| Skill {
        id: Uuid::new_v4().to_string(),
        name: (*name).to_string(),
    })
    .collect()
}

fn pick_token<E: FormEnum>(rng: &mut StdRng) -> String {
    let member = E::members()
        .choose(rng)
        .copied()
        .unwrap_or(E::members()[0]);
    member.as_token().to_string()
}

fn yes_no(rng: &mut StdRng) -> String {
    pick_token::<YesNo>(rng)
}

/// Generate a filled-in form the way a real user would: answers flow
/// through the store so the visibility sweep keeps the record coherent.
/// The same seed always produces the same record.
pub fn demo_answers(seed: u64, departments: &[Department], skills: &[Skill]) -> FormAnswers {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut store = FormStore::new(questionnaire_rules());

    let start = Utc::now() + Duration::days(rng.gen_range(30..120));
    let end = start + Duration::days(rng.gen_range(180..720));

    // The setters return Err only on a field-kind mismatch, which a fixed
    // script cannot produce, so the results are discarded.
    let _ = store.set_bool(FieldId::ReadPreamble, true);
    if let Some(department) = departments.choose(&mut rng) {
        let _ = store.set_selection(FieldId::Department, &department.id);
    }
    let _ = store.set_text(FieldId::BranchOther, "Digital Transformation Office");
    let _ = store.set_text(FieldId::BusinessOwnerName, "Jordan Tremblay");
    let _ = store.set_text(FieldId::BusinessOwnerJobTitle, "Director, Digital Services");
    let _ = store.set_text(FieldId::BusinessOwnerEmail, "jordan.tremblay@example.gc.ca");
    let _ = store.set_text(FieldId::FinancialAuthorityName, "Alex Fortin");
    let _ = store.set_text(FieldId::FinancialAuthorityJobTitle, "Chief Financial Officer");
    let _ = store.set_text(FieldId::FinancialAuthorityEmail, "alex.fortin@example.gc.ca");

    let _ = store.set_selection(FieldId::IsAuthorityInvolved, YesNo::Yes.as_token());
    let _ = store.set_multi(
        FieldId::AuthoritiesInvolved,
        vec![
            ContractAuthority::Procurement.as_token().to_string(),
            ContractAuthority::Finance.as_token().to_string(),
        ],
    );

    let _ = store.set_selection(
        FieldId::ContractBehalfOfGc,
        pick_token::<YesNoUnsure>(&mut rng),
    );
    let _ = store.set_selection(
        FieldId::ContractServiceOfGc,
        pick_token::<YesNoUnsure>(&mut rng),
    );
    let _ = store.set_selection(
        FieldId::ContractForDigitalInitiative,
        YesNoUnsure::Yes.as_token(),
    );
    let _ = store.set_text(FieldId::DigitalInitiativeName, "Benefits delivery modernization");
    let _ = store.set_selection(
        FieldId::DigitalInitiativePlanSubmitted,
        YesNoUnsure::Yes.as_token(),
    );
    let _ = store.set_selection(
        FieldId::DigitalInitiativePlanUpdated,
        pick_token::<YesNoUnsure>(&mut rng),
    );
    let _ = store.set_selection(
        FieldId::DigitalInitiativePlanComplemented,
        pick_token::<YesNoUnsure>(&mut rng),
    );

    let _ = store.set_text(FieldId::ContractTitle, "Digital platform service contract");
    let _ = store.set_text(
        FieldId::ContractStartDate,
        start.format("%Y-%m-%d").to_string(),
    );
    let _ = store.set_text(FieldId::ContractEndDate, end.format("%Y-%m-%d").to_string());
    let _ = store.set_selection(FieldId::ContractExtendable, yes_no(&mut rng));
    let _ = store.set_selection(FieldId::ContractAmendable, yes_no(&mut rng));
    let _ = store.set_selection(FieldId::ContractMultiyear, yes_no(&mut rng));
    let _ = store.set_selection(
        FieldId::ContractValue,
        pick_token::<ContractValueRange>(&mut rng),
    );
    let _ = store.set_selection(
        FieldId::ContractFtes,
        pick_token::<ContractFteRange>(&mut rng),
    );
    let _ = store.set_selection(
        FieldId::ContractResourcesStartTimeframe,
        pick_token::<ContractStartTimeframe>(&mut rng),
    );
    let _ = store.set_selection(
        FieldId::CommodityType,
        ContractCommodity::SupportServices.as_token(),
    );
    let _ = store.set_selection(
        FieldId::InstrumentType,
        pick_token::<ContractInstrument>(&mut rng),
    );
    let _ = store.set_selection(
        FieldId::MethodOfSupply,
        pick_token::<ContractSupplyMethod>(&mut rng),
    );
    let _ = store.set_selection(
        FieldId::SolicitationProcedure,
        pick_token::<ContractSolicitationProcedure>(&mut rng),
    );
    let _ = store.set_selection(
        FieldId::SubjectToTradeAgreement,
        pick_token::<YesNoUnsure>(&mut rng),
    );

    let _ = store.set_text(
        FieldId::WorkRequirementDescription,
        "Design, build and operate a citizen-facing digital service.",
    );
    let _ = store.set_selection(FieldId::RequirementAccessToSecure, yes_no(&mut rng));

    // Always exercise the per-resource branch so the nested relation shows
    // up in demo payloads.
    let _ = store.set_selection(FieldId::HasPersonnelRequirements, YesNo::Yes.as_token());
    for _ in 0..rng.gen_range(1..=3) {
        store.append_personnel_requirement();
        let index = store.answers().personnel_requirements.len() - 1;
        let resource_type = RESOURCE_TYPES
            .choose(&mut rng)
            .copied()
            .unwrap_or(RESOURCE_TYPES[0])
            .to_string();
        let language = pick_token::<PersonnelLanguage>(&mut rng);
        let security = pick_token::<PersonnelScreeningLevel>(&mut rng);
        let telework = pick_token::<PersonnelTeleworkOption>(&mut rng);
        let quantity = rng.gen_range(1..=6).to_string();
        let picked_skills: Vec<(String, String)> = skills
            .choose_multiple(&mut rng, 2)
            .map(|s| (s.id.clone(), pick_token::<SkillLevel>(&mut rng)))
            .collect();
        let _ = store.update_personnel_requirement(index, |entry| {
            entry.resource_type = resource_type;
            entry.set_language(language);
            entry.set_security(security);
            entry.telework = Some(telework);
            entry.quantity = quantity;
            for (skill_id, level) in picked_skills {
                entry.add_skill(skill_id, level);
            }
        });
    }

    let _ = store.set_selection(FieldId::IsTechnologicalChange, YesNo::Yes.as_token());
    let _ = store.set_selection(FieldId::HasImpactOnYourDepartment, yes_no(&mut rng));
    let _ = store.set_selection(
        FieldId::HasImmediateImpactOnOtherDepartments,
        yes_no(&mut rng),
    );
    let _ = store.set_selection(FieldId::HasFutureImpactOnOtherDepartments, yes_no(&mut rng));

    let _ = store.set_selection(FieldId::HasOperationsConsiderations, YesNo::Yes.as_token());
    let _ = store.set_multi(
        FieldId::OperationsConsiderations,
        vec![OperationsConsideration::StaffingFreeze.as_token().to_string()],
    );

    let _ = store.set_selection(
        FieldId::ContractingRationalePrimary,
        ContractingRationale::ShortageOfTalent.as_token(),
    );
    let _ = store.set_selection(FieldId::OcioConfirmedTalentShortage, yes_no(&mut rng));
    let _ = store.set_text(
        FieldId::TalentSearchTrackingNumber,
        format!("TS-{}", rng.gen_range(10_000..100_000)),
    );
    let _ = store.set_multi(
        FieldId::ContractingRationalesSecondary,
        vec![ContractingRationale::TimingRequirements.as_token().to_string()],
    );
    let _ = store.set_selection(FieldId::OngoingNeedForKnowledge, YesNo::Yes.as_token());
    let _ = store.set_selection(FieldId::KnowledgeTransferInContract, yes_no(&mut rng));
    let _ = store.set_selection(FieldId::EmployeesHaveAccessToKnowledge, yes_no(&mut rng));
    let _ = store.set_selection(FieldId::OcioEngagedForTraining, yes_no(&mut rng));

    store.into_answers()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::mapping::map_form_to_payload;

    #[test]
    fn test_demo_answers_are_deterministic_per_seed() {
        let departments = vec![Department {
            id: "dep-1".into(),
            name: "Treasury Board Secretariat".into(),
        }];
        let skills = vec![
            Skill {
                id: "skill-1".into(),
                name: "Application development".into(),
            },
            Skill {
                id: "skill-2".into(),
                name: "Cloud architecture".into(),
            },
        ];
        let a = demo_answers(42, &departments, &skills);
        let b = demo_answers(42, &departments, &skills);
        assert_eq!(a, b);
    }

    #[test]
    fn test_demo_answers_survive_mapping() {
        let departments = demo_departments();
        let skills = demo_skills();
        for seed in [0, 1, 7, 42] {
            let answers = demo_answers(seed, &departments, &skills);
            let payload = map_form_to_payload(&answers).unwrap();
            assert!(payload.read_preamble);
            let relation = payload
                .personnel_requirements
                .expect("demo record always affirms personnel requirements");
            assert!(!relation.create.is_empty());
            for entry in &relation.create {
                assert!(entry.quantity.is_some());
            }
        }
    }
}
