//! End-to-end flow: answers through the store, mapped to a payload,
//! submitted through a canned gateway.

use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;

use directive_cli::api::models::{Department, QuestionnaireInput, Skill};
use directive_cli::api::QuestionnaireGateway;
use directive_cli::forms::options::FormEnum;
use directive_cli::forms::store::FormStore;
use directive_cli::questionnaire::enums::{SkillLevel, YesNo, YesNoUnsure};
use directive_cli::questionnaire::fixtures::{demo_answers, demo_departments, demo_skills};
use directive_cli::questionnaire::mapping::map_form_to_payload;
use directive_cli::questionnaire::model::FieldId;
use directive_cli::questionnaire::rules::questionnaire_rules;

struct CannedGateway {
    departments: Vec<Department>,
    skills: Vec<Skill>,
    submitted: Mutex<Vec<QuestionnaireInput>>,
}

impl CannedGateway {
    fn new() -> Self {
        Self {
            departments: vec![Department {
                id: "dep-1".into(),
                name: "Treasury Board Secretariat".into(),
            }],
            skills: vec![Skill {
                id: "skill-1".into(),
                name: "Application development".into(),
            }],
            submitted: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl QuestionnaireGateway for CannedGateway {
    async fn departments(&self) -> Result<Vec<Department>> {
        Ok(self.departments.clone())
    }

    async fn skills(&self) -> Result<Vec<Skill>> {
        Ok(self.skills.clone())
    }

    async fn submit(&self, input: &QuestionnaireInput) -> Result<String> {
        self.submitted.lock().unwrap().push(input.clone());
        Ok("questionnaire-1".into())
    }
}

#[tokio::test]
async fn filled_form_round_trips_through_gateway() {
    let gateway = CannedGateway::new();
    let departments = gateway.departments().await.unwrap();
    let skills = gateway.skills().await.unwrap();

    let mut store = FormStore::new(questionnaire_rules());
    store.set_bool(FieldId::ReadPreamble, true).unwrap();
    store
        .set_selection(FieldId::Department, &departments[0].id)
        .unwrap();
    store
        .set_text(FieldId::ContractTitle, "Cloud operations support")
        .unwrap();
    store
        .set_selection(FieldId::ContractForDigitalInitiative, YesNoUnsure::No.as_token())
        .unwrap();
    store
        .set_selection(FieldId::HasPersonnelRequirements, YesNo::Yes.as_token())
        .unwrap();
    store.append_personnel_requirement();
    store
        .update_personnel_requirement(0, |entry| {
            entry.resource_type = "Developer".into();
            entry.quantity = "2".into();
            entry.add_skill(skills[0].id.clone(), SkillLevel::Advanced.as_token());
        })
        .unwrap();

    let payload = map_form_to_payload(store.answers()).unwrap();
    let id = gateway.submit(&payload).await.unwrap();
    assert_eq!(id, "questionnaire-1");

    let submitted = gateway.submitted.lock().unwrap();
    assert_eq!(submitted.len(), 1);
    let input = &submitted[0];
    assert!(input.read_preamble);
    assert_eq!(
        input.department.as_ref().map(|d| d.connect.as_str()),
        Some("dep-1")
    );
    let relation = input.personnel_requirements.as_ref().unwrap();
    assert_eq!(relation.create.len(), 1);
    let skills_relation = relation.create[0].skill_requirements.as_ref().unwrap();
    assert_eq!(skills_relation.create[0].skill.connect, "skill-1");
    assert_eq!(skills_relation.create[0].level, SkillLevel::Advanced);
}

#[tokio::test]
async fn abandoned_branch_never_reaches_the_wire() {
    let gateway = CannedGateway::new();
    let mut store = FormStore::new(questionnaire_rules());

    // Start down the personnel branch, add an entry, then back out.
    store
        .set_selection(FieldId::HasPersonnelRequirements, YesNo::Yes.as_token())
        .unwrap();
    store.append_personnel_requirement();
    store
        .set_selection(FieldId::HasPersonnelRequirements, YesNo::No.as_token())
        .unwrap();
    store
        .set_text(FieldId::QualificationRequirement, "Generalist, CS-02")
        .unwrap();

    let payload = map_form_to_payload(store.answers()).unwrap();
    gateway.submit(&payload).await.unwrap();

    let submitted = gateway.submitted.lock().unwrap();
    let input = &submitted[0];
    assert!(input.personnel_requirements.is_none());
    assert_eq!(
        input.qualification_requirement.as_deref(),
        Some("Generalist, CS-02")
    );
}

#[tokio::test]
async fn demo_record_submits_cleanly() {
    let gateway = CannedGateway::new();
    let answers = demo_answers(7, &demo_departments(), &demo_skills());
    let payload = map_form_to_payload(&answers).unwrap();
    let id = gateway.submit(&payload).await.unwrap();
    assert_eq!(id, "questionnaire-1");
}
