//! Explicit form-state store.
//!
//! The original held form state in an ambient form-library context and
//! re-ran visibility effects on render. Here the store is an explicit
//! handle: it exclusively owns the answers, tracks which fields the user
//! has touched, and runs the visibility sweep synchronously inside every
//! setter, so a hidden field can never keep a stale value between events.

use std::collections::HashSet;

use anyhow::{Result, bail};
use log::debug;

use crate::questionnaire::model::{FieldId, FieldKind, FormAnswers};

/// Ties a dependent field to the predicate under which it is visible.
///
/// Predicates encode full chains (a nested field's predicate includes its
/// ancestors), which is what makes a single sweep a fixpoint.
pub struct VisibilityRule {
    pub field: FieldId,
    pub visible: fn(&FormAnswers) -> bool,
}

pub struct FormStore {
    answers: FormAnswers,
    dirty: HashSet<FieldId>,
    rules: Vec<VisibilityRule>,
}

impl FormStore {
    pub fn new(rules: Vec<VisibilityRule>) -> Self {
        Self {
            answers: FormAnswers::default(),
            dirty: HashSet::new(),
            rules,
        }
    }

    /// Start from pre-populated answers (demo/fixture data), normalizing
    /// them through one sweep so hidden branches hold no stale values.
    pub fn with_answers(rules: Vec<VisibilityRule>, answers: FormAnswers) -> Self {
        let mut store = Self {
            answers,
            dirty: HashSet::new(),
            rules,
        };
        store.sweep();
        store
    }

    pub fn answers(&self) -> &FormAnswers {
        &self.answers
    }

    pub(crate) fn answers_mut(&mut self) -> &mut FormAnswers {
        &mut self.answers
    }

    /// Consume the store, yielding the final answers for mapping.
    pub fn into_answers(self) -> FormAnswers {
        self.answers
    }

    pub fn is_dirty(&self, field: FieldId) -> bool {
        self.dirty.contains(&field)
    }

    /// A field with no rule is unconditionally visible; a field with rules
    /// is visible when all of them hold.
    pub fn is_visible(&self, field: FieldId) -> bool {
        self.rules
            .iter()
            .filter(|rule| rule.field == field)
            .all(|rule| (rule.visible)(&self.answers))
    }

    pub fn set_text(&mut self, field: FieldId, value: impl Into<String>) -> Result<()> {
        self.set_scalar(field, FieldKind::Text, value.into())
    }

    pub fn set_selection(&mut self, field: FieldId, token: impl Into<String>) -> Result<()> {
        self.set_scalar(field, FieldKind::Selection, token.into())
    }

    pub fn set_multi(&mut self, field: FieldId, tokens: Vec<String>) -> Result<()> {
        if field.kind() != FieldKind::Multi {
            bail!("{:?} is not a multi-selection field", field);
        }
        *self.answers.multi_slot(field)? = tokens;
        self.touch(field);
        Ok(())
    }

    pub fn set_bool(&mut self, field: FieldId, value: bool) -> Result<()> {
        if field.kind() != FieldKind::Bool {
            bail!("{:?} is not a boolean field", field);
        }
        self.answers.read_preamble = value;
        self.touch(field);
        Ok(())
    }

    /// Imperative reset-to-default, clearing the dirty flag too.
    pub fn reset_field(&mut self, field: FieldId) {
        self.answers.clear(field);
        self.dirty.remove(&field);
        self.sweep();
    }

    fn set_scalar(&mut self, field: FieldId, expected: FieldKind, value: String) -> Result<()> {
        if field.kind() != expected {
            bail!("{:?} is not a {:?} field", field, expected);
        }
        *self.answers.scalar_slot(field)? = Some(value);
        self.touch(field);
        Ok(())
    }

    pub(crate) fn touch(&mut self, field: FieldId) {
        self.dirty.insert(field);
        self.sweep();
    }

    /// Clear every field whose visibility predicate no longer holds.
    ///
    /// Runs in the same turn as the mutation that triggered it. Clearing an
    /// empty field is a no-op, so re-running the sweep with the same
    /// controlling values changes nothing; a visible field is never touched.
    fn sweep(&mut self) {
        for rule in &self.rules {
            if !(rule.visible)(&self.answers) {
                debug!("clearing hidden field {:?}", rule.field);
                self.answers.clear(rule.field);
                self.dirty.remove(&rule.field);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::options::FormEnum;
    use crate::questionnaire::enums::{ContractCommodity, PersonnelScreeningLevel, YesNo};
    use crate::questionnaire::rules::questionnaire_rules;

    fn store() -> FormStore {
        FormStore::new(questionnaire_rules())
    }

    #[test]
    fn test_dependent_field_cleared_when_branch_deselected() {
        let mut store = store();
        store
            .set_selection(
                FieldId::CommodityType,
                ContractCommodity::Other.as_token(),
            )
            .unwrap();
        store
            .set_text(FieldId::CommodityTypeOther, "Cloud brokerage")
            .unwrap();
        assert!(store.is_dirty(FieldId::CommodityTypeOther));

        store
            .set_selection(
                FieldId::CommodityType,
                ContractCommodity::SupportServices.as_token(),
            )
            .unwrap();
        assert_eq!(store.answers().commodity_type_other, None);
        assert!(!store.is_dirty(FieldId::CommodityTypeOther));
    }

    #[test]
    fn test_reset_is_destructive_not_suspend_resume() {
        let mut store = store();
        let other = ContractCommodity::Other.as_token();
        store.set_selection(FieldId::CommodityType, other).unwrap();
        store
            .set_text(FieldId::CommodityTypeOther, "Cloud brokerage")
            .unwrap();
        store
            .set_selection(
                FieldId::CommodityType,
                ContractCommodity::TelecomServices.as_token(),
            )
            .unwrap();
        // Switching back does not restore the cleared value.
        store.set_selection(FieldId::CommodityType, other).unwrap();
        assert_eq!(store.answers().commodity_type_other, None);
    }

    #[test]
    fn test_sweep_is_idempotent() {
        let mut store = store();
        store
            .set_selection(FieldId::HasPersonnelRequirements, YesNo::No.as_token())
            .unwrap();
        store
            .set_multi(
                FieldId::RequirementScreeningLevels,
                vec![PersonnelScreeningLevel::Secret.as_token().to_string()],
            )
            .unwrap();
        let before = store.answers().clone();
        // Re-applying the same controlling value performs no extra mutation.
        store
            .set_selection(FieldId::HasPersonnelRequirements, YesNo::No.as_token())
            .unwrap();
        assert_eq!(store.answers(), &before);
    }

    #[test]
    fn test_visible_field_is_never_cleared() {
        let mut store = store();
        store
            .set_selection(FieldId::HasPersonnelRequirements, YesNo::No.as_token())
            .unwrap();
        store
            .set_multi(
                FieldId::RequirementScreeningLevels,
                vec![PersonnelScreeningLevel::Other.as_token().to_string()],
            )
            .unwrap();
        store
            .set_text(FieldId::RequirementScreeningLevelOther, "Ultra-High Security")
            .unwrap();
        // An unrelated change leaves the still-visible override alone.
        store
            .set_text(FieldId::ContractTitle, "Platform support")
            .unwrap();
        assert_eq!(
            store.answers().requirement_screening_level_other.as_deref(),
            Some("Ultra-High Security")
        );
    }

    #[test]
    fn test_with_answers_normalizes_hidden_branches() {
        let answers = FormAnswers {
            commodity_type: Some(ContractCommodity::TelecomServices.as_token().into()),
            // Stale override from a branch that is not selected.
            commodity_type_other: Some("Cloud brokerage".into()),
            ..Default::default()
        };
        let store = FormStore::with_answers(questionnaire_rules(), answers);
        assert_eq!(store.answers().commodity_type_other, None);
        assert!(store.answers().commodity_type.is_some());
    }

    #[test]
    fn test_reset_field_clears_value_and_dirty_flag() {
        let mut store = store();
        store
            .set_text(FieldId::ContractTitle, "Platform support")
            .unwrap();
        assert!(store.is_dirty(FieldId::ContractTitle));
        store.reset_field(FieldId::ContractTitle);
        assert_eq!(store.answers().contract_title, None);
        assert!(!store.is_dirty(FieldId::ContractTitle));
    }

    #[test]
    fn test_kind_mismatch_is_rejected() {
        let mut store = store();
        assert!(store.set_text(FieldId::AuthoritiesInvolved, "HR").is_err());
        assert!(store.set_bool(FieldId::ContractTitle, true).is_err());
        assert!(
            store
                .set_multi(FieldId::ContractTitle, vec!["X".into()])
                .is_err()
        );
    }
}
