//! Repeater operations for the personnel-requirement list.
//!
//! The list lives inside the form answers, so all mutation goes through
//! the store and ends with the same visibility sweep as scalar edits: if
//! the controlling "has personnel requirements" answer is not the
//! affirmative branch, the sweep clears whatever was appended.

use anyhow::{Result, bail};

use crate::forms::store::FormStore;
use crate::questionnaire::model::{FieldId, PersonnelRequirementValues};

impl FormStore {
    /// Append one new, empty requirement at the end. No validation at
    /// append time.
    pub fn append_personnel_requirement(&mut self) {
        self.answers_mut()
            .personnel_requirements
            .push(PersonnelRequirementValues::default());
        self.touch(FieldId::PersonnelRequirements);
    }

    /// Remove the entry at `index`, preserving the relative order of the
    /// remaining entries.
    pub fn remove_personnel_requirement(&mut self, index: usize) -> Result<()> {
        let list = &mut self.answers_mut().personnel_requirements;
        if index >= list.len() {
            bail!("no personnel requirement at index {}", index);
        }
        list.remove(index);
        self.touch(FieldId::PersonnelRequirements);
        Ok(())
    }

    /// Reorder entries: remove the entry at `from`, then insert it at `to`.
    ///
    /// A stable permutation; no entry is created, destroyed or duplicated.
    /// `move(0, 2)` on `[A, B, C]` yields `[B, C, A]`.
    pub fn move_personnel_requirement(&mut self, from: usize, to: usize) -> Result<()> {
        let list = &mut self.answers_mut().personnel_requirements;
        if from >= list.len() || to >= list.len() {
            bail!(
                "move indices ({}, {}) out of bounds for {} entries",
                from,
                to,
                list.len()
            );
        }
        let entry = list.remove(from);
        list.insert(to, entry);
        self.touch(FieldId::PersonnelRequirements);
        Ok(())
    }

    /// Edit one entry in place, then re-run the sweep.
    pub fn update_personnel_requirement(
        &mut self,
        index: usize,
        edit: impl FnOnce(&mut PersonnelRequirementValues),
    ) -> Result<()> {
        match self.answers_mut().personnel_requirements.get_mut(index) {
            Some(entry) => {
                edit(entry);
                self.touch(FieldId::PersonnelRequirements);
                Ok(())
            }
            None => bail!("no personnel requirement at index {}", index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::options::FormEnum;
    use crate::questionnaire::enums::YesNo;
    use crate::questionnaire::rules::questionnaire_rules;

    fn store_with_personnel_branch() -> FormStore {
        let mut store = FormStore::new(questionnaire_rules());
        store
            .set_selection(FieldId::HasPersonnelRequirements, YesNo::Yes.as_token())
            .unwrap();
        store
    }

    fn resource_types(store: &FormStore) -> Vec<String> {
        store
            .answers()
            .personnel_requirements
            .iter()
            .map(|r| r.resource_type.clone())
            .collect()
    }

    #[test]
    fn test_append_then_remove_leaves_empty_list() {
        let mut store = store_with_personnel_branch();
        store.append_personnel_requirement();
        store.remove_personnel_requirement(0).unwrap();
        assert!(store.answers().personnel_requirements.is_empty());
    }

    #[test]
    fn test_remove_preserves_order_of_remaining_entries() {
        let mut store = store_with_personnel_branch();
        for name in ["A", "B", "C"] {
            store.append_personnel_requirement();
            let index = store.answers().personnel_requirements.len() - 1;
            store
                .update_personnel_requirement(index, |entry| {
                    entry.resource_type = name.to_string();
                })
                .unwrap();
        }
        store.remove_personnel_requirement(1).unwrap();
        assert_eq!(resource_types(&store), vec!["A", "C"]);
    }

    #[test]
    fn test_move_is_a_stable_permutation() {
        let mut store = store_with_personnel_branch();
        for name in ["A", "B", "C"] {
            store.append_personnel_requirement();
            let index = store.answers().personnel_requirements.len() - 1;
            store
                .update_personnel_requirement(index, |entry| {
                    entry.resource_type = name.to_string();
                })
                .unwrap();
        }
        store.move_personnel_requirement(0, 2).unwrap();
        assert_eq!(resource_types(&store), vec!["B", "C", "A"]);
        store.move_personnel_requirement(2, 0).unwrap();
        assert_eq!(resource_types(&store), vec!["A", "B", "C"]);
        assert!(store.move_personnel_requirement(0, 3).is_err());
    }

    #[test]
    fn test_appending_outside_affirmative_branch_is_swept_away() {
        let mut store = FormStore::new(questionnaire_rules());
        store
            .set_selection(FieldId::HasPersonnelRequirements, YesNo::No.as_token())
            .unwrap();
        store.append_personnel_requirement();
        assert!(store.answers().personnel_requirements.is_empty());
    }
}
