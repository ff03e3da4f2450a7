//! Closed-enumeration utilities shared by every choice field in the form.
//!
//! Every multiple-choice question in the questionnaire draws its values from
//! a closed set of wire tokens. `FormEnum` is the single seam between the
//! untrusted strings held in form state and the typed members used in the
//! API payload.

use anyhow::Result;

/// A closed, named set of valid wire tokens.
pub trait FormEnum: Copy + Eq + Sized + 'static {
    /// Type name used in error messages.
    const NAME: &'static str;

    /// All members in declaration order.
    fn members() -> &'static [Self];

    /// The wire token for this member (what the API expects).
    fn as_token(&self) -> &'static str;

    /// Human-readable label shown next to the choice.
    fn label(&self) -> &'static str;

    /// Convert an untrusted string into a typed member.
    ///
    /// Fails with the offending value and the allowed set. A failure here at
    /// mapping time means the rendering layer let an invalid value through,
    /// so the error is meant to surface loudly rather than be recovered.
    fn from_token(raw: &str) -> Result<Self> {
        Self::members()
            .iter()
            .copied()
            .find(|member| member.as_token() == raw)
            .ok_or_else(|| {
                let allowed: Vec<&str> =
                    Self::members().iter().map(|m| m.as_token()).collect();
                anyhow::anyhow!(
                    "invalid {} value '{}', expected one of {:?}",
                    Self::NAME,
                    raw,
                    allowed
                )
            })
    }

    /// Membership check without constructing an error.
    fn is_member(raw: &str) -> bool {
        Self::members().iter().any(|m| m.as_token() == raw)
    }
}

/// One selectable choice for a dropdown, radio group or checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectOption<E: FormEnum> {
    pub value: E,
    pub label: &'static str,
}

/// Produce the ordered choice list for an enumeration.
///
/// With a sort order, members present in it come first, ordered by their
/// position in the list; members absent from it are placed after, keeping
/// their declaration order among themselves. Without a sort order the
/// declaration order is used as-is. Exactly one option per member.
pub fn enum_to_options<E: FormEnum>(sort_order: Option<&[E]>) -> Vec<SelectOption<E>> {
    let mut members: Vec<E> = E::members().to_vec();
    if let Some(order) = sort_order {
        // Stable sort, so unlisted members keep their relative order.
        members.sort_by_key(|m| {
            order
                .iter()
                .position(|o| o == m)
                .unwrap_or(order.len())
        });
    }
    members
        .into_iter()
        .map(|value| SelectOption {
            value,
            label: value.label(),
        })
        .collect()
}
