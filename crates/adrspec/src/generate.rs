//! Generators for the repetitive subfield families of the address word.
//!
//! Each (class, group) pair the format defines gets either a sub-selection
//! field or a numeric subfield. Both are derived entirely from the two ids
//! (plus an option count), so the schema declares them with one call per pair
//! instead of hand-writing near-identical entries.
//!
//! Generated fields are keyed `sid{class}_{group}` and gated on the class
//! selector `sclass` and the matching group selector `sid{class}`. They
//! always sit at position 0 with a 31-bit width and are marked as runtime
//! parameters.

use std::collections::BTreeMap;

use crate::condition::{Condition, FieldName};
use crate::field::{Field, FieldKind};

/// Label path shown for every generated sub-selection field.
const SUBSELECT_LABEL: &str = "K45::WE_ARMBRP.adrLabel[sid_subselect]";

/// Label path shown for every generated numeric subfield.
const VALUE_LABEL: &str = "K45::WE_ARMBRP.adrLabel[sid_value]";

/// Schema key of the generated subfield for a (class, group) pair.
pub fn subfield_key(class_id: u32, group_id: u32) -> FieldName {
    format!("sid{class_id}_{group_id}")
}

/// A sub-selection field with `option_count` options coded `0..option_count`.
///
/// Option labels are derived from the class id, group id, and code, so two
/// calls with the same arguments produce identical fields.
pub fn subselection_field(class_id: u32, group_id: u32, option_count: u32) -> Field {
    let options: BTreeMap<u32, String> = (0..option_count)
        .map(|code| {
            (
                code,
                format!("K45::WE_ARMBRP.adrOptions[sid{class_id}.{group_id}.{code}]"),
            )
        })
        .collect();

    Field {
        label: SUBSELECT_LABEL.to_string(),
        parameter: true,
        position: 0,
        size: 31,
        condition: Some(group_condition(class_id, group_id)),
        kind: FieldKind::Selection { options },
    }
}

/// A numeric subfield with no bounds set.
pub fn number_subfield(class_id: u32, group_id: u32) -> Field {
    Field {
        label: VALUE_LABEL.to_string(),
        parameter: true,
        position: 0,
        size: 31,
        condition: Some(group_condition(class_id, group_id)),
        kind: FieldKind::Number { min: None, max: None },
    }
}

/// Applicability condition shared by all generated subfields: the class
/// selector must equal `class_id` and that class's group selector must equal
/// `group_id`.
fn group_condition(class_id: u32, group_id: u32) -> Condition {
    Condition::and(vec![
        Condition::eq("sclass", i64::from(class_id)),
        Condition::eq(format!("sid{class_id}"), i64::from(group_id)),
    ])
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn subselection_options_are_contiguous_and_zero_based() {
        let field = subselection_field(1, 6, 3);
        let FieldKind::Selection { options } = &field.kind else {
            panic!("expected a selection field");
        };

        assert_eq!(options.keys().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(options[&0], "K45::WE_ARMBRP.adrOptions[sid1.6.0]");
        assert_eq!(options[&1], "K45::WE_ARMBRP.adrOptions[sid1.6.1]");
        assert_eq!(options[&2], "K45::WE_ARMBRP.adrOptions[sid1.6.2]");
    }

    #[test]
    fn subselection_condition_matches_class_and_group_exactly() {
        let field = subselection_field(1, 6, 3);

        assert_eq!(
            field.condition,
            Some(Condition::And(vec![
                Condition::Eq("sclass".to_string(), 1),
                Condition::Eq("sid1".to_string(), 6),
            ]))
        );
        assert!(field.parameter);
        assert_eq!(field.position, 0);
        assert_eq!(field.size, 31);
    }

    #[test]
    fn number_subfield_is_unbounded() {
        let field = number_subfield(0, 37);

        assert_eq!(field.kind, FieldKind::Number { min: None, max: None });
        assert_eq!(
            field.condition,
            Some(Condition::And(vec![
                Condition::Eq("sclass".to_string(), 0),
                Condition::Eq("sid0".to_string(), 37),
            ]))
        );
    }

    #[test]
    fn subfield_key_joins_class_and_group() {
        assert_eq!(subfield_key(1, 6), "sid1_6");
        assert_eq!(subfield_key(0, 42), "sid0_42");
    }

    proptest! {
        #[test]
        fn subselection_is_deterministic(
            class_id in 0u32..8,
            group_id in 0u32..64,
            option_count in 1u32..16,
        ) {
            prop_assert_eq!(
                subselection_field(class_id, group_id, option_count),
                subselection_field(class_id, group_id, option_count)
            );
        }

        #[test]
        fn subselection_has_exactly_option_count_entries(
            class_id in 0u32..8,
            group_id in 0u32..64,
            option_count in 1u32..64,
        ) {
            let field = subselection_field(class_id, group_id, option_count);
            let FieldKind::Selection { options } = field.kind else {
                panic!("expected a selection field");
            };

            prop_assert_eq!(options.len() as u32, option_count);
            prop_assert!(options.keys().copied().eq(0..option_count));
        }

        #[test]
        fn number_subfield_is_deterministic(class_id in 0u32..8, group_id in 0u32..64) {
            prop_assert_eq!(
                number_subfield(class_id, group_id),
                number_subfield(class_id, group_id)
            );
        }

        #[test]
        fn generated_condition_references_both_selectors(
            class_id in 0u32..8,
            group_id in 0u32..64,
        ) {
            let field = number_subfield(class_id, group_id);
            let condition = field.condition.expect("generated fields are conditional");
            let group_selector = format!("sid{class_id}");

            prop_assert_eq!(
                condition.referenced_fields(),
                vec!["sclass", group_selector.as_str()]
            );
        }
    }
}
