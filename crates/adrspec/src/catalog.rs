//! Built-in field catalog for the device address word.
//!
//! Hand-authored discriminators first: the overall `size` field, the class
//! selector `sclass`, and one group selector per class (`sid0`..`sid3`, each
//! visible only for its class). Every (class, group) pair with sub-options
//! then gets its generated subfield entry.

use std::collections::BTreeMap;

use crate::condition::Condition;
use crate::field::{Field, FieldKind};
use crate::schema::Schema;

fn label(key: &str) -> String {
    format!("K45::WE_ARMBRP.adrLabel[{key}]")
}

fn options(field: &str, codes: impl IntoIterator<Item = u32>) -> BTreeMap<u32, String> {
    codes
        .into_iter()
        .map(|code| (code, format!("K45::WE_ARMBRP.adrOptions[{field}.{code}]")))
        .collect()
}

/// Top-level group selector for one address class: six bits at the bottom of
/// the word, visible only while `sclass` matches.
fn group_selector(class_id: u32, options: BTreeMap<u32, String>) -> Field {
    Field {
        label: label("sid"),
        parameter: false,
        position: 0,
        size: 6,
        condition: Some(Condition::eq("sclass", i64::from(class_id))),
        kind: FieldKind::Selection { options },
    }
}

/// The complete address-word schema.
pub fn address_schema() -> Schema {
    let mut schema = Schema::new();

    schema.insert(
        "size",
        Field {
            label: label("size"),
            parameter: false,
            position: 8,
            size: 2,
            condition: None,
            kind: FieldKind::Selection { options: options("size", 0..=3) },
        },
    );

    schema.insert(
        "sclass",
        Field {
            label: label("sclass"),
            parameter: false,
            position: 6,
            size: 2,
            condition: None,
            kind: FieldKind::Selection { options: options("sclass", 0..=3) },
        },
    );

    schema.insert("sid1", group_selector(1, options("sid1", 1..=40)));
    for (group_id, option_count) in [(4, 2), (5, 2), (6, 3), (8, 2), (24, 3), (25, 4), (35, 2), (36, 2)] {
        schema.insert_subselection(1, group_id, option_count);
    }

    // Class 0 has no group 26.
    schema.insert(
        "sid0",
        group_selector(0, options("sid0", (1..=48).filter(|&code| code != 26))),
    );
    for (group_id, option_count) in [
        (1, 2),
        (2, 2),
        (3, 2),
        (4, 2),
        (5, 2),
        (7, 2),
        (10, 2),
        (11, 2),
        (13, 2),
        (20, 2),
        (21, 5),
        (30, 3),
        (32, 2),
        (33, 2),
        (42, 3),
    ] {
        schema.insert_subselection(0, group_id, option_count);
    }

    schema.insert("sid2", group_selector(2, options("sid2", 1..=2)));
    schema.insert("sid3", group_selector(3, options("sid3", 1..=4)));

    for (class_id, group_id) in [
        (1, 15),
        (1, 18),
        (1, 14),
        (1, 17),
        (1, 16),
        (1, 19),
        (0, 37),
        (0, 38),
        (0, 46),
        (0, 47),
        (0, 48),
    ] {
        schema.insert_number_subfield(class_id, group_id);
    }

    schema
}
