//! Definition of one named field of the packed address word.

use std::collections::BTreeMap;

use crate::condition::Condition;

/// A single field of the address word: where it lives, how its raw value is
/// presented, and when it applies.
///
/// The field's name is the key it is stored under in a
/// [crate::schema::Schema] and is not repeated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Localization path of the field's display label. Opaque to this crate.
    pub label: String,
    /// True for runtime-settable parameters, false for structural fields.
    pub parameter: bool,
    /// Bit offset of the field within the packed word.
    pub position: u32,
    /// Width of the field in bits.
    pub size: u32,
    /// Applicability predicate. `None` means the field always applies.
    pub condition: Option<Condition>,
    /// How the field's raw value is interpreted.
    pub kind: FieldKind,
}

/// Distinguishes selection-of-options fields from bounded-number fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Value is one of an enumerated set of codes. Codes may be sparse and
    /// need not start at zero; each maps to a display-label path.
    Selection { options: BTreeMap<u32, String> },
    /// Value is a plain integer, optionally clamped to an inclusive range.
    Number { min: Option<i64>, max: Option<i64> },
}

#[cfg(feature = "serde")]
impl From<crate::serde::FieldDef> for Field {
    fn from(value: crate::serde::FieldDef) -> Self {
        Field {
            label: value.localization,
            parameter: value.parameter,
            position: value.position,
            size: value.size,
            condition: value.condition.map(Into::into),
            kind: value.kind.into(),
        }
    }
}

#[cfg(feature = "serde")]
impl From<&Field> for crate::serde::FieldDef {
    fn from(value: &Field) -> Self {
        crate::serde::FieldDef {
            localization: value.label.clone(),
            parameter: value.parameter,
            position: value.position,
            size: value.size,
            condition: value.condition.as_ref().map(Into::into),
            kind: (&value.kind).into(),
        }
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::FieldKindDef> for FieldKind {
    fn from(value: crate::serde::FieldKindDef) -> Self {
        match value {
            crate::serde::FieldKindDef::Selection { options } => {
                FieldKind::Selection { options }
            }
            crate::serde::FieldKindDef::Number { min, max } => FieldKind::Number { min, max },
        }
    }
}

#[cfg(feature = "serde")]
impl From<&FieldKind> for crate::serde::FieldKindDef {
    fn from(value: &FieldKind) -> Self {
        match value {
            FieldKind::Selection { options } => crate::serde::FieldKindDef::Selection {
                options: options.clone(),
            },
            FieldKind::Number { min, max } => crate::serde::FieldKindDef::Number {
                min: *min,
                max: *max,
            },
        }
    }
}
