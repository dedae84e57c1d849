//! Boolean predicate language gating a field's applicability.
//!
//! A [`Condition`] is a closed expression tree over other fields'
//! currently-selected values: comparison leaves composed with `and`/`or`.
//! Conditions are plain data here; evaluating one against a set of selected
//! values is the consumer's job.

/// Name of a field within a schema. Conditions refer to other fields by name.
pub type FieldName = String;

/// A boolean predicate over `(field, value)` pairs.
///
/// Comparison leaves hold the name of the field they inspect and the integer
/// to compare its selected value against. `And`/`Or` combine any number of
/// child conditions with short-circuit semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    /// True when every child condition is true.
    And(Vec<Condition>),
    /// True when at least one child condition is true.
    Or(Vec<Condition>),
    /// True when the named field's selected value equals the given value.
    Eq(FieldName, i64),
    /// True when the named field's selected value differs from the given value.
    Ne(FieldName, i64),
    /// True when the named field's selected value is less than the given value.
    Lt(FieldName, i64),
    /// True when the named field's selected value is greater than the given value.
    Gt(FieldName, i64),
}

impl Condition {
    pub fn and(children: Vec<Condition>) -> Self {
        Condition::And(children)
    }

    pub fn or(children: Vec<Condition>) -> Self {
        Condition::Or(children)
    }

    pub fn eq(field: impl Into<FieldName>, value: i64) -> Self {
        Condition::Eq(field.into(), value)
    }

    pub fn ne(field: impl Into<FieldName>, value: i64) -> Self {
        Condition::Ne(field.into(), value)
    }

    pub fn lt(field: impl Into<FieldName>, value: i64) -> Self {
        Condition::Lt(field.into(), value)
    }

    pub fn gt(field: impl Into<FieldName>, value: i64) -> Self {
        Condition::Gt(field.into(), value)
    }

    /// Every field name referenced anywhere in this expression, in
    /// depth-first order. Names may repeat.
    pub fn referenced_fields(&self) -> Vec<&str> {
        let mut names = Vec::new();
        self.collect_fields(&mut names);
        names
    }

    fn collect_fields<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Condition::And(children) | Condition::Or(children) => {
                for child in children {
                    child.collect_fields(out);
                }
            }
            Condition::Eq(field, _)
            | Condition::Ne(field, _)
            | Condition::Lt(field, _)
            | Condition::Gt(field, _) => out.push(field),
        }
    }
}

#[cfg(feature = "serde")]
impl From<crate::serde::ConditionDef> for Condition {
    fn from(value: crate::serde::ConditionDef) -> Self {
        use crate::serde::ConditionDef;

        match value {
            ConditionDef::And(children) => {
                Condition::And(children.into_iter().map(Into::into).collect())
            }
            ConditionDef::Or(children) => {
                Condition::Or(children.into_iter().map(Into::into).collect())
            }
            ConditionDef::Eq(field, value) => Condition::Eq(field, value),
            ConditionDef::Ne(field, value) => Condition::Ne(field, value),
            ConditionDef::Lt(field, value) => Condition::Lt(field, value),
            ConditionDef::Gt(field, value) => Condition::Gt(field, value),
        }
    }
}

#[cfg(feature = "serde")]
impl From<&Condition> for crate::serde::ConditionDef {
    fn from(value: &Condition) -> Self {
        use crate::serde::ConditionDef;

        match value {
            Condition::And(children) => {
                ConditionDef::And(children.iter().map(Into::into).collect())
            }
            Condition::Or(children) => {
                ConditionDef::Or(children.iter().map(Into::into).collect())
            }
            Condition::Eq(field, value) => ConditionDef::Eq(field.clone(), *value),
            Condition::Ne(field, value) => ConditionDef::Ne(field.clone(), *value),
            Condition::Lt(field, value) => ConditionDef::Lt(field.clone(), *value),
            Condition::Gt(field, value) => ConditionDef::Gt(field.clone(), *value),
        }
    }
}
