//! # adrspec
//!
//! Declarative field schemas for a packed "address" word used to configure a
//! hardware item. A schema names every field of the word, gives its bit
//! position and width, maps raw values to display labels or numeric ranges,
//! and carries a boolean condition describing when the field applies.
//!
//! The repetitive nested subfield families (one sub-selection or numeric
//! subfield per class/group pair) are produced by the generators in
//! [`generate`], which derive the assembly key, the option labels, and the
//! gating condition from the same pair of ids.
//!
//! ## Example
//!
//! ```
//! use adrspec::condition::Condition;
//! use adrspec::field::{Field, FieldKind};
//! use adrspec::schema::Schema;
//!
//! let mut schema = Schema::new();
//! schema.insert("sclass", Field {
//!     label: "labels[sclass]".to_string(),
//!     parameter: false,
//!     position: 6,
//!     size: 2,
//!     condition: None,
//!     kind: FieldKind::Selection {
//!         options: [(0, "labels[sclass.0]".to_string())].into(),
//!     },
//! });
//! schema.insert_subselection(0, 3, 2);
//!
//! let field = schema.get("sid0_3").unwrap();
//! assert_eq!(
//!     field.condition,
//!     Some(Condition::and(vec![
//!         Condition::eq("sclass", 0),
//!         Condition::eq("sid0", 3),
//!     ]))
//! );
//! ```

pub mod catalog;
pub mod condition;
pub mod errors;
pub mod field;
pub mod generate;
pub mod schema;

#[cfg(feature = "serde")]
pub mod serde;
