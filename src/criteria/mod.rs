//! The composable criterion model: leaves, typed groups, and the assembled
//! set.

pub mod criterion;
pub mod set;
pub mod typed_set;

pub use self::criterion::{
    CompareOp, Criterion, CriterionKind, Gender, JoinRequirement, Mortality, Prosody,
};
pub use self::set::{CriteriaNode, CriteriaSet};
pub use self::typed_set::{BooleanRelation, TypedSet};
