//! Predicate-plan compilation: templates, parameter naming, and the
//! compiler itself.

pub mod compiler;
pub mod plan;
pub mod template;

pub use self::compiler::compile;
pub use self::plan::{CompiledPlan, Value};
pub use self::template::{ClauseTemplate, ParamNamer};
