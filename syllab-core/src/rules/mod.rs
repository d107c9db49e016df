//! Rule compilation and the per-word matching passes

pub mod adjustment;
pub mod compiler;
pub mod exclusion;
pub mod policy;
pub mod vowels;

pub use adjustment::AdjustmentSet;
pub use compiler::{CategoryMatcher, CompiledLocale};
pub use exclusion::ExclusionOutcome;
pub use policy::{category_names, BoundaryPolicy, CategorySpec, CATEGORIES};
pub use vowels::VowelSet;
