//! Rule records, the catalog partitions they come from and construction
//! targets they filter on.
//!
//! Rules are authored outside the engine. The core only reads them: a cycle
//! starts by copying every partition into a [`RuleBook`].

pub mod book;
pub mod construction;
pub mod kind;
pub mod params;

pub use book::{RuleBook, RuleSource};
pub use construction::{CategoryFilter, ConstructionKind, ConstructionTarget, is_any_city};
pub use kind::{Rule, RuleKind, RuleScope, SchemaVersion};
pub use params::{Conditional, StatBlock, StatRef};
