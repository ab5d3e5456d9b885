pub mod writer;
pub use writer::*;

pub mod identifiers;
pub mod expression;
pub mod predicate;
pub mod select;
