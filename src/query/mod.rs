pub mod select;
pub use select::*;

pub mod column;
pub use column::*;

pub mod table_name;
pub use table_name::*;

pub mod key;
pub use key::*;

pub mod expression;
pub use expression::*;

pub mod operators;
pub use operators::*;

pub mod predicate;
pub use predicate::*;

pub mod join;
pub use join::*;

pub mod order_by;
pub use order_by::*;

pub mod value;
pub use value::*;
