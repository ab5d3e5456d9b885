pub mod query;
pub use query::{Candidates, Column, Expression, Join, JoinType, Key, OrderBy, Predicate, Select, TableName, Value};

pub mod serializer;
pub use serializer::{Serializer, ToSql};

pub mod connection;
pub use connection::{Client, Connection, Row, TableNameCache};

pub mod config;
pub use config::*;

pub mod error;
pub use error::*;
