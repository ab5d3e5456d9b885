pub mod transport;
pub use transport::*;

pub mod table_name_cache;
pub use table_name_cache::*;

pub mod client;
pub use client::*;
