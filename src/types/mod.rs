mod query;

pub use query::*;
