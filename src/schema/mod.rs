mod column_rule;
mod csv_schema;

pub use column_rule::ColumnRule;
pub use csv_schema::*;
