//! SQL validation policy
//!
//! Every statement a model produces passes through [`validate_sql`] before
//! it can reach the database.

pub mod allow_list;
pub mod validator;

pub use allow_list::{ALLOWED_TABLES, is_allowed_table};
pub use validator::{ValidationError, validate_sql};
