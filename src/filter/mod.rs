pub mod error;
pub mod query;
pub mod where_clause;

pub use error::FilterError;
pub use query::{CompanyFilter, JobFilter};
pub use where_clause::{compile_company_filter, compile_job_filter, SqlResult};
