//! Query-string validation for the list endpoints. Each resource recognizes
//! a fixed allow-list of filter names; recognized keys are consumed and
//! coerced, anything left over is rejected by name.

use std::collections::HashMap;

use super::error::FilterError;

const COMPANY_FILTERS: &str = "name, minEmployees, maxEmployees";
const JOB_FILTERS: &str = "title, minSalary, hasEquity";

/// Validated filters for `GET /companies`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyFilter {
    pub name: Option<String>,
    pub min_employees: Option<i32>,
    pub max_employees: Option<i32>,
}

/// Validated filters for `GET /jobs`. `company_handle` and `id` have no
/// query-string spelling; they exist for callers composing lookups directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilter {
    pub title: Option<String>,
    pub min_salary: Option<i32>,
    pub has_equity: Option<bool>,
    pub company_handle: Option<String>,
    pub id: Option<i32>,
}

/// Numeric bounds must be >= 1. Zero and negative values read as invalid
/// filter values, not as absent filters.
fn parse_bound(field: &'static str, raw: &str) -> Result<i32, FilterError> {
    match raw.parse::<i32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(FilterError::InvalidBound(field)),
    }
}

fn reject_leftovers(
    params: &HashMap<String, String>,
    allowed: &'static str,
) -> Result<(), FilterError> {
    if params.is_empty() {
        return Ok(());
    }
    let mut names: Vec<&str> = params.keys().map(String::as_str).collect();
    names.sort_unstable();
    Err(FilterError::UnknownFilters {
        names: names.join(", "),
        allowed,
    })
}

impl CompanyFilter {
    /// Consume recognized keys from the raw query parameters. `Ok(None)`
    /// means no filters were supplied and the caller should run an
    /// unfiltered listing.
    pub fn from_query(mut params: HashMap<String, String>) -> Result<Option<Self>, FilterError> {
        if params.is_empty() {
            return Ok(None);
        }

        let mut filter = Self::default();
        if let Some(name) = params.remove("name") {
            filter.name = Some(name);
        }
        if let Some(raw) = params.remove("minEmployees") {
            filter.min_employees = Some(parse_bound("minEmployees", &raw)?);
        }
        if let Some(raw) = params.remove("maxEmployees") {
            filter.max_employees = Some(parse_bound("maxEmployees", &raw)?);
        }
        reject_leftovers(&params, COMPANY_FILTERS)?;

        if let (Some(min), Some(max)) = (filter.min_employees, filter.max_employees) {
            if min > max {
                return Err(FilterError::InvertedRange);
            }
        }

        Ok(Some(filter))
    }
}

impl JobFilter {
    pub fn from_query(mut params: HashMap<String, String>) -> Result<Option<Self>, FilterError> {
        if params.is_empty() {
            return Ok(None);
        }

        let mut filter = Self::default();
        if let Some(title) = params.remove("title") {
            filter.title = Some(title);
        }
        if let Some(raw) = params.remove("minSalary") {
            filter.min_salary = Some(parse_bound("minSalary", &raw)?);
        }
        if let Some(raw) = params.remove("hasEquity") {
            filter.has_equity = Some(raw == "true");
        }
        reject_leftovers(&params, JOB_FILTERS)?;

        Ok(Some(filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_query_means_no_filter() {
        assert_eq!(CompanyFilter::from_query(HashMap::new()).unwrap(), None);
        assert_eq!(JobFilter::from_query(HashMap::new()).unwrap(), None);
    }

    #[test]
    fn company_bounds_are_coerced_to_integers() {
        let filter = CompanyFilter::from_query(params(&[
            ("minEmployees", "1"),
            ("maxEmployees", "50"),
        ]))
        .unwrap()
        .unwrap();

        assert_eq!(filter.min_employees, Some(1));
        assert_eq!(filter.max_employees, Some(50));
        assert_eq!(filter.name, None);
    }

    #[test]
    fn inverted_employee_range_is_rejected() {
        let err = CompanyFilter::from_query(params(&[
            ("minEmployees", "50"),
            ("maxEmployees", "1"),
        ]))
        .unwrap_err();

        assert!(matches!(err, FilterError::InvertedRange));
    }

    #[test]
    fn equal_employee_bounds_are_accepted() {
        let filter = CompanyFilter::from_query(params(&[
            ("minEmployees", "7"),
            ("maxEmployees", "7"),
        ]))
        .unwrap()
        .unwrap();

        assert_eq!(filter.min_employees, filter.max_employees);
    }

    #[test]
    fn unknown_keys_are_rejected_by_name() {
        let err = JobFilter::from_query(params(&[("title", "eng"), ("salary", "1")])).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("salary"));
        assert!(!message.contains("eng"));
    }

    #[test]
    fn multiple_unknown_keys_are_all_named() {
        let err =
            CompanyFilter::from_query(params(&[("color", "blue"), ("size", "9")])).unwrap_err();

        let message = err.to_string();
        assert!(message.contains("color"));
        assert!(message.contains("size"));
    }

    #[test]
    fn non_numeric_bound_is_rejected() {
        let err = JobFilter::from_query(params(&[("minSalary", "lots")])).unwrap_err();
        assert!(matches!(err, FilterError::InvalidBound("minSalary")));
    }

    #[test]
    fn zero_and_negative_bounds_are_rejected() {
        assert!(JobFilter::from_query(params(&[("minSalary", "0")])).is_err());
        assert!(CompanyFilter::from_query(params(&[("minEmployees", "-3")])).is_err());
    }

    #[test]
    fn has_equity_compares_against_the_literal_true() {
        let filter = JobFilter::from_query(params(&[("hasEquity", "true")]))
            .unwrap()
            .unwrap();
        assert_eq!(filter.has_equity, Some(true));

        // Anything else, including "TRUE", reads as false
        let filter = JobFilter::from_query(params(&[("hasEquity", "TRUE")]))
            .unwrap()
            .unwrap();
        assert_eq!(filter.has_equity, Some(false));
    }
}
