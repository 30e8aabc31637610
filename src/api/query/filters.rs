//! Typed OData filter construction
//!
//! Filters render to the server-side boolean expression strings the Insyte
//! API understands. The `Raw` variant passes an expression through verbatim
//! for anything the typed surface does not cover.

#[derive(Debug, Clone)]
pub enum Filter {
    // Comparison operators
    Eq(String, FilterValue),
    Ne(String, FilterValue),
    Gt(String, FilterValue),
    Ge(String, FilterValue),
    Lt(String, FilterValue),
    Le(String, FilterValue),

    // String functions
    Contains(String, String),
    StartsWith(String, String),
    EndsWith(String, String),

    // Logical operators
    And(Vec<Filter>),
    Or(Vec<Filter>),
    Not(Box<Filter>),

    // Escape hatch for hand-written expressions
    Raw(String),
}

#[derive(Debug, Clone)]
pub enum FilterValue {
    String(String),
    Number(f64),
    Integer(i64),
    Boolean(bool),
    Null,
}

impl Filter {
    pub fn eq(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::Eq(field.into(), value.into())
    }

    pub fn ne(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::Ne(field.into(), value.into())
    }

    pub fn gt(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::Gt(field.into(), value.into())
    }

    pub fn ge(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::Ge(field.into(), value.into())
    }

    pub fn lt(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::Lt(field.into(), value.into())
    }

    pub fn le(field: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self::Le(field.into(), value.into())
    }

    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Contains(field.into(), value.into())
    }

    pub fn starts_with(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::StartsWith(field.into(), value.into())
    }

    pub fn ends_with(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::EndsWith(field.into(), value.into())
    }

    pub fn and(filters: Vec<Filter>) -> Self {
        Self::And(filters)
    }

    pub fn or(filters: Vec<Filter>) -> Self {
        Self::Or(filters)
    }

    pub fn not(filter: Filter) -> Self {
        Self::Not(Box::new(filter))
    }

    pub fn raw(filter: impl Into<String>) -> Self {
        Self::Raw(filter.into())
    }

    /// Render to the OData expression string.
    pub fn to_odata_string(&self) -> String {
        match self {
            Filter::Eq(field, value) => format!("{} eq {}", field, value.to_odata_string()),
            Filter::Ne(field, value) => format!("{} ne {}", field, value.to_odata_string()),
            Filter::Gt(field, value) => format!("{} gt {}", field, value.to_odata_string()),
            Filter::Ge(field, value) => format!("{} ge {}", field, value.to_odata_string()),
            Filter::Lt(field, value) => format!("{} lt {}", field, value.to_odata_string()),
            Filter::Le(field, value) => format!("{} le {}", field, value.to_odata_string()),

            Filter::Contains(field, value) => {
                format!("contains({}, '{}')", field, value.replace('\'', "''"))
            }
            Filter::StartsWith(field, value) => {
                format!("startswith({}, '{}')", field, value.replace('\'', "''"))
            }
            Filter::EndsWith(field, value) => {
                format!("endswith({}, '{}')", field, value.replace('\'', "''"))
            }

            Filter::And(filters) => {
                let rendered: Vec<String> = filters.iter().map(|f| f.to_odata_string()).collect();
                format!("({})", rendered.join(" and "))
            }
            Filter::Or(filters) => {
                let rendered: Vec<String> = filters.iter().map(|f| f.to_odata_string()).collect();
                format!("({})", rendered.join(" or "))
            }
            Filter::Not(filter) => format!("not ({})", filter.to_odata_string()),

            Filter::Raw(raw) => raw.clone(),
        }
    }
}

impl FilterValue {
    pub fn to_odata_string(&self) -> String {
        match self {
            FilterValue::String(s) => format!("'{}'", s.replace('\'', "''")),
            FilterValue::Number(n) => n.to_string(),
            FilterValue::Integer(i) => i.to_string(),
            FilterValue::Boolean(b) => b.to_string(),
            FilterValue::Null => "null".to_string(),
        }
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::String(value)
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::String(value.to_string())
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Number(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Integer(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        FilterValue::Integer(value as i64)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Boolean(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_filters() {
        assert_eq!(Filter::eq("CompanyID", 7).to_odata_string(), "CompanyID eq 7");
        assert_eq!(
            Filter::ne("State", "NSW").to_odata_string(),
            "State ne 'NSW'"
        );
        assert_eq!(
            Filter::ge("TotalAmount", 1500.5).to_odata_string(),
            "TotalAmount ge 1500.5"
        );
    }

    #[test]
    fn test_string_functions() {
        assert_eq!(
            Filter::contains("FirstName", "John").to_odata_string(),
            "contains(FirstName, 'John')"
        );
        assert_eq!(
            Filter::starts_with("Postcode", "20").to_odata_string(),
            "startswith(Postcode, '20')"
        );
    }

    #[test]
    fn test_logical_operators() {
        let or_filter = Filter::or(vec![
            Filter::eq("State", "NSW"),
            Filter::eq("City", "NSW"),
        ]);
        assert_eq!(
            or_filter.to_odata_string(),
            "(State eq 'NSW' or City eq 'NSW')"
        );

        let and_filter = Filter::and(vec![
            Filter::eq("Status", 1),
            Filter::not(Filter::eq("Email", FilterValue::Null)),
        ]);
        assert_eq!(
            and_filter.to_odata_string(),
            "(Status eq 1 and not (Email eq null))"
        );
    }

    #[test]
    fn test_nested_filters() {
        let filter = Filter::and(vec![
            Filter::eq("CompanyID", 3),
            Filter::or(vec![
                Filter::contains("FirstName", "Jane"),
                Filter::contains("LastName", "Doe"),
            ]),
        ]);
        assert_eq!(
            filter.to_odata_string(),
            "(CompanyID eq 3 and (contains(FirstName, 'Jane') or contains(LastName, 'Doe')))"
        );
    }

    #[test]
    fn test_quote_escaping() {
        assert_eq!(
            Filter::contains("LastName", "O'Connor").to_odata_string(),
            "contains(LastName, 'O''Connor')"
        );
        assert_eq!(
            Filter::eq("Name", "Jim's Blinds").to_odata_string(),
            "Name eq 'Jim''s Blinds'"
        );
    }

    #[test]
    fn test_raw_passthrough() {
        let raw = Filter::raw("Status eq 1 and DueDate lt 2026-01-01");
        assert_eq!(raw.to_odata_string(), "Status eq 1 and DueDate lt 2026-01-01");
    }
}
