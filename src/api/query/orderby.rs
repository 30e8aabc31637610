//! OData ordering construction

#[derive(Debug, Clone)]
pub enum OrderBy {
    Asc(String),
    Desc(String),
}

impl OrderBy {
    pub fn asc(field: impl Into<String>) -> Self {
        Self::Asc(field.into())
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::Desc(field.into())
    }

    pub fn to_odata_string(&self) -> String {
        match self {
            OrderBy::Asc(field) => format!("{} asc", field),
            OrderBy::Desc(field) => format!("{} desc", field),
        }
    }
}

/// Combines multiple ordering clauses into one `$orderby` value.
#[derive(Debug, Clone, Default)]
pub struct OrderByClause {
    clauses: Vec<OrderBy>,
}

impl OrderByClause {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, order: OrderBy) -> Self {
        self.clauses.push(order);
        self
    }

    pub fn to_odata_string(&self) -> Option<String> {
        if self.clauses.is_empty() {
            None
        } else {
            let rendered: Vec<String> = self.clauses.iter().map(|o| o.to_odata_string()).collect();
            Some(rendered.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_orderby() {
        assert_eq!(OrderBy::asc("LastName").to_odata_string(), "LastName asc");
        assert_eq!(OrderBy::desc("DueDate").to_odata_string(), "DueDate desc");
    }

    #[test]
    fn test_combined_clauses() {
        let clause = OrderByClause::new()
            .add(OrderBy::asc("State"))
            .add(OrderBy::desc("Postcode"));

        assert_eq!(
            clause.to_odata_string(),
            Some("State asc, Postcode desc".to_string())
        );
    }

    #[test]
    fn test_empty_clause_renders_nothing() {
        assert_eq!(OrderByClause::new().to_odata_string(), None);
    }
}
