//! Fluent construction of [`QueryOptions`]
//!
//! The builder is sugar over the raw options: typed filters and ordering
//! render to their string form at `build()` time.

use super::filters::Filter;
use super::options::QueryOptions;
use super::orderby::{OrderBy, OrderByClause};

#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    options: QueryOptions,
    orderby: OrderByClause,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the response to specific fields.
    pub fn select(mut self, fields: &[&str]) -> Self {
        self.options.select = Some(fields.join(","));
        self
    }

    /// Set a typed filter, replacing any previous one.
    pub fn filter(mut self, filter: Filter) -> Self {
        self.options.filter = Some(filter.to_odata_string());
        self
    }

    /// Set a hand-written filter expression verbatim.
    pub fn raw_filter(mut self, filter: impl Into<String>) -> Self {
        self.options.filter = Some(filter.into());
        self
    }

    /// Include related entities.
    pub fn expand(mut self, expansions: &[&str]) -> Self {
        self.options.expand = Some(expansions.join(","));
        self
    }

    /// Add an ordering clause; repeated calls accumulate.
    pub fn orderby(mut self, order: OrderBy) -> Self {
        self.orderby = self.orderby.add(order);
        self
    }

    /// Cap the number of results per page.
    pub fn top(mut self, top: u32) -> Self {
        self.options.top = Some(top);
        self
    }

    /// Skip a number of results from the start.
    pub fn skip(mut self, skip: u32) -> Self {
        self.options.skip = Some(skip);
        self
    }

    pub fn build(mut self) -> QueryOptions {
        self.options.orderby = self.orderby.to_odata_string();
        self.options
    }
}
