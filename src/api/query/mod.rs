//! OData Query Building Module
//!
//! Provides the raw query options understood by the Insyte API plus a fluent
//! builder and typed filter/ordering helpers in front of them.

pub mod builder;
pub mod filters;
pub mod options;
pub mod orderby;

pub use builder::QueryBuilder;
pub use filters::{Filter, FilterValue};
pub use options::QueryOptions;
pub use orderby::{OrderBy, OrderByClause};
