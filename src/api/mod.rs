//! Insyte Web API Module
//!
//! Client, query building, resource registry, typed Live Diary bodies and
//! batch execution for the Insyte CRM REST API.

pub mod client;
pub mod constants;
pub mod error;
pub mod livediary;
pub mod operations;
pub mod query;
pub mod resources;

pub use client::InsyteClient;
pub use error::ApiError;
pub use livediary::{AreaFilter, AvailabilityRequest, BookLeadRequest, Lead};
pub use operations::{Operation, Operations};
pub use query::{Filter, FilterValue, OrderBy, QueryBuilder, QueryOptions};
pub use resources::{Field, Resource};
