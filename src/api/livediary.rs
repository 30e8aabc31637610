//! Typed request bodies for the Live Diary sales endpoints
//!
//! Availability and lead booking are POST endpoints with fixed JSON shapes
//! rather than OData collections. Dates are local to the appointment
//! location; the service derives the timezone from the coordinates.

use chrono::NaiveDateTime;
use serde::Serialize;

/// Body for `POST /LiveDiary/Sales/Availability`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub from_date: NaiveDateTime,
    pub to_date: NaiveDateTime,
    pub appointment_minutes: u32,
    /// Check only rostered times (true) or a 9am-5pm window (false).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_by_roster: Option<bool>,
    /// Match sales rep skills to the products of interest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_by_skills: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products_of_interests: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_filter: Option<AreaFilter>,
}

/// Area restriction for availability searches. Unset members are sent as
/// explicit nulls, matching the wire shape the service expects.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaFilter {
    pub postcode: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
}

impl AreaFilter {
    pub fn is_empty(&self) -> bool {
        self.postcode.is_none() && self.state.is_none() && self.city.is_none()
    }
}

/// Body for `POST /LiveDiary/Sales/BookLead`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookLeadRequest {
    /// SlotKey returned by a preceding availability request.
    pub slot_key: String,
    pub lead: Lead,
    #[serde(rename = "leadSourceID", skip_serializing_if = "Option::is_none")]
    pub lead_source_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_mins: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_travel_mins: Option<u32>,
}

/// Lead contact details. Optional members serialize as nulls rather than
/// being omitted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub mobile_number: Option<String>,
    pub marketing_opt_out: bool,
}
