//! Static resource registry
//!
//! Maps each logical CRM resource to its collection path and to the ordered
//! list of fields exposed for selection. Hand-maintained; there is no
//! dynamic schema discovery against the remote service.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Activity,
    Company,
    Contact,
    Invoice,
    Job,
    Opportunity,
    Payment,
    LiveDiary,
}

/// One selectable field: human-readable label plus the API field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub display_name: &'static str,
    pub name: &'static str,
}

const fn field(display_name: &'static str, name: &'static str) -> Field {
    Field { display_name, name }
}

const CONTACT_FIELDS: &[Field] = &[
    field("ID", "ID"),
    field("First Name", "FirstName"),
    field("Last Name", "LastName"),
    field("Email", "Email"),
    field("Mobile", "Mobile"),
    field("Phone", "Phone"),
    field("Company ID", "CompanyID"),
    field("Address", "Address"),
    field("City", "City"),
    field("State", "State"),
    field("Postcode", "Postcode"),
];

const COMPANY_FIELDS: &[Field] = &[
    field("ID", "ID"),
    field("Name", "Name"),
    field("Trading Name", "TradingName"),
    field("ABN", "ABN"),
    field("Email", "Email"),
    field("Phone", "Phone"),
    field("Address", "Address"),
    field("City", "City"),
    field("State", "State"),
    field("Postcode", "Postcode"),
];

const ACTIVITY_FIELDS: &[Field] = &[
    field("ID", "ID"),
    field("Subject", "Subject"),
    field("Description", "Description"),
    field("Type", "Type"),
    field("Status", "Status"),
    field("Priority", "Priority"),
    field("Due Date", "DueDate"),
    field("Contact ID", "ContactID"),
    field("Company ID", "CompanyID"),
    field("Assigned To", "AssignedTo"),
];

const OPPORTUNITY_FIELDS: &[Field] = &[
    field("ID", "ID"),
    field("Name", "Name"),
    field("Description", "Description"),
    field("Stage", "Stage"),
    field("Probability", "Probability"),
    field("Amount", "Amount"),
    field("Close Date", "CloseDate"),
    field("Contact ID", "ContactID"),
    field("Company ID", "CompanyID"),
    field("Owner ID", "OwnerID"),
];

const JOB_FIELDS: &[Field] = &[
    field("ID", "ID"),
    field("Job Number", "JobNumber"),
    field("Description", "Description"),
    field("Status", "Status"),
    field("Start Date", "StartDate"),
    field("End Date", "EndDate"),
    field("Total Amount", "TotalAmount"),
    field("Contact ID", "ContactID"),
    field("Company ID", "CompanyID"),
    field("Site Address", "SiteAddress"),
];

const INVOICE_FIELDS: &[Field] = &[
    field("ID", "ID"),
    field("Invoice Number", "InvoiceNumber"),
    field("Date", "Date"),
    field("Due Date", "DueDate"),
    field("Status", "Status"),
    field("Total Amount", "TotalAmount"),
    field("Tax Amount", "TaxAmount"),
    field("Contact ID", "ContactID"),
    field("Company ID", "CompanyID"),
    field("Job ID", "JobID"),
];

const PAYMENT_FIELDS: &[Field] = &[
    field("ID", "ID"),
    field("Payment Number", "PaymentNumber"),
    field("Date", "Date"),
    field("Amount", "Amount"),
    field("Method", "Method"),
    field("Reference", "Reference"),
    field("Contact ID", "ContactID"),
    field("Company ID", "CompanyID"),
    field("Invoice ID", "InvoiceID"),
];

impl Resource {
    pub const ALL: [Resource; 8] = [
        Resource::Activity,
        Resource::Company,
        Resource::Contact,
        Resource::Invoice,
        Resource::Job,
        Resource::Opportunity,
        Resource::Payment,
        Resource::LiveDiary,
    ];

    /// URL path segment of the resource's collection endpoint.
    ///
    /// Live Diary has no collection; it is reachable only through its
    /// bespoke POST endpoints.
    pub fn collection_path(&self) -> Option<&'static str> {
        match self {
            Resource::Activity => Some("/Activities"),
            Resource::Company => Some("/Companies"),
            Resource::Contact => Some("/Contacts"),
            Resource::Invoice => Some("/Invoices"),
            Resource::Job => Some("/Jobs"),
            Resource::Opportunity => Some("/Opportunities"),
            Resource::Payment => Some("/Payments"),
            Resource::LiveDiary => None,
        }
    }

    /// Ordered list of selectable fields. Empty where none are defined.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            Resource::Activity => ACTIVITY_FIELDS,
            Resource::Company => COMPANY_FIELDS,
            Resource::Contact => CONTACT_FIELDS,
            Resource::Invoice => INVOICE_FIELDS,
            Resource::Job => JOB_FIELDS,
            Resource::Opportunity => OPPORTUNITY_FIELDS,
            Resource::Payment => PAYMENT_FIELDS,
            Resource::LiveDiary => &[],
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Activity => "activity",
            Resource::Company => "company",
            Resource::Contact => "contact",
            Resource::Invoice => "invoice",
            Resource::Job => "job",
            Resource::Opportunity => "opportunity",
            Resource::Payment => "payment",
            Resource::LiveDiary => "live-diary",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Resource {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "activity" => Ok(Resource::Activity),
            "company" => Ok(Resource::Company),
            "contact" => Ok(Resource::Contact),
            "invoice" => Ok(Resource::Invoice),
            "job" => Ok(Resource::Job),
            "opportunity" => Ok(Resource::Opportunity),
            "payment" => Ok(Resource::Payment),
            "live-diary" | "livediary" => Ok(Resource::LiveDiary),
            other => anyhow::bail!(
                "Unknown resource '{}'. Expected one of: activity, company, contact, invoice, job, opportunity, payment, live-diary",
                other
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collection_paths() {
        assert_eq!(Resource::Contact.collection_path(), Some("/Contacts"));
        assert_eq!(Resource::Opportunity.collection_path(), Some("/Opportunities"));
        assert_eq!(Resource::LiveDiary.collection_path(), None);
    }

    #[test]
    fn test_fields_are_ordered() {
        let fields = Resource::Contact.fields();
        assert_eq!(fields[0].name, "ID");
        assert_eq!(fields[1].name, "FirstName");
        assert_eq!(fields.len(), 11);
    }

    #[test]
    fn test_live_diary_has_no_fields() {
        assert!(Resource::LiveDiary.fields().is_empty());
    }

    #[test]
    fn test_from_str_round_trip() {
        for resource in Resource::ALL {
            let parsed: Resource = resource.to_string().parse().unwrap();
            assert_eq!(parsed, resource);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("user".parse::<Resource>().is_err());
    }
}
