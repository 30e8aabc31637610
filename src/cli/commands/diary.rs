use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::{Args, Subcommand};

use crate::api::livediary::{AreaFilter, AvailabilityRequest, BookLeadRequest, Lead};
use crate::api::operations::Operation;

#[derive(Args)]
pub struct DiaryCommands {
    #[command(subcommand)]
    pub command: DiarySubcommands,
}

#[derive(Subcommand)]
pub enum DiarySubcommands {
    /// Check available sales appointment slots
    Availability {
        /// Latitude of the appointment location (determines the timezone)
        #[arg(long, allow_hyphen_values = true)]
        latitude: f64,
        /// Longitude of the appointment location
        #[arg(long, allow_hyphen_values = true)]
        longitude: f64,
        /// Start of the search window, e.g. 2026-08-10T09:00:00
        #[arg(long)]
        from: NaiveDateTime,
        /// End of the search window
        #[arg(long)]
        to: NaiveDateTime,
        /// Appointment duration in minutes
        #[arg(long, default_value_t = 60)]
        minutes: u32,
        /// Check only rostered times instead of a 9am-5pm window
        #[arg(long)]
        roster: Option<bool>,
        /// Match sales rep skills to the products of interest
        #[arg(long)]
        skills: Option<bool>,
        /// Comma-separated product IDs, e.g. 1,2,3
        #[arg(long)]
        products: Option<String>,
        /// Restrict to a postcode
        #[arg(long)]
        postcode: Option<String>,
        /// Restrict to a state, e.g. NSW
        #[arg(long)]
        state: Option<String>,
        /// Restrict to a city
        #[arg(long)]
        city: Option<String>,
        /// Pretty print the output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Book a sales appointment for a lead
    Book {
        /// SlotKey returned by a preceding availability request
        #[arg(long)]
        slot_key: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        mobile: Option<String>,
        /// Lead has opted out of marketing
        #[arg(long)]
        marketing_opt_out: bool,
        /// Lead source ID to track where the lead came from
        #[arg(long)]
        lead_source: Option<u32>,
        /// Appointment duration in minutes
        #[arg(long)]
        duration: Option<u32>,
        /// Estimated travel time in minutes
        #[arg(long)]
        travel: Option<u32>,
        /// Pretty print the output
        #[arg(short, long)]
        pretty: bool,
    },
}

pub async fn handle(commands: DiaryCommands) -> Result<()> {
    match commands.command {
        DiarySubcommands::Availability {
            latitude,
            longitude,
            from,
            to,
            minutes,
            roster,
            skills,
            products,
            postcode,
            state,
            city,
            pretty,
        } => {
            let area_filter = AreaFilter {
                postcode,
                state,
                city,
            };
            let request = AvailabilityRequest {
                latitude,
                longitude,
                from_date: from,
                to_date: to,
                appointment_minutes: minutes,
                filter_by_roster: roster,
                filter_by_skills: skills,
                products_of_interests: products.as_deref().map(parse_product_ids).transpose()?,
                area_filter: (!area_filter.is_empty()).then_some(area_filter),
            };
            run_and_print(Operation::CheckAvailability(request), pretty).await
        }
        DiarySubcommands::Book {
            slot_key,
            first_name,
            last_name,
            address,
            email,
            phone,
            mobile,
            marketing_opt_out,
            lead_source,
            duration,
            travel,
            pretty,
        } => {
            let request = BookLeadRequest {
                slot_key,
                lead: Lead {
                    first_name,
                    last_name,
                    address,
                    email,
                    phone_number: phone,
                    mobile_number: mobile,
                    marketing_opt_out,
                },
                lead_source_id: lead_source,
                duration_mins: duration,
                estimated_travel_mins: travel,
            };
            run_and_print(Operation::BookLead(request), pretty).await
        }
    }
}

async fn run_and_print(operation: Operation, pretty: bool) -> Result<()> {
    let (client, _) = super::load_client()?;
    let records = operation.execute(&client).await?;
    super::print_records(&records, pretty)
}

fn parse_product_ids(products: &str) -> Result<Vec<u32>> {
    products
        .split(',')
        .map(|id| {
            id.trim()
                .parse::<u32>()
                .with_context(|| format!("Invalid product ID '{}'", id.trim()))
        })
        .collect()
}
