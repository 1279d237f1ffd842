//! Small typed helpers used around the POC service.
//!
//! - [`profile`]: user profile validation and display formatting
//! - [`pricing`]: price adjustments, customer discount rates, order totals
//! - [`ids`]: short random identifiers
//! - [`json`]: fallible JSON parsing
//! - [`status`]: HTTP status reason texts

pub mod error;
pub mod ids;
pub mod json;
pub mod pricing;
pub mod profile;
pub mod status;

pub use error::UtilsError;
pub use ids::generate_id;
pub use json::parse_json_data;
pub use pricing::{
    CustomerType, LineItem, PriceCategory, calc_total, calculate_price, discount_rate,
};
pub use profile::{
    PersonName, UserProfileInput, UserSummary, format_user_name, process_user_data,
};
pub use status::status_message;
