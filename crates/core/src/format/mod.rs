//! Display formatting for amounts and timestamps.
//!
//! The display locale is fixed: amounts use the `en-IN` rupee style and
//! timestamps the `en-US` style. Neither is user-selectable.

pub mod amount;
pub mod datetime;

pub use amount::{DISPLAY_CURRENCY, format_amount};
pub use datetime::{FormattedDateTime, format_date_time};
