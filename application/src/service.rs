use time::format_description::FormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

mod account;
mod approval;
mod assistance;
mod booking;
mod catalog;
mod deposit;
mod membership;
mod payment;
mod report;

pub use self::{
    account::*, approval::*, assistance::*, booking::*, catalog::*, deposit::*, membership::*,
    payment::*, report::*,
};

const DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[day] [month repr:long] [year] [hour]:[minute]");
const DATE_SECONDS_FORMAT: &[FormatItem<'static>] =
    format_description!("[day] [month repr:long] [year] [hour]:[minute]:[second]");

/// "02 January 2006 15:04" style timestamps for outbound messages.
pub(crate) fn format_datetime(at: &OffsetDateTime) -> String {
    at.format(DATE_FORMAT).unwrap_or_else(|_| at.to_string())
}

pub(crate) fn format_datetime_seconds(at: &OffsetDateTime) -> String {
    at.format(DATE_SECONDS_FORMAT)
        .unwrap_or_else(|_| at.to_string())
}
