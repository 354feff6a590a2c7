mod twilio;
mod xendit;

pub use self::{twilio::*, xendit::*};
