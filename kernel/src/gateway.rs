mod invoice;
mod notification;
mod password;
mod token;

pub use self::{invoice::*, notification::*, password::*, token::*};
