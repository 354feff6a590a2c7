mod account;
mod auth;
mod booking;
mod catalog;
mod owner;

pub use self::{account::*, auth::*, booking::*, catalog::*, owner::*};
