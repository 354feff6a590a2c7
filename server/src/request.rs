mod booking;
mod owner;
mod user;

pub use self::{booking::*, owner::*, user::*};
