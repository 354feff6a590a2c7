mod assistance;
mod car;
mod membership;
mod rental;
mod user;

pub use self::{assistance::*, car::*, membership::*, rental::*, user::*};
