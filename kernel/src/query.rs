mod car;
mod driver;
mod membership;
mod package;
mod rental;
mod user;

pub use self::{car::*, driver::*, membership::*, package::*, rental::*, user::*};
