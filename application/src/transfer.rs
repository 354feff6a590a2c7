mod assistance;
mod car;
mod driver;
mod membership;
mod package;
mod rental;
mod report;
mod user;

pub use self::{
    assistance::*, car::*, driver::*, membership::*, package::*, rental::*, report::*, user::*,
};
