mod assistance;
mod car;
mod common;
mod driver;
mod membership;
mod package;
mod rental;
mod user;

pub use self::{
    assistance::*, car::*, common::*, driver::*, membership::*, package::*, rental::*, user::*,
};
