mod jwt;
mod password;

pub use self::{jwt::*, password::*};
