mod phone;
mod time;

pub use self::{phone::*, time::*};
