use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct ExperienceYears(i32);

impl ExperienceYears {
    pub fn new(years: impl Into<i32>) -> Self {
        Self(years.into())
    }
}
