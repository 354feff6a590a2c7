use serde::{Deserialize, Serialize};
use vodca::References;

/// Descriptive catalog attributes. Managed by catalog tooling outside this
/// service, so they travel as one read-only block.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References)]
pub struct CarProfile {
    category: String,
    make: String,
    model: String,
    transmission: String,
    year: i32,
    fuel_type: String,
    class: String,
}

impl CarProfile {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        category: impl Into<String>,
        make: impl Into<String>,
        model: impl Into<String>,
        transmission: impl Into<String>,
        year: i32,
        fuel_type: impl Into<String>,
        class: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            make: make.into(),
            model: model.into(),
            transmission: transmission.into(),
            year,
            fuel_type: fuel_type.into(),
            class: class.into(),
        }
    }
}
