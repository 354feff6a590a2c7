pub use crate::error::*;

mod database;
mod entity;
mod error;
mod gateway;
mod modify;
mod query;

#[cfg(feature = "prelude")]
pub mod prelude {
    pub mod entity {
        pub use crate::entity::*;
    }
}

#[cfg(feature = "interface")]
pub mod interface {
    pub mod database {
        pub use crate::database::*;
    }
    pub mod gateway {
        pub use crate::gateway::*;
    }
    pub mod query {
        pub use crate::query::*;
    }
    pub mod update {
        pub use crate::modify::*;
    }
}
