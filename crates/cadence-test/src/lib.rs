//! Cadence - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `cadence_test::component::` paths.

pub mod component {
    pub use cadence_core::{config, constants};
    pub use cadence_recur::{calendar, generator, rule};
    pub use cadence_service::{model, repeat, view};

    pub mod error {
        pub use cadence_core::error::{CoreError, CoreResult};
        pub use cadence_recur::error::{RecurError, RecurResult};
        pub use cadence_service::error::{ServiceError, ServiceResult};
    }

    pub mod cli {
        pub use cadence_app::cli::*;
    }
}
