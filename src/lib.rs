// Workshop Console Library - Catalog and Enrollment Management
// This exposes the core components for testing and integration

pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod seed;
pub mod session;
pub mod telemetry;
pub mod workshop;

// Re-export key types for easy access
pub use catalog::{CatalogStats, CategoryFilter, WorkshopCatalog};
pub use config::WorkshopConsoleConfig;
pub use errors::{CatalogError, ValidationReason};
pub use seed::{initial_workshops, CATEGORIES};
pub use session::{EditorBuffer, EnrollmentForm, SubmitOutcome};
pub use telemetry::init_telemetry;
pub use workshop::{
    EnrollmentReceipt, EnrollmentRecord, EnrollmentRequest, Workshop, WorkshopDraft,
    WorkshopStatus,
};
