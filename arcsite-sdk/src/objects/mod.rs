//! Request and response types of the HTTP API.

pub mod admin;
pub mod site;

pub use admin::{
    ApplyEditsRequest, LegalDocuments, LoginRequest, LoginResponse, OverviewResponse,
    SectionVisibility, WriteOutcome,
};
pub use site::{ContactLinks, SectionsResponse};
