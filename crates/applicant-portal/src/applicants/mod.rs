//! Applicant profile aggregation: domain rows, repository and storage seams,
//! the read-side service, and the HTTP routes that expose it.

pub mod domain;
pub mod memory;
pub mod repository;
pub mod router;
pub mod seed;
pub mod service;
pub mod storage;
pub mod views;

#[cfg(test)]
mod tests;

pub use domain::{
    Account, AccountId, Applicant, ApplicantDocument, ApplicantId, Dependent, Experience, Job,
    JobApplication, JobId, Language, Licence, Qualification, Reference, StoredFile,
};
pub use memory::InMemoryApplicantRepository;
pub use repository::{ApplicantRecord, ApplicantRepository, AppliedJob, RepositoryError};
pub use router::applicant_router;
pub use seed::{SeedData, SeedImportError, SeedImporter, SeedSummary};
pub use service::{ApplicantProfileService, ProfileServiceError, ProfileViewOptions};
pub use storage::{AttachmentError, AttachmentPolicy, FileStorage, PictureStyle};
