use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::{
    Account, AccountId, Applicant, ApplicantDocument, ApplicantId, Dependent, Experience, Job,
    JobApplication, Language, Licence, Qualification, Reference,
};

/// An applicant row together with every collection it owns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    #[serde(flatten)]
    pub applicant: Applicant,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub qualifications: Vec<Qualification>,
    #[serde(default)]
    pub licences: Vec<Licence>,
    #[serde(default)]
    pub dependents: Vec<Dependent>,
    #[serde(default)]
    pub documents: Vec<ApplicantDocument>,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub references: Vec<Reference>,
    #[serde(default)]
    pub applications: Vec<JobApplication>,
}

impl ApplicantRecord {
    pub fn new(applicant: Applicant) -> Self {
        Self {
            applicant,
            ..Self::default()
        }
    }
}

/// A job reached through one of the applicant's applications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedJob {
    pub job: Job,
    pub applied_on: Option<NaiveDate>,
}

/// Read access to applicants and their owned collections.
///
/// Collection accessors return an empty list for unknown applicants; callers
/// check existence through [`ApplicantRepository::applicant`] first.
pub trait ApplicantRepository: Send + Sync {
    fn applicant(&self, id: ApplicantId) -> Result<Option<Applicant>, RepositoryError>;
    fn account(&self, id: AccountId) -> Result<Option<Account>, RepositoryError>;
    fn find_by_auth_token_and_email(
        &self,
        auth_token: &str,
        email: &str,
    ) -> Result<Option<Applicant>, RepositoryError>;

    fn dependents(&self, id: ApplicantId) -> Result<Vec<Dependent>, RepositoryError>;
    fn experiences(&self, id: ApplicantId) -> Result<Vec<Experience>, RepositoryError>;
    fn qualifications(&self, id: ApplicantId) -> Result<Vec<Qualification>, RepositoryError>;
    fn licences(&self, id: ApplicantId) -> Result<Vec<Licence>, RepositoryError>;
    fn documents(&self, id: ApplicantId) -> Result<Vec<ApplicantDocument>, RepositoryError>;
    fn languages(&self, id: ApplicantId) -> Result<Vec<Language>, RepositoryError>;
    fn references(&self, id: ApplicantId) -> Result<Vec<Reference>, RepositoryError>;
    fn applied_jobs(&self, id: ApplicantId) -> Result<Vec<AppliedJob>, RepositoryError>;

    fn update_applicant(&self, applicant: Applicant) -> Result<(), RepositoryError>;
    /// Remove the applicant, every owned collection, and the owning account.
    fn delete_applicant(&self, id: ApplicantId) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
