use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use super::domain::{Account, ApplicantId, Job, StoredFile};
use super::memory::InMemoryApplicantRepository;
use super::repository::{ApplicantRecord, RepositoryError};
use super::storage::{AttachmentError, AttachmentPolicy};

#[derive(Debug)]
pub enum SeedImportError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Repository(RepositoryError),
    Attachment {
        applicant: ApplicantId,
        source: AttachmentError,
    },
}

impl std::fmt::Display for SeedImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeedImportError::Io(err) => write!(f, "failed to read seed file: {}", err),
            SeedImportError::Json(err) => write!(f, "invalid seed data: {}", err),
            SeedImportError::Repository(err) => write!(f, "could not store seed data: {}", err),
            SeedImportError::Attachment { applicant, source } => {
                write!(f, "applicant {} has an invalid attachment: {}", applicant, source)
            }
        }
    }
}

impl std::error::Error for SeedImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeedImportError::Io(err) => Some(err),
            SeedImportError::Json(err) => Some(err),
            SeedImportError::Repository(err) => Some(err),
            SeedImportError::Attachment { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for SeedImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for SeedImportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<RepositoryError> for SeedImportError {
    fn from(err: RepositoryError) -> Self {
        Self::Repository(err)
    }
}

/// Fixture document describing accounts, jobs, and applicants with their collections.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub accounts: Vec<Account>,
    pub jobs: Vec<Job>,
    pub applicants: Vec<ApplicantRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub accounts: usize,
    pub jobs: usize,
    pub applicants: usize,
}

pub struct SeedImporter;

impl SeedImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<SeedData, SeedImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<SeedData, SeedImportError> {
        let mut data: SeedData = serde_json::from_reader(reader)?;

        for record in &mut data.applicants {
            let applicant = &mut record.applicant;
            let id = applicant.id;
            check_attachment(id, applicant.picture.as_mut(), &AttachmentPolicy::picture())?;
            check_attachment(id, applicant.resume.as_mut(), &AttachmentPolicy::resume())?;
            for licence in &mut record.licences {
                if let Some(copy) = licence.copy.as_mut() {
                    infer_content_type(copy);
                }
            }
            for document in &mut record.documents {
                if let Some(file) = document.file.as_mut() {
                    infer_content_type(file);
                }
            }
        }

        Ok(data)
    }
}

fn infer_content_type(file: &mut StoredFile) {
    if file.content_type.is_none() {
        file.content_type = mime_guess::from_path(&file.file_name)
            .first()
            .map(|guess| guess.essence_str().to_string());
    }
}

fn check_attachment(
    applicant: ApplicantId,
    file: Option<&mut StoredFile>,
    policy: &AttachmentPolicy,
) -> Result<(), SeedImportError> {
    let Some(file) = file else {
        return Ok(());
    };
    infer_content_type(file);
    policy
        .validate(file)
        .map_err(|source| SeedImportError::Attachment { applicant, source })
}

impl SeedData {
    pub fn load_into(
        self,
        repository: &InMemoryApplicantRepository,
    ) -> Result<SeedSummary, SeedImportError> {
        let summary = SeedSummary {
            accounts: self.accounts.len(),
            jobs: self.jobs.len(),
            applicants: self.applicants.len(),
        };

        for account in self.accounts {
            repository.insert_account(account)?;
        }
        for job in self.jobs {
            repository.insert_job(job)?;
        }
        for record in self.applicants {
            repository.insert_record(record)?;
        }

        info!(
            accounts = summary.accounts,
            jobs = summary.jobs,
            applicants = summary.applicants,
            "seed data loaded"
        );
        Ok(summary)
    }
}
