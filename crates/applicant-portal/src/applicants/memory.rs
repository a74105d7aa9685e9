use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::domain::{
    Account, AccountId, Applicant, ApplicantDocument, ApplicantId, Dependent, Experience, Job,
    JobId, Language, Licence, Qualification, Reference,
};
use super::repository::{ApplicantRecord, ApplicantRepository, AppliedJob, RepositoryError};

#[derive(Debug, Default)]
struct Tables {
    accounts: BTreeMap<AccountId, Account>,
    applicants: BTreeMap<ApplicantId, ApplicantRecord>,
    jobs: BTreeMap<JobId, Job>,
}

/// Mutex-guarded tables standing in for the relational store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryApplicantRepository {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryApplicantRepository {
    fn lock(&self) -> Result<MutexGuard<'_, Tables>, RepositoryError> {
        self.tables
            .lock()
            .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
    }

    pub fn insert_account(&self, account: Account) -> Result<(), RepositoryError> {
        let mut tables = self.lock()?;
        if tables.accounts.contains_key(&account.id) {
            return Err(RepositoryError::Conflict);
        }
        tables.accounts.insert(account.id, account);
        Ok(())
    }

    pub fn insert_job(&self, job: Job) -> Result<(), RepositoryError> {
        let mut tables = self.lock()?;
        if tables.jobs.contains_key(&job.id) {
            return Err(RepositoryError::Conflict);
        }
        tables.jobs.insert(job.id, job);
        Ok(())
    }

    /// Store an applicant with its collections. An account owns at most one applicant;
    /// the account itself does not have to exist yet.
    pub fn insert_record(&self, record: ApplicantRecord) -> Result<(), RepositoryError> {
        let mut tables = self.lock()?;
        let id = record.applicant.id;
        let account_taken = tables
            .applicants
            .values()
            .any(|existing| existing.applicant.account_id == record.applicant.account_id);
        if tables.applicants.contains_key(&id) || account_taken {
            return Err(RepositoryError::Conflict);
        }
        tables.applicants.insert(id, record);
        Ok(())
    }

    pub fn account_count(&self) -> Result<usize, RepositoryError> {
        Ok(self.lock()?.accounts.len())
    }

    fn collection<T, F>(&self, id: ApplicantId, select: F) -> Result<Vec<T>, RepositoryError>
    where
        T: Clone,
        F: FnOnce(&ApplicantRecord) -> &Vec<T>,
    {
        let tables = self.lock()?;
        Ok(tables
            .applicants
            .get(&id)
            .map(|record| select(record).clone())
            .unwrap_or_default())
    }
}

impl ApplicantRepository for InMemoryApplicantRepository {
    fn applicant(&self, id: ApplicantId) -> Result<Option<Applicant>, RepositoryError> {
        let tables = self.lock()?;
        Ok(tables
            .applicants
            .get(&id)
            .map(|record| record.applicant.clone()))
    }

    fn account(&self, id: AccountId) -> Result<Option<Account>, RepositoryError> {
        let tables = self.lock()?;
        Ok(tables.accounts.get(&id).cloned())
    }

    fn find_by_auth_token_and_email(
        &self,
        auth_token: &str,
        email: &str,
    ) -> Result<Option<Applicant>, RepositoryError> {
        let tables = self.lock()?;
        let applicant = tables
            .accounts
            .values()
            .filter(|account| account.auth_token == auth_token && account.email == email)
            .find_map(|account| {
                tables
                    .applicants
                    .values()
                    .find(|record| record.applicant.account_id == account.id)
            })
            .map(|record| record.applicant.clone());
        Ok(applicant)
    }

    fn dependents(&self, id: ApplicantId) -> Result<Vec<Dependent>, RepositoryError> {
        self.collection(id, |record| &record.dependents)
    }

    fn experiences(&self, id: ApplicantId) -> Result<Vec<Experience>, RepositoryError> {
        self.collection(id, |record| &record.experiences)
    }

    fn qualifications(&self, id: ApplicantId) -> Result<Vec<Qualification>, RepositoryError> {
        self.collection(id, |record| &record.qualifications)
    }

    fn licences(&self, id: ApplicantId) -> Result<Vec<Licence>, RepositoryError> {
        self.collection(id, |record| &record.licences)
    }

    fn documents(&self, id: ApplicantId) -> Result<Vec<ApplicantDocument>, RepositoryError> {
        self.collection(id, |record| &record.documents)
    }

    fn languages(&self, id: ApplicantId) -> Result<Vec<Language>, RepositoryError> {
        self.collection(id, |record| &record.languages)
    }

    fn references(&self, id: ApplicantId) -> Result<Vec<Reference>, RepositoryError> {
        self.collection(id, |record| &record.references)
    }

    fn applied_jobs(&self, id: ApplicantId) -> Result<Vec<AppliedJob>, RepositoryError> {
        let tables = self.lock()?;
        let Some(record) = tables.applicants.get(&id) else {
            return Ok(Vec::new());
        };

        Ok(record
            .applications
            .iter()
            .filter_map(|application| {
                tables.jobs.get(&application.job_id).map(|job| AppliedJob {
                    job: job.clone(),
                    applied_on: application.applied_on,
                })
            })
            .collect())
    }

    fn update_applicant(&self, applicant: Applicant) -> Result<(), RepositoryError> {
        let mut tables = self.lock()?;
        match tables.applicants.get_mut(&applicant.id) {
            Some(record) => {
                record.applicant = applicant;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn delete_applicant(&self, id: ApplicantId) -> Result<(), RepositoryError> {
        let mut tables = self.lock()?;
        let record = tables
            .applicants
            .remove(&id)
            .ok_or(RepositoryError::NotFound)?;
        tables.accounts.remove(&record.applicant.account_id);
        Ok(())
    }
}
