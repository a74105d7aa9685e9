use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::applicants::domain::{
    Account, AccountId, Applicant, ApplicantDocument, ApplicantId, Dependent, Experience, Job,
    JobApplication, JobId, Language, Licence, Qualification, Reference, StoredFile,
};
use crate::applicants::memory::InMemoryApplicantRepository;
use crate::applicants::repository::{
    ApplicantRecord, ApplicantRepository, AppliedJob, RepositoryError,
};
use crate::applicants::storage::FileStorage;
use crate::applicants::{applicant_router, ApplicantProfileService, ProfileViewOptions};

pub(super) const APPLICANT: ApplicantId = ApplicantId(7);
pub(super) const ACCOUNT: AccountId = AccountId(70);

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub(super) fn stored(key: &str, file_name: &str, content_type: &str) -> StoredFile {
    StoredFile {
        key: key.to_string(),
        file_name: file_name.to_string(),
        content_type: Some(content_type.to_string()),
        size_bytes: 20_480,
    }
}

pub(super) fn account() -> Account {
    Account {
        id: ACCOUNT,
        email: "a@x.com".to_string(),
        auth_token: "T1".to_string(),
    }
}

pub(super) fn applicant() -> Applicant {
    Applicant {
        id: APPLICANT,
        account_id: ACCOUNT,
        first_name: Some("Ana".to_string()),
        last_name: Some("Silva".to_string()),
        alias_name: Some("Annie".to_string()),
        country_of_citizenship: Some("Portugal".to_string()),
        country_of_birth: Some("Brazil".to_string()),
        eu_passport: Some(true),
        dob: Some(date(1988, 4, 12)),
        gender: Some("F".to_string()),
        marital_status: Some("married".to_string()),
        other_citizenship: Some(true),
        other_citizenship_country: Some("Brazil".to_string()),
        address_line_1: Some("12 Harbour St".to_string()),
        suburb: Some("Ponsonby".to_string()),
        city: Some("Auckland".to_string()),
        postcode: Some("1011".to_string()),
        country: Some("New Zealand".to_string()),
        alt_email: Some("ana@home.example".to_string()),
        phone: Some("+64 21 555 0101".to_string()),
        skype: Some("ana.silva".to_string()),
        criminal_convicted: Some(false),
        link_to_video: Some("https://video.example/ana".to_string()),
        registered_teacher: Some(true),
        can_coach_activities: Some(false),
        interests: Some("Rowing".to_string()),
        skills: Some("Classroom management".to_string()),
        comments: Some("Available from January".to_string()),
        ..Applicant::default()
    }
}

pub(super) fn daughter() -> Dependent {
    Dependent {
        name: Some("Jo".to_string()),
        gender: Some("F".to_string()),
        dob: Some(date(2010, 1, 1)),
        relation: Some("daughter".to_string()),
    }
}

pub(super) fn experience() -> Experience {
    Experience {
        curriculum: Some("IB".to_string()),
        name_of_school: Some("Lisbon International".to_string()),
        country: Some("Portugal".to_string()),
        region: Some("Lisboa".to_string()),
        school_level: Some("Secondary".to_string()),
        position: Some("Maths teacher".to_string()),
        subjects_taught: Some("Mathematics".to_string()),
        from: Some(date(2015, 9, 1)),
        to: Some(date(2021, 7, 31)),
    }
}

pub(super) fn qualification() -> Qualification {
    Qualification {
        name: Some("BSc Mathematics".to_string()),
        place_of_study: Some("University of Porto".to_string()),
        country: Some("Portugal".to_string()),
        subjects: Some("Algebra, Statistics".to_string()),
        duration: Some("3 years".to_string()),
        date_of_completion: Some(date(2010, 6, 30)),
    }
}

pub(super) fn licence(copy: Option<StoredFile>) -> Licence {
    Licence {
        name: Some("Teaching Council".to_string()),
        country: Some("New Zealand".to_string()),
        registration_no: Some("TC-4411".to_string()),
        copy,
    }
}

pub(super) fn reference() -> Reference {
    Reference {
        name: Some("Head of Maths".to_string()),
        relation: Some("Line manager".to_string()),
        first_name: Some("Rui".to_string()),
        last_name: Some("Costa".to_string()),
        email: Some("rui@school.example".to_string()),
        address_line1: Some("1 School Rd".to_string()),
        country: Some("Portugal".to_string()),
        school_name: Some("Lisbon International".to_string()),
        worked_from: Some(date(2015, 9, 1)),
        worked_to: Some(date(2021, 7, 31)),
        reference_type: Some("professional".to_string()),
        ..Reference::default()
    }
}

pub(super) fn document(key: &str, file_name: &str) -> ApplicantDocument {
    ApplicantDocument {
        file: Some(stored(key, file_name, "application/pdf")),
    }
}

pub(super) fn job() -> Job {
    Job {
        id: JobId(3),
        title: "Secondary maths teacher".to_string(),
        school: Some("Auckland Grammar".to_string()),
        country: Some("New Zealand".to_string()),
    }
}

pub(super) fn full_record() -> ApplicantRecord {
    ApplicantRecord {
        applicant: applicant(),
        experiences: vec![experience()],
        qualifications: vec![qualification()],
        licences: vec![licence(Some(stored(
            "licences/7/tc.pdf",
            "tc.pdf",
            "application/pdf",
        )))],
        dependents: vec![daughter()],
        documents: vec![document("documents/7/police.pdf", "police.pdf")],
        languages: Vec::new(),
        references: vec![reference()],
        applications: vec![JobApplication {
            job_id: JobId(3),
            applied_on: Some(date(2024, 2, 1)),
        }],
    }
}

/// Storage double: a file exists when its key was registered.
#[derive(Default)]
pub(super) struct MemoryStorage {
    keys: Mutex<HashSet<String>>,
}

impl MemoryStorage {
    pub(super) fn with_keys(keys: &[&str]) -> Self {
        let storage = Self::default();
        for key in keys {
            storage.put(key);
        }
        storage
    }

    pub(super) fn put(&self, key: &str) {
        self.keys
            .lock()
            .expect("storage mutex poisoned")
            .insert(key.to_string());
    }
}

impl FileStorage for MemoryStorage {
    fn exists(&self, file: &StoredFile) -> bool {
        self.keys
            .lock()
            .expect("storage mutex poisoned")
            .contains(&file.key)
    }

    fn url_for(&self, file: &StoredFile) -> Option<String> {
        Some(format!("https://files.example/{}", file.key))
    }
}

pub(super) type TestService = ApplicantProfileService<InMemoryApplicantRepository, MemoryStorage>;

pub(super) fn seeded_repository(record: ApplicantRecord) -> Arc<InMemoryApplicantRepository> {
    let repository = Arc::new(InMemoryApplicantRepository::default());
    repository.insert_account(account()).expect("account stored");
    repository.insert_job(job()).expect("job stored");
    repository.insert_record(record).expect("applicant stored");
    repository
}

pub(super) fn build_service_with(
    record: ApplicantRecord,
    storage: MemoryStorage,
    options: ProfileViewOptions,
) -> (TestService, Arc<InMemoryApplicantRepository>) {
    let repository = seeded_repository(record);
    let service = ApplicantProfileService::new(repository.clone(), Arc::new(storage), options);
    (service, repository)
}

pub(super) fn build_service(record: ApplicantRecord) -> TestService {
    let storage = MemoryStorage::with_keys(&["licences/7/tc.pdf", "documents/7/police.pdf"]);
    build_service_with(record, storage, ProfileViewOptions::default()).0
}

pub(super) fn listing_options() -> ProfileViewOptions {
    ProfileViewOptions {
        list_experiences: true,
        list_extra_documents: true,
        ..ProfileViewOptions::default()
    }
}

pub(super) fn router_for(service: TestService) -> axum::Router {
    applicant_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 16 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Repository whose account table is unreachable while applicant rows still load.
pub(super) struct BrokenAccountRepository {
    pub(super) inner: InMemoryApplicantRepository,
}

impl ApplicantRepository for BrokenAccountRepository {
    fn applicant(&self, id: ApplicantId) -> Result<Option<Applicant>, RepositoryError> {
        self.inner.applicant(id)
    }

    fn account(&self, _id: AccountId) -> Result<Option<Account>, RepositoryError> {
        Err(RepositoryError::Unavailable("accounts offline".to_string()))
    }

    fn find_by_auth_token_and_email(
        &self,
        _auth_token: &str,
        _email: &str,
    ) -> Result<Option<Applicant>, RepositoryError> {
        Err(RepositoryError::Unavailable("accounts offline".to_string()))
    }

    fn dependents(&self, id: ApplicantId) -> Result<Vec<Dependent>, RepositoryError> {
        self.inner.dependents(id)
    }

    fn experiences(&self, id: ApplicantId) -> Result<Vec<Experience>, RepositoryError> {
        self.inner.experiences(id)
    }

    fn qualifications(&self, id: ApplicantId) -> Result<Vec<Qualification>, RepositoryError> {
        self.inner.qualifications(id)
    }

    fn licences(&self, id: ApplicantId) -> Result<Vec<Licence>, RepositoryError> {
        self.inner.licences(id)
    }

    fn documents(&self, id: ApplicantId) -> Result<Vec<ApplicantDocument>, RepositoryError> {
        self.inner.documents(id)
    }

    fn languages(&self, id: ApplicantId) -> Result<Vec<Language>, RepositoryError> {
        self.inner.languages(id)
    }

    fn references(&self, id: ApplicantId) -> Result<Vec<Reference>, RepositoryError> {
        self.inner.references(id)
    }

    fn applied_jobs(&self, id: ApplicantId) -> Result<Vec<AppliedJob>, RepositoryError> {
        self.inner.applied_jobs(id)
    }

    fn update_applicant(&self, applicant: Applicant) -> Result<(), RepositoryError> {
        self.inner.update_applicant(applicant)
    }

    fn delete_applicant(&self, id: ApplicantId) -> Result<(), RepositoryError> {
        self.inner.delete_applicant(id)
    }
}
