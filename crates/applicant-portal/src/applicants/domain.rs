use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier wrapper for applicant rows.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ApplicantId(pub u64);

/// Identifier wrapper for authentication accounts.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct AccountId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(pub u64);

impl std::fmt::Display for ApplicantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Authentication identity owning exactly one applicant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub email: String,
    pub auth_token: String,
}

/// Reference to a binary kept in attachment storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFile {
    pub key: String,
    pub file_name: String,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub size_bytes: u64,
}

/// Central profile record for a job candidate. `id` and `account_id` are required
/// on input; every other field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Applicant {
    pub id: ApplicantId,
    pub account_id: AccountId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub alias_name: Option<String>,
    pub country_of_citizenship: Option<String>,
    pub country_of_birth: Option<String>,
    pub eu_passport: Option<bool>,
    pub dob: Option<NaiveDate>,
    pub gender: Option<String>,
    pub marital_status: Option<String>,
    pub other_citizenship: Option<bool>,
    pub other_citizenship_country: Option<String>,
    pub address_line_1: Option<String>,
    pub address_line_2: Option<String>,
    pub suburb: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub alt_email: Option<String>,
    pub phone: Option<String>,
    pub skype: Option<String>,
    pub criminal_convicted: Option<bool>,
    pub criminal_convicted_value: Option<String>,
    pub link_to_video: Option<String>,
    pub registered_teacher: Option<bool>,
    pub can_coach_activities: Option<bool>,
    pub interests: Option<String>,
    pub skills: Option<String>,
    pub other_experiences: Option<String>,
    pub comments: Option<String>,
    pub picture: Option<StoredFile>,
    pub resume: Option<StoredFile>,
}

/// School or position history entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub curriculum: Option<String>,
    pub name_of_school: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub school_level: Option<String>,
    pub position: Option<String>,
    pub subjects_taught: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Academic credential.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Qualification {
    pub name: Option<String>,
    pub place_of_study: Option<String>,
    pub country: Option<String>,
    pub subjects: Option<String>,
    pub duration: Option<String>,
    pub date_of_completion: Option<NaiveDate>,
}

/// Professional licence with an optional scanned copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Licence {
    pub name: Option<String>,
    pub country: Option<String>,
    pub registration_no: Option<String>,
    pub copy: Option<StoredFile>,
}

/// Family member travelling with the applicant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dependent {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub dob: Option<NaiveDate>,
    pub relation: Option<String>,
}

/// Arbitrary supporting file uploaded by the applicant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicantDocument {
    pub file: Option<StoredFile>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub name: Option<String>,
    pub proficiency: Option<String>,
}

/// Referee or former employer contact.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reference {
    pub name: Option<String>,
    pub relation: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub suburb: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub school_name: Option<String>,
    pub school_city: Option<String>,
    pub school_state: Option<String>,
    pub school_country: Option<String>,
    pub worked_from: Option<NaiveDate>,
    pub worked_to: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub reference_type: Option<String>,
}

/// Advertised position an applicant can apply to. Shared across applicants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub title: String,
    #[serde(default)]
    pub school: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Join row between an applicant and a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobApplication {
    pub job_id: JobId,
    #[serde(default)]
    pub applied_on: Option<NaiveDate>,
}
