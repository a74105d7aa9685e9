//! JSON payloads consumed by the applicant profile screens.
//!
//! Field names are part of the client contract, including the historical
//! `referals` and `address_lin1` spellings.

use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{
    Applicant, ApplicantDocument, ApplicantId, Dependent, Experience, JobId, Licence,
    Qualification, Reference,
};
use super::repository::AppliedJob;
use super::storage::{existing_url, FileStorage};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalDetailsView {
    pub profile_pic_url: String,
    pub cv_url: Option<String>,
    pub personal_details: PersonalDetailsBlock,
    pub dependents: Vec<DependentView>,
    pub contact_details: ContactDetailsBlock,
    pub criminal_convictions: CriminalConvictionsBlock,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub link_to_video: Option<String>,
    pub alias_name: Option<String>,
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalDetailsBlock {
    pub country_of_citizenship: Option<String>,
    pub country_of_birth: Option<String>,
    pub eu_passport: Option<bool>,
    pub dob: Option<NaiveDate>,
    pub gender: Option<String>,
    pub marital_status: Option<String>,
    pub other_citizenship: Option<bool>,
    pub other_citizenship_country: Option<String>,
}

impl From<&Applicant> for PersonalDetailsBlock {
    fn from(applicant: &Applicant) -> Self {
        Self {
            country_of_citizenship: applicant.country_of_citizenship.clone(),
            country_of_birth: applicant.country_of_birth.clone(),
            eu_passport: applicant.eu_passport,
            dob: applicant.dob,
            gender: applicant.gender.clone(),
            marital_status: applicant.marital_status.clone(),
            other_citizenship: applicant.other_citizenship,
            other_citizenship_country: applicant.other_citizenship_country.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependentView {
    pub name: Option<String>,
    pub gender: Option<String>,
    pub dob: Option<NaiveDate>,
    pub relation: Option<String>,
}

impl From<&Dependent> for DependentView {
    fn from(dependent: &Dependent) -> Self {
        Self {
            name: dependent.name.clone(),
            gender: dependent.gender.clone(),
            dob: dependent.dob,
            relation: dependent.relation.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactDetailsBlock {
    pub address_line_1: Option<String>,
    pub address_line_2: Option<String>,
    pub suburb: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub email: Option<String>,
    pub alt_email: Option<String>,
    pub phone: Option<String>,
    pub skype: Option<String>,
}

impl ContactDetailsBlock {
    /// `email` comes from the owning account, not the applicant row.
    pub fn new(applicant: &Applicant, email: Option<String>) -> Self {
        Self {
            address_line_1: applicant.address_line_1.clone(),
            address_line_2: applicant.address_line_2.clone(),
            suburb: applicant.suburb.clone(),
            city: applicant.city.clone(),
            state: applicant.state.clone(),
            postcode: applicant.postcode.clone(),
            country: applicant.country.clone(),
            email,
            alt_email: applicant.alt_email.clone(),
            phone: applicant.phone.clone(),
            skype: applicant.skype.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CriminalConvictionsBlock {
    pub criminal_convicted: Option<bool>,
    pub criminal_convicted_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualificationsAndLicencesView {
    pub qualifications: Vec<QualificationView>,
    pub licences: Vec<LicenceView>,
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualificationView {
    pub name: Option<String>,
    pub place_of_study: Option<String>,
    pub country: Option<String>,
    pub subjects: Option<String>,
    pub duration: Option<String>,
    pub date_of_completion: Option<NaiveDate>,
}

impl From<&Qualification> for QualificationView {
    fn from(qualification: &Qualification) -> Self {
        Self {
            name: qualification.name.clone(),
            place_of_study: qualification.place_of_study.clone(),
            country: qualification.country.clone(),
            subjects: qualification.subjects.clone(),
            duration: qualification.duration.clone(),
            date_of_completion: qualification.date_of_completion,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LicenceView {
    pub name: Option<String>,
    pub country: Option<String>,
    pub registration_no: Option<String>,
    pub copy: Option<String>,
    pub copy_file_name: Option<String>,
}

impl LicenceView {
    pub fn new<S>(licence: &Licence, storage: &S) -> Self
    where
        S: FileStorage + ?Sized,
    {
        Self {
            name: licence.name.clone(),
            country: licence.country.clone(),
            registration_no: licence.registration_no.clone(),
            copy: existing_url(storage, licence.copy.as_ref()),
            copy_file_name: licence.copy.as_ref().map(|copy| copy.file_name.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperiencesView {
    pub experiences: Vec<ExperienceView>,
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceView {
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

impl From<&Experience> for ExperienceView {
    fn from(experience: &Experience) -> Self {
        Self {
            curriculum: experience.curriculum.clone(),
            name_of_school: experience.name_of_school.clone(),
            country: experience.country.clone(),
            region: experience.region.clone(),
            school_level: experience.school_level.clone(),
            position: experience.position.clone(),
            subjects_taught: experience.subjects_taught.clone(),
            from: experience.from,
            to: experience.to,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtraView {
    pub extra_docs: Vec<ExtraDocumentView>,
    pub registered_teacher: Option<bool>,
    pub can_coach_activities: Option<bool>,
    pub interests: Option<String>,
    pub skills: Option<String>,
    pub other_experiences: Option<String>,
    pub comments: Option<String>,
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtraDocumentView {
    pub file_name: Option<String>,
    pub file: Option<String>,
}

impl ExtraDocumentView {
    pub fn new<S>(document: &ApplicantDocument, storage: &S) -> Self
    where
        S: FileStorage + ?Sized,
    {
        Self {
            file_name: document.file.as_ref().map(|file| file.file_name.clone()),
            file: existing_url(storage, document.file.as_ref()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferencesView {
    pub referals: Vec<ReferenceView>,
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferenceView {
    pub name: Option<String>,
    pub relation: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address_lin1: Option<String>,
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

impl From<&Reference> for ReferenceView {
    fn from(reference: &Reference) -> Self {
        Self {
            name: reference.name.clone(),
            relation: reference.relation.clone(),
            first_name: reference.first_name.clone(),
            last_name: reference.last_name.clone(),
            email: reference.email.clone(),
            phone: reference.phone.clone(),
            address_lin1: reference.address_line1.clone(),
            address_line2: reference.address_line2.clone(),
            suburb: reference.suburb.clone(),
            city: reference.city.clone(),
            state: reference.state.clone(),
            country: reference.country.clone(),
            school_name: reference.school_name.clone(),
            school_city: reference.school_city.clone(),
            school_state: reference.school_state.clone(),
            school_country: reference.school_country.clone(),
            worked_from: reference.worked_from,
            worked_to: reference.worked_to,
            reference_type: reference.reference_type.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedJobsView {
    pub jobs: Vec<AppliedJobView>,
    pub success: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedJobView {
    pub id: JobId,
    pub title: String,
    pub school: Option<String>,
    pub country: Option<String>,
    pub applied_on: Option<NaiveDate>,
}

impl From<&AppliedJob> for AppliedJobView {
    fn from(applied: &AppliedJob) -> Self {
        Self {
            id: applied.job.id,
            title: applied.job.title.clone(),
            school: applied.job.school.clone(),
            country: applied.job.country.clone(),
            applied_on: applied.applied_on,
        }
    }
}

/// Payload returned by the token + email lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUserView {
    pub id: ApplicantId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub success: bool,
}
