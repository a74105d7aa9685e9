use std::sync::Arc;

use tracing::{debug, warn};

use super::domain::{Applicant, ApplicantId, StoredFile};
use super::repository::{ApplicantRepository, RepositoryError};
use super::storage::{
    existing_url, placeholder_url, AttachmentError, AttachmentPolicy, FileStorage, PictureStyle,
};
use super::views::{
    AppliedJobView, AppliedJobsView, ContactDetailsBlock, CriminalConvictionsBlock,
    CurrentUserView, DependentView, ExperienceView, ExperiencesView, ExtraDocumentView, ExtraView,
    LicenceView, PersonalDetailsBlock, PersonalDetailsView, QualificationView,
    QualificationsAndLicencesView, ReferenceView, ReferencesView,
};

/// Switches for the profile sections whose legacy payloads never listed their rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileViewOptions {
    /// Template for the picture placeholder, `:style` is replaced by the style name.
    pub missing_picture_url: String,
    /// List stored experiences instead of the legacy always-empty list.
    pub list_experiences: bool,
    /// List uploaded documents instead of the legacy always-empty list.
    pub list_extra_documents: bool,
}

impl Default for ProfileViewOptions {
    fn default() -> Self {
        Self {
            missing_picture_url: "/images/:style/missing.png".to_string(),
            list_experiences: false,
            list_extra_documents: false,
        }
    }
}

/// Read-side facade assembling profile sections from the repository and file storage.
pub struct ApplicantProfileService<R, S> {
    repository: Arc<R>,
    storage: Arc<S>,
    options: ProfileViewOptions,
}

impl<R, S> ApplicantProfileService<R, S>
where
    R: ApplicantRepository + 'static,
    S: FileStorage + 'static,
{
    pub fn new(repository: Arc<R>, storage: Arc<S>, options: ProfileViewOptions) -> Self {
        Self {
            repository,
            storage,
            options,
        }
    }

    pub fn options(&self) -> &ProfileViewOptions {
        &self.options
    }

    fn load(&self, id: ApplicantId) -> Result<Applicant, ProfileServiceError> {
        self.repository
            .applicant(id)?
            .ok_or(ProfileServiceError::ApplicantNotFound(id))
    }

    /// Email of the owning account, or `None` when the link cannot be followed.
    fn account_email(&self, applicant: &Applicant) -> Option<String> {
        match self.repository.account(applicant.account_id) {
            Ok(Some(account)) => Some(account.email),
            Ok(None) => {
                debug!(applicant_id = %applicant.id, "owning account missing; email omitted");
                None
            }
            Err(err) => {
                warn!(applicant_id = %applicant.id, error = %err, "account lookup failed; email omitted");
                None
            }
        }
    }

    pub fn picture_url(&self, applicant: &Applicant, style: PictureStyle) -> String {
        applicant
            .picture
            .as_ref()
            .and_then(|picture| self.storage.url_for(picture))
            .unwrap_or_else(|| placeholder_url(&self.options.missing_picture_url, style))
    }

    pub fn personal_details(
        &self,
        id: ApplicantId,
    ) -> Result<PersonalDetailsView, ProfileServiceError> {
        let applicant = self.load(id)?;
        let dependents = self.repository.dependents(id)?;
        let email = self.account_email(&applicant);

        Ok(PersonalDetailsView {
            profile_pic_url: self.picture_url(&applicant, PictureStyle::Original),
            cv_url: existing_url(self.storage.as_ref(), applicant.resume.as_ref()),
            personal_details: PersonalDetailsBlock::from(&applicant),
            dependents: dependents.iter().map(DependentView::from).collect(),
            contact_details: ContactDetailsBlock::new(&applicant, email),
            criminal_convictions: CriminalConvictionsBlock {
                criminal_convicted: applicant.criminal_convicted,
                criminal_convicted_value: applicant.criminal_convicted_value.clone(),
            },
            first_name: applicant.first_name,
            last_name: applicant.last_name,
            link_to_video: applicant.link_to_video,
            alias_name: applicant.alias_name,
            success: true,
        })
    }

    pub fn qualifications_and_licences(
        &self,
        id: ApplicantId,
    ) -> Result<QualificationsAndLicencesView, ProfileServiceError> {
        self.load(id)?;
        let qualifications = self.repository.qualifications(id)?;
        let licences = self.repository.licences(id)?;
        let storage = self.storage.as_ref();

        Ok(QualificationsAndLicencesView {
            qualifications: qualifications.iter().map(QualificationView::from).collect(),
            licences: licences
                .iter()
                .map(|licence| LicenceView::new(licence, storage))
                .collect(),
            success: true,
        })
    }

    pub fn experiences(&self, id: ApplicantId) -> Result<ExperiencesView, ProfileServiceError> {
        self.load(id)?;
        let experiences = if self.options.list_experiences {
            self.repository
                .experiences(id)?
                .iter()
                .map(ExperienceView::from)
                .collect()
        } else {
            Vec::new()
        };

        Ok(ExperiencesView {
            experiences,
            success: true,
        })
    }

    pub fn extra(&self, id: ApplicantId) -> Result<ExtraView, ProfileServiceError> {
        let applicant = self.load(id)?;
        let extra_docs = if self.options.list_extra_documents {
            let storage = self.storage.as_ref();
            self.repository
                .documents(id)?
                .iter()
                .map(|document| ExtraDocumentView::new(document, storage))
                .collect()
        } else {
            Vec::new()
        };

        Ok(ExtraView {
            extra_docs,
            registered_teacher: applicant.registered_teacher,
            can_coach_activities: applicant.can_coach_activities,
            interests: applicant.interests,
            skills: applicant.skills,
            other_experiences: applicant.other_experiences,
            comments: applicant.comments,
            success: true,
        })
    }

    pub fn references(&self, id: ApplicantId) -> Result<ReferencesView, ProfileServiceError> {
        self.load(id)?;
        let references = self.repository.references(id)?;

        Ok(ReferencesView {
            referals: references.iter().map(ReferenceView::from).collect(),
            success: true,
        })
    }

    pub fn applied_jobs(&self, id: ApplicantId) -> Result<AppliedJobsView, ProfileServiceError> {
        self.load(id)?;
        let jobs = self.repository.applied_jobs(id)?;

        Ok(AppliedJobsView {
            jobs: jobs.iter().map(AppliedJobView::from).collect(),
            success: true,
        })
    }

    /// Applicant whose owning account matches both the token and the email.
    pub fn find_applicant(
        &self,
        auth_token: &str,
        email: &str,
    ) -> Result<Option<Applicant>, ProfileServiceError> {
        Ok(self
            .repository
            .find_by_auth_token_and_email(auth_token, email)?)
    }

    pub fn current_user(
        &self,
        auth_token: &str,
        email: &str,
    ) -> Result<Option<CurrentUserView>, ProfileServiceError> {
        let view = self
            .find_applicant(auth_token, email)?
            .map(|applicant| CurrentUserView {
                id: applicant.id,
                first_name: applicant.first_name,
                last_name: applicant.last_name,
                email: email.to_string(),
                success: true,
            });
        Ok(view)
    }

    pub fn attach_picture(
        &self,
        id: ApplicantId,
        file: StoredFile,
    ) -> Result<Applicant, ProfileServiceError> {
        self.attach(id, file, &AttachmentPolicy::picture(), |applicant, file| {
            applicant.picture = Some(file)
        })
    }

    pub fn attach_resume(
        &self,
        id: ApplicantId,
        file: StoredFile,
    ) -> Result<Applicant, ProfileServiceError> {
        self.attach(id, file, &AttachmentPolicy::resume(), |applicant, file| {
            applicant.resume = Some(file)
        })
    }

    fn attach<F>(
        &self,
        id: ApplicantId,
        file: StoredFile,
        policy: &AttachmentPolicy,
        assign: F,
    ) -> Result<Applicant, ProfileServiceError>
    where
        F: FnOnce(&mut Applicant, StoredFile),
    {
        policy.validate(&file)?;
        let mut applicant = self.load(id)?;
        debug!(applicant_id = %id, slot = policy.slot(), key = %file.key, "attaching file");
        assign(&mut applicant, file);
        self.repository.update_applicant(applicant.clone())?;
        Ok(applicant)
    }

    /// Delete the applicant together with its collections and owning account.
    pub fn remove_applicant(&self, id: ApplicantId) -> Result<(), ProfileServiceError> {
        match self.repository.delete_applicant(id) {
            Ok(()) => Ok(()),
            Err(RepositoryError::NotFound) => Err(ProfileServiceError::ApplicantNotFound(id)),
            Err(other) => Err(other.into()),
        }
    }
}

/// Error raised by the profile service.
#[derive(Debug, thiserror::Error)]
pub enum ProfileServiceError {
    #[error("applicant {0} not found")]
    ApplicantNotFound(ApplicantId),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Attachment(#[from] AttachmentError),
}
