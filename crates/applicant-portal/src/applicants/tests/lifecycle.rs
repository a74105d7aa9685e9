use super::common::*;

use crate::applicants::domain::{Applicant, ApplicantId};
use crate::applicants::repository::{ApplicantRecord, ApplicantRepository, RepositoryError};
use crate::applicants::{AttachmentError, ProfileServiceError, ProfileViewOptions};

#[test]
fn removing_an_applicant_cascades_to_children_and_account() {
    let (service, repository) =
        build_service_with(full_record(), MemoryStorage::default(), ProfileViewOptions::default());

    service.remove_applicant(APPLICANT).expect("applicant removed");

    assert!(repository.applicant(APPLICANT).expect("readable").is_none());
    assert!(repository.dependents(APPLICANT).expect("readable").is_empty());
    assert!(repository.references(APPLICANT).expect("readable").is_empty());
    assert!(repository.applied_jobs(APPLICANT).expect("readable").is_empty());
    assert!(repository.account(ACCOUNT).expect("readable").is_none());
    assert_eq!(repository.account_count().expect("readable"), 0);
    assert!(service
        .find_applicant("T1", "a@x.com")
        .expect("lookup succeeds")
        .is_none());
}

#[test]
fn removing_unknown_applicant_is_not_found() {
    let service = build_service(full_record());

    assert!(matches!(
        service.remove_applicant(ApplicantId(404)),
        Err(ProfileServiceError::ApplicantNotFound(ApplicantId(404)))
    ));
}

#[test]
fn an_account_owns_at_most_one_applicant() {
    let repository = seeded_repository(full_record());

    let duplicate = ApplicantRecord::new(Applicant {
        id: ApplicantId(99),
        account_id: ACCOUNT,
        ..Applicant::default()
    });

    assert!(matches!(
        repository.insert_record(duplicate),
        Err(RepositoryError::Conflict)
    ));
}

#[test]
fn attach_resume_updates_personal_details() {
    let storage = MemoryStorage::default();
    storage.put("resumes/7/cv.pdf");
    let (service, _) = build_service_with(
        ApplicantRecord::new(applicant()),
        storage,
        ProfileViewOptions::default(),
    );

    service
        .attach_resume(
            APPLICANT,
            stored("resumes/7/cv.pdf", "cv.pdf", "application/pdf"),
        )
        .expect("resume attached");

    let view = service.personal_details(APPLICANT).expect("personal view");
    assert_eq!(
        view.cv_url.as_deref(),
        Some("https://files.example/resumes/7/cv.pdf")
    );
}

#[test]
fn attach_picture_rejects_pdf_uploads() {
    let service = build_service(ApplicantRecord::new(applicant()));

    let result = service.attach_picture(
        APPLICANT,
        stored("pictures/7/scan.pdf", "scan.pdf", "application/pdf"),
    );

    assert!(matches!(
        result,
        Err(ProfileServiceError::Attachment(
            AttachmentError::UnsupportedContentType { .. }
        ))
    ));
    let view = service.personal_details(APPLICANT).expect("personal view");
    assert_eq!(view.profile_pic_url, "/images/original/missing.png");
}

#[test]
fn attach_picture_rejects_oversized_files() {
    let service = build_service(ApplicantRecord::new(applicant()));
    let mut picture = stored("pictures/7/big.jpg", "big.jpg", "image/jpeg");
    picture.size_bytes = 2 * 1024 * 1024;

    assert!(matches!(
        service.attach_picture(APPLICANT, picture),
        Err(ProfileServiceError::Attachment(AttachmentError::TooLarge { .. }))
    ));
}
