use super::common::*;
use std::sync::Arc;

use crate::applicants::domain::{Account, AccountId, Applicant, ApplicantId};
use crate::applicants::memory::InMemoryApplicantRepository;
use crate::applicants::repository::ApplicantRecord;
use crate::applicants::{ApplicantProfileService, ProfileServiceError, ProfileViewOptions};

#[test]
fn finds_applicant_by_matching_token_and_email() {
    let service = build_service(full_record());

    let found = service
        .find_applicant("T1", "a@x.com")
        .expect("lookup succeeds")
        .expect("applicant found");

    assert_eq!(found.id, APPLICANT);
}

#[test]
fn wrong_token_is_not_found() {
    let service = build_service(full_record());

    let found = service
        .find_applicant("WRONG", "a@x.com")
        .expect("lookup succeeds");

    assert!(found.is_none());
}

#[test]
fn wrong_email_is_not_found() {
    let service = build_service(full_record());

    assert!(service
        .find_applicant("T1", "b@x.com")
        .expect("lookup succeeds")
        .is_none());
}

#[test]
fn account_without_applicant_is_not_found() {
    let repository = Arc::new(InMemoryApplicantRepository::default());
    repository.insert_account(account()).expect("account stored");
    let service = ApplicantProfileService::new(
        repository,
        Arc::new(MemoryStorage::default()),
        ProfileViewOptions::default(),
    );

    assert!(service
        .find_applicant("T1", "a@x.com")
        .expect("lookup succeeds")
        .is_none());
}

#[test]
fn lookup_picks_the_applicant_of_the_matching_account() {
    let repository = seeded_repository(full_record());
    repository
        .insert_account(Account {
            id: AccountId(71),
            email: "other@x.com".to_string(),
            auth_token: "T2".to_string(),
        })
        .expect("second account stored");
    repository
        .insert_record(ApplicantRecord::new(Applicant {
            id: ApplicantId(8),
            account_id: AccountId(71),
            first_name: Some("Ben".to_string()),
            ..Applicant::default()
        }))
        .expect("second applicant stored");
    let service = ApplicantProfileService::new(
        repository,
        Arc::new(MemoryStorage::default()),
        ProfileViewOptions::default(),
    );

    let current = service
        .current_user("T2", "other@x.com")
        .expect("lookup succeeds")
        .expect("current user found");

    assert_eq!(current.id, ApplicantId(8));
    assert_eq!(current.first_name.as_deref(), Some("Ben"));
    assert_eq!(current.email, "other@x.com");
    assert!(current.success);
}

#[test]
fn repository_failures_propagate_from_lookup() {
    let service = ApplicantProfileService::new(
        Arc::new(BrokenAccountRepository {
            inner: InMemoryApplicantRepository::default(),
        }),
        Arc::new(MemoryStorage::default()),
        ProfileViewOptions::default(),
    );

    assert!(matches!(
        service.find_applicant("T1", "a@x.com"),
        Err(ProfileServiceError::Repository(_))
    ));
}
