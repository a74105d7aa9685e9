use crate::infra::{build_profile_service, ProfileService};
use applicant_portal::applicants::ApplicantId;
use applicant_portal::config::AppConfig;
use applicant_portal::error::AppError;
use clap::{Args, ValueEnum};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ProfileSection {
    PersonalDetails,
    QualificationsAndLicences,
    Experiences,
    Extra,
    References,
    Jobs,
}

#[derive(Args, Debug)]
pub(crate) struct ProfileArgs {
    /// Applicant identifier
    #[arg(long)]
    pub(crate) applicant: u64,
    /// Profile section to render
    #[arg(long, value_enum, default_value_t = ProfileSection::PersonalDetails)]
    pub(crate) section: ProfileSection,
    /// JSON seed file (defaults to the bundled fixture)
    #[arg(long)]
    pub(crate) seed: Option<PathBuf>,
}

pub(crate) fn run_profile(args: ProfileArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let service = build_profile_service(&config, args.seed.as_deref())?;
    let payload = render_section(&service, ApplicantId(args.applicant), args.section)?;
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

pub(crate) fn render_section(
    service: &ProfileService,
    id: ApplicantId,
    section: ProfileSection,
) -> Result<Value, AppError> {
    let payload = match section {
        ProfileSection::PersonalDetails => serde_json::to_value(service.personal_details(id)?)?,
        ProfileSection::QualificationsAndLicences => {
            serde_json::to_value(service.qualifications_and_licences(id)?)?
        }
        ProfileSection::Experiences => serde_json::to_value(service.experiences(id)?)?,
        ProfileSection::Extra => serde_json::to_value(service.extra(id)?)?,
        ProfileSection::References => serde_json::to_value(service.references(id)?)?,
        ProfileSection::Jobs => serde_json::to_value(service.applied_jobs(id)?)?,
    };
    Ok(payload)
}
