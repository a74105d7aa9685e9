use applicant_portal::applicants::{
    ApplicantProfileService, FileStorage, InMemoryApplicantRepository, SeedData, SeedImporter,
    StoredFile,
};
use applicant_portal::config::{AppConfig, AppEnvironment, StorageConfig};
use applicant_portal::error::AppError;
use metrics_exporter_prometheus::PrometheusHandle;
use std::io::Cursor;
use std::path::{Component, Path, PathBuf};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

const BUNDLED_SEED: &str = include_str!("../fixtures/applicants.json");

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type ProfileService =
    ApplicantProfileService<InMemoryApplicantRepository, DiskFileStorage>;

/// Attachments stored under a local directory and served from a URL prefix.
#[derive(Debug, Clone)]
pub(crate) struct DiskFileStorage {
    root: PathBuf,
    public_url: String,
}

impl DiskFileStorage {
    pub(crate) fn new(config: &StorageConfig) -> Self {
        Self {
            root: config.root.clone(),
            public_url: config.public_url.trim_end_matches('/').to_string(),
        }
    }

    /// Keys are relative paths; anything escaping the root never resolves.
    fn path_for(&self, key: &str) -> Option<PathBuf> {
        let relative = Path::new(key);
        let contained = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
        contained.then(|| self.root.join(relative))
    }
}

impl FileStorage for DiskFileStorage {
    fn exists(&self, file: &StoredFile) -> bool {
        self.path_for(&file.key)
            .map(|path| path.is_file())
            .unwrap_or(false)
    }

    fn url_for(&self, file: &StoredFile) -> Option<String> {
        self.path_for(&file.key)?;
        let escaped: Vec<_> = file.key.split('/').map(urlencoding::encode).collect();
        Some(format!("{}/{}", self.public_url, escaped.join("/")))
    }
}

fn read_seed(seed: Option<&Path>, environment: AppEnvironment) -> Result<SeedData, AppError> {
    match seed {
        Some(path) => Ok(SeedImporter::from_path(path)?),
        None if environment == AppEnvironment::Production => Ok(SeedData::default()),
        None => Ok(SeedImporter::from_reader(Cursor::new(BUNDLED_SEED))?),
    }
}

pub(crate) fn build_profile_service(
    config: &AppConfig,
    seed: Option<&Path>,
) -> Result<ProfileService, AppError> {
    let repository = Arc::new(InMemoryApplicantRepository::default());
    let summary = read_seed(seed, config.environment)?.load_into(&repository)?;
    info!(
        applicants = summary.applicants,
        storage_root = %config.storage.root.display(),
        "profile repository ready"
    );

    let storage = Arc::new(DiskFileStorage::new(&config.storage));
    Ok(ApplicantProfileService::new(
        repository,
        storage,
        config.profiles.clone(),
    ))
}
