use mime::Mime;

use super::domain::StoredFile;

/// Attachment storage seam so views can resolve URLs without knowing the backend.
pub trait FileStorage: Send + Sync {
    fn exists(&self, file: &StoredFile) -> bool;
    fn url_for(&self, file: &StoredFile) -> Option<String>;
}

/// Resolve a file's public URL only when it is actually present in storage.
pub fn existing_url<S>(storage: &S, file: Option<&StoredFile>) -> Option<String>
where
    S: FileStorage + ?Sized,
{
    file.filter(|file| storage.exists(file))
        .and_then(|file| storage.url_for(file))
}

/// Thumbnail variants generated for profile pictures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PictureStyle {
    Original,
    Medium,
    Small,
    Thumb,
}

impl PictureStyle {
    pub const fn label(self) -> &'static str {
        match self {
            PictureStyle::Original => "original",
            PictureStyle::Medium => "medium",
            PictureStyle::Small => "small",
            PictureStyle::Thumb => "thumb",
        }
    }

    /// Bounding box for resized variants; the original is stored untouched.
    pub const fn geometry(self) -> Option<&'static str> {
        match self {
            PictureStyle::Original => None,
            PictureStyle::Medium => Some("300x300>"),
            PictureStyle::Small => Some("150x150>"),
            PictureStyle::Thumb => Some("100x100>"),
        }
    }
}

/// Expand a `:style` placeholder template such as `/images/:style/missing.png`.
pub fn placeholder_url(template: &str, style: PictureStyle) -> String {
    template.replace(":style", style.label())
}

const ONE_MEGABYTE: u64 = 1024 * 1024;

/// Size and content-type constraints for an attachment slot.
#[derive(Debug, Clone)]
pub struct AttachmentPolicy {
    slot: &'static str,
    max_bytes_exclusive: u64,
    accepted: Vec<Mime>,
}

impl AttachmentPolicy {
    pub fn picture() -> Self {
        Self {
            slot: "picture",
            max_bytes_exclusive: ONE_MEGABYTE,
            accepted: vec![mime::IMAGE_JPEG, mime::IMAGE_PNG],
        }
    }

    pub fn resume() -> Self {
        Self {
            slot: "resume",
            max_bytes_exclusive: ONE_MEGABYTE,
            accepted: vec![mime::APPLICATION_PDF],
        }
    }

    pub fn slot(&self) -> &'static str {
        self.slot
    }

    pub fn validate(&self, file: &StoredFile) -> Result<(), AttachmentError> {
        if file.size_bytes >= self.max_bytes_exclusive {
            return Err(AttachmentError::TooLarge {
                slot: self.slot,
                size_bytes: file.size_bytes,
                limit_bytes: self.max_bytes_exclusive,
            });
        }

        let parsed = file
            .content_type
            .as_deref()
            .and_then(|raw| raw.trim().parse::<Mime>().ok());

        match parsed {
            Some(found)
                if self
                    .accepted
                    .iter()
                    .any(|accepted| accepted.essence_str() == found.essence_str()) =>
            {
                Ok(())
            }
            _ => Err(AttachmentError::UnsupportedContentType {
                slot: self.slot,
                found: file.content_type.clone(),
            }),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AttachmentError {
    #[error("{slot} must be smaller than {limit_bytes} bytes (got {size_bytes})")]
    TooLarge {
        slot: &'static str,
        size_bytes: u64,
        limit_bytes: u64,
    },
    #[error("{slot} content type {found:?} is not accepted")]
    UnsupportedContentType {
        slot: &'static str,
        found: Option<String>,
    },
}
