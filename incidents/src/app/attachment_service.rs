//! Attachment resolver
//!
//! Maps attachment names to download URLs. The bytes themselves are served by
//! the static file layer mounted under the same prefix.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::domain::entities::AttachmentMetadata;

pub struct AttachmentService {
    public_base_url: String,
    root: PathBuf,
}

impl AttachmentService {
    pub fn new(config: &Config) -> Self {
        Self {
            public_base_url: config.public_base_url.clone(),
            root: config.attachments_dir.clone(),
        }
    }

    /// Directory the attachment bytes are served from
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Describe an attachment without touching the filesystem
    pub fn resolve(&self, filename: &str) -> AttachmentMetadata {
        AttachmentMetadata::new(&self.public_base_url, filename)
    }
}
