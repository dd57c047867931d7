use crate::{env_or_default, ConfigError, FromEnv};
use std::path::{Path, PathBuf};

/// Configuration for on-disk file placement (user documents, pet images).
///
/// Uploaded files land under `root`:
/// - user documents under `<root>/documents`
/// - pet images under `<root>/img/pets`
#[derive(Clone, Debug)]
pub struct UploadConfig {
    pub root: PathBuf,
}

impl UploadConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory where user documents are written
    pub fn documents_dir(&self) -> PathBuf {
        self.root.join("documents")
    }

    /// Directory where pet images are written
    pub fn pet_images_dir(&self) -> PathBuf {
        self.root.join("img").join("pets")
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FromEnv for UploadConfig {
    /// Reads UPLOAD_DIR, defaulting to ./public
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            root: PathBuf::from(env_or_default("UPLOAD_DIR", "public")),
        })
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("public"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_config_default_root() {
        temp_env::with_var_unset("UPLOAD_DIR", || {
            let config = UploadConfig::from_env().unwrap();
            assert_eq!(config.root(), Path::new("public"));
            assert_eq!(config.documents_dir(), Path::new("public/documents"));
            assert_eq!(config.pet_images_dir(), Path::new("public/img/pets"));
        });
    }

    #[test]
    fn test_upload_config_custom_root() {
        temp_env::with_var("UPLOAD_DIR", Some("/var/data/uploads"), || {
            let config = UploadConfig::from_env().unwrap();
            assert_eq!(config.root(), Path::new("/var/data/uploads"));
            assert_eq!(
                config.documents_dir(),
                Path::new("/var/data/uploads/documents")
            );
        });
    }
}
