//! Local filesystem storage for ride proof photos.

use std::path::PathBuf;

use uuid::Uuid;

use crate::server::error::AppError;

/// Subdirectory of the upload root holding ride photos.
const RIDE_PHOTO_DIR: &str = "rides";

/// Stores uploaded photos under a root directory.
///
/// Stored paths are returned relative to the root, e.g.
/// `rides/ride_id_4_6f1c..._name_front.jpg`. Every save gets its own random component, so
/// removing a file never touches another upload of the same name.
#[derive(Debug, Clone)]
pub struct PhotoStorage {
    root: PathBuf,
}

impl PhotoStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Absolute location of a stored relative path.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Writes the photo of a ride.
    ///
    /// # Arguments
    /// - `ride_id` - Ride the photo proves
    /// - `file_name` - Client-supplied file name, sanitized before use
    /// - `bytes` - File content
    ///
    /// # Returns
    /// - `Ok(String)` - Path of the stored file relative to the root
    /// - `Err(AppError::IoErr)` - Directory creation or write failed
    pub async fn save_ride_photo(
        &self,
        ride_id: i32,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, AppError> {
        tokio::fs::create_dir_all(self.root.join(RIDE_PHOTO_DIR)).await?;

        let relative = format!(
            "{}/ride_id_{}_{}_name_{}",
            RIDE_PHOTO_DIR,
            ride_id,
            Uuid::new_v4().simple(),
            sanitize_file_name(file_name)
        );
        tokio::fs::write(self.resolve(&relative), bytes).await?;

        tracing::debug!("Stored {} bytes at {}", bytes.len(), relative);

        Ok(relative)
    }

    /// Removes a stored file, logging instead of failing when it cannot be removed.
    pub async fn remove(&self, relative: &str) {
        if let Err(err) = tokio::fs::remove_file(self.resolve(relative)).await {
            tracing::warn!("Failed to remove stored photo {}: {}", relative, err);
        }
    }
}

/// Keeps the final path component and replaces anything outside `[A-Za-z0-9._-]`.
fn sanitize_file_name(file_name: &str) -> String {
    let base = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.trim_matches('.').is_empty() {
        "photo".to_string()
    } else {
        cleaned
    }
}
