//! Remote artifact descriptor

use crate::config::PackageConfig;

/// One pinned remote release, selected by platform version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    /// Game version this release targets
    pub platform_version: String,

    /// Remote version id, part of the download URL
    pub remote_version_id: String,

    /// Version of the wrapped package (e.g. `2.6.15`)
    pub package_version: String,
}

impl ArtifactDescriptor {
    pub fn new(
        platform_version: impl Into<String>,
        remote_version_id: impl Into<String>,
        package_version: impl Into<String>,
    ) -> Self {
        Self {
            platform_version: platform_version.into(),
            remote_version_id: remote_version_id.into(),
            package_version: package_version.into(),
        }
    }

    /// `<platform>-<package>`, the version string embedded in the jar metadata
    pub fn composite_version_tag(&self) -> String {
        format!("{}-{}", self.platform_version, self.package_version)
    }

    /// File name the release is stored under in the managed directory
    pub fn file_name(&self, config: &PackageConfig) -> String {
        config.file_name(&self.platform_version, &self.package_version)
    }

    /// `<cdn>/data/<project>/versions/<remote version>/<file name>`
    pub fn download_url(&self, config: &PackageConfig) -> String {
        format!(
            "{}/data/{}/versions/{}/{}",
            config.cdn_base.trim_end_matches('/'),
            config.remote_project_id,
            self.remote_version_id,
            self.file_name(config)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composite_version_tag() {
        let descriptor = ArtifactDescriptor::new("1.20.4", "gxDkodfS", "2.6.15");
        assert_eq!(descriptor.composite_version_tag(), "1.20.4-2.6.15");
    }

    #[test]
    fn test_download_url() {
        let descriptor = ArtifactDescriptor::new("1.20.1", "NIH877ct", "2.6.15");
        assert_eq!(
            descriptor.download_url(&PackageConfig::default()),
            "https://cdn.modrinth.com/data/Nv2fQJo5/versions/NIH877ct/replaymod-1.20.1-2.6.15.jar"
        );
    }

    #[test]
    fn test_download_url_tolerates_trailing_slash() {
        let config = PackageConfig {
            cdn_base: "http://localhost:9000/".to_string(),
            ..PackageConfig::default()
        };
        let descriptor = ArtifactDescriptor::new("1.19.2", "BYJF82Q8", "2.6.14");
        assert_eq!(
            descriptor.download_url(&config),
            "http://localhost:9000/data/Nv2fQJo5/versions/BYJF82Q8/replaymod-1.19.2-2.6.14.jar"
        );
    }
}
