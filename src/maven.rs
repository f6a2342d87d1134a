use crate::error::{InstallError, Result};
use std::{fmt, str::FromStr};

pub const MAVEN_CENTRAL: &str = "https://repo1.maven.org/maven2";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MavenCoordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

impl MavenCoordinate {
    pub fn parse(mvn: impl AsRef<str>) -> Result<Self> {
        let mvn = mvn.as_ref();
        let malformed = || InstallError::MalformedCoordinate(mvn.to_string());
        let mut parts = mvn.split(':');

        let group = parts.next().filter(|v| !v.is_empty()).ok_or_else(malformed)?;
        let artifact = parts.next().filter(|v| !v.is_empty()).ok_or_else(malformed)?;
        let version = parts.next().filter(|v| !v.is_empty()).ok_or_else(malformed)?;

        if parts.next().is_some() {
            return Err(malformed());
        }

        Ok(Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        })
    }

    /// The group with every `.` turned into a `/`.
    pub fn group_path(&self) -> String {
        self.group.replace('.', "/")
    }

    pub fn file_name(&self) -> String {
        format!("{}-{}.jar", self.artifact, self.version)
    }

    /// Repository-relative path of the artifact's JAR.
    pub fn path(&self) -> String {
        let Self {
            artifact, version, ..
        } = self;

        format!(
            "{}/{artifact}/{version}/{}",
            self.group_path(),
            self.file_name()
        )
    }

    pub fn url_in(&self, repository: impl AsRef<str>) -> String {
        format!("{}/{}", repository.as_ref().trim_end_matches('/'), self.path())
    }

    pub fn url(&self) -> String {
        self.url_in(MAVEN_CENTRAL)
    }
}

impl FromStr for MavenCoordinate {
    type Err = InstallError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for MavenCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

/// Turns a `group:artifact:version` string into its Maven Central URL.
pub fn resolve(mvn: impl AsRef<str>) -> Result<String> {
    resolve_in(MAVEN_CENTRAL, mvn)
}

pub fn resolve_in(repository: impl AsRef<str>, mvn: impl AsRef<str>) -> Result<String> {
    Ok(MavenCoordinate::parse(mvn)?.url_in(repository))
}
