use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::Config;
use crate::error::{PomError, PomResult};
use crate::options::Options;
use crate::pom;

/// A generated file and the text that goes into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub contents: String,
}

#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub jdk: String,
    pub dependencies: Vec<String>,
}

impl Project {
    /// Builds the project from the positional args: the first is the name,
    /// the rest are dependency descriptors.
    pub fn from_options(options: &Options, config: &Config) -> PomResult<Self> {
        let name = options.project_name().unwrap_or_default();
        validate_project_name(name)?;

        Ok(Project {
            name: name.to_string(),
            group_id: name.to_string(),
            artifact_id: name.to_string(),
            version: config.defaults.version.clone(),
            jdk: options.get("jdk", &config.defaults.jdk).to_string(),
            dependencies: options.dependencies().to_vec(),
        })
    }

    /// Renders every artifact in write order: manifest, main stub, test
    /// stub, logging config.
    pub fn render(&self, base_dir: &Path) -> PomResult<Vec<Artifact>> {
        let layout = Layout::new(base_dir, &self.name);

        let manifest = pom::render_manifest(
            &self.group_id,
            &self.artifact_id,
            &self.version,
            &self.dependencies,
            &self.jdk,
        )?;
        let package_line = pom::package_line(&layout.package_name());

        Ok(vec![
            Artifact {
                path: layout.manifest_path(),
                contents: manifest,
            },
            Artifact {
                path: layout.main_path(),
                contents: format!("{package_line}{}", pom::JAVA_MAIN),
            },
            Artifact {
                path: layout.test_path(),
                contents: format!("{package_line}{}", pom::JAVA_TEST),
            },
            Artifact {
                path: layout.log4j_path(),
                contents: pom::LOG4J.to_string(),
            },
        ])
    }
}

/// Accepts names made only of ASCII letters, digits, `_` and `-`.
pub fn validate_project_name(name: &str) -> PomResult<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(PomError::InvalidProjectName(name.to_string()))
    }
}

/// Where each generated file lives for a given project name.
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
    package: Vec<String>,
}

impl Layout {
    pub fn new(base_dir: &Path, project_name: &str) -> Self {
        Layout {
            root: base_dir.join(project_name),
            package: project_name
                .to_lowercase()
                .split('-')
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn package_name(&self) -> String {
        self.package.join(".")
    }

    pub fn package_path(&self) -> PathBuf {
        self.package.iter().collect()
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.root.join("pom.xml")
    }

    pub fn main_path(&self) -> PathBuf {
        self.root
            .join("src/main/java")
            .join(self.package_path())
            .join("App.java")
    }

    pub fn test_path(&self) -> PathBuf {
        self.root
            .join("src/test/java")
            .join(self.package_path())
            .join("AppTest.java")
    }

    pub fn log4j_path(&self) -> PathBuf {
        self.root.join("src/main/resources").join("log4j.properties")
    }
}

pub fn write_artifact(artifact: &Artifact) -> PomResult<()> {
    if let Some(parent) = artifact.path.parent() {
        fs::create_dir_all(parent).map_err(|source| PomError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(&artifact.path, &artifact.contents).map_err(|source| PomError::Io {
        path: artifact.path.clone(),
        source,
    })?;

    info!("Wrote {}", artifact.path.display());
    Ok(())
}

/// Writes artifacts in order and stops at the first failure. Files written
/// before the failure are left in place.
pub fn materialize(artifacts: &[Artifact]) -> PomResult<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        write_artifact(artifact)?;
        written.push(artifact.path.clone());
    }
    Ok(written)
}
