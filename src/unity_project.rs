//! Unity project detection
//!
//! Generated classes belong inside a Unity project's `Assets` folder. When the
//! source assets live in a Unity project, output paths are resolved against
//! the project root the same way Unity resolves `Assets/...` paths, and paths
//! that leave `Assets` are refused.

use std::path::{Component, Path, PathBuf};

use crate::error::{GeneratorError, GeneratorResult};

pub const ASSETS_FOLDER: &str = "Assets";
pub const PROJECT_SETTINGS_FOLDER: &str = "ProjectSettings";

/// A Unity project on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnityProject {
    project_path: PathBuf,
}

impl UnityProject {
    /// Creates a UnityProject for the specified project path.
    ///
    /// # Examples
    ///
    /// ```
    /// use uitk_string_gen::unity_project::UnityProject;
    /// use std::path::PathBuf;
    ///
    /// let project = UnityProject::new(PathBuf::from("/path/to/unity/project"));
    /// assert_eq!(project.assets_path(), PathBuf::from("/path/to/unity/project/Assets"));
    /// ```
    pub fn new(project_path: PathBuf) -> Self {
        Self { project_path }
    }

    /// Whether `path` looks like a project root (has `Assets` and `ProjectSettings`)
    pub fn is_project_root(path: &Path) -> bool {
        path.join(ASSETS_FOLDER).is_dir() && path.join(PROJECT_SETTINGS_FOLDER).is_dir()
    }

    /// Find the project containing `path` by walking up its ancestors.
    pub fn find_for(path: &Path) -> Option<Self> {
        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        let found = absolute
            .ancestors()
            .find(|ancestor| Self::is_project_root(ancestor))
            .map(|root| Self::new(normalize_lexically(root)));

        match &found {
            Some(project) => log::debug!(
                "Found Unity project {} for {}",
                project.project_path.display(),
                path.display()
            ),
            None => log::debug!("{} is not inside a Unity project", path.display()),
        }
        found
    }

    pub fn project_path(&self) -> &Path {
        &self.project_path
    }

    pub fn assets_path(&self) -> PathBuf {
        self.project_path.join(ASSETS_FOLDER)
    }

    /// Resolve an output directory for generated files.
    ///
    /// Relative paths are taken relative to the project root. The result must
    /// be the `Assets` folder or a folder below it.
    pub fn resolve_output_directory(&self, output_directory: &Path) -> GeneratorResult<PathBuf> {
        let joined = if output_directory.is_absolute() {
            output_directory.to_path_buf()
        } else {
            self.project_path.join(output_directory)
        };
        let resolved = normalize_lexically(&joined);

        if !resolved.starts_with(self.assets_path()) {
            return Err(GeneratorError::invalid_configuration(format!(
                "Output directory {} is not inside {}. Please select a folder within the project's Assets folder.",
                resolved.display(),
                self.assets_path().display()
            )));
        }
        Ok(resolved)
    }

    /// Project relative path with forward slashes (`Assets/UI/MainMenu.uss`),
    /// or `None` for paths outside the project.
    pub fn to_project_relative(&self, path: &Path) -> Option<String> {
        let relative = normalize_lexically(path)
            .strip_prefix(&self.project_path)
            .ok()?
            .to_path_buf();
        let parts: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Some(parts.join("/"))
    }
}

/// Resolve `.` and `..` without touching the file system
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut result = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !result.pop() {
                    result.push(component);
                }
            }
            other => result.push(other),
        }
    }
    result
}
