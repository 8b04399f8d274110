//! Test utilities shared across the codebase

use std::path::PathBuf;

/// Crate root, where `fixtures/` lives
pub fn get_project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// The sample Unity project under `fixtures/`
pub fn get_unity_project_root() -> PathBuf {
    get_project_root().join("fixtures").join("UnityProject")
}

/// Path of a file in the sample project's `Assets/UI` folder
pub fn ui_asset_path(file_name: &str) -> PathBuf {
    get_unity_project_root().join("Assets").join("UI").join(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_paths_exist() {
        assert!(get_project_root().join("Cargo.toml").is_file());
        assert!(ui_asset_path("MainMenuSS.uss").is_file());
        assert!(ui_asset_path("MainMenu.uxml").is_file());
    }
}
