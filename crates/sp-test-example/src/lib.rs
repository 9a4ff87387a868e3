use std::path::PathBuf;

pub fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

pub fn demos_root() -> PathBuf {
    workspace_root().join("demos")
}

pub fn demo_dir(name: &str) -> PathBuf {
    demos_root().join(name)
}

pub fn testcase_path(name: &str) -> PathBuf {
    demo_dir(name).join("testcase.json")
}

/// Names of every directory under `demos/` that carries a `testcase.json`,
/// sorted.
pub fn demo_names() -> Vec<String> {
    let Ok(entries) = std::fs::read_dir(demos_root()) else {
        return Vec::new();
    };
    let mut names = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.path().join("testcase.json").is_file())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect::<Vec<_>>();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_root_points_to_workspace() {
        assert!(workspace_root().join("Cargo.toml").exists());
    }

    #[test]
    fn demos_root_points_to_demos_directory() {
        assert!(demos_root().is_dir());
    }

    #[test]
    fn demo_dir_joins_name() {
        assert!(demo_dir("01-haunted-manor").is_dir());
    }

    #[test]
    fn testcase_path_joins_default_filename() {
        let path = testcase_path("01-haunted-manor");
        assert!(path.ends_with("testcase.json"));
    }

    #[test]
    fn demo_names_lists_cases_in_order() {
        let names = demo_names();
        assert!(names.len() >= 3);
        assert_eq!(names[0], "01-haunted-manor");
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
