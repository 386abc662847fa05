//! Common test utilities for mx integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Temporary version and project roots with a configuration file pointing at them
#[allow(dead_code)]
pub struct TestEnv {
    /// Temporary directory
    pub temp: TempDir,
    /// Studio Pro versions root
    pub versions: PathBuf,
    /// Mendix projects root
    pub projects: PathBuf,
    /// Configuration file passed through MX_PVM_CONFIG
    pub config_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create roots and a valid configuration file
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let versions = temp.path().join("versions");
        let projects = temp.path().join("projects");
        std::fs::create_dir_all(&versions).expect("Failed to create versions root");
        std::fs::create_dir_all(&projects).expect("Failed to create projects root");
        let config_path = temp.path().join("config").join("mendix-pvm.json");

        let env = Self {
            temp,
            versions,
            projects,
            config_path,
        };
        env.write_config(&env.versions, &env.projects);
        env
    }

    /// Overwrite the configuration file with the given roots
    pub fn write_config(&self, versions: &Path, projects: &Path) {
        let json = serde_json::json!({
            "VersionDirectory": versions,
            "ProjectDirectory": projects,
        });
        self.write_raw_config(&json.to_string());
    }

    /// Overwrite the configuration file with arbitrary content
    pub fn write_raw_config(&self, content: &str) {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create config directory");
        }
        std::fs::write(&self.config_path, content).expect("Failed to write config file");
    }

    /// Create a project directory holding `<name>.mpr`
    pub fn add_project(&self, name: &str) -> PathBuf {
        let dir = self.projects.join(name);
        std::fs::create_dir_all(&dir).expect("Failed to create project directory");
        std::fs::write(dir.join(format!("{name}.mpr")), "").expect("Failed to write project file");
        dir
    }

    /// Create a version directory with a `modeler` subdirectory
    pub fn add_version(&self, name: &str) -> PathBuf {
        let dir = self.versions.join(name);
        std::fs::create_dir_all(dir.join("modeler")).expect("Failed to create version directory");
        dir
    }

    /// Install a shell script standing in for the conversion tool
    ///
    /// The script appends its arguments to `convert.log` in the version
    /// directory, then exits with the next code from `exit_codes.txt`
    /// (0 once the list runs out).
    #[cfg(unix)]
    pub fn add_scripted_version(&self, name: &str, exit_codes: &[i32]) -> PathBuf {
        let dir = self.add_version(name);
        let codes: Vec<String> = exit_codes.iter().map(i32::to_string).collect();
        std::fs::write(dir.join("exit_codes.txt"), codes.join("\n") + "\n")
            .expect("Failed to write exit codes");

        let script = format!(
            "#!/bin/sh\n\
             dir='{dir}'\n\
             echo \"$@\" >> \"$dir/convert.log\"\n\
             code=$(head -n 1 \"$dir/exit_codes.txt\")\n\
             tail -n +2 \"$dir/exit_codes.txt\" > \"$dir/exit_codes.next\"\n\
             mv \"$dir/exit_codes.next\" \"$dir/exit_codes.txt\"\n\
             exit \"${{code:-0}}\"\n",
            dir = dir.display()
        );
        self.install_tool(&dir, &script);
        dir
    }

    /// Install a version whose conversion tool runs `body` after logging its arguments
    #[cfg(unix)]
    pub fn add_version_with_tool(&self, name: &str, body: &str) -> PathBuf {
        let dir = self.add_version(name);
        let script = format!(
            "#!/bin/sh\necho \"$@\" >> '{}/convert.log'\n{body}\n",
            dir.display()
        );
        self.install_tool(&dir, &script);
        dir
    }

    #[cfg(unix)]
    fn install_tool(&self, version: &Path, script: &str) {
        use std::os::unix::fs::PermissionsExt;

        let tool = version.join("modeler").join("mx");
        std::fs::write(&tool, script).expect("Failed to write tool script");
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make tool executable");
    }

    /// Argument lines the scripted conversion tool logged
    pub fn conversion_log(&self, version: &Path) -> Vec<String> {
        std::fs::read_to_string(version.join("convert.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Build an `mx` command bound to the environment's configuration file
#[allow(deprecated, dead_code)]
pub fn mx_cmd(env: &TestEnv) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("mx").expect("mx binary should be built");
    cmd.env("MX_PVM_CONFIG", &env.config_path);
    cmd.env_remove("RUST_LOG");
    cmd
}
