//! Integration test helpers for rn-set-version
//!
//! These tests build a minimal React Native project layout in a temporary
//! directory and drive the binary through the command-line interface.

use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

#[allow(unused)]
pub const GRADLE: &str = "android/app/build.gradle";
#[allow(unused)]
pub const PBXPROJ: &str = "ios/MyApp.xcodeproj/project.pbxproj";
#[allow(unused)]
pub const PACKAGE_JSON: &str = "package.json";

/// Writes `content` to `root/rel`, creating parent directories.
#[allow(unused)]
pub fn write_file(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[allow(unused)]
pub fn read_file(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}

/// Helper to create a project named `MyApp` at version 1.2.2
#[allow(unused)]
pub fn create_test_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    write_file(
        root,
        PACKAGE_JSON,
        r#"{
  "name": "MyApp",
  "version": "1.2.2",
  "private": true,
  "dependencies": {
    "react-native": "0.72.4"
  }
}
"#,
    );

    write_file(
        root,
        GRADLE,
        r#"apply plugin: "com.android.application"

android {
    defaultConfig {
        applicationId "com.myapp"
        minSdkVersion rootProject.ext.minSdkVersion
        versionCode 122
        versionName "1.2.2"
    }
}
"#,
    );

    write_file(
        root,
        PBXPROJ,
        r#"		13B07F941A680F5B00A75B9A /* Debug */ = {
			buildSettings = {
				CURRENT_PROJECT_VERSION = 1;
				MARKETING_VERSION = 1.2.2;
			};
		};
		13B07F951A680F5B00A75B9A /* Release */ = {
			buildSettings = {
				CURRENT_PROJECT_VERSION = 1;
				MARKETING_VERSION = 1.2.2;
			};
		};
"#,
    );

    temp
}

/// Helper to run the binary in `project_root`
pub fn run_set_version(project_root: &Path, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = cargo_bin_cmd!("rn-set-version");
    cmd.args(args)
        .env("NO_COLOR", "1")
        .current_dir(project_root);

    cmd.assert()
}
