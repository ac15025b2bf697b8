use std::fs;
use cli_creator::cli::prompt::FixedAnswer;
use cli_creator::models::dependency::DependencyKind;
use cli_creator::services::scaffolder::{Scaffolder, Stage};
use cli_creator::utils::config::Settings;
use cli_creator::utils::error::{ScaffoldError, UserError};
use tempfile::TempDir;

use super::support::{entry_count, failing_title, Call, CountingPrompt, FakePackageManager};

/// Scenario: the runtime install exits non-zero
#[tokio::test]
async fn test_install_failure_stops_before_dev_install_and_template() {
    let temp_dir = TempDir::new().unwrap();
    let scaffolder = Scaffolder::new(
        Settings::new(temp_dir.path()),
        FakePackageManager::failing_on(DependencyKind::Runtime),
        FixedAnswer("Demo App".to_string()),
    )
    .without_title();

    let err = scaffolder.run().await.unwrap_err();

    assert_eq!(err.stage(), Some(Stage::InstallDependencies));
    let calls = scaffolder.package_manager().calls();
    assert_eq!(calls.len(), 2);
    assert!(matches!(calls[0], Call::Init(_)));
    assert!(matches!(calls[1], Call::Install { kind: DependencyKind::Runtime, .. }));

    // partial project is left as-is, nothing after the failed stage ran
    let project = temp_dir.path().join("demo-app");
    assert!(project.join("package.json").exists());
    assert!(!project.join(".babelrc").exists());
    assert!(!project.join("src").exists());

    let user_error = UserError::from_scaffold_error(&err);
    assert_eq!(user_error.exit_code, 1);
    assert!(user_error.message.contains("npm ERR! code E404"));
}

#[tokio::test]
async fn test_dev_install_failure_skips_template() {
    let temp_dir = TempDir::new().unwrap();
    let scaffolder = Scaffolder::new(
        Settings::new(temp_dir.path()),
        FakePackageManager::failing_on(DependencyKind::Development),
        FixedAnswer("dev-fail".to_string()),
    )
    .without_title();

    let err = scaffolder.run().await.unwrap_err();

    assert_eq!(err.stage(), Some(Stage::InstallDevDependencies));
    assert_eq!(scaffolder.package_manager().calls().len(), 3);
    assert!(!temp_dir.path().join("dev-fail/.babelrc").exists());
}

#[tokio::test]
async fn test_existing_directory_invokes_no_further_stage() {
    let temp_dir = TempDir::new().unwrap();
    let existing = temp_dir.path().join("demo-app");
    fs::create_dir(&existing).unwrap();
    fs::write(existing.join("keep.txt"), "mine").unwrap();
    let scaffolder = Scaffolder::new(
        Settings::new(temp_dir.path()),
        FakePackageManager::default(),
        FixedAnswer("Demo App".to_string()),
    )
    .without_title();

    let err = scaffolder.run().await.unwrap_err();

    assert_eq!(err.stage(), Some(Stage::CreateDirectory));
    match err {
        ScaffoldError::StageFailed { source, .. } => {
            assert!(matches!(*source, ScaffoldError::DirectoryError { .. }));
        }
        other => panic!("Expected StageFailed, got {other:?}"),
    }
    assert!(scaffolder.package_manager().calls().is_empty());
    assert_eq!(fs::read_to_string(existing.join("keep.txt")).unwrap(), "mine");
    assert!(!existing.join("package.json").exists());
}

#[tokio::test]
async fn test_missing_template_directory_keeps_babel_config() {
    let temp_dir = TempDir::new().unwrap();
    let settings = Settings::new(temp_dir.path()).with_template_dir(temp_dir.path().join("application-src"));
    let scaffolder = Scaffolder::new(settings, FakePackageManager::default(), FixedAnswer("no-template".to_string()))
        .without_title();

    let err = scaffolder.run().await.unwrap_err();

    assert_eq!(err.stage(), Some(Stage::MaterializeTemplate));
    let project = temp_dir.path().join("no-template");
    assert!(project.join(".babelrc").exists());
    assert!(!project.join("src").exists());
}

#[tokio::test]
async fn test_missing_base_directory_fails_creation() {
    let temp_dir = TempDir::new().unwrap();
    let scaffolder = Scaffolder::new(
        Settings::new(temp_dir.path().join("not-there")),
        FakePackageManager::default(),
        FixedAnswer("app".to_string()),
    )
    .without_title();

    let err = scaffolder.run().await.unwrap_err();

    assert_eq!(err.stage(), Some(Stage::CreateDirectory));
    assert!(scaffolder.package_manager().calls().is_empty());
}

#[tokio::test]
async fn test_prompt_failure_touches_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let scaffolder = Scaffolder::new(
        Settings::new(temp_dir.path()),
        FakePackageManager::default(),
        CountingPrompt::failing(),
    )
    .without_title();

    let err = scaffolder.run().await.unwrap_err();

    assert!(matches!(err, ScaffoldError::PromptError(_)));
    assert_eq!(err.stage(), None);
    assert_eq!(entry_count(temp_dir.path()), 0);
    assert!(scaffolder.package_manager().calls().is_empty());
    assert_eq!(UserError::from_scaffold_error(&err).exit_code, 1);
}

#[tokio::test]
async fn test_banner_failure_aborts_before_prompt() {
    let temp_dir = TempDir::new().unwrap();
    let prompt = CountingPrompt::default();
    let asked = prompt.asked.clone();
    let scaffolder = Scaffolder::new(Settings::new(temp_dir.path()), FakePackageManager::default(), prompt)
        .with_title(failing_title);

    let err = scaffolder.run().await.unwrap_err();

    match &err {
        ScaffoldError::BannerError(msg) => assert!(msg.contains("font unavailable")),
        other => panic!("Expected BannerError, got {other:?}"),
    }
    assert_eq!(asked.get(), 0);
    assert_eq!(entry_count(temp_dir.path()), 0);
    assert!(scaffolder.package_manager().calls().is_empty());
    assert_eq!(UserError::from_scaffold_error(&err).exit_code, 1);
}

#[tokio::test]
async fn test_working_banner_runs_before_prompt() {
    let temp_dir = TempDir::new().unwrap();
    let prompt = CountingPrompt::default();
    let asked = prompt.asked.clone();
    let scaffolder = Scaffolder::new(Settings::new(temp_dir.path()), FakePackageManager::default(), prompt)
        .with_title(|| Ok(()));

    let descriptor = scaffolder.run().await.unwrap();

    assert_eq!(asked.get(), 1);
    assert_eq!(descriptor.normalized_name, "demo-app");
    assert!(descriptor.source_dir().join("index.js").exists());
}
