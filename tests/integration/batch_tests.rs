/*!
 * Integration tests for directory conversion
 */

use std::fs;
use anyhow::Result;

use mdnarrate::app_controller::Controller;
use crate::common;

/// Test converting a tree next to the inputs
#[test]
fn test_convert_folder_withoutOutputDir_shouldWriteNextToInputs() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().to_path_buf();
    common::create_test_file(&root, "intro.md", "# Intro\nWelcome")?;
    common::create_test_file(&root, "part/one.md", "## One\n_First_ part")?;
    common::create_test_file(&root, "readme.txt", "ignored")?;

    let summary = Controller::new()?.convert_folder(&root, None)?;

    assert!(summary.is_success());
    assert_eq!(summary.converted.len(), 2);
    assert_eq!(fs::read_to_string(root.join("intro.tts.txt"))?, "Section: Intro\nWelcome\n");
    assert_eq!(
        fs::read_to_string(root.join("part").join("one.tts.txt"))?,
        "Subsection: One\nFirst part\n"
    );
    Ok(())
}

/// Test converting a tree into a separate output directory
#[test]
fn test_convert_folder_withOutputDir_shouldMirrorLayout() -> Result<()> {
    let input_dir = common::create_temp_dir()?;
    let output_dir = common::create_temp_dir()?;
    let root = input_dir.path().to_path_buf();
    common::create_test_file(&root, "a.md", "A")?;
    common::create_test_file(&root, "nested/deeper/b.md", "B")?;

    let summary = Controller::new()?.convert_folder(&root, Some(output_dir.path()))?;

    assert_eq!(summary.converted.len(), 2);
    assert_eq!(fs::read_to_string(output_dir.path().join("a.tts.txt"))?, "A\n");
    assert_eq!(
        fs::read_to_string(output_dir.path().join("nested/deeper/b.tts.txt"))?,
        "B\n"
    );
    assert!(!root.join("a.tts.txt").exists());
    Ok(())
}

/// Test that one bad file does not stop the batch
#[test]
fn test_convert_folder_withInvalidFile_shouldContinueAndReportFailure() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let root = temp_dir.path().to_path_buf();
    common::create_test_file(&root, "good.md", "Good")?;
    fs::write(root.join("bad.md"), [0xFF, 0xFE, 0x00])?;

    let summary = Controller::new()?.convert_folder(&root, None)?;

    assert!(!summary.is_success());
    assert_eq!(summary.converted.len(), 1);
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.failed[0].0, root.join("bad.md"));
    assert!(summary.failed[0].1.contains("UTF-8"));
    assert_eq!(fs::read_to_string(root.join("good.tts.txt"))?, "Good\n");
    Ok(())
}

/// Test that an empty directory is not an error
#[test]
fn test_convert_folder_withNoMarkdown_shouldReturnEmptySummary() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    let summary = Controller::new()?.convert_folder(temp_dir.path(), None)?;

    assert!(summary.is_success());
    assert!(summary.converted.is_empty());
    Ok(())
}

/// Test that a missing directory is an error
#[test]
fn test_convert_folder_withMissingDir_shouldFail() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;

    assert!(Controller::new()?.convert_folder(temp_dir.path().join("nope"), None).is_err());
    Ok(())
}
