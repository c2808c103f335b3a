use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn aaxport_cmd() -> Command {
    Command::cargo_bin("aaxport").expect("Failed to find aaxport binary")
}

#[test]
fn missing_required_arguments_fail() {
    aaxport_cmd()
        .env_remove("AAX_ACTIVATION_BYTES")
        .assert()
        .failure()
        .stderr(contains("--activation-bytes"));
}

#[test]
fn help_describes_the_tool() {
    aaxport_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("AAX audiobooks"))
        .stdout(contains("--input-dir"))
        .stdout(contains("--working-dir"));
}

#[test]
fn missing_input_folder_is_a_configuration_error() -> Result<(), Box<dyn Error>> {
    let output_dir = tempdir()?;
    let storage_dir = tempdir()?;
    let working_dir = tempdir()?;

    aaxport_cmd()
        .arg("--activation-bytes")
        .arg("abc123")
        .arg("--input-dir")
        .arg("/surely/this/does/not/exist")
        .arg("--output-dir")
        .arg(output_dir.path())
        .arg("--storage-dir")
        .arg(storage_dir.path())
        .arg("--working-dir")
        .arg(working_dir.path())
        .assert()
        .failure()
        .stderr(contains("Input folder does not exist"));

    Ok(())
}

#[test]
fn stale_working_files_are_purged_before_discovery() -> Result<(), Box<dyn Error>> {
    let input_dir = tempdir()?;
    let output_dir = tempdir()?;
    let storage_dir = tempdir()?;
    let working_dir = tempdir()?;

    let stale = working_dir.path().join("leftover.mp3");
    std::fs::write(&stale, b"stale")?;

    // Empty input: the run ends after discovery, whether or not ffmpeg is
    // installed the purge has already happened by then.
    let assert = aaxport_cmd()
        .arg("--quiet")
        .arg("--activation-bytes")
        .arg("abc123")
        .arg("--input-dir")
        .arg(input_dir.path())
        .arg("--output-dir")
        .arg(output_dir.path())
        .arg("--storage-dir")
        .arg(storage_dir.path())
        .arg("--working-dir")
        .arg(working_dir.path())
        .assert();

    assert!(!stale.exists());
    drop(assert);

    Ok(())
}
