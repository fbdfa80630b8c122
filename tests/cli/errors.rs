use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn test_malformed_file_aborts_run() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a.yml", "en:\n  a: 1\n")?;
    test.write_file("b.yml", "en:\n  b: 2\n")?;
    test.write_file("nested/broken.yml", "en:\n  c: [unclosed\n")?;

    let (output, stdout, stderr) = run(test.scan_command())?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout.is_empty(), "stdout: {stdout}");
    assert!(stderr.starts_with("Error: failed to parse"), "stderr: {stderr}");
    assert!(stderr.contains("broken.yml"), "stderr: {stderr}");

    Ok(())
}

#[test]
fn test_missing_root_fails() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("does-not-exist");
    let (output, stdout, stderr) = run(cmd)?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout.is_empty());
    assert!(stderr.contains("failed to read does-not-exist"), "stderr: {stderr}");

    Ok(())
}

#[test]
fn test_scalar_namespace_is_a_shape_error() -> Result<()> {
    let test = CliTest::with_file("en.yml", "en: just a string\n")?;

    let (output, stdout, stderr) = run(test.scan_command())?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout.is_empty());
    assert!(
        stderr.contains("value of top-level key 'en' is not a mapping"),
        "stderr: {stderr}"
    );

    Ok(())
}

#[test]
fn test_empty_document_is_a_shape_error() -> Result<()> {
    let test = CliTest::with_file("en.yml", "{}\n")?;

    let (output, stdout, stderr) = run(test.scan_command())?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout.is_empty());
    assert!(stderr.contains("top-level mapping is empty"), "stderr: {stderr}");

    Ok(())
}

#[test]
fn test_missing_root_argument_is_usage_error() -> Result<()> {
    let test = CliTest::new()?;

    let (output, stdout, stderr) = run(test.command())?;

    assert_eq!(output.status.code(), Some(2));
    assert!(stdout.is_empty());
    assert!(stderr.contains("<ROOT>"), "stderr: {stderr}");

    Ok(())
}
