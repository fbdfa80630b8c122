use anyhow::Result;
use insta::assert_snapshot;

use crate::{CliTest, run};

#[test]
fn test_single_locale_file() -> Result<()> {
    let test = CliTest::with_file(
        "config/locales/en.yml",
        r#"
en:
  title: Hello
  Common:
    submit: Submit
    cancel: Cancel
"#,
    )?;

    let (output, stdout, stderr) = run(test.scan_command())?;

    assert!(output.status.success(), "stderr: {stderr}");
    assert_snapshot!(stdout.trim_end(), @r#"["title","Common.submit","Common.cancel"]"#);
    assert!(stderr.is_empty());

    Ok(())
}

#[test]
fn test_merges_files_in_first_seen_order() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.yml", "en:\n  a: 1\n  b:\n    c: 2\n")?;
    test.write_file("nested/fr.yml", "fr:\n  b:\n    c: 3\n  d: 4\n")?;

    let (output, stdout, _) = run(test.scan_command())?;

    assert!(output.status.success());
    assert_snapshot!(stdout.trim_end(), @r#"["a","b.c","d"]"#);

    Ok(())
}

#[test]
fn test_empty_root_prints_empty_list() -> Result<()> {
    let test = CliTest::new()?;

    let (output, stdout, _) = run(test.scan_command())?;

    assert!(output.status.success());
    assert_eq!(stdout.trim_end(), "[]");

    Ok(())
}

#[test]
fn test_bounded_depth_by_default() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a/b/c/en.yml", "en:\n  shallow: x\n")?;
    test.write_file("a/b/c/d/en.yml", "en:\n  deep: x\n")?;

    let (output, stdout, _) = run(test.scan_command())?;

    assert!(output.status.success());
    assert_snapshot!(stdout.trim_end(), @r#"["shallow"]"#);

    Ok(())
}

#[test]
fn test_recursive_flag_scans_every_level() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("a/b/c/en.yml", "en:\n  shallow: x\n")?;
    test.write_file("a/b/c/d/e/f/en.yml", "en:\n  deep: x\n")?;

    let mut cmd = test.scan_command();
    cmd.arg("--recursive");
    let (output, stdout, _) = run(cmd)?;

    assert!(output.status.success());
    assert_snapshot!(stdout.trim_end(), @r#"["shallow","deep"]"#);

    Ok(())
}

#[test]
fn test_max_depth_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.yml", "en:\n  top: x\n")?;
    test.write_file("nested/en.yml", "en:\n  nested: x\n")?;

    let mut cmd = test.scan_command();
    cmd.args(["--max-depth", "0"]);
    let (output, stdout, _) = run(cmd)?;

    assert!(output.status.success());
    assert_snapshot!(stdout.trim_end(), @r#"["top"]"#);

    Ok(())
}

#[test]
fn test_ext_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.yml", "en:\n  yml: x\n")?;
    test.write_file("fr.yaml", "fr:\n  yaml: x\n")?;

    let (_, default_stdout, _) = run(test.scan_command())?;
    assert_snapshot!(default_stdout.trim_end(), @r#"["yml"]"#);

    let mut cmd = test.scan_command();
    cmd.args(["--ext", "yml", "--ext", "yaml"]);
    let (output, stdout, _) = run(cmd)?;

    assert!(output.status.success());
    assert_snapshot!(stdout.trim_end(), @r#"["yml","yaml"]"#);

    Ok(())
}

#[test]
fn test_lines_format() -> Result<()> {
    let test = CliTest::with_file("en.yml", "en:\n  a: 1\n  b:\n    c: 2\n")?;

    let mut cmd = test.scan_command();
    cmd.args(["--format", "lines"]);
    let (output, stdout, _) = run(cmd)?;

    assert!(output.status.success());
    assert_eq!(stdout, "a\nb.c\n");

    Ok(())
}

#[test]
fn test_verbose_reports_to_stderr() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("en.yml", "en:\n  a: 1\n  b: 2\n")?;
    test.write_file("fr.yml", "fr:\n  a: 1\n")?;

    let mut cmd = test.scan_command();
    cmd.arg("--verbose");
    let (output, stdout, stderr) = run(cmd)?;

    assert!(output.status.success());
    assert_snapshot!(stdout.trim_end(), @r#"["a","b"]"#);
    assert!(stderr.contains("scanned ./en.yml (2 keys)"), "stderr: {stderr}");
    assert!(stderr.contains("scanned ./fr.yml (1 key)"), "stderr: {stderr}");
    assert!(stderr.contains("Collected 2 keys from 2 files"), "stderr: {stderr}");

    Ok(())
}

#[test]
fn test_absolute_root_argument() -> Result<()> {
    let test = CliTest::with_file("locales/en.yml", "en:\n  greeting: Hi\n")?;

    let mut cmd = test.command();
    cmd.arg(test.root().join("locales"));
    let (output, stdout, _) = run(cmd)?;

    assert!(output.status.success());
    assert_snapshot!(stdout.trim_end(), @r#"["greeting"]"#);

    Ok(())
}
