/*!
 * Tests for git-flatten functionality
 */

use std::fs;
use std::path::Path;
use std::process::Command;
use std::sync::Arc;

use indicatif::ProgressBar;
use tempfile::tempdir;

use crate::config::{Config, OutputStyle};
use crate::flattener::{flatten_repo, Flattener};
use crate::types::TrackedPath;
use crate::writer::{parse_plain_document, RULE};

/// Whether a usable git executable is on PATH
pub(crate) fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn git(repo: &Path, args: &[&str]) {
    let status = Command::new("git")
        .arg("-C")
        .arg(repo)
        .args(args)
        .status()
        .unwrap();
    assert!(status.success(), "git {:?} failed", args);
}

/// Initialise a repository in `repo` and stage everything in it
pub(crate) fn init_repo(repo: &Path) {
    git(repo, &["init", "-q"]);
    git(repo, &["add", "-A"]);
}

// Helper function to create a small repository with text and binary files
fn setup_test_repo(repo: &Path) {
    fs::create_dir_all(repo.join("src")).unwrap();
    fs::create_dir_all(repo.join("img")).unwrap();
    fs::write(repo.join("README"), "Project readme\n").unwrap();
    fs::write(repo.join("src/a.py"), "print(1)").unwrap();
    fs::write(repo.join("img/logo.png"), b"\x89PNG\r\n\x1a\n\x00\x00").unwrap();
    fs::write(repo.join("data.txt"), b"looks textual\x00but is not").unwrap();
    init_repo(repo);
}

fn paths(list: &[&str]) -> Vec<TrackedPath> {
    list.iter().map(|p| TrackedPath::from(*p)).collect()
}

fn flattener(config: Config) -> Flattener {
    Flattener::new(config, Arc::new(ProgressBar::hidden()))
}

#[test]
fn test_plain_flatten() {
    if !git_available() {
        return;
    }
    let repo = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    setup_test_repo(repo.path());
    let output = out_dir.path().join("flat.txt");

    let stats = flatten_repo(Config::new(repo.path(), &output)).unwrap();

    let rule = "=".repeat(80);
    let expected = format!(
        "\n{rule}\nFILE: README\n{rule}\n\nProject readme\n\n\
         \n{rule}\nFILE: data.txt\n{rule}\n\n[Binary file omitted: data.txt]\n\
         \n{rule}\nFILE: img/logo.png\n{rule}\n\n[Binary file omitted: img/logo.png]\n\
         \n{rule}\nFILE: src/a.py\n{rule}\n\nprint(1)\n"
    );
    assert_eq!(fs::read_to_string(&output).unwrap(), expected);

    assert_eq!(stats.files_listed, 4);
    assert_eq!(stats.text_files, 2);
    assert_eq!(stats.binary_files, 2);
    assert_eq!(stats.skipped_files, 0);
    assert_eq!(stats.text_bytes, ("Project readme\n".len() + "print(1)".len()) as u64);
    assert_eq!(stats.bytes_written, expected.len() as u64);
}

#[test]
fn test_markdown_flatten() {
    if !git_available() {
        return;
    }
    let repo = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    setup_test_repo(repo.path());
    let output = out_dir.path().join("flat.md");

    let mut config = Config::new(repo.path(), &output);
    config.style = OutputStyle::Markdown;
    flatten_repo(config).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("\n## `src/a.py`\n\nprint(1)\n"));
    assert!(content.contains("\n## `img/logo.png`\n\n[Binary file omitted: img/logo.png]\n"));
    assert!(!content.contains(RULE.as_str()));
}

#[test]
fn test_base_url_links_binary_files() {
    if !git_available() {
        return;
    }
    let repo = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    setup_test_repo(repo.path());
    let output = out_dir.path().join("flat.txt");

    let mut config = Config::new(repo.path(), &output);
    config.base_url = Some("https://example.com/repo".to_string());
    flatten_repo(config).unwrap();

    let lines: Vec<String> = fs::read_to_string(&output)
        .unwrap()
        .lines()
        .map(String::from)
        .collect();
    let expected = [
        "[Binary file omitted: https://example.com/repo/-/blob/main/img/logo.png]",
        "[Binary file omitted: https://example.com/repo/-/blob/main/data.txt]",
    ];
    for line in expected {
        assert!(lines.iter().any(|l| l == line), "missing line: {}", line);
    }
}

#[test]
fn test_custom_branch_in_links() {
    let repo = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    fs::write(repo.path().join("logo.png"), b"png").unwrap();
    let output = out_dir.path().join("flat.txt");

    let mut config = Config::new(repo.path(), &output);
    config.base_url = Some("https://example.com/repo".to_string());
    config.branch = "develop".to_string();
    flattener(config).flatten_paths(&paths(&["logo.png"])).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content
        .contains("[Binary file omitted: https://example.com/repo/-/blob/develop/logo.png]\n"));
}

#[test]
fn test_base_url_is_used_verbatim() {
    let repo = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    fs::write(repo.path().join("logo.png"), b"png").unwrap();

    let cases = [
        (
            "gitlab.example.com/group/proj",
            "[Binary file omitted: gitlab.example.com/group/proj/-/blob/main/logo.png]\n",
        ),
        (
            "https://example.com/repo/",
            "[Binary file omitted: https://example.com/repo//-/blob/main/logo.png]\n",
        ),
    ];
    for (base, expected) in cases {
        let output = out_dir.path().join("flat.txt");
        let mut config = Config::new(repo.path(), &output);
        config.base_url = Some(base.to_string());

        assert!(config.validate().is_ok());
        flattener(config).flatten_paths(&paths(&["logo.png"])).unwrap();

        let content = fs::read_to_string(&output).unwrap();
        assert!(content.ends_with(expected), "unexpected link for {}", base);
    }
}

#[test]
fn test_round_trip_recovers_text_files() {
    if !git_available() {
        return;
    }
    let repo = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    let files = [
        ("NOTES", "first line\nsecond line\n"),
        ("docs/guide.txt", "# Guide\n\nSome text.\n\n"),
        ("src/page.html", "<p>hello</p>"),
        ("z/empty.txt", ""),
    ];
    for (path, content) in files {
        let full = repo.path().join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, content).unwrap();
    }
    fs::write(repo.path().join("photo.jpg"), b"jpeg").unwrap();
    init_repo(repo.path());
    let output = out_dir.path().join("flat.txt");

    flatten_repo(Config::new(repo.path(), &output)).unwrap();

    let document = fs::read_to_string(&output).unwrap();
    let text_records: Vec<(String, String)> = parse_plain_document(&document)
        .into_iter()
        .filter(|(path, _)| path != "photo.jpg")
        .collect();
    let expected: Vec<(String, String)> = files
        .iter()
        .map(|(p, c)| (p.to_string(), c.to_string()))
        .collect();
    assert_eq!(text_records, expected);
}

#[test]
fn test_empty_repository_writes_nothing() {
    if !git_available() {
        return;
    }
    let repo = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    init_repo(repo.path());
    let output = out_dir.path().join("flat.txt");

    let stats = flatten_repo(Config::new(repo.path(), &output)).unwrap();

    assert_eq!(stats.files_listed, 0);
    assert!(!output.exists());
}

#[test]
fn test_not_a_repository_writes_nothing() {
    let repo = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    fs::write(repo.path().join("file.txt"), "content").unwrap();
    let output = out_dir.path().join("flat.txt");

    let result = flatten_repo(Config::new(repo.path().join("missing"), &output));

    assert!(result.is_ok());
    assert!(!output.exists());
}

#[test]
fn test_deleted_tracked_file_is_skipped() {
    if !git_available() {
        return;
    }
    let repo = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    fs::write(repo.path().join("gone.txt"), "soon deleted\n").unwrap();
    fs::write(repo.path().join("kept.txt"), "still here\n").unwrap();
    init_repo(repo.path());
    fs::remove_file(repo.path().join("gone.txt")).unwrap();
    let output = out_dir.path().join("flat.txt");

    let stats = flatten_repo(Config::new(repo.path(), &output)).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(!content.contains("gone.txt"));
    assert!(content.contains("FILE: kept.txt"));
    assert_eq!(stats.files_listed, 2);
    assert_eq!(stats.skipped_files, 1);
    assert_eq!(stats.records_written(), 1);
}

#[test]
fn test_non_regular_paths_are_skipped() {
    let repo = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    fs::create_dir(repo.path().join("subdir")).unwrap();
    fs::write(repo.path().join("real.txt"), "real\n").unwrap();
    #[cfg(unix)]
    std::os::unix::fs::symlink(repo.path().join("nowhere"), repo.path().join("dangling")).unwrap();
    let output = out_dir.path().join("flat.txt");

    let mut flattener = flattener(Config::new(repo.path(), &output));
    let written = flattener
        .flatten_paths(&paths(&["subdir", "dangling", "missing.txt", "real.txt"]))
        .unwrap();

    assert!(written);
    let records = parse_plain_document(&fs::read_to_string(&output).unwrap());
    assert_eq!(records, vec![("real.txt".to_string(), "real\n".to_string())]);
    assert_eq!(flattener.get_statistics().skipped_files, 3);
}

#[test]
fn test_invalid_utf8_becomes_placeholder() {
    let repo = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    fs::write(repo.path().join("latin1.txt"), b"caf\xe9\n").unwrap();
    fs::write(repo.path().join("next.txt"), "after\n").unwrap();
    let output = out_dir.path().join("flat.txt");

    let mut flattener = flattener(Config::new(repo.path(), &output));
    flattener
        .flatten_paths(&paths(&["latin1.txt", "next.txt"]))
        .unwrap();

    let records = parse_plain_document(&fs::read_to_string(&output).unwrap());
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].0, "latin1.txt");
    assert!(records[0]
        .1
        .starts_with("[Could not read file: latin1.txt. Error: "));
    assert!(records[0].1.ends_with(']'));
    assert_eq!(records[1], ("next.txt".to_string(), "after\n".to_string()));

    let stats = flattener.get_statistics();
    assert_eq!(stats.unreadable_files, 1);
    assert_eq!(stats.text_files, 1);
}

#[test]
fn test_existing_output_is_overwritten() {
    let repo = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    fs::write(repo.path().join("a.txt"), "new content").unwrap();
    let output = out_dir.path().join("flat.txt");
    fs::write(&output, "stale content that must disappear").unwrap();

    flattener(Config::new(repo.path(), &output))
        .flatten_paths(&paths(&["a.txt"]))
        .unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(!content.contains("stale"));
    assert!(content.ends_with("new content\n"));
}

#[test]
fn test_listing_order_is_preserved() {
    let repo = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    for name in ["b.txt", "a.txt", "c.txt"] {
        fs::write(repo.path().join(name), name).unwrap();
    }
    let output = out_dir.path().join("flat.txt");

    flattener(Config::new(repo.path(), &output))
        .flatten_paths(&paths(&["c.txt", "a.txt", "b.txt"]))
        .unwrap();

    let order: Vec<String> = parse_plain_document(&fs::read_to_string(&output).unwrap())
        .into_iter()
        .map(|(path, _)| path)
        .collect();
    assert_eq!(order, vec!["c.txt", "a.txt", "b.txt"]);
}

#[cfg(target_os = "linux")]
#[test]
fn test_output_failure_clears_progress() {
    let full = Path::new("/dev/full");
    if !full.exists() {
        return;
    }
    let repo = tempdir().unwrap();
    fs::write(repo.path().join("a.txt"), "content\n").unwrap();

    let mut flattener = flattener(Config::new(repo.path(), full));
    let result = flattener.flatten_paths(&paths(&["a.txt"]));

    assert!(matches!(result, Err(crate::error::FlattenError::Io(_))));
    assert!(flattener.progress.is_finished());
}
