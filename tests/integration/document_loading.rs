use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tempfile::TempDir;
use vfs_shell::document::{default_tree, load_document, save_document, DecodePolicy};
use vfs_shell::shell::Shell;
use vfs_shell::tree::ContentKind;
use vfs_shell::DocumentError;

use crate::integration::support::{run, write_reference_document};

#[test]
fn reference_document_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("vfs.json");
    write_reference_document(&path);

    let vfs = load_document(&path, DecodePolicy::Lossy).unwrap();
    let mut shell = Shell::new(vfs);

    assert_eq!(run(&mut shell, "ls ."), "readme.txt bin docs");
    assert_eq!(run(&mut shell, "ls bin"), "test.bin");
    assert_eq!(
        run(&mut shell, "cp readme.txt docs/readme_copy.txt"),
        "cp: 'readme.txt' -> 'docs/readme_copy.txt'"
    );
    assert_eq!(run(&mut shell, "ls docs"), "doc.txt readme_copy.txt");
    assert_eq!(run(&mut shell, "cd .."), "cd: cannot go up from root");
}

#[test]
fn binary_file_is_decoded_at_load() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("vfs.json");
    write_reference_document(&path);

    let vfs = load_document(&path, DecodePolicy::Strict).unwrap();
    let file = vfs.resolve("/bin/test.bin").unwrap().as_file().unwrap();
    assert_eq!(file.kind(), ContentKind::Binary);
    assert_eq!(file.as_text(), "binary data");

    let readme = vfs.resolve("readme.txt").unwrap().as_file().unwrap();
    assert_eq!(readme.kind(), ContentKind::Text);
}

#[test]
fn seeded_document_matches_reference() {
    let temp_dir = TempDir::new().unwrap();
    let seeded = temp_dir.path().join("seeded.json");
    let reference = temp_dir.path().join("reference.json");
    write_reference_document(&reference);

    let from_seed = load_document(&seeded, DecodePolicy::Lossy).unwrap();
    let from_reference = load_document(&reference, DecodePolicy::Lossy).unwrap();
    assert_eq!(from_seed, from_reference);
    assert_eq!(from_seed, default_tree());
}

#[test]
fn strict_policy_rejects_invalid_utf8_document() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("vfs.json");
    let raw = serde_json::json!({ "data.bin": STANDARD.encode([0x66u8, 0x80, 0x6f]) });
    std::fs::write(&path, raw.to_string()).unwrap();

    assert!(matches!(
        load_document(&path, DecodePolicy::Strict),
        Err(DocumentError::Format(_))
    ));
    let vfs = load_document(&path, DecodePolicy::Lossy).unwrap();
    assert_eq!(
        vfs.resolve("data.bin").unwrap().as_file().unwrap().as_text(),
        "fo"
    );
}

#[test]
fn top_level_array_is_format_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("vfs.json");
    std::fs::write(&path, "[1, 2, 3]").unwrap();
    assert!(matches!(
        load_document(&path, DecodePolicy::Lossy),
        Err(DocumentError::Format(_))
    ));
}

#[test]
fn saved_tree_reloads_identically() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("vfs.json");
    write_reference_document(&path);

    let mut shell = Shell::new(load_document(&path, DecodePolicy::Lossy).unwrap());
    run(&mut shell, "cp bin docs/bin_copy");
    let vfs = shell.into_vfs();

    let saved = temp_dir.path().join("saved.json");
    save_document(&saved, &vfs).unwrap();
    assert_eq!(load_document(&saved, DecodePolicy::Lossy).unwrap(), vfs);
}

#[test]
fn commands_do_not_write_back() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("vfs.json");
    write_reference_document(&path);
    let before = std::fs::read_to_string(&path).unwrap();

    let mut shell = Shell::new(load_document(&path, DecodePolicy::Lossy).unwrap());
    run(&mut shell, "cp readme.txt docs/readme_copy.txt");
    drop(shell);

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}
