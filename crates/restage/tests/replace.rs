use restage::{replace, StageError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Asserts two paths denote byte-identical content, recursively for dirs.
fn assert_same_content(left: &Path, right: &Path) {
    let left_md = fs::symlink_metadata(left).expect("left exists");
    let right_md = fs::symlink_metadata(right).expect("right exists");
    assert_eq!(left_md.is_dir(), right_md.is_dir(), "{:?} vs {:?}", left, right);

    if left_md.is_dir() {
        let mut left_names: Vec<_> = fs::read_dir(left)
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        let mut right_names: Vec<_> = fs::read_dir(right)
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        left_names.sort();
        right_names.sort();
        assert_eq!(left_names, right_names, "{:?} vs {:?}", left, right);
        for name in left_names {
            assert_same_content(&left.join(&name), &right.join(&name));
        }
    } else {
        assert_eq!(
            fs::read(left).unwrap(),
            fs::read(right).unwrap(),
            "contents of {:?} and {:?} differ",
            left,
            right
        );
    }
}

fn populate_tree(root: &Path) {
    fs::create_dir_all(root.join("nested/deeper")).unwrap();
    fs::write(root.join("top.txt"), "top level").unwrap();
    fs::write(root.join("nested/middle.txt"), "middle").unwrap();
    fs::write(root.join("nested/deeper/leaf.bin"), [0u8, 159, 146, 150]).unwrap();
}

#[test]
fn file_into_empty_destination() {
    let tempdir = TempDir::new().unwrap();
    let assets = tempdir.path().join("assets");
    let out = tempdir.path().join("out");
    fs::create_dir_all(&assets).unwrap();
    fs::create_dir_all(&out).unwrap();
    fs::write(assets.join("logo.png"), b"\x89PNG\r\n\x1a\n").unwrap();

    replace(&assets.join("logo.png"), &out.join("logo.png")).expect("replace");

    assert_same_content(&assets.join("logo.png"), &out.join("logo.png"));
}

#[test]
fn directory_copied_recursively() {
    let tempdir = TempDir::new().unwrap();
    let source = tempdir.path().join("source");
    let destination = tempdir.path().join("destination");
    populate_tree(&source);

    replace(&source, &destination).expect("replace");

    assert_same_content(&source, &destination);
}

#[test]
fn file_replaces_preexisting_directory() {
    let tempdir = TempDir::new().unwrap();
    let source = tempdir.path().join("file.txt");
    let destination = tempdir.path().join("dest");
    fs::write(&source, "just a file").unwrap();
    populate_tree(&destination);

    replace(&source, &destination).expect("replace");

    assert!(destination.is_file());
    assert_same_content(&source, &destination);
}

#[test]
fn directory_replaces_preexisting_file() {
    let tempdir = TempDir::new().unwrap();
    let source = tempdir.path().join("source");
    let destination = tempdir.path().join("dest");
    populate_tree(&source);
    fs::write(&destination, "old file").unwrap();

    replace(&source, &destination).expect("replace");

    assert!(destination.is_dir());
    assert_same_content(&source, &destination);
}

#[test]
fn replace_twice_matches_replace_once() {
    let tempdir = TempDir::new().unwrap();
    let source = tempdir.path().join("source");
    let destination = tempdir.path().join("dest");
    populate_tree(&source);

    replace(&source, &destination).expect("first replace");
    replace(&source, &destination).expect("second replace");

    assert_same_content(&source, &destination);
}

#[test]
fn missing_source_leaves_destination_untouched() {
    let tempdir = TempDir::new().unwrap();
    let source = tempdir.path().join("missing.txt");
    let destination = tempdir.path().join("out.txt");
    fs::write(&destination, "precious").unwrap();

    let err = replace(&source, &destination).unwrap_err();

    assert!(matches!(err, StageError::MissingSource(_)));
    assert_eq!(fs::read_to_string(&destination).unwrap(), "precious");
}

#[cfg(unix)]
#[test]
fn permissions_preserved() {
    use std::os::unix::fs::PermissionsExt;

    let tempdir = TempDir::new().unwrap();
    let source = tempdir.path().join("tool.sh");
    let destination = tempdir.path().join("staged.sh");
    fs::write(&source, "#!/bin/sh\n").unwrap();
    fs::set_permissions(&source, fs::Permissions::from_mode(0o755)).unwrap();

    replace(&source, &destination).expect("replace");

    let mode = fs::metadata(&destination).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o755);
}

#[test]
fn modification_time_preserved() {
    let tempdir = TempDir::new().unwrap();
    let source = tempdir.path().join("a");
    let destination = tempdir.path().join("b");
    fs::write(&source, "timed").unwrap();

    // make sure a fresh copy would get a visibly different timestamp
    std::thread::sleep(std::time::Duration::from_millis(1100));
    replace(&source, &destination).expect("replace");

    let src_time = fs::metadata(&source).unwrap().modified().unwrap();
    let dst_time = fs::metadata(&destination).unwrap().modified().unwrap();
    let drift = src_time
        .duration_since(dst_time)
        .unwrap_or_else(|e| e.duration());
    assert!(
        drift < std::time::Duration::from_secs(1),
        "mtime drifted by {:?}",
        drift
    );
}
