use fastio_writer::{FastIoError, FastWriter, IoConfig};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_create_writes_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");

    let mut writer = FastWriter::create(&path).unwrap();
    writer.println(3);
    writer.print_array([1, 2, 3]);
    writer.close();
    assert!(!writer.check_error());

    assert_eq!(fs::read_to_string(&path).unwrap(), "3\n1 2 3\n");
}

#[test]
fn test_create_truncates_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("out.txt");
    fs::write(&path, "old contents that are longer").unwrap();

    {
        let mut writer = FastWriter::create_with_config(&path, IoConfig::new()).unwrap();
        writer.print("new");
    }

    assert_eq!(fs::read_to_string(&path).unwrap(), "new");
}

#[test]
fn test_create_in_missing_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("out.txt");
    match FastWriter::create(&path) {
        Err(FastIoError::FileCreateError { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected FileCreateError, got {other:?}"),
    }
}
