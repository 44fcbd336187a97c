use dialnorm_store::Store;
use tempfile::TempDir;

#[cfg(unix)]
#[test]
fn database_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("phones.sqlite3");
    let store = Store::open(&db_path).expect("open store");
    store.migrate().expect("migrate");

    let mode = std::fs::metadata(&db_path)
        .expect("metadata")
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn reopened_file_keeps_rows() {
    let temp = TempDir::new().expect("temp dir");
    let db_path = temp.path().join("phones.sqlite3");
    {
        let store = Store::open(&db_path).expect("open store");
        store.migrate().expect("migrate");
        store.phone_numbers().insert("5550100").expect("insert");
    }

    let store = Store::open(&db_path).expect("reopen store");
    store.migrate().expect("migrate again");
    assert_eq!(
        store.phone_numbers().list_all().expect("list"),
        vec!["5550100"]
    );
}
