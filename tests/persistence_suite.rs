use std::fs;
use std::path::Path;

use expense_core::{
    expense::{Category, ExpenseRecord},
    storage::{JsonStorage, StorageBackend},
};
use tempfile::tempdir;

fn sample_records() -> Vec<ExpenseRecord> {
    vec![
        ExpenseRecord::new("Rent", "Monthly", Category::Home, 500).unwrap(),
        ExpenseRecord::new("Cinema", "Friday night", Category::Entertainment, 25)
            .unwrap()
            .with_completed(true),
        ExpenseRecord::new("Taxes", "Quarterly", Category::TaxesAndFees, 310).unwrap(),
    ]
}

fn tmp_path_for(path: &Path) -> std::path::PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.tmp", existing),
        None => String::from("tmp"),
    };
    tmp.set_extension(ext);
    tmp
}

#[test]
fn roundtrip_is_field_for_field_equal() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();

    let records = sample_records();
    storage.save(&records).expect("save records");
    let loaded = storage.load().expect("load records");
    assert_eq!(
        loaded, records,
        "reloaded collection must match the saved one field for field"
    );
}

#[test]
fn document_uses_the_original_wire_shape() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();

    storage.save(&sample_records()).expect("save records");
    let raw = fs::read_to_string(storage.file_path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entries = value.as_array().expect("document is a record array");
    assert_eq!(entries.len(), 3);
    let rent = &entries[0];
    assert_eq!(rent["title"], "Rent");
    assert_eq!(rent["description"], "Monthly");
    assert_eq!(rent["category"], "Home");
    assert_eq!(rent["amount"], 500);
    assert_eq!(rent["completed"], false);
    assert_eq!(entries[1]["category"], "Entertainment");
    assert_eq!(entries[2]["category"], "Taxes and fees");
}

#[test]
fn atomic_save_failure_preserves_original_file() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();

    storage.save(&sample_records()).expect("initial save");
    let original = fs::read_to_string(storage.file_path()).expect("read original file");

    // Create a directory that collides with the staging file name to force
    // File::create to fail.
    let tmp_path = tmp_path_for(storage.file_path());
    fs::create_dir_all(&tmp_path).unwrap();

    let mut changed = sample_records();
    changed.push(ExpenseRecord::new("Bus", "Commute", Category::Transport, 3).unwrap());
    let result = storage.save(&changed);
    assert!(
        result.is_err(),
        "expected save to fail when the staging path is a directory"
    );

    let current = fs::read_to_string(storage.file_path()).expect("read after failure");
    assert_eq!(
        current, original,
        "a failed save must not corrupt the original file"
    );

    let _ = fs::remove_dir_all(&tmp_path);
}

#[test]
fn absent_and_malformed_documents_load_empty() {
    let temp = tempdir().unwrap();
    let storage = JsonStorage::new(Some(temp.path().to_path_buf())).unwrap();

    assert!(storage.load().expect("load absent").is_empty());

    fs::write(storage.file_path(), "][ definitely not json").unwrap();
    assert!(
        storage.load().expect("load malformed").is_empty(),
        "unparsable content counts as no prior state"
    );

    fs::write(storage.file_path(), r#"{"totally": "wrong shape"}"#).unwrap();
    assert!(storage.load().expect("load wrong shape").is_empty());
}
