use super::*;

#[test]
fn best_effort_reports_failed_calls() {
    assert!(!best_effort("remove", Err("SecurityError")));
}

#[test]
fn best_effort_passes_successful_calls() {
    assert!(best_effort::<&str>("write", Ok(())));
}

#[cfg(not(feature = "csr"))]
#[test]
fn native_storage_is_always_empty() {
    let storage = LocalTokenStorage::new("token");
    storage.store("tok123");
    assert_eq!(storage.load(), None);
    storage.clear();
}
