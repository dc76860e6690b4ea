//! End-to-end inventory flow against a real database file
//!
//! Walks the full lifecycle (add → exit → rejected exit → delete) and
//! verifies that a reopened manager reproduces the same state.

use std::sync::Once;

use chrono::{Days, Local};
use larder::{
    InventoryConfig, InventoryError, InventoryManager, ListOrdering, MovementKind, MovementQuery,
    ProductDraft,
};
use tempfile::TempDir;

static TRACING: Once = Once::new();

/// Log inspection via RUST_LOG, e.g. RUST_LOG=larder=info
fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn config(dir: &TempDir) -> InventoryConfig {
    init_tracing();
    InventoryConfig::new(dir.path().join("inventory.redb"))
}

#[test]
fn test_full_product_lifecycle() {
    let dir = TempDir::new().unwrap();
    let mut manager = InventoryManager::open(&config(&dir)).unwrap();

    // Add
    let rice = manager
        .create_product(&ProductDraft::new("Rice", "kg", 10.0).with_description("Basmati"))
        .unwrap();
    assert_eq!(manager.product_count(), 1);
    assert_eq!(manager.movement_count(), 1);
    let newest = &manager.history(&MovementQuery::all())[0];
    assert_eq!(newest.kind, MovementKind::Entry);
    assert_eq!(newest.quantity, Some(10.0));

    // Exit within stock
    let remaining = manager.record_exit(&rice.id, 4.0).unwrap();
    assert_eq!(remaining, 6.0);
    assert_eq!(manager.movement_count(), 2);
    let newest = &manager.history(&MovementQuery::all())[0];
    assert_eq!(newest.kind, MovementKind::Exit);
    assert_eq!(newest.quantity, Some(4.0));

    // Exit beyond stock rejected without side effects
    let err = manager.record_exit(&rice.id, 100.0).unwrap_err();
    assert!(matches!(err, InventoryError::InsufficientStock { .. }));
    assert_eq!(manager.product(&rice.id).unwrap().quantity, 6.0);
    assert_eq!(manager.movement_count(), 2);

    // Delete journals the final state
    manager.delete_product(&rice.id).unwrap();
    assert_eq!(manager.product_count(), 0);
    assert_eq!(manager.movement_count(), 3);
    let newest = &manager.history(&MovementQuery::all())[0];
    assert_eq!(newest.kind, MovementKind::Delete);
    assert_eq!(newest.product.quantity, 6.0);
}

#[test]
fn test_reopen_reproduces_state() {
    let dir = TempDir::new().unwrap();
    let config = config(&dir);

    let (rice_id, history_before, products_before) = {
        let mut manager = InventoryManager::open(&config).unwrap();
        let rice = manager
            .create_product(&ProductDraft::new("Rice", "kg", 10.0).with_description("Basmati"))
            .unwrap();
        manager
            .create_product(&ProductDraft::new("Milk", "liter", 2.0))
            .unwrap();
        manager.record_exit(&rice.id, 4.0).unwrap();
        (
            rice.id,
            manager.history(&MovementQuery::all()),
            manager.search(""),
        )
    };

    let manager = InventoryManager::open(&config).unwrap();
    assert_eq!(manager.search(""), products_before);
    assert_eq!(manager.history(&MovementQuery::all()), history_before);
    assert_eq!(manager.product(&rice_id).unwrap().quantity, 6.0);
}

#[test]
fn test_reopened_manager_keeps_journaling() {
    let dir = TempDir::new().unwrap();
    let config = config(&dir);

    let rice_id = {
        let mut manager = InventoryManager::open(&config).unwrap();
        manager
            .create_product(&ProductDraft::new("Rice", "kg", 10.0))
            .unwrap()
            .id
    };

    let mut manager = InventoryManager::open(&config).unwrap();
    manager.record_exit(&rice_id, 1.0).unwrap();

    let history = manager.history(&MovementQuery::all());
    assert_eq!(history.len(), 2);
    // Ids keep increasing across restarts
    assert!(history[0].id > history[1].id);
}

#[test]
fn test_history_filters() {
    let dir = TempDir::new().unwrap();
    let mut manager = InventoryManager::open(&config(&dir)).unwrap();

    let rice = manager
        .create_product(&ProductDraft::new("Rice", "kg", 10.0))
        .unwrap();
    manager.record_exit(&rice.id, 2.0).unwrap();
    manager
        .edit_product(&rice.id, &ProductDraft::new("White Rice", "kg", 8.0))
        .unwrap();

    assert_eq!(manager.history(&MovementQuery::all()).len(), 3);
    assert_eq!(
        manager
            .history(&MovementQuery::kind(MovementKind::Entry))
            .len(),
        1
    );
    assert_eq!(
        manager
            .history(&MovementQuery::kind(MovementKind::Delete))
            .len(),
        0
    );

    // Everything above happened today, local time
    let today = Local::now().date_naive();
    assert_eq!(manager.history(&MovementQuery::on(today)).len(), 3);
    let yesterday = today.checked_sub_days(Days::new(1)).unwrap();
    assert!(manager.history(&MovementQuery::on(yesterday)).is_empty());
}

#[test]
fn test_list_ordering_policies() {
    let dir = TempDir::new().unwrap();
    let base = config(&dir);

    let mut manager = InventoryManager::open(&base).unwrap();
    manager
        .create_product(&ProductDraft::new("Rice", "kg", 1.0))
        .unwrap();
    manager
        .create_product(&ProductDraft::new("Beans", "kg", 1.0))
        .unwrap();
    manager
        .create_product(&ProductDraft::new("Milk", "liter", 1.0))
        .unwrap();

    // Default listing is lexicographic by name
    let names: Vec<String> = manager.search("").into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Beans", "Milk", "Rice"]);
    drop(manager);

    // Reopening with newest-first shows insertion order instead
    let manager =
        InventoryManager::open(&base.clone().with_ordering(ListOrdering::NewestFirst)).unwrap();
    let names: Vec<String> = manager.search("").into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["Milk", "Beans", "Rice"]);
}
