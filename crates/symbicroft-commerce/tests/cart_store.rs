//! Cart store behaviour over the JSON-file backend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use proptest::prelude::*;
use symbicroft_commerce::prelude::*;
use symbicroft_store::{FileStorage, MemoryStorage, StorageBackend};

fn masala(quantity: i64) -> CartItem {
    CartItem::new(ProductId::new(1), "Masala", 100.0, quantity)
}

fn file_cart(dir: &tempfile::TempDir) -> CartStore<FileStorage> {
    CartStore::new(FileStorage::open(dir.path().join("storage.json")), EventBus::new())
}

#[test]
fn test_masala_example() {
    let dir = tempfile::tempdir().unwrap();
    let cart = file_cart(&dir);

    cart.add_item(masala(2));
    cart.add_item(masala(3));
    assert_eq!(cart.get_item(ProductId::new(1)).unwrap().quantity, 5);
    assert_eq!(cart.get_total(), 500.0);

    cart.update_quantity(ProductId::new(1), -5);
    assert!(cart.get_item(ProductId::new(1)).is_none());
    assert_eq!(cart.get_item_count(), 0);
}

#[test]
fn test_cart_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    {
        let cart = file_cart(&dir);
        cart.add_item(masala(2).with_image("masala.png").with_stock(40));
        cart.add_item(CartItem::new(ProductId::new(2), "Chai", 45.5, 1));
    }

    let cart = file_cart(&dir);
    let items = cart.get_items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].image_path.as_deref(), Some("masala.png"));
    assert_eq!(items[0].stock_quantity, Some(40));
    assert_eq!(cart.get_total(), 245.5);
}

#[test]
fn test_clear_leaves_other_keys() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::open(dir.path().join("storage.json")));
    let session = AuthSession::new(Arc::clone(&storage));
    session.set_token("abc").unwrap();

    let cart = CartStore::new(Arc::clone(&storage), EventBus::new());
    cart.add_item(masala(1));
    cart.clear_cart();

    assert_eq!(storage.keys().unwrap(), vec![AUTH_TOKEN_KEY]);
    assert!(session.is_authenticated());
    assert!(cart.get_items().is_empty());
    assert_eq!(cart.get_total(), 0.0);
}

#[test]
fn test_logout_keeps_cart() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileStorage::open(dir.path().join("storage.json")));
    let session = AuthSession::new(Arc::clone(&storage));
    let cart = CartStore::new(Arc::clone(&storage), NoopNotifier);

    session.set_token("abc").unwrap();
    cart.add_item(masala(3));
    session.logout().unwrap();

    assert!(!session.is_authenticated());
    assert_eq!(cart.get_item_count(), 3);
}

#[test]
fn test_product_page_adds_to_cart() {
    let body = serde_json::json!({"products": [{
        "id": 7,
        "product_id": "SC-CHAI-250",
        "name": "Masala Chai",
        "price": 45.5,
        "stock_quantity": 25,
        "category_id": 2,
        "image_path": "products/chai.png",
        "status": "active",
        "created_at": "2026-09-01",
        "updated_at": "2026-09-01"
    }], "pagination": {"totalItems": 1}});
    let products = ListResponse::<Product>::from_backend(body).unwrap();
    let cart = CartStore::new(MemoryStorage::new(), NoopNotifier);

    let product = &products.data[0];
    assert!(product.is_available());
    assert!(cart.add_item(product.to_cart_item(2)));
    assert!(cart.add_item(product.to_cart_item(1)));

    let line = cart.get_item(ProductId::new(7)).unwrap();
    assert_eq!(line.quantity, 3);
    assert_eq!(line.image_path.as_deref(), Some("products/chai.png"));
    assert_eq!(cart.get_total(), 136.5);
}

#[test]
fn test_corrupt_file_is_overwritten_by_next_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    std::fs::write(&path, "{truncated").unwrap();
    let cart = file_cart(&dir);

    assert!(cart.get_items().is_empty());
    assert!(cart.add_item(masala(2)));
    assert_eq!(cart.get_item_count(), 2);

    assert!(cart.clear_cart());
    assert_eq!(cart.get_item_count(), 0);
}

#[test]
fn test_clear_recovers_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("storage.json"), "not json").unwrap();
    let cart = file_cart(&dir);

    assert!(cart.clear_cart());
    assert!(cart.add_item(masala(1)));
    assert_eq!(cart.get_total(), 100.0);
}

#[test]
fn test_two_handles_share_state() {
    let storage = MemoryStorage::new();
    let header = CartStore::new(storage.clone(), NoopNotifier);
    let page = CartStore::new(storage, NoopNotifier);

    page.add_item(masala(4));
    assert_eq!(header.get_item_count(), 4);
}

#[test]
fn test_badge_follows_events() {
    let cart = CartStore::new(MemoryStorage::new(), EventBus::new());
    let badge = Arc::new(Mutex::new(0_i64));
    let sink = Arc::clone(&badge);
    let id = cart.subscribe(move |event| *sink.lock().unwrap() = event.item_count());

    cart.add_item(masala(2));
    cart.add_item(CartItem::new(ProductId::new(2), "Chai", 45.5, 3));
    assert_eq!(*badge.lock().unwrap(), 5);

    cart.remove_item(ProductId::new(1));
    assert_eq!(*badge.lock().unwrap(), 3);

    assert!(cart.unsubscribe(id));
    cart.clear_cart();
    assert_eq!(*badge.lock().unwrap(), 3);
}

#[test]
fn test_checkout_from_store() {
    let cart = CartStore::new(MemoryStorage::new(), NoopNotifier);
    cart.add_item(masala(5));

    let customer = CustomerDetails {
        customer_name: "Asha".to_string(),
        customer_email: "asha@example.in".to_string(),
        customer_phone: "9876543210".to_string(),
        shipping_address: "12 MG Road, Pune".to_string(),
    };
    let snapshot = cart.snapshot();
    let order = CreateOrderData::from_cart(customer, &snapshot).unwrap();
    let payment = CreatePaymentOrderRequest::for_cart(&snapshot).unwrap();
    assert_eq!(order.total(), 500.0);
    assert_eq!(payment.amount, 500.0);
}

fn distinct_items() -> impl Strategy<Value = Vec<CartItem>> {
    prop::collection::hash_map(1_i64..1000, (1_i64..50, 0_u32..100_000), 0..20).prop_map(|m| {
        m.into_iter()
            .map(|(id, (qty, paise))| {
                CartItem::new(ProductId::new(id), format!("Product {id}"), paise as f64 / 100.0, qty)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_distinct_adds_sum_quantities(items in distinct_items()) {
        let cart = CartStore::new(MemoryStorage::new(), NoopNotifier);
        for item in &items {
            cart.add_item(item.clone());
        }
        let expected: i64 = items.iter().map(|i| i.quantity).sum();
        prop_assert_eq!(cart.get_item_count(), expected);
        prop_assert_eq!(cart.get_items().len(), items.len());
    }

    #[test]
    fn prop_repeat_add_merges(q1 in 1_i64..10_000, q2 in 1_i64..10_000) {
        let cart = CartStore::new(MemoryStorage::new(), NoopNotifier);
        cart.add_item(masala(q1));
        cart.add_item(masala(q2));
        prop_assert_eq!(cart.get_items().len(), 1);
        prop_assert_eq!(cart.get_item(ProductId::new(1)).unwrap().quantity, q1 + q2);
    }

    #[test]
    fn prop_roundtrip_preserves_items(items in distinct_items()) {
        let dir = tempfile::tempdir().unwrap();
        {
            let cart = file_cart(&dir);
            for item in &items {
                cart.add_item(item.clone());
            }
        }
        let read: HashMap<ProductId, CartItem> = file_cart(&dir)
            .get_items()
            .into_iter()
            .map(|i| (i.product_id, i))
            .collect();
        prop_assert_eq!(read.len(), items.len());
        for item in &items {
            prop_assert_eq!(read.get(&item.product_id), Some(item));
        }
    }

    #[test]
    fn prop_remove_missing_is_noop(items in distinct_items(), missing in 1000_i64..2000) {
        let cart = CartStore::new(MemoryStorage::new(), NoopNotifier);
        for item in &items {
            cart.add_item(item.clone());
        }
        let before = cart.get_items();
        prop_assert!(!cart.remove_item(ProductId::new(missing)));
        prop_assert_eq!(cart.get_items(), before);
    }

    #[test]
    fn prop_non_positive_update_removes(qty in 1_i64..100, update in -100_i64..=0) {
        let cart = CartStore::new(MemoryStorage::new(), NoopNotifier);
        cart.add_item(masala(qty));
        cart.update_quantity(ProductId::new(1), update);
        prop_assert!(!cart.is_in_cart(ProductId::new(1)));
    }
}
