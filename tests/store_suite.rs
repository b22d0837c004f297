mod common;

use account_book::{Account, FIRST_ACCOUNT_NUMBER};
use common::setup_store;

#[test]
fn add_search_remove_walkthrough() {
    let mut store = setup_store();

    let alice = store.add(Account::new("Alice", 1111, 10000)).unwrap();
    let bob = store.add(Account::new("Bob", 2222, 5000)).unwrap();
    assert_eq!(alice, "1000");
    assert_eq!(bob, "1001");
    assert_eq!(store.count(), 2);

    let owned = store.search_by_owner("Alice");
    assert_eq!(owned.len(), 1);
    assert_eq!(owned[0], &store.list()[0]);

    assert!(store.remove("1000").unwrap());
    assert_eq!(store.count(), 1);
    assert!(!store.remove("1000").unwrap());
    assert!(store.search_by_number("1000").is_none());
}

#[test]
fn numbers_increase_strictly_and_are_never_reused() {
    let mut store = setup_store();
    let mut issued = Vec::new();
    for i in 0..5 {
        issued.push(store.add(Account::new(format!("owner-{i}"), 1, i)).unwrap());
        if i % 2 == 0 {
            assert!(store.remove(issued.last().unwrap()).unwrap());
        }
    }
    let numeric: Vec<u32> = issued.iter().map(|n| n.parse().unwrap()).collect();
    assert_eq!(numeric[0], FIRST_ACCOUNT_NUMBER);
    assert!(numeric.windows(2).all(|pair| pair[1] == pair[0] + 1));
    assert_eq!(store.next_number(), FIRST_ACCOUNT_NUMBER + 5);
    assert_eq!(store.add(Account::new("late", 1, 0)).unwrap(), "1005");
}

#[test]
fn count_tracks_list_length() {
    let mut store = setup_store();
    assert_eq!(store.count(), store.list().len());
    store.add(Account::new("Alice", 1, 1)).unwrap();
    store.add(Account::minus("Bob", 1, 0, 100)).unwrap();
    assert_eq!(store.count(), store.list().len());
    store.remove("1001").unwrap();
    assert_eq!(store.count(), store.list().len());
    assert_eq!(store.count(), 1);
}

#[test]
fn client_supplied_number_is_overwritten() {
    let mut store = setup_store();
    let mut account = Account::new("Alice", 1, 1);
    account.number = "42".into();
    assert_eq!(store.add(account).unwrap(), "1000");
    assert!(store.search_by_number("42").is_none());
    assert_eq!(store.search_by_number("1000").unwrap().owner, "Alice");
}

#[test]
fn owner_search_keeps_insertion_order() {
    let mut store = setup_store();
    store.add(Account::new("Lee", 1, 10000)).unwrap();
    store.add(Account::minus("Kim", 1, 0, 100000)).unwrap();
    store.add(Account::new("Lee", 1, 70000)).unwrap();

    let numbers: Vec<&str> = store
        .search_by_owner("Lee")
        .into_iter()
        .map(|account| account.number.as_str())
        .collect();
    assert_eq!(numbers, vec!["1000", "1002"]);
    assert!(store.search_by_owner("Park").is_empty());
    assert!(store.search_by_owner("lee").is_empty());
}

#[test]
fn remove_missing_number_leaves_sequence_unchanged() {
    let mut store = setup_store();
    store.add(Account::new("Alice", 1, 1)).unwrap();
    store.add(Account::new("Bob", 1, 1)).unwrap();
    let before = store.list().to_vec();
    assert!(!store.remove("9999").unwrap());
    assert_eq!(store.list(), before.as_slice());
}
