use itertools::Itertools;

use super::*;

fn dictionary() -> Trie<i32> {
    let mut trie = Trie::new();
    let keys = vec!["hello", "world", "help", "work"];
    let values = vec![1, 2, 3, 4];

    for (&key, value) in keys.iter().zip(values.iter()) {
        trie.insert(key, *value);
    }
    trie
}

#[test]
fn empty() {
    let trie: Trie<i32> = Trie::new();
    assert_eq!(trie.max_depth(), 0);
    assert!(trie.is_empty());
    assert!(trie.root().is_none());
    assert_eq!(trie.get(&[0u8]), None);
    assert_eq!(trie.get(""), None);
    assert_eq!(trie.scan("anything"), None);
    assert_eq!(trie.iter().count(), 0);
}

#[test]
fn single() {
    let mut trie = Trie::new();
    let key = "abcde".to_owned();
    let value = 42;
    assert_eq!(trie.insert(&key, value), None);
    assert_eq!(trie.get(&key), Some(&value));
    assert_eq!(trie.max_depth(), key.len());
}

#[test]
fn multiple_unique() {
    let mut trie = Trie::new();
    let keys = vec!["abc", "def", "ghi"];
    let values = vec![1, 2, 3];

    for (&key, value) in keys.iter().zip(values.iter()) {
        trie.insert(key, *value);
    }

    for (&key, value) in keys.iter().zip(values.iter()) {
        assert_eq!(trie.get(key), Some(value));
    }
    assert_eq!(trie.len(), keys.len());
}

#[test]
fn multiple_overlapping() {
    let mut trie = Trie::new();
    let keys = vec!["abc", "abcd", "abcde"];
    let values = vec![1, 2, 3];

    for (&key, value) in keys.iter().zip(values.iter()) {
        trie.insert(key, *value);
    }

    for (&key, value) in keys.iter().zip(values.iter()) {
        assert_eq!(trie.get(key), Some(value));
    }
}

#[test]
fn prefixes_and_extensions_are_absent() {
    let trie = dictionary();
    assert_eq!(trie.get("hel"), None);
    assert_eq!(trie.get("he"), None);
    assert_eq!(trie.get("helloo"), None);
    assert_eq!(trie.get(""), None);
    assert_eq!(trie.get("What?"), None);
    assert!(!trie.contains_key("wor"));
    assert!(trie.contains_key("world"));
}

#[test]
fn dictionary_scenario() {
    let trie = dictionary();
    assert_eq!(trie.get("help"), Some(&3));
    assert_eq!(trie.scan("hello world"), Some(&1));
    assert_eq!(trie.scan("workout"), Some(&4));
    assert_eq!(trie.get("What?"), None);
    assert_eq!(trie.scan("What?"), None);
    assert_eq!(trie.max_depth(), 5);

    let mut count = 0;
    let mut total = 0;
    trie.for_each(|_, value| {
        count += 1;
        total += value;
    });
    assert_eq!((count, total), (4, 10));
}

#[test]
fn scan_with_suffix() {
    let trie = dictionary();
    for key in ["hello", "world", "help", "work"] {
        let longer = format!("{key}foo");
        assert_eq!(trie.scan(&longer), trie.get(key), "{longer}");
    }
}

#[test]
fn scan_stops_at_literal_node() {
    let mut trie = Trie::new();
    trie.insert("help", 3);
    trie.insert("h", 1);

    // Stops at the intermediate "he" node, which carries no value.
    assert_eq!(trie.scan("hex"), None);
    // The input runs out inside the path.
    assert_eq!(trie.scan("hel"), None);
    assert_eq!(trie.scan("hx"), Some(&1));
    assert_eq!(trie.scan("helpful"), Some(&3));
}

#[test]
fn empty_key_lives_on_root() {
    let mut trie = Trie::new();
    trie.insert("", 0);
    assert_eq!(trie.get(""), Some(&0));
    assert_eq!(trie.max_depth(), 0);
    // The root value matches anything that leaves the root immediately.
    assert_eq!(trie.scan("zzz"), Some(&0));
    assert_eq!(trie.iter().collect_vec(), vec![(Vec::new(), &0)]);
}

#[test]
fn zero_values_are_present() {
    let mut trie = Trie::new();
    trie.insert("zero", 0);
    trie.insert("blank", String::new().len());
    assert_eq!(trie.get("zero"), Some(&0));
    assert_eq!(trie.get("blank"), Some(&0));

    let mut flags = Trie::new();
    flags.insert(b"\x00", false);
    assert_eq!(flags.get(b"\x00"), Some(&false));
}

#[test]
fn reinsert_overwrites() {
    let mut trie = Trie::new();
    assert_eq!(trie.insert("key", 1), None);
    assert_eq!(trie.insert("key", 2), Some(1));
    assert_eq!(trie.get("key"), Some(&2));
    assert_eq!(trie.len(), 1);
}

#[test]
fn max_depth_never_shrinks() {
    let mut trie = Trie::new();
    trie.insert("abcdef", ());
    trie.insert("ab", ());
    assert_eq!(trie.max_depth(), 6);
    trie.insert("abcdef", ());
    trie.insert("", ());
    assert_eq!(trie.max_depth(), 6);
    trie.insert("abcdefg", ());
    assert_eq!(trie.max_depth(), 7);
}

#[test]
fn init_is_idempotent() {
    let mut trie = Trie::new();
    trie.init();
    assert!(trie.root().is_some());
    assert!(trie.is_empty());
    trie.insert("abc", 1);
    trie.init();
    trie.init();
    assert_eq!(trie.get("abc"), Some(&1));
    assert_eq!(trie.max_depth(), 3);
    assert_eq!(trie.len(), 1);
}

#[test]
fn insert_parts_concatenates() {
    let mut trie = Trie::new();
    trie.insert_parts([b"GIF".as_slice(), b"89".as_slice(), b"a".as_slice()], "gif");
    trie.insert_parts(["he", "", "llo"], "hello");
    assert_eq!(trie.get(b"GIF89a"), Some(&"gif"));
    assert_eq!(trie.get("hello"), Some(&"hello"));
    assert_eq!(trie.max_depth(), 6);
}

#[test]
fn binary_keys() {
    let mut trie = Trie::new();
    let keys: Vec<Vec<u8>> = vec![vec![0x00], vec![0xFF, 0x00], vec![0x0F, 0xF0], vec![0xF0, 0x0F]];
    for (i, key) in keys.iter().enumerate() {
        trie.insert(key, i);
    }
    for (i, key) in keys.iter().enumerate() {
        assert_eq!(trie.get(key), Some(&i));
    }
    assert_eq!(trie.get(&[0x0Fu8]), None);
    assert_eq!(trie.scan(&[0xFFu8, 0x00, 0xAB]), Some(&1));
}

#[test]
fn iter_visits_every_entry_once() {
    let trie = dictionary();
    let found = trie
        .iter()
        .map(|(key, value)| (String::from_utf8(key).unwrap(), *value))
        .sorted()
        .collect_vec();
    let expected = vec![
        ("hello".to_owned(), 1),
        ("help".to_owned(), 3),
        ("work".to_owned(), 4),
        ("world".to_owned(), 2),
    ];
    assert_eq!(found, expected);

    let mut walked = Vec::new();
    trie.for_each(|key, value| walked.push((key.to_vec(), *value)));
    assert_eq!(walked, trie.iter().map(|(k, v)| (k, *v)).collect_vec());
}

#[test]
fn iter_bytes() {
    let mut trie = Trie::new();
    let keys = vec!["abc", "def", "ghi", "\u{7f}"];
    let values = vec![1, 2, 3, 4];

    for (&key, value) in keys.iter().zip(values.iter()) {
        trie.insert(key, *value);
    }

    let found_bytes = trie
        .root()
        .unwrap()
        .bytes()
        .map(|(byte, _)| byte)
        .collect_vec();
    let expected_bytes: Vec<u8> = keys
        .iter()
        .filter_map(|key| key.bytes().next())
        .sorted()
        .collect_vec();

    assert_eq!(found_bytes, expected_bytes);
}

#[test]
fn leaves() {
    let trie = dictionary();
    let root = trie.root().unwrap();
    assert!(!root.is_leaf());
    let h = root.child(b'h').unwrap();
    assert!(h.value.is_none());
    let help = trie
        .root()
        .and_then(|n| n.child(b'h'))
        .and_then(|n| n.child(b'e'))
        .and_then(|n| n.child(b'l'))
        .and_then(|n| n.child(b'p'))
        .unwrap();
    assert!(help.is_leaf());
    assert_eq!(help.value, Some(3));
}

#[test]
fn get_mut_updates_in_place() {
    let mut trie = dictionary();
    *trie.get_mut("work").unwrap() += 10;
    assert_eq!(trie.get("work"), Some(&14));
    assert!(trie.get_mut("wor").is_none());
}

#[test]
fn collect_and_compare() {
    let trie: Trie<i32> = [("help", 3), ("hello", 1), ("work", 4), ("world", 2)]
        .into_iter()
        .collect();
    assert_eq!(trie, dictionary());
    assert_eq!(trie.clone(), trie);

    let mut other = trie.clone();
    other.insert("new", 5);
    assert_ne!(other, trie);
}

#[test]
fn write_keys_one_per_line() {
    let trie = dictionary();
    let mut out = Vec::new();
    trie.write_keys(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text.lines().sorted().collect_vec(),
        vec!["hello", "help", "work", "world"]
    );
    assert_eq!(trie.keys().count(), 4);
    assert!(trie.print_keys().is_ok());
}

#[test]
fn long_keys_are_not_walked_recursively() {
    const LENGTH: usize = 150_000;
    let mut trie = Trie::new();
    let key = vec![b'a'; LENGTH];
    trie.insert(&key, 1);
    trie.insert(&key[..LENGTH / 2], 2);
    assert_eq!(trie.max_depth(), LENGTH);
    assert_eq!(trie.get(&key), Some(&1));
    assert_eq!(trie.scan(&key), Some(&1));

    let mut lengths = Vec::new();
    trie.for_each(|key, value| lengths.push((key.len(), *value)));
    assert_eq!(lengths, vec![(LENGTH / 2, 2), (LENGTH, 1)]);
    assert_eq!(trie.iter().count(), 2);

    let mut out = Vec::new();
    trie.write_keys(&mut out).unwrap();
    assert_eq!(out.len(), LENGTH / 2 + 1 + LENGTH + 1);

    let copy = trie.clone();
    assert!(copy == trie);
    assert!(!format!("{:?}", copy.root().unwrap()).is_empty());
    drop(copy);
    drop(trie);
}
