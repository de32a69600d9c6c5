//! Integration tests for the startup cache scan
//!
//! The scan rebuilds the dedup tracker from whatever a previous run left
//! on disk, and must stay usable no matter what it finds there.

mod common;

use assert_fs::prelude::*;
use predicates::prelude::*;

use common::{emote, TestRoot};
use emotecache::core::cache::{CacheOutcome, EmoteCache};
use emotecache::core::size::EmoteSize;

fn cache_at(root: std::path::PathBuf) -> EmoteCache {
    EmoteCache::new(root, EmoteSize::default())
}

#[test]
fn test_bootstrap_recognizes_cached_files() {
    let root = TestRoot::new();
    root.seed("pets", "Foo-123.png");
    root.seed("memes", "bar-456.png");
    root.seed("memes", "weird.png");

    let cache = cache_at(root.path());
    let found = cache.bootstrap();

    assert_eq!(found, 2);
    assert!(cache.is_tracked("123"));
    assert!(cache.is_tracked("456"));
    assert_eq!(cache.tracked(), 2);
}

#[test]
fn test_bootstrap_creates_missing_root() {
    let temp = assert_fs::TempDir::new().unwrap();
    let root = temp.path().join("nested").join("emotes");

    let cache = cache_at(root);
    let found = cache.bootstrap();

    assert_eq!(found, 0);
    temp.child("nested/emotes").assert(predicate::path::is_dir());
}

#[test]
fn test_bootstrap_ignores_files_at_root_level() {
    let root = TestRoot::new();
    // A file sitting directly in the root is not part of any collection
    std::fs::write(root.path().join("stray-99.png"), b"png").unwrap();
    root.seed("pets", "Foo-123.png");

    let cache = cache_at(root.path());

    assert_eq!(cache.bootstrap(), 1);
    assert!(!cache.is_tracked("99"));
}

#[test]
fn test_bootstrap_ignores_unparseable_names() {
    let root = TestRoot::new();
    root.seed("pets", "no-id.png");
    root.seed("pets", "wrong-ext-12.jpg");
    root.seed("pets", "trailing-12.png.bak");

    let cache = cache_at(root.path());

    assert_eq!(cache.bootstrap(), 0);
    assert_eq!(cache.tracked(), 0);
}

#[test]
fn test_bootstrap_twice_adds_nothing_new() {
    let root = TestRoot::new();
    root.seed("pets", "Foo-123.png");

    let cache = cache_at(root.path());

    assert_eq!(cache.bootstrap(), 1);
    assert_eq!(cache.bootstrap(), 0);
    assert_eq!(cache.tracked(), 1);
}

#[test]
fn test_bootstrap_keeps_leading_zeros() {
    let root = TestRoot::new();
    root.seed("pets", "pad-007.png");

    let cache = cache_at(root.path());
    cache.bootstrap();

    assert!(cache.is_tracked("007"));
    assert!(!cache.is_tracked("7"));
}

#[test]
fn test_bootstrap_counts_same_id_once_across_collections() {
    let root = TestRoot::new();
    root.seed("alpha", "a-42.png");
    root.seed("beta", "b-42.png");

    let cache = cache_at(root.path());

    assert_eq!(cache.bootstrap(), 1);
}

#[tokio::test]
async fn test_bootstrap_prevents_redownload() {
    let root = TestRoot::new();
    root.seed("pets", "Foo-123.png");

    // Default CDN fetcher: any network attempt would fail loudly, so an
    // AlreadyTracked outcome proves the scan did its job
    let cache = cache_at(root.path());
    cache.bootstrap();

    let outcome = cache.cache_one(&emote("123", "Foo", "pets")).await;
    assert!(matches!(outcome, CacheOutcome::AlreadyTracked));
}
