//! Tests for the rate limiter

use super::limiter::RateLimiter;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[tokio::test]
async fn test_unbounded_admits_immediately() {
    let limiter = RateLimiter::new(0, 0);
    assert!(!limiter.is_bounded());

    for _ in 0..100 {
        assert!(limiter.admit().await.is_none());
    }
}

#[tokio::test]
async fn test_negative_caps_mean_unbounded() {
    let limiter = RateLimiter::new(-1, -5);
    assert!(!limiter.is_bounded());
    assert!(limiter.admit().await.is_none());
}

#[tokio::test]
async fn test_permits_are_limited() {
    let limiter = RateLimiter::new(2, 0);
    assert!(limiter.is_bounded());
    assert_eq!(limiter.available_permits(), Some(2));

    let p1 = limiter.admit().await;
    let p2 = limiter.admit().await;
    assert!(p1.is_some());
    assert!(p2.is_some());
    assert_eq!(limiter.available_permits(), Some(0));

    // Releasing a permit frees a slot
    drop(p1);
    assert_eq!(limiter.available_permits(), Some(1));
}

#[tokio::test]
async fn test_concurrency_never_exceeds_cap() {
    let cap = 3usize;
    let limiter = RateLimiter::new(cap as i64, 0);
    let in_flight = Arc::new(AtomicUsize::new(0));
    let max_seen = Arc::new(AtomicUsize::new(0));

    let tasks: Vec<_> = (0..20)
        .map(|_| {
            let limiter = limiter.clone();
            let in_flight = in_flight.clone();
            let max_seen = max_seen.clone();
            tokio::spawn(async move {
                let _permit = limiter.admit().await;
                let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                max_seen.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(5)).await;
                in_flight.fetch_sub(1, Ordering::SeqCst);
            })
        })
        .collect();

    for task in tasks {
        task.await.unwrap();
    }

    assert!(max_seen.load(Ordering::SeqCst) <= cap);
}

#[test]
fn test_wave_partitioning() {
    let limiter = RateLimiter::new(0, 3);
    let items: Vec<u32> = (0..7).collect();

    let waves: Vec<&[u32]> = limiter.waves(&items).collect();
    assert_eq!(waves.len(), 3);
    assert_eq!(waves[0], &[0, 1, 2]);
    assert_eq!(waves[1], &[3, 4, 5]);
    assert_eq!(waves[2], &[6]);
}

#[test]
fn test_single_wave_when_unset() {
    let limiter = RateLimiter::new(0, 0);
    let items: Vec<u32> = (0..7).collect();

    let waves: Vec<&[u32]> = limiter.waves(&items).collect();
    assert_eq!(waves.len(), 1);
    assert_eq!(waves[0].len(), 7);
}

#[test]
fn test_wave_larger_than_items_is_clamped() {
    let limiter = RateLimiter::new(0, 100);
    let items: Vec<u32> = (0..4).collect();

    let waves: Vec<&[u32]> = limiter.waves(&items).collect();
    assert_eq!(waves.len(), 1);
    assert_eq!(waves[0].len(), 4);
}

#[test]
fn test_wave_count() {
    let limiter = RateLimiter::new(0, 3);
    assert_eq!(limiter.wave_count(0), 0);
    assert_eq!(limiter.wave_count(3), 1);
    assert_eq!(limiter.wave_count(7), 3);

    let single = RateLimiter::new(0, 0);
    assert_eq!(single.wave_count(0), 0);
    assert_eq!(single.wave_count(50), 1);
}

#[test]
fn test_empty_items_yield_no_waves() {
    let limiter = RateLimiter::new(0, 3);
    let items: Vec<u32> = Vec::new();
    assert_eq!(limiter.waves(&items).count(), 0);
}
