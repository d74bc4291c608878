//! Identifier uniqueness under concurrent access.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rstest::rstest;

use super::helpers::{base_time, wired};

const TASKS: usize = 8;
const SENDS_PER_TASK: usize = 25;

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_sends_receive_distinct_ids(base_time: DateTime<Utc>) {
    let fx = wired(base_time, 1).await;

    let handles: Vec<_> = (0..TASKS)
        .map(|task| {
            let service = Arc::clone(&fx.service);
            let sender = fx.alice.clone();
            let receiver = fx.bob.clone();
            tokio::spawn(async move {
                let mut ids = Vec::with_capacity(SENDS_PER_TASK);
                for n in 0..SENDS_PER_TASK {
                    let sent = service
                        .send_message(Some(&sender), Some(&receiver), format!("{task}/{n}"))
                        .await
                        .expect("send");
                    ids.push(sent.id());
                }
                ids
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for id in handle.await.expect("task completes") {
            assert!(seen.insert(id), "duplicate id {id}");
        }
    }

    assert_eq!(seen.len(), TASKS * SENDS_PER_TASK);
    assert_eq!(fx.store.len(), TASKS * SENDS_PER_TASK);
    let inbox = fx.service.get_messages(Some(&fx.bob)).await.expect("listing");
    assert_eq!(inbox.len(), TASKS * SENDS_PER_TASK);
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_sends_and_deletes_never_reuse_ids(base_time: DateTime<Utc>) {
    let fx = wired(base_time, 1).await;

    let handles: Vec<_> = (0..TASKS)
        .map(|task| {
            let service = Arc::clone(&fx.service);
            let sender = fx.alice.clone();
            let receiver = fx.bob.clone();
            tokio::spawn(async move {
                let mut ids = Vec::with_capacity(SENDS_PER_TASK);
                for n in 0..SENDS_PER_TASK {
                    let sent = service
                        .send_message(Some(&sender), Some(&receiver), format!("{task}/{n}"))
                        .await
                        .expect("send");
                    service
                        .delete_message(Some(&receiver), sent.id().value())
                        .await
                        .expect("delete own message");
                    ids.push(sent.id());
                }
                ids
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for id in handle.await.expect("task completes") {
            assert!(seen.insert(id), "duplicate id {id}");
        }
    }

    assert_eq!(seen.len(), TASKS * SENDS_PER_TASK);
    assert!(fx.store.is_empty());
}
