//! Shared test helpers for in-memory adapter integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use postbox::message::{adapters::memory::InMemoryMessageStore, services::MessageService};
use postbox::user::{
    adapters::memory::InMemoryUserRepository, domain::User, services::UserDirectoryService,
};
use rstest::fixture;

/// Clock that advances by a fixed step every time it is read.
#[derive(Debug)]
pub struct StepClock {
    base: DateTime<Utc>,
    step_secs: i64,
    reads: AtomicI64,
}

impl StepClock {
    /// Creates a clock whose first reading is `base`.
    #[must_use]
    pub const fn new(base: DateTime<Utc>, step_secs: i64) -> Self {
        Self {
            base,
            step_secs,
            reads: AtomicI64::new(0),
        }
    }
}

impl Clock for StepClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let read = self.reads.fetch_add(1, Ordering::SeqCst);
        self.base + TimeDelta::seconds(read * self.step_secs)
    }
}

/// Store type stamped by a [`StepClock`].
pub type SteppedStore = InMemoryMessageStore<StepClock>;

/// Message service over the stepped store.
pub type SteppedService = MessageService<SteppedStore, InMemoryUserRepository>;

/// A fully wired message service with two registered users.
pub struct Fixture {
    pub service: Arc<SteppedService>,
    pub store: Arc<SteppedStore>,
    pub directory: UserDirectoryService<InMemoryUserRepository>,
    pub alice: User,
    pub bob: User,
}

/// Fixed starting instant used by stepped clocks.
#[fixture]
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0)
        .single()
        .expect("valid base time")
}

/// Builds a fixture whose clock moves `step_secs` per message.
pub async fn wired(base: DateTime<Utc>, step_secs: i64) -> Fixture {
    let users = Arc::new(InMemoryUserRepository::new());
    let directory = UserDirectoryService::new(Arc::clone(&users));
    let alice = directory.create_user("Alice").await.expect("create Alice");
    let bob = directory.create_user("Bob").await.expect("create Bob");
    let store = Arc::new(InMemoryMessageStore::new(StepClock::new(base, step_secs)));
    Fixture {
        service: Arc::new(MessageService::new(Arc::clone(&store), users)),
        store,
        directory,
        alice,
        bob,
    }
}
