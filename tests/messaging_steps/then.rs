//! Then steps for messaging BDD scenarios.

use super::world::{MessagingWorld, run_async};
use postbox::message::{ports::MessageStoreError, services::MessageServiceError};
use rstest_bdd_macros::then;

#[then(r#"the message count for "{name}" is {count:usize}"#)]
fn message_count_is(
    world: &MessagingWorld,
    name: String,
    count: usize,
) -> Result<(), eyre::Report> {
    let user = world.user(&name)?;
    let inbox = run_async(world.service.get_messages(Some(&user)))?;
    if inbox.len() != count {
        return Err(eyre::eyre!(
            "expected {count} messages for {name}, found {}",
            inbox.len()
        ));
    }
    Ok(())
}

#[then(r#"the newest message for "{name}" reads "{content}""#)]
fn newest_message_reads(
    world: &MessagingWorld,
    name: String,
    content: String,
) -> Result<(), eyre::Report> {
    let user = world.user(&name)?;
    let sorted = run_async(world.service.get_messages_sorted_by_timestamp(Some(&user)))?;
    let newest = sorted
        .last()
        .ok_or_else(|| eyre::eyre!("inbox of {name} is empty"))?;
    if newest.content().as_str() != content {
        return Err(eyre::eyre!(
            "expected newest message {content:?}, found {:?}",
            newest.content().as_str()
        ));
    }
    Ok(())
}

fn expect_error(
    world: &MessagingWorld,
    description: &str,
    predicate: impl Fn(&MessageServiceError) -> bool,
) -> Result<(), eyre::Report> {
    match world.last_error.as_ref() {
        Some(err) if predicate(err) => Ok(()),
        Some(err) => Err(eyre::eyre!("expected {description}, got {err:?}")),
        None => Err(eyre::eyre!("expected {description}, but the operation succeeded")),
    }
}

#[then("the operation fails with a missing message error")]
fn fails_with_missing_message(world: &MessagingWorld) -> Result<(), eyre::Report> {
    expect_error(world, "MessageNotFound", |err| {
        matches!(
            err,
            MessageServiceError::Store(MessageStoreError::MessageNotFound { .. })
        )
    })
}

#[then("the operation fails with a missing inbox error")]
fn fails_with_missing_inbox(world: &MessagingWorld) -> Result<(), eyre::Report> {
    expect_error(world, "UserNotFound", |err| {
        matches!(
            err,
            MessageServiceError::Store(MessageStoreError::UserNotFound(_))
        )
    })
}

#[then("the operation fails with an invalid argument error")]
fn fails_with_invalid_argument(world: &MessagingWorld) -> Result<(), eyre::Report> {
    expect_error(world, "InvalidArgument", MessageServiceError::is_invalid_argument)
}

#[then("the operation fails with an unknown user error")]
fn fails_with_unknown_user(world: &MessagingWorld) -> Result<(), eyre::Report> {
    expect_error(world, "UnknownUser", |err| {
        matches!(err, MessageServiceError::UnknownUser(_))
    })
}
