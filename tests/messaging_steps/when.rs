//! When steps for messaging BDD scenarios.

use super::world::{MessagingWorld, run_async};
use postbox::user::domain::User;
use rstest_bdd_macros::when;

#[when(r#""{sender}" sends "{content}" to "{receiver}""#)]
fn sends(
    world: &mut MessagingWorld,
    sender: String,
    content: String,
    receiver: String,
) -> Result<(), eyre::Report> {
    let from = world.user(&sender)?;
    let to = world.user(&receiver)?;
    let result = run_async(world.service.send_message(Some(&from), Some(&to), content));
    world.record_send(result);
    Ok(())
}

#[when(r#""{sender}" sends an empty message to "{receiver}""#)]
fn sends_empty(
    world: &mut MessagingWorld,
    sender: String,
    receiver: String,
) -> Result<(), eyre::Report> {
    let from = world.user(&sender)?;
    let to = world.user(&receiver)?;
    let result = run_async(world.service.send_message(Some(&from), Some(&to), ""));
    world.record_send(result);
    Ok(())
}

#[when(r#""{sender}" sends "{content}" to unregistered user {user_id:i64}"#)]
fn sends_to_unregistered(
    world: &mut MessagingWorld,
    sender: String,
    content: String,
    user_id: i64,
) -> Result<(), eyre::Report> {
    let from = world.user(&sender)?;
    let stranger = User::new(user_id, "Stranger");
    let result = run_async(
        world
            .service
            .send_message(Some(&from), Some(&stranger), content),
    );
    world.record_send(result);
    Ok(())
}

#[when(r#""{name}" deletes the last sent message"#)]
fn deletes_last_sent(world: &mut MessagingWorld, name: String) -> Result<(), eyre::Report> {
    let user = world.user(&name)?;
    let message_id = world
        .last_sent
        .as_ref()
        .map(|message| message.id().value())
        .ok_or_else(|| eyre::eyre!("no message has been sent in this scenario"))?;
    let result = run_async(world.service.delete_message(Some(&user), message_id));
    world.record_delete(result);
    Ok(())
}

#[when(r#""{name}" deletes message {message_id:i64}"#)]
fn deletes_message(
    world: &mut MessagingWorld,
    name: String,
    message_id: i64,
) -> Result<(), eyre::Report> {
    let user = world.user(&name)?;
    let result = run_async(world.service.delete_message(Some(&user), message_id));
    world.record_delete(result);
    Ok(())
}
