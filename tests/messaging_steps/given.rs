//! Given steps for messaging BDD scenarios.

use super::world::{MessagingWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"registered users "{first}" and "{second}""#)]
fn registered_users(
    world: &mut MessagingWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    for name in [first, second] {
        let user = run_async(world.directory.create_user(&name))
            .wrap_err_with(|| format!("register {name}"))?;
        world.users.insert(name, user);
    }
    Ok(())
}

#[given(r#""{sender}" has sent "{content}" to "{receiver}""#)]
fn has_sent(
    world: &mut MessagingWorld,
    sender: String,
    content: String,
    receiver: String,
) -> Result<(), eyre::Report> {
    let from = world.user(&sender)?;
    let to = world.user(&receiver)?;
    let message = run_async(world.service.send_message(Some(&from), Some(&to), content))
        .wrap_err("send message in scenario setup")?;
    world.last_sent = Some(message);
    Ok(())
}
