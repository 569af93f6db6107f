//! Given steps for task lifecycle BDD scenarios.

use super::world::{TaskLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskline::notification::domain::NotificationError;
use taskline::task::{domain::UserId, dto::TaskDto};

#[given(r#"a task titled "{title}" owned by user #{user_id:i64}"#)]
fn task_exists(
    world: &mut TaskLifecycleWorld,
    title: String,
    user_id: i64,
) -> Result<(), eyre::Report> {
    let created = run_async(
        world
            .service
            .create(&TaskDto::new(title, UserId::new(user_id))),
    )
    .wrap_err("create task for lifecycle scenario")?;
    world.last_task = Some(created);
    Ok(())
}

#[given("the mail server rejects credentials")]
fn mail_server_rejects_credentials(world: &mut TaskLifecycleWorld) {
    world.sender.set_failure(Some(NotificationError::Authentication(
        "535 5.7.8 authentication credentials invalid".to_owned(),
    )));
}
