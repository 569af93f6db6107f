//! When steps for task lifecycle BDD scenarios.

use super::world::{TOPIC, TaskLifecycleWorld, run_async};
use rstest_bdd_macros::when;
use taskline::task::{
    domain::{TaskId, UserId},
    dto::TaskDto,
};

fn apply_update(world: &mut TaskLifecycleWorld, id: TaskId, title: String) {
    let owner = world
        .last_task
        .as_ref()
        .map_or_else(|| UserId::new(1), |task| task.user_id);
    match run_async(world.service.update(id, &TaskDto::new(title, owner))) {
        Ok(updated) => world.last_task = Some(updated),
        Err(err) => world.last_error = Some(err),
    }
}

#[when(r#"the task is updated with title "{title}""#)]
fn task_is_updated(world: &mut TaskLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    let id = world
        .last_task
        .as_ref()
        .and_then(|task| task.id)
        .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))?;
    apply_update(world, id, title);
    Ok(())
}

#[when(r#"task #{id:i64} is updated with title "{title}""#)]
fn task_with_id_is_updated(world: &mut TaskLifecycleWorld, id: i64, title: String) {
    apply_update(world, TaskId::new(id), title);
}

#[when("the published events are consumed")]
fn published_events_are_consumed(world: &mut TaskLifecycleWorld) -> Result<(), eyre::Report> {
    for event in world.publisher.published_to(TOPIC) {
        let payload = serde_json::to_vec(&event)?;
        let ack = run_async(world.consumer.handle(&payload));
        world.acknowledgements.push(ack);
    }
    Ok(())
}
