//! Then steps for task lifecycle BDD scenarios.

use super::world::{TOPIC, TaskLifecycleWorld};
use rstest_bdd_macros::then;
use taskline::notification::domain::Acknowledgement;

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let task = world
        .last_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing task in scenario world"))?;
    let actual = task.status.as_ref().map(|label| label.as_str());
    eyre::ensure!(
        actual == Some(status.as_str()),
        "expected status {status}, found {actual:?}"
    );
    Ok(())
}

#[then("{count:usize} status event was published for the task")]
fn events_published_for_task(world: &TaskLifecycleWorld, count: usize) -> Result<(), eyre::Report> {
    count_events_for_task(world, count)
}

#[then("{count:usize} status events were published for the task")]
fn events_published_for_task_plural(
    world: &TaskLifecycleWorld,
    count: usize,
) -> Result<(), eyre::Report> {
    count_events_for_task(world, count)
}

fn count_events_for_task(world: &TaskLifecycleWorld, count: usize) -> Result<(), eyre::Report> {
    let id = world
        .last_task
        .as_ref()
        .and_then(|task| task.id)
        .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))?;
    let published = world
        .publisher
        .published_to(TOPIC)
        .into_iter()
        .filter(|event| event.task_id == id)
        .count();
    eyre::ensure!(
        published == count,
        "expected {count} events for task {id}, found {published}"
    );
    Ok(())
}

#[then("no status events were published")]
fn no_events_published(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    let published = world.publisher.published().len();
    eyre::ensure!(published == 0, "expected no events, found {published}");
    Ok(())
}

#[then(r#"the operation fails with "{message}""#)]
fn operation_fails_with(world: &TaskLifecycleWorld, message: String) -> Result<(), eyre::Report> {
    let error = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected the operation to fail"))?;
    eyre::ensure!(
        error.to_string() == message,
        "expected error {message:?}, found {:?}",
        error.to_string()
    );
    Ok(())
}

#[then(r#"{count:usize} notification was sent to "{recipient}""#)]
fn notification_sent(
    world: &TaskLifecycleWorld,
    count: usize,
    recipient: String,
) -> Result<(), eyre::Report> {
    count_notifications(world, count, &recipient)
}

#[then(r#"{count:usize} notifications were sent to "{recipient}""#)]
fn notifications_sent(
    world: &TaskLifecycleWorld,
    count: usize,
    recipient: String,
) -> Result<(), eyre::Report> {
    count_notifications(world, count, &recipient)
}

fn count_notifications(
    world: &TaskLifecycleWorld,
    count: usize,
    recipient: &str,
) -> Result<(), eyre::Report> {
    let sent = world
        .sender
        .sent()
        .iter()
        .filter(|notification| notification.to == recipient)
        .count();
    eyre::ensure!(
        sent == count,
        "expected {count} notifications to {recipient}, found {sent}"
    );
    Ok(())
}

#[then("every consumed event was acknowledged")]
fn every_event_acknowledged(world: &TaskLifecycleWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        !world.acknowledgements.is_empty(),
        "no events were consumed"
    );
    eyre::ensure!(
        world
            .acknowledgements
            .iter()
            .all(|ack| *ack == Acknowledgement::Ack),
        "an event was not acknowledged"
    );
    Ok(())
}
