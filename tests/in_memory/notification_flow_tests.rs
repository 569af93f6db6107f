//! Status events flowing from task updates to notifications.

use super::helpers::{RECIPIENT, Stack, stack};
use rstest::rstest;
use taskline::notification::domain::{Acknowledgement, NotificationError};
use taskline::task::{domain::UserId, dto::TaskDto};

async fn create_and_update(stack: &Stack, updates: usize) {
    let created = stack
        .service
        .create(&TaskDto::new("Ship it", UserId::new(1)))
        .await
        .expect("creation should succeed");
    let id = created.id.expect("created task has an id");
    for _ in 0..updates {
        stack
            .service
            .update(id, &TaskDto::new("Ship it", UserId::new(1)))
            .await
            .expect("update should succeed");
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn each_update_produces_one_notification(stack: Stack) {
    create_and_update(&stack, 2).await;

    let delivered = stack.deliver_published().await;

    let sent = stack.sender.sent();
    assert_eq!(delivered, 2);
    assert_eq!(sent.len(), 2);
    assert!(sent.iter().all(|notification| notification.to == RECIPIENT
        && notification.subject == "Task Status Update"
        && notification.body.starts_with("Task 1 is now UPDATE.")));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn creation_alone_sends_nothing(stack: Stack) {
    create_and_update(&stack, 0).await;

    assert_eq!(stack.deliver_published().await, 0);
    assert!(stack.sender.sent().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_delivery_does_not_block_later_events(stack: Stack) {
    create_and_update(&stack, 1).await;
    stack
        .sender
        .set_failure(Some(NotificationError::Authentication("535".to_owned())));
    stack.deliver_published().await;
    stack.sender.set_failure(None);

    create_and_update(&stack, 1).await;
    let events = stack.publisher.published();
    let latest = events.last().expect("an event was published");
    let payload = serde_json::to_vec(&latest.event).expect("event should serialise");
    assert_eq!(stack.consumer.handle(&payload).await, Acknowledgement::Ack);

    assert_eq!(stack.sender.sent().len(), 1);
}
