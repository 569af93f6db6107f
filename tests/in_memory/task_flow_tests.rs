//! Task CRUD through the service with in-memory adapters.

use super::helpers::{Stack, TOPIC, stack};
use rstest::rstest;
use taskline::task::{
    domain::{TaskId, TaskStatus, TaskStatusEvent, UserId},
    dto::TaskDto,
    services::TaskServiceError,
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_update_delete_round_trip(stack: Stack) {
    let created = stack
        .service
        .create(&TaskDto::new("Test Task", UserId::new(1)).with_description("Test Description"))
        .await
        .expect("creation should succeed");
    let id = created.id.expect("created task has an id");
    assert_eq!(created.status, Some(TaskStatus::created()));

    let updated = stack
        .service
        .update(id, &TaskDto::new("Updated Task", UserId::new(1)).with_status("UPDATE"))
        .await
        .expect("update should succeed");
    assert_eq!(updated.status, Some(TaskStatus::updated()));
    assert_eq!(updated.description, None);
    assert_eq!(
        stack.publisher.published_to(TOPIC),
        vec![TaskStatusEvent::updated(id)]
    );

    stack.service.delete(id).await.expect("delete should succeed");
    assert!(matches!(
        stack.service.get(id).await,
        Err(TaskServiceError::NotFound(missing)) if missing == id
    ));
    assert_eq!(stack.publisher.published().len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn list_reflects_creates_and_deletes(stack: Stack) {
    let mut ids = Vec::new();
    for title in ["alpha", "beta", "gamma"] {
        let created = stack
            .service
            .create(&TaskDto::new(title, UserId::new(2)))
            .await
            .expect("creation should succeed");
        ids.push(created.id.expect("created task has an id"));
    }
    let beta = ids.get(1).copied().expect("three tasks were created");

    stack.service.delete(beta).await.expect("delete should succeed");

    let remaining: Vec<TaskId> = stack
        .service
        .list_all()
        .await
        .expect("listing should succeed")
        .into_iter()
        .filter_map(|dto| dto.id)
        .collect();
    assert_eq!(remaining.len(), 2);
    assert!(!remaining.contains(&beta));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_of_missing_task_mutates_nothing(stack: Stack) {
    stack
        .service
        .create(&TaskDto::new("keep me", UserId::new(3)))
        .await
        .expect("creation should succeed");

    let result = stack.service.delete(TaskId::new(404)).await;

    assert!(matches!(result, Err(TaskServiceError::NotFound(_))));
    assert_eq!(
        stack.service.list_all().await.expect("listing should succeed").len(),
        1
    );
}
