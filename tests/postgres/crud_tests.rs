//! CRUD behaviour of the `PostgreSQL` task repository.

use super::helpers::repository;
use taskline::task::{
    domain::{Task, TaskId, TaskStatus, UserId},
    ports::{TaskRepository, TaskRepositoryError},
};

#[tokio::test(flavor = "multi_thread")]
async fn save_assigns_id_and_round_trips_fields() {
    let Some(repo) = repository().await else {
        return;
    };

    let saved = repo
        .save(Task::new("Persist me", Some("with details".to_owned()), UserId::new(11)))
        .await
        .expect("insert should succeed");
    let id = saved.id().expect("insert assigns an id");
    let fetched = repo
        .find_by_id(id)
        .await
        .expect("lookup should succeed")
        .expect("inserted row should exist");

    assert_eq!(fetched, saved);
    assert_eq!(fetched.status().as_str(), TaskStatus::NEW);
    assert_eq!(fetched.description(), Some("with details"));
}

#[tokio::test(flavor = "multi_thread")]
async fn update_overwrites_row_and_clears_description() {
    let Some(repo) = repository().await else {
        return;
    };
    let mut task = repo
        .save(Task::new("Before", Some("old".to_owned()), UserId::new(1)))
        .await
        .expect("insert should succeed");

    task.revise("After".to_owned(), None, UserId::new(2));
    task.set_status(TaskStatus::updated());
    let updated = repo.save(task.clone()).await.expect("update should succeed");

    assert_eq!(updated, task);
    let id = updated.id().expect("row has an id");
    let fetched = repo
        .find_by_id(id)
        .await
        .expect("lookup should succeed")
        .expect("updated row should exist");
    assert_eq!(fetched.description(), None);
    assert_eq!(fetched.status().as_str(), TaskStatus::UPDATE);
}

#[tokio::test(flavor = "multi_thread")]
async fn delete_removes_row_and_missing_update_is_not_found() {
    let Some(repo) = repository().await else {
        return;
    };
    let saved = repo
        .save(Task::new("Short lived", None, UserId::new(1)))
        .await
        .expect("insert should succeed");
    let id = saved.id().expect("row has an id");

    repo.delete_by_id(id).await.expect("delete should succeed");

    assert!(!repo.exists(id).await.expect("exists should succeed"));
    let ghost = repo.save(saved).await;
    assert!(matches!(ghost, Err(TaskRepositoryError::NotFound(missing)) if missing == id));
    assert!(
        repo.find_by_id(TaskId::new(i64::MAX))
            .await
            .expect("lookup should succeed")
            .is_none()
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn find_all_is_ordered_by_id() {
    let Some(repo) = repository().await else {
        return;
    };
    for title in ["one", "two"] {
        repo.save(Task::new(title, None, UserId::new(1)))
            .await
            .expect("insert should succeed");
    }

    let ids: Vec<TaskId> = repo
        .find_all()
        .await
        .expect("listing should succeed")
        .iter()
        .filter_map(Task::id)
        .collect();

    assert!(ids.windows(2).all(|pair| matches!(pair, [a, b] if a < b)));
}
