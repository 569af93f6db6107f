//! Conversion between stored task records and their wire shape.
//!
//! Both directions copy field for field. The `Option` entry points map an
//! absent input to an absent output.

use crate::task::{
    domain::{Task, TaskData},
    dto::TaskDto,
};

/// Maps a stored task to its wire shape.
#[must_use]
pub fn to_wire(task: Option<&Task>) -> Option<TaskDto> {
    task.map(TaskDto::from)
}

/// Maps a wire shape to an internal task record.
///
/// A missing or blank status becomes the default `NEW` label.
#[must_use]
pub fn to_internal(dto: Option<&TaskDto>) -> Option<Task> {
    dto.map(Task::from)
}

impl From<&Task> for TaskDto {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id(),
            title: task.title().to_owned(),
            description: task.description().map(str::to_owned),
            user_id: task.user_id(),
            status: Some(task.status().clone()),
        }
    }
}

impl From<&TaskDto> for Task {
    fn from(dto: &TaskDto) -> Self {
        let status = dto
            .status
            .as_ref()
            .filter(|status| !status.is_blank())
            .cloned()
            .unwrap_or_default();
        Self::from_data(TaskData {
            id: dto.id,
            title: dto.title.clone(),
            description: dto.description.clone(),
            user_id: dto.user_id,
            status,
        })
    }
}
