use axum::{extract::State, http::StatusCode, Json};
use common::types::Message;
use service::students::{parse_id, Student, StudentInput};
use tracing::info;

use crate::{
    errors::ApiError,
    extract::{IdToken, JsonPayload},
    state::AppState,
};

pub const MSG_DELETED: &str = "Estudante excluído com sucesso!";

/// 列出所有学生
pub async fn list(State(state): State<AppState>) -> Json<Vec<Student>> {
    let students = state.students.list().await;
    info!(count = students.len(), "list students");
    Json(students)
}

/// 创建学生；id 由存储分配
pub async fn create(
    State(state): State<AppState>,
    JsonPayload(input): JsonPayload<StudentInput>,
) -> (StatusCode, Json<Student>) {
    let created = state.students.create(input).await;
    info!(id = created.id, "created student");
    (StatusCode::CREATED, Json(created))
}

/// 获取指定学生
pub async fn get(
    State(state): State<AppState>,
    IdToken(token): IdToken,
) -> Result<Json<Student>, ApiError> {
    let id = parse_id(&token).map_err(ApiError::invalid_id)?;
    state
        .students
        .get(id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found(format!("student {} not found", id)))
}

/// 更新指定学生；先解析 body，再解析 id
pub async fn update(
    State(state): State<AppState>,
    IdToken(token): IdToken,
    JsonPayload(input): JsonPayload<StudentInput>,
) -> Result<Json<Student>, ApiError> {
    let id = parse_id(&token).map_err(ApiError::invalid_id)?;
    let updated = state.students.update(id, input).await?;
    info!(id, "updated student");
    Ok(Json(updated))
}

/// 删除指定学生；不存在时同样返回成功
pub async fn delete(
    State(state): State<AppState>,
    IdToken(token): IdToken,
) -> Result<Json<Message>, ApiError> {
    let id = parse_id(&token).map_err(ApiError::invalid_id)?;
    let removed = state.students.delete(id).await;
    info!(id, removed, "delete student");
    Ok(Json(Message::new(MSG_DELETED)))
}
