// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::application::dto::teacher_request::TeacherRequestDto;
use crate::application::use_cases::teacher_use_case::TeacherUseCase;
use crate::domain::models::teacher::Teacher;
use crate::domain::repositories::teacher_repository::TeacherRepository;
use crate::presentation::errors::AppError;
use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use std::sync::Arc;

/// 批量创建响应
#[derive(Debug, Serialize)]
pub struct CreateManyResponse {
    pub count: u64,
}

/// 创建教师
pub async fn create_teacher<R: TeacherRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Json(payload): Json<TeacherRequestDto>,
) -> Result<(StatusCode, Json<Teacher>), AppError> {
    let teacher = TeacherUseCase::new(repo).create(payload).await?;
    Ok((StatusCode::CREATED, Json(teacher)))
}

/// 批量创建教师，只返回写入数量
pub async fn create_teachers<R: TeacherRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Json(payload): Json<Vec<TeacherRequestDto>>,
) -> Result<(StatusCode, Json<CreateManyResponse>), AppError> {
    let count = TeacherUseCase::new(repo).create_many(payload).await?;
    Ok((StatusCode::CREATED, Json(CreateManyResponse { count })))
}

/// 获取全部教师
pub async fn list_teachers<R: TeacherRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
) -> Result<Json<Vec<Teacher>>, AppError> {
    let teachers = TeacherUseCase::new(repo).get_all().await?;
    Ok(Json(teachers))
}

/// 根据ID获取教师
pub async fn get_teacher<R: TeacherRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<String>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = TeacherUseCase::new(repo).get_by_id(&id).await?;
    Ok(Json(teacher))
}

/// 更新教师
pub async fn update_teacher<R: TeacherRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<String>,
    Json(payload): Json<TeacherRequestDto>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = TeacherUseCase::new(repo).update(&id, payload).await?;
    Ok(Json(teacher))
}

/// 删除教师
pub async fn delete_teacher<R: TeacherRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<String>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = TeacherUseCase::new(repo).delete(&id).await?;
    Ok(Json(teacher))
}
