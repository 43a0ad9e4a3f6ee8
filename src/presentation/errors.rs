// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::application::use_cases::teacher_use_case::TeacherUseCaseError;

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self.0.downcast_ref::<TeacherUseCaseError>() {
            Some(TeacherUseCaseError::NotFound) => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Teacher not found" }),
            ),
            Some(TeacherUseCaseError::Validation(errors)) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid teacher data", "fields": errors }),
            ),
            Some(TeacherUseCaseError::BatchValidation(items)) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid teacher data", "items": items }),
            ),
            Some(TeacherUseCaseError::Repository(_)) | None => {
                error!("Request failed: {:#}", self.0);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
