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

use crate::{
    application::dto::teacher_request::TeacherRequestDto,
    domain::{
        models::teacher::Teacher,
        repositories::teacher_repository::{RepositoryError, TeacherRepository},
    },
};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;
use validator::ValidationErrors;

#[derive(Error, Debug)]
pub enum TeacherUseCaseError {
    #[error("Invalid teacher data: {0}")]
    Validation(ValidationErrors),
    #[error("Invalid teacher data in {} batch item(s)", .0.len())]
    BatchValidation(BTreeMap<usize, ValidationErrors>),
    #[error("Teacher not found")]
    NotFound,
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl TeacherUseCaseError {
    fn outcome(&self) -> &'static str {
        match self {
            TeacherUseCaseError::Validation(_) | TeacherUseCaseError::BatchValidation(_) => {
                "invalid"
            }
            TeacherUseCaseError::NotFound => "not_found",
            TeacherUseCaseError::Repository(_) => "error",
        }
    }
}

/// 教师用例
///
/// 负责校验并构造实体、调用仓库，以及把“未找到”转换为明确的错误分支。
pub struct TeacherUseCase<R> {
    repo: Arc<R>,
}

impl<R> TeacherUseCase<R>
where
    R: TeacherRepository + 'static,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// 创建单个教师
    pub async fn create(&self, request: TeacherRequestDto) -> Result<Teacher, TeacherUseCaseError> {
        let result = self.create_inner(request).await;
        record("create", &result);
        result
    }

    async fn create_inner(
        &self,
        request: TeacherRequestDto,
    ) -> Result<Teacher, TeacherUseCaseError> {
        let teacher = request
            .into_teacher(None)
            .map_err(TeacherUseCaseError::Validation)?;
        let created = self.repo.create(&teacher).await?;
        info!("Teacher created: {:?}", created.id);
        Ok(created)
    }

    /// 批量创建教师
    ///
    /// 全部条目先按顺序校验，任何一条无效时整批拒绝且不访问仓库。
    pub async fn create_many(
        &self,
        requests: Vec<TeacherRequestDto>,
    ) -> Result<u64, TeacherUseCaseError> {
        let result = self.create_many_inner(requests).await;
        record("create_many", &result);
        result
    }

    async fn create_many_inner(
        &self,
        requests: Vec<TeacherRequestDto>,
    ) -> Result<u64, TeacherUseCaseError> {
        let mut teachers = Vec::with_capacity(requests.len());
        let mut invalid = BTreeMap::new();

        for (index, request) in requests.into_iter().enumerate() {
            match request.into_teacher(None) {
                Ok(teacher) => teachers.push(teacher),
                Err(errors) => {
                    invalid.insert(index, errors);
                }
            }
        }

        if !invalid.is_empty() {
            return Err(TeacherUseCaseError::BatchValidation(invalid));
        }

        let count = self.repo.create_many(&teachers).await?;
        info!("Teachers created in batch: {} of {}", count, teachers.len());
        Ok(count)
    }

    /// 获取全部教师
    pub async fn get_all(&self) -> Result<Vec<Teacher>, TeacherUseCaseError> {
        let result: Result<Vec<Teacher>, TeacherUseCaseError> =
            self.repo.find_all().await.map_err(Into::into);
        record("get_all", &result);
        result
    }

    /// 根据ID获取教师
    pub async fn get_by_id(&self, id: &str) -> Result<Teacher, TeacherUseCaseError> {
        let result = self.get_by_id_inner(id).await;
        record("get_by_id", &result);
        result
    }

    async fn get_by_id_inner(&self, id: &str) -> Result<Teacher, TeacherUseCaseError> {
        let id = parse_id(id).ok_or(TeacherUseCaseError::NotFound)?;
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(TeacherUseCaseError::NotFound)
    }

    /// 用完整字段替换教师
    pub async fn update(
        &self,
        id: &str,
        request: TeacherRequestDto,
    ) -> Result<Teacher, TeacherUseCaseError> {
        let result = self.update_inner(id, request).await;
        record("update", &result);
        result
    }

    async fn update_inner(
        &self,
        id: &str,
        request: TeacherRequestDto,
    ) -> Result<Teacher, TeacherUseCaseError> {
        let parsed_id = parse_id(id);
        let teacher = request
            .into_teacher(parsed_id)
            .map_err(TeacherUseCaseError::Validation)?;
        let id = parsed_id.ok_or(TeacherUseCaseError::NotFound)?;

        let updated = self
            .repo
            .update(id, &teacher)
            .await?
            .ok_or(TeacherUseCaseError::NotFound)?;
        info!("Teacher updated: {}", id);
        Ok(updated)
    }

    /// 删除教师，返回删除前的记录
    pub async fn delete(&self, id: &str) -> Result<Teacher, TeacherUseCaseError> {
        let result = self.delete_inner(id).await;
        record("delete", &result);
        result
    }

    async fn delete_inner(&self, id: &str) -> Result<Teacher, TeacherUseCaseError> {
        let id = parse_id(id).ok_or(TeacherUseCaseError::NotFound)?;
        let deleted = self
            .repo
            .delete(id)
            .await?
            .ok_or(TeacherUseCaseError::NotFound)?;
        info!("Teacher deleted: {}", id);
        Ok(deleted)
    }
}

/// 路径ID无法解析时不可能匹配任何记录
fn parse_id(id: &str) -> Option<Uuid> {
    match Uuid::parse_str(id) {
        Ok(id) => Some(id),
        Err(_) => {
            debug!("Malformed teacher id treated as not found: {}", id);
            None
        }
    }
}

fn record<T>(operation: &'static str, result: &Result<T, TeacherUseCaseError>) {
    let outcome = match result {
        Ok(_) => "ok",
        Err(e) => e.outcome(),
    };
    metrics::counter!("teacher_operations_total", "operation" => operation, "outcome" => outcome)
        .increment(1);
}
