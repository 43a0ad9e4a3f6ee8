// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::teacher::Teacher;
use crate::domain::repositories::teacher_repository::{RepositoryError, TeacherRepository};
use crate::infrastructure::database::entities::teacher;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use uuid::Uuid;

/// 单条 INSERT 语句的最大行数，保持绑定参数数量低于 SQLite 和 PostgreSQL 的上限
const INSERT_CHUNK_SIZE: usize = 1000;

/// 教师仓库的数据库实现
///
/// 基于 SeaORM，支持 PostgreSQL 与 SQLite。记录ID在写入时生成。
#[derive(Clone)]
pub struct TeacherRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl TeacherRepositoryImpl {
    /// 创建新的教师仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn to_active_model(id: Uuid, teacher: &Teacher) -> teacher::ActiveModel {
        teacher::ActiveModel {
            id: Set(id),
            name: Set(teacher.name.clone()),
            description: Set(teacher.description.clone()),
            email: Set(teacher.email.clone()),
            birth_date: Set(teacher.birth_date),
        }
    }
}

#[async_trait]
impl TeacherRepository for TeacherRepositoryImpl {
    async fn create(&self, teacher: &Teacher) -> Result<Teacher, RepositoryError> {
        let model = Self::to_active_model(Uuid::new_v4(), teacher);
        let inserted = model.insert(self.db.as_ref()).await?;
        Ok(inserted.into())
    }

    async fn create_many(&self, teachers: &[Teacher]) -> Result<u64, RepositoryError> {
        if teachers.is_empty() {
            return Ok(0);
        }

        // The whole batch lands or none of it does
        let txn = self.db.begin().await?;
        let mut inserted = 0;
        for chunk in teachers.chunks(INSERT_CHUNK_SIZE) {
            let models = chunk
                .iter()
                .map(|teacher| Self::to_active_model(Uuid::new_v4(), teacher));
            inserted += teacher::Entity::insert_many(models)
                .exec_without_returning(&txn)
                .await?;
        }
        txn.commit().await?;

        Ok(inserted)
    }

    async fn find_all(&self) -> Result<Vec<Teacher>, RepositoryError> {
        let models = teacher::Entity::find()
            .order_by_asc(teacher::Column::Name)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Teacher>, RepositoryError> {
        let model = teacher::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn update(
        &self,
        id: Uuid,
        teacher: &Teacher,
    ) -> Result<Option<Teacher>, RepositoryError> {
        let existing = teacher::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        if existing.is_none() {
            return Ok(None);
        }

        match Self::to_active_model(id, teacher)
            .update(self.db.as_ref())
            .await
        {
            Ok(model) => Ok(Some(model.into())),
            // Removed between the lookup and the write
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Teacher>, RepositoryError> {
        let existing = match teacher::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
        {
            Some(model) => model,
            None => return Ok(None),
        };

        let result = teacher::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;
        if result.rows_affected == 0 {
            return Ok(None);
        }

        Ok(Some(existing.into()))
    }
}

impl From<teacher::Model> for Teacher {
    fn from(model: teacher::Model) -> Self {
        Self {
            id: Some(model.id),
            name: model.name,
            description: model.description,
            email: model.email,
            birth_date: model.birth_date,
        }
    }
}
