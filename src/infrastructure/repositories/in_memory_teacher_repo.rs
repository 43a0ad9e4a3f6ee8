// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::teacher::Teacher;
use crate::domain::repositories::teacher_repository::{RepositoryError, TeacherRepository};
use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

/// 教师仓库的内存实现
///
/// 数据只在进程内保存，适合本地开发和测试。
#[derive(Default)]
pub struct InMemoryTeacherRepository {
    teachers: DashMap<Uuid, Teacher>,
}

impl InMemoryTeacherRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeacherRepository for InMemoryTeacherRepository {
    async fn create(&self, teacher: &Teacher) -> Result<Teacher, RepositoryError> {
        let id = Uuid::new_v4();
        let created = teacher.with_id(id);
        self.teachers.insert(id, created.clone());
        Ok(created)
    }

    async fn create_many(&self, teachers: &[Teacher]) -> Result<u64, RepositoryError> {
        for teacher in teachers {
            let id = Uuid::new_v4();
            self.teachers.insert(id, teacher.with_id(id));
        }
        Ok(teachers.len() as u64)
    }

    async fn find_all(&self) -> Result<Vec<Teacher>, RepositoryError> {
        let mut teachers: Vec<Teacher> = self
            .teachers
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        teachers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(teachers)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Teacher>, RepositoryError> {
        Ok(self.teachers.get(&id).map(|entry| entry.value().clone()))
    }

    async fn update(
        &self,
        id: Uuid,
        teacher: &Teacher,
    ) -> Result<Option<Teacher>, RepositoryError> {
        Ok(self.teachers.get_mut(&id).map(|mut entry| {
            *entry = teacher.with_id(id);
            entry.value().clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Teacher>, RepositoryError> {
        Ok(self.teachers.remove(&id).map(|(_, teacher)| teacher))
    }
}
