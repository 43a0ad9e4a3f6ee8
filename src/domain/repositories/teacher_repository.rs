// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::teacher::Teacher;
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// 仓库错误类型
///
/// 只表示存储层故障。记录不存在不是错误，通过 `Option` 表达。
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// 教师仓库特质
///
/// 定义教师数据访问接口，是业务逻辑与具体存储之间唯一的接缝。
/// 任何实现该特质的存储都可以替换，而无需修改请求处理逻辑。
#[async_trait]
pub trait TeacherRepository: Send + Sync {
    /// 创建教师，返回带有存储分配ID的记录
    async fn create(&self, teacher: &Teacher) -> Result<Teacher, RepositoryError>;
    /// 批量创建教师，作为一个整体写入，返回写入数量
    async fn create_many(&self, teachers: &[Teacher]) -> Result<u64, RepositoryError>;
    /// 获取全部教师，没有记录时返回空列表
    async fn find_all(&self) -> Result<Vec<Teacher>, RepositoryError>;
    /// 根据ID查找教师
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Teacher>, RepositoryError>;
    /// 用完整的新字段替换教师记录，记录不存在时返回 None 且不会新建
    async fn update(&self, id: Uuid, teacher: &Teacher)
        -> Result<Option<Teacher>, RepositoryError>;
    /// 删除教师，返回删除前的记录
    async fn delete(&self, id: Uuid) -> Result<Option<Teacher>, RepositoryError>;
}
