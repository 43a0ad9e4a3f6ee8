// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 教师实体
///
/// 表示一位教师的完整记录。`id` 在持久化之前为空，由存储层在创建时分配，
/// 之后不再改变。实体只承载数据，不包含任何行为。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    /// 教师唯一标识符，未持久化时为 None
    pub id: Option<Uuid>,
    /// 姓名，不能为空
    pub name: String,
    /// 描述，可以显式为空（与空字符串不同）
    pub description: Option<String>,
    /// 电子邮箱
    pub email: String,
    /// 出生日期
    pub birth_date: NaiveDate,
}

impl Teacher {
    /// 创建一个教师实体
    ///
    /// # 参数
    ///
    /// * `name` - 姓名
    /// * `description` - 描述
    /// * `email` - 电子邮箱
    /// * `birth_date` - 出生日期
    /// * `id` - 已存在记录的ID，新建时传入 None
    pub fn new(
        name: String,
        description: Option<String>,
        email: String,
        birth_date: NaiveDate,
        id: Option<Uuid>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            email,
            birth_date,
        }
    }

    /// 返回携带指定ID的副本
    pub fn with_id(&self, id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..self.clone()
        }
    }
}
