// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::teacher::Teacher;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

/// 教师请求DTO
///
/// 创建与更新共用的请求体。字段全部可选，以便缺失字段能作为
/// 校验错误报告，而不是反序列化失败。
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TeacherRequestDto {
    /// 姓名（必填）
    #[validate(required, length(min = 1))]
    pub name: Option<String>,

    /// 描述
    pub description: Option<String>,

    /// 电子邮箱（必填）
    #[validate(required, length(min = 1))]
    pub email: Option<String>,

    /// 出生日期，接受 `YYYY-MM-DD` 或 RFC 3339 时间戳（必填）
    ///
    /// 由 `into_teacher` 校验，错误以 `birthDate` 为键报告
    pub birth_date: Option<String>,
}

impl TeacherRequestDto {
    /// 校验请求并构造教师实体
    ///
    /// # 参数
    ///
    /// * `id` - 更新时的路径ID，创建时传入 None
    ///
    /// # 返回值
    ///
    /// * `Ok(Teacher)` - 校验通过的实体
    /// * `Err(ValidationErrors)` - 按字段列出的全部校验错误
    pub fn into_teacher(self, id: Option<Uuid>) -> Result<Teacher, ValidationErrors> {
        let mut errors = self.validate().err().unwrap_or_default();

        let birth_date = match self.birth_date.as_deref().map(parse_birth_date) {
            Some(Ok(date)) => Some(date),
            Some(Err(e)) => {
                errors.add("birthDate", e);
                None
            }
            None => {
                errors.add("birthDate", ValidationError::new("required"));
                None
            }
        };

        if !errors.errors().is_empty() {
            return Err(errors);
        }

        match (self.name, self.email, birth_date) {
            (Some(name), Some(email), Some(birth_date)) => Ok(Teacher::new(
                name,
                self.description,
                email,
                birth_date,
                id,
            )),
            _ => Err(errors),
        }
    }
}

/// 解析出生日期
///
/// 先按日历日期解析，再按 RFC 3339 时间戳解析并取其本地日期。
pub fn parse_birth_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Ok(timestamp.date_naive());
    }

    let mut error = ValidationError::new("date");
    error.message = Some(Cow::from(
        "birthDate must be a date (YYYY-MM-DD) or an RFC 3339 timestamp",
    ));
    error.add_param(Cow::from("value"), &value);
    Err(error)
}
