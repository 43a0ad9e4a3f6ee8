// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 负责把HTTP请求数据整理、校验为领域实体，并通过用例调用仓库
pub mod dto;
pub mod use_cases;
