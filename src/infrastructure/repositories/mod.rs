// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 提供领域仓库接口的具体实现
/// 包括数据库实现和进程内实现
pub mod in_memory_teacher_repo;
pub mod teacher_repo_impl;
