// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::teacher_repository::TeacherRepository;
use crate::presentation::handlers::teacher_handler;
use axum::{
    routing::{get, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// # 参数
///
/// * `repo` - 启动时选定的教师仓库实现
/// * `cors_enabled` - 是否启用跨域支持
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes<R: TeacherRepository + 'static>(repo: Arc<R>, cors_enabled: bool) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version));

    let app = Router::new()
        .merge(public_routes)
        .nest("/api/teachers", teacher_routes(repo))
        .layer(TraceLayer::new_for_http());

    if cors_enabled {
        app.layer(CorsLayer::permissive())
    } else {
        app
    }
}

/// 创建教师相关路由
pub fn teacher_routes<R: TeacherRepository + 'static>(repo: Arc<R>) -> Router {
    Router::new()
        .route(
            "/",
            post(teacher_handler::create_teacher::<R>).get(teacher_handler::list_teachers::<R>),
        )
        .route("/bulk", post(teacher_handler::create_teachers::<R>))
        .route(
            "/{id}",
            get(teacher_handler::get_teacher::<R>)
                .put(teacher_handler::update_teacher::<R>)
                .delete(teacher_handler::delete_teacher::<R>),
        )
        .layer(Extension(repo))
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
