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

use std::sync::Arc;
use teachers::config::settings::{Settings, StorageBackend};
use teachers::infrastructure::database::connection;
use teachers::infrastructure::metrics;
use teachers::infrastructure::repositories::in_memory_teacher_repo::InMemoryTeacherRepository;
use teachers::infrastructure::repositories::teacher_repo_impl::TeacherRepositoryImpl;
use teachers::presentation::routes;
use teachers::utils::telemetry;
use tokio::net::TcpListener;
use tracing::info;

use migration::{Migrator, MigratorTrait};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load configuration
    let settings = Settings::new()?;

    // 2. Initialize logging
    telemetry::init_telemetry(&settings.logging);
    info!("Starting teachers service...");

    metrics::init_metrics(&settings.metrics)?;

    // 3. Select the repository implementation
    let app = match settings.storage.backend {
        StorageBackend::Database => {
            let db = Arc::new(connection::create_pool(&settings.database).await?);
            info!("Database connection established");

            if settings.database.run_migrations {
                info!("Running database migrations...");
                Migrator::up(db.as_ref(), None).await?;
                info!("Database migrations applied");
            }

            routes::routes(
                Arc::new(TeacherRepositoryImpl::new(db)),
                settings.cors.enabled,
            )
        }
        StorageBackend::Memory => {
            info!("Using in-memory teacher storage");
            routes::routes(
                Arc::new(InMemoryTeacherRepository::new()),
                settings.cors.enabled,
            )
        }
    };

    // 4. Start HTTP server
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
