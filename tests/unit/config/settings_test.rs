// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 配置设置测试模块
///
/// 测试默认配置和配置文件加载

#[cfg(test)]
mod tests {
    use teachers::config::settings::{Settings, StorageBackend};

    #[test]
    fn test_defaults_without_any_source() {
        let settings = Settings::defaults().expect("defaults should deserialize");

        assert_eq!(settings.server.host, "0.0.0.0");
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.database.url, "sqlite://teachers.db?mode=rwc");
        assert_eq!(settings.database.max_connections, Some(10));
        assert_eq!(settings.database.min_connections, Some(1));
        assert!(settings.database.run_migrations);
        assert_eq!(settings.storage.backend, StorageBackend::Database);
        assert_eq!(settings.logging.default_directive, "info,teachers=debug");
        assert!(!settings.logging.json);
        assert!(settings.cors.enabled);
        assert!(!settings.metrics.enabled);
        assert_eq!(settings.metrics.listen_addr, "0.0.0.0:9000");
    }

    #[test]
    fn test_config_loading_from_default_toml() {
        let settings = Settings::new().expect("config/default.toml should load");

        assert!(settings.server.port > 0);
        assert!(!settings.database.url.is_empty());
        assert!(settings.metrics.listen_addr.contains(':'));
    }
}
