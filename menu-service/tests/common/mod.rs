#![allow(dead_code)]

use menu_service::config::{DataConfig, MenuConfig, StaticConfig};
use menu_service::startup::Application;
use service_core::config::Config as CoreConfig;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub menus_path: String,
}

impl TestApp {
    /// Spawns the service on a random port with its own menu data file.
    pub async fn spawn(menus_json: &str) -> Self {
        let menus_path = format!("target/test-menus-{}.json", Uuid::new_v4());
        std::fs::create_dir_all("target").expect("Failed to create target dir");
        std::fs::write(&menus_path, menus_json).expect("Failed to write menu data");

        Self::spawn_with_path(menus_path).await
    }

    /// Spawns the service pointing at a data file that does not exist.
    pub async fn spawn_without_data() -> Self {
        Self::spawn_with_path(format!("target/missing-menus-{}.json", Uuid::new_v4())).await
    }

    async fn spawn_with_path(menus_path: String) -> Self {
        let config = MenuConfig {
            common: CoreConfig {
                port: 0, // Random port for testing
                ..CoreConfig::default()
            },
            data: DataConfig {
                menus_path: menus_path.clone(),
            },
            static_files: StaticConfig {
                dir: concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string(),
            },
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            menus_path,
        }
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        reqwest::Client::new()
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Removes the data file backing this app.
    pub fn cleanup(&self) {
        let _ = std::fs::remove_file(&self.menus_path);
    }
}
