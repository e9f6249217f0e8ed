//! Test helpers for item-service integration tests.

#![allow(dead_code)]

use item_service::config::ItemConfig;
use item_service::models::Item;
use item_service::services::{InMemoryItemStore, ItemStore};
use item_service::startup::Application;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub store: Arc<dyn ItemStore>,
    client: reqwest::Client,
}

impl TestApp {
    /// Start the real server on a random port with the seed catalogue.
    pub async fn spawn() -> Self {
        Self::spawn_with_store(Arc::new(InMemoryItemStore::seeded())).await
    }

    pub async fn spawn_with_store(store: Arc<dyn ItemStore>) -> Self {
        let mut config = ItemConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.docs_enabled = true;

        let app = Application::build_with_store(config, store)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let store = app.store().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to accept connections
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
        }

        TestApp {
            address,
            port,
            store,
            client,
        }
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn post_json(&self, path: &str, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn items(&self) -> Vec<Item> {
        self.get("/items")
            .await
            .json()
            .await
            .expect("Failed to parse item list")
    }
}
