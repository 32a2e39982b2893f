//! In-Memory Document Store Implementation

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::application::ports::{Document, DocumentStorePort, RepositoryError};
use crate::domain::user::USERS_COLLECTION;

/// 内存文档存储
///
/// collection -> 按插入顺序排列的记录。进程退出后数据丢失。
pub struct InMemoryDocumentStore {
    collections: DashMap<String, Vec<Document>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self {
            collections: DashMap::new(),
        }
    }

    /// 创建带有空 users 集合的存储
    pub fn with_users() -> Self {
        let store = Self::new();
        store.create_collection(USERS_COLLECTION);
        store
    }

    /// 创建带有演示用户的存储
    pub fn with_demo_users() -> Self {
        let store = Self::new();
        store
            .collections
            .insert(USERS_COLLECTION.to_string(), demo_users());
        store
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// 注册集合（已存在时保持原样）
    pub fn create_collection(&self, collection: &str) {
        self.collections
            .entry(collection.to_string())
            .or_default();
    }

    fn id_of(document: &Document) -> Option<i64> {
        document.get("id").and_then(Value::as_i64)
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStorePort for InMemoryDocumentStore {
    async fn get(&self, collection: &str) -> Result<Vec<Document>, RepositoryError> {
        Ok(self
            .collections
            .get(collection)
            .map(|records| records.value().clone())
            .unwrap_or_default())
    }

    async fn get_by_id(
        &self,
        collection: &str,
        id: i64,
    ) -> Result<Option<Document>, RepositoryError> {
        Ok(self.collections.get(collection).and_then(|records| {
            records
                .iter()
                .find(|document| Self::id_of(document) == Some(id))
                .cloned()
        }))
    }

    async fn create(
        &self,
        collection: &str,
        mut payload: Document,
    ) -> Result<Option<Document>, RepositoryError> {
        let Some(mut records) = self.collections.get_mut(collection) else {
            tracing::warn!(collection = %collection, "Create on unknown collection");
            return Ok(None);
        };

        let id = records
            .iter()
            .filter_map(Self::id_of)
            .max()
            .map_or(1, |max| max + 1);
        payload.insert("id".to_string(), Value::from(id));
        records.push(payload.clone());

        tracing::info!(collection = %collection, id = id, "Document created");
        Ok(Some(payload))
    }

    async fn delete_by_id(&self, collection: &str, id: i64) -> Result<(), RepositoryError> {
        if let Some(mut records) = self.collections.get_mut(collection) {
            let before = records.len();
            records.retain(|document| Self::id_of(document) != Some(id));
            if records.len() < before {
                tracing::info!(collection = %collection, id = id, "Document deleted");
            } else {
                tracing::debug!(collection = %collection, id = id, "Delete on missing document");
            }
        }
        Ok(())
    }
}

/// 演示用户数据
fn demo_users() -> Vec<Document> {
    [
        json!({"id": 1, "name": "Aria", "age": 19, "team": "LWB"}),
        json!({"id": 2, "name": "Tim", "age": 20, "team": "LWB"}),
        json!({"id": 3, "name": "Varun", "age": 23, "team": "NNB"}),
        json!({"id": 4, "name": "Alex", "age": 24, "team": "C2TC"}),
    ]
    .into_iter()
    .filter_map(|value| match value {
        Value::Object(document) => Some(document),
        _ => None,
    })
    .collect()
}
