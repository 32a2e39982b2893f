//! Document Store Port - 出站端口
//!
//! 数据存储协作者的抽象接口：按集合名存取 JSON 文档，id 由存储分配。
//! 具体实现在 infrastructure/memory 层

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;

/// 存储中的一条记录（JSON 对象）
pub type Document = Map<String, Value>;

/// Repository 错误
///
/// 存储后端错误（内存实现不会产生）
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Document Store Port
///
/// 集合内记录按插入顺序排列。未知集合视为空集合：
/// `get` 返回空列表，`get_by_id` / `create` 返回 None，`delete_by_id` 无操作。
#[async_trait]
pub trait DocumentStorePort: Send + Sync {
    /// 获取集合内所有记录（插入顺序）
    async fn get(&self, collection: &str) -> Result<Vec<Document>, RepositoryError>;

    /// 根据 id 查找记录
    async fn get_by_id(
        &self,
        collection: &str,
        id: i64,
    ) -> Result<Option<Document>, RepositoryError>;

    /// 创建记录，分配 id 后返回完整记录
    async fn create(
        &self,
        collection: &str,
        payload: Document,
    ) -> Result<Option<Document>, RepositoryError>;

    /// 根据 id 删除记录（不存在时无操作）
    async fn delete_by_id(&self, collection: &str, id: i64) -> Result<(), RepositoryError>;
}
