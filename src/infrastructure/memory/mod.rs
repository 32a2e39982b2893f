//! Memory Layer - In-Memory State Management
//!
//! 实现 DocumentStore，用户记录只保存在进程内存中

mod document_store;

pub use document_store::InMemoryDocumentStore;
