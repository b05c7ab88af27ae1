//! 内存资源仓库

use crate::models::Resource;
use std::sync::Arc;
use tokio::sync::RwLock;

struct Records<R> {
    items: Vec<R>,
    /// 曾分配过的最大 ID，删除后也不回退
    high_water: i64,
}

/// 单一资源类型的有序内存存储
///
/// 插入顺序即展示顺序。克隆得到的是同一份数据的句柄。
pub struct MemoryRepository<R: Resource> {
    inner: Arc<RwLock<Records<R>>>,
}

impl<R: Resource> Clone for MemoryRepository<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: Resource> Default for MemoryRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resource> MemoryRepository<R> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// 以预置数据创建
    pub fn with_records(items: Vec<R>) -> Self {
        let high_water = items.iter().map(Resource::id).max().unwrap_or(0);
        Self {
            inner: Arc::new(RwLock::new(Records { items, high_water })),
        }
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.items.len()
    }

    pub async fn all(&self) -> Vec<R> {
        self.inner.read().await.items.clone()
    }

    /// 返回 `[offset, offset + limit)` 区间的记录与总数，越界时为空
    pub async fn page(&self, offset: usize, limit: usize) -> (Vec<R>, usize) {
        let records = self.inner.read().await;
        let items = records
            .items
            .iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();
        (items, records.items.len())
    }

    pub async fn find_by_id(&self, id: i64) -> Option<R> {
        self.inner
            .read()
            .await
            .items
            .iter()
            .find(|r| r.id() == id)
            .cloned()
    }

    /// 分配 ID 并追加，`build` 接收新 ID 构造记录
    ///
    /// 分配与追加在同一把写锁内完成。
    pub async fn insert_with<F>(&self, build: F) -> R
    where
        F: FnOnce(i64) -> R,
    {
        let mut records = self.inner.write().await;
        let id = Self::next_id_locked(&records);
        let record = build(id);
        records.high_water = records.high_water.max(record.id());
        records.items.push(record.clone());
        record
    }

    /// 下一个可用 ID：`max(现有 ID, 历史最大 ID) + 1`，空仓库为 1
    pub async fn next_id(&self) -> i64 {
        Self::next_id_locked(&*self.inner.read().await)
    }

    fn next_id_locked(records: &Records<R>) -> i64 {
        let current_max = records.items.iter().map(Resource::id).max().unwrap_or(0);
        current_max.max(records.high_water) + 1
    }

    /// 按 ID 原地修改，未找到时返回 `None`
    ///
    /// 闭包的返回值整体替换原记录；返回值 ID 不同时忽略本次更新。
    pub async fn update_with<F>(&self, id: i64, apply: F) -> Option<R>
    where
        F: FnOnce(&R) -> R,
    {
        let mut records = self.inner.write().await;
        let index = records.items.iter().position(|r| r.id() == id)?;
        let updated = apply(&records.items[index]);
        if updated.id() != id {
            tracing::warn!(resource = R::COLLECTION, id, "更新试图修改 ID，已忽略");
            return Some(records.items[index].clone());
        }
        records.items[index] = updated.clone();
        Some(updated)
    }

    /// 按 ID 移除
    pub async fn remove_by_id(&self, id: i64) -> Option<R> {
        let mut records = self.inner.write().await;
        let index = records.items.iter().position(|r| r.id() == id)?;
        Some(records.items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Anniversary, Calendar, CreateAnniversaryRequest};

    fn anniversary(id: i64, title: &str) -> Anniversary {
        Anniversary {
            id,
            title: title.to_string(),
            date: "2021-03-15".to_string(),
            description: String::new(),
            calendar: Calendar::Solar,
        }
    }

    #[tokio::test]
    async fn test_next_id_empty_store_is_one() {
        let repo = MemoryRepository::<Anniversary>::new();
        assert_eq!(repo.next_id().await, 1);
    }

    #[tokio::test]
    async fn test_next_id_uses_max_not_length() {
        let repo = MemoryRepository::with_records(vec![anniversary(2, "a"), anniversary(7, "b")]);
        assert_eq!(repo.next_id().await, 8);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_deleting_max() {
        let repo = MemoryRepository::with_records(vec![anniversary(1, "a"), anniversary(2, "b")]);
        repo.remove_by_id(2).await.unwrap();

        let created = repo
            .insert_with(|id| Anniversary::build(id, CreateAnniversaryRequest::default()))
            .await;
        assert_eq!(created.id, 3);
    }

    #[tokio::test]
    async fn test_remove_keeps_order_without_renumbering() {
        let repo = MemoryRepository::with_records(vec![
            anniversary(1, "a"),
            anniversary(2, "b"),
            anniversary(3, "c"),
        ]);
        assert_eq!(repo.remove_by_id(1).await.map(|a| a.id), Some(1));

        let ids: Vec<i64> = repo.all().await.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![2, 3]);
        assert!(repo.remove_by_id(1).await.is_none());
    }

    #[tokio::test]
    async fn test_update_with_cannot_change_id() {
        let repo = MemoryRepository::with_records(vec![anniversary(1, "a")]);
        let result = repo
            .update_with(1, |current| Anniversary {
                id: 99,
                ..current.clone()
            })
            .await
            .unwrap();
        assert_eq!(result.id, 1);
        assert!(repo.find_by_id(99).await.is_none());
    }

    #[tokio::test]
    async fn test_page_out_of_range_is_empty() {
        let repo = MemoryRepository::with_records(vec![anniversary(1, "a")]);
        let (items, total) = repo.page(10, 5).await;
        assert!(items.is_empty());
        assert_eq!(total, 1);
    }
}
