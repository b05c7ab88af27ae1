//! 通用 CRUD 业务服务

use crate::errors::AppError;
use crate::models::{PageQuery, PaginatedResponse, Resource};
use crate::repositories::MemoryRepository;

/// 通用 CRUD 业务服务
///
/// 列表、创建、更新、删除对所有资源行为一致，差异只在 `Resource` 实现中。
pub struct CrudService<R: Resource> {
    repo: MemoryRepository<R>,
    default_page_size: i64,
}

impl<R: Resource> CrudService<R> {
    pub fn new(repo: MemoryRepository<R>, default_page_size: i64) -> Self {
        Self {
            repo,
            default_page_size,
        }
    }

    pub fn repository(&self) -> &MemoryRepository<R> {
        &self.repo
    }

    /// 分页查询；越界页返回空列表
    pub async fn list(&self, query: &PageQuery) -> PaginatedResponse<R> {
        let pagination = query.resolve(self.default_page_size);
        let (items, total) = self
            .repo
            .page(pagination.offset(), pagination.limit())
            .await;

        PaginatedResponse::new(R::COLLECTION, items, pagination, total)
    }

    /// 根据 ID 获取
    pub async fn get(&self, id: i64) -> Result<R, AppError> {
        self.repo
            .find_by_id(id)
            .await
            .ok_or_else(|| AppError::not_found(R::LABEL))
    }

    /// 创建记录，ID 为现有最大 ID + 1
    pub async fn create(&self, request: R::Create) -> R {
        let record = self
            .repo
            .insert_with(|id| R::build(id, request))
            .await;

        tracing::info!(resource = R::COLLECTION, id = record.id(), "记录已创建");
        record
    }

    /// 部分更新
    pub async fn update(&self, id: i64, patch: R::Update) -> Result<R, AppError> {
        self.modify(id, |current| current.merge(patch)).await
    }

    /// 以当前记录为基础计算新记录并写回
    pub async fn modify<F>(&self, id: i64, apply: F) -> Result<R, AppError>
    where
        F: FnOnce(&R) -> R,
    {
        let record = self
            .repo
            .update_with(id, apply)
            .await
            .ok_or_else(|| AppError::not_found(R::LABEL))?;

        tracing::debug!(resource = R::COLLECTION, id, "记录已更新");
        Ok(record)
    }

    /// 删除记录
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repo
            .remove_by_id(id)
            .await
            .ok_or_else(|| AppError::not_found(R::LABEL))?;

        tracing::info!(resource = R::COLLECTION, id, "记录已删除");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Anniversary, Calendar, CreateAnniversaryRequest, UpdateAnniversaryRequest,
    };

    fn service() -> CrudService<Anniversary> {
        CrudService::new(MemoryRepository::new(), 10)
    }

    fn create_request(title: &str) -> CreateAnniversaryRequest {
        CreateAnniversaryRequest {
            title: Some(title.to_string()),
            date: Some("2099-01-01".to_string()),
            description: Some("d".to_string()),
            calendar: Some(Calendar::Solar),
        }
    }

    #[tokio::test]
    async fn test_pages_reconstruct_store_in_order() {
        let service = service();
        for i in 0..11 {
            service.create(create_request(&format!("t{}", i))).await;
        }

        let first = service.list(&PageQuery::new(1, 4)).await;
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.total, 11);

        let mut ids = Vec::new();
        for page in 1..=first.total_pages {
            let resp = service.list(&PageQuery::new(page, 4)).await;
            ids.extend(resp.items.iter().map(|a| a.id));
        }
        assert_eq!(ids, (1..=11).collect::<Vec<_>>());

        let beyond = service.list(&PageQuery::new(4, 4)).await;
        assert!(beyond.items.is_empty());
    }

    #[tokio::test]
    async fn test_empty_patch_leaves_record_unchanged() {
        let service = service();
        let created = service.create(create_request("A")).await;

        let updated = service
            .update(created.id, UpdateAnniversaryRequest::default())
            .await
            .unwrap();
        assert_eq!(updated, created);
    }

    #[tokio::test]
    async fn test_update_missing_record_is_not_found() {
        let err = service()
            .update(3, UpdateAnniversaryRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg == "纪念日不存在"));
    }

    #[tokio::test]
    async fn test_second_delete_is_not_found() {
        let service = service();
        let created = service.create(create_request("A")).await;

        assert!(service.delete(created.id).await.is_ok());
        assert!(matches!(
            service.delete(created.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
