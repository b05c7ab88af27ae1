//! 相册照片与封面业务服务

use crate::errors::AppError;
use crate::models::{Album, PageQuery, PaginatedResponse, Photo};
use crate::repositories::{album_in_range, PhotoCache};
use crate::services::CrudService;
use std::sync::Arc;

/// 相册照片业务服务
///
/// 相册本身的增删改查由 `CrudService<Album>` 负责，这里处理照片缓存与封面。
pub struct AlbumService {
    albums: Arc<CrudService<Album>>,
    photos: PhotoCache,
    photo_page_size: i64,
}

impl AlbumService {
    pub fn new(albums: Arc<CrudService<Album>>, photos: PhotoCache, photo_page_size: i64) -> Self {
        Self {
            albums,
            photos,
            photo_page_size,
        }
    }

    /// 照片 ID 区间无法表示的相册视为不存在
    fn check_album_id(album_id: i64) -> Result<(), AppError> {
        if album_in_range(album_id) {
            Ok(())
        } else {
            Err(AppError::not_found("相册"))
        }
    }

    /// 分页获取相册照片（首次访问时生成）
    pub async fn list_photos(
        &self,
        album_id: i64,
        query: &PageQuery,
    ) -> Result<PaginatedResponse<Photo>, AppError> {
        Self::check_album_id(album_id)?;
        let pagination = query.resolve(self.photo_page_size);
        let (items, total) = self
            .photos
            .page(album_id, pagination.offset(), pagination.limit())
            .await;

        Ok(PaginatedResponse::new("photos", items, pagination, total))
    }

    /// 添加照片
    pub async fn add_photos(
        &self,
        album_id: i64,
        photo_ids: &[i64],
    ) -> Result<Vec<Photo>, AppError> {
        Self::check_album_id(album_id)?;
        let added = self.photos.add(album_id, photo_ids).await;
        tracing::info!(album_id, count = added.len(), "照片已添加");
        Ok(added)
    }

    /// 从相册删除照片
    pub async fn remove_photo(&self, album_id: i64, photo_id: i64) -> Result<(), AppError> {
        Self::check_album_id(album_id)?;
        self.photos
            .remove(album_id, photo_id)
            .await
            .ok_or_else(|| AppError::not_found("照片"))?;

        tracing::info!(album_id, photo_id, "照片已删除");
        Ok(())
    }

    /// 设置封面并写回相册
    pub async fn set_cover(&self, album_id: i64, photo_id: i64) -> Result<Album, AppError> {
        // 确保相册存在
        Self::check_album_id(album_id)?;
        self.albums.get(album_id).await?;

        let photo = self
            .photos
            .find(album_id, photo_id)
            .await
            .ok_or_else(|| AppError::not_found("照片"))?;

        self.albums
            .modify(album_id, |album| Album {
                cover_image: Some(photo),
                ..album.clone()
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateAlbumRequest;
    use crate::repositories::MemoryRepository;

    fn service() -> (Arc<CrudService<Album>>, AlbumService) {
        let albums = Arc::new(CrudService::new(MemoryRepository::new(), 5));
        let service = AlbumService::new(albums.clone(), PhotoCache::new(), 9);
        (albums, service)
    }

    #[tokio::test]
    async fn test_set_cover_persists_onto_album() {
        let (albums, service) = service();
        let album = albums.create(CreateAlbumRequest::default()).await;

        let photo_id = album.id * 100 + 3;
        let updated = service.set_cover(album.id, photo_id).await.unwrap();
        assert_eq!(updated.cover_image.as_ref().map(|p| p.id), Some(photo_id));

        let stored = albums.get(album.id).await.unwrap();
        assert_eq!(stored.cover_image.map(|p| p.id), Some(photo_id));
    }

    #[tokio::test]
    async fn test_set_cover_unknown_photo() {
        let (albums, service) = service();
        let album = albums.create(CreateAlbumRequest::default()).await;

        let err = service.set_cover(album.id, 1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg == "照片不存在"));
    }

    #[tokio::test]
    async fn test_set_cover_unknown_album() {
        let (_, service) = service();
        let err = service.set_cover(7, 701).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg == "相册不存在"));
    }

    #[tokio::test]
    async fn test_list_photos_default_size() {
        let (_, service) = service();
        let page = service.list_photos(1, &PageQuery::default()).await.unwrap();
        assert_eq!(page.items.len(), 9);
        assert_eq!(page.total, 12);
        assert_eq!(page.total_pages, 2);
    }

    #[tokio::test]
    async fn test_unrepresentable_album_id_is_not_found() {
        let (_, service) = service();
        let huge = 100_000_000_000_000_000;

        let err = service.list_photos(huge, &PageQuery::default()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(msg) if msg == "相册不存在"));
        assert!(service.add_photos(huge, &[1]).await.is_err());
        assert!(service.remove_photo(huge, 1).await.is_err());
        assert!(service.set_cover(i64::MAX, 1).await.is_err());
    }
}
