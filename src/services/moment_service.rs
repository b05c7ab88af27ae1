//! 动态点赞与公开状态

use crate::errors::AppError;
use crate::models::Moment;
use crate::services::CrudService;
use std::sync::Arc;

pub struct MomentService {
    moments: Arc<CrudService<Moment>>,
}

impl MomentService {
    pub fn new(moments: Arc<CrudService<Moment>>) -> Self {
        Self { moments }
    }

    /// 点赞数加一，其他字段不变
    pub async fn like(&self, id: i64) -> Result<Moment, AppError> {
        self.moments
            .modify(id, |m| Moment {
                likes: m.likes + 1,
                ..m.clone()
            })
            .await
    }

    /// 设置公开状态，未提供时保持不变
    pub async fn set_public(&self, id: i64, is_public: Option<bool>) -> Result<Moment, AppError> {
        self.moments
            .modify(id, |m| Moment {
                is_public: is_public.unwrap_or(m.is_public),
                ..m.clone()
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{seed, MemoryRepository};

    fn service() -> (Arc<CrudService<Moment>>, MomentService) {
        let moments = Arc::new(CrudService::new(
            MemoryRepository::with_records(seed::moments()),
            5,
        ));
        (moments.clone(), MomentService::new(moments))
    }

    #[tokio::test]
    async fn test_two_likes_add_exactly_two() {
        let (moments, service) = service();
        let before = moments.get(3).await.unwrap();

        service.like(3).await.unwrap();
        let after = service.like(3).await.unwrap();

        assert_eq!(after.likes, before.likes + 2);
        assert_eq!(Moment { likes: before.likes, ..after }, before);
    }

    #[tokio::test]
    async fn test_set_public_without_value_keeps_state() {
        let (_, service) = service();
        let moment = service.set_public(2, None).await.unwrap();
        assert!(!moment.is_public);

        let moment = service.set_public(2, Some(true)).await.unwrap();
        assert!(moment.is_public);
    }

    #[tokio::test]
    async fn test_like_unknown_moment() {
        let (_, service) = service();
        assert!(matches!(service.like(404).await, Err(AppError::NotFound(_))));
    }
}
