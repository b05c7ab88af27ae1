//! 祝福审核

use crate::errors::AppError;
use crate::models::Wish;
use crate::services::CrudService;
use std::sync::Arc;

pub struct WishService {
    wishes: Arc<CrudService<Wish>>,
}

impl WishService {
    pub fn new(wishes: Arc<CrudService<Wish>>) -> Self {
        Self { wishes }
    }

    /// 批准祝福
    pub async fn approve(&self, id: i64) -> Result<Wish, AppError> {
        let wish = self
            .wishes
            .modify(id, |w| Wish {
                approved: true,
                ..w.clone()
            })
            .await?;

        tracing::info!(id, "祝福已批准");
        Ok(wish)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CreateWishRequest;
    use crate::repositories::MemoryRepository;

    #[tokio::test]
    async fn test_approve_is_idempotent() {
        let wishes = Arc::new(CrudService::new(MemoryRepository::new(), 5));
        let service = WishService::new(wishes.clone());
        let wish = wishes.create(CreateWishRequest::default()).await;
        assert!(!wish.approved);

        assert!(service.approve(wish.id).await.unwrap().approved);
        assert!(service.approve(wish.id).await.unwrap().approved);
    }
}
