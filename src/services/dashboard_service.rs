//! 仪表盘统计（实时计算）

use crate::models::{Album, AlbumStats, CountStats, DashboardStats, Moment, Place, Wish, WishStats};
use crate::repositories::MemoryRepository;

pub struct DashboardService {
    albums: MemoryRepository<Album>,
    places: MemoryRepository<Place>,
    moments: MemoryRepository<Moment>,
    wishes: MemoryRepository<Wish>,
}

impl DashboardService {
    pub fn new(
        albums: MemoryRepository<Album>,
        places: MemoryRepository<Place>,
        moments: MemoryRepository<Moment>,
        wishes: MemoryRepository<Wish>,
    ) -> Self {
        Self {
            albums,
            places,
            moments,
            wishes,
        }
    }

    pub async fn stats(&self) -> DashboardStats {
        let albums = self.albums.all().await;
        let wishes = self.wishes.all().await;

        DashboardStats {
            album_stats: AlbumStats {
                total: albums.len(),
                total_photos: albums.iter().map(|a| a.photo_count).sum(),
            },
            place_stats: CountStats {
                total: self.places.len().await,
            },
            moment_stats: CountStats {
                total: self.moments.len().await,
            },
            wish_stats: WishStats {
                total: wishes.len(),
                pending: wishes.iter().filter(|w| !w.approved).count(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::seed;

    #[tokio::test]
    async fn test_stats_follow_store_contents() {
        let wishes = MemoryRepository::with_records(seed::wishes());
        let service = DashboardService::new(
            MemoryRepository::with_records(seed::albums()),
            MemoryRepository::new(),
            MemoryRepository::with_records(seed::moments()),
            wishes.clone(),
        );

        let stats = service.stats().await;
        let expected_photos: i64 = seed::albums().iter().map(|a| a.photo_count).sum();
        assert_eq!(stats.album_stats.total, 5);
        assert_eq!(stats.album_stats.total_photos, expected_photos);
        assert_eq!(stats.place_stats.total, 0);
        assert_eq!(stats.moment_stats.total, 8);

        let pending = seed::wishes().iter().filter(|w| !w.approved).count();
        assert_eq!(stats.wish_stats.pending, pending);

        wishes.remove_by_id(1).await;
        assert_eq!(service.stats().await.wish_stats.total, 7);
    }
}
