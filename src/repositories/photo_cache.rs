//! 相册照片缓存
//!
//! 每个相册的照片在首次访问时按相册 ID 确定性生成，之后在进程生命周期内复用；
//! 添加与删除直接作用于缓存中的序列。

use crate::models::Photo;
use crate::utils::{date_iso8601, now_iso8601};
use chrono::{Duration, NaiveDate, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// 生成规则：数量、图片随机种子起点、描述前缀、首张日期
struct PhotoPattern {
    count: i64,
    seed_base: i64,
    prefix: &'static str,
    first_day: Option<(i32, u32, u32)>,
}

fn pattern_for(album_id: i64) -> PhotoPattern {
    let (count, seed_base, prefix, first_day) = match album_id {
        1 => (12, 100, "旅行中的美好时光", Some((2023, 5, 1))),
        2 => (8, 200, "浪漫时刻", Some((2023, 8, 15))),
        3 => (15, 300, "春日踏青", Some((2024, 3, 20))),
        4 => (22, 400, "美味食物", Some((2024, 5, 1))),
        5 => (18, 500, "历史文物", Some((2024, 7, 15))),
        6 => (25, 600, "海滩美景", Some((2024, 8, 10))),
        7 => (14, 700, "雪山风光", Some((2024, 12, 1))),
        8 => (10, 800, "城市街景", Some((2024, 12, 10))),
        _ => (15, 900, "照片", None),
    };
    PhotoPattern {
        count,
        seed_base,
        prefix,
        first_day,
    }
}

/// 每个相册占用的照片 ID 区间宽度
const PHOTO_ID_SPAN: i64 = 100;

/// 相册照片 ID 区间 `album_id * 100 + 1 ..= album_id * 100 + 100` 能否用 i64 表示
pub fn album_in_range(album_id: i64) -> bool {
    album_id
        .checked_mul(PHOTO_ID_SPAN)
        .and_then(|base| base.checked_add(PHOTO_ID_SPAN))
        .is_some()
}

/// 为相册生成照片序列，ID 为 `album_id * 100 + i + 1`
///
/// ID 区间无法表示的相册返回空序列。
pub fn generate_album_photos(album_id: i64) -> Vec<Photo> {
    if !album_in_range(album_id) {
        return Vec::new();
    }

    let pattern = pattern_for(album_id);
    let first_date = pattern
        .first_day
        .and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d));

    (0..pattern.count)
        .map(|i| {
            let seed = pattern.seed_base + i;
            let created_at = match first_date {
                Some(date) => date_iso8601(date + Duration::days(i)),
                None => now_iso8601(),
            };
            Photo {
                id: album_id * 100 + i + 1,
                album_id,
                url: format!("https://picsum.photos/800/600?random={}", seed),
                thumbnail_url: Some(format!("https://picsum.photos/300/200?random={}", seed)),
                description: Some(format!("{} {}", pattern.prefix, i + 1)),
                created_at: Some(created_at),
            }
        })
        .collect()
}

/// 相册 ID 到照片序列的缓存
#[derive(Clone, Default)]
pub struct PhotoCache {
    albums: Arc<RwLock<HashMap<i64, Vec<Photo>>>>,
}

impl PhotoCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取相册全部照片，首次访问时生成
    pub async fn photos(&self, album_id: i64) -> Vec<Photo> {
        if let Some(photos) = self.albums.read().await.get(&album_id) {
            return photos.clone();
        }

        let mut albums = self.albums.write().await;
        albums
            .entry(album_id)
            .or_insert_with(|| {
                tracing::debug!(album_id, "生成相册照片");
                generate_album_photos(album_id)
            })
            .clone()
    }

    /// 分页读取，返回该页照片与总数
    pub async fn page(&self, album_id: i64, offset: usize, limit: usize) -> (Vec<Photo>, usize) {
        let photos = self.photos(album_id).await;
        let total = photos.len();
        let items = photos.into_iter().skip(offset).take(limit).collect();
        (items, total)
    }

    pub async fn find(&self, album_id: i64, photo_id: i64) -> Option<Photo> {
        self.photos(album_id)
            .await
            .into_iter()
            .find(|p| p.id == photo_id)
    }

    /// 按给定 ID 追加照片，返回新追加的照片
    pub async fn add(&self, album_id: i64, photo_ids: &[i64]) -> Vec<Photo> {
        let stamp = Utc::now().timestamp_millis();
        let created_at = now_iso8601();
        let new_photos: Vec<Photo> = photo_ids
            .iter()
            .zip(0i64..)
            .map(|(&id, index)| Photo {
                id,
                album_id,
                url: format!("https://picsum.photos/800/600?random={}", stamp + index),
                thumbnail_url: Some(format!(
                    "https://picsum.photos/300/200?random={}",
                    stamp + index
                )),
                description: Some("新添加的照片".to_string()),
                created_at: Some(created_at.clone()),
            })
            .collect();

        let mut albums = self.albums.write().await;
        albums
            .entry(album_id)
            .or_insert_with(|| generate_album_photos(album_id))
            .extend(new_photos.iter().cloned());

        new_photos
    }

    /// 从相册移除照片，未找到时返回 `None`
    pub async fn remove(&self, album_id: i64, photo_id: i64) -> Option<Photo> {
        let mut albums = self.albums.write().await;
        let photos = albums
            .entry(album_id)
            .or_insert_with(|| generate_album_photos(album_id));
        let index = photos.iter().position(|p| p.id == photo_id)?;
        Some(photos.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_one_has_twelve_photos() {
        let photos = generate_album_photos(1);
        let ids: Vec<i64> = photos.iter().map(|p| p.id).collect();
        assert_eq!(ids, (101..=112).collect::<Vec<_>>());
        assert_eq!(photos[0].description.as_deref(), Some("旅行中的美好时光 1"));
        assert_eq!(photos[0].created_at.as_deref(), Some("2023-05-01T00:00:00.000Z"));
        assert_eq!(photos[0].url, "https://picsum.photos/800/600?random=100");
    }

    #[test]
    fn test_dates_roll_over_month_end() {
        // 相册 6 从 8 月 10 日开始共 25 张
        let photos = generate_album_photos(6);
        assert_eq!(photos.len(), 25);
        assert_eq!(photos[24].created_at.as_deref(), Some("2024-09-03T00:00:00.000Z"));
    }

    #[test]
    fn test_unknown_album_uses_default_pattern() {
        let photos = generate_album_photos(42);
        assert_eq!(photos.len(), 15);
        assert_eq!(photos[0].id, 4201);
        assert_eq!(photos[0].description.as_deref(), Some("照片 1"));
    }

    #[test]
    fn test_album_id_range_limit() {
        assert!(album_in_range(1));
        assert!(album_in_range(i64::MAX / 100 - 1));
        assert!(!album_in_range(100_000_000_000_000_000));
        assert!(!album_in_range(i64::MIN));
        assert!(generate_album_photos(100_000_000_000_000_000).is_empty());
    }

    #[test]
    fn test_albums_never_share_ids() {
        let a: Vec<i64> = generate_album_photos(1).iter().map(|p| p.id).collect();
        let b: Vec<i64> = generate_album_photos(2).iter().map(|p| p.id).collect();
        assert!(a.iter().all(|id| !b.contains(id)));
    }

    #[tokio::test]
    async fn test_cache_memoizes_mutations() {
        let cache = PhotoCache::new();
        assert_eq!(cache.photos(2).await.len(), 8);

        let added = cache.add(2, &[9001, 9002]).await;
        assert_eq!(added.len(), 2);
        assert_eq!(cache.photos(2).await.len(), 10);

        assert!(cache.remove(2, 201).await.is_some());
        assert!(cache.remove(2, 201).await.is_none());
        assert_eq!(cache.photos(2).await.len(), 9);
        assert!(cache.find(2, 9002).await.is_some());
    }
}
