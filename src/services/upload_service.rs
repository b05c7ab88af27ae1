//! 模拟文件上传：不保存内容，只生成占位图地址

use crate::models::{UploadedFile, UploadedImage};
use chrono::Utc;
use rand::Rng;

#[derive(Debug, Default)]
pub struct UploadService;

impl UploadService {
    pub fn new() -> Self {
        Self
    }

    /// 通用上传；`file_type` 缺省为 image
    pub fn upload(&self, file_type: Option<&str>, body_len: usize) -> UploadedFile {
        let file_type = file_type.filter(|t| !t.is_empty()).unwrap_or("image");
        let timestamp = Utc::now().timestamp_millis();
        let seed = format!("{}{}", timestamp, rand::thread_rng().gen_range(0..10_000));

        let (url, file_name) = match file_type {
            "image" => (
                format!("https://picsum.photos/800/600?random={}", seed),
                format!("image_{}.jpg", timestamp),
            ),
            "avatar" => (
                format!("https://picsum.photos/200/200?random={}", seed),
                format!("avatar_{}.jpg", timestamp),
            ),
            ext => (
                format!("https://picsum.photos/800/600?random={}", seed),
                format!("file_{}.{}", timestamp, ext),
            ),
        };

        tracing::debug!(file_type, %file_name, "文件已上传");
        UploadedFile {
            url,
            file_name,
            size: size_or_random(body_len, 1_000_000),
            file_type: file_type.to_string(),
        }
    }

    /// 图片上传，ID 为毫秒时间戳
    pub fn upload_image(&self, body_len: usize) -> UploadedImage {
        let timestamp = Utc::now().timestamp_millis();
        let seed = format!("{}{}", timestamp, rand::thread_rng().gen_range(0..100_000));

        UploadedImage {
            file_type: "image".to_string(),
            id: timestamp,
            url: format!("https://picsum.photos/800/600?random={}", seed),
            thumbnail_url: format!("https://picsum.photos/300/200?random={}", seed),
            file_name: format!("image_{}.jpg", timestamp),
            size: size_or_random(body_len, 500_000),
        }
    }
}

/// 空请求体时随机大小（1KB 起）
fn size_or_random(body_len: usize, spread: u64) -> u64 {
    if body_len > 0 {
        body_len as u64
    } else {
        rand::thread_rng().gen_range(0..spread) + 1024
    }
}
