//! 文件上传数据模型

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadQuery {
    /// image / avatar / 其他扩展名
    #[serde(rename = "type")]
    pub file_type: Option<String>,
}

/// 通用上传结果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub url: String,
    pub file_name: String,
    pub size: u64,
    #[serde(rename = "type")]
    pub file_type: String,
}

/// 图片上传结果
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    #[serde(rename = "type")]
    pub file_type: String,
    pub id: i64,
    pub url: String,
    pub thumbnail_url: String,
    pub file_name: String,
    pub size: u64,
}
