//! 资源抽象
//!
//! 每种资源只需说明自己的 ID、创建时的默认值以及部分更新的合并规则，
//! 列表/创建/更新/删除由通用的 `CrudService` 完成。

use serde::de::DeserializeOwned;
use serde::Serialize;

pub trait Resource: Clone + Serialize + Send + Sync + 'static {
    /// 创建请求（可写字段，均可缺省）
    type Create: DeserializeOwned + Send + 'static;
    /// 部分更新请求（缺省字段保持原值）
    type Update: DeserializeOwned + Send + 'static;

    /// 列表响应中的字段名
    const COLLECTION: &'static str;
    /// 用于提示信息的资源名
    const LABEL: &'static str;

    fn id(&self) -> i64;

    /// 用服务端分配的 ID 与默认值构造新记录
    fn build(id: i64, request: Self::Create) -> Self;

    /// 逐字段合并：提供的字段覆盖，缺省字段保留；ID 等不可变字段始终取自当前记录
    fn merge(&self, patch: Self::Update) -> Self;
}
