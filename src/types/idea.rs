use serde::{Deserialize, Serialize};

/// 生成结果 — 模型返回的原始markdown正文。
/// 每个(请求, 上下文)对至多产出一份，不做结构校验，也不在运行之外持久化
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    pub markdown_body: String,
}
