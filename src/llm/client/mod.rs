//! LLM客户端 - 提供统一的模型调用接口

use anyhow::Result;
use std::future::Future;

use crate::config::Config;

mod providers;

use providers::ProviderClient;

/// 生成阶段错误 — 模型调用在既定重试次数内未能成功。
/// 调用方必须把"没有结果"当作本轮未发生生成，而不是空的创意集
#[derive(Debug, thiserror::Error)]
#[error("idea generation failed after {attempts} attempt(s): {message}")]
pub struct GenerationError {
    pub attempts: u32,
    pub message: String,
}

/// LLM客户端
#[derive(Clone)]
pub struct LLMClient {
    config: Config,
    client: ProviderClient,
}

impl LLMClient {
    /// 创建新的LLM客户端
    pub fn new(config: Config) -> Result<Self> {
        let client = ProviderClient::new(&config.llm)?;
        Ok(Self { client, config })
    }

    /// 通用重试逻辑。重试完全由客户端层承担，流水线自身不再叠加任何重试
    async fn retry_with_backoff<T, F, Fut>(&self, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, anyhow::Error>>,
    {
        let llm_config = &self.config.llm;
        let max_retries = llm_config.retry_attempts;
        let retry_delay_ms = llm_config.retry_delay_ms;
        let mut retries = 0;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(err) => {
                    retries += 1;
                    eprintln!(
                        "❌ 调用模型服务出错，重试中 (第 {} / {} 次尝试): {}",
                        retries, max_retries, err
                    );
                    if retries >= max_retries {
                        return Err(err);
                    }
                    tokio::time::sleep(std::time::Duration::from_millis(retry_delay_ms)).await;
                }
            }
        }
    }

    /// 单轮补全 — 返回模型的原始文本，不校验输出是否符合请求的结构或数量
    pub async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GenerationError> {
        let agent =
            self.client
                .create_agent(&self.config.llm.model, system_prompt, &self.config.llm);

        self.retry_with_backoff(|| async { agent.prompt(user_prompt).await })
            .await
            .map_err(|err| GenerationError {
                attempts: self.config.llm.retry_attempts,
                message: format!("{:#}", err),
            })
    }
}
