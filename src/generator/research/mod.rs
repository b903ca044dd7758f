use anyhow::Result;

use crate::config::Config;
use crate::generator::context::GeneratorContext;
use crate::generator::{MemoryScope, ScopedKeys};
use crate::types::request::GenerationRequest;
use crate::types::research::ResearchContext;

pub mod papers;
pub mod web;

use web::{SearchProvider, SerpApiClient};

/// 调研上下文的缓存类别
const CACHE_CATEGORY: &str = "research";

/// 执行调研阶段 — 按主题读穿缓存，未命中时并发抓取两路上下文。
/// 两路子调用互相独立，任何一路失败都各自降级，绝不中断流水线
pub async fn execute(context: &GeneratorContext, request: &GenerationRequest) -> Result<()> {
    println!("🔍 正在收集调研上下文: {}", request.topic());

    let cache_manager = context.cache_manager.read().await;

    if context.config.force_refresh {
        cache_manager.expire(CACHE_CATEGORY, request.topic()).await?;
    }

    // 读穿缓存：一小时窗口内同一主题直接复用，过期后重抓并整体替换
    if let Some(cached) = cache_manager
        .get::<ResearchContext>(CACHE_CATEGORY, request.topic())
        .await?
    {
        println!("⚡ 命中调研缓存，直接复用");
        context
            .store_to_memory(MemoryScope::RESEARCH, ScopedKeys::CONTEXT, cached)
            .await?;
        return Ok(());
    }

    let research = fetch(&context.config, request.topic()).await;

    // 缓存写入失败只告警，不影响主流程
    if let Err(e) = cache_manager
        .put(CACHE_CATEGORY, request.topic(), &research)
        .await
    {
        eprintln!("⚠️ 调研缓存写入失败: {}", e);
    }

    context
        .store_to_memory(MemoryScope::RESEARCH, ScopedKeys::CONTEXT, research)
        .await?;
    Ok(())
}

/// 抓取一份全新的调研上下文。两路抓取并发执行，顺序不可观测
pub async fn fetch(config: &Config, topic: &str) -> ResearchContext {
    let search = SerpApiClient::new(config.search.clone());
    let (web_summary, papers) = futures::join!(
        fetch_web_summary(&search, topic),
        papers::fetch_papers(&config.papers, topic)
    );
    ResearchContext::new(web_summary, papers)
}

/// 网络摘要子调用 — 任何失败都降级为空文本并给出用户可见的警告，绝不向调用方抛错
pub async fn fetch_web_summary(provider: &dyn SearchProvider, topic: &str) -> String {
    let query = format!("project ideas for {}", topic);
    match provider.search(&query).await {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("⚠️ 网络搜索失败，本轮提示词将缺少网络摘要: {}", e);
            String::new()
        }
    }
}

// Include tests
#[cfg(test)]
mod tests;
