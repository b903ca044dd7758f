use anyhow::Result;

use crate::generator::compose::IDEA_TEMPLATE;
use crate::generator::context::GeneratorContext;
use crate::generator::{MemoryScope, ScopedKeys};
use crate::types::idea::GenerationResult;
use crate::types::request::GenerationRequest;

/// 执行生成阶段 — 单次无状态的请求/响应，无中间状态、无取消、无部分结果。
/// 失败时本轮不产生任何结果，用户可原样重试同一请求
pub async fn execute(
    context: &GeneratorContext,
    request: &GenerationRequest,
    prompt: &str,
) -> Result<()> {
    println!(
        "🤖 正在生成项目创意 ({} 个，{} 档)...",
        request.count(),
        request.complexity()
    );

    match context
        .llm_client
        .complete(IDEA_TEMPLATE.system_prompt, prompt)
        .await
    {
        Ok(markdown_body) => {
            let result = GenerationResult { markdown_body };
            context
                .store_to_memory(MemoryScope::GENERATION, ScopedKeys::IDEAS, result)
                .await?;
            println!("✅ 创意生成完成");
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ 创意生成失败，本轮未产生结果，可原样重试: {}", e);
            Err(e.into())
        }
    }
}
