use anyhow::Result;
use colored::Colorize;

use crate::config::Config;
use crate::generator::context::GeneratorContext;
use crate::generator::{compose, ideate, outlet, research};
use crate::types::request::GenerationRequest;

/// 启动创意生成工作流：调研 → 组装 → 生成 → 落盘。
/// 一次用户提交对应一次完整的流水线执行，各阶段顺序串行
pub async fn launch(config: &Config, request: &GenerationRequest) -> Result<()> {
    let context = GeneratorContext::new(config.clone())?;

    println!(
        "{}",
        config.theme.banner().color(config.theme.accent()).bold()
    );

    // 调研阶段：抓取网络摘要与相关论文（失败各自降级，不会中断流水线）
    research::execute(&context, request).await?;

    // 组装阶段：根据请求与调研上下文渲染提示词
    let prompt = compose::execute(&context, request).await?;

    // 生成阶段：调用模型产出创意（dry-run时跳过）
    let generation = if context.config.dry_run {
        println!("🧪 dry-run模式：跳过模型调用，仅输出提示词预览");
        Ok(())
    } else {
        ideate::execute(&context, request, &prompt).await
    };

    // 无论生成是否成功，资源视图都要落盘
    outlet::save(&context, request).await?;

    if context.config.verbose {
        let report = context.cache_manager.read().await.report();
        println!(
            "📊 缓存统计: 命中 {} / 未命中 {} / 写入 {}",
            report.hits, report.misses, report.writes
        );
    }

    generation?;

    println!("\n{}", config.theme.footer().color(config.theme.accent()));
    Ok(())
}
