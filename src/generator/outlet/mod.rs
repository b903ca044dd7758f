use anyhow::Result;
use colored::Colorize;
use std::fs;

use crate::generator::context::GeneratorContext;
use crate::generator::{MemoryScope, ScopedKeys};
use crate::types::idea::GenerationResult;
use crate::types::request::GenerationRequest;
use crate::types::research::ResearchContext;
use crate::utils::filename::topic_slug;

/// 保存本轮运行的产出
pub async fn save(context: &GeneratorContext, request: &GenerationRequest) -> Result<()> {
    let outlet = DiskOutlet;
    outlet.save(context, request).await
}

pub trait Outlet {
    async fn save(&self, context: &GeneratorContext, request: &GenerationRequest) -> Result<()>;
}

pub struct DiskOutlet;

impl Outlet for DiskOutlet {
    async fn save(&self, context: &GeneratorContext, request: &GenerationRequest) -> Result<()> {
        println!("\n🖊️ 产出落盘中...");

        let output_dir = &context.config.output_path;
        fs::create_dir_all(output_dir)?;

        let slug = topic_slug(request.topic());
        let theme = &context.config.theme;

        // 资源视图：无论生成是否成功都要写出，供用户检查抓取到的原始上下文
        if let Some(research) = context
            .get_from_memory::<ResearchContext>(MemoryScope::RESEARCH, ScopedKeys::CONTEXT)
            .await
        {
            let resources_path = output_dir.join(format!("{}-resources.md", slug));
            fs::write(&resources_path, render_resources(context, &research))?;
            println!("💾 已保存调研资源: {}", resources_path.display());
        } else {
            eprintln!("⚠️ 警告: 未找到调研上下文，资源视图未生成");
        }

        // dry-run时保存提示词预览
        if context.config.dry_run {
            if let Some(prompt) = context
                .get_from_memory::<String>(MemoryScope::COMPOSE, ScopedKeys::PROMPT)
                .await
            {
                let prompt_path = output_dir.join(format!("{}-prompt.md", slug));
                fs::write(&prompt_path, prompt)?;
                println!("💾 已保存提示词预览: {}", prompt_path.display());
            } else {
                eprintln!("⚠️ 警告: 未找到已组装的提示词");
            }
        }

        // 创意正文：下载文件名由主题派生
        if let Some(result) = context
            .get_from_memory::<GenerationResult>(MemoryScope::GENERATION, ScopedKeys::IDEAS)
            .await
        {
            let ideas_path = output_dir.join(format!("{}-ideas.md", slug));
            fs::write(&ideas_path, &result.markdown_body)?;
            println!("💾 已保存项目创意: {}", ideas_path.display());

            // 控制台渲染
            println!(
                "\n{}",
                theme.ideas_heading().color(theme.accent()).bold()
            );
            println!("{}", result.markdown_body);
        }

        Ok(())
    }
}

/// 渲染资源视图 — 原样展示两段上下文，对应原始界面的"Resources"标签页
fn render_resources(context: &GeneratorContext, research: &ResearchContext) -> String {
    let theme = &context.config.theme;
    format!(
        "# {heading}\n\n\
         Fetched at: {fetched_at} (UTC)\n\n\
         ## 🔍 Web Research Results\n\n```\n{web_summary}\n```\n\n\
         ## 📄 Research Papers\n\n```\n{papers}\n```\n",
        heading = theme.resources_heading(),
        fetched_at = research.fetched_at.format("%Y-%m-%d %H:%M:%S"),
        web_summary = research.web_summary,
        papers = research.papers.to_prompt_text(),
    )
}
