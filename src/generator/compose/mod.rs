use anyhow::{Result, anyhow};

use crate::generator::context::GeneratorContext;
use crate::generator::{MemoryScope, ScopedKeys};
use crate::theme::Theme;
use crate::types::request::GenerationRequest;
use crate::types::research::ResearchContext;

/// Prompt模板 — 固定的系统提示与首尾指令，主体由确定性插值生成，模板内没有任何条件分支
pub struct PromptTemplate {
    pub system_prompt: &'static str,
    pub opening_instruction: &'static str,
    pub closing_instruction: &'static str,
}

/// 创意生成使用的固定模板
pub const IDEA_TEMPLATE: PromptTemplate = PromptTemplate {
    system_prompt: "You are an AI project generator. You turn a topic and its research context \
                    into unique, well-scoped project ideas, and you always answer in well-formed Markdown.",

    opening_instruction: "Based on the focus topic and the research context below, \
                          generate the requested number of unique project ideas.",

    closing_instruction: r#"For each idea, output:
- A title as a Markdown heading, followed by a brief problem statement.
- Concrete deliverables (data collection, model development, evaluation).
- Constraints and scope boundaries appropriate to the stated complexity level.
- Recommended tools and techniques, including a deployment strategy (e.g. web app, mobile app, API).

Format the whole answer as Markdown and separate ideas with a horizontal rule (---)."#,
};

/// 执行组装阶段 — 从Memory取出调研上下文，渲染提示词并存回Memory
pub async fn execute(context: &GeneratorContext, request: &GenerationRequest) -> Result<String> {
    println!("📝 正在组装提示词...");

    let research: ResearchContext = context
        .get_from_memory(MemoryScope::RESEARCH, ScopedKeys::CONTEXT)
        .await
        .ok_or_else(|| anyhow!("调研上下文缺失，无法组装提示词"))?;

    let prompt = compose(request, &research, &context.config.theme);
    context
        .store_to_memory(MemoryScope::COMPOSE, ScopedKeys::PROMPT, &prompt)
        .await?;
    Ok(prompt)
}

/// 确定性的提示词插值。相同的(请求, 上下文, 主题)必然得到相同输出；
/// 上下文字段为空时照常引用，不做任何特判
pub fn compose(request: &GenerationRequest, research: &ResearchContext, theme: &Theme) -> String {
    format!(
        "{opening}\n\n\
         1. Focus Topic: {topic}\n\
         2. Complexity Level: {complexity}\n\
         3. Number of Project Ideas: {count}\n\
         4. Web Research Summary:\n{web_summary}\n\
         5. Related Research Papers:\n{papers}\n\n\
         {flavor}\n{closing}\n",
        opening = IDEA_TEMPLATE.opening_instruction,
        topic = request.topic(),
        complexity = request.complexity(),
        count = request.count(),
        web_summary = research.web_summary,
        papers = research.papers.to_prompt_text(),
        flavor = theme.prompt_flavor(),
        closing = IDEA_TEMPLATE.closing_instruction,
    )
}
