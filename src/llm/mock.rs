//! Mock LLM 客户端（用于测试与无 Key 运行）
//!
//! 取最后一条 User 消息，回显为符合 ProcessingResult 结构的 JSON，便于本地跑通完整生成流程。

use async_trait::async_trait;

use crate::llm::{ChatMessage, ChatRole, LlmClient};

/// Mock 客户端：返回内嵌用户目标的固定结构化方案
#[derive(Debug, Default)]
pub struct MockLlmClient;

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, String> {
        let goal = messages
            .iter()
            .rev()
            .find(|m| matches!(m.role, ChatRole::User))
            .map(|m| m.content.as_str())
            .unwrap_or("(no input)");

        // 只取用户 Prompt 的首行（目标语句），避免把整段指令回显进文案
        let goal = goal.lines().next().unwrap_or(goal);

        Ok(serde_json::json!({
            "content": [{
                "platform": "Twitter",
                "title": "Mock strategy",
                "hook": "Stop scrolling.",
                "body": format!("Offline draft for: {}", goal),
                "psychologicalTrigger": "Curiosity",
                "strategyReasoning": "Canned reply produced without a provider key.",
                "hashtags": ["#mock"]
            }],
            "sources": [],
            "agentThoughtLog": [
                "Analyzing request (mock)",
                "Drafting content (mock)"
            ]
        })
        .to_string())
    }
}
