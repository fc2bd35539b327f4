//! LLM 客户端抽象
//!
//! 所有后端（OpenAI 兼容 / Gemini / Mock）实现 LlmClient：complete（非流式，单次外呼）。

use async_trait::async_trait;

/// 发送给 LLM 的消息角色
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    System,
    User,
}

/// 发送给 LLM 的单条消息
#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// LLM 客户端 trait：非流式完成，每次调用恰好一次外呼
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, String>;
}
