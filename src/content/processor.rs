//! 内容请求服务：一次外呼 + 结构化解析
//!
//! ContentProcessor 是会话层依赖的接缝；LlmContentProcessor 为生产实现：
//! 拼 system/user Prompt → 调 LlmClient 一次（不重试）→ 提取 JSON → 反序列化并校验完整性。

use std::sync::Arc;

use async_trait::async_trait;

use crate::content::prompt;
use crate::core::ProcessError;
use crate::llm::{ChatMessage, LlmClient};
use crate::types::{GenerationRequest, ProcessingResult};

/// 内容请求服务 trait：非空 query 由调用方保证
#[async_trait]
pub trait ContentProcessor: Send + Sync {
    async fn process(&self, request: &GenerationRequest) -> Result<ProcessingResult, ProcessError>;
}

/// 生产实现：持有 LLM 客户端，每次 process 恰好一次外呼
pub struct LlmContentProcessor {
    llm: Arc<dyn LlmClient>,
}

impl LlmContentProcessor {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ContentProcessor for LlmContentProcessor {
    async fn process(&self, request: &GenerationRequest) -> Result<ProcessingResult, ProcessError> {
        let messages = [
            ChatMessage::system(prompt::system_prompt()),
            ChatMessage::user(prompt::user_prompt(request)),
        ];

        let output = self
            .llm
            .complete(&messages)
            .await
            .map_err(ProcessError::Llm)?;

        parse_processing_result(&output)
    }
}

/// 解析 LLM 输出：容忍 ```json 围栏或夹杂说明文字，提取最外层 JSON 对象后反序列化
pub fn parse_processing_result(output: &str) -> Result<ProcessingResult, ProcessError> {
    let trimmed = output.trim();

    // 提取 JSON 块（```json ... ``` 或首个 { 到末个 }）
    let json_str = if let Some(start) = trimmed.find("```json") {
        let rest = &trimmed[start + 7..];
        rest.find("```")
            .map(|end| rest[..end].trim())
            .unwrap_or(rest.trim())
    } else if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        &trimmed[start..=end]
    } else {
        return Err(ProcessError::JsonParse(format!(
            "no JSON object in output: {}",
            trimmed
        )));
    };

    let result: ProcessingResult = serde_json::from_str(json_str)
        .map_err(|e| ProcessError::JsonParse(format!("{}: {}", e, json_str)))?;

    if result.content.is_empty() {
        return Err(ProcessError::IncompleteResponse("empty content".to_string()));
    }
    if result.agent_thought_log.is_empty() {
        return Err(ProcessError::IncompleteResponse(
            "empty agentThoughtLog".to_string(),
        ));
    }

    Ok(result)
}
