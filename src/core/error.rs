//! 内容处理错误类型
//!
//! 会话层不区分失败子类：任一变体都收敛为 GenerationStatus::Error；
//! 变体仅用于日志定位（网络 / 解析 / 字段不完整）。

use thiserror::Error;

/// 内容请求服务可能出现的错误
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("LLM error: {0}")]
    Llm(String),

    #[error("JSON parse error: {0}")]
    JsonParse(String),

    /// 响应可解析但不满足成功契约（content 或 agentThoughtLog 为空）
    #[error("Incomplete response: {0}")]
    IncompleteResponse(String),
}
