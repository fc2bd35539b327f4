//! Gemini API 客户端（OpenAI 兼容格式）
//!
//! Google 为 Gemini 提供 OpenAI 兼容端点，可直接复用 OpenAiClient。
//! - Base URL: https://generativelanguage.googleapis.com/v1beta/openai
//! - 模型: gemini-2.5-flash（速度优先）, gemini-2.5-pro（质量优先）

use crate::llm::OpenAiClient;

/// Gemini API 常量
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const GEMINI_FLASH: &str = "gemini-2.5-flash";
pub const GEMINI_PRO: &str = "gemini-2.5-pro";

/// 创建 Gemini 客户端
///
/// - 优先使用环境变量 `GEMINI_API_KEY`
/// - 模型可通过 `model` 参数或 `GEMINI_MODEL` 环境变量指定
pub fn create_gemini_client(model: Option<&str>) -> OpenAiClient {
    let api_key = std::env::var("GEMINI_API_KEY")
        .ok()
        .or_else(|| std::env::var("OPENAI_API_KEY").ok())
        .unwrap_or_else(|| "sk-placeholder".to_string());

    let model = model
        .map(String::from)
        .or_else(|| std::env::var("GEMINI_MODEL").ok())
        .unwrap_or_else(|| GEMINI_FLASH.to_string());

    OpenAiClient::new(Some(GEMINI_BASE_URL), &model, Some(api_key.as_str()))
}
