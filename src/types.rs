//! 领域模型：语言 / 模式 / 语气枚举与生成结果数据结构
//!
//! 数据结构的字段名与外部 Provider 返回的 JSON 一致（camelCase），
//! 由 serde 直接反序列化；缺少必需字段即视为解析失败。

use serde::{Deserialize, Serialize};

/// 输出语言（影响 Prompt 指令与固定提示语）
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Ar,
    En,
}

/// 工作模式：二创已有素材 / 从目标语句全新生成
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppMode {
    Repurpose,
    Generate,
}

/// 语气指令：随请求发送，影响生成文案的措辞风格
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToneType {
    Professional,
    Friendly,
    Witty,
    Urgent,
}

/// 会话生成状态
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum GenerationStatus {
    Idle,
    Loading,
    Success,
    Error,
}

/// 一条生成的内容（单个平台的帖子方案）
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub platform: String,
    pub title: String,
    pub hook: String,
    pub body: String,
    pub psychological_trigger: String,
    pub strategy_reasoning: String,
    pub hashtags: Vec<String>,
}

/// Provider 引用的接地来源（标题 + URI）
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroundingSource {
    pub title: String,
    pub uri: String,
}

/// 一次请求的完整结构化输出：内容、接地来源、思考日志
///
/// sources 允许缺省（Provider 未做联网检索时为空）；
/// content 与 agentThoughtLog 为必需字段。
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    pub content: Vec<GeneratedContent>,
    #[serde(default)]
    pub sources: Vec<GroundingSource>,
    pub agent_thought_log: Vec<String>,
}

/// 一次用户发起的生成请求（提交时创建，不可变）
#[derive(Clone, Debug)]
pub struct GenerationRequest {
    pub query: String,
    pub tone: ToneType,
    pub language: Language,
    pub mode: AppMode,
}
