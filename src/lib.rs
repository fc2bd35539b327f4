//! Agent X - 营销内容生成智能体会话核心
//!
//! 模块划分：
//! - **config**: 应用配置加载（TOML + 环境变量）
//! - **content**: Prompt 模板与内容请求服务（Provider 请求 / 响应契约）
//! - **core**: 会话状态机、节奏揭示驱动、命令编排、错误类型
//! - **host**: 宿主环境凭证钩子（可选能力，缺失不阻断）
//! - **llm**: LLM 客户端抽象与实现（OpenAI 兼容 / Gemini / Mock）
//! - **text**: 固定提示语（阿拉伯语 / 英语）
//! - **types**: 领域模型（语气 / 模式 / 语言、生成结果、接地来源）

pub mod config;
pub mod content;
pub mod core;
pub mod host;
pub mod llm;
pub mod text;
pub mod types;

pub use crate::core::{create_session, Command, Session, SessionState, SubmitOutcome};
pub use crate::types::{GenerationRequest, GenerationStatus, ProcessingResult};
