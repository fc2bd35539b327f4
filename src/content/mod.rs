//! 内容层：Prompt 模板与内容请求服务（外部 Provider 的请求 / 响应契约）

pub mod processor;
pub mod prompt;

pub use processor::{parse_processing_result, ContentProcessor, LlmContentProcessor};
