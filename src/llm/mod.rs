//! LLM 层：客户端抽象与实现（OpenAI 兼容 / Gemini / Mock）

pub mod gemini;
pub mod mock;
pub mod openai;
pub mod traits;

pub use gemini::{create_gemini_client, GEMINI_FLASH, GEMINI_PRO};
pub use mock::MockLlmClient;
pub use openai::OpenAiClient;
pub use traits::{ChatMessage, ChatRole, LlmClient};
