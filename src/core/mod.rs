//! 核心层：会话状态机、异步驱动、命令编排与错误类型

pub mod error;
pub mod orchestrator;
pub mod session;
pub mod state;

pub use error::ProcessError;
pub use orchestrator::{create_session, Command};
pub use session::{Session, SubmitOutcome, DEFAULT_REVEAL_INTERVAL};
pub use state::{ConversationMessage, SessionState, Speaker};
