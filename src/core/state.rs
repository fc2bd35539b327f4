//! 会话状态与纯转移函数
//!
//! SessionState 是唯一的共享可变状态：状态机转移全部是同步纯函数，
//! 异步驱动（外呼、节奏揭示）在 core::session 中；generation 计数器
//! 用于标记每次 Submit/Reset，过期的延时步骤据此失效，不会复活已清空的会话。

use serde::Serialize;

use crate::text;
use crate::types::{GeneratedContent, GenerationStatus, GroundingSource, Language, ProcessingResult};

/// 会话消息的发言方
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Speaker {
    User,
    Agent,
}

/// 会话日志中的一条消息；is_log 标记思考日志行（界面以等宽小字渲染）
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConversationMessage {
    pub speaker: Speaker,
    pub text: String,
    pub is_log: bool,
}

impl ConversationMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
            is_log: false,
        }
    }

    pub fn agent(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Agent,
            text: text.into(),
            is_log: false,
        }
    }

    pub fn log(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Agent,
            text: text.into(),
            is_log: true,
        }
    }
}

/// 会话状态快照（供前端渲染与测试断言）
#[derive(Clone, Debug, Serialize)]
pub struct SessionState {
    pub status: GenerationStatus,
    pub history: Vec<ConversationMessage>,
    pub results: Vec<GeneratedContent>,
    pub sources: Vec<GroundingSource>,
    /// 已揭示的思考日志行数
    pub current_step: usize,
    /// 当前请求代号：Submit 与 Reset 都会递增
    pub generation: u64,
    /// 最近一次请求的语言（前端据此本地化错误提示等非历史文案）
    pub language: Language,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            status: GenerationStatus::Idle,
            history: Vec::new(),
            results: Vec::new(),
            sources: Vec::new(),
            current_step: 0,
            generation: 0,
            language: Language::Ar,
        }
    }
}

impl SessionState {
    /// Submit 前置检查 + 进入 Loading
    ///
    /// 拒绝条件：去空白后为空、或已有请求在途（Loading）。接受时依次追加
    /// 用户消息与固定确认消息，清空上轮结果，归零揭示计数，递增 generation，
    /// 返回本次请求的代号。
    pub fn begin(&mut self, query: &str, language: Language) -> Option<u64> {
        let query = query.trim();
        if query.is_empty() || self.status == GenerationStatus::Loading {
            return None;
        }

        self.history.push(ConversationMessage::user(query));
        self.history
            .push(ConversationMessage::agent(text::ack_message(language)));
        self.results.clear();
        self.sources.clear();
        self.current_step = 0;
        self.generation += 1;
        self.language = language;
        self.status = GenerationStatus::Loading;
        Some(self.generation)
    }

    /// 揭示一行思考日志；generation 不匹配（已被 Reset 或新 Submit 取代）则无效果
    pub fn reveal(&mut self, generation: u64, line: &str) -> bool {
        if generation != self.generation {
            return false;
        }
        self.current_step += 1;
        self.history.push(ConversationMessage::log(line));
        true
    }

    /// 发布最终结果：results/sources 原子地一起安装，追加完成消息，进入 Success
    pub fn finish(&mut self, generation: u64, outcome: ProcessingResult, language: Language) -> bool {
        if generation != self.generation {
            return false;
        }
        self.results = outcome.content;
        self.sources = outcome.sources;
        self.status = GenerationStatus::Success;
        self.history
            .push(ConversationMessage::agent(text::completion_message(language)));
        true
    }

    /// 请求失败：仅状态进入 Error，不增删任何消息或结果
    pub fn fail(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.status = GenerationStatus::Error;
        true
    }

    /// 新任务：任意状态下有效，清空历史 / 结果 / 来源并回到 Idle；
    /// 递增 generation 使在途请求的后续步骤全部失效
    pub fn reset(&mut self) {
        self.generation += 1;
        self.history.clear();
        self.results.clear();
        self.sources.clear();
        self.current_step = 0;
        self.status = GenerationStatus::Idle;
    }
}
