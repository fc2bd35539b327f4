//! Prompt 模板：语气 / 模式 / 语言指令与严格 JSON 输出约定
//!
//! system 部分固定角色与输出 Schema；user 部分拼接目标语句与本次请求的指令。

use crate::types::{AppMode, GenerationRequest, Language, ToneType};

/// 语气指令（与界面上的语气档位一一对应）
fn tone_directive(tone: ToneType) -> &'static str {
    match tone {
        ToneType::Professional => {
            "Write with calm authority: precise claims, expert framing, zero hype words."
        }
        ToneType::Friendly => {
            "Write like a human talking to a friend: warm, conversational, first person."
        }
        ToneType::Witty => {
            "Write like a witty genius: sharp humor, unexpected angles, playful wording."
        }
        ToneType::Urgent => {
            "Write with urgency: scarcity, deadlines, fear of missing the opportunity."
        }
    }
}

/// 模式指令：二创 / 全新生成
fn mode_directive(mode: AppMode) -> &'static str {
    match mode {
        AppMode::Repurpose => {
            "The user supplies existing material; evolve and repurpose it per platform."
        }
        AppMode::Generate => {
            "The user supplies a marketing goal; generate brand-new content from scratch."
        }
    }
}

/// 输出语言指令
fn language_directive(language: Language) -> &'static str {
    match language {
        Language::Ar => "All generated text fields must be written in Arabic.",
        Language::En => "All generated text fields must be written in English.",
    }
}

/// system prompt：角色设定 + 响应 Schema
///
/// 要求返回单个 JSON 对象，不得包裹多余说明文字；字段名与 ProcessingResult 一致。
pub fn system_prompt() -> String {
    [
        "You are Agent X, an elite marketing content strategist.",
        "For every request you research the topic, pick the best platforms, and craft \
         ready-to-post content.",
        "Respond with a single JSON object and nothing else, matching exactly:",
        r#"{"content":[{"platform":"...","title":"...","hook":"...","body":"...","psychologicalTrigger":"...","strategyReasoning":"...","hashtags":["..."]}],"sources":[{"title":"...","uri":"..."}],"agentThoughtLog":["..."]}"#,
        "content: 1 or more platform posts. sources: citations backing your claims, may be \
         empty. agentThoughtLog: 3 to 5 short lines narrating your reasoning steps, in the \
         order you performed them.",
    ]
    .join("\n")
}

/// user prompt：目标语句 + 本次请求的语气 / 模式 / 语言指令
pub fn user_prompt(request: &GenerationRequest) -> String {
    format!(
        "{}\n\nTone: {}\nMode: {}\n{}",
        request.query,
        tone_directive(request.tone),
        mode_directive(request.mode),
        language_directive(request.language),
    )
}
