//! 会话编排器：命令运行时
//!
//! 负责：加载配置、选择 LLM 后端、执行凭证钩子、建立 cmd/state 双通道，
//! 并在后台任务中消费用户命令（Submit/Reset/选档/Quit），驱动 Session 并发布状态。

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};

use crate::config::{load_config, AppConfig};
use crate::content::LlmContentProcessor;
use crate::core::{Session, SessionState, SubmitOutcome};
use crate::host::EnvCredentialHost;
use crate::llm::{create_gemini_client, LlmClient, MockLlmClient, OpenAiClient};
use crate::types::{AppMode, GenerationRequest, Language, ToneType};

/// 从前端发往编排器的用户命令
#[derive(Debug, Clone)]
pub enum Command {
    /// 提交营销目标，触发一次生成周期
    Submit(String),
    /// 新任务：清空会话
    Reset,
    /// 选档（请求在途时也可修改，作用于下一次 Submit）
    SetTone(ToneType),
    SetLanguage(Language),
    SetMode(AppMode),
    /// 退出应用
    Quit,
}

/// 根据配置与环境变量选择 LLM 后端（Gemini / OpenAI 兼容 / Mock）
pub(crate) fn create_llm_from_config(cfg: &AppConfig) -> Arc<dyn LlmClient> {
    let provider = cfg.llm.provider.to_lowercase();
    let use_gemini = std::env::var("GEMINI_API_KEY").is_ok() && provider != "openai";
    let use_openai = std::env::var("OPENAI_API_KEY").is_ok();

    if use_gemini {
        let model = cfg
            .llm
            .gemini
            .model
            .clone()
            .unwrap_or_else(|| cfg.llm.model.clone());
        tracing::info!("Using Gemini LLM ({})", model);
        Arc::new(create_gemini_client(Some(&model)))
    } else if use_openai {
        let model = cfg
            .llm
            .openai
            .model
            .clone()
            .unwrap_or_else(|| "gpt-4o-mini".to_string());
        let base = cfg.llm.base_url.as_deref();
        tracing::info!("Using OpenAI LLM ({})", model);
        Arc::new(OpenAiClient::new(
            base,
            &model,
            std::env::var("OPENAI_API_KEY").ok().as_deref(),
        ))
    } else {
        tracing::warn!("No API key set, using Mock LLM");
        Arc::new(MockLlmClient)
    }
}

/// 创建会话运行时：返回命令发送端与状态接收端；后台任务消费命令并驱动 Session。
///
/// Submit 在独立任务中运行，命令循环不被生成周期阻塞，Reset 可随时打断节奏揭示
/// （过期步骤由 generation 校验失效）。并发 Submit 由状态机前置条件拒绝。
pub async fn create_session(
    config_path: Option<PathBuf>,
) -> anyhow::Result<(mpsc::UnboundedSender<Command>, watch::Receiver<SessionState>)> {
    let cfg = load_config(config_path).unwrap_or_else(|e| {
        tracing::warn!("Config load failed ({}), using defaults", e);
        AppConfig::default()
    });

    let llm = create_llm_from_config(&cfg);
    let service = Arc::new(LlmContentProcessor::new(llm));

    let session = Arc::new(
        Session::new(service)
            .with_host(Arc::new(EnvCredentialHost::default()))
            .with_reveal_interval(Duration::from_millis(cfg.generation.reveal_interval_ms)),
    );
    session.ensure_credential().await;

    let state_rx = session.subscribe();
    let (cmd_tx, mut cmd_rx) = mpsc::unbounded_channel::<Command>();

    tokio::spawn(async move {
        let mut tone = cfg.generation.tone;
        let mut language = cfg.generation.language;
        let mut mode = cfg.generation.mode;

        while let Some(cmd) = cmd_rx.recv().await {
            match cmd {
                Command::Submit(query) => {
                    let request = GenerationRequest {
                        query,
                        tone,
                        language,
                        mode,
                    };
                    let session = session.clone();
                    tokio::spawn(async move {
                        if session.submit(request).await == SubmitOutcome::Rejected {
                            tracing::debug!("Submit rejected (empty query or request in flight)");
                        }
                    });
                }
                Command::Reset => session.reset(),
                Command::SetTone(t) => tone = t,
                Command::SetLanguage(l) => language = l,
                Command::SetMode(m) => mode = m,
                Command::Quit => break,
            }
        }
    });

    Ok((cmd_tx, state_rx))
}
