//! 会话驱动：外呼 + 节奏揭示
//!
//! Session 将 SessionState 放入 watch 通道：每次转移用 send_modify 原子完成并
//! 通知订阅者。submit 是完整的一次生成周期（begin → 外呼 → 逐行揭示 → 发布）；
//! 每个 await 之后都带着捕获的 generation 重新校验，Reset 或新 Submit 之后的
//! 过期延续不产生任何效果。

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::content::ContentProcessor;
use crate::core::state::SessionState;
use crate::host::{CredentialHost, NoopCredentialHost};
use crate::types::GenerationRequest;

/// 默认的思考日志揭示间隔
pub const DEFAULT_REVEAL_INTERVAL: Duration = Duration::from_millis(1000);

/// submit 的三种结局
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 前置条件不满足（空请求 / Loading 在途），状态未变
    Rejected,
    /// 周期完整结束（Success 或 Error 均算结束）
    Completed,
    /// 周期中途被 Reset 或新请求取代，剩余步骤已失效且未触碰状态
    Superseded,
}

/// 会话：持有状态通道、内容请求服务与可选的宿主凭证钩子
pub struct Session {
    state: watch::Sender<SessionState>,
    service: Arc<dyn ContentProcessor>,
    host: Arc<dyn CredentialHost>,
    reveal_interval: Duration,
}

impl Session {
    pub fn new(service: Arc<dyn ContentProcessor>) -> Self {
        Self {
            state: watch::Sender::new(SessionState::default()),
            service,
            host: Arc::new(NoopCredentialHost),
            reveal_interval: DEFAULT_REVEAL_INTERVAL,
        }
    }

    /// 注入宿主凭证钩子（缺省为 Noop：视为已有凭证）
    pub fn with_host(mut self, host: Arc<dyn CredentialHost>) -> Self {
        self.host = host;
        self
    }

    pub fn with_reveal_interval(mut self, interval: Duration) -> Self {
        self.reveal_interval = interval;
        self
    }

    /// 订阅状态变更（watch 语义：总能读到最新快照）
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// 当前状态快照
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// 首次使用前询问宿主是否已选择凭证，未选择则请求宿主弹出选择流程。
    /// 钩子缺失或出错不阻断会话（记日志后继续）。
    pub async fn ensure_credential(&self) {
        match self.host.has_credential().await {
            Ok(true) => {}
            Ok(false) => {
                if let Err(e) = self.host.prompt_for_credential().await {
                    tracing::warn!("Credential prompt failed: {}", e);
                }
            }
            Err(e) => tracing::warn!("Credential check failed: {}", e),
        }
    }

    /// 提交一次生成请求，驱动完整周期，返回三种结局之一：
    /// Rejected（空请求 / Loading 在途，状态不变）、Completed（走到 Success
    /// 或 Error）、Superseded（中途被 Reset 或新请求取代，过期步骤静默失效）。
    pub async fn submit(&self, request: GenerationRequest) -> SubmitOutcome {
        let mut generation = None;
        self.state
            .send_modify(|s| generation = s.begin(&request.query, request.language));
        let Some(generation) = generation else {
            return SubmitOutcome::Rejected;
        };

        match self.service.process(&request).await {
            Ok(outcome) => {
                for line in &outcome.agent_thought_log {
                    tokio::time::sleep(self.reveal_interval).await;
                    let mut applied = false;
                    self.state
                        .send_modify(|s| applied = s.reveal(generation, line));
                    if !applied {
                        return SubmitOutcome::Superseded;
                    }
                }
                let mut applied = false;
                self.state.send_modify(|s| {
                    applied = s.finish(generation, outcome, request.language);
                });
                if !applied {
                    return SubmitOutcome::Superseded;
                }
            }
            Err(e) => {
                tracing::warn!("Content request failed: {}", e);
                let mut applied = false;
                self.state.send_modify(|s| {
                    applied = s.fail(generation);
                });
                if !applied {
                    return SubmitOutcome::Superseded;
                }
            }
        }
        SubmitOutcome::Completed
    }

    /// 新任务：任意状态下有效
    pub fn reset(&self) {
        self.state.send_modify(|s| s.reset());
    }
}
