//! 会话状态机集成测试
//!
//! 用本地 Mock 服务驱动完整生成周期；节奏揭示在 start_paused 虚拟时钟下
//! 确定性地推进（1000ms 间隔不真实等待）。

use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;

use agentx::content::ContentProcessor;
use agentx::core::{ProcessError, Session, Speaker, SubmitOutcome};
use agentx::text;
use agentx::types::{
    AppMode, GeneratedContent, GenerationRequest, GenerationStatus, GroundingSource, Language,
    ProcessingResult, ToneType,
};

/// 固定结果的 Mock 服务，可选响应延迟
struct FixedProcessor {
    result: ProcessingResult,
    delay: Duration,
}

#[async_trait::async_trait]
impl ContentProcessor for FixedProcessor {
    async fn process(&self, _request: &GenerationRequest) -> Result<ProcessingResult, ProcessError> {
        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }
        Ok(self.result.clone())
    }
}

/// 始终失败的 Mock 服务
struct FailingProcessor;

#[async_trait::async_trait]
impl ContentProcessor for FailingProcessor {
    async fn process(&self, _request: &GenerationRequest) -> Result<ProcessingResult, ProcessError> {
        Err(ProcessError::Llm("simulated provider failure".to_string()))
    }
}

fn mock_result() -> ProcessingResult {
    ProcessingResult {
        content: vec![GeneratedContent {
            platform: "Twitter".into(),
            title: "X".into(),
            hook: "H".into(),
            body: "B".into(),
            psychological_trigger: "T".into(),
            strategy_reasoning: "R".into(),
            hashtags: vec!["#a".into()],
        }],
        sources: vec![GroundingSource {
            title: "S1".into(),
            uri: "http://x".into(),
        }],
        agent_thought_log: vec!["step1".into(), "step2".into()],
    }
}

fn three_step_result() -> ProcessingResult {
    ProcessingResult {
        agent_thought_log: vec!["l0".into(), "l1".into(), "l2".into()],
        ..mock_result()
    }
}

fn request(query: &str) -> GenerationRequest {
    GenerationRequest {
        query: query.to_string(),
        tone: ToneType::Urgent,
        language: Language::En,
        mode: AppMode::Generate,
    }
}

fn session_with(result: ProcessingResult, delay: Duration) -> Arc<Session> {
    Arc::new(Session::new(Arc::new(FixedProcessor { result, delay })))
}

#[tokio::test(start_paused = true)]
async fn test_end_to_end_success_scenario() {
    let session = session_with(mock_result(), Duration::ZERO);

    assert_eq!(
        session.submit(request("launch a product")).await,
        SubmitOutcome::Completed
    );

    let state = session.snapshot();
    assert_eq!(state.status, GenerationStatus::Success);

    // 历史恰好 5 条：用户、确认、step1、step2、完成
    assert_eq!(state.history.len(), 5);
    assert_eq!(state.history[0].speaker, Speaker::User);
    assert_eq!(state.history[0].text, "launch a product");
    assert_eq!(state.history[1].text, text::ack_message(Language::En));
    assert!(state.history[2].is_log);
    assert_eq!(state.history[2].text, "step1");
    assert!(state.history[3].is_log);
    assert_eq!(state.history[3].text, "step2");
    assert_eq!(state.history[4].text, text::completion_message(Language::En));

    assert_eq!(state.results, mock_result().content);
    assert_eq!(state.sources, mock_result().sources);
    assert_eq!(state.current_step, 2);
}

#[tokio::test]
async fn test_failure_scenario_keeps_history_only() {
    let session = Arc::new(Session::new(Arc::new(FailingProcessor)));

    // 失败也算完整结束的周期
    assert_eq!(
        session.submit(request("launch a product")).await,
        SubmitOutcome::Completed
    );

    let state = session.snapshot();
    assert_eq!(state.status, GenerationStatus::Error);
    // 仅用户消息与确认消息，无结果、无来源、无日志行
    assert_eq!(state.history.len(), 2);
    assert!(state.results.is_empty());
    assert!(state.sources.is_empty());
    assert_eq!(state.current_step, 0);
}

#[tokio::test]
async fn test_empty_query_is_noop() {
    let session = session_with(mock_result(), Duration::ZERO);

    assert_eq!(session.submit(request("")).await, SubmitOutcome::Rejected);
    assert_eq!(session.submit(request("   ")).await, SubmitOutcome::Rejected);

    let state = session.snapshot();
    assert_eq!(state.status, GenerationStatus::Idle);
    assert!(state.history.is_empty());
    assert!(state.results.is_empty());
    assert!(state.sources.is_empty());
    assert_eq!(state.current_step, 0);
    assert_eq!(state.generation, 0);
}

#[tokio::test(start_paused = true)]
async fn test_submit_rejected_while_loading() {
    let session = session_with(mock_result(), Duration::from_secs(60));

    let in_flight = session.clone();
    let handle = tokio::spawn(async move { in_flight.submit(request("first")).await });
    sleep(Duration::from_millis(10)).await;

    // 请求在途：第二次 Submit 无任何效果
    assert_eq!(
        session.submit(request("second")).await,
        SubmitOutcome::Rejected
    );
    let state = session.snapshot();
    assert_eq!(state.status, GenerationStatus::Loading);
    assert_eq!(state.history.len(), 2);
    assert_eq!(state.history[0].text, "first");
    assert_eq!(state.current_step, 0);

    sleep(Duration::from_secs(70)).await;
    assert_eq!(handle.await.unwrap(), SubmitOutcome::Completed);

    let state = session.snapshot();
    assert_eq!(state.status, GenerationStatus::Success);
    assert_eq!(state.history.len(), 5);
}

#[tokio::test(start_paused = true)]
async fn test_ordered_reveal_publishes_results_last() {
    let session = session_with(three_step_result(), Duration::ZERO);

    let in_flight = session.clone();
    let handle = tokio::spawn(async move { in_flight.submit(request("go")).await });

    // t=1500ms：恰好揭示了第一行，结果尚未发布
    sleep(Duration::from_millis(1500)).await;
    let state = session.snapshot();
    assert_eq!(state.status, GenerationStatus::Loading);
    assert_eq!(state.current_step, 1);
    assert!(state.results.is_empty());
    assert!(state.sources.is_empty());

    // t=2500ms：第二行已出，仍未发布
    sleep(Duration::from_millis(1000)).await;
    let state = session.snapshot();
    assert_eq!(state.current_step, 2);
    assert!(state.results.is_empty());

    sleep(Duration::from_millis(1000)).await;
    assert_eq!(handle.await.unwrap(), SubmitOutcome::Completed);

    let state = session.snapshot();
    assert_eq!(state.status, GenerationStatus::Success);
    let logs: Vec<&str> = state
        .history
        .iter()
        .filter(|m| m.is_log)
        .map(|m| m.text.as_str())
        .collect();
    assert_eq!(logs, vec!["l0", "l1", "l2"]);
    assert_eq!(state.results.len(), 1);
    assert_eq!(state.sources.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_reset_mid_reveal_is_not_resurrected() {
    let session = session_with(three_step_result(), Duration::ZERO);

    let in_flight = session.clone();
    let handle = tokio::spawn(async move { in_flight.submit(request("go")).await });

    sleep(Duration::from_millis(1500)).await;
    assert_eq!(session.snapshot().current_step, 1);

    session.reset();

    // 过期延续的剩余步骤必须全部失效，结局标记为被取代
    sleep(Duration::from_secs(10)).await;
    assert_eq!(handle.await.unwrap(), SubmitOutcome::Superseded);

    let state = session.snapshot();
    assert_eq!(state.status, GenerationStatus::Idle);
    assert!(state.history.is_empty());
    assert!(state.results.is_empty());
    assert!(state.sources.is_empty());
    assert_eq!(state.current_step, 0);
}

#[tokio::test(start_paused = true)]
async fn test_reset_after_reset_mid_reveal_starts_clean_session() {
    let session = session_with(three_step_result(), Duration::ZERO);

    let in_flight = session.clone();
    let handle = tokio::spawn(async move { in_flight.submit(request("first")).await });
    sleep(Duration::from_millis(1500)).await;
    session.reset();

    let in_flight = session.clone();
    let second = tokio::spawn(async move { in_flight.submit(request("second")).await });
    sleep(Duration::from_secs(10)).await;
    assert_eq!(handle.await.unwrap(), SubmitOutcome::Superseded);
    assert_eq!(second.await.unwrap(), SubmitOutcome::Completed);

    // 新会话完整且不混入旧请求的任何消息
    let state = session.snapshot();
    assert_eq!(state.status, GenerationStatus::Success);
    assert_eq!(state.history.len(), 6);
    assert_eq!(state.history[0].text, "second");
    assert_eq!(state.history.iter().filter(|m| m.is_log).count(), 3);
    assert_eq!(state.current_step, 3);
}

#[tokio::test(start_paused = true)]
async fn test_reset_is_idempotent_after_submissions() {
    let session = session_with(mock_result(), Duration::ZERO);

    assert_eq!(session.submit(request("one")).await, SubmitOutcome::Completed);
    assert_eq!(session.submit(request("two")).await, SubmitOutcome::Completed);

    session.reset();
    let first = session.snapshot();
    session.reset();
    let second = session.snapshot();

    for state in [&first, &second] {
        assert_eq!(state.status, GenerationStatus::Idle);
        assert!(state.history.is_empty());
        assert!(state.results.is_empty());
        assert!(state.sources.is_empty());
        assert_eq!(state.current_step, 0);
    }
}
