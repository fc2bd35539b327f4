//! Agent X - 控制台入口
//!
//! 初始化日志、创建会话运行时，读取标准输入：普通文本提交生成请求，
//! 斜杠命令切换选档（/tone /lang /mode）、开新任务（/new）、退出（/exit）。
//! 后台打印任务订阅状态通道，逐条输出新增的会话消息与最终结果。

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use agentx::core::{create_session, Command};
use agentx::types::{AppMode, GenerationStatus, Language, ToneType};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 日志：默认 info，可通过 RUST_LOG 覆盖
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive("info".parse().unwrap()))
        .with(fmt::layer())
        .init();

    let (cmd_tx, mut state_rx) = create_session(None)
        .await
        .context("Failed to create session")?;

    // 打印任务：输出新增消息；成功时输出结果与接地来源，失败时提示可重试
    tokio::spawn(async move {
        let mut printed = 0usize;
        let mut last_status = GenerationStatus::Idle;
        while state_rx.changed().await.is_ok() {
            let state = state_rx.borrow_and_update().clone();
            if state.history.len() < printed {
                printed = 0; // 会话已被清空
            }
            for msg in &state.history[printed..] {
                match (msg.speaker, msg.is_log) {
                    (agentx::core::Speaker::User, _) => println!("you > {}", msg.text),
                    (agentx::core::Speaker::Agent, true) => println!("  log | {}", msg.text),
                    (agentx::core::Speaker::Agent, false) => println!("agent > {}", msg.text),
                }
            }
            printed = state.history.len();

            if state.status != last_status {
                last_status = state.status;
                match state.status {
                    GenerationStatus::Success => {
                        for res in &state.results {
                            println!("---- {} ----", res.platform);
                            println!("{}", res.title);
                            println!("{}", res.hook);
                            println!("{}", res.body);
                            println!("trigger: {} | strategy: {}", res.psychological_trigger, res.strategy_reasoning);
                            println!("{}", res.hashtags.join(" "));
                        }
                        for src in &state.sources {
                            println!("source: {} <{}>", src.title, src.uri);
                        }
                    }
                    GenerationStatus::Error => {
                        println!("agent > {}", agentx::text::error_message(state.language));
                    }
                    _ => {}
                }
            }
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let cmd = match input.split_once(' ') {
            _ if input == "/exit" || input == "/quit" => {
                let _ = cmd_tx.send(Command::Quit);
                break;
            }
            _ if input == "/new" => Command::Reset,
            Some(("/tone", arg)) => match arg.trim().to_lowercase().as_str() {
                "professional" => Command::SetTone(ToneType::Professional),
                "friendly" => Command::SetTone(ToneType::Friendly),
                "witty" => Command::SetTone(ToneType::Witty),
                "urgent" => Command::SetTone(ToneType::Urgent),
                other => {
                    println!("unknown tone: {}", other);
                    continue;
                }
            },
            Some(("/lang", arg)) => match arg.trim().to_lowercase().as_str() {
                "ar" => Command::SetLanguage(Language::Ar),
                "en" => Command::SetLanguage(Language::En),
                other => {
                    println!("unknown language: {}", other);
                    continue;
                }
            },
            Some(("/mode", arg)) => match arg.trim().to_lowercase().as_str() {
                "repurpose" => Command::SetMode(AppMode::Repurpose),
                "generate" => Command::SetMode(AppMode::Generate),
                other => {
                    println!("unknown mode: {}", other);
                    continue;
                }
            },
            _ => Command::Submit(input.to_string()),
        };

        if cmd_tx.send(cmd).is_err() {
            break;
        }
    }

    Ok(())
}
