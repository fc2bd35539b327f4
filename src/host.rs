//! 宿主环境凭证钩子
//!
//! 运行环境可能自带凭证选择能力（原生应用壳 / 托管容器）；核心只依赖
//! 两个异步调用的不透明契约：是否已有凭证、请求选择凭证。
//! 能力缺失不是错误：默认实现直接视为已有凭证，核心照常继续。

use async_trait::async_trait;

/// 宿主凭证能力的两调用契约
#[async_trait]
pub trait CredentialHost: Send + Sync {
    async fn has_credential(&self) -> Result<bool, String>;

    async fn prompt_for_credential(&self) -> Result<(), String>;
}

/// 默认实现：宿主无此能力时使用，视为已有凭证
#[derive(Debug, Default)]
pub struct NoopCredentialHost;

#[async_trait]
impl CredentialHost for NoopCredentialHost {
    async fn has_credential(&self) -> Result<bool, String> {
        Ok(true)
    }

    async fn prompt_for_credential(&self) -> Result<(), String> {
        Ok(())
    }
}

/// 控制台实现：检查环境变量中是否存在任一 API Key，缺失时在日志中给出指引
pub struct EnvCredentialHost {
    vars: Vec<String>,
}

impl EnvCredentialHost {
    pub fn new(vars: &[&str]) -> Self {
        Self {
            vars: vars.iter().map(|v| v.to_string()).collect(),
        }
    }
}

impl Default for EnvCredentialHost {
    fn default() -> Self {
        Self::new(&["GEMINI_API_KEY", "OPENAI_API_KEY"])
    }
}

#[async_trait]
impl CredentialHost for EnvCredentialHost {
    async fn has_credential(&self) -> Result<bool, String> {
        Ok(self.vars.iter().any(|v| std::env::var(v).is_ok()))
    }

    async fn prompt_for_credential(&self) -> Result<(), String> {
        tracing::warn!(
            "No API key found; set one of {} to use a real provider (falling back to mock)",
            self.vars.join(" / ")
        );
        Ok(())
    }
}
