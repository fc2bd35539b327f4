//! 应用配置：从 config/default.toml 与环境变量加载
//!
//! 加载顺序：先读 TOML 文件，再用环境变量 `AGENTX__*` 覆盖（双下划线表示嵌套，
//! 如 `AGENTX__LLM__PROVIDER=openai`、`AGENTX__GENERATION__LANGUAGE=en`）。

use std::path::PathBuf;

use serde::Deserialize;

use crate::types::{AppMode, Language, ToneType};

/// 应用配置根（对应 config/default.toml 的顶层）
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub llm: LlmSection,
    #[serde(default)]
    pub generation: GenerationSection,
}

/// [llm] 段：后端选择
#[derive(Debug, Clone, Deserialize)]
pub struct LlmSection {
    /// 后端：gemini / openai；优先级由 API Key 与 provider 共同决定
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_model")]
    pub model: String,
    pub base_url: Option<String>,
    #[serde(default)]
    pub gemini: LlmGeminiSection,
    #[serde(default)]
    pub openai: LlmOpenAiSection,
}

impl Default for LlmSection {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            model: default_model(),
            base_url: None,
            gemini: LlmGeminiSection::default(),
            openai: LlmOpenAiSection::default(),
        }
    }
}

fn default_provider() -> String {
    "gemini".to_string()
}

fn default_model() -> String {
    crate::llm::GEMINI_FLASH.to_string()
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LlmGeminiSection {
    pub model: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LlmOpenAiSection {
    pub model: Option<String>,
}

/// [generation] 段：揭示节奏与默认选档（语言 / 模式 / 语气）
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationSection {
    /// 思考日志逐行揭示间隔（毫秒）
    #[serde(default = "default_reveal_interval_ms")]
    pub reveal_interval_ms: u64,
    #[serde(default = "default_language")]
    pub language: Language,
    #[serde(default = "default_mode")]
    pub mode: AppMode,
    #[serde(default = "default_tone")]
    pub tone: ToneType,
}

impl Default for GenerationSection {
    fn default() -> Self {
        Self {
            reveal_interval_ms: default_reveal_interval_ms(),
            language: default_language(),
            mode: default_mode(),
            tone: default_tone(),
        }
    }
}

fn default_reveal_interval_ms() -> u64 {
    1000
}

fn default_language() -> Language {
    Language::Ar
}

fn default_mode() -> AppMode {
    AppMode::Repurpose
}

fn default_tone() -> ToneType {
    ToneType::Professional
}

/// 从 config 目录加载配置，环境变量 AGENTX__* 可覆盖
///
/// 1. 按顺序查找 config/default.toml、../config/default.toml、default.toml，找到则作为第一源
/// 2. 若传入 config_path 且文件存在，则追加该文件（可覆盖前面的键）
/// 3. 最后叠加环境变量 AGENTX__*（双下划线表示嵌套键）
pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig, config::ConfigError> {
    let mut builder = config::Config::builder();

    let default_names = ["config/default", "../config/default", "default"];
    for name in default_names {
        let path = format!("{}.toml", name);
        if std::path::Path::new(&path).exists() {
            builder = builder.add_source(config::File::with_name(name).required(false));
            break;
        }
    }

    if let Some(ref path) = config_path {
        if path.exists() {
            builder = builder.add_source(config::File::from(path.clone()).required(false));
        }
    }

    builder = builder.add_source(
        config::Environment::with_prefix("AGENTX")
            .separator("__")
            .try_parsing(true),
    );

    let c = builder.build()?;
    c.try_deserialize()
}
