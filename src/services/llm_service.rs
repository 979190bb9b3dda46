//! LLM 服务 - 业务能力层
//!
//! 只负责"LLM 审核题目"能力，不关心流程
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 支持自定义 API 端点和模型
//! - 兼容 OpenAI API 的服务（如 Azure, Gemini, Doubao 等）

use anyhow::Result;
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, AppResult, LlmError};
use crate::models::QuestionRecord;
use crate::services::annotator::{build_prompt, Annotator, REVIEW_SYSTEM_MESSAGE};

/// LLM 服务
///
/// 职责：
/// - 调用 LLM API 审核单个题目
/// - 提供通用的 LLM 调用接口
/// - 不出现 Vec<QuestionRecord>
/// - 不关心流程顺序
pub struct LlmService {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl LlmService {
    /// 创建新的 LLM 服务
    ///
    /// 没有配置 API 密钥时直接返回配置错误，不会发出任何请求
    pub fn new(config: &Config) -> AppResult<Self> {
        let api_key = config.require_api_key()?;

        // 配置 OpenAI 客户端（兼容 OpenAI API 的服务）
        let openai_config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(&config.llm_api_base_url);

        Ok(Self {
            client: Client::with_config(openai_config),
            model_name: config.llm_model_name.clone(),
        })
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// 通用的 LLM 调用函数
    ///
    /// # 参数
    /// - `user_message`: 用户消息内容
    /// - `system_message`: 系统消息（可选）
    ///
    /// # 返回
    /// 返回 LLM 的响应内容（去掉首尾空白）
    ///
    /// # 示例
    /// ```no_run
    /// # use process_exam::services::LlmService;
    /// # async fn example(service: &LlmService) -> anyhow::Result<()> {
    /// let response = service.send_to_llm("你好", Some("你是一个友好的助手")).await?;
    /// println!("LLM 响应: {}", response);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send_to_llm(&self, user_message: &str, system_message: Option<&str>) -> Result<String> {
        debug!("调用 LLM API，模型: {}", self.model_name);
        debug!("用户消息长度: {} 字符", user_message.chars().count());

        let mut messages = Vec::new();

        if let Some(sys_msg) = system_message {
            let system_msg = ChatCompletionRequestSystemMessageArgs::default()
                .content(sys_msg)
                .build()?;
            messages.push(ChatCompletionRequestMessage::System(system_msg));
        }

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(user_message)
            .build()?;
        messages.push(ChatCompletionRequestMessage::User(user_msg));

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(messages)
            .temperature(0.3)
            .build()?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| AppError::llm_api_failed(&self.model_name, e))?;

        debug!("LLM API 调用成功");

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or_else(|| {
                AppError::from(LlmError::EmptyContent {
                    model: self.model_name.clone(),
                })
            })?;

        Ok(content)
    }
}

impl Annotator for LlmService {
    async fn annotate(&self, question: &QuestionRecord) -> Result<String> {
        let prompt = build_prompt(question);
        self.send_to_llm(&prompt, Some(REVIEW_SYSTEM_MESSAGE)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;

    fn config_with_key(key: Option<&str>) -> Config {
        Config {
            llm_api_key: key.map(str::to_string),
            ..Config::default()
        }
    }

    #[test]
    fn test_new_without_key_fails_fast() {
        let result = LlmService::new(&config_with_key(None));
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::EnvVarNotFound { .. }))
        ));
    }

    #[test]
    fn test_new_with_key_uses_configured_model() {
        let config = Config {
            llm_model_name: "doubao-seed-1.6".to_string(),
            ..config_with_key(Some("sk-test"))
        };
        let service = LlmService::new(&config).unwrap();
        assert_eq!(service.model_name(), "doubao-seed-1.6");
    }

    /// 测试真实 LLM 审核，需要设置 OPENAI_API_KEY
    ///
    /// 运行方式：
    /// ```bash
    /// cargo test test_annotate_live -- --ignored --nocapture
    /// ```
    #[tokio::test]
    #[ignore]
    async fn test_annotate_live() {
        crate::logger::init();

        let config = Config::from_env().expect("加载配置失败");
        let service = LlmService::new(&config).expect("需要设置 OPENAI_API_KEY");

        let question = QuestionRecord::new(
            "1. 中国的首都是哪座城市？",
            vec![
                crate::models::OptionRecord::new("A. 上海", false),
                crate::models::OptionRecord::new("B. 北京", true),
            ],
        );

        let analysis = service.annotate(&question).await.expect("LLM 调用失败");
        println!("\n========== LLM 响应 ==========\n{}\n", analysis);
        assert!(!analysis.is_empty());
    }
}
