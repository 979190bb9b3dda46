use crate::error::{AppResult, ConfigError};
use crate::services::dedup::DEFAULT_SIMILARITY_THRESHOLD;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 输入试卷文档
    pub input_path: String,
    /// 输出文档（每次运行覆盖）
    pub output_path: String,
    /// 题干相似度阈值，严格大于该值视为重复
    pub similarity_threshold: f64,
    /// 是否调用 LLM 分析题目
    pub enable_llm: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- LLM 配置 ---
    pub llm_api_key: Option<String>,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: "temp.docx".to_string(),
            output_path: "processed_exam.docx".to_string(),
            similarity_threshold: DEFAULT_SIMILARITY_THRESHOLD,
            enable_llm: true,
            verbose_logging: false,
            llm_api_key: None,
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            llm_model_name: "gpt-3.5-turbo".to_string(),
        }
    }
}

impl Config {
    /// 从环境变量加载配置，启动时先尝试读取当前目录下的 `.env`
    pub fn from_env() -> AppResult<Self> {
        let _ = dotenvy::dotenv();

        let default = Self::default();
        Ok(Self {
            input_path: std::env::var("INPUT_DOCX").unwrap_or(default.input_path),
            output_path: std::env::var("OUTPUT_DOCX").unwrap_or(default.output_path),
            similarity_threshold: parse_var("SIMILARITY_THRESHOLD", "f64")?
                .unwrap_or(default.similarity_threshold),
            enable_llm: parse_var("ENABLE_LLM_ANALYSIS", "bool")?.unwrap_or(default.enable_llm),
            verbose_logging: parse_var("VERBOSE_LOGGING", "bool")?.unwrap_or(default.verbose_logging),
            llm_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
        })
    }

    /// 取出 API 密钥，缺失时返回配置错误
    pub fn require_api_key(&self) -> AppResult<&str> {
        self.llm_api_key.as_deref().ok_or_else(|| {
            ConfigError::EnvVarNotFound {
                var_name: "OPENAI_API_KEY".to_string(),
            }
            .into()
        })
    }
}

/// 读取并解析环境变量；未设置时返回 `None`，格式错误时返回配置错误
fn parse_var<T: std::str::FromStr>(var_name: &str, expected_type: &str) -> AppResult<Option<T>> {
    match std::env::var(var_name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| {
                ConfigError::EnvVarParseFailed {
                    var_name: var_name.to_string(),
                    value,
                    expected_type: expected_type.to_string(),
                }
                .into()
            }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_missing_api_key_is_config_error() {
        let config = Config::default();

        match config.require_api_key() {
            Err(AppError::Config(ConfigError::EnvVarNotFound { var_name })) => {
                assert_eq!(var_name, "OPENAI_API_KEY");
            }
            other => panic!("应该返回配置错误, 实际: {:?}", other),
        }
    }

    #[test]
    fn test_parse_var_rejects_bad_value() {
        std::env::set_var("PROCESS_EXAM_TEST_BAD_BOOL", "maybe");
        let result: AppResult<Option<bool>> = parse_var("PROCESS_EXAM_TEST_BAD_BOOL", "bool");
        assert!(matches!(
            result,
            Err(AppError::Config(ConfigError::EnvVarParseFailed { .. }))
        ));

        let unset: Option<f64> = parse_var("PROCESS_EXAM_TEST_UNSET_VAR", "f64").unwrap();
        assert!(unset.is_none());
    }
}
