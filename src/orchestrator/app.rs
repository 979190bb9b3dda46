//! 应用入口 - 编排层
//!
//! 持有配置和 LLM 服务，把路径和能力交给流水线

use std::path::Path;

use anyhow::Result;

use crate::config::Config;
use crate::orchestrator::pipeline::{ExamPipeline, PipelineReport};
use crate::services::LlmService;
use crate::utils::logging::{log_startup, print_final_stats};

/// 应用主结构
pub struct App {
    config: Config,
    llm_service: Option<LlmService>,
}

impl App {
    /// 初始化应用
    ///
    /// 启用 LLM 分析但缺少 API 密钥时在这里失败，此时尚未读取任何文档
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config.input_path, &config.output_path, config.enable_llm);

        let llm_service = if config.enable_llm {
            Some(LlmService::new(&config)?)
        } else {
            None
        };

        Ok(Self {
            config,
            llm_service,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<PipelineReport> {
        let pipeline = ExamPipeline::new(self.config.similarity_threshold)
            .verbose(self.config.verbose_logging);

        let report = pipeline
            .run(
                Path::new(&self.config.input_path),
                Path::new(&self.config.output_path),
                self.llm_service.as_ref(),
            )
            .await?;

        print_final_stats(&report, &self.config.output_path);

        Ok(report)
    }
}
