//! # Process Exam
//!
//! 从 docx 试卷中抽取选择题，去除重复题目，可选地交给 LLM 审核，
//! 最后生成标出正确答案的新文档。
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 唯一接触 docx 格式的地方
//! - `docx_io` - 段落读取、文档写出
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `extractor` - 段落 → 题目（文字颜色 → 正确选项）
//! - `dedup` - 题干相似度去重
//! - `annotator` - 题目分析能力接口 + 逐题调用
//! - `LlmService` - 基于 OpenAI 兼容接口的分析实现
//! - `renderer` - 题目 → docx
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/pipeline` - 一份试卷的完整流水线
//! - `orchestrator/app` - 配置、LLM 服务、统计输出
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{OptionRecord, QuestionRecord, TextBlock};
pub use orchestrator::{App, ExamPipeline, PipelineReport};
pub use services::{Annotator, LlmService};
