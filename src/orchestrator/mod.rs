//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `app` - 应用入口
//! - 根据配置创建 LLM 服务（缺少密钥时直接失败）
//! - 把输入输出路径交给流水线
//! - 输出最终统计
//!
//! ### `pipeline` - 单份试卷流水线
//! - 读取 → 抽取 → 去重 → 分析 → 生成 → 保存
//!
//! ## 层次关系
//!
//! ```text
//! app (配置 / 资源)
//!     ↓
//! pipeline (一份试卷)
//!     ↓
//! services (能力层：extract / dedup / annotate / render)
//!     ↓
//! infrastructure (基础设施：docx 读写)
//! ```

pub mod app;
pub mod pipeline;

pub use app::App;
pub use pipeline::{ExamPipeline, PipelineReport};
