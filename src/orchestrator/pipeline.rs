//! 试卷处理流水线 - 编排层
//!
//! ## 职责
//!
//! 按顺序调度一份试卷的完整处理：
//!
//! 1. **读取**：docx → 段落
//! 2. **抽取**：段落 → 题目，统计被丢弃的段落
//! 3. **去重**：按题干相似度去掉重复题目
//! 4. **分析**：如有分析能力注入，逐题调用（失败不影响后续）
//! 5. **生成**：排版并保存输出文档
//!
//! 读取、生成、保存的错误直接向上返回；分析错误在分析环节内部消化。

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::infrastructure::docx_io;
use crate::services::{
    annotate_all, extract_questions, remove_duplicates, render_questions, AnnotationStats,
    Annotator, ExtractReport, DEFAULT_SIMILARITY_THRESHOLD,
};
use crate::utils::logging::{log_dropped_blocks, log_extracted_questions};

/// 一次运行的统计
#[derive(Debug, Clone, Default)]
pub struct PipelineReport {
    /// 抽取到的题目数
    pub extracted: usize,
    /// 去重后的题目数
    pub unique: usize,
    pub annotation: AnnotationStats,
    pub dropped: ExtractReport,
}

impl PipelineReport {
    pub fn duplicates_removed(&self) -> usize {
        self.extracted - self.unique
    }
}

/// 试卷处理流水线
#[derive(Debug, Clone)]
pub struct ExamPipeline {
    similarity_threshold: f64,
    verbose_logging: bool,
}

impl Default for ExamPipeline {
    fn default() -> Self {
        Self::new(DEFAULT_SIMILARITY_THRESHOLD)
    }
}

impl ExamPipeline {
    pub fn new(similarity_threshold: f64) -> Self {
        Self {
            similarity_threshold,
            verbose_logging: false,
        }
    }

    /// 输出每道抽取到的题目
    pub fn verbose(mut self, verbose_logging: bool) -> Self {
        self.verbose_logging = verbose_logging;
        self
    }

    /// 处理一份试卷
    ///
    /// # 参数
    /// - `input`: 输入 docx 路径
    /// - `output`: 输出 docx 路径（存在则覆盖）
    /// - `annotator`: 题目分析能力，`None` 时跳过分析
    ///
    /// # 返回
    /// 返回本次运行的统计
    pub async fn run<A: Annotator>(
        &self,
        input: &Path,
        output: &Path,
        annotator: Option<&A>,
    ) -> Result<PipelineReport> {
        // ========== 1. 提取题目 ==========
        let blocks = docx_io::read_blocks(input)
            .with_context(|| format!("无法读取试卷: {}", input.display()))?;

        let extraction = extract_questions(&blocks);
        info!("✓ 共抽取 {} 道题目", extraction.questions.len());
        log_dropped_blocks(&extraction.report);

        if self.verbose_logging {
            log_extracted_questions(&extraction.questions);
        }

        let mut report = PipelineReport {
            extracted: extraction.questions.len(),
            dropped: extraction.report,
            ..Default::default()
        };

        // ========== 2. 去除重复题目 ==========
        let mut questions = remove_duplicates(extraction.questions, self.similarity_threshold);
        report.unique = questions.len();
        info!("去除重复后的题目数量: {}", questions.len());

        // ========== 3. LLM 分析 ==========
        match annotator {
            Some(annotator) => {
                report.annotation = annotate_all(annotator, &mut questions).await;
            }
            None => info!("⏭️ 未启用题目分析，跳过"),
        }

        // ========== 4. 生成输出文档 ==========
        let docx = render_questions(&questions);
        docx_io::write_docx(docx, output)
            .with_context(|| format!("无法保存结果: {}", output.display()))?;
        info!("处理完成！结果已保存到 {}", output.display());

        Ok(report)
    }
}
