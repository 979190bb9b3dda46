/// 日志工具模块
///
/// 提供日志格式化和输出的辅助函数
use tracing::{info, warn};

use crate::models::QuestionRecord;
use crate::orchestrator::PipelineReport;
use crate::services::extractor::ExtractReport;

/// 记录程序启动信息
///
/// # 参数
/// - `input`: 输入文档路径
/// - `output`: 输出文档路径
/// - `llm_enabled`: 是否启用 LLM 分析
pub fn log_startup(input: &str, output: &str, llm_enabled: bool) {
    info!("{}", "=".repeat(60));
    info!("🚀 试卷处理启动 - {}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"));
    info!("📄 输入文档: {}", input);
    info!("💾 输出文档: {}", output);
    info!("🤖 LLM 分析: {}", if llm_enabled { "开启" } else { "关闭" });
    info!("{}", "=".repeat(60));
}

/// 记录抽取阶段被丢弃的段落
pub fn log_dropped_blocks(report: &ExtractReport) {
    if report.total_dropped() == 0 {
        return;
    }
    warn!(
        "⚠️ 共丢弃 {} 个段落: {} 个选项出现在任何题目之前, {} 个段落既不是题目也不是选项",
        report.total_dropped(),
        report.orphan_options,
        report.unrecognized_blocks
    );
}

/// 逐题输出抽取结果
pub fn log_extracted_questions(questions: &[QuestionRecord]) {
    for (index, question) in questions.iter().enumerate() {
        info!("题目 {}: {}", index + 1, question);
    }
}

/// 打印最终统计信息
pub fn print_final_stats(report: &PipelineReport, output_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("📝 抽取题目: {}", report.extracted);
    info!("✂️ 去重后: {} (移除 {})", report.unique, report.duplicates_removed());
    info!(
        "🤖 LLM 分析: 成功 {} / 失败 {}",
        report.annotation.annotated, report.annotation.failed
    );
    info!("{}", "=".repeat(60));
    info!("\n结果已保存至: {}", output_path);
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text_counts_chars() {
        assert_eq!(truncate_text("短题干", 10), "短题干");
        assert_eq!(truncate_text("一二三四五", 3), "一二三...");
    }
}
