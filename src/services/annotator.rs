//! 题目分析能力 - 业务能力层
//!
//! 定义"分析一道题"的能力接口，以及逐题调用的批处理逻辑。
//! 具体由谁来分析（LLM、mock、带重试的客户端）由调用方注入。

use std::future::Future;

use anyhow::Result;
use tracing::{error, info};

use crate::models::QuestionRecord;

/// 审核题目时使用的系统消息
pub const REVIEW_SYSTEM_MESSAGE: &str = "你是一个专业的考试题目审核助手。";

/// 题目分析能力
///
/// 只处理单个题目，返回分析文本
pub trait Annotator {
    fn annotate(&self, question: &QuestionRecord) -> impl Future<Output = Result<String>> + Send;
}

/// 分析统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotationStats {
    pub annotated: usize,
    pub failed: usize,
}

/// 构建审核提示词
pub fn build_prompt(question: &QuestionRecord) -> String {
    let options = question.option_texts().collect::<Vec<_>>().join("\n");

    format!(
        r#"请分析以下试题，并提供规范化的格式：

题目：{}
选项：
{}
正确答案：{}

请返回：
1. 规范化的题目描述
2. 确认正确答案是否合理
3. 如果发现题目或选项有问题，请指出"#,
        question.question_text,
        options,
        question.correct_answers.join(", ")
    )
}

/// 逐题调用分析能力
///
/// 调用严格按顺序进行；单题失败只记录日志，题目原样保留，不重试也不中断
pub async fn annotate_all<A: Annotator>(
    annotator: &A,
    questions: &mut [QuestionRecord],
) -> AnnotationStats {
    let mut stats = AnnotationStats::default();
    let total = questions.len();

    for (index, question) in questions.iter_mut().enumerate() {
        info!("🤖 正在分析第 {}/{} 题...", index + 1, total);

        match annotator.annotate(question).await {
            Ok(analysis) => {
                question.llm_analysis = Some(analysis);
                stats.annotated += 1;
            }
            Err(e) => {
                error!("处理题目时出错 (第 {} 题): {}", index + 1, e);
                stats.failed += 1;
            }
        }
    }

    stats
}
