//! 题目抽取服务 - 业务能力层
//!
//! 按文档顺序遍历段落，把“题干 + 选项”组装成 `QuestionRecord`。
//! 文字颜色只在这里读取一次，转换成选项上的 `is_correct`。

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::{OptionRecord, QuestionRecord, TextBlock};

/// 题干：数字 + `.` / `)` / `、`
static QUESTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.)、]").expect("题干正则无效"));

/// 选项：单个大写字母 + `.` / `)` / `、`
static OPTION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][.)、]").expect("选项正则无效"));

/// 抽取时被丢弃的段落统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractReport {
    /// 出现在第一道题之前的选项
    pub orphan_options: usize,
    /// 既不是题干也不是选项的非空段落
    pub unrecognized_blocks: usize,
}

impl ExtractReport {
    pub fn total_dropped(&self) -> usize {
        self.orphan_options + self.unrecognized_blocks
    }
}

/// 抽取结果
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub questions: Vec<QuestionRecord>,
    pub report: ExtractReport,
}

/// 是否是题干段落
pub fn is_question_line(text: &str) -> bool {
    QUESTION_PATTERN.is_match(text)
}

/// 是否是选项段落
pub fn is_option_line(text: &str) -> bool {
    OPTION_PATTERN.is_match(text)
}

/// 正在累积的题目
struct PendingQuestion {
    stem: String,
    options: Vec<OptionRecord>,
}

impl PendingQuestion {
    fn finish(self) -> QuestionRecord {
        QuestionRecord::new(self.stem, self.options)
    }
}

/// 从段落序列中抽取题目
pub fn extract_questions(blocks: &[TextBlock]) -> Extraction {
    let mut extraction = Extraction::default();
    let mut current: Option<PendingQuestion> = None;

    for block in blocks {
        let text = block.text.trim();
        if text.is_empty() {
            continue;
        }

        if is_question_line(text) {
            if let Some(pending) = current.take() {
                extraction.questions.push(pending.finish());
            }
            current = Some(PendingQuestion {
                stem: text.to_string(),
                options: Vec::new(),
            });
        } else if is_option_line(text) {
            match current.as_mut() {
                Some(pending) => pending
                    .options
                    .push(OptionRecord::new(text, block.has_colored_run())),
                None => {
                    debug!("丢弃题目之前的选项: {}", text);
                    extraction.report.orphan_options += 1;
                }
            }
        } else {
            extraction.report.unrecognized_blocks += 1;
        }
    }

    if let Some(pending) = current {
        extraction.questions.push(pending.finish());
    }

    extraction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_question_with_colored_answer() {
        let blocks = vec![
            TextBlock::plain("1. What is X?"),
            TextBlock::plain("A. foo"),
            TextBlock::colored("B. bar", "FF0000"),
        ];

        let extraction = extract_questions(&blocks);

        assert_eq!(extraction.questions.len(), 1);
        let q = &extraction.questions[0];
        assert_eq!(q.question_text, "1. What is X?");
        assert_eq!(
            q.options,
            vec![OptionRecord::new("A. foo", false), OptionRecord::new("B. bar", true)]
        );
        assert_eq!(q.correct_answers, vec!["B"]);
    }

    #[test]
    fn test_orphan_option_is_dropped_and_counted() {
        let blocks = vec![
            TextBlock::colored("A. 孤立选项", "FF0000"),
            TextBlock::plain("1) 第一题"),
            TextBlock::plain("A) 甲"),
        ];

        let extraction = extract_questions(&blocks);

        assert_eq!(extraction.questions.len(), 1);
        assert_eq!(extraction.questions[0].options.len(), 1);
        assert_eq!(extraction.report.orphan_options, 1);
    }

    #[test]
    fn test_question_without_options() {
        let blocks = vec![TextBlock::plain("1、简答题"), TextBlock::plain("2、下一题")];

        let extraction = extract_questions(&blocks);

        assert_eq!(extraction.questions.len(), 2);
        assert!(extraction.questions[0].options.is_empty());
        assert!(extraction.questions[0].correct_answers.is_empty());
        assert_eq!(extraction.questions[1].question_text, "2、下一题");
    }

    #[test]
    fn test_blank_and_unrecognized_blocks() {
        let blocks = vec![
            TextBlock::plain("   "),
            TextBlock::plain("一、单项选择题"),
            TextBlock::plain("  12. 带空格的题干  "),
            TextBlock::plain("a. 小写不是选项"),
            TextBlock::colored("C、丙", "00B050"),
        ];

        let extraction = extract_questions(&blocks);

        assert_eq!(extraction.questions.len(), 1);
        assert_eq!(extraction.questions[0].question_text, "12. 带空格的题干");
        assert_eq!(extraction.questions[0].correct_answers, vec!["C"]);
        assert_eq!(extraction.report.unrecognized_blocks, 2);
        assert_eq!(extraction.report.total_dropped(), 2);
    }

    #[test]
    fn test_line_patterns() {
        assert!(is_question_line("10.题"));
        assert!(is_question_line("3)题"));
        assert!(!is_question_line("题 1."));
        assert!(is_option_line("D、选项"));
        assert!(!is_option_line("AB. 两个字母"));
        assert!(!is_option_line("正确答案：A"));
    }
}
