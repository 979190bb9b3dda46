//! 文档生成服务 - 业务能力层
//!
//! 把题目列表排版成 docx：题干、选项（正确选项标红）、答案行、AI 分析、空行。
//! 题干本身带有编号，原样写出，重新读取时题干保持不变。

use docx_rs::{BreakType, Docx, Paragraph, Run};

use crate::models::QuestionRecord;

/// 正确选项使用的颜色
pub const CORRECT_OPTION_COLOR: &str = "FF0000";

/// 生成包含所有题目的文档
pub fn render_questions(questions: &[QuestionRecord]) -> Docx {
    questions.iter().fold(Docx::new(), render_question)
}

fn render_question(mut docx: Docx, question: &QuestionRecord) -> Docx {
    docx = docx.add_paragraph(text_paragraph(&question.question_text));

    for option in &question.options {
        let mut run = Run::new().add_text(&option.text);
        if option.is_correct {
            run = run.color(CORRECT_OPTION_COLOR);
        }
        docx = docx.add_paragraph(Paragraph::new().add_run(run));
    }

    let answers = question.correct_answers.join("、");
    docx = docx.add_paragraph(text_paragraph(format!("正确答案：{}", answers)));

    if let Some(analysis) = question.llm_analysis.as_deref() {
        if !analysis.trim().is_empty() {
            docx = docx.add_paragraph(analysis_paragraph(analysis));
        }
    }

    docx.add_paragraph(Paragraph::new())
}

fn text_paragraph(text: impl Into<String>) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

/// 标签和分析内容放在同一段，换行用软换行，
/// 避免分析里的 "1. ..." 被重新读成题干
fn analysis_paragraph(analysis: &str) -> Paragraph {
    let label = Run::new().add_text("AI分析：").bold();
    let body = analysis.lines().fold(Run::new(), |run, line| {
        run.add_break(BreakType::TextWrapping).add_text(line)
    });

    Paragraph::new().add_run(label).add_run(body)
}
