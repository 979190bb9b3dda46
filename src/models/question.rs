use serde::{Deserialize, Serialize};

/// 选择题选项
///
/// `is_correct` 只在抽取阶段根据文字颜色判断一次，后续环节只看这个字段
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionRecord {
    pub text: String,
    pub is_correct: bool,
}

impl OptionRecord {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            is_correct,
        }
    }

    /// 选项标号，即选项文本的首字符（A、B、C…）
    pub fn label(&self) -> Option<String> {
        self.text.chars().next().map(String::from)
    }
}

/// 一道选择题
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub question_text: String,
    pub options: Vec<OptionRecord>,
    /// 正确选项的标号，按选项顺序排列
    pub correct_answers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_analysis: Option<String>,
}

impl QuestionRecord {
    /// 由题干和选项构建题目，正确答案从选项推导
    pub fn new(question_text: impl Into<String>, options: Vec<OptionRecord>) -> Self {
        let correct_answers = options
            .iter()
            .filter(|opt| opt.is_correct)
            .filter_map(OptionRecord::label)
            .collect();

        Self {
            question_text: question_text.into(),
            options,
            correct_answers,
            llm_analysis: None,
        }
    }

    /// 选项文本，按原顺序
    pub fn option_texts(&self) -> impl Iterator<Item = &str> {
        self.options.iter().map(|opt| opt.text.as_str())
    }
}

impl std::fmt::Display for QuestionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [选项: {}, 答案: {}]",
            crate::utils::logging::truncate_text(&self.question_text, 40),
            self.options.len(),
            self.correct_answers.join("、")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_answers_follow_options() {
        let q = QuestionRecord::new(
            "3. 下列说法正确的是",
            vec![
                OptionRecord::new("A. 甲", true),
                OptionRecord::new("B. 乙", false),
                OptionRecord::new("C. 丙", true),
            ],
        );

        assert_eq!(q.correct_answers, vec!["A", "C"]);
        assert!(q.llm_analysis.is_none());
    }

    #[test]
    fn test_no_options_no_answers() {
        let q = QuestionRecord::new("1. 空题", Vec::new());
        assert!(q.options.is_empty());
        assert!(q.correct_answers.is_empty());
    }

    #[test]
    fn test_analysis_omitted_from_json_when_absent() {
        let q = QuestionRecord::new("1. 题", vec![OptionRecord::new("A. x", true)]);
        let json = serde_json::to_value(&q).unwrap();
        assert!(json.get("llm_analysis").is_none());
        assert_eq!(json["correct_answers"][0], "A");
    }
}
