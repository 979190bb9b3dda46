//! 题目去重服务 - 业务能力层
//!
//! 用题干的相似度过滤近似重复的题目，保留首次出现的那一道

use tracing::debug;

use crate::models::QuestionRecord;

/// 默认相似度阈值
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.85;

/// 两个字符串的相似度，范围 [0, 1]
///
/// 按字符计算最长公共子序列长度 `m`，返回 `2m / (len(a) + len(b))`。
/// 两个空串视为完全相同。结果与参数顺序无关。
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    2.0 * lcs_len(&a, &b) as f64 / total as f64
}

/// 最长公共子序列长度，只保留两行 DP
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    let mut prev = vec![0usize; short.len() + 1];
    let mut curr = vec![0usize; short.len() + 1];

    for &x in long {
        for (j, &y) in short.iter().enumerate() {
            curr[j + 1] = if x == y {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}

/// 去除重复题目
///
/// 依次检查每道题，与已保留题目的题干相似度严格大于 `threshold` 时丢弃。
/// 输出保持输入的相对顺序。
pub fn remove_duplicates(questions: Vec<QuestionRecord>, threshold: f64) -> Vec<QuestionRecord> {
    let mut unique: Vec<QuestionRecord> = Vec::with_capacity(questions.len());

    for question in questions {
        let duplicate_of = unique.iter().position(|existing| {
            similarity_ratio(&question.question_text, &existing.question_text) > threshold
        });

        match duplicate_of {
            Some(index) => debug!(
                "题目重复，已移除: {} (与第 {} 题相似)",
                question,
                index + 1
            ),
            None => unique.push(question),
        }
    }

    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OptionRecord;

    fn question(stem: &str) -> QuestionRecord {
        QuestionRecord::new(stem, vec![OptionRecord::new("A. x", true)])
    }

    #[test]
    fn test_similarity_ratio_basics() {
        assert_eq!(similarity_ratio("", ""), 1.0);
        assert_eq!(similarity_ratio("abc", ""), 0.0);
        assert_eq!(similarity_ratio("abc", "abc"), 1.0);
        assert_eq!(similarity_ratio("abcd", "bcde"), 0.75);
        assert_eq!(similarity_ratio("中国首都", "中国的首都"), 8.0 / 9.0);
    }

    #[test]
    fn test_similarity_ratio_is_symmetric() {
        let pairs = [("abcxyz", "xyzabc"), ("1. 下列说法", "2. 下列说法正确的是"), ("ab", "ba")];
        for (a, b) in pairs {
            assert_eq!(similarity_ratio(a, b), similarity_ratio(b, a));
        }
    }

    #[test]
    fn test_remove_duplicates_keeps_first_seen() {
        let input = vec![
            question("1. 中国的首都是哪座城市？"),
            question("2. 水的化学式是什么？"),
            question("3. 中国的首都是哪座城市?"),
            question("4. 光在真空中的速度是多少？"),
        ];

        let output = remove_duplicates(input.clone(), DEFAULT_SIMILARITY_THRESHOLD);

        let stems: Vec<&str> = output.iter().map(|q| q.question_text.as_str()).collect();
        assert_eq!(
            stems,
            vec!["1. 中国的首都是哪座城市？", "2. 水的化学式是什么？", "4. 光在真空中的速度是多少？"]
        );

        // 输出是输入的子序列，且保留的题目两两相似度不超过阈值
        let mut cursor = input.iter();
        for kept in &output {
            assert!(cursor.any(|q| q == kept));
        }
        for (i, a) in output.iter().enumerate() {
            for b in &output[i + 1..] {
                assert!(
                    similarity_ratio(&a.question_text, &b.question_text)
                        <= DEFAULT_SIMILARITY_THRESHOLD
                );
            }
        }
    }

    #[test]
    fn test_ratio_equal_to_threshold_is_not_duplicate() {
        // 20 个字符中 17 个相同: 2 * 17 / 40 = 0.85
        let a = "abcdefghijklmnopqrst";
        let b = "abcdefghijklmnopqXYZ";
        assert_eq!(similarity_ratio(a, b), 0.85);

        let output = remove_duplicates(vec![question(a), question(b)], 0.85);
        assert_eq!(output.len(), 2);

        let output = remove_duplicates(vec![question(a), question(b)], 0.84);
        assert_eq!(output.len(), 1);
    }

    #[test]
    fn test_remove_duplicates_empty() {
        assert!(remove_duplicates(Vec::new(), DEFAULT_SIMILARITY_THRESHOLD).is_empty());
    }
}
