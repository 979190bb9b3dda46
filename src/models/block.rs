//! 文档段落的中间表示
//!
//! 基础设施层把 docx 段落转换成 `TextBlock`，抽取器只认识这个结构，
//! 不直接接触 docx 格式。

use serde::{Deserialize, Serialize};

/// 源文档中的一个段落
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    /// 段落纯文本（各 run 拼接）
    pub text: String,
    /// 每个 run 的颜色属性，没有颜色的 run 为 `None`
    #[serde(default)]
    pub run_colors: Vec<Option<String>>,
}

impl TextBlock {
    /// 无样式的纯文本段落
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            run_colors: vec![None],
        }
    }

    /// 整段使用同一种颜色的段落
    pub fn colored(text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            run_colors: vec![Some(color.into())],
        }
    }

    /// 是否有任意一个 run 带有非默认颜色
    pub fn has_colored_run(&self) -> bool {
        self.run_colors
            .iter()
            .flatten()
            .any(|color| is_non_default_color(color))
    }
}

/// `auto` 和纯黑都视为默认颜色
fn is_non_default_color(color: &str) -> bool {
    let color = color.trim();
    !color.is_empty() && !color.eq_ignore_ascii_case("auto") && color != "000000"
}
