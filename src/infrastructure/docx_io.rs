//! docx 读写 - 基础设施层
//!
//! 唯一接触 .docx 格式的模块，只暴露能力：
//! - 把文档段落读成 `TextBlock`
//! - 把构建好的 `Docx` 写到磁盘
//!
//! 不认识题目、选项，也不关心流程

use std::fs;
use std::io::Cursor;
use std::path::Path;

use docx_rs::{read_docx, DocumentChild, Docx, Paragraph, ParagraphChild, Run, RunChild};
use tracing::debug;

use crate::error::{AppError, AppResult, DocumentError};
use crate::models::TextBlock;

/// 读取 docx 文件中的全部段落
///
/// 表格、分节符等非段落内容会被跳过
pub fn read_blocks(path: &Path) -> AppResult<Vec<TextBlock>> {
    let path_str = path.display().to_string();

    if !path.exists() {
        return Err(DocumentError::NotFound { path: path_str }.into());
    }

    let bytes = fs::read(path).map_err(|e| AppError::file_read_failed(&path_str, e))?;
    let blocks = read_blocks_from_bytes(&bytes).map_err(|message| DocumentError::ParseFailed {
        path: path_str.clone(),
        message,
    })?;

    debug!("从 {} 读取到 {} 个段落", path_str, blocks.len());
    Ok(blocks)
}

/// 从内存中的 docx 字节解析段落
pub fn read_blocks_from_bytes(bytes: &[u8]) -> Result<Vec<TextBlock>, String> {
    let docx = read_docx(bytes).map_err(|e| e.to_string())?;

    let blocks = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_to_block(para)),
            _ => None,
        })
        .collect();

    Ok(blocks)
}

/// 把 docx 写入文件，已存在的文件会被覆盖
pub fn write_docx(docx: Docx, path: &Path) -> AppResult<()> {
    let bytes = docx_to_bytes(docx).map_err(|message| DocumentError::WriteFailed {
        path: path.display().to_string(),
        message,
    })?;

    fs::write(path, bytes).map_err(|e| DocumentError::WriteFailed {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    Ok(())
}

/// 把 docx 打包成字节
pub fn docx_to_bytes(docx: Docx) -> Result<Vec<u8>, String> {
    let mut cursor = Cursor::new(Vec::new());
    docx.build().pack(&mut cursor).map_err(|e| e.to_string())?;
    Ok(cursor.into_inner())
}

fn paragraph_to_block(para: &Paragraph) -> TextBlock {
    let mut block = TextBlock::default();

    for child in &para.children {
        if let ParagraphChild::Run(run) = child {
            append_run(&mut block, run);
        }
    }

    block
}

/// 追加一个 run 的文本和颜色
fn append_run(block: &mut TextBlock, run: &Run) {
    for child in &run.children {
        match child {
            RunChild::Text(text) => block.text.push_str(&text.text),
            RunChild::Tab(_) => block.text.push('\t'),
            RunChild::Break(_) => block.text.push('\n'),
            _ => {}
        }
    }

    let color = run
        .run_property
        .color
        .as_ref()
        .and_then(|color| serde_json::to_value(color).ok())
        .and_then(|value| match value {
            serde_json::Value::String(val) => Some(val),
            serde_json::Value::Object(map) => map.get("val").and_then(|v| v.as_str()).map(str::to_string),
            _ => None,
        });

    block.run_colors.push(color);
}
