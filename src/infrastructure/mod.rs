//! 基础设施层：只持有文件格式相关的能力

pub mod docx_io;

pub use docx_io::{read_blocks, write_docx};
