pub mod annotator;
pub mod dedup;
pub mod extractor;
pub mod llm_service;
pub mod renderer;

pub use annotator::{annotate_all, AnnotationStats, Annotator};
pub use dedup::{remove_duplicates, similarity_ratio, DEFAULT_SIMILARITY_THRESHOLD};
pub use extractor::{extract_questions, ExtractReport, Extraction};
pub use llm_service::LlmService;
pub use renderer::render_questions;
