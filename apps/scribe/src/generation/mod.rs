pub mod audit;
pub mod codeblock;
pub mod generator;
pub mod prompts;

pub use audit::{AuditLog, GenerationKind};
pub use codeblock::extract_code_block;
pub use generator::{AcceptAllImports, Generator, ImportValidator};
