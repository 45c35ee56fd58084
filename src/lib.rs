pub mod ast;
pub mod document;
pub mod error;
pub mod export;
pub mod parser;

pub use ast::Value;
pub use document::JuteDocument;
pub use error::JuteError;
pub use parser::decode;
