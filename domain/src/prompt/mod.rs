//! Prompt construction for the crosscheck flow.

pub mod template;

pub use template::PromptTemplate;
