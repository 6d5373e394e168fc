mod cleaner;
mod error;
mod llm;
pub mod parser;
mod processor;
pub mod server;
pub mod tracing;
pub mod types;
pub mod yt;

pub use cleaner::clean_response;
pub use error::Error;
pub use llm::{blackbox::BlackboxClient, ArticleGenerator};
pub use processor::{builder::VideoPipelineBuilder, VideoPipeline};
pub use yt::{DurationLookup, EmbedLookup, TranscriptSource};
