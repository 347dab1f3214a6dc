//! Processing API
//!
//! Wraps the tokenizer, segmenter and serializer behind a single
//! [`SsfProcessor`] configured once through [`Config`].

mod config;
mod input;
mod output;
mod processor;


pub use config::{Config, ConfigBuilder};
pub use input::Input;
pub use output::{Output, ProcessingMetadata};
pub use processor::SsfProcessor;
