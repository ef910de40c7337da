//! Generative-image vendor clients.
//!
//! The primary vendor is a hosted InstructPix2Pix inference endpoint that
//! edits the source photo in place. When it fails, [`Generator`] falls back
//! once to OpenAI: a vision model describes the photo, then DALL-E renders
//! the described scene with the requested modification.

pub mod generator;
pub mod instruct;
pub mod openai;

pub use generator::{GenerateError, Generator};
pub use instruct::{InstructClient, InstructError};
pub use openai::{OpenAiClient, OpenAiError};
