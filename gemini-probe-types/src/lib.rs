//! Wire types shared by the Gemini model lister and prompt tester.

pub mod content;
pub mod models;
pub mod response;

pub use content::{Content, GenerationRequest, Part};
pub use models::{ListModelsConfig, ListModelsResponse, ModelDescriptor};
pub use response::GenerationResponse;
