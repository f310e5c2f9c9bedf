mod provider;
pub use provider::EmbeddingProvider;

mod openai;
pub use openai::OpenAiEmbedder;
