mod error;
pub use error::{AppError, ErrorBody};

mod env;
pub use env::{APP_ENV, AppEnv};

mod model_config;
pub use model_config::{ModelConfig, ModelType};
