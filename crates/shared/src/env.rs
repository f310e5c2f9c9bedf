use std::env;
use std::sync::LazyLock;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_EMBEDDING_PROVIDER: &str = "openai";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";

pub struct AppEnv {
  pub openai_base_url: String,
  pub openai_api_key: String,
  /// Provider name requests must ask for to be served by the OpenAI client.
  pub embedding_provider: String,
  pub listen_addr: String,
}

impl AppEnv {
  fn new() -> Self {
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// # Panics
  ///
  /// Panics if `OPENAI_API_KEY` is not set.
  fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
    let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());

    Self {
      openai_base_url: or_default("OPENAI_BASE_URL", DEFAULT_OPENAI_BASE_URL),
      openai_api_key: lookup("OPENAI_API_KEY").expect("OPENAI_API_KEY must be set"),
      embedding_provider: or_default("EMBEDDING_PROVIDER", DEFAULT_EMBEDDING_PROVIDER),
      listen_addr: or_default("LISTEN_ADDR", DEFAULT_LISTEN_ADDR),
    }
  }
}

pub static APP_ENV: LazyLock<AppEnv> = LazyLock::new(AppEnv::new);

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
      .iter()
      .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
      .collect();
    move |key| map.get(key).cloned()
  }

  #[test]
  fn optional_vars_fall_back_to_defaults() {
    let env = AppEnv::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-test")]));

    assert_eq!(env.openai_api_key, "sk-test");
    assert_eq!(env.openai_base_url, DEFAULT_OPENAI_BASE_URL);
    assert_eq!(env.embedding_provider, "openai");
    assert_eq!(env.listen_addr, "0.0.0.0:3000");
  }

  #[test]
  fn explicit_vars_win() {
    let env = AppEnv::from_lookup(lookup_from(&[
      ("OPENAI_API_KEY", "sk-test"),
      ("OPENAI_BASE_URL", "http://localhost:11434/v1"),
      ("EMBEDDING_PROVIDER", "ollama"),
      ("LISTEN_ADDR", "127.0.0.1:8080"),
    ]));

    assert_eq!(env.openai_base_url, "http://localhost:11434/v1");
    assert_eq!(env.embedding_provider, "ollama");
    assert_eq!(env.listen_addr, "127.0.0.1:8080");
  }

  #[test]
  #[should_panic(expected = "OPENAI_API_KEY must be set")]
  fn missing_api_key_panics() {
    let _ = AppEnv::from_lookup(lookup_from(&[]));
  }
}
