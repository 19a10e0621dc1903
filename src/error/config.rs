use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable the server reads was absent.
    ///
    /// Startup refuses to continue without it. `.env.example` lists every
    /// variable the server reads.
    #[error("Environment variable {0} is not set")]
    MissingEnvVar(String),
}
