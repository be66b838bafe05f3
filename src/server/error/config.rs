use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable holds a value that is not an absolute http(s) URL.
    #[error("Environment variable {var} is not a valid http(s) URL: {value}")]
    InvalidUrl {
        /// Name of the environment variable
        var: String,
        /// The rejected value
        value: String,
    },

    /// Environment variable holds a value that is not a socket address.
    #[error("Environment variable {var} is not a valid socket address: {value}")]
    InvalidSocketAddr {
        /// Name of the environment variable
        var: String,
        /// The rejected value
        value: String,
    },
}
