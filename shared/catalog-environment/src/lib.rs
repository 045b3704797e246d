//! Environment configuration for the catalog binaries
//!
//! Both the HTTP server and the Lambda handlers read their deployment stage and
//! item table settings from the process environment at startup. Missing
//! settings are reported once, before any request is served, whatever the stage.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use aws_config::{retry::RetryConfig, timeout::TimeoutConfig, BehaviorVersion, Region};
use aws_sdk_dynamodb::Client as DynamoDbClient;
use item_storage::DynamoDbItemStore;
use strum::Display;
use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

/// Result type alias for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Fatal configuration errors raised at startup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `APP_ENV` holds an unknown stage
    #[error("Invalid environment: {0}")]
    InvalidEnvironment(String),

    /// A required variable is absent or empty
    #[error("{0} environment variable is not set")]
    MissingVariable(&'static str),
}

/// Application environment configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment (uses `LocalStack`)
    Development,
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvironment` if `APP_ENV` contains an invalid value
    pub fn from_env() -> ConfigResult<Self> {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            _ => Err(ConfigError::InvalidEnvironment(env)),
        }
    }

    /// Whether to show API docs
    #[must_use]
    pub const fn show_api_docs(&self) -> bool {
        matches!(self, Self::Development | Self::Staging)
    }

    /// Default log filter when `RUST_LOG` is not set
    #[must_use]
    pub const fn default_log_filter(&self) -> &'static str {
        match self {
            Self::Production | Self::Staging => "info",
            Self::Development => "debug",
        }
    }

    /// Installs the global tracing subscriber
    ///
    /// Uses JSON output for staging/production and the human readable format
    /// for development.
    pub fn init_tracing(&self) {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_log_filter()));

        match self {
            Self::Production | Self::Staging => {
                fmt().json().with_env_filter(filter).init();
            }
            Self::Development => {
                fmt().with_env_filter(filter).init();
            }
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

/// Item table connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// `DynamoDB` table holding the catalog items
    pub table_name: String,
    /// AWS region of the table
    pub region: String,
    /// Endpoint override, e.g. `LocalStack`
    pub endpoint_url: Option<String>,
}

impl StoreConfig {
    /// Reads the item table settings from the process environment
    ///
    /// `ITEM_TABLE` and a region (`REGION`, falling back to `AWS_REGION`) are
    /// required in every stage. The endpoint is only overridden when
    /// `DYNAMODB_ENDPOINT_URL` is set, e.g. to point at `LocalStack`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingVariable` if the table or the region is not set
    pub fn from_env() -> ConfigResult<Self> {
        let table_name =
            non_empty_var("ITEM_TABLE").ok_or(ConfigError::MissingVariable("ITEM_TABLE"))?;
        let region = non_empty_var("REGION")
            .or_else(|| non_empty_var("AWS_REGION"))
            .ok_or(ConfigError::MissingVariable("REGION"))?;

        Ok(Self {
            table_name,
            region,
            endpoint_url: non_empty_var("DYNAMODB_ENDPOINT_URL"),
        })
    }

    /// AWS configuration with retry and timeout settings
    ///
    /// Store calls are attempted exactly once; timeouts are left to the SDK's
    /// operation timeout and the invoking runtime.
    pub async fn aws_config(&self) -> aws_config::SdkConfig {
        let retry_config = RetryConfig::standard().with_max_attempts(1);

        let timeout_config = TimeoutConfig::builder()
            .operation_timeout(Duration::from_secs(30))
            .build();

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()))
            .retry_config(retry_config)
            .timeout_config(timeout_config);

        if let Some(endpoint_url) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        loader.load().await
    }

    /// Builds the `DynamoDB` item store described by this configuration
    pub async fn connect(&self) -> DynamoDbItemStore {
        let dynamodb_client = Arc::new(DynamoDbClient::new(&self.aws_config().await));

        tracing::info!(
            table = %self.table_name,
            region = %self.region,
            endpoint = ?self.endpoint_url,
            "Initialized item store"
        );

        DynamoDbItemStore::new(dynamodb_client, self.table_name.clone())
    }
}
