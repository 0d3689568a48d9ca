use thiserror::Error as ThisError;

/// Different errors that the application can raise
#[derive(Debug, ThisError)]
pub enum RuntimeError {
    /// Error returned by the CloudWatch Logs API
    #[error("unexpected cloudwatch logs error")]
    CloudWatchLogs(#[from] aws_sdk_cloudwatchlogs::Error),
    /// Error returned by the Lambda API
    #[error("unexpected lambda error")]
    Lambda(#[from] aws_sdk_lambda::Error),
    /// Error returned by the API Gateway API
    #[error("unexpected api gateway error")]
    ApiGateway(#[from] aws_sdk_apigateway::Error),
    /// Error returned if a configuration value cannot be used
    #[error("invalid value for {name}: {value:?}")]
    InvalidConfig {
        /// Name of the environment variable
        name: String,
        /// Raw value that was rejected
        value: String,
    },
}
