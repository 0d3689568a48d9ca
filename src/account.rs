use aws_sdk_apigateway::Client as ApiGatewayClient;
use aws_sdk_cloudwatchlogs::Client as CwClient;
use aws_sdk_lambda::Client as LambdaClient;

use crate::{apigateway, cloudwatch_logs, error::RuntimeError, lambda, pagination::Listing};

/// Outcome of a delete request that did not fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Removal {
    /// The log group was deleted by this request
    Deleted,
    /// The log group did not exist anymore
    AlreadyGone,
}

/// Remote operations the cleanup needs from an account.
///
/// Listings never fail outright: a failing page turns into
/// `Listing::Partial`.
#[allow(async_fn_in_trait)]
pub trait Account {
    /// Names of every log group.
    async fn list_log_groups(&self) -> Listing<String>;
    /// Names of every Lambda function.
    async fn list_functions(&self) -> Listing<String>;
    /// Identifiers of every REST API.
    async fn list_rest_apis(&self) -> Listing<String>;
    /// Delete one log group by name.
    async fn delete_log_group(&self, name: &str) -> Result<Removal, RuntimeError>;
}

/// Account backed by the AWS SDK clients.
pub struct AwsAccount {
    logs: CwClient,
    lambda: LambdaClient,
    apigateway: ApiGatewayClient,
}

impl AwsAccount {
    /// Initialize the clients from a shared SDK configuration.
    #[tracing::instrument(skip(config))]
    pub fn new(config: &aws_types::SdkConfig) -> AwsAccount {
        tracing::info!("Initializing AWS clients");
        AwsAccount {
            logs: CwClient::new(config),
            lambda: LambdaClient::new(config),
            apigateway: ApiGatewayClient::new(config),
        }
    }
}

impl Account for AwsAccount {
    async fn list_log_groups(&self) -> Listing<String> {
        cloudwatch_logs::list_log_groups(&self.logs).await
    }

    async fn list_functions(&self) -> Listing<String> {
        lambda::list_functions(&self.lambda).await
    }

    async fn list_rest_apis(&self) -> Listing<String> {
        apigateway::list_rest_apis(&self.apigateway).await
    }

    async fn delete_log_group(&self, name: &str) -> Result<Removal, RuntimeError> {
        cloudwatch_logs::delete_log_group(&self.logs, name).await
    }
}
