use cloudwatch_log_group_cleaner::{handle_cleanup, AwsAccount, Config};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();

    tracing::info!(?config, "loaded configuration");

    // Get AWS Configuration
    let sdk_config = aws_config::load_from_env().await;
    let account = AwsAccount::new(&sdk_config);

    run(service_fn(|event: LambdaEvent<Value>| {
        handle_cleanup(&account, &config, event)
    }))
    .await
}
