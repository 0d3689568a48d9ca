use aws_sdk_cloudwatchlogs::{Client, Error};

use crate::{
    account::Removal,
    error::RuntimeError,
    pagination::{collect, pages, Listing, Page},
};

/// Fetch the names of every log group in the account.
/// A failing page ends the walk and the names gathered so far
/// are returned as a partial listing.
#[tracing::instrument(skip(client))]
pub async fn list_log_groups(client: &Client) -> Listing<String> {
    let listing = collect(pages(|token| async move {
        let output = client
            .describe_log_groups()
            .set_next_token(token)
            .send()
            .await
            .map_err(Error::from)?;
        tracing::debug!(?output, "described log groups");

        Ok::<_, RuntimeError>(Page {
            items: output
                .log_groups
                .unwrap_or_default()
                .into_iter()
                .filter_map(|g| g.log_group_name)
                .collect(),
            next_token: output.next_token,
        })
    }))
    .await;

    if let Listing::Partial { items, cause } = &listing {
        tracing::error!(error = %cause, collected = items.len(), "failed to list log groups");
    }

    listing
}

/// Delete a log group.
/// A log group that is already gone is not an error, another run
/// may have removed it between listing and deleting.
#[tracing::instrument(skip(client))]
pub async fn delete_log_group(client: &Client, log_group: &str) -> Result<Removal, RuntimeError> {
    let res = client
        .delete_log_group()
        .log_group_name(log_group)
        .send()
        .await;

    match res {
        Ok(_) => Ok(Removal::Deleted),
        Err(sdk_err) => match Error::from(sdk_err) {
            Error::ResourceNotFoundException(_) => Ok(Removal::AlreadyGone),
            err => Err(RuntimeError::CloudWatchLogs(err)),
        },
    }
}
