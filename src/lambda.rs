use aws_sdk_lambda::{Client, Error};

use crate::{
    error::RuntimeError,
    pagination::{collect, pages, Listing, Page},
};

/// Fetch the names of every Lambda function in the account.
#[tracing::instrument(skip(client))]
pub async fn list_functions(client: &Client) -> Listing<String> {
    let listing = collect(pages(|marker| async move {
        let output = client
            .list_functions()
            .set_marker(marker)
            .send()
            .await
            .map_err(Error::from)?;
        tracing::debug!(?output, "listed functions");

        Ok::<_, RuntimeError>(Page {
            items: output
                .functions
                .unwrap_or_default()
                .into_iter()
                .filter_map(|f| f.function_name)
                .collect(),
            next_token: output.next_marker,
        })
    }))
    .await;

    if let Listing::Partial { items, cause } = &listing {
        tracing::error!(error = %cause, collected = items.len(), "failed to list functions");
    }

    listing
}
