use aws_sdk_apigateway::{Client, Error};

use crate::{
    error::RuntimeError,
    pagination::{collect, pages, Listing, Page},
};

/// Fetch the identifiers of every REST API in the account.
#[tracing::instrument(skip(client))]
pub async fn list_rest_apis(client: &Client) -> Listing<String> {
    let listing = collect(pages(|position| async move {
        let output = client
            .get_rest_apis()
            .set_position(position)
            .send()
            .await
            .map_err(Error::from)?;
        tracing::debug!(?output, "listed rest apis");

        Ok::<_, RuntimeError>(Page {
            items: output
                .items
                .unwrap_or_default()
                .into_iter()
                .filter_map(|api| api.id)
                .collect(),
            next_token: output.position,
        })
    }))
    .await;

    if let Listing::Partial { items, cause } = &listing {
        tracing::error!(error = %cause, collected = items.len(), "failed to list rest apis");
    }

    listing
}
