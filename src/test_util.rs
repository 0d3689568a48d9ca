use aws_types::{region::Region, Credentials, SdkConfig};
use std::{cell::RefCell, collections::HashSet};

use crate::{
    account::{Account, Removal},
    error::RuntimeError,
    pagination::Listing,
};

/// Configuration for mocking AWS SDK clients
pub async fn get_mock_config() -> SdkConfig {
    aws_config::from_env()
        .region(Region::new("us-west-1"))
        .credentials_provider(Credentials::new(
            "accesskey",
            "privatekey",
            None,
            None,
            "dummy",
        ))
        .load()
        .await
}

/// Base request builder for the AWS SDK calls
pub fn get_request_builder(service: &str) -> http::request::Builder {
    http::Request::builder().uri(format!("https://{service}.us-west-1.amazonaws.com/"))
}

pub fn names(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn unavailable() -> RuntimeError {
    RuntimeError::CloudWatchLogs(aws_sdk_cloudwatchlogs::Error::ServiceUnavailableException(
        aws_sdk_cloudwatchlogs::error::ServiceUnavailableException::builder()
            .message("service unavailable")
            .build(),
    ))
}

fn listing(items: &[String], partial: bool) -> Listing<String> {
    if partial {
        Listing::Partial {
            items: items.to_vec(),
            cause: unavailable(),
        }
    } else {
        Listing::Complete(items.to_vec())
    }
}

/// In-memory account. Deleting a log group removes it from the listing,
/// deleting an unknown one answers `AlreadyGone`.
#[derive(Default)]
pub struct FakeAccount {
    log_groups: RefCell<Vec<String>>,
    functions: Vec<String>,
    rest_apis: Vec<String>,
    partial_log_groups: bool,
    partial_functions: bool,
    partial_rest_apis: bool,
    failing_deletes: HashSet<String>,
    delete_requests: RefCell<Vec<String>>,
}

impl FakeAccount {
    pub fn with_log_groups(mut self, log_groups: &[&str]) -> Self {
        self.log_groups = RefCell::new(names(log_groups));
        self
    }

    pub fn with_functions(mut self, functions: &[&str]) -> Self {
        self.functions = names(functions);
        self
    }

    pub fn with_rest_apis(mut self, rest_apis: &[&str]) -> Self {
        self.rest_apis = names(rest_apis);
        self
    }

    pub fn partial_log_groups(mut self) -> Self {
        self.partial_log_groups = true;
        self
    }

    pub fn partial_functions(mut self) -> Self {
        self.partial_functions = true;
        self
    }

    pub fn partial_rest_apis(mut self) -> Self {
        self.partial_rest_apis = true;
        self
    }

    pub fn failing_delete(mut self, log_group: &str) -> Self {
        self.failing_deletes.insert(log_group.to_string());
        self
    }

    pub fn delete_requests(&self) -> Vec<String> {
        self.delete_requests.borrow().clone()
    }

    pub fn remaining_log_groups(&self) -> Vec<String> {
        self.log_groups.borrow().clone()
    }
}

impl Account for FakeAccount {
    async fn list_log_groups(&self) -> Listing<String> {
        listing(&self.log_groups.borrow(), self.partial_log_groups)
    }

    async fn list_functions(&self) -> Listing<String> {
        listing(&self.functions, self.partial_functions)
    }

    async fn list_rest_apis(&self) -> Listing<String> {
        listing(&self.rest_apis, self.partial_rest_apis)
    }

    async fn delete_log_group(&self, name: &str) -> Result<Removal, RuntimeError> {
        self.delete_requests.borrow_mut().push(name.to_string());

        if self.failing_deletes.contains(name) {
            return Err(unavailable());
        }

        let mut log_groups = self.log_groups.borrow_mut();
        match log_groups.iter().position(|g| g == name) {
            Some(idx) => {
                log_groups.remove(idx);
                Ok(Removal::Deleted)
            }
            None => Ok(Removal::AlreadyGone),
        }
    }
}
