//! DynamoDB scanner
//!
//! Plugs `aws-sdk-dynamodb` into the paginator. A request is the SDK's own
//! scan builder, so every option it offers (filter expressions, projection,
//! segments, consistent reads) passes through untouched; only the
//! `ExclusiveStartKey` is rewritten between pages.
//!
//! ```rust,ignore
//! use scan_pager::dynamodb::table_scan;
//! use scan_pager::pagination::full_scan_stream;
//! use futures::TryStreamExt;
//!
//! let config = aws_config::load_from_env().await;
//! let client = aws_sdk_dynamodb::Client::new(&config);
//!
//! let request = table_scan(&client, "links").limit(100);
//! let mut items = full_scan_stream(&client, request);
//! while let Some(item) = items.try_next().await? {
//!     println!("{item:?}");
//! }
//! ```

use crate::scan::{ScanRequest, ScanResponse, Scanner};
use async_trait::async_trait;
use aws_sdk_dynamodb::operation::scan::builders::ScanFluentBuilder;
use aws_sdk_dynamodb::operation::scan::ScanOutput;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use std::collections::HashMap;

/// A DynamoDB record, also the shape of `LastEvaluatedKey`
pub type Item = HashMap<String, AttributeValue>;

/// Start a scan request for `table`
pub fn table_scan(client: &Client, table: impl Into<String>) -> ScanFluentBuilder {
    client.scan().table_name(table)
}

impl ScanRequest for ScanFluentBuilder {
    type Key = Item;

    fn with_exclusive_start_key(self, key: Item) -> Self {
        self.set_exclusive_start_key(Some(key))
    }
}

impl ScanResponse for ScanOutput {
    type Item = Item;
    type Key = Item;

    fn into_parts(self) -> (Vec<Item>, Option<Item>) {
        (self.items.unwrap_or_default(), self.last_evaluated_key)
    }
}

/// The builder already holds a client handle; the receiver only anchors the
/// scanner to the client it was built from.
#[async_trait]
impl Scanner for Client {
    type Request = ScanFluentBuilder;
    type Response = ScanOutput;
    type Error = aws_sdk_dynamodb::Error;

    async fn scan(&self, request: ScanFluentBuilder) -> Result<ScanOutput, Self::Error> {
        request.send().await.map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_dynamodb::config::{BehaviorVersion, Region};

    fn client() -> Client {
        let config = aws_sdk_dynamodb::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new("us-east-1"))
            .build();
        Client::from_conf(config)
    }

    fn key(id: &str) -> Item {
        HashMap::from([("LinkId".to_string(), AttributeValue::S(id.to_string()))])
    }

    #[test]
    fn test_start_key_is_the_only_change() {
        let request = table_scan(&client(), "links").limit(4);
        let next = request.clone().with_exclusive_start_key(key("abc"));

        assert_eq!(request.as_input().get_exclusive_start_key(), &None);
        assert_eq!(
            next.as_input().get_exclusive_start_key(),
            &Some(key("abc"))
        );
        assert_eq!(next.as_input().get_table_name().as_deref(), Some("links"));
        assert_eq!(next.as_input().get_limit(), &Some(4));
    }

    #[test]
    fn test_output_into_parts() {
        let output = ScanOutput::builder()
            .items(key("a"))
            .items(key("b"))
            .last_evaluated_key("LinkId", AttributeValue::S("b".to_string()))
            .build();

        let (items, last) = output.into_parts();
        assert_eq!(items, vec![key("a"), key("b")]);
        assert_eq!(last, Some(key("b")));
    }

    #[test]
    fn test_output_without_items() {
        let output = ScanOutput::builder().build();
        let (items, last) = output.into_parts();
        assert!(items.is_empty());
        assert!(last.is_none());
    }
}
