//! DynamoDB user store.
//!
//! Implements `UserStore` from `usertable_core::storage` on a single DynamoDB
//! table keyed by `userId`.

use async_trait::async_trait;
use aws_sdk_dynamodb::operation::scan::builders::ScanFluentBuilder;
use aws_sdk_dynamodb::types::{AttributeValue, Select};
use aws_sdk_dynamodb::Client;

use usertable_core::storage::{CountPage, Result, ScanPage, ScanRequest, UserStore};
use usertable_core::user::{User, UserChanges};

use super::conversions::{item_to_user, user_to_item};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_scan_error,
    map_update_item_error,
};
use super::expressions::{filter_expression, update_expression};
use super::keys;

/// DynamoDB-backed user store.
pub struct DynamoDbUserStore {
    client: Client,
    table_name: String,
}

impl DynamoDbUserStore {
    /// Creates a new store with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a store using the AWS default credential chain.
    ///
    /// `endpoint_url` points the client at a local DynamoDB when set.
    pub async fn connect(
        endpoint_url: Option<&str>,
        region: &str,
        table_name: impl Into<String>,
    ) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(region.to_string()));

        if let Some(endpoint) = endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;
        Self::new(Client::new(&sdk_config), table_name)
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Builds a Scan for one page of `request`.
    fn scan(&self, request: &ScanRequest) -> ScanFluentBuilder {
        let mut scan = self
            .client
            .scan()
            .table_name(&self.table_name)
            .set_limit(
                request
                    .limit
                    .map(|limit| i32::try_from(limit).unwrap_or(i32::MAX)),
            )
            .set_exclusive_start_key(request.start_after.as_ref().map(keys::exclusive_start_key));

        if let Some(filter) = filter_expression(&request.filter) {
            scan = scan
                .filter_expression(filter.expression)
                .set_expression_attribute_names(Some(filter.names))
                .set_expression_attribute_values(Some(filter.values));
        }

        scan
    }
}

#[async_trait]
impl UserStore for DynamoDbUserStore {
    async fn put_user(&self, user: &User) -> Result<()> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(user_to_item(user)))
            .send()
            .await
            .map_err(map_put_item_error)?;

        Ok(())
    }

    async fn get_user(&self, user_id: &str) -> Result<Option<User>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(keys::USER_ID, AttributeValue::S(user_id.to_string()))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_user(&item)?)),
            None => Ok(None),
        }
    }

    async fn update_user(&self, user_id: &str, changes: &UserChanges) -> Result<()> {
        let Some(expr) = update_expression(changes) else {
            return Ok(());
        };

        self.client
            .update_item()
            .table_name(&self.table_name)
            .key(keys::USER_ID, AttributeValue::S(user_id.to_string()))
            .update_expression(expr.update)
            .condition_expression(expr.condition)
            .set_expression_attribute_names(Some(expr.names))
            .set_expression_attribute_values(Some(expr.values))
            .send()
            .await
            .map_err(|e| map_update_item_error(e, user_id))?;

        Ok(())
    }

    async fn delete_user(&self, user_id: &str) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(keys::USER_ID, AttributeValue::S(user_id.to_string()))
            .send()
            .await
            .map_err(map_delete_item_error)?;

        Ok(())
    }

    async fn scan_users(&self, request: &ScanRequest) -> Result<ScanPage> {
        let output = self
            .scan(request)
            .send()
            .await
            .map_err(map_scan_error)?;

        let users = output
            .items()
            .iter()
            .map(item_to_user)
            .collect::<Result<Vec<_>>>()?;

        Ok(ScanPage {
            users,
            next: keys::continuation_token(output.last_evaluated_key()),
        })
    }

    async fn count_users(&self, request: &ScanRequest) -> Result<CountPage> {
        let output = self
            .scan(request)
            .select(Select::Count)
            .send()
            .await
            .map_err(map_scan_error)?;

        Ok(CountPage {
            count: usize::try_from(output.count()).unwrap_or_default(),
            next: keys::continuation_token(output.last_evaluated_key()),
        })
    }
}
