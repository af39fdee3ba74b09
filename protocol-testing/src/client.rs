use std::{collections::HashMap, error::Error as StdError, fmt};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

/// Rows fetched per page. The host caps `first` at 1000.
const PAGE_SIZE: usize = 1000;

/// Custom error type for index queries
#[derive(Debug)]
pub enum QueryError {
    ClientError(String),
    ResponseError(String),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::ClientError(msg) => write!(f, "query client error: {}", msg),
            QueryError::ResponseError(msg) => write!(f, "query response error: {}", msg),
        }
    }
}

impl StdError for QueryError {}

impl From<reqwest::Error> for QueryError {
    fn from(error: reqwest::Error) -> Self {
        QueryError::ClientError(error.to_string())
    }
}

/// A row addressable by its entity id, used as the pagination cursor.
pub trait Row {
    fn id(&self) -> &str;
}

#[derive(Serialize)]
struct Request<'a> {
    query: &'a str,
    variables: Value,
}

#[derive(Deserialize)]
struct Response<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<ResponseError>,
}

#[derive(Deserialize)]
struct ResponseError {
    message: String,
}

/// Read-only client for the index served by the host.
pub struct SubgraphClient {
    http_client: reqwest::Client,
    url: String,
}

impl SubgraphClient {
    pub fn new(url: &str) -> Self {
        Self { http_client: reqwest::Client::new(), url: url.to_string() }
    }

    /// Issues one query and returns its `data` member.
    pub async fn query<T: DeserializeOwned>(&self, query: &str, variables: Value) -> Result<T, QueryError> {
        let response = self
            .http_client
            .post(&self.url)
            .json(&Request { query, variables })
            .send()
            .await?
            .error_for_status()?
            .json::<Response<T>>()
            .await?;
        into_data(response)
    }

    /// Fetches every row of `collection`, paging by ascending id.
    pub async fn query_all<T>(&self, collection: &str, fields: &str) -> Result<Vec<T>, QueryError>
    where
        T: DeserializeOwned + Row,
    {
        let query = page_query(collection, fields);
        let mut rows: Vec<T> = Vec::new();
        let mut last_id = String::new();

        loop {
            let mut page: HashMap<String, Vec<T>> =
                self.query(&query, json!({ "lastId": last_id })).await?;
            let page = page.remove(collection).ok_or_else(|| {
                QueryError::ResponseError(format!("response carries no '{}' collection", collection))
            })?;

            let done = page.len() < PAGE_SIZE;
            if let Some(last) = page.last() {
                last_id = last.id().to_string();
            }
            rows.extend(page);
            debug!(collection, rows = rows.len(), "fetched page");

            if done {
                return Ok(rows);
            }
        }
    }
}

fn into_data<T>(response: Response<T>) -> Result<T, QueryError> {
    if !response.errors.is_empty() {
        let messages = response
            .errors
            .into_iter()
            .map(|error| error.message)
            .collect::<Vec<_>>();
        return Err(QueryError::ResponseError(messages.join("; ")));
    }
    response
        .data
        .ok_or_else(|| QueryError::ResponseError("response carries no data".to_string()))
}

fn page_query(collection: &str, fields: &str) -> String {
    format!(
        "query Page($lastId: String!) {{ {collection}(first: {PAGE_SIZE}, orderBy: id, orderDirection: asc, where: {{ id_gt: $lastId }}) {{ id {fields} }} }}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Holder {
        id: String,
    }

    #[test]
    fn test_page_query() {
        assert_eq!(
            page_query("tokenHolders", "balanceMantissa"),
            "query Page($lastId: String!) { tokenHolders(first: 1000, orderBy: id, orderDirection: asc, \
             where: { id_gt: $lastId }) { id balanceMantissa } }"
        );
    }

    #[test]
    fn test_errors_take_precedence_over_data() {
        let response: Response<HashMap<String, Vec<Holder>>> = serde_json::from_value(json!({
            "data": { "tokenHolders": [] },
            "errors": [{ "message": "indexing error" }, { "message": "store error" }],
        }))
        .unwrap();

        match into_data(response) {
            Err(QueryError::ResponseError(msg)) => assert_eq!(msg, "indexing error; store error"),
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_data_is_returned() {
        let response: Response<HashMap<String, Vec<Holder>>> = serde_json::from_value(json!({
            "data": { "tokenHolders": [{ "id": "0x01" }] },
        }))
        .unwrap();

        let data = into_data(response).unwrap();
        assert_eq!(data["tokenHolders"][0].id, "0x01");
    }
}
