use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{Error, Result, CLIENT_ID, RATE_LIMIT_MESSAGE};

const SECONDARY_AUTH_HEADER: &str = "X-Authorization";

/// A post as the forum API returns it, kept exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Post(pub Value);

impl Post {
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Author id, `None` when the post carries none.
    pub fn uid(&self) -> Option<&Value> {
        self.get("uid")
    }
}

impl From<Value> for Post {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Thin client over the forum's read endpoint.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl ApiClient {
    pub fn new(client: Client, endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    /// Requests all posts of thread `tid`. Exactly one attempt is made.
    pub async fn fetch_posts(&self, tid: &str) -> Result<Vec<Post>> {
        let bearer = format!("Bearer {}", self.token);
        let res = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, &bearer)
            .header(SECONDARY_AUTH_HEADER, &bearer)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, CLIENT_ID)
            .body(posts_query(tid).to_string())
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(Error::FetchStatus {
                status: status.as_u16(),
                body,
            });
        }

        parse_posts_response(&body)
    }
}

fn posts_query(tid: &str) -> Value {
    json!({
        "asks": {
            "posts": {
                "_tid": [tid],
                "pid": true,
                "uid": true,
                "dateline": true,
                "message": true,
                "subject": true,
            }
        }
    })
}

/// Interprets a successful response body.
fn parse_posts_response(body: &str) -> Result<Vec<Post>> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| Error::MalformedBody(format!("{e}: {body}")))?;

    if value.get("success") == Some(&Value::Bool(false))
        && value.get("message").and_then(Value::as_str) == Some(RATE_LIMIT_MESSAGE)
    {
        return Err(Error::RateLimited);
    }

    match value.get("posts") {
        Some(Value::Array(posts)) => Ok(posts.iter().cloned().map(Post).collect()),
        _ => Err(Error::UnexpectedShape(format!("no `posts` array in: {body}"))),
    }
}
