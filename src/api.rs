use crate::model::{NewPost, Post};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error("remote service responded with {0}")]
    Status(StatusCode),

    #[error(transparent)]
    TaskJoin(#[from] tokio::task::JoinError),
}

/// The remote service that owns posts.
#[async_trait]
pub trait PostsApi: Send + Sync + 'static {
    async fn list_posts(&self) -> Result<Vec<Post>>;

    async fn create_post(&self, post: &NewPost) -> Result<Post>;
}

/// JSON REST client for a jsonplaceholder-style posts endpoint.
#[derive(Clone, Debug)]
pub struct RemotePosts {
    client: reqwest::Client,
    base_url: String,
}

impl RemotePosts {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent("postboard");
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url)
    }
}

fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(Error::Status(status))
    }
}

#[async_trait]
impl PostsApi for RemotePosts {
    async fn list_posts(&self) -> Result<Vec<Post>> {
        let response = self.client.get(self.posts_url()).send().await?;
        let posts = ensure_success(response)?.json::<Vec<Post>>().await?;

        debug!("fetched {} posts", posts.len());
        Ok(posts)
    }

    async fn create_post(&self, post: &NewPost) -> Result<Post> {
        // `.json()` sets `Content-Type: application/json`.
        let response = self.client.post(self.posts_url()).json(post).send().await?;
        let created = ensure_success(response)?.json::<Post>().await?;

        debug!("created post {}", created.id);
        Ok(created)
    }
}
