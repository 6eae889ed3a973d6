use serde::{Deserialize, Serialize};

#[cfg(test)]
use fake::faker::lorem::en::{Paragraph, Sentence};

/// A post as stored by the remote service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(test, derive(fake::Dummy))]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[cfg_attr(test, dummy(faker = "1..10_000"))]
    pub id: i64,
    #[cfg_attr(test, dummy(faker = "Sentence(3..8)"))]
    pub title: String,
    #[cfg_attr(test, dummy(faker = "Paragraph(1..4)"))]
    pub body: String,
    #[cfg_attr(test, dummy(faker = "1..=10"))]
    pub user_id: i64,
}

#[cfg(test)]
impl Post {
    pub fn fake() -> Self {
        use fake::{Fake, Faker};

        Faker.fake()
    }
}

/// Payload for creating a post. The id is assigned by the remote service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub user_id: i64,
}
