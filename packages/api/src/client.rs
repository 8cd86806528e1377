//! HTTP client for the shelter service.

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use store::Selector;

use crate::error::ApiError;
use crate::models::{Dog, MatchResponse, SearchPage, User};

/// Host of the production shelter service.
pub const DEFAULT_BASE_URL: &str = "https://frontend-take-home-service.fetch.com";

/// Client for the shelter service.
///
/// All endpoints rely on the session cookie established by [`login`]
/// (`ShelterClient::login`): on wasm the browser stores it and every request
/// opts into `credentials: include`; on native builds the reqwest cookie
/// store carries it between calls.
#[derive(Clone, Debug)]
pub struct ShelterClient {
    base_url: String,
    client: Client,
}

impl Default for ShelterClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ShelterClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        let client = Client::builder()
            .cookie_store(true)
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("failed to build HTTP client");
        #[cfg(target_arch = "wasm32")]
        let client = Client::new();

        Self {
            base_url: base_url.into(),
            client,
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    /// Sign in. On success the service sets the session cookie that every
    /// subsequent call depends on.
    pub async fn login(&self, user: &User) -> Result<(), ApiError> {
        let resp = self
            .request(Method::POST, "/auth/login")
            .json(user)
            .send()
            .await?;
        check(resp)?;
        Ok(())
    }

    /// All breed names known to the service, for the filter dropdown.
    pub async fn breeds(&self) -> Result<Vec<String>, ApiError> {
        let resp = self.request(Method::GET, "/dogs/breeds").send().await?;
        Ok(check(resp)?.json().await?)
    }

    /// Fetch one page of dog ids matching the selector.
    pub async fn search(&self, selector: &Selector) -> Result<SearchPage, ApiError> {
        let resp = self
            .request(Method::GET, "/dogs/search")
            .query(&search_query(selector))
            .send()
            .await?;
        Ok(check(resp)?.json().await?)
    }

    /// Resolve dog ids to full records. The body is the id list verbatim.
    pub async fn dogs(&self, ids: &[String]) -> Result<Vec<Dog>, ApiError> {
        let resp = self
            .request(Method::POST, "/dogs")
            .json(ids)
            .send()
            .await?;
        Ok(check(resp)?.json().await?)
    }

    /// The two-step catalog load: search for ids, then resolve them to full
    /// records. Returns the resolved dogs together with the result-set total
    /// so callers commit both or neither; a failure at either step aborts
    /// the whole operation and nothing partial escapes.
    pub async fn search_dogs(&self, selector: &Selector) -> Result<(Vec<Dog>, u64), ApiError> {
        let page = self.search(selector).await?;
        tracing::debug!(total = page.total, "search returned {} ids", page.result_ids.len());
        let dogs = self.dogs(&page.result_ids).await?;
        Ok((dogs, page.total))
    }

    /// Ask the service for a match given the favorited ids, posted in
    /// insertion order.
    pub async fn request_match(&self, ids: &[String]) -> Result<String, ApiError> {
        let resp = self
            .request(Method::POST, "/dogs/match")
            .json(ids)
            .send()
            .await?;
        let matched: MatchResponse = check(resp)?.json().await?;
        Ok(matched.matched)
    }
}

/// Query parameters for the search endpoint. No `breeds` pair is emitted
/// when the filter is unset.
fn search_query(selector: &Selector) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("sort", format!("breed:{}", selector.sort.as_str())),
        ("size", Selector::PAGE_SIZE.to_string()),
        ("from", selector.offset().to_string()),
    ];
    if let Some(breed) = &selector.breed {
        query.push(("breeds", breed.clone()));
    }
    query
}

fn check(resp: Response) -> Result<Response, ApiError> {
    match resp.status() {
        status if status.is_success() => Ok(resp),
        StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
        status => Err(ApiError::Api(status.as_u16())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;
    use store::SortDirection;

    #[test]
    fn search_query_omits_breeds_when_filter_unset() {
        let selector = Selector::new();
        let query = search_query(&selector);

        assert_eq!(
            query,
            vec![
                ("sort", "breed:asc".to_string()),
                ("size", "25".to_string()),
                ("from", "0".to_string()),
            ]
        );
        assert!(query.iter().all(|(key, _)| *key != "breeds"));
    }

    #[test]
    fn search_query_reflects_the_latest_selector_values() {
        let mut selector = Selector::new();
        selector.set_breed("Pug");
        selector.next_page();
        selector.sort = SortDirection::Desc;

        let query = search_query(&selector);
        assert_eq!(
            query,
            vec![
                ("sort", "breed:desc".to_string()),
                ("size", "25".to_string()),
                ("from", "25".to_string()),
                ("breeds", "Pug".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn login_posts_name_and_email() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/login")
            .match_body(Matcher::Json(json!({
                "name": "Ada",
                "email": "ada@example.com"
            })))
            .with_status(200)
            .with_body("OK")
            .create_async()
            .await;

        let client = ShelterClient::new(server.url());
        let user = User {
            name: "Ada".into(),
            email: "ada@example.com".into(),
        };
        client.login(&user).await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn login_maps_401_to_unauthorized() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/auth/login")
            .with_status(401)
            .create_async()
            .await;

        let client = ShelterClient::new(server.url());
        let err = client.login(&User::default()).await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
    }

    #[tokio::test]
    async fn breeds_parses_the_name_list() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/dogs/breeds")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"["Boxer","Pug"]"#)
            .create_async()
            .await;

        let client = ShelterClient::new(server.url());
        let breeds = client.breeds().await.unwrap();
        assert_eq!(breeds, ["Boxer", "Pug"]);
    }

    #[tokio::test]
    async fn search_sends_selector_as_query_params() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/dogs/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("sort".into(), "breed:desc".into()),
                Matcher::UrlEncoded("size".into(), "25".into()),
                Matcher::UrlEncoded("from".into(), "25".into()),
                Matcher::UrlEncoded("breeds".into(), "Pug".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"resultIds":["a1"],"total":1}"#)
            .create_async()
            .await;

        let mut selector = Selector::new();
        selector.sort = SortDirection::Desc;
        selector.set_breed("Pug");
        selector.next_page();

        let client = ShelterClient::new(server.url());
        let page = client.search(&selector).await.unwrap();
        assert_eq!(page.result_ids, ["a1"]);
        assert_eq!(page.total, 1);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn dogs_posts_the_id_list_verbatim() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/dogs")
            .match_body(Matcher::Json(json!(["a1", "b2"])))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"id":"a1","img":"http://img/a1","name":"Rex","age":3,"zip_code":"60614","breed":"Boxer"},
                    {"id":"b2","img":"http://img/b2","name":"Mia","age":5,"zip_code":"60615","breed":"Pug"}]"#,
            )
            .create_async()
            .await;

        let client = ShelterClient::new(server.url());
        let ids = vec!["a1".to_string(), "b2".to_string()];
        let dogs = client.dogs(&ids).await.unwrap();
        assert_eq!(dogs.len(), 2);
        assert_eq!(dogs[0].name, "Rex");
        assert_eq!(dogs[1].breed, "Pug");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn search_dogs_resolves_ids_and_reports_total() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/dogs/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"resultIds":["a1"],"total":120}"#)
            .create_async()
            .await;
        server
            .mock("POST", "/dogs")
            .match_body(Matcher::Json(json!(["a1"])))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"id":"a1","img":"http://img/a1","name":"Rex","age":3,"zip_code":"60614","breed":"Boxer"}]"#,
            )
            .create_async()
            .await;

        let client = ShelterClient::new(server.url());
        let (dogs, total) = client.search_dogs(&Selector::new()).await.unwrap();
        assert_eq!(dogs.len(), 1);
        assert_eq!(dogs[0].id, "a1");
        assert_eq!(total, 120);
    }

    #[tokio::test]
    async fn search_dogs_aborts_when_resolution_fails() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/dogs/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"resultIds":["a1"],"total":120}"#)
            .create_async()
            .await;
        server
            .mock("POST", "/dogs")
            .with_status(500)
            .create_async()
            .await;

        // The search step's total must not leak out when resolution fails;
        // the only outcome is the error.
        let client = ShelterClient::new(server.url());
        let err = client.search_dogs(&Selector::new()).await.unwrap_err();
        assert!(matches!(err, ApiError::Api(500)));
    }

    #[tokio::test]
    async fn request_match_posts_favorites_in_insertion_order() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/dogs/match")
            .match_body(Matcher::Json(json!(["b2", "a1"])))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"match":"b2"}"#)
            .create_async()
            .await;

        let mut favorites = store::FavoriteSet::new();
        favorites.toggle("b2");
        favorites.toggle("a1");

        let client = ShelterClient::new(server.url());
        let matched = client.request_match(favorites.ids()).await.unwrap();
        assert_eq!(matched, "b2");
        mock.assert_async().await;
    }
}
