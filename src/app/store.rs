//! State store: every operation that mutates application state.
//!
//! The [`Store`] owns the [`AppState`] and coordinates the two collaborators
//! state changes can involve: the recipe API client and the bookmark
//! persistence backend. Operations that hit the network are async and install
//! their results only after the call resolves successfully; nothing is applied
//! speculatively, so a failing operation always leaves state exactly as it
//! was. Errors propagate unchanged to the caller; the coordinator is the only
//! place they become user-visible messages.

use crate::api::types::{RecipeEnvelope, RecipeUpload, SearchEnvelope};
use crate::api::ApiClient;
use crate::app::state::AppState;
use crate::domain::error::{LadleError, Result};
use crate::domain::{Ingredient, Recipe, SearchResult};
use crate::storage::BookmarkStore;
use crate::Config;

/// Owns application state and applies every mutation to it.
pub struct Store {
    state: AppState,
    client: ApiClient,
    persistence: Box<dyn BookmarkStore>,
    api_url: String,
    api_key: String,
}

impl Store {
    /// Creates the store, loading the persisted bookmark collection.
    ///
    /// A failing load is downgraded to an empty collection; a damaged or
    /// unreadable bookmark file must not prevent startup.
    #[must_use]
    pub fn new(config: &Config, client: ApiClient, persistence: Box<dyn BookmarkStore>) -> Self {
        let bookmarks = persistence.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load bookmarks, starting empty");
            Vec::new()
        });
        tracing::debug!(count = bookmarks.len(), "bookmarks restored");

        Self {
            state: AppState::new(bookmarks, config.results_per_page),
            client,
            persistence,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Read access to the application state.
    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn recipe_url(&self, id: &str) -> String {
        format!("{}{}?key={}", self.api_url, id, self.api_key)
    }

    fn search_url(&self, query: &str) -> String {
        format!("{}?search={}&key={}", self.api_url, query, self.api_key)
    }

    fn upload_url(&self) -> String {
        format!("{}?key={}", self.api_url, self.api_key)
    }

    /// Fetches a recipe by id and installs it as the current recipe.
    ///
    /// The bookmarked flag is derived by membership in the bookmark
    /// collection. State is left unchanged on failure; no partial recipe is
    /// ever installed.
    ///
    /// # Errors
    ///
    /// Propagates the network client's errors unchanged.
    pub async fn load_recipe(&mut self, id: &str) -> Result<()> {
        tracing::debug!(id = %id, "loading recipe");

        let envelope: RecipeEnvelope = self.client.fetch_json(&self.recipe_url(id)).await?;
        let mut recipe = envelope.data.recipe.into_recipe();
        recipe.bookmarked = self.state.is_bookmarked(&recipe.id);

        tracing::debug!(title = %recipe.title, bookmarked = recipe.bookmarked, "recipe loaded");
        self.state.recipe = Some(recipe);
        Ok(())
    }

    /// Runs a search and replaces the current results.
    ///
    /// The query is stored and the page reset to 1 before the fetch, so on
    /// failure the stored query names the failed search while the results stay
    /// stale from the previous one. Observed behavior, kept as is.
    ///
    /// # Errors
    ///
    /// Propagates the network client's errors unchanged.
    pub async fn load_search_results(&mut self, query: &str) -> Result<()> {
        tracing::debug!(query = %query, "loading search results");

        self.state.search.query = query.to_string();
        self.state.search.page = 1;

        let envelope: SearchEnvelope = self.client.fetch_json(&self.search_url(query)).await?;
        self.state.search.results = envelope
            .data
            .recipes
            .into_iter()
            .map(|wire| wire.into_search_result())
            .collect();

        tracing::debug!(count = self.state.search.results.len(), "search results loaded");
        Ok(())
    }

    /// Returns one page of search results, updating the stored current page.
    ///
    /// With no argument the current page is re-derived. Never fails on empty
    /// result sets; out-of-range pages yield an empty slice.
    pub fn search_results_page(&mut self, page: Option<usize>) -> Vec<SearchResult> {
        let page = page.unwrap_or(self.state.search.page);
        self.state.search.page = page;
        self.state.search.page_slice(page).to_vec()
    }

    /// Scales the current recipe to a new serving count.
    ///
    /// Callers must reject `new_servings == 0` before calling; this operation
    /// does not validate it. No-op when no recipe is open.
    pub fn update_servings(&mut self, new_servings: u32) {
        if let Some(recipe) = &mut self.state.recipe {
            tracing::debug!(from = recipe.servings, to = new_servings, "scaling servings");
            recipe.scale_servings(new_servings);
        }
    }

    /// Appends a recipe snapshot to the bookmark collection and persists it.
    ///
    /// Sets the bookmarked flag on the current recipe when the ids match.
    /// Duplicate ids are not deduplicated.
    ///
    /// # Errors
    ///
    /// Returns a storage error when persisting fails; the in-memory collection
    /// keeps the new entry either way.
    pub fn add_bookmark(&mut self, recipe: Recipe) -> Result<()> {
        let _span = tracing::debug_span!("add_bookmark", id = %recipe.id).entered();

        let mut snapshot = recipe;
        snapshot.bookmarked = true;

        if let Some(current) = &mut self.state.recipe {
            if current.id == snapshot.id {
                current.bookmarked = true;
            }
        }

        self.state.bookmarks.push(snapshot);
        self.persistence.save(&self.state.bookmarks)
    }

    /// Removes the first bookmark with a matching id and persists.
    ///
    /// Clears the bookmarked flag on the current recipe when the ids match.
    /// An absent id is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error when persisting fails.
    pub fn remove_bookmark(&mut self, id: &str) -> Result<()> {
        let _span = tracing::debug_span!("remove_bookmark", id = %id).entered();

        if let Some(index) = self.state.bookmarks.iter().position(|b| b.id == id) {
            self.state.bookmarks.remove(index);
        }

        if let Some(current) = &mut self.state.recipe {
            if current.id == id {
                current.bookmarked = false;
            }
        }

        self.persistence.save(&self.state.bookmarks)
    }

    /// Submits a new recipe and installs the API's response as the current
    /// recipe, bookmarking it immediately.
    ///
    /// Form entries are flat key/value pairs; keys named `ingredient-N` with
    /// non-empty values are parsed as comma-joined ingredient triples. All
    /// parsing happens before the network call, so state is unchanged on
    /// validation as well as network failure.
    ///
    /// # Errors
    ///
    /// [`LadleError::Validation`] for malformed entries; network client errors
    /// propagate unchanged.
    pub async fn upload_recipe(&mut self, entries: &[(String, String)]) -> Result<()> {
        tracing::debug!(entry_count = entries.len(), "uploading recipe");

        let payload = Self::parse_upload(entries)?;
        let envelope: RecipeEnvelope = self.client.post_json(&self.upload_url(), &payload).await?;

        let recipe = envelope.data.recipe.into_recipe();
        tracing::debug!(id = %recipe.id, "recipe uploaded");
        self.state.recipe = Some(recipe.clone());
        self.add_bookmark(recipe)
    }

    /// Deletes a recipe on the API and drops it as the current recipe.
    ///
    /// Bookmarks are left untouched; the coordinator clears id-based
    /// navigation after a successful delete.
    ///
    /// # Errors
    ///
    /// Propagates the network client's errors unchanged.
    pub async fn delete_recipe(&mut self, id: &str) -> Result<()> {
        tracing::debug!(id = %id, "deleting recipe");

        self.client.delete_resource(&self.recipe_url(id)).await?;

        if self.state.recipe.as_ref().is_some_and(|r| r.id == id) {
            self.state.recipe = None;
        }
        Ok(())
    }

    /// Builds the upload payload from flat form entries.
    fn parse_upload(entries: &[(String, String)]) -> Result<RecipeUpload> {
        let ingredients = entries
            .iter()
            .filter(|(name, value)| name.starts_with("ingredient") && !value.is_empty())
            .map(|(_, value)| Ingredient::from_entry(value))
            .collect::<Result<Vec<Ingredient>>>()?;

        let field = |name: &str| -> Result<&str> {
            entries
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str())
                .ok_or_else(|| LadleError::Validation(format!("Missing field: {name}")))
        };
        let number_field = |name: &str| -> Result<u32> {
            field(name)?.trim().parse::<u32>().map_err(|_| {
                LadleError::Validation(format!("Field {name} must be a whole number"))
            })
        };

        Ok(RecipeUpload {
            title: field("title")?.to_string(),
            source_url: field("source_url")?.to_string(),
            image_url: field("image_url")?.to_string(),
            publisher: field("publisher")?.to_string(),
            cooking_time: number_field("cooking_time")?,
            servings: number_field("servings")?,
            ingredients,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct MemoryBookmarks {
        saved: Vec<Recipe>,
    }

    impl MemoryBookmarks {
        fn new() -> Self {
            Self { saved: Vec::new() }
        }
    }

    impl BookmarkStore for MemoryBookmarks {
        fn load(&self) -> Result<Vec<Recipe>> {
            Ok(self.saved.clone())
        }

        fn save(&mut self, bookmarks: &[Recipe]) -> Result<()> {
            self.saved = bookmarks.to_vec();
            Ok(())
        }
    }

    fn store_for(server_uri: &str, timeout_secs: u64) -> Store {
        let config = Config {
            api_url: format!("{server_uri}/recipes/"),
            api_key: "test-key".to_string(),
            timeout_secs,
            ..Config::default()
        };
        Store::new(
            &config,
            ApiClient::new(timeout_secs),
            Box::new(MemoryBookmarks::new()),
        )
    }

    fn recipe_json(id: &str, title: &str) -> serde_json::Value {
        json!({
            "data": {
                "recipe": {
                    "id": id,
                    "title": title,
                    "publisher": "101 Cookbooks",
                    "source_url": "https://example.com/r",
                    "image_url": "https://example.com/r.jpg",
                    "servings": 2,
                    "cooking_time": 60,
                    "ingredients": [
                        { "quantity": 100.0, "unit": "g", "description": "flour" }
                    ]
                }
            }
        })
    }

    fn search_json(count: usize) -> serde_json::Value {
        let recipes: Vec<serde_json::Value> = (1..=count)
            .map(|i| {
                json!({
                    "id": format!("r{i}"),
                    "title": format!("Recipe {i}"),
                    "publisher": "Pub",
                    "image_url": "img.jpg"
                })
            })
            .collect();
        json!({ "data": { "recipes": recipes } })
    }

    #[tokio::test]
    async fn load_recipe_installs_mapped_recipe() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/abc123"))
            .and(query_param("key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(recipe_json("abc123", "Pizza")))
            .mount(&server)
            .await;

        let mut store = store_for(&server.uri(), 5);
        store.load_recipe("abc123").await.unwrap();

        let recipe = store.state().recipe.as_ref().unwrap();
        assert_eq!(recipe.title, "Pizza");
        assert_eq!(recipe.cooking_time, 60);
        assert!(!recipe.bookmarked);
    }

    #[tokio::test]
    async fn load_recipe_flags_bookmarked_ids() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/abc123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(recipe_json("abc123", "Pizza")))
            .mount(&server)
            .await;

        let mut store = store_for(&server.uri(), 5);
        store.load_recipe("abc123").await.unwrap();
        store
            .add_bookmark(store.state().recipe.clone().unwrap())
            .unwrap();

        store.load_recipe("abc123").await.unwrap();
        assert!(store.state().recipe.as_ref().unwrap().bookmarked);
    }

    #[tokio::test]
    async fn failed_load_leaves_current_recipe_unchanged() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/good"))
            .respond_with(ResponseTemplate::new(200).set_body_json(recipe_json("good", "Pizza")))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/recipes/bad"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({ "message": "Invalid id" })),
            )
            .mount(&server)
            .await;

        let mut store = store_for(&server.uri(), 5);
        store.load_recipe("good").await.unwrap();

        let err = store.load_recipe("bad").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid id (400)");
        assert_eq!(store.state().recipe.as_ref().unwrap().id, "good");
    }

    #[tokio::test]
    async fn timed_out_load_leaves_state_unchanged() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/slow"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(recipe_json("slow", "Stew"))
                    .set_delay(std::time::Duration::from_secs(5)),
            )
            .mount(&server)
            .await;

        let mut store = store_for(&server.uri(), 1);
        let err = store.load_recipe("slow").await.unwrap_err();
        assert!(matches!(err, LadleError::Timeout { seconds: 1 }));
        assert!(store.state().recipe.is_none());
    }

    #[tokio::test]
    async fn search_resets_page_and_replaces_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/"))
            .and(query_param("search", "pizza"))
            .respond_with(ResponseTemplate::new(200).set_body_json(search_json(30)))
            .mount(&server)
            .await;

        let mut store = store_for(&server.uri(), 5);
        store.load_search_results("pizza").await.unwrap();

        assert_eq!(store.state().search.query, "pizza");
        assert_eq!(store.state().search.page, 1);
        assert_eq!(store.state().search.results.len(), 30);

        let page1 = store.search_results_page(None);
        assert_eq!(page1.len(), 10);
        assert_eq!(page1[0].id, "r1");

        let page3 = store.search_results_page(Some(3));
        assert_eq!(page3[0].id, "r21");
        assert_eq!(page3[9].id, "r30");
        assert_eq!(store.state().search.page, 3);
    }

    #[tokio::test]
    async fn failed_search_stores_query_but_keeps_stale_results() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/"))
            .and(query_param("search", "pizza"))
            .respond_with(ResponseTemplate::new(200).set_body_json(search_json(3)))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/recipes/"))
            .and(query_param("search", "burger"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({ "message": "boom" })))
            .mount(&server)
            .await;

        let mut store = store_for(&server.uri(), 5);
        store.load_search_results("pizza").await.unwrap();
        store.search_results_page(Some(1));

        let err = store.load_search_results("burger").await.unwrap_err();
        assert!(matches!(err, LadleError::Api { status: 500, .. }));

        // The stored query names the failed search; the results are stale.
        assert_eq!(store.state().search.query, "burger");
        assert_eq!(store.state().search.results.len(), 3);
        assert_eq!(store.state().search.results[0].id, "r1");
    }

    #[tokio::test]
    async fn servings_scale_quantities_and_count() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(recipe_json("abc", "Pizza")))
            .mount(&server)
            .await;

        let mut store = store_for(&server.uri(), 5);
        store.load_recipe("abc").await.unwrap();
        store.update_servings(4);

        let recipe = store.state().recipe.as_ref().unwrap();
        assert_eq!(recipe.servings, 4);
        assert_eq!(recipe.ingredients[0].quantity, Some(200.0));
    }

    #[test]
    fn bookmark_add_then_remove_restores_collection() {
        let mut store = store_for("http://unused.invalid", 5);
        let recipe = recipe_json("abc", "Pizza");
        let recipe: RecipeEnvelope = serde_json::from_value(recipe).unwrap();
        let recipe = recipe.data.recipe.into_recipe();

        store.add_bookmark(recipe).unwrap();
        assert_eq!(store.state().bookmarks.len(), 1);
        assert!(store.state().is_bookmarked("abc"));

        store.remove_bookmark("abc").unwrap();
        assert!(store.state().bookmarks.is_empty());
        assert!(!store.state().is_bookmarked("abc"));
    }

    #[test]
    fn duplicate_bookmark_is_not_deduplicated() {
        // Current behavior: adds are append-only, uniqueness is not enforced.
        let mut store = store_for("http://unused.invalid", 5);
        let envelope: RecipeEnvelope =
            serde_json::from_value(recipe_json("abc", "Pizza")).unwrap();
        let recipe = envelope.data.recipe.into_recipe();

        store.add_bookmark(recipe.clone()).unwrap();
        store.add_bookmark(recipe).unwrap();
        assert_eq!(store.state().bookmarks.len(), 2);

        // Removal takes the first match only.
        store.remove_bookmark("abc").unwrap();
        assert_eq!(store.state().bookmarks.len(), 1);
    }

    #[test]
    fn removing_unknown_bookmark_is_a_noop() {
        let mut store = store_for("http://unused.invalid", 5);
        store.remove_bookmark("missing").unwrap();
        assert!(store.state().bookmarks.is_empty());
    }

    #[tokio::test]
    async fn upload_posts_payload_and_bookmarks_response() {
        let server = MockServer::start().await;
        let expected_body = json!({
            "title": "Toast",
            "source_url": "https://example.com/toast",
            "image_url": "https://example.com/toast.jpg",
            "publisher": "Me",
            "cooking_time": 5,
            "servings": 1,
            "ingredients": [
                { "quantity": 2.0, "unit": "slice", "description": "bread" },
                { "quantity": null, "unit": "", "description": "butter" }
            ]
        });
        let mut response = recipe_json("minted-id", "Toast");
        response["data"]["recipe"]["key"] = json!("owner-key");

        Mock::given(method("POST"))
            .and(path("/recipes/"))
            .and(query_param("key", "test-key"))
            .and(body_json(expected_body))
            .respond_with(ResponseTemplate::new(201).set_body_json(response))
            .mount(&server)
            .await;

        let mut store = store_for(&server.uri(), 5);
        let entries = vec![
            ("title".to_string(), "Toast".to_string()),
            ("source_url".to_string(), "https://example.com/toast".to_string()),
            ("image_url".to_string(), "https://example.com/toast.jpg".to_string()),
            ("publisher".to_string(), "Me".to_string()),
            ("cooking_time".to_string(), "5".to_string()),
            ("servings".to_string(), "1".to_string()),
            ("ingredient-1".to_string(), "2,slice,bread".to_string()),
            ("ingredient-2".to_string(), ",,butter".to_string()),
            ("ingredient-3".to_string(), String::new()),
        ];
        store.upload_recipe(&entries).await.unwrap();

        let recipe = store.state().recipe.as_ref().unwrap();
        assert_eq!(recipe.id, "minted-id");
        assert!(recipe.is_user_submitted());
        assert!(recipe.bookmarked);
        assert!(store.state().is_bookmarked("minted-id"));
    }

    #[tokio::test]
    async fn malformed_ingredient_fails_before_any_network_call() {
        let mut store = store_for("http://unused.invalid", 5);
        let entries = vec![
            ("title".to_string(), "Toast".to_string()),
            ("source_url".to_string(), "u".to_string()),
            ("image_url".to_string(), "i".to_string()),
            ("publisher".to_string(), "p".to_string()),
            ("cooking_time".to_string(), "5".to_string()),
            ("servings".to_string(), "1".to_string()),
            ("ingredient-1".to_string(), "kg,flour".to_string()),
        ];

        let err = store.upload_recipe(&entries).await.unwrap_err();
        assert!(matches!(err, LadleError::Validation(_)));
        assert!(store.state().recipe.is_none());
        assert!(store.state().bookmarks.is_empty());
    }

    #[tokio::test]
    async fn delete_drops_current_recipe_but_not_bookmarks() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(recipe_json("abc", "Pizza")))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/recipes/abc"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let mut store = store_for(&server.uri(), 5);
        store.load_recipe("abc").await.unwrap();
        store
            .add_bookmark(store.state().recipe.clone().unwrap())
            .unwrap();

        store.delete_recipe("abc").await.unwrap();
        assert!(store.state().recipe.is_none());
        assert_eq!(store.state().bookmarks.len(), 1);
    }
}
