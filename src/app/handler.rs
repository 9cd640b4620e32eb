//! Command dispatch and view coordination.
//!
//! This module implements the coordinator: it consumes [`Command`]s, invokes
//! state-store operations, and forwards the resulting state slices into the
//! renderers. It is the only layer where errors are caught: every failing
//! operation ends in an error panel on the view that initiated it, never in a
//! crash. It also owns the [`Location`], the navigation fragment carrying the
//! id of the open recipe.
//!
//! Control flow per command: spinner (when network work follows) → store
//! operation → full or patch render of the affected regions.

use crate::app::commands::Command;
use crate::app::store::Store;
use crate::ui::components::{
    AddRecipeView, BookmarksView, PaginationView, RecipeView, ResultsView,
};
use crate::ui::view::View;
use crate::Config;
use std::time::Duration;

/// The navigation fragment: which recipe is open.
///
/// Read to decide which recipe to show, written after an upload (the freshly
/// minted id) and cleared after a delete.
#[derive(Debug, Clone, Default)]
pub struct Location {
    fragment: Option<String>,
}

impl Location {
    /// The id of the open recipe, if any.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Replaces the fragment.
    pub fn set(&mut self, fragment: Option<String>) {
        self.fragment = fragment;
    }
}

/// The application coordinator: store, views, and navigation in one place.
pub struct App {
    store: Store,
    location: Location,
    recipe_view: RecipeView,
    results_view: ResultsView,
    pagination_view: PaginationView,
    bookmarks_view: BookmarksView,
    add_recipe_view: AddRecipeView,
    modal_close: Duration,
}

impl App {
    /// Wires the coordinator and renders the persisted bookmark list.
    #[must_use]
    pub fn new(config: &Config, store: Store) -> Self {
        let mut app = Self {
            store,
            location: Location::default(),
            recipe_view: RecipeView::new(),
            results_view: ResultsView::new(),
            pagination_view: PaginationView::new(),
            bookmarks_view: BookmarksView::new(),
            add_recipe_view: AddRecipeView::new(),
            modal_close: Duration::from_secs_f64(config.modal_close_secs),
        };
        app.bookmarks_view.render_full(&app.store.state().bookmarks);
        app
    }

    /// Read access to the store (and through it, the application state).
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// The current navigation fragment.
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Current markup of every region, in presentation order.
    #[must_use]
    pub fn regions(&self) -> Vec<(String, String)> {
        vec![
            (
                self.results_view.region().name().to_string(),
                self.results_view.region().markup(),
            ),
            (
                self.pagination_view.region().name().to_string(),
                self.pagination_view.region().markup(),
            ),
            (
                self.recipe_view.region().name().to_string(),
                self.recipe_view.region().markup(),
            ),
            (
                self.bookmarks_view.region().name().to_string(),
                self.bookmarks_view.region().markup(),
            ),
            (
                self.add_recipe_view.region().name().to_string(),
                self.add_recipe_view.region().markup(),
            ),
        ]
    }

    /// Processes one command. Returns `false` when the session should end.
    pub async fn dispatch(&mut self, command: Command) -> bool {
        tracing::debug!(command = ?command, "dispatching");

        match command {
            Command::ShowRecipe { id } => self.control_recipe(&id).await,
            Command::Search { query } => self.control_search(&query).await,
            Command::Paginate { page } => self.control_pagination(page),
            Command::SetServings { servings } => self.control_servings(servings),
            Command::ToggleBookmark => self.control_toggle_bookmark(),
            Command::ToggleRecipeForm => self.add_recipe_view.toggle_window(),
            Command::Upload { entries } => self.control_upload(&entries).await,
            Command::Delete => self.control_delete().await,
            Command::Quit => return false,
        }
        true
    }

    async fn control_recipe(&mut self, id: &str) {
        if id.is_empty() {
            return;
        }
        self.location.set(Some(id.to_string()));
        self.recipe_view.render_spinner();

        // Refresh the active highlight in both lists without a full re-render.
        self.results_view.set_active(Some(id.to_string()));
        self.bookmarks_view.set_active(Some(id.to_string()));
        let page = self.store.search_results_page(None);
        self.results_view.render_update(&page);
        self.bookmarks_view
            .render_update(&self.store.state().bookmarks);

        match self.store.load_recipe(id).await {
            Ok(()) => {
                if let Some(recipe) = &self.store.state().recipe {
                    self.recipe_view.render_full(recipe);
                }
            }
            Err(e) => {
                tracing::error!(error = %e, id = %id, "failed to load recipe");
                self.recipe_view.render_error(None);
            }
        }
    }

    async fn control_search(&mut self, query: &str) {
        if query.is_empty() {
            return;
        }
        self.results_view.render_spinner();

        match self.store.load_search_results(query).await {
            Ok(()) => {
                let page = self.store.search_results_page(None);
                self.results_view.render_full(&page);
                self.pagination_view.render_full(&self.store.state().search);
            }
            Err(e) => {
                tracing::error!(error = %e, query = %query, "search failed");
                self.results_view.render_error(Some(&e.to_string()));
            }
        }
    }

    fn control_pagination(&mut self, page: usize) {
        let slice = self.store.search_results_page(Some(page));
        self.results_view.render_full(&slice);
        self.pagination_view.render_full(&self.store.state().search);
    }

    fn control_servings(&mut self, servings: u32) {
        // The store documents this guard as the caller's responsibility.
        if servings == 0 {
            return;
        }
        self.store.update_servings(servings);
        if let Some(recipe) = &self.store.state().recipe {
            self.recipe_view.render_update(recipe);
        }
    }

    fn control_toggle_bookmark(&mut self) {
        let Some(current) = self.store.state().recipe.clone() else {
            return;
        };

        let result = if current.bookmarked {
            self.store.remove_bookmark(&current.id)
        } else {
            self.store.add_bookmark(current)
        };
        if let Err(e) = result {
            tracing::error!(error = %e, "bookmark persistence failed");
        }

        if let Some(recipe) = &self.store.state().recipe {
            self.recipe_view.render_update(recipe);
        }
        self.bookmarks_view
            .render_full(&self.store.state().bookmarks);
    }

    async fn control_upload(&mut self, entries: &[(String, String)]) {
        self.add_recipe_view.render_spinner();

        match self.store.upload_recipe(entries).await {
            Ok(()) => {
                let id = self.store.state().recipe.as_ref().map(|r| r.id.clone());
                if let Some(recipe) = &self.store.state().recipe {
                    self.recipe_view.render_full(recipe);
                }
                self.add_recipe_view.render_message(None);
                self.results_view.set_active(id.clone());
                self.bookmarks_view.set_active(id.clone());
                self.bookmarks_view
                    .render_full(&self.store.state().bookmarks);
                self.location.set(id);

                tokio::time::sleep(self.modal_close).await;
                if self.add_recipe_view.is_open() {
                    self.add_recipe_view.toggle_window();
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "recipe upload failed");
                self.add_recipe_view.render_error(Some(&e.to_string()));
            }
        }
    }

    async fn control_delete(&mut self) {
        let Some(id) = self.store.state().recipe.as_ref().map(|r| r.id.clone()) else {
            return;
        };

        match self.store.delete_recipe(&id).await {
            Ok(()) => {
                self.location.set(None);
                self.results_view.set_active(None);
                self.bookmarks_view.set_active(None);
                self.recipe_view.region_mut().clear();
                self.bookmarks_view
                    .render_full(&self.store.state().bookmarks);
            }
            Err(e) => {
                tracing::error!(error = %e, id = %id, "failed to delete recipe");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiClient;
    use crate::domain::{Recipe, Result};
    use crate::storage::BookmarkStore;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct MemoryBookmarks;

    impl BookmarkStore for MemoryBookmarks {
        fn load(&self) -> Result<Vec<Recipe>> {
            Ok(Vec::new())
        }

        fn save(&mut self, _bookmarks: &[Recipe]) -> Result<()> {
            Ok(())
        }
    }

    fn app_for(server_uri: &str) -> App {
        let config = Config {
            api_url: format!("{server_uri}/recipes/"),
            api_key: "test-key".to_string(),
            timeout_secs: 5,
            modal_close_secs: 0.01,
            ..Config::default()
        };
        let store = Store::new(&config, ApiClient::new(5), Box::new(MemoryBookmarks));
        App::new(&config, store)
    }

    fn recipe_json(id: &str) -> serde_json::Value {
        json!({
            "data": {
                "recipe": {
                    "id": id,
                    "title": "Pizza",
                    "publisher": "101 Cookbooks",
                    "source_url": "https://example.com/pizza",
                    "image_url": "https://example.com/pizza.jpg",
                    "servings": 2,
                    "cooking_time": 60,
                    "ingredients": [
                        { "quantity": 100.0, "unit": "g", "description": "flour" }
                    ]
                }
            }
        })
    }

    fn region_markup(app: &App, name: &str) -> String {
        app.regions()
            .into_iter()
            .find(|(n, _)| n == name)
            .map(|(_, markup)| markup)
            .unwrap()
    }

    #[tokio::test]
    async fn show_recipe_sets_location_and_renders_detail() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(recipe_json("abc")))
            .mount(&server)
            .await;

        let mut app = app_for(&server.uri());
        assert!(app.dispatch(Command::ShowRecipe { id: "abc".into() }).await);

        assert_eq!(app.location().fragment(), Some("abc"));
        assert!(region_markup(&app, "recipe").contains("Pizza"));
    }

    #[tokio::test]
    async fn failed_recipe_load_renders_error_panel() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/missing"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({ "message": "No recipe" })),
            )
            .mount(&server)
            .await;

        let mut app = app_for(&server.uri());
        app.dispatch(Command::ShowRecipe { id: "missing".into() })
            .await;

        let markup = region_markup(&app, "recipe");
        assert!(markup.contains("We could not find that recipe."));
    }

    #[tokio::test]
    async fn servings_command_patches_recipe_markup() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(recipe_json("abc")))
            .mount(&server)
            .await;

        let mut app = app_for(&server.uri());
        app.dispatch(Command::ShowRecipe { id: "abc".into() }).await;
        app.dispatch(Command::SetServings { servings: 4 }).await;

        let markup = region_markup(&app, "recipe");
        assert!(markup.contains(">4<"));
        assert!(markup.contains(">200<"));
    }

    #[tokio::test]
    async fn zero_servings_is_rejected_before_the_store() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(recipe_json("abc")))
            .mount(&server)
            .await;

        let mut app = app_for(&server.uri());
        app.dispatch(Command::ShowRecipe { id: "abc".into() }).await;
        app.dispatch(Command::SetServings { servings: 0 }).await;

        assert_eq!(app.store().state().recipe.as_ref().unwrap().servings, 2);
    }

    #[tokio::test]
    async fn bookmark_toggle_round_trips() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(recipe_json("abc")))
            .mount(&server)
            .await;

        let mut app = app_for(&server.uri());
        app.dispatch(Command::ShowRecipe { id: "abc".into() }).await;

        app.dispatch(Command::ToggleBookmark).await;
        assert!(app.store().state().is_bookmarked("abc"));
        assert!(region_markup(&app, "recipe").contains("icon-bookmark-fill"));

        app.dispatch(Command::ToggleBookmark).await;
        assert!(!app.store().state().is_bookmarked("abc"));
        assert!(region_markup(&app, "bookmarks__list").contains("No bookmarks yet."));
    }

    #[tokio::test]
    async fn upload_success_navigates_and_closes_form() {
        let server = MockServer::start().await;
        let mut response = recipe_json("minted-id");
        response["data"]["recipe"]["key"] = json!("owner-key");
        Mock::given(method("POST"))
            .and(path("/recipes/"))
            .respond_with(ResponseTemplate::new(201).set_body_json(response))
            .mount(&server)
            .await;

        let mut app = app_for(&server.uri());
        app.dispatch(Command::ToggleRecipeForm).await;

        let entries = vec![
            ("title".to_string(), "Pizza".to_string()),
            ("source_url".to_string(), "https://example.com/pizza".to_string()),
            ("image_url".to_string(), "https://example.com/pizza.jpg".to_string()),
            ("publisher".to_string(), "Me".to_string()),
            ("cooking_time".to_string(), "60".to_string()),
            ("servings".to_string(), "2".to_string()),
            ("ingredient-1".to_string(), "100,g,flour".to_string()),
        ];
        app.dispatch(Command::Upload { entries }).await;

        assert_eq!(app.location().fragment(), Some("minted-id"));
        assert!(app.store().state().is_bookmarked("minted-id"));
        assert!(!app.add_recipe_view.is_open());
    }

    #[tokio::test]
    async fn delete_clears_recipe_and_location() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/recipes/abc"))
            .respond_with(ResponseTemplate::new(200).set_body_json(recipe_json("abc")))
            .mount(&server)
            .await;
        Mock::given(method("DELETE"))
            .and(path("/recipes/abc"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let mut app = app_for(&server.uri());
        app.dispatch(Command::ShowRecipe { id: "abc".into() }).await;
        app.dispatch(Command::Delete).await;

        assert!(app.store().state().recipe.is_none());
        assert_eq!(app.location().fragment(), None);
        assert!(region_markup(&app, "recipe").is_empty());
    }

    #[tokio::test]
    async fn quit_ends_the_session() {
        let server = MockServer::start().await;
        let mut app = app_for(&server.uri());
        assert!(!app.dispatch(Command::Quit).await);
    }
}
