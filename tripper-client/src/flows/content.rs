//! Loaders for the gated content pages and the cart action.
//!
//! Every loader checks the session before touching the network. A missing
//! token, or a token the service rejects, turns into a redirect to the login
//! page rather than an error.

use futures::join;
use shared::{
    config::client::ClientConfig,
    models::{AddCartRequest, Category, Product, Promo, Todo},
    session::SessionStore,
};
use std::{future::Future, sync::Arc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::{api::TravelApi, error::ClientError};

/// Outcome of loading a page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageLoad<T> {
    /// No usable session; navigate to `to`.
    Redirect {
        /// Page to navigate to.
        to: String,
    },
    /// Records to render.
    Ready(T),
    /// The load failed; show `message` inline.
    Failed {
        /// Message for the page.
        message: String,
    },
}

impl<T> PageLoad<T> {
    /// Navigation target, if the page must not be shown.
    #[must_use]
    pub fn redirect(&self) -> Option<&str> {
        match self {
            Self::Redirect { to } => Some(to),
            _ => None,
        }
    }
}

/// Records shown on the home page. A failed section leaves its list empty
/// and adds a message to `errors`; the other section still renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeContent {
    /// Promotions section.
    pub promos: Vec<Promo>,
    /// Categories section.
    pub categories: Vec<Category>,
    /// One message per failed section.
    pub errors: Vec<String>,
}

/// Result of an add-to-cart click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartNotice {
    /// The service accepted the item.
    Added,
    /// The service answered with `success: false`.
    Rejected,
    /// The request did not go through.
    Failed,
    /// There is no usable session.
    LoginRequired,
}

impl CartNotice {
    /// Text for the notice banner.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Added => "Item added to the cart!",
            Self::Rejected => "Failed to add item to cart.",
            Self::Failed => "Error adding item to cart",
            Self::LoginRequired => "Please log in to add items to your cart",
        }
    }

    /// Whether the notice reports success.
    #[must_use]
    pub fn is_success(self) -> bool {
        matches!(self, Self::Added)
    }
}

/// Session-aware loaders for the content pages.
#[derive(Debug, Clone)]
pub struct ContentPages<A> {
    api: A,
    session: SessionStore,
    config: Arc<ClientConfig>,
}

impl<A: TravelApi> ContentPages<A> {
    /// Loaders reading the session from `session` before every request.
    #[must_use]
    pub fn new(api: A, session: SessionStore, config: Arc<ClientConfig>) -> Self {
        Self {
            api,
            session,
            config,
        }
    }

    fn to_login<T>(&self) -> PageLoad<T> {
        PageLoad::Redirect {
            to: self.config.login_path.clone(),
        }
    }

    /// Fetch one resource behind the session check.
    async fn guarded<T, F, Fut>(&self, what: &'static str, fetch: F) -> PageLoad<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, ClientError>>,
    {
        if !self.session.is_authenticated() {
            debug!(page = what, "no session, redirecting to login");
            return self.to_login();
        }
        match fetch().await {
            Ok(records) => PageLoad::Ready(records),
            Err(ClientError::Unauthorized) => self.to_login(),
            Err(err) => PageLoad::Failed {
                message: section_message(&err, what),
            },
        }
    }

    /// Promotions and categories, fetched concurrently, once each.
    pub async fn home(&self) -> PageLoad<HomeContent> {
        if !self.session.is_authenticated() {
            debug!(page = "home", "no session, redirecting to login");
            return self.to_login();
        }

        let (promos, categories) = join!(self.api.promos(), self.api.categories());
        if promos.as_ref().is_err_and(ClientError::is_unauthorized)
            || categories.as_ref().is_err_and(ClientError::is_unauthorized)
        {
            return self.to_login();
        }

        let mut content = HomeContent::default();
        match promos {
            Ok(promos) => content.promos = promos,
            Err(err) => content.errors.push(section_message(&err, "promotions")),
        }
        match categories {
            Ok(categories) => content.categories = categories,
            Err(err) => content.errors.push(section_message(&err, "categories")),
        }
        PageLoad::Ready(content)
    }

    /// Categories page.
    pub async fn categories(&self) -> PageLoad<Vec<Category>> {
        self.guarded("categories", || self.api.categories()).await
    }

    /// Promotions page.
    pub async fn promos(&self) -> PageLoad<Vec<Promo>> {
        self.guarded("promotions", || self.api.promos()).await
    }

    /// Demo product listing.
    pub async fn products(&self) -> PageLoad<Vec<Product>> {
        self.guarded("products", || self.api.products()).await
    }

    /// Demo product detail.
    pub async fn product(&self, id: u64) -> PageLoad<Product> {
        self.guarded("product", || self.api.product(id)).await
    }

    /// Demo todo detail.
    pub async fn todo(&self, id: u64) -> PageLoad<Todo> {
        self.guarded("todo", || self.api.todo(id)).await
    }

    /// Add one unit of `category_id` to the cart.
    ///
    /// Each call is a separate write with its own idempotency key, so two
    /// clicks produce two requests.
    pub async fn add_to_cart(&self, category_id: &str) -> CartNotice {
        if !self.session.is_authenticated() {
            return CartNotice::LoginRequired;
        }

        let idempotency_key = Uuid::new_v4();
        debug!(category_id, %idempotency_key, "adding to cart");
        match self
            .api
            .add_cart(&AddCartRequest::single(category_id), idempotency_key)
            .await
        {
            Ok(response) if response.success => {
                info!(category_id, "item added to cart");
                CartNotice::Added
            }
            Ok(response) => {
                warn!(category_id, message = ?response.message, "cart rejected item");
                CartNotice::Rejected
            }
            Err(ClientError::Unauthorized) => CartNotice::LoginRequired,
            Err(_) => CartNotice::Failed,
        }
    }

    /// Forget the session. Returns the page to navigate to.
    #[must_use]
    pub fn logout(&self) -> String {
        if let Err(err) = self.session.clear() {
            warn!(error = %err, "failed to clear session storage on logout");
        }
        info!("logged out");
        self.config.login_path.clone()
    }
}

fn section_message(err: &ClientError, what: &str) -> String {
    match err {
        ClientError::UnexpectedShape(_) => err.user_message(),
        _ => format!("Failed to load {what}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockTravelApi;
    use reqwest::StatusCode;
    use shared::{
        models::{CartResponse, ShapeError},
        session::{MemoryStorage, Session, SessionStorage, TOKEN_KEY},
    };
    use std::sync::Mutex;

    fn category(id: &str) -> Category {
        Category {
            id: id.to_string(),
            name: format!("Category {id}"),
            image_url: None,
            description: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn promo(id: &str) -> Promo {
        Promo {
            id: id.to_string(),
            title: format!("Promo {id}"),
            description: None,
            image_url: None,
            promo_code: None,
            promo_discount_price: None,
            minimum_claim_price: None,
            terms_condition: None,
            valid_until: None,
        }
    }

    fn signed_in() -> SessionStore {
        let session = SessionStore::in_memory();
        session.set(Session::new("T", "K")).unwrap();
        session
    }

    fn pages(api: MockTravelApi, session: SessionStore) -> ContentPages<MockTravelApi> {
        ContentPages::new(api, session, Arc::new(ClientConfig::new()))
    }

    #[tokio::test]
    async fn missing_token_redirects_before_any_request() {
        let mut api = MockTravelApi::new();
        api.expect_promos().never();
        api.expect_categories().never();
        api.expect_products().never();
        api.expect_product().never();
        api.expect_todo().never();
        api.expect_add_cart().never();
        let pages = pages(api, SessionStore::in_memory());

        assert_eq!(pages.home().await.redirect(), Some("/login"));
        assert_eq!(pages.categories().await.redirect(), Some("/login"));
        assert_eq!(pages.promos().await.redirect(), Some("/login"));
        assert_eq!(pages.products().await.redirect(), Some("/login"));
        assert_eq!(pages.product(1).await.redirect(), Some("/login"));
        assert_eq!(pages.todo(1).await.redirect(), Some("/login"));
        assert_eq!(pages.add_to_cart("c1").await, CartNotice::LoginRequired);
    }

    #[tokio::test]
    async fn home_fetches_each_section_once() {
        let mut api = MockTravelApi::new();
        api.expect_promos().times(1).returning(|| Ok(vec![promo("p1")]));
        api.expect_categories()
            .times(1)
            .returning(|| Ok(vec![category("c1"), category("c2")]));

        let load = pages(api, signed_in()).home().await;

        let PageLoad::Ready(content) = load else {
            panic!("expected home content, got {load:?}");
        };
        assert_eq!(content.promos.len(), 1);
        assert_eq!(content.categories.len(), 2);
        assert!(content.errors.is_empty());
    }

    #[tokio::test]
    async fn home_keeps_one_section_when_the_other_fails() {
        let mut api = MockTravelApi::new();
        api.expect_promos().times(1).returning(|| {
            Err(ClientError::UnexpectedShape(ShapeError::NotAnArray {
                what: "Promotions",
            }))
        });
        api.expect_categories()
            .times(1)
            .returning(|| Ok(vec![category("c1")]));

        let load = pages(api, signed_in()).home().await;

        let PageLoad::Ready(content) = load else {
            panic!("expected home content, got {load:?}");
        };
        assert_eq!(content.categories.len(), 1);
        assert_eq!(
            content.errors,
            ["Promotions data is not in the expected format."]
        );
    }

    #[tokio::test]
    async fn rejected_session_redirects_to_login() {
        let mut api = MockTravelApi::new();
        api.expect_categories()
            .times(1)
            .returning(|| Err(ClientError::Unauthorized));

        let load = pages(api, signed_in()).categories().await;

        assert_eq!(load.redirect(), Some("/login"));
    }

    #[tokio::test]
    async fn http_failure_is_reported_inline() {
        let mut api = MockTravelApi::new();
        api.expect_products().times(1).returning(|| {
            Err(ClientError::Status {
                status: StatusCode::BAD_GATEWAY,
                message: None,
            })
        });

        let load = pages(api, signed_in()).products().await;

        assert_eq!(
            load,
            PageLoad::Failed {
                message: "Failed to load products".to_string()
            }
        );
    }

    #[tokio::test]
    async fn two_clicks_send_two_writes_with_distinct_keys() {
        let keys = Arc::new(Mutex::new(Vec::new()));
        let mut api = MockTravelApi::new();
        {
            let keys = Arc::clone(&keys);
            api.expect_add_cart()
                .withf(|request, _| request.category_id == "c1" && request.quantity == 1)
                .times(2)
                .returning(move |_, key| {
                    keys.lock().unwrap().push(key);
                    Ok(CartResponse {
                        success: true,
                        message: None,
                    })
                });
        }
        let pages = pages(api, signed_in());

        assert_eq!(pages.add_to_cart("c1").await, CartNotice::Added);
        assert_eq!(pages.add_to_cart("c1").await, CartNotice::Added);

        let keys = keys.lock().unwrap();
        assert_eq!(keys.len(), 2);
        assert_ne!(keys[0], keys[1]);
    }

    #[tokio::test]
    async fn cart_notices_match_the_outcome() {
        let mut api = MockTravelApi::new();
        let mut answers = vec![
            Err(ClientError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: None,
            }),
            Ok(CartResponse {
                success: false,
                message: Some("out of stock".to_string()),
            }),
        ];
        api.expect_add_cart()
            .times(2)
            .returning(move |_, _| answers.pop().unwrap());
        let pages = pages(api, signed_in());

        let rejected = pages.add_to_cart("c1").await;
        assert_eq!(rejected, CartNotice::Rejected);
        assert_eq!(rejected.message(), "Failed to add item to cart.");

        let failed = pages.add_to_cart("c1").await;
        assert_eq!(failed, CartNotice::Failed);
        assert_eq!(failed.message(), "Error adding item to cart");
        assert_eq!(CartNotice::Added.message(), "Item added to the cart!");
    }

    #[tokio::test]
    async fn logout_clears_session_and_storage() {
        let storage = MemoryStorage::with_entries([("token", "T"), ("apiKey", "K")]);
        let session = SessionStore::load(storage.clone());
        let pages = pages(MockTravelApi::new(), session.clone());

        assert_eq!(pages.logout(), "/login");
        assert!(!session.is_authenticated());
        assert_eq!(storage.get(TOKEN_KEY), None);
        assert!(storage.is_empty());
    }
}
