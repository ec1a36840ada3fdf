//! Process-wide services shared by every page.
//!
//! Built once on first use: the session is read from browser storage a
//! single time and the same [`SessionStore`] is handed to the API client and
//! to every flow, so a login or logout is visible everywhere at once.

use client::{
    TravelClient,
    flows::{ContentPages, LoginFlow, RegisterFlow},
};
use once_cell::unsync::OnceCell;
use shared::{config::client::ClientConfig, gate::GatePolicy, session::SessionStore};
use std::{fmt, rc::Rc, sync::Arc};

use crate::storage::BrowserStorage;

thread_local! {
    static SERVICES: OnceCell<Result<Services, String>> = const { OnceCell::new() };
}

struct Inner {
    session: SessionStore,
    gate: GatePolicy,
    login: LoginFlow<TravelClient>,
    register: RegisterFlow<TravelClient>,
    pages: ContentPages<TravelClient>,
}

/// Handle to the shared services. Cheap to clone; equal when it points at
/// the same instance.
#[derive(Clone)]
pub struct Services {
    inner: Rc<Inner>,
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services")
            .field("session", &self.inner.session)
            .field("gate", &self.inner.gate)
            .finish_non_exhaustive()
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Services {
    /// The shared instance, or the reason it could not be built.
    ///
    /// # Errors
    /// Returns a message when the API client cannot be constructed.
    pub fn shared() -> Result<Self, String> {
        SERVICES.with(|cell| cell.get_or_init(Self::build).clone())
    }

    fn build() -> Result<Self, String> {
        let config = ClientConfig::new();
        let session = SessionStore::load(BrowserStorage);
        let api = TravelClient::new(config.clone(), session.clone())
            .map_err(|err| err.to_string())?;
        let config = Arc::new(config);

        Ok(Self {
            inner: Rc::new(Inner {
                login: LoginFlow::new(api.clone(), session.clone(), Arc::clone(&config)),
                register: RegisterFlow::new(api.clone(), Arc::clone(&config)),
                pages: ContentPages::new(api, session.clone(), Arc::clone(&config)),
                gate: GatePolicy::default(),
                session,
            }),
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.inner.session
    }

    pub fn gate(&self) -> &GatePolicy {
        &self.inner.gate
    }

    pub fn login(&self) -> &LoginFlow<TravelClient> {
        &self.inner.login
    }

    pub fn register(&self) -> &RegisterFlow<TravelClient> {
        &self.inner.register
    }

    pub fn pages(&self) -> &ContentPages<TravelClient> {
        &self.inner.pages
    }
}
