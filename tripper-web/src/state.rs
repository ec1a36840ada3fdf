use client::flows::{CartNotice, PageLoad};
use yewdux::Store;

/// UI state derived from the session store, used to re-render the nav bar
/// when the user logs in or out.
#[derive(Debug, Default, Clone, PartialEq, Eq, Store)]
pub struct AppState {
    pub authenticated: bool,
}

impl AppState {
    /// Signed-out state if `load` shows the session is gone, e.g. after the
    /// service rejected the token.
    pub fn after_load<T>(load: &PageLoad<T>) -> Option<Self> {
        load.redirect().map(|_| Self::default())
    }

    /// Signed-out state if the cart action found no usable session.
    pub fn after_cart(notice: CartNotice) -> Option<Self> {
        (notice == CartNotice::LoginRequired).then(Self::default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirected_loads_sign_the_nav_out() {
        let redirect = PageLoad::<()>::Redirect {
            to: "/login".to_string(),
        };
        assert_eq!(
            AppState::after_load(&redirect),
            Some(AppState {
                authenticated: false
            })
        );
        assert_eq!(AppState::after_load(&PageLoad::Ready(())), None);
        assert_eq!(
            AppState::after_load(&PageLoad::<()>::Failed {
                message: "Failed to load promotions".to_string()
            }),
            None
        );
    }

    #[test]
    fn only_login_required_cart_notices_sign_out() {
        assert!(AppState::after_cart(CartNotice::LoginRequired).is_some());
        for notice in [CartNotice::Added, CartNotice::Rejected, CartNotice::Failed] {
            assert_eq!(AppState::after_cart(notice), None);
        }
    }
}
