pub(crate) mod category_card;
pub(crate) mod layout;
pub(crate) mod loading;
pub(crate) mod nav;
pub(crate) mod notice;
pub(crate) mod page_view;
pub(crate) mod promo_card;

pub use category_card::CategoryCard;
pub use layout::Layout;
pub use loading::Loading;
pub use nav::Nav;
pub use notice::{Notice, NoticeKind};
pub use page_view::page_view;
pub use promo_card::PromoCard;
