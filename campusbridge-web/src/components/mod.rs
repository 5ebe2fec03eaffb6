pub(crate) mod course_card;
pub(crate) mod header_nav_item;
pub(crate) mod loading;
pub(crate) mod promo_banner;
pub(crate) mod toast_host;
pub(crate) mod user_dropdown;
