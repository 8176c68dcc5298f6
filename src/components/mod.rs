//! Shared building blocks of the search page: the labelled inputs, the alert
//! banner, status badges and the taxpayer / establishment cards.

mod alert_banner;
pub use alert_banner::AlertBanner;

mod establishment_item;
pub use establishment_item::EstablishmentItem;

mod search_input;
pub use search_input::SearchInput;

mod status_badge;
pub use status_badge::StatusBadge;

mod taxpayer_item;
pub use taxpayer_item::TaxpayerItem;
