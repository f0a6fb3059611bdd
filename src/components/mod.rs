//! UI Components
//!
//! Leptos components of the collector point form.

mod page_header;
mod contact_fieldset;
mod collector_map;
mod address_fieldset;
mod item_grid;

pub use page_header::PageHeader;
pub use contact_fieldset::ContactFieldset;
pub use collector_map::CollectorMap;
pub use address_fieldset::AddressFieldset;
pub use item_grid::ItemGrid;
