// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod filter_bar;
pub mod form_select;
pub mod input;

// Primitive wrappers
pub mod confirm_dialog;
pub mod toast;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use confirm_dialog::*;
pub use data_table::*;
pub use filter_bar::*;
pub use form_select::*;
pub use input::*;
pub use toast::*;
