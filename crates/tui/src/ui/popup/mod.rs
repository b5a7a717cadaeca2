//! Modal popup dialogs.
//!
//! Responsibilities:
//! - Define the `Popup` value and its builder.
//! - Render popups centered over the main screen.
//!
//! Does NOT handle:
//! - Deciding when a popup opens or closes (see `crate::ui::notify`).
//! - Key handling inside popups (see `crate::app::input`).

mod builder;
mod render;
mod types;

pub use builder::{Popup, PopupBuilder};
pub use render::{
    centered_rect, dialog_lines, popup_area, popup_viewport, render_popup, wrap_dialog_text,
};
pub use types::PopupType;
