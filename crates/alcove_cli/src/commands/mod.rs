pub mod account;
pub mod browse;
pub mod config;
pub mod library;
pub mod read;
pub mod search;
pub mod subscribe;
pub mod theme;

pub use account::handle_account_command;
pub use browse::handle_browse_command;
pub use config::handle_config_command;
pub use library::{handle_library_command, handle_save_command};
pub use read::handle_read_command;
pub use search::handle_search_command;
pub use subscribe::handle_subscribe_command;
pub use theme::handle_theme_command;

use alcove_app::AppState;
use alcove_auth::DISMISS_REJECTED_MESSAGE;

use crate::render;

/// The hard gate at the command boundary: while locked, show the sign-in
/// prompt and refuse, exactly as the page surface would.
pub(crate) fn ensure_unlocked(state: &AppState) -> bool {
    if state.gate.is_locked() {
        render::render_prompt(state);
        println!("{}", DISMISS_REJECTED_MESSAGE);
        return false;
    }
    true
}
