//! Local UI chrome state (theme, header menu).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the auth and fetch state so
//! the header can evolve independently of data loading.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// UI state shared through context by the layout shell.
#[derive(Clone, Debug)]
pub struct UiState {
    pub dark_mode: bool,
    pub user_menu_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { dark_mode: true, user_menu_open: false }
    }
}

impl UiState {
    pub fn toggle_user_menu(&mut self) {
        self.user_menu_open = !self.user_menu_open;
    }

    pub fn close_menus(&mut self) {
        self.user_menu_open = false;
    }
}
