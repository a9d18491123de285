//! Collapsible navigation menu.

/// Renders the menu's open state: the control, the navigation panel, the
/// overlay, the control's expanded flag and the page scroll lock.
pub trait MenuView {
    fn render(&self, open: bool);
}

pub struct MenuController<V: MenuView> {
    view: V,
    open: bool,
}

impl<V: MenuView> MenuController<V> {
    /// Starts closed. Nothing is rendered until the first interaction.
    pub fn new(view: V) -> Self {
        Self { view, open: false }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        log::debug!("menu: {}", if self.open { "open" } else { "closed" });
        self.view.render(self.open);
    }

    /// Closes the menu. Always re-renders, so a stray scroll lock is cleared too.
    pub fn close(&mut self) {
        self.open = false;
        self.view.render(false);
    }
}
