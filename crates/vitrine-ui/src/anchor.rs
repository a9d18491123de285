//! Same-page anchor links with smooth scrolling and history entries.

/// Scrolling and history operations on the host page.
pub trait ScrollView {
    fn has_target(&self, id: &str) -> bool;

    /// Smoothly scrolls the element with `id` to the top of the viewport.
    fn scroll_to(&self, id: &str);

    fn scroll_to_top(&self);

    /// Pushes a history entry whose state is `id` and whose URL is `#id`.
    fn push_entry(&self, id: &str);

    /// Id stored in the current history entry, if any.
    fn current_entry(&self) -> Option<String>;
}

/// What the host should do with a link click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkClick {
    /// Not an in-page link; let the browser handle it.
    Ignored,
    /// Default navigation must be prevented. `scrolled` is false when the
    /// target does not exist on the page.
    Handled { scrolled: bool },
}

impl LinkClick {
    pub fn prevents_default(self) -> bool {
        matches!(self, Self::Handled { .. })
    }
}

/// Element id referenced by an in-page `href`, e.g. `about` for `#about`.
/// A bare `#` or an empty href references nothing.
pub fn target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub struct AnchorNavigator<V: ScrollView> {
    view: V,
}

impl<V: ScrollView> AnchorNavigator<V> {
    pub fn new(view: V) -> Self {
        Self { view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn on_click(&self, href: &str) -> LinkClick {
        let Some(id) = target_id(href) else {
            return LinkClick::Ignored;
        };
        if !self.view.has_target(id) {
            log::debug!("anchor: no element with id {id:?}");
            return LinkClick::Handled { scrolled: false };
        }
        self.view.scroll_to(id);
        if self.view.current_entry().as_deref() != Some(id) {
            self.view.push_entry(id);
        }
        LinkClick::Handled { scrolled: true }
    }

    /// Restores the scroll position for a history entry reached with
    /// back/forward. Entries without a known id go to the top.
    pub fn on_pop(&self, state: Option<&str>) {
        match state.filter(|id| self.view.has_target(id)) {
            Some(id) => self.view.scroll_to(id),
            None => self.view.scroll_to_top(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_id_strips_hash() {
        assert_eq!(target_id("#about"), Some("about"));
        assert_eq!(target_id("#"), None);
        assert_eq!(target_id(""), None);
        assert_eq!(target_id("about.html#team"), None);
    }

    #[test]
    fn only_handled_clicks_prevent_default() {
        assert!(LinkClick::Handled { scrolled: false }.prevents_default());
        assert!(!LinkClick::Ignored.prevents_default());
    }
}
