//! GPUI elements for the console views.
//!
//! These only draw. Which entries are highlighted, what the admin page shows
//! and where links point is decided by [`sidebar`](crate::sidebar) and
//! [`admin`](crate::admin):
//!
//! - [`SideNavigationPanel`] draws a list of [`NavItem`]s under the profile
//!   header.
//! - [`SidebarView`] is a ready-made entity that reads the global
//!   [`LocationHistory`](crate::location::LocationHistory) and redraws the
//!   panel on every navigation.
//! - [`admin_detail_view`] draws an [`AdminDetailView`].
//!
//! ```ignore
//! let items = nav.items(&current_location(cx));
//! SideNavigationPanel::new(items, ProfileHeader::Skeleton)
//!     .on_navigate(|path, _window, cx| navigate(cx, path))
//!     .build()
//! ```

use crate::admin::AdminDetailView;
use crate::location::{current_location, go_back, navigate};
use crate::provider::CurrentUserProvider;
use crate::sidebar::{NavItem, NavItemKind, ProfileHeader, SideNavigation};
use crate::trace_log;
use gpui::*;
use std::rc::Rc;

/// Called with the link target when an item is clicked.
pub type NavigateHandler = Rc<dyn Fn(&str, &mut Window, &mut App)>;

/// Console palette.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleTheme {
    /// Background of the side panel.
    pub background: Rgba,
    pub text: Rgba,
    /// Active and hovered items (BL400).
    pub active: Rgba,
    /// Item icons (S500).
    pub icon: Rgba,
    /// Section headers (B100).
    pub menu_name: Rgba,
    pub skeleton: Rgba,
}

impl Default for ConsoleTheme {
    fn default() -> Self {
        Self {
            background: rgb(0xf0f2f5),
            text: rgb(0x04070d),
            active: rgb(0x1a56f0),
            icon: rgb(0x8a94a6),
            menu_name: rgb(0xb4bac6),
            skeleton: rgb(0xdfe3e8),
        }
    }
}

// ============================================================================
// Side navigation
// ============================================================================

/// Side navigation panel.
pub struct SideNavigationPanel {
    items: Vec<NavItem>,
    header: ProfileHeader,
    theme: ConsoleTheme,
    on_navigate: Option<NavigateHandler>,
}

impl SideNavigationPanel {
    pub fn new(items: Vec<NavItem>, header: ProfileHeader) -> Self {
        Self {
            items,
            header,
            theme: ConsoleTheme::default(),
            on_navigate: None,
        }
    }

    pub fn theme(mut self, theme: ConsoleTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Handle clicks on items. Without a handler items are not clickable.
    pub fn on_navigate(
        mut self,
        handler: impl Fn(&str, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_navigate = Some(Rc::new(handler));
        self
    }

    pub fn build(self) -> Div {
        let Self {
            items,
            header,
            theme,
            on_navigate,
        } = self;

        let mut list = div()
            .mt_5()
            .flex()
            .flex_col()
            .child(profile_header(&header, &theme));

        for item in items {
            list = list.child(nav_item(item, &theme, on_navigate.as_ref()));
        }

        div().size_full().bg(theme.background).child(list)
    }
}

fn profile_header(header: &ProfileHeader, theme: &ConsoleTheme) -> Div {
    let container = div().flex().items_center().px_8().h_8();
    match header {
        ProfileHeader::Skeleton => container.child(
            div()
                .h(px(18.))
                .w_32()
                .rounded_sm()
                .bg(theme.skeleton),
        ),
        ProfileHeader::Profile(user) => container
            .text_sm()
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(theme.text)
            .child(user.display_name().to_string()),
    }
}

fn nav_item(
    item: NavItem,
    theme: &ConsoleTheme,
    on_navigate: Option<&NavigateHandler>,
) -> AnyElement {
    let NavItem {
        kind,
        label,
        target_path,
        active,
    } = item;

    if let NavItemKind::Header = kind {
        return div()
            .px_8()
            .py_1()
            .mt_8()
            .text_xs()
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(theme.menu_name)
            .child(label)
            .into_any_element();
    }

    let hover_color = theme.active;
    let mut row = div()
        .flex()
        .items_center()
        .gap_4()
        .px_8()
        .py_1()
        .text_sm()
        .text_color(if active { theme.active } else { theme.text })
        .hover(move |style| style.text_color(hover_color));

    row = match kind {
        NavItemKind::Entry { icon } => row
            .child(
                svg()
                    .path(format!("icons/{}.svg", icon.to_lowercase()))
                    .size_4()
                    .text_color(theme.icon),
            )
            .child(label),
        NavItemKind::Recent { .. } => row.child(div().ml_8().child(label)),
        NavItemKind::Header => row,
    };

    if let Some(handler) = on_navigate {
        let handler = Rc::clone(handler);
        row = row
            .cursor_pointer()
            .on_mouse_down(MouseButton::Left, move |_event, window, cx| {
                trace_log!("side navigation click: '{}'", target_path);
                handler(&target_path, window, cx);
            });
    }

    row.into_any_element()
}

/// Side navigation bound to the global
/// [`LocationHistory`](crate::location::LocationHistory).
///
/// Clicking an item pushes its target onto the history.
pub struct SidebarView {
    nav: SideNavigation,
    header: ProfileHeader,
    theme: ConsoleTheme,
}

impl SidebarView {
    pub fn new(nav: SideNavigation) -> Self {
        Self {
            nav,
            header: ProfileHeader::Skeleton,
            theme: ConsoleTheme::default(),
        }
    }

    pub fn theme(mut self, theme: ConsoleTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn set_header(&mut self, header: ProfileHeader) {
        self.header = header;
    }

    /// Reload the profile header from the current-user provider.
    pub fn refresh_header(&mut self, provider: &impl CurrentUserProvider) {
        self.header = ProfileHeader::from_resource(provider.current_user());
    }

    pub fn header(&self) -> &ProfileHeader {
        &self.header
    }

    pub fn current_theme(&self) -> &ConsoleTheme {
        &self.theme
    }

    pub fn nav_mut(&mut self) -> &mut SideNavigation {
        &mut self.nav
    }
}

impl Render for SidebarView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<'_, Self>) -> impl IntoElement {
        let location = current_location(cx);

        #[cfg(feature = "cache")]
        let items = self.nav.items_cached(&location);
        #[cfg(not(feature = "cache"))]
        let items = self.nav.items(&location);

        SideNavigationPanel::new(items, self.header.clone())
            .theme(self.theme)
            .on_navigate(|path, _window, cx| navigate(cx, path))
            .build()
    }
}

// ============================================================================
// Admin detail page
// ============================================================================

/// Draw the admin detail page.
///
/// The back link goes back in the global history when there is one and
/// navigates to the view's back path otherwise.
pub fn admin_detail_view(view: &AdminDetailView, theme: &ConsoleTheme) -> Div {
    let back_path = view.back_path.clone();
    let back = div()
        .text_sm()
        .cursor_pointer()
        .text_color(theme.active)
        .child("‹ Back")
        .on_mouse_down(MouseButton::Left, move |_event, _window, cx| {
            if !go_back(cx) {
                navigate(cx, &back_path);
            }
        });

    let top_bar = div()
        .flex()
        .flex_col()
        .gap_2()
        .child(
            div()
                .text_sm()
                .text_color(theme.icon)
                .child(view.breadcrumbs.join(" / ")),
        )
        .child(
            div()
                .text_2xl()
                .font_weight(FontWeight::BOLD)
                .text_color(theme.text)
                .child(view.title.clone()),
        );

    let mut section = div().flex().flex_col().gap_2().mt_10().child(
        div()
            .text_xs()
            .font_weight(FontWeight::SEMIBOLD)
            .text_color(theme.menu_name)
            .child(view.section),
    );

    for row in &view.rows {
        let mut line = div()
            .flex()
            .items_center()
            .text_sm()
            .text_color(theme.text)
            .child(
                div()
                    .w(px(150.))
                    .font_weight(FontWeight::BOLD)
                    .child(format!("{}:", row.label)),
            )
            .child(row.value.clone());

        if row.copyable {
            let value = row.value.clone();
            line = line.child(
                div()
                    .ml_2()
                    .cursor_pointer()
                    .text_color(theme.active)
                    .child("Copy")
                    .on_mouse_down(MouseButton::Left, move |_event, _window, cx| {
                        cx.write_to_clipboard(ClipboardItem::new_string(value.clone()));
                    }),
            );
        }

        section = section.child(line);
    }

    div()
        .flex()
        .flex_col()
        .gap_4()
        .pb_5()
        .child(back)
        .child(top_bar)
        .child(section)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::{has_location, init_location};
    use crate::nav::{NavigationTree, RecentAccount};
    use crate::provider::{CurrentUser, Resource};
    use std::prelude::v1::test;

    #[test]
    fn test_theme_default() {
        let theme = ConsoleTheme::default();
        assert_ne!(theme.active, theme.text);
    }

    #[test]
    fn test_sidebar_view_theme() {
        let dark = ConsoleTheme {
            background: rgb(0x101317),
            text: rgb(0xf0f2f5),
            ..ConsoleTheme::default()
        };
        let view = SidebarView::new(SideNavigation::default()).theme(dark);
        assert_eq!(view.current_theme().background, dark.background);
        assert_eq!(view.current_theme().text, dark.text);
        assert_eq!(view.current_theme().active, ConsoleTheme::default().active);
    }

    #[gpui::test]
    async fn test_sidebar_view_follows_location(cx: &mut TestAppContext) {
        cx.update(|cx| {
            assert!(!has_location(cx));
            init_location(cx, "/accounts/acc_1");
            assert!(has_location(cx));

            let mut view = SidebarView::new(
                SideNavigation::new(NavigationTree::console())
                    .recent_accounts(vec![RecentAccount::new("Acme", "acc_1")]),
            );
            let items = view.nav_mut().items(&current_location(cx));
            let active: Vec<_> = items
                .iter()
                .filter(|item| item.active)
                .map(|item| item.label.as_str())
                .collect();
            assert_eq!(active, vec!["Accounts", "Acme"]);

            assert_eq!(view.header(), &ProfileHeader::Skeleton);
            view.refresh_header(&Resource::loaded(CurrentUser {
                id: "usr_1".to_string(),
                email: "ops@example.com".to_string(),
                username: None,
            }));
            assert!(matches!(view.header(), ProfileHeader::Profile(_)));
        });
    }
}
