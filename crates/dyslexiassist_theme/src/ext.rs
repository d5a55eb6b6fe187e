use gpui::App;

use crate::{ActiveVariantId, Theme, ThemeVariantKind};

/// Extension trait for accessing and modifying the global theme.
///
/// These methods are the only writers of the [`Theme`] and
/// [`ActiveVariantId`] globals. Switching the theme or the variant does not
/// re-render anything on its own; the caller notifies its own entities.
pub trait ThemeExt {
    /// Changes the theme and resets the active variant to the first one.
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T);

    /// Gets an immutable reference to the theme.
    fn get_theme(&self) -> &Theme;

    /// Activates the first variant of the given kind. Returns false when the
    /// current theme has no variant of that kind, leaving the selection
    /// unchanged.
    fn set_active_variant(&mut self, kind: ThemeVariantKind) -> bool;
}

impl ThemeExt for App {
    fn set_theme<T: AsRef<Theme>>(&mut self, theme: T) {
        self.set_global::<Theme>(theme.as_ref().clone());
        self.set_global(ActiveVariantId(0));
    }

    fn get_theme(&self) -> &Theme {
        self.global()
    }

    fn set_active_variant(&mut self, kind: ThemeVariantKind) -> bool {
        let id = self
            .get_theme()
            .variants
            .variants
            .iter()
            .position(|variant| variant.kind == kind);

        match id {
            Some(id) => {
                self.set_global(ActiveVariantId(id));
                true
            }
            None => false,
        }
    }
}

#[cfg(all(test, feature = "test-support"))]
mod tests {
    use super::*;
    use gpui::TestAppContext;

    #[gpui::test]
    fn test_set_and_get_theme(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DYSLEXIA);
            let theme = cx.get_theme();
            assert!(!theme.name.is_empty(), "Theme should have a name");
        });
    }

    #[gpui::test]
    fn test_set_theme_activates_first_variant(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DYSLEXIA);

            let active = cx.get_theme().variants.active(cx);
            assert_eq!(
                active.kind,
                ThemeVariantKind::Light,
                "First variant should be active after set_theme"
            );
        });
    }

    #[gpui::test]
    fn test_set_active_variant_switches_palette(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DYSLEXIA);

            let light_background = cx.get_theme().variants.active(cx).palette.background.default;

            assert!(cx.set_active_variant(ThemeVariantKind::Dark));
            let dark_background = cx.get_theme().variants.active(cx).palette.background.default;

            assert_ne!(
                light_background, dark_background,
                "Dark variant should change the background role"
            );

            assert!(cx.set_active_variant(ThemeVariantKind::Light));
            assert_eq!(
                cx.get_theme().variants.active(cx).palette.background.default,
                light_background,
                "Switching back should restore the light background"
            );
        });
    }

    #[gpui::test]
    fn test_set_active_variant_missing_kind(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let mut theme = Theme::DYSLEXIA.clone();
            theme.variants.variants.truncate(1);
            cx.set_theme(&theme);

            assert!(
                !cx.set_active_variant(ThemeVariantKind::Dark),
                "A single-variant theme has no dark variant to activate"
            );
            assert_eq!(
                cx.get_theme().variants.active(cx).kind,
                ThemeVariantKind::Light,
                "Selection should be unchanged after a failed switch"
            );
        });
    }

    #[gpui::test]
    fn test_set_theme_resets_variant_selection(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DYSLEXIA);
            assert!(cx.set_active_variant(ThemeVariantKind::Dark));

            cx.set_theme(Theme::DYSLEXIA);
            assert_eq!(
                cx.get_theme().variants.active(cx).kind,
                ThemeVariantKind::Light,
                "set_theme should reset to the first variant"
            );
        });
    }

    #[gpui::test]
    fn test_active_variant_clamps_out_of_range_ids(cx: &mut TestAppContext) {
        cx.update(|cx| {
            cx.set_theme(Theme::DYSLEXIA);
            cx.set_global(ActiveVariantId(42));

            let active = cx.get_theme().variants.active(cx);
            assert_eq!(
                active.kind,
                ThemeVariantKind::Light,
                "Out-of-range ids should fall back to the first variant"
            );
        });
    }

    #[gpui::test]
    fn test_theme_as_ref(cx: &mut TestAppContext) {
        cx.update(|cx| {
            let theme = Theme::DYSLEXIA;
            let theme_ref: &Theme = theme.as_ref();
            assert!(!theme_ref.name.is_empty(), "Theme ref should have a name");

            cx.set_theme(Theme::DYSLEXIA);
            let retrieved = cx.get_theme();
            assert_eq!(retrieved.name, theme.name, "Theme names should match");
        });
    }
}
