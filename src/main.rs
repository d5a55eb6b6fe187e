use dyslexiassist::{
    AppAssets, Quit, assets, init,
    theme::{Theme, ThemeExt},
    views::{Shell, Workspace},
};
use gpui::{
    App, AppContext, Application, Bounds, Menu, MenuItem, TitlebarOptions, WindowBounds,
    WindowOptions, px, size,
};

fn main() {
    Application::new()
        .with_quit_mode(gpui::QuitMode::LastWindowClosed)
        .with_assets(assets![AppAssets])
        .run(|cx: &mut App| {
            init(cx);

            cx.set_theme(Theme::DYSLEXIA);

            cx.set_menus(vec![Menu {
                name: "DyslexiAssist".into(),
                items: vec![MenuItem::action("Quit DyslexiAssist", Quit)],
            }]);

            let bounds = Bounds::centered(None, size(px(1100.), px(760.)), cx);
            cx.open_window(
                WindowOptions {
                    window_bounds: Some(WindowBounds::Windowed(bounds)),
                    titlebar: Some(TitlebarOptions {
                        title: Some("DyslexiAssist".into()),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                |_window, cx| {
                    let workspace = cx.new(Workspace::new);
                    cx.new(|cx| Shell::new(&workspace, cx))
                },
            )
            .unwrap();

            cx.activate(true);
        });
}
