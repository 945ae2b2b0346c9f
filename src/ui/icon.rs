use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon name (file stem under `/icons`)
    name: &'static str,
    /// CSS classes
    #[prop(default = "icon")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_DOWN: &str = "arrow-down";
    pub const CHECK: &str = "check";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const EYE: &str = "eye";
    pub const FILE_CHECK: &str = "file-check";
    pub const LOADER: &str = "loader";
    pub const LOCK: &str = "lock";
    pub const MAIL: &str = "mail";
    pub const MENU: &str = "menu";
    pub const PLAY: &str = "play";
    pub const QUOTE: &str = "quote";
    pub const SHIELD: &str = "shield";
    pub const X: &str = "x";

    /// Every icon, for asset checks
    pub const ALL: [&str; 14] = [
        ALERT_CIRCLE,
        ARROW_DOWN,
        CHECK,
        CHEVRON_DOWN,
        EYE,
        FILE_CHECK,
        LOADER,
        LOCK,
        MAIL,
        MENU,
        PLAY,
        QUOTE,
        SHIELD,
        X,
    ];
}

#[cfg(test)]
mod tests {
    use super::icons;

    #[test]
    fn test_every_icon_has_an_asset() {
        let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public/icons");
        for name in icons::ALL {
            assert!(
                dir.join(format!("{}.svg", name)).is_file(),
                "missing public/icons/{}.svg",
                name
            );
        }
    }
}
