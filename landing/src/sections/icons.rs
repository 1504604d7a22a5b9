use leptos::prelude::*;

/// Line icons used by the feature cards and steps (24x24, stroked).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Award,
    Bot,
    BarChart,
    Image,
    Crown,
    SquareActivity,
    WalletMinimal,
}

// Rounded 18x18 frame shared by several icons
const FRAME: &str = "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z";

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::Award => "award",
            Icon::Bot => "bot",
            Icon::BarChart => "bar-chart",
            Icon::Image => "image",
            Icon::Crown => "crown",
            Icon::SquareActivity => "square-activity",
            Icon::WalletMinimal => "wallet-minimal",
        }
    }

    fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::Award => &[
                "M6 8a6 6 0 1 0 12 0a6 6 0 1 0-12 0",
                "m15.477 12.89 1.515 8.526a.5.5 0 0 1-.81.47l-3.58-2.687a1 1 0 0 0-1.197 0l-3.586 2.686a.5.5 0 0 1-.81-.469l1.514-8.526",
            ],
            Icon::Bot => &[
                "M12 8V4H8",
                "M6 8h12a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2v-8a2 2 0 0 1 2-2z",
                "M2 14h2",
                "M20 14h2",
                "M15 13v2",
                "M9 13v2",
            ],
            Icon::BarChart => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
            Icon::Image => &[
                FRAME,
                "M7 9a2 2 0 1 0 4 0a2 2 0 1 0-4 0",
                "m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21",
            ],
            Icon::Crown => &[
                "M11.562 3.266a.5.5 0 0 1 .876 0L15.39 8.87a1 1 0 0 0 1.516.294L21.183 5.5a.5.5 0 0 1 .798.519l-2.834 10.246a1 1 0 0 1-.956.734H5.81a1 1 0 0 1-.957-.734L2.02 6.02a.5.5 0 0 1 .798-.519l4.276 3.664a1 1 0 0 0 1.516-.294z",
                "M5 21h14",
            ],
            Icon::SquareActivity => &[FRAME, "M17 12h-2l-2 5-2-10-2 5H7"],
            Icon::WalletMinimal => &[
                "M17 14h.01",
                "M7 7h12a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h14",
            ],
        }
    }
}

#[component]
pub fn IconSvg(icon: Icon) -> impl IntoView {
    view! {
        <svg
            class="icon"
            data-icon=icon.name()
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            {icon.paths().iter().map(|d| view! { <path d={*d} /> }).collect_view()}
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Icon; 7] = [
        Icon::Award,
        Icon::Bot,
        Icon::BarChart,
        Icon::Image,
        Icon::Crown,
        Icon::SquareActivity,
        Icon::WalletMinimal,
    ];

    #[test]
    fn every_icon_has_path_data() {
        for icon in ALL {
            assert!(!icon.paths().is_empty(), "{icon:?}");
            assert!(icon.paths().iter().all(|d| d.starts_with(['M', 'm'])));
        }
    }

    #[test]
    fn icon_names_are_kebab_case() {
        for icon in ALL {
            let name = icon.name();
            assert!(name.chars().all(|c| c.is_ascii_lowercase() || c == '-'), "{name}");
        }
    }
}
