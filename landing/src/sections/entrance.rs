use crate::config::{ENTRANCE_OFFSET_PX, STAGGER_DURATION_SECS, STAGGER_INTERVAL_SECS};
use crate::motion::dom::use_mounted;
use crate::motion::{Entrance, stagger};
use leptos::prelude::*;

/// Shared mount flag driving every [`Staggered`] block on the page.
///
/// Created once by the page and handed down through context; block `i`
/// starts its entrance `i * STAGGER_INTERVAL_SECS` after mount.
#[derive(Debug, Clone, Copy)]
pub struct EntranceController {
    mounted: Signal<bool>,
}

impl EntranceController {
    pub fn on_mount() -> Self {
        Self {
            mounted: use_mounted().into(),
        }
    }

    /// A controller whose entrance has already finished.
    pub fn settled() -> Self {
        Self {
            mounted: Signal::derive(|| true),
        }
    }

    pub fn entrance(&self, index: usize) -> Entrance {
        Entrance::new(
            ENTRANCE_OFFSET_PX,
            stagger(index, STAGGER_INTERVAL_SECS, STAGGER_DURATION_SECS),
        )
    }

    pub fn style(&self, index: usize) -> String {
        self.entrance(index).style(self.mounted.get())
    }
}

#[component]
pub fn Staggered(
    index: usize,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let controller =
        use_context::<EntranceController>().unwrap_or_else(EntranceController::settled);

    view! {
        <div class=class style=move || controller.style(index)>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settled_controller_renders_final_state() {
        let controller = EntranceController::settled();
        let style = controller.style(4);
        assert!(style.starts_with("opacity: 1; transform: translateY(0px);"));
        assert!(style.contains("opacity 0.30s ease-out 0.80s"));
    }

    #[test]
    fn entrance_delay_follows_index() {
        let controller = EntranceController::settled();
        assert_eq!(controller.entrance(0).transition.delay, 0.0);
        assert!((controller.entrance(7).transition.delay - 1.4).abs() < 1e-9);
    }

    #[test]
    fn controller_before_mount_hides_blocks() {
        let controller = EntranceController::on_mount();
        assert_eq!(controller.style(2), "opacity: 0; transform: translateY(20px);");
    }
}
