// Landing page sections and the motion wrappers they are built from

mod background;
mod button;
mod callout;
mod entrance;
mod features;
mod footer;
mod hero;
mod how_it_works;
mod icons;
mod nav;
mod parallax;
mod reveal;
mod showcase;

pub use background::BackgroundShapes;
pub use button::{Button, ButtonSize, ButtonVariant, button_class};
pub use callout::Callout;
pub use entrance::{EntranceController, Staggered};
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use icons::{Icon, IconSvg};
pub use nav::Nav;
pub use parallax::Parallax;
pub use reveal::Reveal;
pub use showcase::Showcase;
