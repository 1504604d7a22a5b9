// Site-wide constants (single source of truth for copy, links and timing)

/// Brand shown in the nav bar and footer.
pub const BRAND: &str = "NFT Reward Bot";

/// Hero heading.
pub const TITLE: &str = "NFT Reward Distribution Bot";

/// Hero subheading.
pub const TAGLINE: &str = "Gamify your Discord community with automated NFT rewards";

// Literal sources for the Discord constants; `concat!` only takes literals.
macro_rules! discord_client_id {
    () => {
        "1288094717824860181"
    };
}

macro_rules! discord_authorize_endpoint {
    () => {
        "https://discord.com/oauth2/authorize"
    };
}

/// Application id registered with Discord.
pub const DISCORD_CLIENT_ID: &str = discord_client_id!();

/// OAuth2 authorize endpoint the "Add to Discord" button opens.
pub const DISCORD_AUTHORIZE_ENDPOINT: &str = discord_authorize_endpoint!();

/// Full install link: the authorize endpoint with our client id.
pub const DISCORD_AUTHORIZE_URL: &str =
    concat!(discord_authorize_endpoint!(), "?client_id=", discord_client_id!());

/// Showcase illustration.
pub const SHOWCASE_IMAGE: &str = "/placeholder.svg?height=400&width=600";

pub const COPYRIGHT_YEAR: u16 = 2023;

/// Number of floating shapes in the page background.
pub const SHAPE_COUNT: usize = 20;

/// Seconds between consecutive staggered entrances.
pub const STAGGER_INTERVAL_SECS: f64 = 0.2;

/// Duration of one staggered entrance.
pub const STAGGER_DURATION_SECS: f64 = 0.3;

/// Duration of the reveal wrapper's mount transition.
pub const REVEAL_DURATION_SECS: f64 = 0.5;

/// Vertical offset (px) every entrance starts from.
pub const ENTRANCE_OFFSET_PX: f64 = 20.0;
