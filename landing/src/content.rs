//! Display copy for the features grid and the "How It Works" explainer.
//!
//! Array order is render order.

use crate::sections::Icon;

/// One card in the features grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

/// One step of the "How It Works" sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub ordinal: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

pub const FEATURES: [Feature; 4] = [
    Feature {
        icon: Icon::Award,
        title: "Customizable Rewards",
        description: "Set your own criteria for NFT distributions",
    },
    Feature {
        icon: Icon::Bot,
        title: "Automated Distribution",
        description: "Let the bot handle reward allocation",
    },
    Feature {
        icon: Icon::BarChart,
        title: "Transparent Reporting",
        description: "Get clear insights into reward processes",
    },
    Feature {
        icon: Icon::Image,
        title: "Image Recognition",
        description: "Use images as reward criteria",
    },
];

pub const STEPS: [Step; 3] = [
    Step {
        ordinal: 1,
        title: "Set Criteria",
        description: "Define your reward rules",
        icon: Icon::Crown,
    },
    Step {
        ordinal: 2,
        title: "Bot Monitors",
        description: "AI tracks community engagement",
        icon: Icon::SquareActivity,
    },
    Step {
        ordinal: 3,
        title: "NFTs Distributed",
        description: "Rewards sent automatically",
        icon: Icon::WalletMinimal,
    },
];
