//! Named colors of the dashboard figures

use olympics_data::{Medal, Season, Sex};

/// D3 category10, first eight
pub const CATEGORY10: [&str; 8] = [
    "#1F77B4", "#FF7F0E", "#2CA02C", "#D62728", "#9467BD", "#8C564B", "#E377C2", "#7F7F7F",
];

/// Ten-step Viridis
pub const VIRIDIS: [&str; 10] = [
    "#440154", "#482878", "#3E4989", "#31688E", "#26828E", "#1F9E89", "#35B779", "#6ECE58",
    "#B5DE2B", "#FDE725",
];

/// ColorBrewer Set1
pub const SET1: [&str; 9] = [
    "#E41A1C", "#377EB8", "#4DAF4A", "#984EA3", "#FF7F00", "#FFFF33", "#A65628", "#F781BF",
    "#999999",
];

pub const GOLD: &str = "#DABE1E";
pub const SILVER: &str = "#C0C0C0";
pub const BRONZE: &str = "#CD7F32";

pub const GREY: &str = "#808080";
pub const ORANGE: &str = "#FFA500";
pub const GREEN: &str = "#008000";
pub const RED: &str = "#FF0000";
pub const BLACK: &str = "#000000";
pub const BLUE: &str = "#0000FF";
pub const SKYBLUE: &str = "#87CEEB";
pub const STEELBLUE: &str = "#4682B4";
pub const HOTPINK: &str = "#FF69B4";
pub const LIGHTGREEN: &str = "#90EE90";

pub fn medal_color(medal: Medal) -> &'static str {
    match medal {
        Medal::Gold => GOLD,
        Medal::Silver => SILVER,
        Medal::Bronze => BRONZE,
    }
}

/// Pie slice colors: grey for men, orange for women
pub fn sex_slice_color(sex: Sex) -> &'static str {
    match sex {
        Sex::M => GREY,
        Sex::F => ORANGE,
    }
}

/// Set1 red and blue, in season order
pub fn season_color(season: Season) -> &'static str {
    match season {
        Season::Summer => SET1[0],
        Season::Winter => SET1[1],
    }
}

/// Cycle through category10
pub fn category_color(index: usize) -> &'static str {
    CATEGORY10[index % CATEGORY10.len()]
}
