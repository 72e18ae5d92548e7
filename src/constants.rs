/// Particle and page tuning constants.
///
/// These constants express intended behavior (lifetimes, spawn odds, bounds
/// margins, scroll offsets) and keep magic numbers out of the code.
// Sparkles
pub const SPARKLE_MAX_LIFE: u32 = 100;
pub const SPARKLE_GRAVITY: f64 = 0.05; // added to dy every frame
pub const SPARKLE_SIZE_MIN: f64 = 1.0;
pub const SPARKLE_SIZE_SPAN: f64 = 3.0;
pub const SPARKLE_SPEED_SPAN: f64 = 2.0; // dx, dy in [-1, 1)
pub const SPARKLE_ROTATION_SPEED_SPAN: f64 = 10.0; // degrees per frame, centered on 0
pub const SPARKLE_SPIKES: usize = 4;
pub const SPARKLE_GLOW_BLUR: f64 = 10.0;
pub const SPARKLE_GLOW_ALPHA: f64 = 0.8;

// Spawn odds and limits
pub const AMBIENT_SPAWN_CHANCE: f64 = 0.1; // per frame
pub const POINTER_SPAWN_CHANCE: f64 = 0.5; // per mousemove
pub const CLICK_BURST_COUNT: usize = 8;
pub const SPARKLE_CEILING: usize = 150;

// Light orbs
pub const ORB_COUNT: usize = 15;
pub const ORB_MARGIN: f64 = 50.0; // respawn distance past the edges
pub const ORB_RADIUS_MIN: f64 = 2.0;
pub const ORB_RADIUS_SPAN: f64 = 3.0;
pub const ORB_RISE_MIN: f64 = 0.3;
pub const ORB_RISE_SPAN: f64 = 0.5;
pub const ORB_DRIFT_SPAN: f64 = 0.5;
pub const ORB_OPACITY_MIN: f64 = 0.2;
pub const ORB_OPACITY_SPAN: f64 = 0.3;
pub const ORB_PULSE_SPEED_MIN: f64 = 0.01;
pub const ORB_PULSE_SPEED_SPAN: f64 = 0.02;
pub const ORB_PULSE_DEPTH: f64 = 0.2; // pulse = sin(phase) * depth + (1 - depth)
pub const ORB_GLOW_SCALE: f64 = 3.0;

// Sparkle palette (gold, bright gold, light gold, white, cornsilk)
pub const SPARKLE_PALETTE: [[u8; 3]; 5] = [
    [212, 175, 55],
    [255, 215, 0],
    [255, 223, 186],
    [255, 255, 255],
    [255, 248, 220],
];

// Navigation
pub const SCROLL_SPY_OFFSET: f64 = 100.0; // navbar height
pub const ANCHOR_SCROLL_OFFSET: f64 = 80.0;
pub const NAVBAR_SHADOW_THRESHOLD: f64 = 100.0;
pub const NAVBAR_SHADOW_RAISED: &str = "0 4px 30px rgba(0, 0, 0, 0.1)";
pub const NAVBAR_SHADOW_RESTING: &str = "0 2px 20px rgba(0, 0, 0, 0.05)";

// Reveal-on-view
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

// Collapsible sections
pub const COLLAPSE_DELAY_MS: i32 = 400; // matches the CSS hide animation

// Countdown: 2026-01-03T18:00:00+08:00
pub const COUNTDOWN_TARGET_MS: f64 = 1_767_434_400_000.0;
pub const COUNTDOWN_TICK_MS: i32 = 1000;
pub const COUNTDOWN_FINISHED_TITLE: &str = "The Celebration Has Begun!";

// Host document ids and selectors
pub const CANVAS_ID: &str = "sparkleCanvas";
pub const NAV_TOGGLE_ID: &str = "navToggle";
pub const NAV_MENU_ID: &str = "navMenu";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const REVEAL_SELECTOR: &str = ".milestone-card, .detail-box, .gallery-item";
pub const TRADITION_TOGGLE_SELECTOR: &str = ".tradition-toggle";
pub const MAP_TOGGLE_SELECTOR: &str = ".map-toggle-btn";
pub const MAP_IFRAME_SELECTOR: &str = ".map-iframe";
pub const MAP_VIEW_ID: &str = "mapView";
pub const STREET_VIEW_ID: &str = "streetView";
pub const COUNTDOWN_FIELD_IDS: [&str; 4] = ["days", "hours", "minutes", "seconds"];
pub const COUNTDOWN_TITLE_SELECTOR: &str = ".countdown-title";
pub const ACTIVE_CLASS: &str = "active";
