// Report palette
pub const PAGE_BG: &str = "#f5f5f5";
pub const CARD_BG: &str = "#f8f9fa";
pub const PANEL_BG: &str = "#e9ecef";
pub const TEXT: &str = "#333";
pub const SUBTEXT: &str = "#666";
pub const BORDER: &str = "#ddd";
pub const GREEN: &str = "#28a745";
pub const RED: &str = "#dc3545";
pub const RED_TINT: &str = "#f8d7da";
pub const BLUE: &str = "#007bff";
pub const MAUVE: &str = "#6f42c1";
pub const HEADER_GRADIENT: &str = "linear-gradient(135deg, #8B5CF6 0%, #A855F7 50%, #EC4899 100%)";
