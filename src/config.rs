/// Telegram handoff channel; every call-to-action points here.
pub const TELEGRAM_URL: &str = "https://t.me/jyldambot";

/// Demo video embedded in the modal.
pub const DEMO_VIDEO_URL: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ";

/// Brand name shown in the nav and footer.
pub const BRAND: &str = "birqadam.kz";
