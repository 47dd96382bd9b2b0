pub const WINDOW_WIDTH: i32 = 430;            // Portrait, phone-sized window
pub const WINDOW_HEIGHT: i32 = 860;
pub const MIN_WINDOW_WIDTH: i32 = 320;        // Below this the card and order form no longer fit
pub const MIN_WINDOW_HEIGHT: i32 = 560;
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds), also the progress poll interval
pub const MAX_FRAME_TIME: f32 = 0.1;          // Clamp for long frames (window drag, breakpoints)

pub const STORY_DURATION: f32 = 3.0;          // Duration each story is shown (seconds)
pub const SLIDE_ANIMATION_DURATION: f32 = 0.35; // Enter/exit slide animation (seconds)

pub const STORY_SWIPE_THRESHOLD: f32 = 10_000.0;
pub const CAROUSEL_SWIPE_THRESHOLD: f32 = 5_000.0;
pub const TAP_SLOP: f32 = 10.0;               // Max pointer travel (px) for a press to count as a tap
pub const VELOCITY_SMOOTHING: f32 = 0.6;      // Weight of the newest sample in the drag velocity

pub const PRODUCT_NAME: &str = "Dumpling";
pub const PRODUCT_PRICE: u64 = 12_000;        // Rupiah
pub const PRODUCT_DESC: &str = "Dumpling isi ayam, cocok untuk cemilan atau teman makan nasi!";
pub const WHATSAPP_NUMBER: &str = "62895383307167";
pub const WHATSAPP_SEND_URL: &str = "https://api.whatsapp.com/send";
pub const ORDER_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbxh5QWaPh0YAkUhLblgSSq-CVQALmMPtJFZNMe100rUmkwJjH4dvHJciTBnKfsurKJ8/exec";
pub const SUBMIT_TIMEOUT_SECS: u64 = 15;

pub const SUBMIT_FAILED_ALERT: &str = "Terjadi kesalahan, silakan coba lagi.";
pub const MISSING_FIELDS_ALERT: &str = "Lengkapi semua data pesanan dulu ya.";
