// Typewriter pacing
pub const TYPE_TICK_MS: u64 = 100;
pub const DELETE_TICK_MS: u64 = 50;
pub const HOLD_MS: u64 = 2000;

// Skill counters
pub const COUNTER_DURATION_MS: u64 = 2000;
pub const COUNTER_TICK_MS: u64 = 16;

// Render loop
pub const FRAME_INTERVAL_MS: u64 = 16;

// Spring physics defaults
pub const SPRING_STIFFNESS: f32 = 100.0;
pub const SPRING_DAMPING: f32 = 10.0;
pub const SPRING_MASS: f32 = 1.0;
pub const SPRING_REST_DELTA: f32 = 0.001;
pub const SPRING_REST_SPEED: f32 = 0.01;
pub const SPRING_SUBSTEP_SECS: f32 = 1.0 / 240.0;

// Tilt cards
pub const TILT_MAX_ANGLE_DEG: f32 = 7.5;

// Sections count as visible once this fraction is on screen
pub const VISIBILITY_THRESHOLD: f32 = 0.1;

// Contact form
pub const CONTACT_SUBMIT_DELAY_MS: u64 = 1500;
pub const CONTACT_ACKNOWLEDGEMENT: &str = "Thank you for your message! This is a demo form.";
