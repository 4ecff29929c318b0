//! Fantasix Engine - Claim eligibility view, countdown timer, and profile session

pub mod countdown;
pub mod session;
pub mod view;

pub use countdown::ClaimCountdown;
pub use session::ProfileSession;
pub use view::{
    claim_state, format_time_until_next_claim, streak_display, ClaimState, ClaimView,
    StreakDisplay,
};
