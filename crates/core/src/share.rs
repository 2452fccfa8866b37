/// Where the shared message sends people.
pub const SHARE_URL: &str = "myglimpsy.com";

/// Shown after the share text has been handed to the clipboard.
pub const SHARE_CONFIRMATION: &str =
    "Score copied to clipboard! Share it on your favorite social media.";

/// The message a player shares after finishing a game.
#[must_use]
pub fn share_text(score: u32, total_points: u32) -> String {
    format!(
        "I scored {score} out of {total_points} points on My Glimpsy! Can you beat me? Try it now at {SHARE_URL}"
    )
}
