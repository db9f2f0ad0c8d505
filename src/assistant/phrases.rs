//! Decorative phrasing wrapped around response bodies.

use rand::seq::SliceRandom;

pub const INTRO_PHRASES: [&str; 5] = [
    "Sure thing! 🌊",
    "You've got it! Here's what I found 👇",
    "Ahoy! Here's the info you asked for:",
    "Diving into the data... 🐠",
    "Let's explore together 🌐",
];

pub const OUTRO_PHRASES: [&str; 4] = [
    "Let me know if you'd like to dive deeper! 🐬",
    "Need more ocean insights? Just ask! 🌊",
    "Wave if you want to keep exploring! 👋",
    "Always happy to chart the waters with you! ⚓",
];

/// Wrap a response body between a randomly chosen intro and outro phrase.
pub fn wrap(body: &str) -> String {
    let mut rng = rand::thread_rng();
    let intro = INTRO_PHRASES.choose(&mut rng).copied().unwrap_or(INTRO_PHRASES[0]);
    let outro = OUTRO_PHRASES.choose(&mut rng).copied().unwrap_or(OUTRO_PHRASES[0]);
    format!("{intro} {body} {outro}")
}
