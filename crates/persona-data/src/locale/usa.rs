//! United States locale: QWERTY keyboard and Latin alphabet.
//!
//! Names, addresses, and phone numbers for this region come from the `fake`
//! crate's English data set.

pub(crate) const KEYBOARD_ROWS: &[&str] = &[
    "1234567890-",
    "qwertyuiop[",
    "asdfghjkl;'",
    "zxcvbnm,./",
];

pub(crate) const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
