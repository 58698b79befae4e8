/// Steps per chunk in batch mode
pub const DEFAULT_CHUNK: u64 = 100;

/// File name used when the user accepts saving but gives no name
pub const DEFAULT_STATE_FILE: &str = "state.txt";

/// Answers starting with `q` end a prompt loop
#[inline]
pub fn is_quit(answer: &str) -> bool {
    matches!(answer.trim_start().chars().next(), Some('q' | 'Q'))
}

/// Answers starting with `y` or `s` (si) accept a yes/no prompt
#[inline]
pub fn is_yes(answer: &str) -> bool {
    matches!(
        answer.trim_start().chars().next(),
        Some('y' | 'Y' | 's' | 'S')
    )
}
