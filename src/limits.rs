//! Size limit constants for input validation

/// Default maximum length for a token string (64KB)
///
/// Longer input is rejected as malformed before it is split or decoded.
/// Override per parser with [`Parser::max_token_length`](crate::Parser::max_token_length).
pub const MAX_TOKEN_LENGTH: usize = 64 * 1024;
