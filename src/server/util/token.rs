use rand::{distr::Alphanumeric, Rng};

/// Length of generated API token keys
pub const TOKEN_KEY_LENGTH: usize = 40;

/// Generates a random alphanumeric API token key
pub fn generate_token_key() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(TOKEN_KEY_LENGTH)
        .map(char::from)
        .collect()
}
