//! Mock-user generation for the mocks endpoints.

use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rand::Rng;

use crate::models::User;

/// Plaintext password shared by all generated users
pub const MOCK_PASSWORD: &str = "secret123";

/// Generate `count` users with faked names/emails and the given password
/// hash. Roughly one in five is an admin. Nothing is persisted here.
pub fn generate_users(count: usize, password_hash: &str) -> Vec<User> {
    let mut rng = rand::rng();

    (0..count)
        .map(|_| {
            let first_name: String = FirstName().fake();
            let last_name: String = LastName().fake();
            let email: String = SafeEmail().fake();

            let mut user = User::new(first_name, last_name, email, password_hash);
            if rng.random_bool(0.2) {
                user.role = "admin".to_string();
            }
            user
        })
        .collect()
}
