//! Mock-pet generation for the mocks endpoints.

use chrono::{Duration, Utc};
use fake::faker::name::en::FirstName;
use fake::Fake;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::models::Pet;

const SPECIES: &[&str] = &[
    "dog", "cat", "rabbit", "hamster", "parrot", "turtle", "fish", "horse",
];

/// Generate `count` pets with faked names, species and past birth dates.
/// All are available for adoption; nothing is persisted here.
pub fn generate_pets(count: usize) -> Vec<Pet> {
    let mut rng = rand::rng();

    (0..count)
        .map(|_| {
            let name: String = FirstName().fake();
            let specie = SPECIES.choose(&mut rng).copied().unwrap_or("dog");
            let birth_date = Utc::now() - Duration::days(rng.random_range(30..5000));

            let pet = Pet::new(name, specie, birth_date);
            let image = format!("https://robohash.org/{}.png", pet.id);
            pet.with_image(image)
        })
        .collect()
}
