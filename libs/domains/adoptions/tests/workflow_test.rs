//! Handler tests for the adoptions domain, centered on the adoption
//! workflow: check user, check pet, check adopted flag, then the three
//! writes in order.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::Utc;
use domain_adoptions::{handlers, Adoption, AdoptionRepository};
use domain_pets::{Pet, PetRepository};
use domain_users::{User, UserRepository};
use http_body_util::BodyExt;
use mongodb::bson::doc;
use serde_json::Value;
use test_utils::{MemoryAdapter, TestDataBuilder};
use tower::ServiceExt;
use uuid::Uuid;

async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

struct World {
    app: Router,
    users: UserRepository<MemoryAdapter<User>>,
    pets: PetRepository<MemoryAdapter<Pet>>,
    adoptions: AdoptionRepository<MemoryAdapter<Adoption>>,
}

fn world() -> World {
    let users_adapter = MemoryAdapter::<User>::new();
    let pets_adapter = MemoryAdapter::<Pet>::new();
    let adoptions_adapter = MemoryAdapter::<Adoption>::new();

    let app = handlers::router(
        UserRepository::new(users_adapter.clone()),
        PetRepository::new(pets_adapter.clone()),
        AdoptionRepository::new(adoptions_adapter.clone()),
    );

    World {
        app,
        users: UserRepository::new(users_adapter),
        pets: PetRepository::new(pets_adapter),
        adoptions: AdoptionRepository::new(adoptions_adapter),
    }
}

async fn seed_user(world: &World, email: &str) -> User {
    world
        .users
        .create(User::new("Jane", "Doe", email, "hash"))
        .await
        .unwrap()
}

async fn seed_pet(world: &World, name: &str) -> Pet {
    world
        .pets
        .create(Pet::new(name, "dog", Utc::now()))
        .await
        .unwrap()
}

fn adopt_request(uid: impl std::fmt::Display, pid: impl std::fmt::Display) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("/{}/{}", uid, pid))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_adoption_workflow_links_all_three_entities() {
    let world = world();
    let user = seed_user(&world, "a@test.com").await;
    let pet = seed_pet(&world, "Rex").await;

    let response = world
        .app
        .clone()
        .oneshot(adopt_request(user.id, pet.id))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Pet adopted");

    // Pet is adopted and owned by the user
    let stored_pet = world.pets.get_pet_by_id(pet.id).await.unwrap().unwrap();
    assert!(stored_pet.adopted);
    assert_eq!(stored_pet.owner, Some(user.id));

    // The user's pets sequence references the pet
    let stored_user = world.users.get_user_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(stored_user.pets.len(), 1);
    assert_eq!(stored_user.pets[0].id, pet.id);

    // Exactly one adoption record exists, linking the two
    let records = world.adoptions.get_all().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].owner, user.id);
    assert_eq!(records[0].pet, pet.id);
}

#[tokio::test]
async fn test_adopting_twice_is_rejected() {
    let world = world();
    let user = seed_user(&world, "a@test.com").await;
    let other = seed_user(&world, "b@test.com").await;
    let pet = seed_pet(&world, "Rex").await;

    let first = world
        .app
        .clone()
        .oneshot(adopt_request(user.id, pet.id))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    // Rejected regardless of requester
    let second = world
        .app
        .clone()
        .oneshot(adopt_request(other.id, pet.id))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    let body = json_body(second.into_body()).await;
    assert_eq!(body["error"], "Pet is already adopted");

    // State is unchanged by the rejected attempt
    let stored_pet = world.pets.get_pet_by_id(pet.id).await.unwrap().unwrap();
    assert_eq!(stored_pet.owner, Some(user.id));
    assert_eq!(world.adoptions.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_adoption_with_unknown_user_writes_nothing() {
    let world = world();
    let pet = seed_pet(&world, "Rex").await;
    let builder = TestDataBuilder::from_test_name("adoption_unknown_user");

    let response = world
        .app
        .clone()
        .oneshot(adopt_request(builder.user_id(), pet.id))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "User not found or invalid");

    // Existence checks run before any write
    let stored_pet = world.pets.get_pet_by_id(pet.id).await.unwrap().unwrap();
    assert!(!stored_pet.adopted);
    assert!(world.adoptions.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_adoption_with_unknown_pet_writes_nothing() {
    let world = world();
    let user = seed_user(&world, "a@test.com").await;
    let builder = TestDataBuilder::from_test_name("adoption_unknown_pet");

    let response = world
        .app
        .clone()
        .oneshot(adopt_request(user.id, builder.user_id()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "Pet not found or invalid");

    let stored_user = world.users.get_user_by_id(user.id).await.unwrap().unwrap();
    assert!(stored_user.pets.is_empty());
}

#[tokio::test]
async fn test_adoption_with_malformed_id_is_400() {
    let world = world();
    let pet = seed_pet(&world, "Rex").await;

    let response = world
        .app
        .clone()
        .oneshot(adopt_request("not-a-uuid", pet.id))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_second_adoption_appends_to_pets_sequence() {
    let world = world();
    let user = seed_user(&world, "a@test.com").await;
    let rex = seed_pet(&world, "Rex").await;
    let mia = seed_pet(&world, "Mia").await;

    world
        .app
        .clone()
        .oneshot(adopt_request(user.id, rex.id))
        .await
        .unwrap();
    world
        .app
        .clone()
        .oneshot(adopt_request(user.id, mia.id))
        .await
        .unwrap();

    // Pet references accumulate in adoption order
    let stored_user = world.users.get_user_by_id(user.id).await.unwrap().unwrap();
    let ids: Vec<Uuid> = stored_user.pets.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![rex.id, mia.id]);
}

#[tokio::test]
async fn test_get_all_adoptions() {
    let world = world();
    let user = seed_user(&world, "a@test.com").await;
    let pet = seed_pet(&world, "Rex").await;

    world
        .app
        .clone()
        .oneshot(adopt_request(user.id, pet.id))
        .await
        .unwrap();

    let response = world
        .app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    let records = body["payload"].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["owner"], user.id.to_string());
    assert_eq!(records[0]["pet"], pet.id.to_string());
}

#[tokio::test]
async fn test_get_adoption_by_id() {
    let world = world();
    let user = seed_user(&world, "a@test.com").await;
    let pet = seed_pet(&world, "Rex").await;

    world
        .app
        .clone()
        .oneshot(adopt_request(user.id, pet.id))
        .await
        .unwrap();

    let record = world
        .adoptions
        .get_by(doc! { "pet": pet.id.to_string() })
        .await
        .unwrap()
        .unwrap();

    let response = world
        .app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/{}", record.id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["payload"]["owner"], user.id.to_string());
}

#[tokio::test]
async fn test_get_unknown_adoption_is_404() {
    let world = world();
    let builder = TestDataBuilder::from_test_name("adoption_get_unknown");

    let response = world
        .app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/{}", builder.user_id()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "Adoption not found");
}
