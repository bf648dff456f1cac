mod common;

use common::{item_input, seed_item, setup};
use reusela_backend::types::db::item::{ItemCategory, ItemStatus};
use reusela_backend::types::dto::items::ItemFilter;

const OWNER: &str = "owner-1";

fn filter() -> ItemFilter {
    ItemFilter {
        query: None,
        category: None,
        location: None,
    }
}

#[tokio::test]
async fn browse_only_shows_available_items() {
    let env = setup().await;

    let available = seed_item(&env, OWNER, "Bookshelf").await;
    let reserved = seed_item(&env, OWNER, "Armchair").await;
    let collected = seed_item(&env, OWNER, "Microwave").await;
    let expired = seed_item(&env, OWNER, "Lamp").await;

    env.items
        .set_status(&env.db, &reserved.id, ItemStatus::Reserved)
        .await
        .unwrap();
    env.items
        .set_status(&env.db, &collected.id, ItemStatus::Collected)
        .await
        .unwrap();
    env.items
        .set_status(&env.db, &expired.id, ItemStatus::Expired)
        .await
        .unwrap();

    let listed = env.items.list_available(&env.db, &filter()).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, available.id);
}

#[tokio::test]
async fn free_text_filter_matches_title_and_description() {
    let env = setup().await;

    let mut lamp = item_input("Desk Lamp");
    lamp.description = "Adjustable arm, warm white bulb included".to_string();
    env.items.insert(&env.db, OWNER, &lamp).await.unwrap();

    let mut chair = item_input("Office Chair");
    chair.description = "Mesh back with lamp-free lumbar support".to_string();
    env.items.insert(&env.db, OWNER, &chair).await.unwrap();

    seed_item(&env, OWNER, "Bookshelf").await;

    let mut f = filter();
    f.query = Some("Lamp".to_string());
    let listed = env.items.list_available(&env.db, &f).await.unwrap();

    // Matches the lamp by title and the chair by description
    assert_eq!(listed.len(), 2);
    assert!(listed.iter().all(|i| i.title != "Bookshelf"));
}

#[tokio::test]
async fn blank_free_text_filter_is_ignored() {
    let env = setup().await;
    seed_item(&env, OWNER, "Bookshelf").await;

    let mut f = filter();
    f.query = Some("   ".to_string());
    let listed = env.items.list_available(&env.db, &f).await.unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn category_filter_is_exact() {
    let env = setup().await;

    seed_item(&env, OWNER, "Bookshelf").await; // Furniture

    let mut book = item_input("Rust Programming Book");
    book.category = ItemCategory::Books;
    env.items.insert(&env.db, OWNER, &book).await.unwrap();

    let mut f = filter();
    f.category = Some(ItemCategory::Books);
    let listed = env.items.list_available(&env.db, &f).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title, "Rust Programming Book");
}

#[tokio::test]
async fn location_filter_matches_city_or_postcode() {
    let env = setup().await;

    seed_item(&env, OWNER, "Bookshelf").await; // Petaling Jaya, 47300

    let mut kl_item = item_input("Armchair");
    kl_item.city = "Kuala Lumpur".to_string();
    kl_item.postcode = "50000".to_string();
    env.items.insert(&env.db, OWNER, &kl_item).await.unwrap();

    let mut f = filter();
    f.location = Some("Petaling".to_string());
    let by_city = env.items.list_available(&env.db, &f).await.unwrap();
    assert_eq!(by_city.len(), 1);
    assert_eq!(by_city[0].title, "Bookshelf");

    f.location = Some("50000".to_string());
    let by_postcode = env.items.list_available(&env.db, &f).await.unwrap();
    assert_eq!(by_postcode.len(), 1);
    assert_eq!(by_postcode[0].title, "Armchair");
}

#[tokio::test]
async fn stats_count_the_users_items_by_status() {
    let env = setup().await;

    seed_item(&env, OWNER, "Bookshelf").await;
    seed_item(&env, OWNER, "Lamp").await;
    let reserved = seed_item(&env, OWNER, "Armchair").await;
    let collected = seed_item(&env, OWNER, "Microwave").await;

    env.items
        .set_status(&env.db, &reserved.id, ItemStatus::Reserved)
        .await
        .unwrap();
    env.items
        .set_status(&env.db, &collected.id, ItemStatus::Collected)
        .await
        .unwrap();

    // Another user's item must not leak into the stats
    seed_item(&env, "someone-else", "Kettle").await;

    let stats = env.items.stats_for_user(&env.db, OWNER).await.unwrap();
    assert_eq!(stats.total, 4);
    assert_eq!(stats.available, 2);
    assert_eq!(stats.reserved, 1);
    assert_eq!(stats.collected, 1);
}
