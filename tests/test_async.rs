//! Async wrapper tests. Run with `--features async`.

#![cfg(feature = "async")]

mod common;

use hearthstone_catalog::{AsyncCatalogSession, CatalogSession, FilterName};

#[tokio::test]
async fn async_session_mirrors_sync_operations() {
    let session = AsyncCatalogSession::new(CatalogSession::new(common::sample_source()));

    let catalog = session.initialize().await.unwrap();
    assert_eq!(catalog.len(), 6);

    let page = session
        .apply_filter(FilterName::Classes, "Mage")
        .await
        .unwrap();
    assert_eq!(page.cards.len(), 5);

    let page = session.apply_filter(FilterName::Types, "Spell").await.unwrap();
    assert_eq!(common::ids(&page), ["EX1_277", "CS2_029", "CS2_032"]);

    assert_eq!(
        session.active_filter_names().await.unwrap(),
        [FilterName::Classes, FilterName::Types]
    );
    assert_eq!(session.page(2, 2).await.unwrap().cards.len(), 1);

    let narrowed = session.narrowed_filter_catalog().await.unwrap();
    assert_eq!(narrowed.get(FilterName::Types).unwrap(), ["Spell"]);

    let card = session.card_by_identifier("NEW_001").await.unwrap();
    assert_eq!(card.unwrap().name, "Dragonling Mechanic");

    let calls = session.run(|s| Ok(s.source().calls.clone())).await.unwrap();
    assert_eq!(calls, ["info", "classes/Mage", "cards/NEW_001"]);
}

#[tokio::test]
async fn async_operations_run_one_at_a_time() {
    let session = AsyncCatalogSession::new(CatalogSession::new(common::sample_source()));
    session.initialize().await.unwrap();
    let start = session.generation().await.unwrap();

    let first = session.clone();
    let second = session.clone();
    let (a, b) = tokio::join!(
        first.apply_filter(FilterName::Classes, "Mage"),
        second.apply_filter(FilterName::Types, "Spell"),
    );
    a.unwrap();
    b.unwrap();

    assert_eq!(session.generation().await.unwrap(), start + 2);
    let names = session.active_filter_names().await.unwrap();
    assert_eq!(names.len(), 2);
    assert_eq!(session.run(|s| Ok(s.filtered_cards().len())).await.unwrap(), 3);
}

#[tokio::test]
async fn reset_through_async_handle() {
    let session = AsyncCatalogSession::new(CatalogSession::new(common::sample_source()));
    session.initialize().await.unwrap();
    session
        .apply_filter(FilterName::Classes, "Warrior")
        .await
        .unwrap();

    let (catalog, page) = session.reset().await.unwrap();
    assert_eq!(catalog.len(), 6);
    assert!(page.paginator.is_none());
    assert!(session.active_filter_names().await.unwrap().is_empty());

    session.close().await.unwrap();
}
