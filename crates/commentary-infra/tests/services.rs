//! Service behaviour against the in-memory store.

use commentary_core::DomainError;
use commentary_core::ports::{UnitOfWork, UnitOfWorkFactory};
use commentary_core::services::{comments, posts, users};
use commentary_infra::InMemoryStore;
use uuid::Uuid;

async fn uow(store: &InMemoryStore) -> Box<dyn UnitOfWork> {
    UnitOfWorkFactory::begin(store).await.unwrap()
}

fn is_not_found(err: &DomainError) -> bool {
    matches!(err, DomainError::NotFound { .. })
}

fn is_validation(err: &DomainError) -> bool {
    matches!(err, DomainError::Validation(_))
}

#[tokio::test]
async fn test_scenario_user_post_comment() {
    let store = InMemoryStore::new();

    let alice = users::create(uow(&store).await, "alice").await.unwrap();
    let all_users = users::get_all(uow(&store).await).await.unwrap();
    assert_eq!(all_users.len(), 1);
    assert_eq!(all_users[0].nickname, "alice");

    let post = posts::create(uow(&store).await, alice.id, "hello").await.unwrap();
    let by_user = posts::get_by_user_id(uow(&store).await, alice.id).await.unwrap();
    assert_eq!(by_user, vec![post.clone()]);

    let comment = comments::create(uow(&store).await, "nice", alice.id, post.id)
        .await
        .unwrap();
    let by_post = comments::get_by_post_id(uow(&store).await, post.id).await.unwrap();
    assert_eq!(by_post, vec![comment.clone()]);

    let pair = comments::get_by_post_and_user(uow(&store).await, post.id, alice.id)
        .await
        .unwrap();
    assert_eq!(pair, vec![comment.clone()]);

    posts::delete(uow(&store).await, post.id).await.unwrap();

    // Comments go with their post; asking for them is not an error.
    let orphaned = comments::get_by_post_id(uow(&store).await, post.id).await.unwrap();
    assert!(orphaned.is_empty());
    let err = comments::get_by_id(uow(&store).await, comment.id).await.unwrap_err();
    assert!(is_not_found(&err));
}

#[tokio::test]
async fn test_get_missing_entities_is_not_found() {
    let store = InMemoryStore::new();
    let id = Uuid::new_v4();

    assert!(is_not_found(&users::get_by_id(uow(&store).await, id).await.unwrap_err()));
    assert!(is_not_found(&posts::get_by_id(uow(&store).await, id).await.unwrap_err()));
    assert!(is_not_found(&comments::get_by_id(uow(&store).await, id).await.unwrap_err()));
}

#[tokio::test]
async fn test_create_with_empty_text_leaves_store_unchanged() {
    let store = InMemoryStore::new();
    let alice = users::create(uow(&store).await, "alice").await.unwrap();
    let post = posts::create(uow(&store).await, alice.id, "hello").await.unwrap();

    let err = users::create(uow(&store).await, "").await.unwrap_err();
    assert!(is_validation(&err));
    let err = posts::create(uow(&store).await, alice.id, "").await.unwrap_err();
    assert!(is_validation(&err));
    let err = comments::create(uow(&store).await, "", alice.id, post.id)
        .await
        .unwrap_err();
    assert!(is_validation(&err));

    assert_eq!(users::get_all(uow(&store).await).await.unwrap().len(), 1);
    assert_eq!(posts::get_all(uow(&store).await).await.unwrap().len(), 1);
    assert!(comments::get_all(uow(&store).await).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_create_adds_exactly_one_retrievable_entity() {
    let store = InMemoryStore::new();
    users::create(uow(&store).await, "alice").await.unwrap();

    let bob = users::create(uow(&store).await, "bob").await.unwrap();

    assert_eq!(users::get_all(uow(&store).await).await.unwrap().len(), 2);
    let found = users::get_by_id(uow(&store).await, bob.id).await.unwrap();
    assert_eq!(found, bob);
}

#[tokio::test]
async fn test_create_post_for_unknown_author_fails() {
    let store = InMemoryStore::new();

    let err = posts::create(uow(&store).await, Uuid::new_v4(), "hello")
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Repository(_)));
    assert!(posts::get_all(uow(&store).await).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_comment_changes_text_and_edit_date_only() {
    let store = InMemoryStore::new();
    let alice = users::create(uow(&store).await, "alice").await.unwrap();
    let post = posts::create(uow(&store).await, alice.id, "hello").await.unwrap();
    let comment = comments::create(uow(&store).await, "nice", alice.id, post.id)
        .await
        .unwrap();

    let updated = comments::update(uow(&store).await, comment.id, "very nice")
        .await
        .unwrap();

    assert_eq!(updated.id, comment.id);
    assert_eq!(updated.post_id, comment.post_id);
    assert_eq!(updated.author_id, comment.author_id);
    assert_eq!(updated.text, "very nice");
    assert!(updated.last_edit_date >= comment.last_edit_date);

    let stored = comments::get_by_id(uow(&store).await, comment.id).await.unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn test_update_post_keeps_publication_date() {
    let store = InMemoryStore::new();
    let alice = users::create(uow(&store).await, "alice").await.unwrap();
    let post = posts::create(uow(&store).await, alice.id, "hello").await.unwrap();

    let updated = posts::update(uow(&store).await, post.id, "hello again")
        .await
        .unwrap();

    assert_eq!(updated.id, post.id);
    assert_eq!(updated.publication_date, post.publication_date);
    assert_eq!(updated.text, "hello again");
}

#[tokio::test]
async fn test_update_missing_entity_is_not_found_and_writes_nothing() {
    let store = InMemoryStore::new();
    let alice = users::create(uow(&store).await, "alice").await.unwrap();

    let err = users::update(uow(&store).await, Uuid::new_v4(), "ghost")
        .await
        .unwrap_err();
    assert!(is_not_found(&err));

    let all = users::get_all(uow(&store).await).await.unwrap();
    assert_eq!(all, vec![alice]);
}

#[tokio::test]
async fn test_delete_removes_exactly_one() {
    let store = InMemoryStore::new();
    let alice = users::create(uow(&store).await, "alice").await.unwrap();
    let bob = users::create(uow(&store).await, "bob").await.unwrap();

    users::delete(uow(&store).await, alice.id).await.unwrap();

    let remaining = users::get_all(uow(&store).await).await.unwrap();
    assert_eq!(remaining, vec![bob]);
    let err = users::get_by_id(uow(&store).await, alice.id).await.unwrap_err();
    assert!(is_not_found(&err));
}

#[tokio::test]
async fn test_delete_missing_entity_is_not_found() {
    let store = InMemoryStore::new();
    let alice = users::create(uow(&store).await, "alice").await.unwrap();

    let err = users::delete(uow(&store).await, Uuid::new_v4()).await.unwrap_err();
    assert!(is_not_found(&err));

    assert_eq!(users::get_all(uow(&store).await).await.unwrap(), vec![alice]);
}

#[tokio::test]
async fn test_update_missing_post_is_not_found_and_writes_nothing() {
    let store = InMemoryStore::new();
    let alice = users::create(uow(&store).await, "alice").await.unwrap();
    let post = posts::create(uow(&store).await, alice.id, "hello").await.unwrap();

    let err = posts::update(uow(&store).await, Uuid::new_v4(), "ghost")
        .await
        .unwrap_err();
    assert!(is_not_found(&err));

    assert_eq!(posts::get_all(uow(&store).await).await.unwrap(), vec![post]);
}

#[tokio::test]
async fn test_delete_missing_post_is_not_found() {
    let store = InMemoryStore::new();
    let alice = users::create(uow(&store).await, "alice").await.unwrap();
    let post = posts::create(uow(&store).await, alice.id, "hello").await.unwrap();

    let err = posts::delete(uow(&store).await, Uuid::new_v4()).await.unwrap_err();
    assert!(is_not_found(&err));

    assert_eq!(posts::get_all(uow(&store).await).await.unwrap(), vec![post]);
}

#[tokio::test]
async fn test_update_missing_comment_is_not_found_and_writes_nothing() {
    let store = InMemoryStore::new();
    let alice = users::create(uow(&store).await, "alice").await.unwrap();
    let post = posts::create(uow(&store).await, alice.id, "hello").await.unwrap();
    let comment = comments::create(uow(&store).await, "nice", alice.id, post.id)
        .await
        .unwrap();

    let err = comments::update(uow(&store).await, Uuid::new_v4(), "ghost")
        .await
        .unwrap_err();
    assert!(is_not_found(&err));

    assert_eq!(
        comments::get_all(uow(&store).await).await.unwrap(),
        vec![comment]
    );
}

#[tokio::test]
async fn test_delete_missing_comment_is_not_found() {
    let store = InMemoryStore::new();
    let alice = users::create(uow(&store).await, "alice").await.unwrap();
    let post = posts::create(uow(&store).await, alice.id, "hello").await.unwrap();
    let comment = comments::create(uow(&store).await, "nice", alice.id, post.id)
        .await
        .unwrap();

    let err = comments::delete(uow(&store).await, Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(is_not_found(&err));

    assert_eq!(
        comments::get_all(uow(&store).await).await.unwrap(),
        vec![comment]
    );
}

#[tokio::test]
async fn test_relation_queries_return_empty_for_unknown_ids() {
    let store = InMemoryStore::new();
    let id = Uuid::new_v4();

    assert!(posts::get_by_user_id(uow(&store).await, id).await.unwrap().is_empty());
    assert!(comments::get_by_user_id(uow(&store).await, id).await.unwrap().is_empty());
    assert!(comments::get_by_post_id(uow(&store).await, id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_deleting_user_removes_their_posts_and_comments() {
    let store = InMemoryStore::new();
    let alice = users::create(uow(&store).await, "alice").await.unwrap();
    let bob = users::create(uow(&store).await, "bob").await.unwrap();
    let post = posts::create(uow(&store).await, bob.id, "bob's post").await.unwrap();
    comments::create(uow(&store).await, "from alice", alice.id, post.id)
        .await
        .unwrap();
    let kept = comments::create(uow(&store).await, "from bob", bob.id, post.id)
        .await
        .unwrap();

    users::delete(uow(&store).await, alice.id).await.unwrap();

    let left = comments::get_by_post_id(uow(&store).await, post.id).await.unwrap();
    assert_eq!(left, vec![kept]);
    assert!(comments::get_by_user_id(uow(&store).await, alice.id)
        .await
        .unwrap()
        .is_empty());
}
