//! Store-backed consistency tests.
//!
//! These exercise the like-toggle and cascade-delete guarantees against a
//! real Postgres instance. They are ignored by default; run them with a
//! database available:
//!
//! ```sh
//! DATABASE_URL=postgres://localhost/hivelooks_test cargo test -- --ignored
//! ```

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use hivelooks_service::db::{self, LikeRepository, LikeTarget};
use hivelooks_service::models::ParentKind;
use hivelooks_service::services::{CommentService, LikeService, LookService, PostService};
use hivelooks_service::AppError;

async fn test_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required for store tests");
    let pool = PgPoolOptions::new()
        .max_connections(4)
        .connect(&url)
        .await
        .expect("failed to connect to test database");
    db::ensure_tables(&pool).await.expect("schema bootstrap");
    pool
}

async fn sample_post(pool: &PgPool, owner: Uuid) -> hivelooks_service::models::Post {
    PostService::new(pool.clone())
        .create_post(
            owner,
            "Does this jacket work for autumn?",
            "Thrifted it last week #Vintage #ootd",
            "Casual",
            "https://media.invalid/jacket.jpg",
        )
        .await
        .expect("post creation")
}

#[tokio::test]
#[ignore]
async fn toggling_twice_restores_the_liker_set() {
    let pool = test_pool().await;
    let owner = Uuid::new_v4();
    let post = sample_post(&pool, owner).await;

    let likes = LikeRepository::new(pool.clone());
    let (u1, u2, u3) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

    assert_eq!(likes.toggle(LikeTarget::Post(post.id), u1).await.unwrap(), Some(true));
    assert_eq!(likes.toggle(LikeTarget::Post(post.id), u2).await.unwrap(), Some(true));

    // toggle u3 on, then off: set returns to its original state
    assert_eq!(likes.toggle(LikeTarget::Post(post.id), u3).await.unwrap(), Some(true));
    assert_eq!(likes.toggle(LikeTarget::Post(post.id), u3).await.unwrap(), Some(false));

    let current = PostService::new(pool.clone())
        .get_post(post.id)
        .await
        .unwrap()
        .unwrap()
        .likes;
    assert_eq!(current.len(), 2);
    assert!(current.contains(&u1) && current.contains(&u2));
    assert!(!current.contains(&u3));
}

#[tokio::test]
#[ignore]
async fn liker_set_never_holds_a_user_twice() {
    let pool = test_pool().await;
    let post = sample_post(&pool, Uuid::new_v4()).await;

    let likes = LikeRepository::new(pool.clone());
    let user = Uuid::new_v4();

    for _ in 0..3 {
        likes.toggle(LikeTarget::Post(post.id), user).await.unwrap();
    }

    let current = PostService::new(pool.clone())
        .get_post(post.id)
        .await
        .unwrap()
        .unwrap()
        .likes;
    // three flips: on, off, on
    assert_eq!(current, vec![user]);
}

#[tokio::test]
#[ignore]
async fn toggle_on_missing_target_is_a_logged_no_op() {
    let pool = test_pool().await;
    let service = LikeService::new(pool.clone());

    let outcome = service
        .toggle(LikeTarget::Look(Uuid::new_v4()), Uuid::new_v4())
        .await
        .unwrap();
    assert_eq!(outcome, None);
}

#[tokio::test]
#[ignore]
async fn comment_likes_toggle_under_their_parent() {
    let pool = test_pool().await;
    let post = sample_post(&pool, Uuid::new_v4()).await;

    let comments = CommentService::new(pool.clone());
    let comment = comments
        .add_comment(ParentKind::Post, post.id, Uuid::new_v4(), "love the fit")
        .await
        .unwrap();

    let target = LikeTarget::Comment {
        parent: ParentKind::Post,
        parent_id: post.id,
        comment_id: comment.id,
    };
    let service = LikeService::new(pool.clone());
    let user = Uuid::new_v4();

    assert_eq!(service.toggle(target, user).await.unwrap(), Some(true));
    assert_eq!(service.toggle(target, user).await.unwrap(), Some(false));

    // addressing the comment under the wrong parent kind finds nothing
    let wrong = LikeTarget::Comment {
        parent: ParentKind::Look,
        parent_id: post.id,
        comment_id: comment.id,
    };
    assert_eq!(service.toggle(wrong, user).await.unwrap(), None);
}

#[tokio::test]
#[ignore]
async fn cascade_removes_parent_and_every_comment() {
    let pool = test_pool().await;
    let owner = Uuid::new_v4();
    let post = sample_post(&pool, owner).await;

    let comments = CommentService::new(pool.clone());
    for text in ["first", "second", "third"] {
        comments
            .add_comment(ParentKind::Post, post.id, Uuid::new_v4(), text)
            .await
            .unwrap();
    }

    let service = PostService::new(pool.clone());
    assert!(service.delete_post(post.id).await.unwrap());

    // parent and all three comments are gone
    assert!(service.get_post(post.id).await.unwrap().is_none());
    let remaining = comments
        .get_comments(ParentKind::Post, post.id)
        .await
        .unwrap();
    assert!(remaining.is_empty());
}

#[tokio::test]
#[ignore]
async fn cascade_on_childless_parent_deletes_just_the_parent() {
    let pool = test_pool().await;
    let look = LookService::new(pool.clone())
        .create_look(
            Uuid::new_v4(),
            "Sunday brunch",
            "linen everything #Linen",
            None,
            "https://media.invalid/brunch.jpg",
        )
        .await
        .unwrap();

    let outcome = db::delete_parent_with_comments(&pool, ParentKind::Look, look.id)
        .await
        .unwrap();
    assert!(outcome.parent_deleted);
    assert_eq!(outcome.comments_deleted, 0);
}

#[tokio::test]
#[ignore]
async fn deleting_a_deleted_post_is_benign() {
    let pool = test_pool().await;
    let service = PostService::new(pool.clone());
    let post = sample_post(&pool, Uuid::new_v4()).await;

    assert!(service.delete_post(post.id).await.unwrap());
    // second delete: no error, nothing removed
    assert!(!service.delete_post(post.id).await.unwrap());
}

#[tokio::test]
#[ignore]
async fn comment_on_missing_parent_is_rejected() {
    let pool = test_pool().await;
    let comments = CommentService::new(pool.clone());

    let err = comments
        .add_comment(ParentKind::Look, Uuid::new_v4(), Uuid::new_v4(), "orphan")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
#[ignore]
async fn created_post_carries_the_normalized_tag_set() {
    let pool = test_pool().await;
    let post = PostService::new(pool.clone())
        .create_post(
            Uuid::new_v4(),
            "Office look?",
            "Love this #Streetwear look #casual",
            "Casual",
            "https://media.invalid/office.jpg",
        )
        .await
        .unwrap();

    assert_eq!(post.tags, vec!["#casual", "#streetwear"]);
}
