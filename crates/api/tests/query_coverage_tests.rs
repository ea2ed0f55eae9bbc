mod common;

use async_graphql::Variables;
use common::*;
use serde_json::json;

#[tokio::test]
async fn article_query_returns_article_with_comments() {
    let (schema, store) = setup_schema();
    let (article_id, user_id) = seed_blog(&store);
    store.insert_comment(article_id, user_id, "first!");

    let query = r#"
        query Article($id: ID!) {
            article(id: $id) {
                id
                title
                comments {
                    body
                    user {
                        username
                        email
                    }
                }
            }
        }
    "#;
    let variables = Variables::from_json(json!({ "id": article_id.to_string() }));
    let response = execute_graphql(&schema, query, Some(variables)).await;

    assert!(
        response.errors.is_empty(),
        "article query should succeed: {:?}",
        response.errors
    );
    let data = response.data.into_json().unwrap();
    assert_eq!(data["article"]["id"], json!(article_id));
    assert_eq!(data["article"]["title"], "Intro post");
    assert_eq!(data["article"]["comments"][0]["body"], "first!");
    assert_eq!(
        data["article"]["comments"][0]["user"]["email"],
        "alice@example.com"
    );
}

#[tokio::test]
async fn article_query_returns_null_when_absent() {
    let (schema, _store) = setup_schema();

    let query = r#"query { article(id: "12345") { id } }"#;
    let response = execute_graphql(&schema, query, None).await;

    assert!(response.errors.is_empty(), "absent is null, not an error");
    let data = response.data.into_json().unwrap();
    assert_eq!(data["article"], json!(null));
}

#[tokio::test]
async fn queries_treat_unparseable_ids_as_absent() {
    let (schema, store) = setup_schema();
    seed_blog(&store);

    let query = r#"
        query {
            article(id: "abc") { id }
            comment(id: "1.5") { id }
        }
    "#;
    let response = execute_graphql(&schema, query, None).await;

    assert!(response.errors.is_empty());
    let data = response.data.into_json().unwrap();
    assert_eq!(data["article"], json!(null));
    assert_eq!(data["comment"], json!(null));
}

#[tokio::test]
async fn comment_query_returns_comment_by_id() {
    let (schema, store) = setup_schema();
    let (article_id, user_id) = seed_blog(&store);
    let comment_id = store.insert_comment(article_id, user_id, "lookup me");

    let query = r#"query Comment($id: ID!) { comment(id: $id) { id body } }"#;
    let variables = Variables::from_json(json!({ "id": comment_id.to_string() }));
    let response = execute_graphql(&schema, query, Some(variables)).await;

    assert!(response.errors.is_empty());
    let data = response.data.into_json().unwrap();
    assert_eq!(data["comment"]["id"], json!(comment_id));
    assert_eq!(data["comment"]["body"], "lookup me");
}

#[tokio::test]
async fn comment_authors_load_in_a_single_batch() {
    let (schema, store) = setup_schema();
    let alice = store.insert_user("alice", "alice@example.com");
    let bob = store.insert_user("bob", "bob@example.com");
    let article_id = store.insert_article("Busy thread", "Lots of replies");
    store.insert_comment(article_id, alice, "one");
    store.insert_comment(article_id, bob, "two");
    store.insert_comment(article_id, alice, "three");

    let query = r#"
        query Article($id: ID!) {
            article(id: $id) {
                comments {
                    body
                    user {
                        id
                        username
                    }
                }
            }
        }
    "#;
    let variables = Variables::from_json(json!({ "id": article_id.to_string() }));
    let response = execute_graphql(&schema, query, Some(variables)).await;

    assert!(response.errors.is_empty());
    let data = response.data.into_json().unwrap();
    let comments = data["article"]["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 3);
    assert_eq!(comments[0]["user"]["username"], "alice");
    assert_eq!(comments[1]["user"]["username"], "bob");
    assert_eq!(comments[2]["user"]["username"], "alice");

    // Three sibling `user` fields, one store round-trip.
    assert_eq!(store.user_batch_loads(), 1);
}

#[tokio::test]
async fn comment_with_unknown_author_resolves_null_user() {
    let (schema, store) = setup_schema();
    let (article_id, _user_id) = seed_blog(&store);
    let comment_id = store.insert_comment(article_id, 999, "ghost author");

    let query = r#"query Comment($id: ID!) { comment(id: $id) { body user { id } } }"#;
    let variables = Variables::from_json(json!({ "id": comment_id.to_string() }));
    let response = execute_graphql(&schema, query, Some(variables)).await;

    assert!(response.errors.is_empty());
    let data = response.data.into_json().unwrap();
    assert_eq!(data["comment"]["body"], "ghost author");
    assert_eq!(data["comment"]["user"], json!(null));
}

#[tokio::test]
async fn schema_exposes_expected_operations() {
    let (schema, _store) = setup_schema();
    let sdl = schema.sdl();

    for field in [
        "article(id: ID!): Article",
        "comment(id: ID!): Comment",
        "addComment(articleId: ID!, userId: ID!, body: String!): AddCommentPayload!",
        "updateComment(id: ID!, body: String, userId: ID, articleId: ID): UpdateCommentPayload!",
        "destroyComment(id: ID!): DestroyCommentPayload!",
        "deletedId: ID",
    ] {
        assert!(sdl.contains(field), "SDL missing `{field}`:\n{sdl}");
    }
}
