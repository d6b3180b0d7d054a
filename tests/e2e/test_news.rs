use crate::e2e::helpers;

use helpers::assertions::{
    assert_article_response, assert_descending_scores, assert_envelope, assert_error_envelope,
};
use helpers::fixtures::ArticleSeed;
use helpers::TestContext;
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;
use uuid::Uuid;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_news_newest_first_with_pagination(ctx: &TestContext) {
    for hours in 1..=5 {
        ctx.fixtures
            .create_article(ArticleSeed::new(&format!("新闻 {}", hours)).published_hours_ago(hours))
            .await
            .unwrap();
    }

    let response = ctx.client.get("/api/news?page=1&per_page=2").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_envelope(&response);

    let data = response.data();
    assert_eq!(data["total"], 5);
    assert_eq!(data["page"], 1);
    assert_eq!(data["per_page"], 2);
    assert_eq!(data["pages"], 3);

    let items = data["news_list"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_article_response(&items[0], "新闻 1");
    assert_article_response(&items[1], "新闻 2");

    let last_page = ctx.client.get("/api/news?page=3&per_page=2").await.unwrap();
    let items = last_page.data()["news_list"].as_array().unwrap().clone();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "新闻 5");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_filter_news_by_source_and_category(ctx: &TestContext) {
    ctx.fixtures
        .create_article(ArticleSeed::new("科技新闻").source("腾讯新闻").category("tech"))
        .await
        .unwrap();
    ctx.fixtures
        .create_article(ArticleSeed::new("体育新闻").source("腾讯新闻").category("sports"))
        .await
        .unwrap();
    ctx.fixtures
        .create_article(ArticleSeed::new("其他科技").source("网易新闻").category("tech"))
        .await
        .unwrap();

    let response = ctx
        .client
        .get("/api/news?source=%E8%85%BE%E8%AE%AF%E6%96%B0%E9%97%BB&category=tech")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let items = response.data()["news_list"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "科技新闻");
    assert_eq!(response.data()["total"], 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_sort_news_by_hotness_after_analysis(ctx: &TestContext) {
    ctx.fixtures
        .create_article(ArticleSeed::new("冷门").counters(1, 0, 0))
        .await
        .unwrap();
    ctx.fixtures
        .create_article(ArticleSeed::new("热门").counters(100, 50, 20))
        .await
        .unwrap();
    ctx.fixtures
        .create_article(ArticleSeed::new("一般").counters(10, 5, 2))
        .await
        .unwrap();

    ctx.client
        .get("/api/analysis/hotness")
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let response = ctx
        .client
        .get("/api/news?sort_by=hotness&order=desc")
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let items = response.data()["news_list"].as_array().unwrap();
    assert_eq!(items[0]["title"], "热门");
    assert_eq!(items[2]["title"], "冷门");
    assert_descending_scores(items, "hotness_score");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_invalid_pagination(ctx: &TestContext) {
    let response = ctx.client.get("/api/news?per_page=500").await.unwrap();
    assert_error_envelope(&response, StatusCode::BAD_REQUEST, "per_page");

    let response = ctx.client.get("/api/news?page=abc").await.unwrap();
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_envelope(&response);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_count_a_view_when_reading_detail(ctx: &TestContext) {
    let article = ctx
        .fixtures
        .create_article(ArticleSeed::new("详情新闻").counters(7, 0, 0))
        .await
        .unwrap();

    let response = ctx
        .client
        .get(&format!("/api/news/{}", article.id))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_envelope(&response);
    assert_article_response(response.data(), "详情新闻");
    assert_eq!(response.data()["view_count"], 8);

    let stored = ctx.fixtures.find_article(article.id).await.unwrap();
    assert_eq!(stored.view_count, 8);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_404_for_unknown_news(ctx: &TestContext) {
    let response = ctx
        .client
        .get(&format!("/api/news/{}", Uuid::new_v4()))
        .await
        .unwrap();

    assert_error_envelope(&response, StatusCode::NOT_FOUND, "News not found");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_malformed_news_ids(ctx: &TestContext) {
    let response = ctx.client.get("/api/news/not-a-uuid").await.unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_envelope(&response);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_apply_only_positive_interaction_counters(ctx: &TestContext) {
    let article = ctx
        .fixtures
        .create_article(ArticleSeed::new("互动新闻").counters(10, 4, 2))
        .await
        .unwrap();

    let response = ctx
        .client
        .post(
            &format!("/api/news/{}/interact", article.id),
            &json!({
                "view_count": 50,
                "comment_count": 0,
                "share_count": -3
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_envelope(&response);

    let data = response.data();
    assert_eq!(data["view_count"], 50);
    assert_eq!(data["comment_count"], 4);
    assert_eq!(data["share_count"], 2);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_404_when_interacting_with_unknown_news(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            &format!("/api/news/{}/interact", Uuid::new_v4()),
            &json!({ "view_count": 1 }),
        )
        .await
        .unwrap();

    assert_error_envelope(&response, StatusCode::NOT_FOUND, "News not found");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_ingest_and_then_update_by_url(ctx: &TestContext) {
    let published_at = chrono::Utc::now() - chrono::Duration::hours(2);
    let payload = json!({
        "articles": [
            {
                "title": "首发新闻",
                "content": "正文",
                "source": "央视新闻",
                "url": "https://news.cctv.com/a/1",
                "category": "society",
                "published_at": published_at
            },
            {
                "title": "另一条新闻",
                "source": "网易新闻",
                "url": "https://news.163.com/b/2",
                "published_at": published_at
            }
        ]
    });

    let response = ctx.client.post("/api/news", &payload).await.unwrap();
    response.assert_status(StatusCode::OK);
    assert_envelope(&response);
    assert_eq!(response.data()["inserted"], 2);
    assert_eq!(response.data()["updated"], 0);

    let again = json!({
        "articles": [
            {
                "title": "首发新闻（更新）",
                "source": "央视新闻",
                "url": "https://news.cctv.com/a/1",
                "published_at": published_at
            }
        ]
    });
    let response = ctx.client.post("/api/news", &again).await.unwrap();
    response.assert_status(StatusCode::OK);
    assert_eq!(response.data()["inserted"], 0);
    assert_eq!(response.data()["updated"], 1);

    let list = ctx.client.get("/api/news").await.unwrap();
    assert_eq!(list.data()["total"], 2);
    let titles: Vec<&str> = list.data()["news_list"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|item| item["title"].as_str())
        .collect();
    assert!(titles.contains(&"首发新闻（更新）"));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_ingest_with_invalid_url(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/api/news",
            &json!({
                "articles": [{
                    "title": "坏链接",
                    "source": "新浪新闻",
                    "url": "news.sina.com.cn/no-scheme",
                    "published_at": chrono::Utc::now()
                }]
            }),
        )
        .await
        .unwrap();

    assert_error_envelope(&response, StatusCode::BAD_REQUEST, "Invalid URL format");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_malformed_json(ctx: &TestContext) {
    let response = ctx
        .client
        .post_raw("/api/news", "{\"articles\": [")
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_envelope(&response);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_uncategorized_news_under_other(ctx: &TestContext) {
    for seed in [
        ArticleSeed::new("无分类"),
        ArticleSeed::new("空白分类").category("  "),
        ArticleSeed::new("明确归类").category("other"),
        ArticleSeed::new("科技新闻").category("tech"),
    ] {
        ctx.fixtures.create_article(seed).await.unwrap();
    }

    let response = ctx.client.get("/api/news?category=other").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(response.data()["total"], 3);
    let titles: Vec<&str> = response.data()["news_list"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|item| item["title"].as_str())
        .collect();
    assert!(!titles.contains(&"科技新闻"));

    let response = ctx.client.get("/api/news?category=tech").await.unwrap();
    assert_eq!(response.data()["total"], 1);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_store_nothing_when_part_of_an_ingest_batch_fails(ctx: &TestContext) {
    let published_at = chrono::Utc::now();
    let payload = json!({
        "articles": [
            {
                "title": "正常新闻",
                "source": "央视新闻",
                "url": "https://news.cctv.com/ok/1",
                "published_at": published_at
            },
            {
                "title": "来源过长",
                "source": "源".repeat(101),
                "url": "https://news.cctv.com/too-long/2",
                "published_at": published_at
            }
        ]
    });

    let response = ctx.client.post("/api/news", &payload).await.unwrap();
    assert_error_envelope(
        &response,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error",
    );

    let list = ctx.client.get("/api/news").await.unwrap();
    assert_eq!(list.data()["total"], 0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_a_page_beyond_the_offset_range(ctx: &TestContext) {
    let response = ctx
        .client
        .get("/api/news?page=9223372036854775807")
        .await
        .unwrap();

    assert_error_envelope(&response, StatusCode::BAD_REQUEST, "page is out of range");
}
