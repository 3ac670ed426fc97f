use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use sequenceit_content::{Collection, ListQuery, Record};
use serde::Deserialize;

use crate::{
    routes::AppState,
    template::{Template, filters},
};

#[derive(Deserialize, Default)]
pub struct PageQuery {
    pub category: Option<String>,
}

#[derive(askama::Template)]
#[template(path = "blog.html")]
pub struct BlogTemplate {
    pub featured: Option<Record>,
    pub posts: Vec<Record>,
    pub categories: Vec<String>,
    pub category: String,
}

pub async fn page(
    template: Template,
    State(state): State<AppState>,
    Query(input): Query<PageQuery>,
) -> impl IntoResponse {
    let category = input
        .category
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| "All".to_owned());

    let mut posts = crate::try_page_response!(
        state.query.list(
            Collection::BlogPosts,
            ListQuery {
                category: Some(category.to_owned()),
                ..ListQuery::published()
            }
        ),
        template
    );

    let mut categories = vec!["All".to_owned()];
    categories.extend(crate::try_page_response!(
        state.query.categories(Collection::BlogPosts, true),
        template
    ));

    let featured = (!posts.is_empty()).then(|| posts.remove(0));

    template
        .render(BlogTemplate {
            featured,
            posts,
            categories,
            category,
        })
        .into_response()
}
