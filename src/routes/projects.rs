use std::str::FromStr;

use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use sequenceit_content::{Collection, ListQuery, Record, SortBy};
use serde::Deserialize;

use crate::{routes::AppState, template::Template};

#[derive(Deserialize, Default)]
pub struct PageQuery {
    pub category: Option<String>,
    pub q: Option<String>,
    pub sort: Option<String>,
}

#[derive(askama::Template)]
#[template(path = "projects.html")]
pub struct ProjectsTemplate {
    pub projects: Vec<Record>,
    pub categories: Vec<String>,
    pub category: String,
    pub q: String,
    pub sort: SortBy,
}

impl ProjectsTemplate {
    pub fn sorts(&self) -> [(&'static str, &'static str); 4] {
        [
            ("newest", "Newest first"),
            ("oldest", "Oldest first"),
            ("title-asc", "Title A-Z"),
            ("title-desc", "Title Z-A"),
        ]
    }

    pub fn is_sort(&self, value: &str) -> bool {
        self.sort.as_ref() == value
    }
}

/// Unknown or missing sort values fall back to newest first.
fn sort_by(value: Option<&str>) -> SortBy {
    match value.map(SortBy::from_str) {
        Some(Ok(SortBy::Default)) | Some(Err(_)) | None => SortBy::Newest,
        Some(Ok(sort)) => sort,
    }
}

pub async fn page(
    template: Template,
    State(state): State<AppState>,
    Query(input): Query<PageQuery>,
) -> impl IntoResponse {
    let sort = sort_by(input.sort.as_deref());
    let category = input
        .category
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| "All".to_owned());
    let q = input.q.unwrap_or_default();

    let projects = crate::try_page_response!(
        state.query.list(
            Collection::Projects,
            ListQuery {
                category: Some(category.to_owned()),
                search: Some(q.to_owned()),
                sort,
                ..Default::default()
            }
        ),
        template
    );

    let mut categories = vec!["All".to_owned()];
    categories.extend(crate::try_page_response!(
        state.query.categories(Collection::Projects, false),
        template
    ));

    template
        .render(ProjectsTemplate {
            projects,
            categories,
            category,
            q,
            sort,
        })
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_defaults_to_newest() {
        assert_eq!(sort_by(None), SortBy::Newest);
        assert_eq!(sort_by(Some("sideways")), SortBy::Newest);
        assert_eq!(sort_by(Some("default")), SortBy::Newest);
        assert_eq!(sort_by(Some("title-desc")), SortBy::TitleDesc);
    }
}
