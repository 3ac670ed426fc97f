use axum::{extract::State, response::IntoResponse};
use futures::future::try_join_all;
use sequenceit_content::Collection;
use strum::VariantArray;

use crate::{auth::AuthAdmin, routes::AppState, template::Template};

pub struct CollectionCount {
    pub collection: Collection,
    pub count: i64,
}

#[derive(askama::Template)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub email: String,
    pub counts: Vec<CollectionCount>,
}

pub async fn page(
    template: Template,
    AuthAdmin(user): AuthAdmin,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let counts = crate::try_page_response!(
        try_join_all(Collection::VARIANTS.iter().map(|collection| {
            let query = state.query.clone();
            async move {
                let count = query.count(*collection).await?;
                Ok::<_, sequenceit_shared::Error>(CollectionCount {
                    collection: *collection,
                    count,
                })
            }
        })),
        template
    );

    template
        .render(DashboardTemplate {
            email: user.email,
            counts,
        })
        .into_response()
}
