use serde::Deserialize;

#[derive(Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TrendingQuery {
    /// Maximum number of hashtags to return (default 10).
    pub limit: Option<usize>,
}
