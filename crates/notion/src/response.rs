//! Notion API レスポンスの共通ハンドリング

use serde::de::DeserializeOwned;

use crate::error::NotionError;

/// Notion API レスポンスの共通ハンドリング
///
/// 成功時はレスポンスボディを `T` にデシリアライズし、
/// エラー時はステータスコードに応じた [`NotionError`] を返す。
pub(crate) async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, NotionError> {
    let status = response.status();

    if status.is_success() {
        let body = response.json::<T>().await?;
        return Ok(body);
    }

    let body = response.text().await.unwrap_or_default();

    let error = match status {
        reqwest::StatusCode::BAD_REQUEST => NotionError::InvalidRequest(body),
        reqwest::StatusCode::UNAUTHORIZED => NotionError::Unauthorized,
        reqwest::StatusCode::NOT_FOUND => NotionError::ObjectNotFound,
        reqwest::StatusCode::TOO_MANY_REQUESTS => NotionError::RateLimited,
        _ => NotionError::Unexpected(format!("予期しないステータス {}: {}", status, body)),
    };

    Err(error)
}
