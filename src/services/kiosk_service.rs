// ============================================================================
// KIOSK SERVICE - list / get / create / update / delete on `kiosk`
// ============================================================================

use serde_json::Value;

use crate::error::ApiError;
use crate::models::{Kiosk, KioskDraft, KioskListResponse, ListResult, QueryParams};
use crate::services::api_client::ApiClient;
use crate::utils::KIOSK_RESOURCE;

#[derive(Clone)]
pub struct KioskService {
    client: ApiClient,
}

impl KioskService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// One page of kiosks for `params`. `page_count` is derived here from
    /// `listTotal` and the requested page size.
    pub async fn list(&self, params: &QueryParams) -> Result<ListResult<Kiosk>, ApiError> {
        let query = params.query_string();
        let path = if query.is_empty() {
            KIOSK_RESOURCE.to_string()
        } else {
            format!("{}?{}", KIOSK_RESOURCE, query)
        };

        let response: KioskListResponse = self.client.get(&path).await?;
        let result = response
            .into_result(params.page_size)
            .map_err(ApiError::Decode)?;

        log::info!(
            "📋 Kiosks page {}/{}: {} rows of {}",
            params.page,
            result.page_count,
            result.items.len(),
            result.total_count
        );
        Ok(result)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Kiosk, ApiError> {
        self.client.get(&item_path(id)).await
    }

    /// Creates a kiosk. `None` when the backend accepted it without echoing
    /// the stored record.
    pub async fn create(&self, draft: &KioskDraft) -> Result<Option<Kiosk>, ApiError> {
        let value: Value = self.client.post(KIOSK_RESOURCE, draft).await?;
        echoed(value)
    }

    /// Replaces the whole record stored under `kiosk.id`.
    pub async fn update(&self, kiosk: &Kiosk) -> Result<Kiosk, ApiError> {
        if kiosk.id.is_empty() {
            return Err(ApiError::Encode("cannot update a kiosk without id".to_string()));
        }
        let value: Value = self.client.put(&item_path(&kiosk.id), kiosk).await?;
        Ok(echoed(value)?.unwrap_or_else(|| kiosk.clone()))
    }

    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.client.delete(&item_path(id)).await
    }
}

fn item_path(id: &str) -> String {
    let segment: String = url::form_urlencoded::byte_serialize(id.as_bytes()).collect();
    format!("{}/{}", KIOSK_RESOURCE, segment.replace('+', "%20"))
}

/// Null and `{}` mean "no record echoed".
fn echoed(value: Value) -> Result<Option<Kiosk>, ApiError> {
    match &value {
        Value::Null => Ok(None),
        Value::Object(map) if map.is_empty() => Ok(None),
        _ => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| ApiError::Decode(e.to_string())),
    }
}
