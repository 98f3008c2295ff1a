//! Test notifications and notification history

use crate::client::{ApiRequest, AppStoreClient};
use crate::error::Result;
use appstore_types::{
    CheckTestNotificationResponse, NotificationHistoryRequest, NotificationHistoryResponse,
    SendTestNotificationResponse,
};
use reqwest::Method;

impl AppStoreClient {
    /// Ask the App Store to send a `TEST` notification to your server
    ///
    /// `POST /inApps/v1/notifications/test`
    pub async fn request_test_notification(&self) -> Result<SendTestNotificationResponse> {
        let segments = ["inApps", "v1", "notifications", "test"];
        self.request_json(ApiRequest::new(Method::POST, &segments))
            .await
    }

    /// Check whether a test notification reached your server
    ///
    /// `GET /inApps/v1/notifications/test/{testNotificationToken}`
    pub async fn get_test_notification_status(
        &self,
        test_notification_token: &str,
    ) -> Result<CheckTestNotificationResponse> {
        let segments = ["inApps", "v1", "notifications", "test", test_notification_token];
        self.request_json(ApiRequest::new(Method::GET, &segments)).await
    }

    /// Get one page of the notifications sent to your server
    ///
    /// `POST /inApps/v1/notifications/history`. Pass the previous page's
    /// `pagination_token` to continue.
    pub async fn get_notification_history(
        &self,
        pagination_token: Option<&str>,
        request: &NotificationHistoryRequest,
    ) -> Result<NotificationHistoryResponse> {
        let segments = ["inApps", "v1", "notifications", "history"];
        let query = pagination_token
            .map(|token| vec![("paginationToken", token.to_string())])
            .unwrap_or_default();
        self.send_json(ApiRequest::new(Method::POST, &segments).query(query), request)
            .await
    }
}
