use serde::{Deserialize, Serialize};

/// Body of POST /api/analyze-property. The five cadastral fields are free
/// text; session_id carries the locally generated anonymous session so the
/// backend can track the free quota.
#[derive(Serialize, Clone, PartialEq)]
pub struct AnalysisRequest {
    pub il: String,
    pub ilce: String,
    pub mahalle: String,
    pub ada: String,
    pub parsel: String,
    pub session_id: String,
}

#[derive(Deserialize, Clone, PartialEq)]
pub struct AnalysisResponse {
    pub analysis: String,
    pub remaining_credits: i32,
}

#[derive(Deserialize, Clone, PartialEq)]
pub struct CreditsResponse {
    pub remaining_credits: i32,
    pub is_authenticated: bool,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct User {
    pub user_id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
    #[serde(default)]
    pub credits: i32,
}

#[derive(Deserialize, Clone, PartialEq)]
pub struct Package {
    pub id: String,
    pub name: String,
    pub credits: i32,
    pub price: f64,
    pub description: String,
    #[serde(default)]
    pub popular: bool,
}

#[derive(Deserialize, Clone, PartialEq)]
pub struct PaymentCreateResponse {
    pub payment_url: String,
}

/// FastAPI error envelope: {"detail": "..."}.
#[derive(Deserialize)]
pub struct ApiError {
    pub detail: String,
}

#[derive(Serialize)]
pub struct SessionExchangeRequest {
    pub session_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_without_popular_flag_defaults_to_false() {
        let json = r#"{
            "id": "package_20",
            "name": "Standart Plan",
            "credits": 20,
            "price": 50.0,
            "description": "Küçük projeler için"
        }"#;
        let pkg: Package = serde_json::from_str(json).unwrap();
        assert_eq!(pkg.id, "package_20");
        assert_eq!(pkg.credits, 20);
        assert!(!pkg.popular);
    }

    #[test]
    fn package_with_popular_flag() {
        let json = r#"{
            "id": "package_50",
            "name": "Pro Plan",
            "credits": 50,
            "price": 75.0,
            "description": "Orta ölçekli projeler için",
            "popular": true
        }"#;
        let pkg: Package = serde_json::from_str(json).unwrap();
        assert!(pkg.popular);
    }

    #[test]
    fn user_tolerates_missing_optional_fields() {
        let json = r#"{
            "user_id": "user_abc123",
            "email": "test@example.com",
            "name": "Test"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.picture.is_none());
        assert_eq!(user.credits, 0);
    }

    #[test]
    fn credits_response_deserializes() {
        let json = r#"{"remaining_credits": 3, "is_authenticated": false}"#;
        let credits: CreditsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(credits.remaining_credits, 3);
        assert!(!credits.is_authenticated);
    }

    #[test]
    fn malformed_credits_body_is_rejected() {
        // A 2xx with an unexpected body must surface as a parse error, not a
        // silently ignored refresh.
        assert!(serde_json::from_str::<CreditsResponse>(r#"{"message": "ok"}"#).is_err());
        assert!(serde_json::from_str::<CreditsResponse>("").is_err());
    }

    #[test]
    fn api_error_detail_parses() {
        let json = r#"{"detail": "Krediniz bitti. Lütfen kredi satın alın."}"#;
        let err: ApiError = serde_json::from_str(json).unwrap();
        assert!(err.detail.starts_with("Krediniz bitti"));
    }

    #[test]
    fn analysis_request_serializes_all_fields() {
        let req = AnalysisRequest {
            il: "Adana".into(),
            ilce: "Seyhan".into(),
            mahalle: "Köprülü".into(),
            ada: "1234".into(),
            parsel: "56".into(),
            session_id: "session-1-abc".into(),
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["il"], "Adana");
        assert_eq!(value["parsel"], "56");
        assert_eq!(value["session_id"], "session-1-abc");
    }
}
