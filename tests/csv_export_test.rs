use ads_report::adapters::google_ads::GoogleAdsClient;
use ads_report::adapters::google_sheets::GoogleSheetsClient;
use ads_report::core::delimited::DelimitedExporter;
use ads_report::core::report::ReportService;
use ads_report::domain::model::DateRange;
use ads_report::domain::ports::AdsGateway;
use ads_report::utils::error::ReportError;
use chrono::NaiveDate;
use httpmock::prelude::*;
use std::fs::File;
use tempfile::TempDir;

fn period() -> DateRange {
    DateRange::new(
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
    )
}

fn service_for(server: &MockServer) -> ReportService<GoogleAdsClient, GoogleSheetsClient> {
    let ads = GoogleAdsClient::new(server.base_url(), "dev-token", "oauth-token", None);
    let sheets = GoogleSheetsClient::new(server.base_url(), "oauth-token");
    ReportService::new(ads, sheets)
}

#[tokio::test]
async fn test_campaign_metrics_to_csv_file() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();

    let search_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/customers/1234567890/googleAds:search")
            .header("developer-token", "dev-token")
            .body_contains("segments.date BETWEEN '2025-01-01' AND '2025-01-31'");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "results": [
                    {
                        "campaign": {"id": "111", "name": "Brand", "status": "ENABLED"},
                        "metrics": {
                            "impressions": "1000",
                            "clicks": "50",
                            "costMicros": "12340000",
                            "ctr": 0.05,
                            "averageCpc": 250000.0,
                            "conversions": 3.0
                        }
                    },
                    {
                        "campaign": {"id": "222", "name": "Generic, broad", "status": "PAUSED"},
                        "metrics": {
                            "impressions": "400",
                            "clicks": "8",
                            "costMicros": "2000000",
                            "ctr": 0.02,
                            "averageCpc": 250000.0,
                            "conversions": 0.0
                        }
                    }
                ],
                "fieldMask": "campaign.id,campaign.name,campaign.status"
            }));
    });

    let service = service_for(&server);
    let metrics = service
        .campaign_metrics("123-456-7890", &period(), false)
        .await
        .unwrap();

    search_mock.assert();
    assert_eq!(metrics.len(), 2);

    let output_path = temp_dir.path().join("campaigns-1234567890.csv");
    let file = File::create(&output_path).unwrap();
    let written = service
        .write_csv(&metrics, &DelimitedExporter::csv(), file)
        .unwrap();
    assert_eq!(written, 2);

    let content = std::fs::read_to_string(&output_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "id,name,status,impressions,clicks,cost,ctr,average_cpc,conversions"
    );
    assert_eq!(lines[1], "111,Brand,ENABLED,1000,50,12.34,0.05,0.25,3");
    // the comma in the campaign name must be quoted
    assert!(lines[2].starts_with("222,\"Generic, broad\",PAUSED"));
}

#[tokio::test]
async fn test_api_error_is_surfaced() {
    let server = MockServer::start();

    let search_mock = server.mock(|when, then| {
        when.method(POST).path("/customers/1234567890/googleAds:search");
        then.status(401).body("invalid credentials");
    });

    let service = service_for(&server);
    let err = service
        .campaign_metrics("1234567890", &period(), false)
        .await
        .unwrap_err();

    search_mock.assert();
    match err {
        ReportError::ApiStatus { status, body } => {
            assert_eq!(status, 401);
            assert_eq!(body, "invalid credentials");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_connection_check_lists_accessible_customers() {
    let server = MockServer::start();

    let list_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/customers:listAccessibleCustomers")
            .header("developer-token", "dev-token");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "resourceNames": ["customers/1234567890", "customers/9876543210"]
            }));
    });

    let ads = GoogleAdsClient::new(server.base_url(), "dev-token", "oauth-token", None);
    let result = ads.test_connection().await.unwrap();

    list_mock.assert();
    assert_eq!(result.status, "ok");
    assert_eq!(
        result.accessible_customers,
        vec!["customers/1234567890", "customers/9876543210"]
    );
}

#[tokio::test]
async fn test_empty_result_set_rejected_for_csv() {
    let server = MockServer::start();

    let search_mock = server.mock(|when, then| {
        when.method(POST).path("/customers/1234567890/googleAds:search");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"fieldMask": "campaign.id"}));
    });

    let service = service_for(&server);
    let metrics = service
        .campaign_metrics("1234567890", &period(), true)
        .await
        .unwrap();
    search_mock.assert();
    assert!(metrics.is_empty());

    let err = service
        .write_csv(&metrics, &DelimitedExporter::csv(), Vec::<u8>::new())
        .unwrap_err();
    assert!(matches!(err, ReportError::EmptyInput));
}
