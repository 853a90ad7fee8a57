//! End-to-end test of the directory build against a local mock HTTP server.
//!
//! One `wiremock` server stands in for both the GOV.UK and NHS sites, so the
//! whole pipeline (city list -> borough search -> borough result pages ->
//! per-city CSV files) runs without real network traffic.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sight_test_scraper::config::{Config, OutputConfig, ScrapingConfig};
use sight_test_scraper::DirectoryBuilder;

const CITY_LIST_PATH: &str = "/government/publications/list-of-cities/list-of-cities-html";
const SEARCH_PATH: &str = "/service-search/find-an-nhs-sight-test/disambiguation";

fn city_list_page() -> String {
    // Two English cities plus a Scottish one that must be filtered out, and
    // a third English city (Hull) with no mock mounted so its search fails.
    "<html><body><div id=\"contents\"><div class=\"govspeak\">\
       <h3>United Kingdom</h3>\
       <h4>England</h4><ul><li>Leeds</li><li>York*</li><li>Hull</li></ul>\
       <h4>Scotland</h4><ul><li>Aberdeen</li></ul>\
     </div></div></body></html>"
        .to_string()
}

fn borough_search_page(entries: &[(&str, &str)]) -> String {
    let items: String = entries
        .iter()
        .map(|(text, href)| format!("<li><a href=\"{href}\">{text}</a></li>"))
        .collect();
    format!("<html><body><ul class=\"nhsuk-list\">{items}</ul></body></html>")
}

fn centre_page(centres: &[&str]) -> String {
    let items: String = centres
        .iter()
        .enumerate()
        .map(|(i, name)| {
            format!(
                "<li>\
                   <h2 id=\"orgname_{i}\"><span>Name: </span>{name}</h2>\
                   <p id=\"distance_{i}\"><span>Distance: </span>0.{i} miles</p>\
                   <p id=\"address_{i}\"><span>Address: </span>{i} High Street, Leeds</p>\
                   <p id=\"phone_{i}\">0113 200 000{i}</p>\
                   <a id=\"map_link_{i}\" href=\"/maps/{i}\">Map</a>\
                 </li>"
            )
        })
        .collect();
    format!("<html><body><ol class=\"nhsuk-list results\">{items}</ol></body></html>")
}

fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_string(body)
}

fn test_config(server: &MockServer, output_dir: &std::path::Path) -> Config {
    Config {
        scraping: ScrapingConfig {
            gov_base_url: server.uri(),
            nhs_base_url: server.uri(),
            request_timeout_seconds: 5,
            user_agent: "sight-test-scraper-test/0.1".to_string(),
        },
        output: OutputConfig {
            directory: output_dir.to_str().unwrap().to_string(),
        },
    }
}

#[tokio::test]
async fn builds_one_csv_per_english_city_with_rows_from_every_borough() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CITY_LIST_PATH))
        .respond_with(html(city_list_page()))
        .mount(&server)
        .await;

    // Leeds: two boroughs, 2 + 1 centres.
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("location", "Leeds"))
        .respond_with(html(borough_search_page(&[
            ("West Yorkshire, Leeds Central, LS1 1AA", "/results/leeds-central"),
            ("West Yorkshire, Leeds North, LS7 1AB", "/results/leeds-north"),
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/results/leeds-central"))
        .respond_with(html(centre_page(&["Vision Express", "Specsavers"])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/results/leeds-north"))
        .respond_with(html(centre_page(&["Boots Opticians"])))
        .mount(&server)
        .await;

    // York: one good borough and one whose page has no results list. The
    // bad borough is skipped; the city file is still written.
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("location", "York"))
        .respond_with(html(borough_search_page(&[
            ("North Yorkshire, York Central, YO1 7HB", "/results/york-central"),
            ("North Yorkshire, York Outer, YO30 4XL", "/results/york-outer"),
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/results/york-central"))
        .respond_with(html(centre_page(&["York Eye Clinic"])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/results/york-outer"))
        .respond_with(html("<html><body><p>maintenance</p></body></html>".to_string()))
        .mount(&server)
        .await;

    // No mock for Hull's search: the request 404s and the city is skipped.

    let output_dir =
        std::env::temp_dir().join(format!("sight-test-e2e-{}", std::process::id()));
    let config = test_config(&server, &output_dir);

    let builder = DirectoryBuilder::new(config).expect("failed to build DirectoryBuilder");
    let written = builder.run().await.expect("directory build failed");

    // Leeds and York written; Hull skipped; Aberdeen filtered out.
    assert_eq!(written, 2, "expected two city files");

    let leeds = std::fs::read_to_string(output_dir.join("leeds.csv")).unwrap();
    let leeds_rows: Vec<&str> = leeds.lines().collect();
    assert_eq!(
        leeds_rows[0],
        "County,Borough,Distance,CentreName,Address,Phone,MapLink"
    );
    // 2 centres from Leeds Central + 1 from Leeds North, in borough order.
    assert_eq!(leeds_rows.len(), 4);
    assert!(leeds_rows[1].starts_with("West Yorkshire,Leeds Central,"));
    assert!(leeds_rows[2].starts_with("West Yorkshire,Leeds Central,"));
    assert!(leeds_rows[3].starts_with("West Yorkshire,Leeds North,"));
    assert!(leeds_rows[1].contains("Vision Express"));
    assert!(leeds_rows[3].contains("Boots Opticians"));

    // The asterisk in "York*" is stripped before the file name is derived.
    let york = std::fs::read_to_string(output_dir.join("york.csv")).unwrap();
    let york_rows: Vec<&str> = york.lines().collect();
    assert_eq!(york_rows.len(), 2);
    assert!(york_rows[1].starts_with("North Yorkshire,York Central,"));
    assert!(york_rows[1].contains("York Eye Clinic"));

    assert!(
        !output_dir.join("hull.csv").exists(),
        "a city whose search fails should not produce a file"
    );
    assert!(!output_dir.join("aberdeen.csv").exists());

    std::fs::remove_dir_all(&output_dir).ok();
}

#[tokio::test]
async fn city_with_no_boroughs_produces_an_empty_file_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CITY_LIST_PATH))
        .respond_with(html(
            "<html><body><div id=\"contents\"><div class=\"govspeak\">\
               <h3>United Kingdom</h3>\
               <h4>England</h4><ul><li>Ely</li></ul>\
             </div></div></body></html>"
                .to_string(),
        ))
        .mount(&server)
        .await;

    // Disambiguation page with no borough list at all.
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("location", "Ely"))
        .respond_with(html(
            "<html><body><p>No results found.</p></body></html>".to_string(),
        ))
        .mount(&server)
        .await;

    let output_dir =
        std::env::temp_dir().join(format!("sight-test-e2e-empty-{}", std::process::id()));
    let config = test_config(&server, &output_dir);

    let builder = DirectoryBuilder::new(config).expect("failed to build DirectoryBuilder");
    let written = builder.run().await.expect("directory build failed");

    assert_eq!(written, 1);
    // No records means no header either; the file is just empty.
    let ely = std::fs::read_to_string(output_dir.join("ely.csv")).unwrap();
    assert!(ely.is_empty());

    std::fs::remove_dir_all(&output_dir).ok();
}

#[tokio::test]
async fn missing_city_list_aborts_the_run() {
    let server = MockServer::start().await;

    // The city-list page exists but the content container has moved.
    Mock::given(method("GET"))
        .and(path(CITY_LIST_PATH))
        .respond_with(html("<html><body><p>moved</p></body></html>".to_string()))
        .mount(&server)
        .await;

    let output_dir =
        std::env::temp_dir().join(format!("sight-test-e2e-fatal-{}", std::process::id()));
    let config = test_config(&server, &output_dir);

    let builder = DirectoryBuilder::new(config).expect("failed to build DirectoryBuilder");
    let result = builder.run().await;

    assert!(result.is_err(), "a missing city list must be fatal");
}
