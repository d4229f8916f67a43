use std::collections::HashMap;
use std::io::Read;

use astra::Request;
use url::form_urlencoded;

use crate::analysis::filter::filter;
use crate::analysis::lookup::{find_by_url, Comparison};
use crate::analysis::summary::{group_mean, summarize};
use crate::analysis::whatif::evaluate_counterfactuals;
use crate::app::App;
use crate::dataset::upload::parse_new_listing;
use crate::domain::filter::{FilterConstraint, PriceRange, Selection};
use crate::domain::listing::Listing;
use crate::errors::ServerError;
use crate::responses::{csv_response, css_response, html_response, ResultResp};
use crate::spreadsheets::export_listings_xlsx;
use crate::templates::pages::{
    dashboard_page, prediction_page, DashboardVm, FoundListingVm, LookupVm, PredictionVm,
};

const STYLESHEET: &str = include_str!("../static/main.css");

const EXAMPLE_1: &str = include_str!("../data/examples/example1.csv");
const EXAMPLE_2: &str = include_str!("../data/examples/example2.csv");
const EXAMPLE_3: &str = include_str!("../data/examples/example3.csv");
const EXAMPLE_4: &str = include_str!("../data/examples/example4.csv");

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let params = parse_query(req.uri().query());

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => dashboard(&params, app),
        ("GET", "/export") => export(&params, app),
        ("POST", "/predict") => predict(&mut req, app),
        ("GET", "/static/main.css") => css_response(STYLESHEET),
        ("GET", "/examples/example1.csv") => csv_response(EXAMPLE_1, "example1.csv"),
        ("GET", "/examples/example2.csv") => csv_response(EXAMPLE_2, "example2.csv"),
        ("GET", "/examples/example3.csv") => csv_response(EXAMPLE_3, "example3.csv"),
        ("GET", "/examples/example4.csv") => csv_response(EXAMPLE_4, "example4.csv"),
        _ => Err(ServerError::NotFound),
    }
}

fn dashboard(params: &HashMap<String, String>, app: &App) -> ResultResp {
    let constraint = constraint_from_params(params, app)?;
    let listings = app.dataset.listings();

    let filtered = filter(listings, &constraint);
    let summary = summarize(&filtered, listings);

    let superhost_prices = labeled_means(
        &filtered,
        |l| l.host_is_superhost,
        "Superhost",
        "Not a superhost",
    );
    let verified_prices = labeled_means(
        &filtered,
        |l| l.host_identity_verified,
        "Identity verified",
        "Identity not verified",
    );
    let profile_pic_prices = labeled_means(
        &filtered,
        |l| l.host_has_profile_pic,
        "Has profile picture",
        "No profile picture",
    );

    let lookup = params
        .get("check_url")
        .map(|raw| raw.trim())
        .filter(|raw| !raw.is_empty())
        .map(|raw| LookupVm {
            query: raw.to_string(),
            result: find_by_url(listings, raw).map(|listing| FoundListingVm {
                host_name: &listing.host_name,
                picture_url: &listing.picture_url,
                comparison: Comparison::of(listing),
            }),
        });

    let (price_floor, price_ceiling) = app.dataset.price_bounds();
    let group = constraint.neighbourhood_group.value();

    let vm = DashboardVm {
        price_floor,
        price_ceiling,
        price_min: constraint.price.min(),
        price_max: constraint.price.max(),
        room_type: constraint.room_type.value().map(str::to_string),
        neighbourhood_group: group.map(str::to_string),
        neighbourhood: constraint.neighbourhood.value().map(str::to_string),
        room_types: app.dataset.room_types(),
        neighbourhood_groups: app.dataset.neighbourhood_groups(),
        neighbourhoods: group
            .map(|g| app.dataset.neighbourhoods_in(g))
            .unwrap_or_default(),
        show_detail: params.get("detail").map(String::as_str) == Some("1"),
        show_graph: params.get("graph").map(String::as_str) == Some("1"),
        export_href: format!("/export?{}", filter_query(params)),
        filtered,
        summary,
        superhost_prices,
        verified_prices,
        profile_pic_prices,
        lookup,
    };

    html_response(dashboard_page(&vm))
}

fn export(params: &HashMap<String, String>, app: &App) -> ResultResp {
    let constraint = constraint_from_params(params, app)?;
    let filtered = filter(app.dataset.listings(), &constraint);
    export_listings_xlsx(&filtered)
}

fn predict(req: &mut Request, app: &App) -> ResultResp {
    let content_type = req
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    let body = read_body(req)?;

    // The dashboard form posts the pasted row urlencoded; tools like curl
    // can send the CSV raw instead.
    let csv_text = if content_type.starts_with("application/x-www-form-urlencoded") {
        form_urlencoded::parse(body.as_bytes())
            .into_owned()
            .collect::<HashMap<String, String>>()
            .remove("listing_csv")
            .ok_or_else(|| ServerError::BadRequest("missing form field listing_csv".to_string()))?
    } else {
        body
    };

    if csv_text.trim().is_empty() {
        return Err(ServerError::BadRequest(
            "no listing data was submitted".to_string(),
        ));
    }

    let listing = parse_new_listing(&csv_text)?;
    let report = evaluate_counterfactuals(&listing, &app.model)?;

    let vm = PredictionVm {
        accommodates: listing.accommodates,
        report,
    };
    html_response(prediction_page(&vm))
}

/// Builds the constraint for this interaction. Absent price bounds fall
/// back to the dataset's own range, like the original slider defaults.
fn constraint_from_params(
    params: &HashMap<String, String>,
    app: &App,
) -> Result<FilterConstraint, ServerError> {
    let (floor, ceiling) = app.dataset.price_bounds();
    let price_min = parse_price(params.get("price_min"), floor)?;
    let price_max = parse_price(params.get("price_max"), ceiling)?;
    let price = PriceRange::new(price_min, price_max).map_err(ServerError::BadRequest)?;

    Ok(FilterConstraint {
        price,
        room_type: Selection::from_param(params.get("room_type").map(String::as_str)),
        neighbourhood_group: Selection::from_param(params.get("group").map(String::as_str)),
        neighbourhood: Selection::from_param(params.get("neighbourhood").map(String::as_str)),
    })
}

fn parse_price(value: Option<&String>, default: f64) -> Result<f64, ServerError> {
    match value.map(String::as_str) {
        None | Some("") => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| ServerError::BadRequest(format!("{raw} is not a valid price"))),
    }
}

/// The current filter parameters, re-encoded for the export link.
fn filter_query(params: &HashMap<String, String>) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for key in ["price_min", "price_max", "room_type", "group", "neighbourhood"] {
        if let Some(value) = params.get(key) {
            if !value.is_empty() {
                serializer.append_pair(key, value);
            }
        }
    }
    serializer.finish()
}

fn parse_query(query: Option<&str>) -> HashMap<String, String> {
    match query {
        Some(q) => form_urlencoded::parse(q.as_bytes()).into_owned().collect(),
        None => HashMap::new(),
    }
}

fn read_body(req: &mut Request) -> Result<String, ServerError> {
    let mut body = String::new();
    req.body_mut()
        .reader()
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("could not read the request body: {e}")))?;
    Ok(body)
}

fn labeled_means(
    filtered: &[&Listing],
    key: impl Fn(&Listing) -> bool,
    yes: &str,
    no: &str,
) -> Vec<(String, f64)> {
    group_mean(filtered, key, |l| l.price)
        .into_iter()
        .map(|(flag, mean)| (if flag { yes } else { no }.to_string(), mean))
        .collect()
}
