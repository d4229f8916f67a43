use maud::{html, Markup};

use crate::analysis::lookup::{Comparison, Verdict};
use crate::analysis::summary::Summary;
use crate::domain::listing::Listing;
use crate::templates::components::{
    accuracy_scatter, bar_chart, listing_table, listings_map, metric_card,
};
use crate::templates::desktop_layout;

pub struct DashboardVm<'a> {
    // Filter form state
    pub price_floor: f64,
    pub price_ceiling: f64,
    pub price_min: f64,
    pub price_max: f64,
    pub room_type: Option<String>,
    pub neighbourhood_group: Option<String>,
    pub neighbourhood: Option<String>,
    pub room_types: Vec<&'a str>,
    pub neighbourhood_groups: Vec<&'a str>,
    pub neighbourhoods: Vec<&'a str>,
    pub show_detail: bool,
    pub show_graph: bool,
    pub export_href: String,

    // Derived views
    pub filtered: Vec<&'a Listing>,
    pub summary: Summary,
    pub superhost_prices: Vec<(String, f64)>,
    pub verified_prices: Vec<(String, f64)>,
    pub profile_pic_prices: Vec<(String, f64)>,
    pub lookup: Option<LookupVm<'a>>,
}

pub struct LookupVm<'a> {
    pub query: String,
    pub result: Option<FoundListingVm<'a>>,
}

pub struct FoundListingVm<'a> {
    pub host_name: &'a str,
    pub picture_url: &'a str,
    pub comparison: Comparison,
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    let map_points: Vec<(f64, f64)> = vm
        .filtered
        .iter()
        .map(|l| (l.latitude, l.longitude))
        .collect();
    let accuracy_points: Vec<(f64, f64)> = vm
        .filtered
        .iter()
        .map(|l| (l.price, l.predicted_price))
        .collect();

    desktop_layout(
        "AirBNB price dashboard",
        html! {
            main class="container" {
                h1 { "New York's AirBNB price explorer" }
                p {
                    "Find out more about New York's listings, or upload your own listing "
                    "to see what it is worth according to our predictions."
                }

                section class="card" {
                    h2 { "Overview of listings" }
                    (filter_form(vm))

                    div class="overview" {
                        (listings_map(&map_points))
                        div class="overview-side" {
                            p {
                                "Your filters match "
                                strong { (vm.summary.filtered_count) }
                                " of "
                                strong { (vm.summary.total_count) }
                                " listings."
                            }
                            (averages_block(&vm.summary))
                        }
                    }

                    @if vm.show_graph {
                        (accuracy_scatter(&accuracy_points))
                    }

                    @if vm.show_detail {
                        h3 { "Raw data" }
                        (listing_table(&vm.filtered))
                    }
                }

                section class="card" {
                    h2 { "Find ways to easily improve your price" }
                    p {
                        "Simple tricks can raise a listing's nightly price. The averages "
                        "below are computed over your current filter selection."
                    }
                    div class="chart-row" {
                        (bar_chart("Average price by superhost status", &vm.superhost_prices))
                        (bar_chart("Average price by identity verification", &vm.verified_prices))
                        (bar_chart("Average price by profile picture", &vm.profile_pic_prices))
                    }

                    h3 { "Predicting your listing's price" }
                    p {
                        "Paste your listing as CSV (header line plus one row), with the "
                        "same columns as the dataset minus " code { "predicted_price" } "."
                    }
                    form action="/predict" method="post" {
                        textarea
                            name="listing_csv"
                            rows="4"
                            placeholder="listing_url,host_name,picture_url,room_type,..." {}
                        button type="submit" { "Predict my price" }
                    }
                    p {
                        "If you want to test, we have prepared a couple of example listings: "
                        a href="/examples/example1.csv" { "example 1" } ", "
                        a href="/examples/example2.csv" { "example 2" } ", "
                        a href="/examples/example3.csv" { "example 3" } ", "
                        a href="/examples/example4.csv" { "example 4" } "."
                    }
                }

                section class="card" {
                    h2 { "Check if the listing you are considering is valued correctly" }
                    form action="/" method="get" {
                        input
                            type="text"
                            name="check_url"
                            value=[vm.lookup.as_ref().map(|l| l.query.as_str())]
                            placeholder="https://www.airbnb.com/rooms/9357";
                        button type="submit" { "Check listing" }
                    }
                    @if let Some(lookup) = &vm.lookup {
                        (lookup_result(lookup))
                    }
                }
            }
        },
    )
}

fn filter_form(vm: &DashboardVm) -> Markup {
    html! {
        form class="filters" action="/" method="get" {
            label {
                "Price from"
                input
                    type="number"
                    name="price_min"
                    value=(format!("{:.0}", vm.price_min))
                    min=(format!("{:.0}", vm.price_floor))
                    max=(format!("{:.0}", vm.price_ceiling))
                    step="5";
            }
            label {
                "to"
                input
                    type="number"
                    name="price_max"
                    value=(format!("{:.0}", vm.price_max))
                    min=(format!("{:.0}", vm.price_floor))
                    max=(format!("{:.0}", vm.price_ceiling))
                    step="5";
            }
            label {
                "Apartment type"
                select name="room_type" {
                    option value="All" { "All" }
                    @for room_type in &vm.room_types {
                        option value=(room_type) selected[vm.room_type.as_deref() == Some(*room_type)] {
                            (room_type)
                        }
                    }
                }
            }
            label {
                "Neighbourhood"
                // Submitting on change reveals the detailed select below.
                select name="group" onchange="this.form.submit()" {
                    option value="All" { "All" }
                    @for group in &vm.neighbourhood_groups {
                        option value=(group) selected[vm.neighbourhood_group.as_deref() == Some(*group)] {
                            (group)
                        }
                    }
                }
            }
            @if vm.neighbourhood_group.is_some() {
                label {
                    "Detailed neighbourhood"
                    select name="neighbourhood" {
                        option value="All" { "All" }
                        @for neighbourhood in &vm.neighbourhoods {
                            option value=(neighbourhood) selected[vm.neighbourhood.as_deref() == Some(*neighbourhood)] {
                                (neighbourhood)
                            }
                        }
                    }
                }
            }
            label class="checkbox" {
                input type="checkbox" name="detail" value="1" checked[vm.show_detail];
                "Show filtered results in detail"
            }
            label class="checkbox" {
                input type="checkbox" name="graph" value="1" checked[vm.show_graph];
                "Show prediction graph about filtered results"
            }
            button type="submit" { "Apply filters" }
            a class="button" href=(vm.export_href) { "Download as spreadsheet" }
        }
    }
}

fn averages_block(summary: &Summary) -> Markup {
    html! {
        @match &summary.averages {
            Some(averages) => {
                div class="metrics" {
                    (metric_card(
                        "Average price",
                        &format!("{:.0}$", averages.price.mean),
                        averages.price.delta,
                        "$ from mean",
                    ))
                    (metric_card(
                        "Average minimum nights",
                        &format!("{:.1}", averages.minimum_nights.mean),
                        averages.minimum_nights.delta,
                        "from mean",
                    ))
                    @match &averages.review_scores_rating {
                        Some(rating) => {
                            (metric_card(
                                "Average review rating",
                                &format!("{:.2}", rating.mean),
                                rating.delta,
                                "from mean",
                            ))
                        }
                        None => {
                            p class="muted" { "No review ratings in the current selection." }
                        }
                    }
                }
            }
            None => {
                p class="muted" {
                    "No listings match your filters, so there is nothing to average."
                }
            }
        }
    }
}

fn lookup_result(lookup: &LookupVm) -> Markup {
    html! {
        @match &lookup.result {
            Some(found) => {
                div class="lookup-result" {
                    @if !found.picture_url.is_empty() {
                        img src=(found.picture_url) alt="Listing picture" width="320";
                    }
                    div {
                        h3 { "The AirBNB is hosted by " (found.host_name) }
                        @match found.comparison.verdict {
                            Verdict::Overvalued => {
                                p {
                                    "The listing is valued at "
                                    strong { (format!("{:.0}$", found.comparison.price)) }
                                    ", but our predictions value it at "
                                    strong { (format!("{:.0}$", found.comparison.predicted_price)) }
                                    "."
                                }
                                p class="warning" { "You might be overpaying, so watch out!" }
                            }
                            Verdict::FairOrUndervalued => {
                                p {
                                    "The listing is valued at "
                                    strong { (format!("{:.0}$", found.comparison.price)) }
                                    " and our predictions value it at "
                                    strong { (format!("{:.0}$", found.comparison.predicted_price)) }
                                    "."
                                }
                                p class="success" { "It seems like you found yourself a catch!" }
                            }
                        }
                    }
                }
            }
            None => {
                p class="warning" {
                    "Your listing could not be found in our database, try changing the URL."
                }
            }
        }
    }
}
