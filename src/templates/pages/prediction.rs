use maud::{html, Markup};

use crate::analysis::whatif::{Outcome, WhatIfReport};
use crate::templates::desktop_layout;

pub struct PredictionVm {
    pub accommodates: u32,
    pub report: WhatIfReport,
}

pub fn prediction_page(vm: &PredictionVm) -> Markup {
    desktop_layout(
        "Your price prediction",
        html! {
            main class="container" {
                h1 { "Predicting your listing's price" }
                p class="success" {
                    "Your listing is worth "
                    strong { (format!("{:.0}$", vm.report.baseline)) }
                    "!"
                }

                h2 { "Find ways to easily improve your price" }
                div class="whatif" {
                    (advice_card(
                        "Become a superhost",
                        vm.report.superhost,
                        "Good job, you are already a superhost!",
                        "By becoming a superhost, you could improve your price by",
                        "It seems that in your case, becoming a superhost would actually lower your price.",
                    ))
                    (advice_card(
                        "Verify your identity",
                        vm.report.identity_verified,
                        "Good job, you have already verified your account!",
                        "By verifying your account, you could improve your price by",
                        "It seems that in your case, verifying your account would actually lower your price.",
                    ))
                    (advice_card(
                        "Add a profile picture",
                        vm.report.profile_pic,
                        "Good job, you have already added a profile picture to your account!",
                        "By adding a profile picture to your account, you could improve your price by",
                        "It seems that in your case, adding a profile picture would actually lower your price.",
                    ))
                    (extra_guest_card(vm))
                }

                p { a href="/" { "← Back to the dashboard" } }
            }
        },
    )
}

fn advice_card(
    title: &str,
    outcome: Outcome,
    satisfied: &str,
    improves: &str,
    lowers: &str,
) -> Markup {
    html! {
        div class="advice" {
            h3 { (title) }
            @match outcome {
                Outcome::AlreadySatisfied => {
                    p class="success" { (satisfied) }
                }
                Outcome::Improvement(delta) => {
                    p { (improves) " " strong { (format!("{delta:.0}$")) } "!" }
                }
                Outcome::NoImprovement(_) => {
                    p class="muted" { (lowers) }
                }
            }
        }
    }
}

fn extra_guest_card(vm: &PredictionVm) -> Markup {
    html! {
        div class="advice" {
            h3 { (format!("Accommodate {} guests instead of {}", vm.accommodates + 1, vm.accommodates)) }
            @match vm.report.extra_guest {
                Outcome::Improvement(delta) => {
                    p {
                        "By adding a spare bed or a sofa couch to accommodate one more person, "
                        "you could improve your price by "
                        strong { (format!("{delta:.0}$")) }
                        "!"
                    }
                }
                _ => {
                    p class="muted" { "It seems that adding a bed would not improve your price." }
                }
            }
        }
    }
}
