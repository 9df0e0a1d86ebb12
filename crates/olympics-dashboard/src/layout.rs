//! The dashboard page

use crate::state::{AppState, RenderedFigure};
use olympics_common::escape_html;
use olympics_graphs::FigureId;
use std::fmt::Write;

const STYLESHEET: &str = include_str!("../assets/dashboard.css");
const SCRIPT: &str = include_str!("../assets/dashboard.js");

/// Element id of the container the sport callback replaces
pub const SPORT_FIGURES_ID: &str = "sport-figures";

fn figure_block(out: &mut String, figure: &RenderedFigure) {
    let _ = writeln!(
        out,
        "<div class=\"figure\" id=\"figure-{}\">{}</div>",
        figure.id(),
        figure.svg
    );
}

/// The sport figures as an HTML fragment
pub fn sport_fragment(figures: &[RenderedFigure]) -> String {
    let mut out = String::new();
    for figure in figures {
        figure_block(&mut out, figure);
    }
    out
}

/// `<option>` list with `selected` on the chosen sport
fn sport_options(options: &[String], selected: &str) -> String {
    let mut out = String::new();
    for sport in options {
        let sport = escape_html(sport);
        let marker = if sport == escape_html(selected) { " selected" } else { "" };
        let _ = writeln!(out, "<option value=\"{sport}\"{marker}>{sport}</option>");
    }
    out
}

/// Full page: static figures, the sport picker and the initial sport figures
pub fn render_page(state: &AppState, sport_figures: &[RenderedFigure]) -> String {
    let localizer = state.catalog().localizer();
    let settings = &state.config().dashboard;
    let lang = localizer.locale().code();
    let title = escape_html(&localizer.text("page-title"));

    let mut country = String::new();
    for figure in state.figures().iter().filter(|f| f.id() != FigureId::CountryStats) {
        figure_block(&mut country, figure);
    }

    let mut sport_section = String::new();
    if let Some(stats) = state.figure(FigureId::CountryStats) {
        figure_block(&mut sport_section, stats);
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
{STYLESHEET}</style>
</head>
<body>
<h1>{title}</h1>
<section id="country">
<h2>{country_heading}</h2>
{country}</section>
<section id="sport">
<h2>{sport_heading}</h2>
<div class="sport-picker">
<label for="sport-select">{select_label}</label>
<select id="sport-select">
{options}</select>
</div>
<div id="{SPORT_FIGURES_ID}">
{sport_figures}</div>
{sport_section}</section>
<script>
{SCRIPT}</script>
</body>
</html>
"#,
        country_heading = escape_html(&localizer.text("section-country")),
        sport_heading = escape_html(&localizer.text("section-sport")),
        select_label = escape_html(&localizer.text("sport-select-label")),
        options = sport_options(&settings.sport_options, &settings.default_sport),
        sport_figures = sport_fragment(sport_figures),
    )
}
