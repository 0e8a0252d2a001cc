//! HTML rendering for the single-page form

use std::fmt::Write as _;

use crate::domain::form::{
    FormInput, FormOptions, AMOUNT_MIN, AREA_MIN, AREA_STEP, PH_MAX, PH_MIN, PH_STEP,
};
use crate::domain::prediction::{ViewState, ADVISORY_NOTE, METRIC_LABEL, RESULT_HEADING};

const TITLE: &str = "Crop Yield Predictor";

const STYLE: &str = "\
body{font-family:sans-serif;margin:2rem auto;max-width:1100px;padding:0 1rem}\
.columns{display:grid;grid-template-columns:repeat(3,1fr);gap:2rem}\
label{display:block;margin-top:.8rem}\
select,input[type=number]{width:100%;padding:.3rem}\
button{width:100%;margin-top:1.5rem;padding:.7rem;font-size:1rem}\
.error{background:#fde8e8;border:1px solid #f5a5a5;padding:.8rem;margin-top:1rem}\
.warning{background:#fff7e0;border:1px solid #f0c36d;padding:.8rem;margin-top:1rem}\
.info{background:#e8f1fd;border:1px solid #9cc2f5;padding:.8rem;margin-top:1rem}\
.metric-label{color:#555}.metric-value{font-size:2rem;font-weight:bold}";

/// Render the whole page for the given form values and view state.
pub fn render(
    options: &FormOptions,
    input:   &FormInput,
    state:   &ViewState,
    notice:  Option<&str>,
) -> String {
    let mut html = String::with_capacity(8 * 1024);

    let _ = write!(
        html,
        "<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">\
         <title>{TITLE}</title><style>{STYLE}</style></head><body>\
         <h1>&#127806; Indian Crop Yield Predictor</h1>\
         <p>Enter the details below to predict the crop yield for a given area.</p>"
    );

    if let Some(notice) = notice {
        let _ = write!(html, "<div class=\"warning\">{}</div>", escape(notice));
    }

    html.push_str("<form method=\"post\" action=\"/predict\"><div class=\"columns\">");

    // ── Location ──────────────────────────────────────────────────────────────
    html.push_str("<section><h2>Location</h2>");
    select(&mut html, "state", "State", &options.states, &input.state);
    select(&mut html, "district", "District", &options.districts, &input.district);
    html.push_str("</section>");

    // ── Crop Details ──────────────────────────────────────────────────────────
    html.push_str("<section><h2>Crop Details</h2>");
    select(&mut html, "season", "Season", &options.seasons, &input.season);
    select(&mut html, "crop", "Crop", &options.crops, &input.crop);
    number(&mut html, "area", "Area (Hectares)", AREA_MIN, AREA_STEP, input.area);
    html.push_str("</section>");

    // ── Environmental Factors ─────────────────────────────────────────────────
    html.push_str("<section><h2>Environmental Factors</h2>");
    number(&mut html, "rainfall", "Annual Rainfall (mm)", AMOUNT_MIN, 0.01, input.rainfall);
    number(&mut html, "fertilizer", "Fertilizer Usage (kg)", AMOUNT_MIN, 0.01, input.fertilizer);
    number(&mut html, "pesticide", "Pesticide Usage (kg)", AMOUNT_MIN, 0.01, input.pesticide);
    let _ = write!(
        html,
        "<label for=\"ph\">Soil pH: <output id=\"ph-value\">{ph:.1}</output></label>\
         <input type=\"range\" id=\"ph\" name=\"ph\" min=\"{PH_MIN:.1}\" max=\"{PH_MAX:.1}\" \
         step=\"{PH_STEP}\" value=\"{ph:.1}\" \
         oninput=\"document.getElementById('ph-value').value=Number(this.value).toFixed(1)\">",
        ph = input.ph,
    );
    html.push_str("</section>");

    html.push_str("</div><button type=\"submit\">Predict Crop Yield</button></form>");

    // ── Outcome ───────────────────────────────────────────────────────────────
    if let Some(prediction) = state.prediction() {
        let _ = write!(
            html,
            "<h3>{RESULT_HEADING}</h3>\
             <div class=\"metric\"><div class=\"metric-label\">{METRIC_LABEL}</div>\
             <div class=\"metric-value\">{}</div></div>\
             <div class=\"info\">{ADVISORY_NOTE}</div>",
            escape(&prediction.display_value()),
        );
    } else if let Some(error) = state.error() {
        let _ = write!(
            html,
            "<div class=\"error\">Prediction failed: {}</div>",
            escape(error)
        );
    }

    html.push_str("</body></html>");
    html
}

fn select(html: &mut String, name: &str, label: &str, options: &[String], selected: &str) {
    let _ = write!(html, "<label for=\"{name}\">{label}</label><select id=\"{name}\" name=\"{name}\">");
    for option in options {
        let marker = if option == selected { " selected" } else { "" };
        let value  = escape(option);
        let _ = write!(html, "<option value=\"{value}\"{marker}>{value}</option>");
    }
    html.push_str("</select>");
}

fn number(
    html:  &mut String,
    name:  &str,
    label: &str,
    min:   f64,
    step:  f64,
    value: f64,
) {
    let _ = write!(
        html,
        "<label for=\"{name}\">{label}</label>\
         <input type=\"number\" id=\"{name}\" name=\"{name}\" min=\"{min:.2}\" \
         step=\"{step}\" value=\"{value:.2}\" required>"
    );
}

/// Minimal HTML escaping for text and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&'  => out.push_str("&amp;"),
            '<'  => out.push_str("&lt;"),
            '>'  => out.push_str("&gt;"),
            '"'  => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c    => out.push(c),
        }
    }
    out
}
