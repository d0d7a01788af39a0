//! Stylesheet assembly.

use crate::settings::StyleSettings;
use crate::types::{CopperPalette, Shade};

use super::normalize::ButtonStyle;
use super::rules::synthesize_rules;
use super::ThemeTables;

/// Body selector the site layout opts into.
const THEME_SCOPE: &str = r#"body[data-site-theme="1"]"#;

/// Matches call-to-action links and buttons styled as copper gradients.
const GRADIENT_BUTTON: &str =
    r#":is(a,button)[class*="bg-gradient-to-r"][class*="from-copper-"][class*="to-copper-"]"#;

/// Build the full theme stylesheet with the standard tables.
pub fn build_copper_theme_css(primary_color: Option<&str>, style: &StyleSettings) -> String {
    build_copper_theme_css_with(primary_color, style, &ThemeTables::default())
}

/// Build the full theme stylesheet using explicit tables.
pub fn build_copper_theme_css_with(
    primary_color: Option<&str>,
    style: &StyleSettings,
    tables: &ThemeTables,
) -> String {
    let palette = tables.palette(primary_color);
    let rules = synthesize_rules(&tables.opacity_steps);

    format!(
        ":root{{{}}}\n{}\n{}\n{}",
        root_variables(&palette),
        base_css(style),
        button_css(style.button_style()),
        rules.join("\n")
    )
}

/// `--color-copper-{shade}` and `--color-copper-{shade}-rgb` for every shade.
pub fn root_variables(palette: &CopperPalette) -> String {
    palette
        .iter()
        .map(|(shade, colour)| {
            format!(
                "--color-copper-{shade}:{};--color-copper-{shade}-rgb:{};",
                colour.to_hex(),
                colour.rgb_triplet()
            )
        })
        .collect()
}

/// Page background, text colour and font, scoped to themed bodies.
pub fn base_css(style: &StyleSettings) -> String {
    format!(
        "\n{THEME_SCOPE}{{background-color:{};color:{};font-family:{};}}\n\
         {THEME_SCOPE} a,{THEME_SCOPE} button{{font-family:inherit;}}\n",
        style.background(),
        style.text(),
        style.font_family().stack()
    )
}

/// Overrides for gradient call-to-action buttons.
pub fn button_css(style: ButtonStyle) -> String {
    let shade = |s: Shade| format!("rgb(var(--color-copper-{}-rgb))", s);

    match style {
        ButtonStyle::Solid => format!(
            "\n{THEME_SCOPE} {GRADIENT_BUTTON}{{background-image:none!important;background-color:{}!important;}}\n\
             {THEME_SCOPE} {GRADIENT_BUTTON}:hover{{background-image:none!important;background-color:{}!important;}}\n",
            shade(Shade::S600),
            shade(Shade::S700)
        ),
        ButtonStyle::Gradient => format!(
            "\n{THEME_SCOPE} {GRADIENT_BUTTON}{{background-image:linear-gradient(90deg,{primary} 0%,#000 100%)!important;color:#fff!important;border:1px solid transparent!important;}}\n\
             {THEME_SCOPE} {GRADIENT_BUTTON}:hover{{background-image:none!important;background-color:#fff!important;color:{primary}!important;border-color:{primary}!important;}}\n",
            primary = shade(Shade::S500)
        ),
    }
}
