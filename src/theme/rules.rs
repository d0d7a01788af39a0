//! Utility-class rule synthesis.
//!
//! Every rule is described by a [`RuleFamily`] row; a rule is the product
//! `(shade, opacity, family) -> selector{declarations}`. Selector escaping
//! (`\:` for variant prefixes, `\/` for opacity suffixes) must match the
//! class names used in page markup byte for byte.

use std::fmt;

use crate::types::Shade;

/// An opacity percentage applied to a shade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OpacityStep(u8);

impl OpacityStep {
    pub const fn new(percent: u8) -> Self {
        Self(percent)
    }

    pub const fn percent(self) -> u8 {
        self.0
    }

    /// Zero and 100+ both mean "no opacity modifier".
    pub const fn is_opaque(self) -> bool {
        self.0 == 0 || self.0 >= 100
    }

    /// Alpha as the shortest decimal (`60` -> `0.6`, `18` -> `0.18`).
    pub fn alpha(self) -> String {
        if self.0 >= 100 {
            "1".to_string()
        } else {
            (f64::from(self.0) / 100.0).to_string()
        }
    }
}

impl fmt::Display for OpacityStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opacity modifiers generated for every shade.
pub const OPACITY_STEPS: [OpacityStep; 14] = [
    OpacityStep(10),
    OpacityStep(18),
    OpacityStep(20),
    OpacityStep(25),
    OpacityStep(30),
    OpacityStep(40),
    OpacityStep(45),
    OpacityStep(50),
    OpacityStep(60),
    OpacityStep(70),
    OpacityStep(80),
    OpacityStep(90),
    OpacityStep(95),
    OpacityStep(100),
];

/// Colour reference for a shade, going through its `-rgb` custom property.
pub fn colour_expr(shade: Shade, opacity: OpacityStep) -> String {
    if opacity.is_opaque() {
        format!("rgb(var(--color-copper-{}-rgb))", shade)
    } else {
        format!("rgb(var(--color-copper-{}-rgb) / {})", shade, opacity.alpha())
    }
}

/// Append the escaped `\/NN` opacity suffix unless the step is opaque.
pub fn class_with_opacity(base_class: &str, opacity: OpacityStep) -> String {
    if opacity.is_opaque() {
        base_class.to_string()
    } else {
        format!("{}\\/{}", base_class, opacity)
    }
}

/// Fully transparent version of a shade, used as the far gradient stop.
fn transparent_expr(shade: Shade) -> String {
    format!("rgb(var(--color-copper-{}-rgb) / 0)", shade)
}

/// What a family's rule body sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration {
    /// A single property set to the colour expression.
    Property(&'static str),
    /// Gradient start stop, fading to a transparent copy of the same shade.
    GradientFrom,
    /// Gradient middle stop.
    GradientVia,
    /// Gradient end stop.
    GradientTo,
}

impl Declaration {
    /// Render the declaration block contents (without braces).
    pub fn render(self, shade: Shade, opacity: OpacityStep) -> String {
        let expr = colour_expr(shade, opacity);
        match self {
            Declaration::Property(property) => format!("{}:{};", property, expr),
            Declaration::GradientFrom => format!(
                "--tw-gradient-from:{} var(--tw-gradient-from-position);\
                 --tw-gradient-to:{} var(--tw-gradient-to-position);\
                 --tw-gradient-stops:var(--tw-gradient-from),var(--tw-gradient-to);",
                expr,
                transparent_expr(shade)
            ),
            Declaration::GradientVia => format!(
                "--tw-gradient-to:{} var(--tw-gradient-to-position);\
                 --tw-gradient-stops:var(--tw-gradient-from),{} var(--tw-gradient-via-position),var(--tw-gradient-to);",
                transparent_expr(shade),
                expr
            ),
            Declaration::GradientTo => {
                format!("--tw-gradient-to:{} var(--tw-gradient-to-position);", expr)
            }
        }
    }
}

/// One row of the utility-class table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleFamily {
    /// Class prefix before `-copper-{shade}`, already selector-escaped.
    pub prefix: &'static str,
    /// Pseudo-class appended to the selector.
    pub pseudo: Option<&'static str>,
    pub declaration: Declaration,
}

impl RuleFamily {
    const fn new(prefix: &'static str, declaration: Declaration) -> Self {
        Self {
            prefix,
            pseudo: None,
            declaration,
        }
    }

    const fn on(prefix: &'static str, pseudo: &'static str, declaration: Declaration) -> Self {
        Self {
            prefix,
            pseudo: Some(pseudo),
            declaration,
        }
    }

    /// Escaped class name for a shade and opacity.
    pub fn class_name(&self, shade: Shade, opacity: OpacityStep) -> String {
        class_with_opacity(&format!("{}-copper-{}", self.prefix, shade), opacity)
    }

    /// Complete CSS rule for a shade and opacity.
    pub fn rule(&self, shade: Shade, opacity: OpacityStep) -> String {
        let pseudo = self.pseudo.map(|p| format!(":{}", p)).unwrap_or_default();
        format!(
            ".{}{}{{{}}}",
            self.class_name(shade, opacity),
            pseudo,
            self.declaration.render(shade, opacity)
        )
    }
}

/// Plain colour utilities, each emitted across every shade and opacity in turn.
pub const STATIC_FAMILIES: [RuleFamily; 3] = [
    RuleFamily::new("text", Declaration::Property("color")),
    RuleFamily::new("bg", Declaration::Property("background-color")),
    RuleFamily::new("border", Declaration::Property("border-color")),
];

/// Ring, gradient and interaction-state utilities, interleaved per shade and opacity.
pub const STATE_FAMILIES: [RuleFamily; 9] = [
    RuleFamily::new("ring", Declaration::Property("--tw-ring-color")),
    RuleFamily::new("from", Declaration::GradientFrom),
    RuleFamily::new("via", Declaration::GradientVia),
    RuleFamily::new("to", Declaration::GradientTo),
    RuleFamily::on("focus\\:border", "focus", Declaration::Property("border-color")),
    RuleFamily::on("focus\\:ring", "focus", Declaration::Property("--tw-ring-color")),
    RuleFamily::on("hover\\:bg", "hover", Declaration::Property("background-color")),
    RuleFamily::on("hover\\:text", "hover", Declaration::Property("color")),
    RuleFamily::on("hover\\:border", "hover", Declaration::Property("border-color")),
];

/// Generate every utility rule in stable output order.
pub fn synthesize_rules(opacity_steps: &[OpacityStep]) -> Vec<String> {
    let families = STATIC_FAMILIES.len() + STATE_FAMILIES.len();
    let mut rules = Vec::with_capacity(Shade::ALL.len() * opacity_steps.len() * families);

    for family in &STATIC_FAMILIES {
        for shade in Shade::ALL {
            for &opacity in opacity_steps {
                rules.push(family.rule(shade, opacity));
            }
        }
    }

    for shade in Shade::ALL {
        for &opacity in opacity_steps {
            rules.extend(STATE_FAMILIES.iter().map(|family| family.rule(shade, opacity)));
        }
    }

    rules
}
