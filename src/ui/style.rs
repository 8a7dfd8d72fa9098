//! Reader for Qt-style sheets (`styles.qss`), mapped onto `egui::Style`.
//!
//! Only the handful of selectors and properties a small widget tree needs are
//! understood; everything else is skipped with a debug log.

use egui::{Color32, FontId, TextStyle, Vec2};

/// One `selector[, selector] { prop: value; ... }` block.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub selectors: Vec<String>,
    pub declarations: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleSheet {
    rules: Vec<Rule>,
}

impl StyleSheet {
    pub fn parse(source: &str) -> Self {
        let source = strip_comments(source);
        let mut rules = Vec::new();

        for block in source.split('}') {
            let Some((head, body)) = block.split_once('{') else {
                continue;
            };
            let selectors: Vec<String> = head
                .split(',')
                .map(|s| s.trim().to_owned())
                .filter(|s| !s.is_empty())
                .collect();
            if selectors.is_empty() {
                continue;
            }
            let declarations = body
                .split(';')
                .filter_map(|decl| decl.split_once(':'))
                .map(|(k, v)| (k.trim().to_ascii_lowercase(), v.trim().to_owned()))
                .filter(|(k, v)| !k.is_empty() && !v.is_empty())
                .collect();
            rules.push(Rule {
                selectors,
                declarations,
            });
        }

        Self { rules }
    }

    #[cfg(test)]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Apply to the live context.
    pub fn apply(&self, ctx: &egui::Context) {
        ctx.style_mut(|style| self.apply_to(style));
    }

    /// Rules are applied in order; later declarations win.
    pub fn apply_to(&self, style: &mut egui::Style) {
        for rule in &self.rules {
            for selector in &rule.selectors {
                let Some(target) = Target::from_selector(selector) else {
                    log::debug!("stylesheet: ignoring selector {selector:?}");
                    continue;
                };
                for (property, value) in &rule.declarations {
                    if !apply_declaration(style, target, property, value) {
                        log::debug!("stylesheet: ignoring {selector} {{ {property}: {value} }}");
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Any,
    Label,
    Button,
}

impl Target {
    fn from_selector(selector: &str) -> Option<Self> {
        match selector {
            "*" | "QWidget" | "QMainWindow" => Some(Self::Any),
            "QLabel" => Some(Self::Label),
            "QPushButton" => Some(Self::Button),
            _ => None,
        }
    }
}

fn apply_declaration(style: &mut egui::Style, target: Target, property: &str, value: &str) -> bool {
    match (target, property) {
        (Target::Any | Target::Label, "color") => parse_color(value)
            .map(|c| style.visuals.override_text_color = Some(c))
            .is_some(),
        (Target::Any, "background-color") => parse_color(value)
            .map(|c| {
                style.visuals.panel_fill = c;
                style.visuals.window_fill = c;
            })
            .is_some(),
        (Target::Any, "font-size") => parse_length(value)
            .map(|size| {
                for font in style.text_styles.values_mut() {
                    font.size = size;
                }
            })
            .is_some(),
        (Target::Label, "font-size") => parse_length(value)
            .map(|size| set_font_size(style, TextStyle::Body, size))
            .is_some(),
        (Target::Button, "color") => parse_color(value)
            .map(|c| {
                let widgets = &mut style.visuals.widgets;
                for state in [&mut widgets.inactive, &mut widgets.hovered, &mut widgets.active] {
                    state.fg_stroke.color = c;
                }
            })
            .is_some(),
        (Target::Button, "background-color") => parse_color(value)
            .map(|c| {
                let widgets = &mut style.visuals.widgets;
                widgets.inactive.weak_bg_fill = c;
                widgets.inactive.bg_fill = c;
                widgets.hovered.weak_bg_fill = c.gamma_multiply(0.85);
                widgets.active.weak_bg_fill = c.gamma_multiply(0.7);
            })
            .is_some(),
        (Target::Button, "font-size") => parse_length(value)
            .map(|size| set_font_size(style, TextStyle::Button, size))
            .is_some(),
        (Target::Button, "padding") => parse_length(value)
            .map(|pad| style.spacing.button_padding = Vec2::splat(pad))
            .is_some(),
        _ => false,
    }
}

fn set_font_size(style: &mut egui::Style, text_style: TextStyle, size: f32) {
    style
        .text_styles
        .entry(text_style)
        .and_modify(|font| font.size = size)
        .or_insert_with(|| FontId::proportional(size));
}

fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;
    while let Some(start) = rest.find("/*") {
        out.push_str(&rest[..start]);
        match rest[start + 2..].find("*/") {
            Some(end) => rest = &rest[start + 2 + end + 2..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}

/// `18px`, `18pt` or a bare number.
fn parse_length(value: &str) -> Option<f32> {
    let value = value.trim();
    let number = value
        .strip_suffix("px")
        .or_else(|| value.strip_suffix("pt"))
        .unwrap_or(value);
    number.trim().parse::<f32>().ok().filter(|n| *n >= 0.0)
}

/// `#rgb`, `#rrggbb`, `rgb(r, g, b)` or a basic colour name.
fn parse_color(value: &str) -> Option<Color32> {
    let value = value.trim().to_ascii_lowercase();

    if let Some(hex) = value.strip_prefix('#') {
        if !hex.is_ascii() {
            return None;
        }
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        return match hex.len() {
            3 => {
                let mut rgb = [0u8; 3];
                for (i, c) in hex.chars().enumerate() {
                    let v = c.to_digit(16)? as u8;
                    rgb[i] = v * 17;
                }
                Some(Color32::from_rgb(rgb[0], rgb[1], rgb[2]))
            }
            6 => Some(Color32::from_rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            _ => None,
        };
    }

    if let Some(args) = value.strip_prefix("rgb(").and_then(|v| v.strip_suffix(')')) {
        let parts: Vec<u8> = args
            .split(',')
            .map(|p| p.trim().parse::<u8>())
            .collect::<std::result::Result<_, _>>()
            .ok()?;
        return match parts[..] {
            [r, g, b] => Some(Color32::from_rgb(r, g, b)),
            _ => None,
        };
    }

    Some(match value.as_str() {
        "black" => Color32::BLACK,
        "white" => Color32::WHITE,
        "red" => Color32::RED,
        "green" => Color32::GREEN,
        "blue" => Color32::BLUE,
        "yellow" => Color32::YELLOW,
        "gray" | "grey" => Color32::GRAY,
        "transparent" => Color32::TRANSPARENT,
        _ => return None,
    })
}
