use eframe::egui;

struct Palette {
    bg: egui::Color32,
    fg: egui::Color32,
    stroke: egui::Color32,
    accent: egui::Color32,
}

impl Palette {
    fn new(is_dark: bool) -> Self {
        if is_dark {
            Self {
                bg: egui::Color32::from_rgb(28, 28, 30),
                fg: egui::Color32::from_gray(235),
                stroke: egui::Color32::from_gray(90),
                accent: egui::Color32::from_rgb(64, 156, 255),
            }
        } else {
            Self {
                bg: egui::Color32::from_rgb(248, 248, 248),
                fg: egui::Color32::from_gray(25),
                stroke: egui::Color32::from_gray(160),
                accent: egui::Color32::from_rgb(0, 110, 230),
            }
        }
    }
}

pub fn configure_theme(ctx: &egui::Context, is_dark: bool) {
    let mut style = (*ctx.style()).clone();
    let palette = Palette::new(is_dark);

    style
        .text_styles
        .iter_mut()
        .for_each(|(text_style, font_id)| {
            font_id.size = match text_style {
                egui::TextStyle::Heading => 24.0,
                egui::TextStyle::Body => 14.0,
                egui::TextStyle::Button => 14.0,
                _ => font_id.size,
            };
        });

    style.spacing.item_spacing = egui::vec2(10.0, 10.0);
    style.spacing.button_padding = egui::vec2(14.0, 8.0);

    style.visuals.widgets.noninteractive.bg_stroke = egui::Stroke::new(1.0, palette.stroke);
    style.visuals.widgets.noninteractive.bg_fill = palette.bg;
    style.visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, palette.fg);

    style.visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.5, palette.accent);
    style.visuals.selection.bg_fill = palette.accent;

    style.visuals.panel_fill = palette.bg;
    style.visuals.override_text_color = Some(palette.fg);

    ctx.set_style(style);
}
