use anyhow::Result;
use rgb_hsi::{log_info, ColorSpaceConverter, Rgb, Swatch, VisualizerSettings};

const WINDOW_TITLE: &str = "HSI → RGB Interactive Color";

pub struct HsiVisualizer {
    hue: f64,
    saturation: f64,
    intensity: f64,
    swatch_size: u32,
    rgb: Rgb,
    texture: Option<egui::TextureHandle>,
    texture_stale: bool,
}

impl HsiVisualizer {
    pub fn new(settings: &VisualizerSettings) -> Self {
        let mut visualizer = Self {
            hue: settings.hue,
            saturation: settings.saturation,
            intensity: settings.intensity,
            swatch_size: settings.swatch_size.max(1),
            rgb: Rgb::default(),
            texture: None,
            texture_stale: true,
        };
        visualizer.recompute();
        visualizer
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    fn recompute(&mut self) {
        self.rgb = ColorSpaceConverter::hsi_to_rgb(self.hue, self.saturation, self.intensity).into();
        self.texture_stale = true;
    }

    fn set_hsi(&mut self, hue: f64, saturation: f64, intensity: f64) {
        self.hue = hue;
        self.saturation = saturation;
        self.intensity = intensity;
        self.recompute();
    }

    fn refresh_texture(&mut self, ctx: &egui::Context) {
        if !self.texture_stale {
            return;
        }

        let swatch = Swatch::solid(self.rgb, self.swatch_size);
        let side = swatch.size() as usize;
        let color_image = egui::ColorImage::from_rgba_unmultiplied([side, side], swatch.rgba_bytes());

        match self.texture {
            Some(ref mut texture) => texture.set(color_image, egui::TextureOptions::NEAREST),
            None => {
                self.texture = Some(ctx.load_texture("hsi_swatch", color_image, egui::TextureOptions::NEAREST));
            }
        }
        self.texture_stale = false;
    }
}

impl eframe::App for HsiVisualizer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.refresh_texture(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(WINDOW_TITLE);
                ui.add_space(10.0);

                if let Some(ref texture) = self.texture {
                    let side = self.swatch_size as f32;
                    ui.add(egui::Image::new(texture).max_size(egui::vec2(side, side)));
                }

                ui.add_space(6.0);
                ui.label(
                    egui::RichText::new(format!("RGB {}  {}", self.rgb, self.rgb.to_hex()))
                        .monospace()
                        .color(egui::Color32::from_rgb(200, 200, 200)),
                );
            });

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            let (mut hue, mut saturation, mut intensity) = (self.hue, self.saturation, self.intensity);
            let mut changed = false;

            egui::Grid::new("hsi_sliders")
                .num_columns(2)
                .spacing([20.0, 10.0])
                .show(ui, |ui| {
                    ui.label("Hue (°)");
                    changed |= ui.add(egui::Slider::new(&mut hue, 0.0..=360.0)).changed();
                    ui.end_row();

                    ui.label("Saturation");
                    changed |= ui.add(egui::Slider::new(&mut saturation, 0.0..=1.0)).changed();
                    ui.end_row();

                    ui.label("Intensity");
                    changed |= ui.add(egui::Slider::new(&mut intensity, 0.0..=1.0)).changed();
                    ui.end_row();
                });

            if changed {
                self.set_hsi(hue, saturation, intensity);
                log_info!(
                    "Sliders H={:.2} S={:.3} I={:.3} -> RGB {}",
                    hue,
                    saturation,
                    intensity,
                    self.rgb
                );
                ctx.request_repaint();
            }
        });
    }
}

pub fn run(settings: &VisualizerSettings) -> Result<()> {
    let side = settings.swatch_size.max(1) as f32;
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([side.max(320.0) + 80.0, side + 220.0])
            .with_title(WINDOW_TITLE)
            .with_resizable(false)
            .with_maximize_button(false),
        ..Default::default()
    };

    let visualizer = HsiVisualizer::new(settings);
    log_info!("Opening visualizer with initial RGB {}", visualizer.rgb());

    let result = eframe::run_native(
        WINDOW_TITLE,
        native_options,
        Box::new(move |_cc| Ok(Box::new(visualizer))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run visualizer: {}", e));

    log_info!("Visualizer closed");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_color_from_settings() {
        let visualizer = HsiVisualizer::new(&VisualizerSettings::default());
        assert_eq!(visualizer.rgb(), Rgb::new(255, 0, 0));
        assert!(visualizer.texture_stale);
    }

    #[test]
    fn test_slider_change_recomputes() {
        let mut visualizer = HsiVisualizer::new(&VisualizerSettings::default());
        visualizer.texture_stale = false;

        visualizer.set_hsi(120.0, 1.0, 1.0 / 3.0);
        assert_eq!(visualizer.rgb(), Rgb::new(0, 255, 0));
        assert!(visualizer.texture_stale);

        visualizer.set_hsi(300.0, 0.0, 0.5);
        assert_eq!(visualizer.rgb(), Rgb::new(128, 128, 128));
    }
}
