//! Page content rendering
//!
//! Draws the content tree inside a vertical scroll area, measures every
//! section and anchor for the navigation controller, applies smooth-scroll
//! animation, and feeds the scroll offset to the scroll spy.

use eframe::egui;
use egui::RichText;
use eduhack::{palette, ContentNode, Countdown, NodeKind, Region, ThemeColors};
use crate::app::AppState;
use crate::ui::countdown_view::render_countdown;
use crate::ui::particles_layer::paint_particles;

/// Id of the element that hosts the countdown display
const COUNTDOWN_HOST_ID: &str = "countdown";
const SECTION_SPACING: f32 = 48.0;
const CONTENT_MARGIN: i8 = 24;

/// Geometry captured while drawing, relative to the content top
#[derive(Default)]
struct LayoutCollector {
    origin: f32,
    regions: Vec<Region>,
    anchors: Vec<(String, f32)>,
}

impl LayoutCollector {
    fn record(&mut self, node: &ContentNode, rect: egui::Rect) {
        let Some(id) = node.non_empty_id() else {
            return;
        };
        let top = rect.top() - self.origin;
        if node.kind == NodeKind::Section {
            self.regions.push(Region::new(id, top, rect.height()));
        }
        self.anchors.push((id.to_string(), top));
    }
}

/// What node rendering needs besides the node itself
struct RenderContext<'a> {
    countdown: &'a Countdown,
    countdown_labels: &'a [String; 4],
    colors: ThemeColors,
}

/// Renders the page in the central panel
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Mutable reference to application state
pub fn render_page_panel(ui: &mut egui::Ui, state: &mut AppState) {
    let now = ui.input(|i| i.time);

    if state.layout.show_particles() {
        paint_particles(ui.painter(), &state.particles, ui.max_rect(), now);
    }

    let Some(document) = state.page.document() else {
        ui.centered_and_justified(|ui| {
            ui.label("No page loaded");
        });
        return;
    };

    let mut scroll_area = egui::ScrollArea::vertical()
        .id_salt("page_scroll")
        .auto_shrink([false, false]);
    if let Some(offset) = state.navigation.animate(now) {
        scroll_area = scroll_area.vertical_scroll_offset(offset);
        ui.ctx().request_repaint();
    }

    let render_ctx = RenderContext {
        countdown: &state.countdown,
        countdown_labels: &document.config.countdown_labels,
        colors: palette(state.theme.current()),
    };

    let mut collector = LayoutCollector::default();
    let output = scroll_area.show(ui, |ui| {
        // Tops are measured from the scrollable content's top edge
        collector.origin = ui.min_rect().top();
        egui::Frame::default()
            .inner_margin(egui::Margin::same(CONTENT_MARGIN))
            .show(ui, |ui| {
                render_node(ui, &document.root, &render_ctx, &mut collector);
            });
    });

    let offset = output.state.offset.y;
    state.navigation.set_layout(collector.regions, collector.anchors);
    state.navigation.on_scroll(offset);
    state.layout.set_scroll_offset(offset);
}

fn render_node(ui: &mut egui::Ui, node: &ContentNode, render_ctx: &RenderContext, collector: &mut LayoutCollector) {
    let rect = match node.kind {
        NodeKind::Heading(level) => {
            let size = match level {
                1 => 34.0,
                2 => 26.0,
                3 => 20.0,
                _ => 16.0,
            };
            let heading = RichText::new(node.text.as_str()).size(size).strong();
            ui.label(heading.color(render_ctx.colors.heading)).rect
        }
        NodeKind::Paragraph => ui.label(node.text.as_str()).rect,
        NodeKind::ListItem => {
            ui.horizontal_wrapped(|ui| {
                ui.label("•");
                ui.label(node.text.as_str());
            })
            .response
            .rect
        }
        NodeKind::Section => {
            let rect = ui
                .vertical(|ui| render_children(ui, node, render_ctx, collector))
                .response
                .rect;
            ui.add_space(SECTION_SPACING);
            rect
        }
        NodeKind::Block => {
            ui.vertical(|ui| {
                render_children(ui, node, render_ctx, collector);
                if node.non_empty_id() == Some(COUNTDOWN_HOST_ID) {
                    render_countdown(ui, render_ctx.countdown, render_ctx.countdown_labels, &render_ctx.colors);
                }
            })
            .response
            .rect
        }
    };

    collector.record(node, rect);
}

fn render_children(ui: &mut egui::Ui, node: &ContentNode, render_ctx: &RenderContext, collector: &mut LayoutCollector) {
    if !node.text.is_empty() {
        ui.label(node.text.as_str());
    }
    for child in &node.children {
        render_node(ui, child, render_ctx, collector);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_records_sections_and_anchors() {
        let mut collector = LayoutCollector {
            origin: 50.0,
            ..Default::default()
        };
        let rect = |top: f32, height: f32| egui::Rect::from_min_size(egui::pos2(0.0, top), egui::vec2(800.0, height));

        collector.record(&ContentNode::section("about"), rect(650.0, 400.0));
        collector.record(&ContentNode::block().with_id("countdown"), rect(300.0, 80.0));
        collector.record(&ContentNode::paragraph("no id"), rect(900.0, 20.0));
        collector.record(&ContentNode::section(""), rect(1000.0, 20.0));

        assert_eq!(collector.regions, vec![Region::new("about", 600.0, 400.0)]);
        assert_eq!(
            collector.anchors,
            vec![("about".to_string(), 600.0), ("countdown".to_string(), 250.0)]
        );
    }
}
